//! Integration tests for the scan engine
//!
//! Exercises the public library API end to end: scenario verdicts,
//! clamping and banding invariants, the email override, and the
//! serialized verdict shape.

use scamscan::{scan_call, scan_email, scan_sms, scan_url, RiskLevel, ScanDetails};

#[test]
fn test_urgent_sms_is_high_risk() {
    let verdict = scan_sms(
        "URGENT: Your account will be suspended. Click here to verify immediately!",
        None,
    );

    assert!(verdict.is_fraud);
    assert!(verdict.confidence >= 0.75);
    assert_eq!(verdict.risk_level, RiskLevel::High);
    assert!(verdict.message.contains("FRAUD DETECTED"));
}

#[test]
fn test_shipping_sms_is_low_risk() {
    let verdict = scan_sms(
        "Your order #12345 has been shipped. Track at: https://tracking.example.com",
        None,
    );

    assert!(!verdict.is_fraud);
    assert!(verdict.confidence <= 0.4);
    assert_eq!(verdict.risk_level, RiskLevel::Low);
    assert!(verdict.message.contains("Safe"));
}

#[test]
fn test_call_scenarios() {
    let short = scan_call("123");
    assert!(short.is_fraud);
    assert_eq!(short.confidence, 0.8);
    assert_eq!(short.risk_level, RiskLevel::High);

    let repeated = scan_call("1112223333");
    assert!(repeated.is_fraud);
    assert_eq!(repeated.confidence, 0.6);
    assert_eq!(repeated.risk_level, RiskLevel::Medium);

    let normal = scan_call("+1 (415) 867-5309");
    assert!(!normal.is_fraud);
    assert_eq!(normal.confidence, 0.2);
    assert_eq!(normal.risk_level, RiskLevel::Low);
}

#[test]
fn test_url_scenarios() {
    let ip_login = scan_url("http://192.168.1.1/login");
    assert!(ip_login.is_fraud);
    assert_eq!(ip_login.confidence, 0.8333);
    assert_eq!(ip_login.risk_level, RiskLevel::High);

    let clean = scan_url("https://amazon.com");
    assert!(!clean.is_fraud);
    assert_eq!(clean.confidence, 0.0);
    assert_eq!(clean.risk_level, RiskLevel::Low);
}

#[test]
fn test_confidence_always_in_range() {
    let inputs = [
        "",
        "free free free",
        "thank you, receipt attached, order shipped, welcome, delivery confirmation",
        "URGENT suspend click verify account compromised won prize claim now act \
         immediately expire soon payment failed update card verify identity \
         congratulations winner limited time offer expires suspicious activity \
         http://a.b call +12345678901",
        "normal message with nothing special",
    ];

    for input in inputs {
        let verdict = scan_sms(input, None);
        assert!(
            (0.0..=1.0).contains(&verdict.confidence),
            "confidence {} out of range for {input:?}",
            verdict.confidence
        );

        // Risk band must agree with the thresholds
        let expected = if verdict.confidence >= 0.7 {
            RiskLevel::High
        } else if verdict.confidence >= 0.4 {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        };
        assert_eq!(verdict.risk_level, expected);
    }
}

#[test]
fn test_scanning_is_idempotent() {
    let text = "Congratulations! You won a prize. Claim now at http://prizes.example";
    let first = scan_sms(text, Some("+15551230000"));
    let second = scan_sms(text, Some("+15551230000"));

    assert_eq!(first.is_fraud, second.is_fraud);
    assert_eq!(first.confidence, second.confidence);
    assert_eq!(first.risk_level, second.risk_level);
    assert_eq!(first.message, second.message);
}

#[test]
fn test_email_override_monotonicity() {
    let subject = "Team offsite";
    let body = "Agenda attached, see you Friday";

    let baseline = scan_email(subject, body, None);
    let short_sender = scan_email(subject, body, Some("hr@company.com"));
    let suspicious = scan_email(subject, body, Some("hr@secure-account-verify-portal.net"));

    // A clean sender changes nothing
    assert_eq!(short_sender.confidence, baseline.confidence);
    assert_eq!(short_sender.is_fraud, baseline.is_fraud);

    // A suspicious long sender domain can only raise the score
    assert!(suspicious.confidence >= baseline.confidence);
    assert!(suspicious.is_fraud);
    assert_eq!(suspicious.confidence, 0.7);
    assert_eq!(suspicious.risk_level, RiskLevel::High);
}

#[test]
fn test_empty_inputs_never_error() {
    let sms = scan_sms("", None);
    assert!(!sms.is_fraud);
    assert_eq!(sms.confidence, 0.0);

    let call = scan_call("");
    assert!(call.is_fraud);
    assert_eq!(call.confidence, 0.8);

    let email = scan_email("", "", None);
    assert!(!email.is_fraud);
    assert_eq!(email.confidence, 0.0);

    let url = scan_url("");
    assert!(!url.is_fraud);
    assert_eq!(url.confidence, 0.0);
}

#[test]
fn test_verdict_serialization_shape() {
    let verdict = scan_sms("hello there", Some("+15550001111"));
    let json = serde_json::to_value(&verdict).unwrap();

    assert!(json["is_fraud"].is_boolean());
    assert!(json["confidence"].is_number());
    assert!(json["risk_level"].is_string());
    assert!(json["message"].is_string());
    assert_eq!(json["details"]["type"], "SMS");
    assert_eq!(json["details"]["phone_number"], "+15550001111");
    assert_eq!(json["details"]["text_length"], 11);

    let call = scan_call("123");
    let json = serde_json::to_value(&call).unwrap();
    assert_eq!(json["details"]["type"], "CALL");
    assert_eq!(json["details"]["phone_number"], "123");

    let email = scan_email("hi", "there", Some("a@b.com"));
    let json = serde_json::to_value(&email).unwrap();
    assert_eq!(json["details"]["type"], "EMAIL");
    assert_eq!(json["details"]["sender"], "a@b.com");

    let url = scan_url("https://example.com");
    let json = serde_json::to_value(&url).unwrap();
    assert_eq!(json["details"]["type"], "URL");
    assert_eq!(json["details"]["url"], "https://example.com");
}

#[test]
fn test_details_echo_matches_input() {
    let verdict = scan_sms("short", Some("+321"));
    assert_eq!(
        verdict.details,
        ScanDetails::Sms {
            phone_number: Some("+321".to_string()),
            text_length: 5,
        }
    );
}

#[test]
fn test_lookalike_domain_raises_text_score() {
    let with_domain = scan_sms("Reset your password at secure-update.com today", None);
    let without = scan_sms("Reset your password today", None);
    assert!(with_domain.confidence > without.confidence);
}

#[test]
fn test_callback_number_heuristic() {
    let with_callback = scan_sms("Account issue, call 18005550199 now", None);
    let without = scan_sms("Account issue", None);
    assert!(with_callback.confidence > without.confidence);
}
