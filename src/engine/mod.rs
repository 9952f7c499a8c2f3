//! Pattern scoring engine
//!
//! The engine turns raw artifact text into a [`Verdict`]: a fraud flag, a
//! normalized confidence, a risk band, and a human-readable message. It is
//! pure and stateless; the pattern tables are compiled once and only read.
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────┐
//! │                    ScanEngine                     │
//! ├───────────────────────────────────────────────────┤
//! │  scan_sms    ──► text scorer ──┐                  │
//! │  scan_email  ──► text scorer ──┤ risk band +      │
//! │  scan_call   ──► digit rules ──┤ message ──► Verdict
//! │  scan_url    ──► url scorer  ──┘                  │
//! └───────────────────────────────────────────────────┘
//! ```
//!
//! The text scorer is pluggable through [`TextScorer`]; the default is the
//! rule table scorer, and a trained classifier can be swapped in without
//! touching any composer logic.

mod call;
mod email;
pub mod patterns;
mod text;
mod url;

pub use call::score_call;
pub use text::score_text;
pub use url::score_url;

use crate::classifier::{RuleScorer, TextScorer};
use crate::models::{ScanDetails, Verdict};

/// Scans artifacts and composes verdicts
pub struct ScanEngine {
    scorer: Box<dyn TextScorer>,
}

impl Default for ScanEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ScanEngine {
    /// Create an engine backed by the built-in rule tables
    pub fn new() -> Self {
        Self {
            scorer: Box::new(RuleScorer),
        }
    }

    /// Create an engine backed by a custom text scorer (e.g. a trained
    /// classifier). Call and URL scoring are unaffected.
    pub fn with_scorer(scorer: Box<dyn TextScorer>) -> Self {
        Self { scorer }
    }

    /// Scan an SMS for fraud/phishing.
    pub fn scan_sms(&self, text: &str, phone_number: Option<&str>) -> Verdict {
        let (is_fraud, confidence) = self.scorer.score(text);

        let message = if is_fraud {
            format!(
                "⚠️ FRAUD DETECTED - High risk of phishing/scam (Confidence: {:.1}%)",
                confidence * 100.0
            )
        } else {
            format!(
                "✅ Safe - No threats detected (Confidence: {:.1}%)",
                confidence * 100.0
            )
        };

        Verdict::new(
            is_fraud,
            confidence,
            message,
            ScanDetails::Sms {
                phone_number: phone_number.map(str::to_string),
                text_length: text.chars().count(),
            },
        )
    }

    /// Verify a phone number.
    pub fn scan_call(&self, phone_number: &str) -> Verdict {
        let (is_fraud, confidence) = call::score_call(phone_number);

        let message = if is_fraud {
            format!("⚠️ SCAM NUMBER (Confidence: {:.1}%)", confidence * 100.0)
        } else {
            format!("✅ Safe Number (Confidence: {:.1}%)", confidence * 100.0)
        };

        Verdict::new(
            is_fraud,
            confidence,
            message,
            ScanDetails::Call {
                phone_number: phone_number.to_string(),
            },
        )
    }

    /// Scan an email for phishing.
    ///
    /// Subject and body are scored together. A suspicious sender domain
    /// forces the verdict to fraud with at least 0.7 confidence; the
    /// override never lowers a score the text already earned.
    pub fn scan_email(&self, subject: &str, body: &str, sender: Option<&str>) -> Verdict {
        let full_text = format!("{subject} {body}");
        let (mut is_fraud, mut confidence) = self.scorer.score(&full_text);

        if let Some(sender) = sender {
            if email::has_suspicious_sender_domain(sender) {
                confidence = confidence.max(email::SENDER_OVERRIDE_CONFIDENCE);
                is_fraud = true;
            }
        }

        let message = if is_fraud {
            format!("⚠️ PHISHING EMAIL (Confidence: {:.1}%)", confidence * 100.0)
        } else {
            format!("✅ Safe Email (Confidence: {:.1}%)", confidence * 100.0)
        };

        Verdict::new(
            is_fraud,
            confidence,
            message,
            ScanDetails::Email {
                sender: sender.map(str::to_string),
            },
        )
    }

    /// Scan a URL for malicious indicators.
    pub fn scan_url(&self, url: &str) -> Verdict {
        let (is_fraud, confidence) = url::score_url(url);

        let message = if is_fraud {
            format!("⚠️ MALICIOUS URL (Confidence: {:.1}%)", confidence * 100.0)
        } else {
            format!("✅ Safe URL (Confidence: {:.1}%)", confidence * 100.0)
        };

        Verdict::new(
            is_fraud,
            confidence,
            message,
            ScanDetails::Url {
                url: url.to_string(),
            },
        )
    }
}

/// Scan an SMS with the default rule scorer.
pub fn scan_sms(text: &str, phone_number: Option<&str>) -> Verdict {
    ScanEngine::new().scan_sms(text, phone_number)
}

/// Verify a phone number with the default rules.
pub fn scan_call(phone_number: &str) -> Verdict {
    ScanEngine::new().scan_call(phone_number)
}

/// Scan an email with the default rule scorer.
pub fn scan_email(subject: &str, body: &str, sender: Option<&str>) -> Verdict {
    ScanEngine::new().scan_email(subject, body, sender)
}

/// Scan a URL with the default rules.
pub fn scan_url(url: &str) -> Verdict {
    ScanEngine::new().scan_url(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RiskLevel;

    #[test]
    fn test_sms_verdict_echoes_context() {
        let verdict = scan_sms("hello", Some("+15551234567"));
        assert!(!verdict.is_fraud);
        assert_eq!(
            verdict.details,
            ScanDetails::Sms {
                phone_number: Some("+15551234567".to_string()),
                text_length: 5,
            }
        );
    }

    #[test]
    fn test_sms_fraud_message() {
        let verdict =
            scan_sms("URGENT: account suspended. Click to verify your identity now!", None);
        assert!(verdict.is_fraud);
        assert!(verdict.message.starts_with("⚠️ FRAUD DETECTED"));
        assert!(verdict.message.contains('%'));
    }

    #[test]
    fn test_call_verdict() {
        let verdict = scan_call("123");
        assert!(verdict.is_fraud);
        assert_eq!(verdict.confidence, 0.8);
        assert_eq!(verdict.risk_level, RiskLevel::High);
        assert!(verdict.message.starts_with("⚠️ SCAM NUMBER"));
    }

    #[test]
    fn test_email_sender_override_is_monotonic() {
        let plain = scan_email("Team lunch", "See you at noon", None);
        assert!(!plain.is_fraud);

        let overridden = scan_email(
            "Team lunch",
            "See you at noon",
            Some("it@secure-mail-verification-portal.com"),
        );
        assert!(overridden.is_fraud);
        assert_eq!(overridden.confidence, 0.7);
        assert!(overridden.confidence >= plain.confidence);
    }

    #[test]
    fn test_email_override_never_lowers_text_score() {
        // Text already above 0.7; the 0.7 floor must not pull it down
        let body = "URGENT suspend! Click to verify identity. Account compromised. \
                    You won a prize, claim now!";
        let without = scan_email("Alert", body, None);
        let with = scan_email("Alert", body, Some("x@secure-verification-center.net"));
        assert!(with.confidence >= without.confidence);
        assert_eq!(with.confidence, 1.0);
    }

    #[test]
    fn test_url_verdict_high_risk() {
        let verdict = scan_url("http://192.168.1.1/login");
        assert!(verdict.is_fraud);
        assert_eq!(verdict.confidence, 0.8333);
        assert_eq!(verdict.risk_level, RiskLevel::High);
    }

    #[test]
    fn test_url_verdict_safe() {
        let verdict = scan_url("https://amazon.com");
        assert!(!verdict.is_fraud);
        assert_eq!(verdict.confidence, 0.0);
        assert_eq!(verdict.risk_level, RiskLevel::Low);
        assert!(verdict.message.starts_with("✅ Safe URL"));
    }

    #[test]
    fn test_custom_scorer_swaps_in() {
        struct AlwaysFraud;
        impl TextScorer for AlwaysFraud {
            fn score(&self, _text: &str) -> (bool, f64) {
                (true, 0.9)
            }
        }

        let engine = ScanEngine::with_scorer(Box::new(AlwaysFraud));
        let verdict = engine.scan_sms("anything", None);
        assert!(verdict.is_fraud);
        assert_eq!(verdict.confidence, 0.9);

        // Call and URL paths ignore the text scorer
        let verdict = engine.scan_url("https://amazon.com");
        assert!(!verdict.is_fraud);
    }
}
