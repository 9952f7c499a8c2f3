//! Weighted pattern tables for text risk scoring
//!
//! Rules are grouped into tiers sharing a weight. Tables are compiled once
//! at first use and never mutated, so they are safe for unrestricted
//! concurrent reads.

use regex::Regex;
use std::sync::OnceLock;

/// A compiled matcher plus its score contribution.
///
/// Positive weights raise risk, negative weights lower it.
pub struct PatternRule {
    pub pattern: Regex,
    pub weight: i32,
}

impl PatternRule {
    fn new(pattern: &str, weight: i32) -> Self {
        Self {
            // Table patterns are fixed literals, checked by the tier tests
            pattern: Regex::new(pattern).expect("invalid built-in pattern"),
            weight,
        }
    }
}

static HIGH_RISK: OnceLock<Vec<PatternRule>> = OnceLock::new();
static MEDIUM_RISK: OnceLock<Vec<PatternRule>> = OnceLock::new();
static LOW_RISK: OnceLock<Vec<PatternRule>> = OnceLock::new();
static SAFE: OnceLock<Vec<PatternRule>> = OnceLock::new();

/// High-risk fraud indicators: urgency-plus-suspension, verification
/// demands, prize claims, payment/card-update language.
pub fn high_risk_rules() -> &'static [PatternRule] {
    HIGH_RISK.get_or_init(|| {
        [
            "urgent.*suspend",
            "click.*verify",
            "account.*compromised",
            "won.*prize",
            "claim.*now",
            "act.*immediately",
            "expire.*soon",
            "payment.*failed",
            "update.*card",
            "verify.*identity",
        ]
        .iter()
        .map(|p| PatternRule::new(p, 3))
        .collect()
    })
}

/// Medium-risk indicators: winner language, limited-time pressure,
/// confirmation and suspicious-activity phrasing.
pub fn medium_risk_rules() -> &'static [PatternRule] {
    MEDIUM_RISK.get_or_init(|| {
        [
            "congratulations",
            "winner",
            "limited.*time",
            "offer.*expires",
            "verify.*account",
            "confirm.*details",
            "suspicious.*activity",
        ]
        .iter()
        .map(|p| PatternRule::new(p, 2))
        .collect()
    })
}

/// Low-risk indicators: generic promotional words.
pub fn low_risk_rules() -> &'static [PatternRule] {
    LOW_RISK.get_or_init(|| {
        ["free", "discount", "sale", "promotion", "deal"]
            .iter()
            .map(|p| PatternRule::new(p, 1))
            .collect()
    })
}

/// Safe indicators: transactional and confirmatory language.
pub fn safe_rules() -> &'static [PatternRule] {
    SAFE.get_or_init(|| {
        [
            "thank.*you",
            "receipt",
            "confirmation",
            "order.*shipped",
            "appointment",
            "delivery",
            "statement.*ready",
            "welcome",
            "subscription.*renew",
            "balance.*update",
        ]
        .iter()
        .map(|p| PatternRule::new(p, -2))
        .collect()
    })
}

static INSECURE_LINK: OnceLock<Regex> = OnceLock::new();
static TRUSTED_LINK: OnceLock<Regex> = OnceLock::new();
static LOOKALIKE_DOMAIN: OnceLock<Regex> = OnceLock::new();
static CALLBACK_NUMBER: OnceLock<Regex> = OnceLock::new();
static IPV4_LITERAL: OnceLock<Regex> = OnceLock::new();

/// Bare http:// link anywhere in the text (non-encrypted transport)
pub fn insecure_link_pattern() -> &'static Regex {
    INSECURE_LINK.get_or_init(|| Regex::new(r"http://[^\s]+").unwrap())
}

/// https:// link to a trusted host marker (gov, edu, amazon, google)
pub fn trusted_link_pattern() -> &'static Regex {
    TRUSTED_LINK.get_or_init(|| Regex::new(r"https://[^\s]+\.(gov|edu|amazon|google)").unwrap())
}

/// Typosquatting-style domains: verify/secure/bank followed by .com/.net
pub fn lookalike_domain_pattern() -> &'static Regex {
    LOOKALIKE_DOMAIN.get_or_init(|| Regex::new(r"(verify|secure|bank).*\.(com|net)").unwrap())
}

/// A "call" instruction followed by 10+ digits
pub fn callback_number_pattern() -> &'static Regex {
    CALLBACK_NUMBER.get_or_init(|| Regex::new(r"call.*\+?[0-9]{10,}").unwrap())
}

/// Dotted IPv4 literal, as it appears in raw URLs
pub fn ipv4_literal_pattern() -> &'static Regex {
    IPV4_LITERAL.get_or_init(|| Regex::new(r"\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3}").unwrap())
}

/// Suspicious words checked against the lower-cased URL, +1 each
pub const SUSPICIOUS_URL_WORDS: [&str; 5] = ["verify", "secure", "bank", "login", "account"];
