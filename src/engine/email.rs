//! Email-specific helpers
//!
//! The email verdict runs the shared text scorer over subject and body,
//! then applies a sender-domain override that can only raise risk.

/// Confidence floor forced when the sender domain looks like phishing
pub(crate) const SENDER_OVERRIDE_CONFIDENCE: f64 = 0.7;

/// Keywords that mark a sender domain as suspicious
const SUSPICIOUS_DOMAIN_WORDS: [&str; 3] = ["verify", "secure", "bank"];

/// Sender domains longer than this are treated as obfuscated
const SUSPICIOUS_DOMAIN_MIN_LEN: usize = 20;

/// Whether the sender address carries a strong phishing signal.
///
/// The domain is the substring after the first `@`, lower-cased. It must
/// contain one of the suspicious keywords AND exceed the length cutoff;
/// short legitimate domains like `bankofamerica.com` stay under it.
pub(crate) fn has_suspicious_sender_domain(sender: &str) -> bool {
    if !sender.contains('@') {
        return false;
    }
    let domain = sender.split('@').nth(1).unwrap_or("").to_lowercase();
    SUSPICIOUS_DOMAIN_WORDS.iter().any(|w| domain.contains(w))
        && domain.chars().count() > SUSPICIOUS_DOMAIN_MIN_LEN
}
