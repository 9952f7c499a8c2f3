//! URL risk scorer
//!
//! URLs get their own scorer rather than the text scorer: the structural
//! signals (IP literals, scheme, length, subdomain nesting) have a
//! different risk profile than prose.

use super::patterns;

/// Raw score divisor; empirical, kept as-is for behavior compatibility.
const SCORE_NORMALIZER: f64 = 6.0;

/// Score a URL.
///
/// Returns `(is_fraud, confidence)`. Keyword checks run against the
/// lower-cased URL; the IPv4 and scheme checks against the raw input.
pub fn score_url(url: &str) -> (bool, f64) {
    let url_lower = url.to_lowercase();

    let mut score: i32 = 0;

    // Legitimate services virtually never expose bare IP literals
    if patterns::ipv4_literal_pattern().is_match(url) {
        score += 3;
    }

    for word in patterns::SUSPICIOUS_URL_WORDS {
        if url_lower.contains(word) {
            score += 1;
        }
    }

    if url.starts_with("http://") {
        score += 1;
    }

    // Long obfuscated URLs are a known evasion technique
    if url.chars().count() > 50 {
        score += 1;
    }

    // Excessive subdomain nesting
    if url.matches('.').count() > 3 {
        score += 1;
    }

    let confidence = (score as f64 / SCORE_NORMALIZER).min(1.0);
    (confidence > super::text::FRAUD_THRESHOLD, confidence)
}
