//! Shared text risk scorer for SMS and email bodies
//!
//! Sums tier weights for every matching rule, then normalizes the raw
//! score into a [0, 1] confidence. Tiers are evaluated in a fixed order
//! (high, medium, low, safe, then the link/domain/phone heuristics) so
//! runs are reproducible; rules within a tier fire independently.

use super::patterns;

/// Raw score divisor chosen empirically; kept as-is for behavior
/// compatibility.
const SCORE_NORMALIZER: f64 = 8.0;

/// Fraud decision cutoff on normalized confidence
pub(crate) const FRAUD_THRESHOLD: f64 = 0.4;

/// Score free text for fraud/phishing indicators.
///
/// Returns `(is_fraud, confidence)`. Total over all strings: empty text
/// matches nothing and scores 0.
pub fn score_text(text: &str) -> (bool, f64) {
    let lower = text.to_lowercase();

    let mut score: i32 = 0;

    for rule in patterns::high_risk_rules() {
        if rule.pattern.is_match(&lower) {
            score += rule.weight;
        }
    }
    for rule in patterns::medium_risk_rules() {
        if rule.pattern.is_match(&lower) {
            score += rule.weight;
        }
    }
    for rule in patterns::low_risk_rules() {
        if rule.pattern.is_match(&lower) {
            score += rule.weight;
        }
    }
    for rule in patterns::safe_rules() {
        if rule.pattern.is_match(&lower) {
            score += rule.weight;
        }
    }

    // Link heuristics: a bare http:// link is suspicious on its own; the
    // trusted-host discount only applies when no such link is present.
    if patterns::insecure_link_pattern().is_match(&lower) {
        score += 2;
    } else if patterns::trusted_link_pattern().is_match(&lower) {
        score -= 1;
    }

    if patterns::lookalike_domain_pattern().is_match(&lower) {
        score += 2;
    }

    if patterns::callback_number_pattern().is_match(&lower) {
        score += 1;
    }

    let confidence = (score as f64 / SCORE_NORMALIZER).clamp(0.0, 1.0);
    (confidence > FRAUD_THRESHOLD, confidence)
}
