//! Feature extraction for the trained text classifier
//!
//! Handcrafted features over the raw message text: length, word count,
//! urgency/currency/link/phone/email indicators, and character-class
//! ratios. Ratio features over empty text default to 0.

use regex::Regex;
use std::sync::OnceLock;

/// Feature vector for one text
#[derive(Debug, Clone)]
pub struct Features {
    /// Raw feature values
    pub values: Vec<f32>,
}

impl Features {
    pub fn new(values: Vec<f32>) -> Self {
        Self { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

static URGENCY_WORDS: OnceLock<Regex> = OnceLock::new();
static CURRENCY: OnceLock<Regex> = OnceLock::new();
static LINK: OnceLock<Regex> = OnceLock::new();
static PHONE: OnceLock<Regex> = OnceLock::new();
static EMAIL: OnceLock<Regex> = OnceLock::new();

fn urgency_words() -> &'static Regex {
    URGENCY_WORDS.get_or_init(|| {
        Regex::new(r"\b(urgent|immediately|act now|limited time|expire|suspended|verify|confirm)\b")
            .unwrap()
    })
}

fn currency() -> &'static Regex {
    CURRENCY.get_or_init(|| Regex::new(r"[$₹€£]|rupee|dollar|euro").unwrap())
}

fn link() -> &'static Regex {
    LINK.get_or_init(|| Regex::new(r"http|www|\.com|\.in|\.org").unwrap())
}

fn phone() -> &'static Regex {
    PHONE.get_or_init(|| {
        Regex::new(r"[+]?[(]?[0-9]{1,4}[)]?[-\s.]?[(]?[0-9]{1,4}[)]?[-\s.]?[0-9]{1,9}").unwrap()
    })
}

fn email() -> &'static Regex {
    EMAIL.get_or_init(|| Regex::new(r"\S+@\S+").unwrap())
}

/// Extracts classifier features from raw text
pub struct FeatureExtractor;

/// Length normalizer: texts longer than this saturate the feature
const MAX_LENGTH: f32 = 500.0;

/// Word-count normalizer
const MAX_WORDS: f32 = 100.0;

impl FeatureExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Extract the feature vector for one text
    pub fn extract(&self, text: &str) -> Features {
        let lower = text.to_lowercase();
        let char_count = text.chars().count();

        let mut values = Vec::with_capacity(self.feature_count());

        // Size features, normalized
        values.push((char_count as f32).min(MAX_LENGTH) / MAX_LENGTH);
        values.push((text.split_whitespace().count() as f32).min(MAX_WORDS) / MAX_WORDS);

        // Indicator features
        values.push(if urgency_words().is_match(&lower) { 1.0 } else { 0.0 });
        values.push(if currency().is_match(&lower) { 1.0 } else { 0.0 });
        values.push(if text.chars().any(|c| c.is_ascii_digit()) { 1.0 } else { 0.0 });
        values.push(if link().is_match(&lower) { 1.0 } else { 0.0 });
        values.push(if phone().is_match(text) { 1.0 } else { 0.0 });
        values.push(if email().is_match(text) { 1.0 } else { 0.0 });

        // Character-class ratios; 0 for empty text
        if char_count == 0 {
            values.push(0.0);
            values.push(0.0);
        } else {
            let upper = text.chars().filter(|c| c.is_uppercase()).count();
            let digits = text.chars().filter(|c| c.is_ascii_digit()).count();
            values.push(upper as f32 / char_count as f32);
            values.push(digits as f32 / char_count as f32);
        }

        Features::new(values)
    }

    /// Number of features extracted
    pub fn feature_count(&self) -> usize {
        10
    }
}

impl Default for FeatureExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_count_matches() {
        let extractor = FeatureExtractor::new();
        let features = extractor.extract("URGENT: verify your account at http://x.com");
        assert_eq!(features.len(), extractor.feature_count());
    }

    #[test]
    fn test_urgency_and_link_indicators() {
        let extractor = FeatureExtractor::new();
        let features = extractor.extract("URGENT: verify now at http://x.com");
        // urgency at index 2, link at index 5
        assert_eq!(features.values[2], 1.0);
        assert_eq!(features.values[5], 1.0);
    }

    #[test]
    fn test_empty_text_ratios_default_to_zero() {
        let extractor = FeatureExtractor::new();
        let features = extractor.extract("");
        assert!(features.values.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_uppercase_ratio() {
        let extractor = FeatureExtractor::new();
        let features = extractor.extract("ABcd");
        assert!((features.values[8] - 0.5).abs() < 1e-6);
    }
}
