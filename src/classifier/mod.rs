//! Swappable text scoring
//!
//! The engine's text path is defined by the [`TextScorer`] trait so a
//! trained classifier can stand in for the rule tables without changing
//! any verdict composition. The default is [`RuleScorer`]; the optional
//! [`TextClassifier`] is a logistic model over handcrafted text features,
//! trained offline from labeled examples.

pub mod features;
pub mod model;
pub mod train;

pub use features::{FeatureExtractor, Features};
pub use model::{Prediction, TextClassifier};
pub use train::{train, LabeledText, TrainConfig, TrainError, TrainResult};

/// The engine's text scoring contract: `score(text) -> (is_fraud, confidence)`
pub trait TextScorer: Send + Sync {
    fn score(&self, text: &str) -> (bool, f64);
}

/// Default scorer backed by the built-in pattern tables
pub struct RuleScorer;

impl TextScorer for RuleScorer {
    fn score(&self, text: &str) -> (bool, f64) {
        crate::engine::score_text(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_scorer_matches_engine() {
        let scorer = RuleScorer;
        let text = "Congratulations! You are a winner!";
        assert_eq!(scorer.score(text), crate::engine::score_text(text));
    }
}
