//! Logistic model for text classification
//!
//! A single-layer logistic regression in pure Rust. Small enough to run
//! in well under a millisecond per text, and serializable to JSON so a
//! trained model can ship as a standalone artifact.

use super::features::{FeatureExtractor, Features};
use super::TextScorer;
use serde::{Deserialize, Serialize};

/// Prediction result
#[derive(Debug, Clone)]
pub struct Prediction {
    /// Probability that the text is fraudulent
    pub fraud_probability: f32,
    /// Verdict at the engine's decision cutoff
    pub is_fraud: bool,
}

/// Decision cutoff shared with the rule scorer
const FRAUD_THRESHOLD: f32 = 0.4;

/// Logistic regression over the handcrafted feature vector
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextClassifier {
    /// Per-feature weights
    weights: Vec<f32>,
    /// Bias term
    bias: f32,
    /// Input feature count
    input_size: usize,
}

impl TextClassifier {
    /// Create a new classifier with small deterministic initial weights
    pub fn new(input_size: usize) -> Self {
        let scale = (2.0 / input_size as f32).sqrt();
        let weights = (0..input_size)
            .map(|i| ((i * 17 + 31) % 100) as f32 / 100.0 * scale - scale / 2.0)
            .collect();

        Self {
            weights,
            bias: 0.0,
            input_size,
        }
    }

    /// Create with pre-trained weights
    pub fn with_weights(weights: Vec<f32>, bias: f32) -> Self {
        let input_size = weights.len();
        Self {
            weights,
            bias,
            input_size,
        }
    }

    /// Load a trained model from JSON
    pub fn load(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }

    /// Save the model to JSON
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        std::fs::write(path, content)
    }

    /// Run inference on an extracted feature vector
    pub fn predict(&self, features: &Features) -> Prediction {
        let mut z = self.bias;
        for (j, &x) in features.values.iter().enumerate() {
            if j < self.weights.len() {
                z += self.weights[j] * x;
            }
        }

        let fraud_probability = sigmoid(z);
        Prediction {
            fraud_probability,
            is_fraud: fraud_probability > FRAUD_THRESHOLD,
        }
    }

    /// Train on a batch of examples (SGD on logistic loss).
    ///
    /// Returns the mean loss over the batch.
    pub fn train_step(&mut self, features: &[Features], labels: &[bool], learning_rate: f32) -> f32 {
        let mut total_loss = 0.0;

        for (feat, &is_fraud) in features.iter().zip(labels.iter()) {
            let mut z = self.bias;
            for (j, &x) in feat.values.iter().enumerate() {
                if j < self.weights.len() {
                    z += self.weights[j] * x;
                }
            }
            let p = sigmoid(z);

            let target = if is_fraud { 1.0 } else { 0.0 };
            let prob = if is_fraud { p } else { 1.0 - p };
            total_loss -= prob.max(1e-7).ln();

            // Gradient of sigmoid + cross-entropy
            let d_z = p - target;
            self.bias -= learning_rate * d_z;
            for (j, &x) in feat.values.iter().enumerate() {
                if j < self.weights.len() {
                    self.weights[j] -= learning_rate * d_z * x;
                }
            }
        }

        total_loss / features.len().max(1) as f32
    }
}

impl Default for TextClassifier {
    fn default() -> Self {
        Self::new(FeatureExtractor::new().feature_count())
    }
}

impl TextScorer for TextClassifier {
    fn score(&self, text: &str) -> (bool, f64) {
        let features = FeatureExtractor::new().extract(text);
        let pred = self.predict(&features);
        (pred.is_fraud, pred.fraud_probability as f64)
    }
}

fn sigmoid(z: f32) -> f32 {
    1.0 / (1.0 + (-z).exp())
}
