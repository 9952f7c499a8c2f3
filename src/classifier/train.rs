//! Offline training for the text classifier
//!
//! Reads labeled examples from a JSONL file (one `{"text", "is_fraud"}`
//! object per line), trains the logistic model, and writes the model
//! artifact to disk. Entirely separate from the scan path; the engine
//! never depends on a trained model being present.

use super::features::{FeatureExtractor, Features};
use super::model::TextClassifier;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Errors from dataset loading and training
#[derive(Error, Debug)]
pub enum TrainError {
    #[error("failed to read training data from {path}: {source}")]
    DatasetIo {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid example on line {line}: {source}")]
    InvalidExample {
        line: usize,
        source: serde_json::Error,
    },

    #[error("need at least {min} labeled examples, found {found}. Label more texts first.")]
    TooFewExamples { min: usize, found: usize },

    #[error("failed to write model to {path}: {source}")]
    SaveFailed {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// One labeled training example
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabeledText {
    pub text: String,
    pub is_fraud: bool,
}

/// Training configuration
#[derive(Debug, Clone)]
pub struct TrainConfig {
    /// Learning rate
    pub learning_rate: f32,
    /// Number of epochs
    pub epochs: usize,
    /// Batch size
    pub batch_size: usize,
    /// Validation split (0.0 - 1.0)
    pub val_split: f32,
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            learning_rate: 0.05,
            epochs: 100,
            batch_size: 32,
            val_split: 0.2,
        }
    }
}

/// Training result
#[derive(Debug)]
pub struct TrainResult {
    /// Final training loss
    pub train_loss: f32,
    /// Training accuracy
    pub train_accuracy: f32,
    /// Validation accuracy (if val_split > 0)
    pub val_accuracy: Option<f32>,
    /// Number of epochs trained
    pub epochs: usize,
    /// Path to the saved model
    pub model_path: PathBuf,
}

/// Default location for the trained model artifact
pub fn default_model_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("scamscan")
        .join("classifier_model.json")
}

/// Minimum dataset size worth fitting
const MIN_EXAMPLES: usize = 10;

/// Load labeled examples from a JSONL file
pub fn load_dataset(path: &Path) -> Result<Vec<LabeledText>, TrainError> {
    let content = std::fs::read_to_string(path).map_err(|source| TrainError::DatasetIo {
        path: path.to_path_buf(),
        source,
    })?;

    let mut examples = Vec::new();
    for (i, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let example: LabeledText =
            serde_json::from_str(line).map_err(|source| TrainError::InvalidExample {
                line: i + 1,
                source,
            })?;
        examples.push(example);
    }
    Ok(examples)
}

/// Train the classifier on a labeled dataset
pub fn train(
    config: &TrainConfig,
    data_path: &Path,
    output: Option<PathBuf>,
) -> Result<TrainResult, TrainError> {
    let examples = load_dataset(data_path)?;

    if examples.len() < MIN_EXAMPLES {
        return Err(TrainError::TooFewExamples {
            min: MIN_EXAMPLES,
            found: examples.len(),
        });
    }

    info!("Loaded {} labeled examples", examples.len());

    // Convert to features
    let extractor = FeatureExtractor::new();
    let mut data: Vec<(Features, bool)> = examples
        .iter()
        .map(|ex| (extractor.extract(&ex.text), ex.is_fraud))
        .collect();

    // Shuffle
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};
    let mut hasher = DefaultHasher::new();
    std::time::SystemTime::now().hash(&mut hasher);
    let seed = hasher.finish() as usize;

    for i in (1..data.len()).rev() {
        let j = (seed + i * 17) % (i + 1);
        data.swap(i, j);
    }

    // Split train/val
    let val_size = (data.len() as f32 * config.val_split) as usize;
    let (val_data, train_data) = data.split_at(val_size);

    info!(
        "Training: {} examples, Validation: {} examples",
        train_data.len(),
        val_data.len()
    );

    let mut model = TextClassifier::new(extractor.feature_count());

    // Training loop
    let mut train_loss = 0.0;

    for epoch in 0..config.epochs {
        let mut epoch_loss = 0.0;
        let mut correct = 0;

        for chunk in train_data.chunks(config.batch_size) {
            let features: Vec<_> = chunk.iter().map(|(f, _)| f.clone()).collect();
            let labels: Vec<_> = chunk.iter().map(|(_, l)| *l).collect();

            let loss = model.train_step(&features, &labels, config.learning_rate);
            epoch_loss += loss * chunk.len() as f32;

            for (f, label) in chunk {
                if model.predict(f).is_fraud == *label {
                    correct += 1;
                }
            }
        }

        train_loss = epoch_loss / train_data.len() as f32;
        let train_acc = correct as f32 / train_data.len() as f32;

        let val_acc = if val_data.is_empty() {
            None
        } else {
            let correct = val_data
                .iter()
                .filter(|(f, label)| model.predict(f).is_fraud == *label)
                .count();
            Some(correct as f32 / val_data.len() as f32)
        };

        if epoch % 10 == 0 || epoch == config.epochs - 1 {
            info!(
                "Epoch {}/{}: train_loss={:.4}, train_acc={:.2}%, val_acc={:.2}%",
                epoch + 1,
                config.epochs,
                train_loss,
                train_acc * 100.0,
                val_acc.unwrap_or(0.0) * 100.0
            );
        }
    }

    // Save model
    let model_path = output.unwrap_or_else(default_model_path);
    if let Some(parent) = model_path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| TrainError::SaveFailed {
            path: model_path.clone(),
            source,
        })?;
    }
    model.save(&model_path).map_err(|source| TrainError::SaveFailed {
        path: model_path.clone(),
        source,
    })?;

    info!("Model saved to {}", model_path.display());

    // Final evaluation
    let correct = train_data
        .iter()
        .filter(|(f, label)| model.predict(f).is_fraud == *label)
        .count();
    let train_accuracy = correct as f32 / train_data.len() as f32;

    let val_accuracy = if val_data.is_empty() {
        None
    } else {
        let correct = val_data
            .iter()
            .filter(|(f, label)| model.predict(f).is_fraud == *label)
            .count();
        Some(correct as f32 / val_data.len() as f32)
    };

    Ok(TrainResult {
        train_loss,
        train_accuracy,
        val_accuracy,
        epochs: config.epochs,
        model_path,
    })
}
