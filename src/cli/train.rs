//! Classifier training command handler

use crate::classifier::{self, TrainConfig};
use anyhow::Result;
use std::path::{Path, PathBuf};

pub fn run(data: &Path, output: Option<PathBuf>, epochs: usize, learning_rate: f32) -> Result<()> {
    let config = TrainConfig {
        epochs,
        learning_rate,
        ..Default::default()
    };

    let result = classifier::train(&config, data, output)?;

    println!(
        "Trained {} epochs: loss {:.4}, accuracy {:.1}%",
        result.epochs,
        result.train_loss,
        result.train_accuracy * 100.0
    );
    if let Some(val_acc) = result.val_accuracy {
        println!("Validation accuracy: {:.1}%", val_acc * 100.0);
    }
    println!("Model saved to {}", result.model_path.display());

    Ok(())
}
