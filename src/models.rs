//! Core data models for Scamscan
//!
//! These models are used throughout the codebase for representing
//! scan verdicts and the input context they echo back to callers.

use serde::{Deserialize, Serialize};

/// Discrete risk bands derived from confidence
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    #[default]
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Map confidence to a risk band using the fixed thresholds.
    ///
    /// >= 0.7 is HIGH, >= 0.4 is MEDIUM, everything below is LOW.
    pub fn from_confidence(confidence: f64) -> Self {
        if confidence >= 0.7 {
            RiskLevel::High
        } else if confidence >= 0.4 {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "LOW"),
            RiskLevel::Medium => write!(f, "MEDIUM"),
            RiskLevel::High => write!(f, "HIGH"),
        }
    }
}

/// Input context echoed back with each verdict.
///
/// These are pass-through fields, not computed risk data. The `type` tag
/// names the artifact kind the scan ran against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ScanDetails {
    #[serde(rename = "SMS")]
    Sms {
        phone_number: Option<String>,
        text_length: usize,
    },
    #[serde(rename = "CALL")]
    Call { phone_number: String },
    #[serde(rename = "EMAIL")]
    Email { sender: Option<String> },
    #[serde(rename = "URL")]
    Url { url: String },
}

/// The result of scanning one artifact
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Verdict {
    pub is_fraud: bool,
    /// Normalized fraud likelihood in [0, 1], rounded to 4 decimal digits
    pub confidence: f64,
    pub risk_level: RiskLevel,
    pub message: String,
    pub details: ScanDetails,
}

impl Verdict {
    /// Build a verdict from a raw confidence value.
    ///
    /// Rounds the stored confidence to 4 decimals and derives the risk band
    /// from the unrounded value.
    pub fn new(is_fraud: bool, confidence: f64, message: String, details: ScanDetails) -> Self {
        Self {
            is_fraud,
            confidence: round4(confidence),
            risk_level: RiskLevel::from_confidence(confidence),
            message,
            details,
        }
    }
}

/// Round to 4 decimal digits for the serialized confidence field
pub fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}
