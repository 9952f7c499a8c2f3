//! Scamscan - rule-based fraud & phishing detection
//!
//! A fast, local-first scanner that scores SMS messages, phone numbers,
//! emails, and URLs with weighted pattern tables and composes structured
//! verdicts. Ships as a library, a CLI, and a small HTTP API.

pub mod classifier;
pub mod cli;
pub mod config;
pub mod engine;
pub mod intel;
pub mod models;
pub mod reporters;
pub mod server;

pub use engine::{scan_call, scan_email, scan_sms, scan_url, ScanEngine};
pub use models::{RiskLevel, ScanDetails, Verdict};
