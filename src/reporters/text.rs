//! Text (terminal) reporter with colors and formatting

use crate::models::{RiskLevel, ScanDetails, Verdict};
use anyhow::Result;

/// Risk band colors (ANSI escape codes)
fn risk_color(risk: &RiskLevel) -> &'static str {
    match risk {
        RiskLevel::High => "\x1b[31m",   // Red
        RiskLevel::Medium => "\x1b[33m", // Yellow
        RiskLevel::Low => "\x1b[32m",    // Green
    }
}

/// Reset ANSI color
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

fn artifact_label(details: &ScanDetails) -> &'static str {
    match details {
        ScanDetails::Sms { .. } => "SMS",
        ScanDetails::Call { .. } => "CALL",
        ScanDetails::Email { .. } => "EMAIL",
        ScanDetails::Url { .. } => "URL",
    }
}

/// Render a verdict as formatted terminal output
pub fn render(verdict: &Verdict) -> Result<String> {
    let mut out = String::new();

    let risk_c = risk_color(&verdict.risk_level);

    out.push_str(&format!("\n{BOLD}{}{RESET}\n", verdict.message));
    out.push_str(&format!(
        "{DIM}──────────────────────────────────────{RESET}\n"
    ));
    out.push_str(&format!(
        "Risk: {risk_c}{BOLD}{}{RESET}  Confidence: {BOLD}{:.1}%{RESET}  Type: {}\n",
        verdict.risk_level,
        verdict.confidence * 100.0,
        artifact_label(&verdict.details)
    ));

    match &verdict.details {
        ScanDetails::Sms {
            phone_number,
            text_length,
        } => {
            if let Some(number) = phone_number {
                out.push_str(&format!("{DIM}Sender: {number}{RESET}\n"));
            }
            out.push_str(&format!("{DIM}Text length: {text_length}{RESET}\n"));
        }
        ScanDetails::Call { phone_number } => {
            out.push_str(&format!("{DIM}Number: {phone_number}{RESET}\n"));
        }
        ScanDetails::Email { sender } => {
            if let Some(sender) = sender {
                out.push_str(&format!("{DIM}Sender: {sender}{RESET}\n"));
            }
        }
        ScanDetails::Url { url } => {
            out.push_str(&format!("{DIM}URL: {url}{RESET}\n"));
        }
    }

    Ok(out)
}
