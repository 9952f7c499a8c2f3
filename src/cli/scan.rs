//! Scan command handlers

use crate::classifier::TextClassifier;
use crate::config::UserConfig;
use crate::engine::ScanEngine;
use crate::intel::ThreatIntel;
use crate::models::Verdict;
use crate::reporters::{self, OutputFormat};
use anyhow::{bail, Context, Result};
use rayon::prelude::*;
use std::path::{Path, PathBuf};

fn build_engine(model: Option<&Path>) -> Result<ScanEngine> {
    match model {
        Some(path) => {
            let classifier = TextClassifier::load(path)
                .with_context(|| format!("failed to load model from {}", path.display()))?;
            Ok(ScanEngine::with_scorer(Box::new(classifier)))
        }
        None => Ok(ScanEngine::new()),
    }
}

fn print_verdict(verdict: &Verdict, format: OutputFormat) -> Result<()> {
    println!("{}", reporters::report(verdict, format)?);
    Ok(())
}

pub fn run_sms(
    text: Option<String>,
    phone: Option<String>,
    file: Option<PathBuf>,
    model: Option<PathBuf>,
    format: OutputFormat,
) -> Result<()> {
    let engine = build_engine(model.as_deref())?;

    if let Some(path) = file {
        return run_sms_batch(&engine, &path, format);
    }

    let Some(text) = text else {
        bail!("provide message TEXT or --file");
    };

    print_verdict(&engine.scan_sms(&text, phone.as_deref()), format)
}

/// Scan a file with one message per line, in parallel.
fn run_sms_batch(engine: &ScanEngine, path: &Path, format: OutputFormat) -> Result<()> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    let lines: Vec<&str> = content.lines().filter(|l| !l.trim().is_empty()).collect();

    let verdicts: Vec<(usize, Verdict)> = lines
        .par_iter()
        .enumerate()
        .map(|(i, line)| (i + 1, engine.scan_sms(line, None)))
        .collect();

    match format {
        OutputFormat::Json => {
            for (_, verdict) in &verdicts {
                println!("{}", serde_json::to_string(verdict)?);
            }
        }
        OutputFormat::Text => {
            for (line_no, verdict) in &verdicts {
                println!(
                    "{:>4}  {:<6}  {:>6.1}%  {}",
                    line_no,
                    verdict.risk_level.to_string(),
                    verdict.confidence * 100.0,
                    verdict.message
                );
            }

            let flagged = verdicts.iter().filter(|(_, v)| v.is_fraud).count();
            let summary = format!("{flagged} of {} messages flagged", verdicts.len());
            let styled = if flagged > 0 {
                console::style(summary).red().bold()
            } else {
                console::style(summary).green()
            };
            println!("\n{styled}");
        }
    }

    Ok(())
}

pub fn run_call(phone_number: &str, format: OutputFormat) -> Result<()> {
    print_verdict(&ScanEngine::new().scan_call(phone_number), format)
}

pub fn run_email(
    subject: &str,
    body: &str,
    sender: Option<&str>,
    format: OutputFormat,
) -> Result<()> {
    print_verdict(&ScanEngine::new().scan_email(subject, body, sender), format)
}

pub fn run_url(url: &str, use_intel: bool, format: OutputFormat) -> Result<()> {
    let mut verdict = ScanEngine::new().scan_url(url);

    if use_intel {
        let config = UserConfig::load()?;
        let intel = ThreatIntel::from_config(&config.intel);
        if intel.enabled() {
            verdict = intel.enhanced_url_check(url).apply(verdict);
        } else {
            tracing::warn!("--intel requested but no API keys are configured");
        }
    }

    print_verdict(&verdict, format)
}
