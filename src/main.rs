//! Scamscan - fraud & phishing detection CLI
//!
//! Scores SMS messages, phone numbers, emails, and URLs with weighted
//! pattern tables; runs fully offline unless threat-intel keys are set.

use anyhow::Result;
use clap::Parser;
use scamscan::cli;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging; RUST_LOG wins over --log-level
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .init();

    cli::run(cli)
}
