//! CLI command definitions and handlers

mod scan;
mod serve;
mod train;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Scamscan - rule-based fraud & phishing detection
///
/// Scores SMS messages, phone numbers, emails, and URLs with weighted
/// pattern tables. 100% LOCAL by default - threat-intel lookups only run
/// when you configure API keys and ask for them.
#[derive(Parser, Debug)]
#[command(name = "scamscan")]
#[command(
    version,
    about = "Fraud & phishing detection for SMS, calls, emails, and URLs",
    after_help = "\
Examples:
  scamscan sms \"URGENT: verify your account now!\"    Scan one message
  scamscan sms --file inbox.txt --format json          Batch-scan a file
  scamscan call \"+1 (800) 555-0199\"                   Verify a phone number
  scamscan email --subject \"Prize!\" --body \"...\"      Scan an email
  scamscan url http://192.168.1.1/login                Scan a URL
  scamscan serve --bind 127.0.0.1:8000                 Start the HTTP API
  scamscan train --data labeled.jsonl                  Train the classifier"
)]
pub struct Cli {
    /// Output format: text, json
    #[arg(long, short = 'f', global = true, default_value = "text", value_parser = ["text", "json"])]
    pub format: String,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "info", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan an SMS message for fraud/phishing
    Sms {
        /// Message text (omit when using --file)
        text: Option<String>,

        /// Sender phone number, echoed into the verdict details
        #[arg(long)]
        phone: Option<String>,

        /// Batch mode: scan a file with one message per line
        #[arg(long)]
        file: Option<PathBuf>,

        /// Score with a trained classifier model instead of the rule tables
        #[arg(long)]
        model: Option<PathBuf>,
    },

    /// Verify a phone number
    Call {
        /// Phone number to check
        phone_number: String,
    },

    /// Scan an email for phishing
    Email {
        /// Email subject
        #[arg(long, default_value = "")]
        subject: String,

        /// Email body
        #[arg(long, default_value = "")]
        body: String,

        /// Sender address (enables the sender-domain check)
        #[arg(long)]
        sender: Option<String>,
    },

    /// Scan a URL for malicious indicators
    Url {
        /// URL to scan
        url: String,

        /// Fold in configured threat-intel sources (requires API keys)
        #[arg(long)]
        intel: bool,
    },

    /// Start the HTTP API server
    Serve {
        /// Bind address (overrides config, default 0.0.0.0:8000)
        #[arg(long)]
        bind: Option<String>,
    },

    /// Train the text classifier from labeled examples
    Train {
        /// JSONL training data, one {"text", "is_fraud"} object per line
        #[arg(long)]
        data: PathBuf,

        /// Output model path (default: data dir)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Number of training epochs
        #[arg(long, default_value = "100")]
        epochs: usize,

        /// SGD learning rate
        #[arg(long, default_value = "0.05")]
        learning_rate: f32,
    },
}

/// Dispatch a parsed command line
pub fn run(cli: Cli) -> Result<()> {
    let format = cli.format.parse()?;

    match cli.command {
        Commands::Sms {
            text,
            phone,
            file,
            model,
        } => scan::run_sms(text, phone, file, model, format),
        Commands::Call { phone_number } => scan::run_call(&phone_number, format),
        Commands::Email {
            subject,
            body,
            sender,
        } => scan::run_email(&subject, &body, sender.as_deref(), format),
        Commands::Url { url, intel } => scan::run_url(&url, intel, format),
        Commands::Serve { bind } => serve::run(bind.as_deref()),
        Commands::Train {
            data,
            output,
            epochs,
            learning_rate,
        } => train::run(&data, output, epochs, learning_rate),
    }
}
