//! `recall` CLI — run recall case files through the decision engine.
//!
//! ## Usage
//!
//! ```sh
//! # Evaluate a full case (stdin → stdout)
//! cat case.json | recall decide
//!
//! # Evaluate from file to file
//! recall decide -i case.json -o decision.json
//!
//! # Check only the revocation date against the person's other recalls
//! recall check-date -i case.json
//!
//! # Show the UAL period a pair of dates would produce
//! recall ual --revocation-date 2024-01-15 --return-to-custody-date 2024-01-25
//! ```
//!
//! Case files use the same camelCase JSON as the upstream adjustments and
//! recall APIs, so captured payloads can be piped straight in.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::io::{self, Read};

use recall_engine::{evaluate, validate_revocation_date, RecallCase, RoutingConfig, UalPeriod};

#[derive(Parser)]
#[command(name = "recall", version, about = "Recall decision engine CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a full case file and print the routing decision
    Decide {
        /// Input case file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Do not route to manual review on unexpected sentence types
        #[arg(long)]
        no_unexpected_sentence_check: bool,
    },
    /// Check only the revocation date against the person's other recalls
    CheckDate {
        /// Input case file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
    /// Show the UAL period a revocation/return date pair would produce
    Ual {
        /// Revocation date (e.g., 2024-01-15)
        #[arg(long)]
        revocation_date: NaiveDate,
        /// Return-to-custody date; omit if continuously in custody
        #[arg(long)]
        return_to_custody_date: Option<NaiveDate>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Decide {
            input,
            output,
            no_unexpected_sentence_check,
        } => {
            let case = read_case(input.as_deref())?;
            let config = RoutingConfig {
                unexpected_sentence_type_check_enabled: !no_unexpected_sentence_check,
            };
            let decision = evaluate(&case, &config).context("failed to evaluate case")?;
            let json = serde_json::to_string_pretty(&decision)?;
            write_output(output.as_deref(), &json)?;
        }

        Commands::CheckDate { input } => {
            let case = read_case(input.as_deref())?;
            let conflict = validate_revocation_date(
                case.revocation_date,
                &case.existing_recalls,
                &case.journey,
            );
            let json = serde_json::to_string_pretty(&serde_json::json!({
                "isValid": conflict.is_none(),
                "errorType": conflict,
            }))?;
            println!("{}", json);
        }

        Commands::Ual {
            revocation_date,
            return_to_custody_date,
        } => {
            let period = UalPeriod::from_recall_dates(revocation_date, return_to_custody_date)
                .context("failed to derive UAL period")?;
            match period {
                Some(period) => println!("{}", serde_json::to_string_pretty(&period)?),
                None => println!("null"),
            }
        }
    }

    Ok(())
}

/// Read and parse a case file from the given path, or stdin if omitted.
fn read_case(path: Option<&str>) -> Result<RecallCase> {
    let content = match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            buf
        }
    };
    serde_json::from_str(&content).context("invalid case JSON")
}

/// Write to the given path, or stdout if omitted.
fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => std::fs::write(path, format!("{}\n", content))
            .with_context(|| format!("failed to write {}", path)),
        None => {
            println!("{}", content);
            Ok(())
        }
    }
}
