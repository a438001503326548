//! Rental Ledger - CLI Binary
//!
//! Reads a dataset of vehicles, bookings and modifications and writes the
//! per-party ledger actions as JSON.
//!
//! # Usage
//!
//! ```bash
//! # Modifications report for data/input.json, written to stdout
//! cargo run --bin rental-ledger
//!
//! # Explicit input and output paths
//! cargo run --bin rental-ledger -- data/input.json data/output.json
//!
//! # Bookings report with JSON logs
//! cargo run --bin rental-ledger -- --report bookings --log-format json
//!
//! # All arguments
//! cargo run --bin rental-ledger -- --help
//! ```
//!
//! Command line arguments take precedence over the environment, which takes
//! precedence over `rental-ledger.toml`.
//!
//! # Environment Variables
//!
//! * `RENTAL_INPUT_PATH` - Dataset path (default: data/input.json)
//! * `RENTAL_OUTPUT_PATH` - Output path (default: stdout)
//! * `RENTAL_REPORT` - `modifications` or `bookings` (default: modifications)
//! * `RENTAL_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)
//! * `RENTAL_LOG_FORMAT` - `pretty` or `json` (default: pretty)
//! * `RENTAL_PRETTY_JSON` - Indent the report (default: true)

use std::io::Write;

use anyhow::Context;
use clap::Parser;
use interface_cli::config::{CliConfig, LogFormat};
use interface_cli::CliArgs;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    // Load .env file if present
    dotenvy::dotenv().ok();

    let config = CliConfig::load()
        .context("Failed to load configuration")?
        .with_overrides(&args);

    init_tracing(&config.log_level, config.log_format);

    tracing::info!(
        input = %config.input_path.display(),
        report = ?config.report,
        "Starting rental ledger"
    );

    let output = interface_cli::run(&config)
        .with_context(|| format!("Failed to process {}", config.input_path.display()))?;

    match &config.output_path {
        Some(path) => {
            std::fs::write(path, output + "\n")
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!(output = %path.display(), "Report written");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", output).context("Failed to write to stdout")?;
        }
    }

    Ok(())
}

/// Initializes the tracing subscriber on stderr, leaving stdout to the report.
///
/// `RUST_LOG` takes precedence over the configured level.
fn init_tracing(log_level: &str, format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let (pretty, json) = match format {
        LogFormat::Pretty => (
            Some(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            ),
            None,
        ),
        LogFormat::Json => (
            None,
            Some(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            ),
        ),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(pretty)
        .with(json)
        .init();
}
