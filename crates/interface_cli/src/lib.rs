//! Command-line Layer
//!
//! This crate reads a rental dataset, prices its bookings and writes the
//! resulting ledger actions as JSON.
//!
//! # Architecture
//!
//! - **Config**: Defaults, optional `rental-ledger.toml`, `RENTAL_*` environment
//! - **Args**: Command line overrides parsed with clap, applied over the config
//! - **DTOs**: Dataset input records and report output shapes
//! - **Dataset**: Parsing and referential integrity checks
//! - **Report**: Bookings and modifications reports
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_cli::{run, config::CliConfig};
//!
//! let json = run(&CliConfig::load()?)?;
//! ```

pub mod args;
pub mod config;
pub mod dataset;
pub mod dto;
pub mod error;
pub mod report;

use domain_rental::PricingEngine;

use crate::config::CliConfig;
use crate::dataset::Dataset;

pub use args::CliArgs;
pub use dataset::ResolvedDataset;
pub use error::CliError;
pub use report::{bookings_report, modifications_report, render};

/// Loads the configured dataset and renders the configured report
pub fn run(config: &CliConfig) -> Result<String, CliError> {
    let dataset = Dataset::from_path(&config.input_path)?.resolve()?;
    render(
        &dataset,
        &PricingEngine::default(),
        config.report,
        config.pretty_json,
    )
}
