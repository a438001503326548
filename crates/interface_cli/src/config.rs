//! CLI configuration

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;

use crate::args::CliArgs;

/// Optional configuration file looked up in the working directory
pub const CONFIG_FILE: &str = "rental-ledger.toml";

/// Prefix of configuration environment variables, e.g. `RENTAL_INPUT_PATH`
pub const ENV_PREFIX: &str = "RENTAL";

/// Which report the CLI writes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportKind {
    /// Delta actions for every modification
    #[default]
    Modifications,
    /// Prices, commission and actions for every booking
    Bookings,
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// CLI configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CliConfig {
    /// Dataset to read
    pub input_path: PathBuf,
    /// Report destination; stdout when absent
    #[serde(default)]
    pub output_path: Option<PathBuf>,
    /// Report to produce
    pub report: ReportKind,
    /// Log level
    pub log_level: String,
    /// Log format
    pub log_format: LogFormat,
    /// Indent the JSON report
    pub pretty_json: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("data/input.json"),
            output_path: None,
            report: ReportKind::Modifications,
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
            pretty_json: true,
        }
    }
}

impl CliConfig {
    /// Loads configuration from defaults, the optional config file and the
    /// environment, in increasing order of precedence
    pub fn load() -> Result<Self, ConfigError> {
        defaults()?
            .add_source(File::with_name(CONFIG_FILE).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// Loads configuration from defaults and the given file only
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        defaults()?
            .add_source(File::from(path))
            .build()?
            .try_deserialize()
    }

    /// Overrides values given on the command line
    pub fn with_overrides(mut self, args: &CliArgs) -> Self {
        if let Some(input) = &args.input {
            self.input_path = input.clone();
        }
        if let Some(output) = &args.output {
            self.output_path = Some(output.clone());
        }
        if let Some(report) = args.report {
            self.report = report;
        }
        if let Some(log_format) = args.log_format {
            self.log_format = log_format;
        }
        if let Some(log_level) = &args.log_level {
            self.log_level = log_level.clone();
        }
        self
    }
}

fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let defaults = CliConfig::default();
    Config::builder()
        .set_default("input_path", defaults.input_path.to_string_lossy().into_owned())?
        .set_default("report", "modifications")?
        .set_default("log_level", defaults.log_level)?
        .set_default("log_format", "pretty")?
        .set_default("pretty_json", defaults.pretty_json)
}
