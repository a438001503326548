//! Command line arguments
//!
//! Every argument is optional; values left out fall back to the loaded
//! [`CliConfig`](crate::config::CliConfig).

use std::path::PathBuf;

use clap::Parser;

use crate::config::{LogFormat, ReportKind};

/// Allocates rentals and booking modifications across driver, owner,
/// insurance, assistance and platform
#[derive(Parser, Debug, Clone, Default, PartialEq, Eq)]
#[command(name = "rental-ledger", version)]
pub struct CliArgs {
    /// Dataset to read (default: data/input.json)
    pub input: Option<PathBuf>,

    /// Report destination (default: stdout)
    pub output: Option<PathBuf>,

    /// Report to produce
    #[arg(long, value_enum)]
    pub report: Option<ReportKind>,

    /// Log format
    #[arg(long, value_enum)]
    pub log_format: Option<LogFormat>,

    /// Log level: trace, debug, info, warn, error
    #[arg(long)]
    pub log_level: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Result<CliArgs, clap::Error> {
        CliArgs::try_parse_from(std::iter::once("rental-ledger").chain(args.iter().copied()))
    }

    #[test]
    fn test_command_definition() {
        CliArgs::command().debug_assert();
    }

    #[test]
    fn test_no_args_overrides_nothing() {
        assert_eq!(parse(&[]).unwrap(), CliArgs::default());
    }

    #[test]
    fn test_positional_paths() {
        let args = parse(&["in.json", "out.json"]).unwrap();
        assert_eq!(args.input, Some(PathBuf::from("in.json")));
        assert_eq!(args.output, Some(PathBuf::from("out.json")));
    }

    #[test]
    fn test_single_path_keeps_stdout() {
        let args = parse(&["in.json"]).unwrap();
        assert_eq!(args.input, Some(PathBuf::from("in.json")));
        assert_eq!(args.output, None);
    }

    #[test]
    fn test_options() {
        let args = parse(&[
            "--report",
            "bookings",
            "--log-format",
            "json",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(args.report, Some(ReportKind::Bookings));
        assert_eq!(args.log_format, Some(LogFormat::Json));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
        assert_eq!(args.input, None);
    }

    #[test]
    fn test_help_is_not_a_dataset_path() {
        let err = parse(&["--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_version_flag() {
        let err = parse(&["--version"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_unknown_flag_rejected() {
        let err = parse(&["--verbose"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn test_unknown_report_rejected() {
        let err = parse(&["--report", "weekly"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
    }

    #[test]
    fn test_extra_positional_rejected() {
        assert!(parse(&["a.json", "b.json", "c.json"]).is_err());
    }
}
