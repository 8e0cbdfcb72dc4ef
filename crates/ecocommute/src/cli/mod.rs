//! Command-line interface for ecocommute.
//!
//! This module provides the CLI structure, text rendering and the
//! interactive session used by the `ecocommute` binary.

mod commands;
pub mod render;
mod repl;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{
    parse_leg_spec, parse_mode, ConfigCommand, ExportCommand, ItineraryArgs, LegSpec,
    ModesCommand, OutputFormat, RecordCommand, ReportCommand,
};
pub use repl::Repl;

/// ecocommute - Carbon footprint of your daily commute
///
/// Record the legs of a day's travel and get totals, an eco-score and
/// recommendations based on your travel patterns.
#[derive(Debug, Parser)]
#[command(name = "ecocommute")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List transport modes and their emission factors
    Modes(ModesCommand),

    /// Compute the emissions of a single leg
    Record(RecordCommand),

    /// Report totals, eco-score and recommendations for an itinerary
    Report(ReportCommand),

    /// Export an itinerary as CSV
    Export(ExportCommand),

    /// Build an itinerary interactively
    Session,

    /// View or validate configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        if self.quiet {
            crate::logging::Verbosity::Quiet
        } else {
            match self.verbose {
                0 => crate::logging::Verbosity::Normal,
                1 => crate::logging::Verbosity::Verbose,
                _ => crate::logging::Verbosity::Trace,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mode::TransportMode;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_cli_name() {
        assert_eq!(Cli::command().get_name(), "ecocommute");
    }

    #[test]
    fn test_cli_verify() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbosity_flags() {
        assert_eq!(
            parse(&["ecocommute", "-q", "session"]).verbosity(),
            crate::logging::Verbosity::Quiet
        );
        assert_eq!(
            parse(&["ecocommute", "session"]).verbosity(),
            crate::logging::Verbosity::Normal
        );
        assert_eq!(
            parse(&["ecocommute", "-v", "session"]).verbosity(),
            crate::logging::Verbosity::Verbose
        );
        assert_eq!(
            parse(&["ecocommute", "-vv", "session"]).verbosity(),
            crate::logging::Verbosity::Trace
        );
    }

    #[test]
    fn test_parse_record() {
        let cli = parse(&["ecocommute", "record", "Car (Petrol)", "3", "-p", "2"]);
        match cli.command {
            Command::Record(cmd) => {
                assert_eq!(cmd.mode, TransportMode::CarPetrol);
                assert!((cmd.distance_km - 3.0).abs() < f64::EPSILON);
                assert_eq!(cmd.passengers, 2);
                assert!(!cmd.json);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_record_unknown_mode() {
        assert!(Cli::try_parse_from(["ecocommute", "record", "zeppelin", "3"]).is_err());
    }

    #[test]
    fn test_parse_report_with_legs() {
        let cli = parse(&[
            "ecocommute",
            "report",
            "--leg",
            "car-diesel,10,2",
            "-l",
            "metro-train,8",
            "--format",
            "json",
        ]);
        match cli.command {
            Command::Report(cmd) => {
                assert_eq!(cmd.itinerary.legs.len(), 2);
                assert_eq!(cmd.itinerary.legs[1].mode, TransportMode::MetroTrain);
                assert_eq!(cmd.format, OutputFormat::Json);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_report_bad_leg() {
        assert!(Cli::try_parse_from(["ecocommute", "report", "--leg", "walk"]).is_err());
    }

    #[test]
    fn test_parse_export() {
        let cli = parse(&[
            "ecocommute",
            "export",
            "--file",
            "plan.csv",
            "-o",
            "out.csv",
        ]);
        match cli.command {
            Command::Export(cmd) => {
                assert_eq!(cmd.itinerary.file, Some(PathBuf::from("plan.csv")));
                assert_eq!(cmd.output, Some(PathBuf::from("out.csv")));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_with_config() {
        let cli = parse(&["ecocommute", "-c", "/custom/config.toml", "modes"]);
        assert_eq!(cli.config, Some(PathBuf::from("/custom/config.toml")));
    }

    #[test]
    fn test_parse_config_show() {
        let cli = parse(&["ecocommute", "config", "show", "--json"]);
        assert!(matches!(
            cli.command,
            Command::Config(ConfigCommand::Show { json: true })
        ));
    }
}
