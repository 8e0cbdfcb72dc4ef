//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

use crate::config::LimitsConfig;
use crate::error::Result;
use crate::export::import_csv;
use crate::mode::TransportMode;
use crate::session::Session;

/// One leg given on the command line as `MODE,KM[,PASSENGERS]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegSpec {
    /// Transport mode.
    pub mode: TransportMode,
    /// Distance in km.
    pub distance_km: f64,
    /// Occupants including the driver; defaults to 1.
    pub passengers: u32,
}

/// Parse a `MODE,KM[,PASSENGERS]` leg specification.
///
/// # Errors
///
/// Returns a message describing the first malformed part.
pub fn parse_leg_spec(s: &str) -> std::result::Result<LegSpec, String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    let (mode, distance, passengers) = match parts.as_slice() {
        [mode, distance] => (*mode, *distance, None),
        [mode, distance, passengers] => (*mode, *distance, Some(*passengers)),
        _ => return Err(format!("expected MODE,KM[,PASSENGERS], got '{s}'")),
    };

    let mode = parse_mode(mode)?;
    let distance_km = distance
        .parse::<f64>()
        .map_err(|_| format!("invalid distance '{distance}'"))?;
    let passengers = match passengers {
        Some(p) => p
            .parse::<u32>()
            .map_err(|_| format!("invalid passenger count '{p}'"))?,
        None => 1,
    };

    Ok(LegSpec {
        mode,
        distance_km,
        passengers,
    })
}

/// Parse a transport mode label or id.
///
/// # Errors
///
/// Returns the unknown-mode message if nothing matches.
pub fn parse_mode(s: &str) -> std::result::Result<TransportMode, String> {
    s.parse().map_err(|e: crate::Error| e.to_string())
}

/// Legs making up an itinerary, from the command line and/or a CSV file.
#[derive(Debug, Clone, Default, Args)]
pub struct ItineraryArgs {
    /// Add a leg as MODE,KM[,PASSENGERS] (repeatable)
    #[arg(short, long = "leg", value_name = "MODE,KM[,PAX]", value_parser = parse_leg_spec)]
    pub legs: Vec<LegSpec>,

    /// Load legs from a CSV file (Mode,Distance,Passengers)
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<PathBuf>,
}

impl ItineraryArgs {
    /// Build a session holding the file legs followed by the command-line legs.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or any leg is rejected.
    pub fn into_session(self, limits: LimitsConfig) -> Result<Session> {
        let mut session = Session::new(limits);
        if let Some(path) = &self.file {
            for leg in import_csv(path)? {
                session.push(leg)?;
            }
        }
        for spec in self.legs {
            session.add_leg(spec.mode, spec.distance_km, spec.passengers)?;
        }
        Ok(session)
    }
}

/// Modes command arguments.
#[derive(Debug, Args)]
pub struct ModesCommand {
    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Record command arguments.
#[derive(Debug, Args)]
pub struct RecordCommand {
    /// Transport mode (label such as "Car (Petrol)" or id such as car-petrol)
    #[arg(value_parser = parse_mode)]
    pub mode: TransportMode,

    /// Distance in km
    pub distance_km: f64,

    /// Occupants including the driver
    #[arg(short, long, default_value = "1")]
    pub passengers: u32,

    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Report command arguments.
#[derive(Debug, Args)]
pub struct ReportCommand {
    /// Legs to report on
    #[command(flatten)]
    pub itinerary: ItineraryArgs,

    /// Output format
    #[arg(long, value_enum, default_value = "plain")]
    pub format: OutputFormat,
}

/// Export command arguments.
#[derive(Debug, Args)]
pub struct ExportCommand {
    /// Legs to export
    #[command(flatten)]
    pub itinerary: ItineraryArgs,

    /// Output file (defaults to the configured export path)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

/// Output format for commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Plain text output
    #[default]
    Plain,
    /// JSON output
    Json,
}
