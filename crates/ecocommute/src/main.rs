//! `ecocommute` - CLI for the commute carbon calculator
//!
//! This binary records travel legs, prints footprint reports and exports
//! itineraries as CSV.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::io::{self, Write};
use std::thread;

use anyhow::Context;
use clap::Parser;

use ecocommute::cli::render::{write_insights, write_leg, write_modes, write_summary};
use ecocommute::cli::{
    Cli, Command, ConfigCommand, ExportCommand, OutputFormat, RecordCommand, Repl, ReportCommand,
};
use ecocommute::export::export_csv;
use ecocommute::mode::EMISSION_FACTORS;
use ecocommute::{init_logging, Config, Session};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    // Load configuration
    let config = Config::load_from(cli.config.clone())?;

    match cli.command {
        Command::Modes(cmd) => handle_modes(cmd.json),
        Command::Record(cmd) => handle_record(&config, &cmd),
        Command::Report(cmd) => handle_report(&config, cmd),
        Command::Export(cmd) => handle_export(&config, cmd),
        Command::Session => handle_session(config),
        Command::Config(cmd) => handle_config(&config, cmd),
    }
}

fn handle_modes(json: bool) -> anyhow::Result<()> {
    let mut out = io::stdout().lock();
    if json {
        let table: Vec<_> = EMISSION_FACTORS
            .iter()
            .map(|e| {
                serde_json::json!({
                    "mode": e.label,
                    "id": e.id,
                    "category": e.category,
                    "kg_co2_per_km": e.factor,
                })
            })
            .collect();
        writeln!(out, "{}", serde_json::to_string_pretty(&table)?)?;
    } else {
        write_modes(&mut out)?;
    }
    Ok(())
}

fn handle_record(config: &Config, cmd: &RecordCommand) -> anyhow::Result<()> {
    let mut session = Session::new(config.limits.clone());
    let leg = session.add_leg(cmd.mode, cmd.distance_km, cmd.passengers)?;

    let mut out = io::stdout().lock();
    if cmd.json {
        writeln!(out, "{}", serde_json::to_string_pretty(leg)?)?;
    } else {
        write_leg(&mut out, leg)?;
    }
    Ok(())
}

fn handle_report(config: &Config, cmd: ReportCommand) -> anyhow::Result<()> {
    let session = cmd.itinerary.into_session(config.limits.clone())?;
    let report = session.report();

    let mut out = io::stdout().lock();
    match cmd.format {
        OutputFormat::Json => {
            writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
        }
        OutputFormat::Plain => {
            write_summary(&mut out, &report)?;
            if config.report.show_insights && !report.is_empty() {
                writeln!(out)?;
                out.flush()?;
                thread::sleep(config.insight_delay());
                write_insights(&mut out, &report.insights)?;
            }
        }
    }
    Ok(())
}

fn handle_export(config: &Config, cmd: ExportCommand) -> anyhow::Result<()> {
    let session = cmd.itinerary.into_session(config.limits.clone())?;
    let path = cmd.output.unwrap_or_else(|| config.export_path());

    export_csv(session.itinerary(), &path)
        .with_context(|| format!("exporting {} legs", session.itinerary().len()))?;
    println!(
        "Exported {} legs to {}",
        session.itinerary().len(),
        path.display()
    );
    Ok(())
}

fn handle_session(config: Config) -> anyhow::Result<()> {
    let mut repl = Repl::new(config);
    let stdin = io::stdin().lock();
    let mut out = io::stdout().lock();
    repl.run(stdin, &mut out)?;
    Ok(())
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> anyhow::Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Limits]");
                println!("  Min distance (km):  {}", config.limits.min_distance_km);
                println!("  Max distance (km):  {}", config.limits.max_distance_km);
                println!("  Max passengers:     {}", config.limits.max_passengers);
                println!();
                println!("[Report]");
                println!("  Insight delay (ms): {}", config.report.insight_delay_ms);
                println!("  Show insights:      {}", config.report.show_insights);
                println!();
                println!("[Export]");
                println!("  Path:               {}", config.export_path().display());
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            match Config::load_from(Some(path)) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => println!("Configuration error: {e}"),
            }
        }
    }
    Ok(())
}
