//! Line-oriented interactive session.
//!
//! Reads one command per line, applies it to a [`Session`] and prints the
//! outcome. Rejected legs are reported and the session carries on with its
//! itinerary untouched.

use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::thread;

use tracing::debug;

use super::commands::parse_leg_spec;
use super::render::{write_insights, write_itinerary, write_leg, write_modes, write_summary};
use crate::config::Config;
use crate::error::Result;
use crate::export::export_csv;
use crate::session::Session;

const HELP: &str = "\
Commands:
  add MODE,KM[,PASSENGERS]   record a trip leg (e.g. add car-petrol,12,2)
  list                       show the current itinerary
  report                     show totals, eco-score and recommendations
  export [FILE]              write the itinerary as CSV
  modes                      list transport modes and emission factors
  reset                      discard every leg
  help                       show this help
  quit                       leave the session";

/// Interactive driver around one session.
#[derive(Debug)]
pub struct Repl {
    config: Config,
    session: Session,
}

impl Repl {
    /// Create a driver with an empty session.
    #[must_use]
    pub fn new(config: Config) -> Self {
        let session = Session::new(config.limits.clone());
        Self { config, session }
    }

    /// The session being driven.
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Process commands until `quit` or end of input.
    ///
    /// # Errors
    ///
    /// Returns an error only if reading input or writing output fails;
    /// command failures are printed and the loop continues.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> Result<()> {
        writeln!(out, "EcoCommute session. Type 'help' for commands.")?;
        for line in input.lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            debug!(command = line, "Session command");
            if !self.execute(line, out)? {
                break;
            }
        }
        Ok(())
    }

    /// Run one command. Returns `false` when the session should end.
    fn execute<W: Write>(&mut self, line: &str, out: &mut W) -> Result<bool> {
        let (command, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(c, r)| (c, r.trim()));

        match command.to_ascii_lowercase().as_str() {
            "add" => self.add(rest, out)?,
            "list" => write_itinerary(out, self.session.itinerary())?,
            "report" => self.report(out)?,
            "export" => self.export(rest, out)?,
            "modes" => write_modes(out)?,
            "reset" => {
                self.session.reset();
                writeln!(out, "All trips cleared.")?;
            }
            "help" => writeln!(out, "{HELP}")?,
            "quit" | "exit" => return Ok(false),
            other => writeln!(out, "Unknown command '{other}'. Type 'help' for commands.")?,
        }
        Ok(true)
    }

    fn add<W: Write>(&mut self, spec: &str, out: &mut W) -> Result<()> {
        let spec = match parse_leg_spec(spec) {
            Ok(spec) => spec,
            Err(message) => {
                writeln!(out, "error: {message}")?;
                return Ok(());
            }
        };
        match self
            .session
            .add_leg(spec.mode, spec.distance_km, spec.passengers)
        {
            Ok(leg) => {
                write!(out, "Added: ")?;
                write_leg(out, leg)?;
            }
            Err(e) => writeln!(out, "error: {e}")?,
        }
        Ok(())
    }

    fn report<W: Write>(&self, out: &mut W) -> Result<()> {
        let report = self.session.report();
        write_summary(out, &report)?;
        if self.config.report.show_insights && !report.is_empty() {
            writeln!(out)?;
            out.flush()?;
            thread::sleep(self.config.insight_delay());
            write_insights(out, &report.insights)?;
        }
        Ok(())
    }

    fn export<W: Write>(&self, path: &str, out: &mut W) -> Result<()> {
        if self.session.itinerary().is_empty() {
            writeln!(out, "Nothing to export yet.")?;
            return Ok(());
        }
        let path = if path.is_empty() {
            self.config.export_path()
        } else {
            PathBuf::from(path)
        };
        match export_csv(self.session.itinerary(), &path) {
            Ok(()) => writeln!(out, "Exported to {}", path.display())?,
            Err(e) => writeln!(out, "error: {e}")?,
        }
        Ok(())
    }
}
