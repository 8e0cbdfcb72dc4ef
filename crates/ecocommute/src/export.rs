//! Tabular export and import of itineraries.
//!
//! Itineraries are written as CSV with one row per leg:
//!
//! ```text
//! Mode,Distance,Passengers,Emissions
//! Car (Diesel),10.0,2,0.85
//! Metro/Train,8.0,1,0.24
//! ```
//!
//! On import the `Emissions` column is optional and ignored; every leg is
//! re-recorded from its mode, distance and passenger count.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::itinerary::Itinerary;
use crate::leg::TripLeg;
use crate::mode::TransportMode;

/// One exported CSV row.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct LegRecord {
    /// Transport mode.
    pub mode: TransportMode,
    /// Distance in km.
    pub distance: f64,
    /// Occupants, including the user.
    pub passengers: u32,
    /// The user's share of emissions in kg CO₂.
    pub emissions: f64,
}

impl From<&TripLeg> for LegRecord {
    fn from(leg: &TripLeg) -> Self {
        Self {
            mode: leg.mode(),
            distance: leg.distance_km(),
            passengers: leg.passengers(),
            emissions: leg.emissions_kg(),
        }
    }
}

/// A CSV row as read, before the mode is resolved.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct RawLegRow {
    mode: String,
    distance: f64,
    passengers: u32,
}

/// Write an itinerary as CSV.
///
/// # Errors
///
/// Returns an error if a row cannot be written.
pub fn write_csv<W: Write>(itinerary: &Itinerary, writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for leg in itinerary {
        csv_writer.serialize(LegRecord::from(leg))?;
    }
    // An empty itinerary still gets a header row.
    if itinerary.is_empty() {
        csv_writer.write_record(["Mode", "Distance", "Passengers", "Emissions"])?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Render an itinerary as a CSV string.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_csv_string(itinerary: &Itinerary) -> Result<String> {
    let mut buf = Vec::new();
    write_csv(itinerary, &mut buf)?;
    // Every field is UTF-8, so nothing is lost here.
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Export an itinerary to a CSV file.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn export_csv(itinerary: &Itinerary, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|source| Error::ExportWrite {
        path: path.to_path_buf(),
        source,
    })?;
    write_csv(itinerary, file)?;
    info!(legs = itinerary.len(), path = %path.display(), "Exported itinerary");
    Ok(())
}

/// Read legs from CSV.
///
/// Rows are recorded in file order; the first invalid row aborts the read.
///
/// # Errors
///
/// Returns a CSV error for malformed rows, [`Error::UnknownMode`] for an
/// unrecognised mode, or [`Error::InvalidInput`] for a bad distance or
/// passenger count.
pub fn read_csv<R: Read>(reader: R) -> Result<Vec<TripLeg>> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut legs = Vec::new();
    for row in csv_reader.deserialize::<RawLegRow>() {
        let row = row?;
        legs.push(TripLeg::record_named(&row.mode, row.distance, row.passengers)?);
    }
    debug!(legs = legs.len(), "Read legs from CSV");
    Ok(legs)
}

/// Import legs from a CSV file.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or any row is invalid.
pub fn import_csv(path: &Path) -> Result<Vec<TripLeg>> {
    let file = File::open(path)?;
    read_csv(file)
}
