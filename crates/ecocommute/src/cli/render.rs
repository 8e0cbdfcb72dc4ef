//! Plain-text rendering of tables, legs and reports.

use std::io::{self, Write};

use crate::insight::{Insight, Severity};
use crate::itinerary::Itinerary;
use crate::leg::TripLeg;
use crate::mode::EMISSION_FACTORS;
use crate::report::Report;
use crate::score::MAX_SCORE;

/// Print the emission factor table.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_modes<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{:<16} {:<14} {:<9} kg CO2/km", "Mode", "Id", "Category")?;
    writeln!(out, "{}", "-".repeat(50))?;
    for entry in &EMISSION_FACTORS {
        writeln!(
            out,
            "{:<16} {:<14} {:<9} {:.2}",
            entry.label,
            entry.id,
            entry.category.to_string(),
            entry.factor
        )?;
    }
    Ok(())
}

/// Print a single leg.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_leg<W: Write>(out: &mut W, leg: &TripLeg) -> io::Result<()> {
    writeln!(
        out,
        "{} ({} km, {} aboard): {:.2} kg CO2",
        leg.mode(),
        leg.distance_km(),
        leg.passengers(),
        leg.emissions_kg()
    )
}

/// Print the itinerary as a table.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_itinerary<W: Write>(out: &mut W, itinerary: &Itinerary) -> io::Result<()> {
    if itinerary.is_empty() {
        return writeln!(out, "List is empty.");
    }
    writeln!(
        out,
        "{:>3}  {:<16} {:>9} {:>10} {:>13}",
        "#", "Mode", "Distance", "Passengers", "Emissions"
    )?;
    for (i, leg) in itinerary.iter().enumerate() {
        writeln!(
            out,
            "{:>3}  {:<16} {:>6.1} km {:>10} {:>10.2} kg",
            i + 1,
            leg.mode().label(),
            leg.distance_km(),
            leg.passengers(),
            leg.emissions_kg()
        )?;
    }
    Ok(())
}

/// Print the headline figures of a report.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_summary<W: Write>(out: &mut W, report: &Report) -> io::Result<()> {
    if report.is_empty() {
        writeln!(out, "No data to analyze yet. Add your first trip leg.")?;
        return Ok(());
    }

    writeln!(out, "Total Distance:   {:.1} km", report.total_distance_km)?;
    writeln!(out, "Total Footprint:  {:.2} kg CO2", report.total_emissions_kg)?;
    writeln!(out, "Eco-Score:        {}/{MAX_SCORE}", report.eco_score)?;
    writeln!(out, "Trees to Offset:  {}", report.trees_to_offset)?;
    writeln!(out)?;
    writeln!(out, "Emissions vs Average Car Commuter")?;
    writeln!(out, "  Your itinerary:    {:.2} kg", report.total_emissions_kg)?;
    writeln!(out, "  Avg. car commuter: {:.2} kg", report.baseline_emissions_kg)?;
    writeln!(out, "  Saved:             {:.2} kg", report.savings_vs_baseline_kg())?;
    writeln!(out)?;
    writeln!(out, "Transport Mix")?;
    for (mode, distance) in &report.distance_by_mode {
        writeln!(out, "  {:<16} {distance:.1} km", mode.label())?;
    }
    Ok(())
}

/// Print the insight list.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_insights<W: Write>(out: &mut W, insights: &[Insight]) -> io::Result<()> {
    writeln!(out, "Recommendations")?;
    if insights.is_empty() {
        writeln!(out, "  Nothing to flag for this itinerary.")?;
    }
    for insight in insights {
        let marker = match insight.severity {
            Severity::Alert => "!",
            Severity::Opportunity => "*",
            Severity::Positive => "+",
        };
        writeln!(out, "  [{marker}] {insight}")?;
    }
    Ok(())
}
