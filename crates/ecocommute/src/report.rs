//! Itinerary reporting.
//!
//! A [`Report`] bundles every figure shown for an itinerary: totals, the
//! per-mode distance mix, the car-commuter baseline, the eco-score, a
//! tree-offset estimate and the insights. Reports are rebuilt from scratch
//! on every request.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::insight::{analyze, Insight};
use crate::itinerary::Itinerary;
use crate::mode::{TransportMode, CAR_PETROL_FACTOR};
use crate::score::score;

/// kg CO₂ absorbed by one tree over the offset period.
pub const TREE_ABSORPTION_KG: f64 = 0.06;

/// Aggregate figures for an itinerary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// When the report was generated.
    pub generated_at: DateTime<Utc>,
    /// Number of legs.
    pub leg_count: usize,
    /// Total distance in km.
    pub total_distance_km: f64,
    /// Total emissions in kg CO₂.
    pub total_emissions_kg: f64,
    /// Distance travelled per mode, in km.
    pub distance_by_mode: BTreeMap<TransportMode, f64>,
    /// Emissions of a petrol car commuter over the same distance.
    pub baseline_emissions_kg: f64,
    /// Eco-score, 0 to 100.
    pub eco_score: u8,
    /// Trees needed to offset the emissions.
    pub trees_to_offset: u64,
    /// Insights, in rule order.
    pub insights: Vec<Insight>,
}

impl Report {
    /// Build a report for an itinerary.
    #[must_use]
    pub fn from_itinerary(itinerary: &Itinerary) -> Self {
        let total_distance_km = itinerary.total_distance_km();
        let total_emissions_kg = itinerary.total_emissions_kg();

        Self {
            generated_at: Utc::now(),
            leg_count: itinerary.len(),
            total_distance_km,
            total_emissions_kg,
            distance_by_mode: distance_by_mode(itinerary),
            baseline_emissions_kg: baseline_emissions(total_distance_km),
            eco_score: score(total_emissions_kg, total_distance_km),
            trees_to_offset: trees_to_offset(total_emissions_kg),
            insights: analyze(itinerary),
        }
    }

    /// Emissions avoided compared with the car-commuter baseline.
    ///
    /// Negative when the itinerary is dirtier than the baseline.
    #[must_use]
    pub fn savings_vs_baseline_kg(&self) -> f64 {
        self.baseline_emissions_kg - self.total_emissions_kg
    }

    /// Check if the report covers no legs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.leg_count == 0
    }
}

/// Sum distance per mode.
#[must_use]
pub fn distance_by_mode(itinerary: &Itinerary) -> BTreeMap<TransportMode, f64> {
    let mut breakdown = BTreeMap::new();
    for leg in itinerary {
        *breakdown.entry(leg.mode()).or_insert(0.0) += leg.distance_km();
    }
    breakdown
}

/// What an average petrol car commuter would emit over `total_distance_km`.
#[must_use]
pub fn baseline_emissions(total_distance_km: f64) -> f64 {
    total_distance_km * CAR_PETROL_FACTOR
}

/// Whole trees needed to absorb `total_emissions_kg`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn trees_to_offset(total_emissions_kg: f64) -> u64 {
    // Saturating float-to-int cast: negatives and NaN become 0.
    (total_emissions_kg / TREE_ABSORPTION_KG) as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::insight::InsightKind;
    use crate::leg::TripLeg;
    use approx::assert_relative_eq;

    fn itinerary(legs: &[(TransportMode, f64, u32)]) -> Itinerary {
        legs.iter()
            .map(|&(mode, km, pax)| TripLeg::record(mode, km, pax).unwrap())
            .collect()
    }

    fn kinds(report: &Report) -> Vec<InsightKind> {
        report.insights.iter().map(|i| i.kind).collect()
    }

    #[test]
    fn test_empty_report() {
        let report = Report::from_itinerary(&Itinerary::new());
        assert!(report.is_empty());
        assert_relative_eq!(report.total_distance_km, 0.0);
        assert_relative_eq!(report.total_emissions_kg, 0.0);
        assert_relative_eq!(report.baseline_emissions_kg, 0.0);
        assert!(report.distance_by_mode.is_empty());
        assert_eq!(report.eco_score, 0);
        assert_eq!(report.trees_to_offset, 0);
        assert!(report.insights.is_empty());
    }

    #[test]
    fn test_short_petrol_car_trip() {
        let report = Report::from_itinerary(&itinerary(&[(TransportMode::CarPetrol, 3.0, 1)]));

        assert_relative_eq!(report.total_distance_km, 3.0);
        assert_relative_eq!(report.total_emissions_kg, 0.57, epsilon = 1e-12);
        assert_eq!(report.eco_score, 0);
        assert!(kinds(&report).contains(&InsightKind::InefficiencyAlert));
        assert!(!kinds(&report).contains(&InsightKind::CarpoolOpportunity));
    }

    #[test]
    fn test_walking_trip() {
        let report = Report::from_itinerary(&itinerary(&[(TransportMode::WalkCycle, 2.0, 1)]));

        assert_relative_eq!(report.total_emissions_kg, 0.0);
        assert_eq!(report.eco_score, 100);
        assert_eq!(
            kinds(&report),
            vec![InsightKind::HealthBonus, InsightKind::TopTier]
        );
    }

    #[test]
    fn test_long_solo_drive() {
        let report = Report::from_itinerary(&itinerary(&[(TransportMode::CarPetrol, 25.0, 1)]));

        assert!(kinds(&report).contains(&InsightKind::CarpoolOpportunity));
        assert!(!kinds(&report).contains(&InsightKind::InefficiencyAlert));
        assert_eq!(report.trees_to_offset, 79);
    }

    #[test]
    fn test_shared_car_and_train() {
        let report = Report::from_itinerary(&itinerary(&[
            (TransportMode::CarDiesel, 10.0, 2),
            (TransportMode::MetroTrain, 8.0, 1),
        ]));

        assert_relative_eq!(report.total_emissions_kg, 1.09, epsilon = 1e-12);
        assert_eq!(report.distance_by_mode.len(), 2);
        assert_relative_eq!(report.distance_by_mode[&TransportMode::CarDiesel], 10.0);
        assert_relative_eq!(report.distance_by_mode[&TransportMode::MetroTrain], 8.0);
        assert!(kinds(&report).contains(&InsightKind::TopTier));
        assert_relative_eq!(report.baseline_emissions_kg, 3.42, epsilon = 1e-12);
        assert_relative_eq!(report.savings_vs_baseline_kg(), 2.33, epsilon = 1e-12);
        assert_eq!(report.trees_to_offset, 18);
    }

    #[test]
    fn test_distance_by_mode_sums_repeated_modes() {
        let breakdown = distance_by_mode(&itinerary(&[
            (TransportMode::BusDiesel, 4.0, 1),
            (TransportMode::WalkCycle, 1.0, 1),
            (TransportMode::BusDiesel, 6.5, 1),
        ]));
        assert_relative_eq!(breakdown[&TransportMode::BusDiesel], 10.5);
        assert_relative_eq!(breakdown[&TransportMode::WalkCycle], 1.0);
    }

    #[test]
    fn test_trees_to_offset_truncates() {
        assert_eq!(trees_to_offset(0.0), 0);
        assert_eq!(trees_to_offset(0.059), 0);
        assert_eq!(trees_to_offset(0.61), 10);
        assert_eq!(trees_to_offset(1.0), 16);
    }

    #[test]
    fn test_dirtier_than_baseline_has_negative_savings() {
        let report = Report::from_itinerary(&itinerary(&[(TransportMode::RideShare, 10.0, 1)]));
        assert!(report.savings_vs_baseline_kg() < 0.0);
        assert_eq!(report.eco_score, 0);
    }

    #[test]
    fn test_report_serializes() {
        let report = Report::from_itinerary(&itinerary(&[(TransportMode::WalkCycle, 2.0, 1)]));
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["eco_score"], 100);
        assert_eq!(json["distance_by_mode"]["Walk/Cycle"], 2.0);
        assert_eq!(json["insights"][0]["kind"], "health_bonus");
    }
}
