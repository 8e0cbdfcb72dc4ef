//! Trip legs and the leg recorder.
//!
//! A [`TripLeg`] is one journey segment travelled with a single mode. Its
//! emissions are derived once, when the leg is recorded, and the leg is
//! immutable afterwards.

use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::mode::TransportMode;

/// One recorded journey segment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripLeg {
    mode: TransportMode,
    distance_km: f64,
    passengers: u32,
    emissions_kg: f64,
}

impl TripLeg {
    /// Record a leg, computing the user's share of its emissions.
    ///
    /// Emissions for the whole vehicle are split evenly between all
    /// occupants, so `passengers` includes the person reporting the trip.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if `distance_km` is not a positive
    /// finite number or `passengers` is zero.
    pub fn record(mode: TransportMode, distance_km: f64, passengers: u32) -> Result<Self> {
        if !distance_km.is_finite() || distance_km <= 0.0 {
            warn!(%mode, distance_km, "Rejected leg with non-positive distance");
            return Err(Error::invalid_input(
                "distance_km",
                format!("must be a positive number, got {distance_km}"),
            ));
        }
        if passengers == 0 {
            warn!(%mode, "Rejected leg with zero passengers");
            return Err(Error::invalid_input(
                "passengers",
                "must be at least 1 (count includes the driver)",
            ));
        }

        let emissions_kg = mode.factor() * distance_km / f64::from(passengers);
        debug!(%mode, distance_km, passengers, emissions_kg, "Recorded leg");

        Ok(Self {
            mode,
            distance_km,
            passengers,
            emissions_kg,
        })
    }

    /// Record a leg from a mode identifier.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownMode`] if `mode` is not in the emission factor
    /// table, or [`Error::InvalidInput`] as for [`TripLeg::record`].
    pub fn record_named(mode: &str, distance_km: f64, passengers: u32) -> Result<Self> {
        Self::record(mode.parse()?, distance_km, passengers)
    }

    /// Transport mode.
    #[must_use]
    pub fn mode(&self) -> TransportMode {
        self.mode
    }

    /// Distance travelled in km.
    #[must_use]
    pub fn distance_km(&self) -> f64 {
        self.distance_km
    }

    /// Total occupants, including the user.
    #[must_use]
    pub fn passengers(&self) -> u32 {
        self.passengers
    }

    /// The user's share of the leg's emissions, in kg CO₂.
    #[must_use]
    pub fn emissions_kg(&self) -> f64 {
        self.emissions_kg
    }

    /// Whether the user was the only occupant.
    #[must_use]
    pub fn is_solo(&self) -> bool {
        self.passengers == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_record_computes_emissions() {
        let leg = TripLeg::record(TransportMode::CarPetrol, 3.0, 1).unwrap();
        assert_relative_eq!(leg.emissions_kg(), 0.57, epsilon = 1e-12);
        assert_eq!(leg.mode(), TransportMode::CarPetrol);
        assert_relative_eq!(leg.distance_km(), 3.0);
        assert_eq!(leg.passengers(), 1);
        assert!(leg.is_solo());
    }

    #[test]
    fn test_record_splits_between_passengers() {
        let leg = TripLeg::record(TransportMode::CarDiesel, 10.0, 2).unwrap();
        assert_relative_eq!(leg.emissions_kg(), 0.85, epsilon = 1e-12);
        assert!(!leg.is_solo());
    }

    #[test]
    fn test_emissions_match_formula_for_every_mode() {
        for mode in TransportMode::ALL {
            for passengers in 1..=6 {
                let leg = TripLeg::record(mode, 12.5, passengers).unwrap();
                let expected = mode.factor() * 12.5 / f64::from(passengers);
                assert_relative_eq!(leg.emissions_kg(), expected);
                assert!(leg.emissions_kg() >= 0.0);
            }
        }
    }

    #[test]
    fn test_walking_is_zero() {
        let leg = TripLeg::record(TransportMode::WalkCycle, 2.0, 1).unwrap();
        assert_relative_eq!(leg.emissions_kg(), 0.0);
    }

    #[test]
    fn test_rejects_non_positive_distance() {
        for distance in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = TripLeg::record(TransportMode::BusDiesel, distance, 1).unwrap_err();
            assert!(err.is_invalid_input(), "distance {distance} accepted");
        }
    }

    #[test]
    fn test_rejects_zero_passengers() {
        let err = TripLeg::record(TransportMode::CarPetrol, 5.0, 0).unwrap_err();
        assert!(err.is_invalid_input());
        assert!(err.to_string().contains("passengers"));
    }

    #[test]
    fn test_record_named() {
        let leg = TripLeg::record_named("Metro/Train", 8.0, 1).unwrap();
        assert_relative_eq!(leg.emissions_kg(), 0.24, epsilon = 1e-12);

        let err = TripLeg::record_named("Rocket", 8.0, 1).unwrap_err();
        assert!(err.is_unknown_mode());
    }

    #[test]
    fn test_leg_serializes_fields() {
        let leg = TripLeg::record(TransportMode::BusElectric, 5.0, 1).unwrap();
        let json = serde_json::to_string(&leg).unwrap();
        assert!(json.contains("\"mode\":\"Bus (Electric)\""));
        assert!(json.contains("\"distance_km\":5.0"));
        assert!(json.contains("\"passengers\":1"));
        assert!(json.contains("emissions_kg"));
    }
}
