//! Per-user session state.
//!
//! A [`Session`] owns one [`Itinerary`] and the input limits applied to legs
//! entered through it. Each session is independent; nothing is shared
//! between them.

use tracing::warn;

use crate::config::LimitsConfig;
use crate::error::{Error, Result};
use crate::itinerary::Itinerary;
use crate::leg::TripLeg;
use crate::mode::TransportMode;
use crate::report::Report;

/// A single user's working itinerary.
#[derive(Debug, Clone, Default)]
pub struct Session {
    limits: LimitsConfig,
    itinerary: Itinerary,
}

impl Session {
    /// Create an empty session with the given input limits.
    #[must_use]
    pub fn new(limits: LimitsConfig) -> Self {
        Self {
            limits,
            itinerary: Itinerary::new(),
        }
    }

    /// Input limits enforced by [`Session::add_leg`].
    #[must_use]
    pub fn limits(&self) -> &LimitsConfig {
        &self.limits
    }

    /// The legs recorded so far.
    #[must_use]
    pub fn itinerary(&self) -> &Itinerary {
        &self.itinerary
    }

    /// Record a leg and append it to the itinerary.
    ///
    /// Nothing is appended if the leg is rejected.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if the distance or passenger count is
    /// outside the session limits or otherwise invalid.
    pub fn add_leg(
        &mut self,
        mode: TransportMode,
        distance_km: f64,
        passengers: u32,
    ) -> Result<&TripLeg> {
        self.check_limits(distance_km, passengers)?;
        let leg = TripLeg::record(mode, distance_km, passengers)?;
        self.itinerary.append(leg);
        Ok(&self.itinerary.all()[self.itinerary.len() - 1])
    }

    /// Record a leg from a mode identifier and append it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownMode`] for an unrecognised mode, or
    /// [`Error::InvalidInput`] as for [`Session::add_leg`].
    pub fn add_named_leg(
        &mut self,
        mode: &str,
        distance_km: f64,
        passengers: u32,
    ) -> Result<&TripLeg> {
        self.add_leg(mode.parse()?, distance_km, passengers)
    }

    /// Append an already recorded leg, subject to the session limits.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if the leg is outside the limits.
    pub fn push(&mut self, leg: TripLeg) -> Result<()> {
        self.check_limits(leg.distance_km(), leg.passengers())?;
        self.itinerary.append(leg);
        Ok(())
    }

    /// Discard every recorded leg.
    pub fn reset(&mut self) {
        self.itinerary.clear();
    }

    /// Build a fresh report from the current itinerary.
    #[must_use]
    pub fn report(&self) -> Report {
        Report::from_itinerary(&self.itinerary)
    }

    fn check_limits(&self, distance_km: f64, passengers: u32) -> Result<()> {
        let limits = &self.limits;
        if !(limits.min_distance_km..=limits.max_distance_km).contains(&distance_km) {
            warn!(distance_km, "Leg distance outside session limits");
            return Err(Error::invalid_input(
                "distance_km",
                format!(
                    "must be between {} and {} km, got {distance_km}",
                    limits.min_distance_km, limits.max_distance_km
                ),
            ));
        }
        if passengers == 0 || passengers > limits.max_passengers {
            warn!(passengers, "Passenger count outside session limits");
            return Err(Error::invalid_input(
                "passengers",
                format!(
                    "must be between 1 and {}, got {passengers}",
                    limits.max_passengers
                ),
            ));
        }
        Ok(())
    }
}
