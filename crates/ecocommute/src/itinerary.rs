//! The itinerary store.
//!
//! An [`Itinerary`] holds the legs recorded so far, in the order they were
//! added. Legs can only be appended, or all discarded at once.

use serde::Serialize;
use tracing::{debug, info};

use crate::leg::TripLeg;

/// Ordered collection of recorded trip legs.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Itinerary {
    legs: Vec<TripLeg>,
}

impl Itinerary {
    /// Create an empty itinerary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a leg to the end of the itinerary.
    pub fn append(&mut self, leg: TripLeg) {
        debug!(mode = %leg.mode(), position = self.legs.len(), "Appending leg");
        self.legs.push(leg);
    }

    /// Discard every leg.
    pub fn clear(&mut self) {
        info!(discarded = self.legs.len(), "Clearing itinerary");
        self.legs.clear();
    }

    /// All legs, in insertion order.
    #[must_use]
    pub fn all(&self) -> &[TripLeg] {
        &self.legs
    }

    /// Iterate over the legs in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, TripLeg> {
        self.legs.iter()
    }

    /// Number of legs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.legs.len()
    }

    /// Check if no legs have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.legs.is_empty()
    }

    /// Sum of all leg distances, in km.
    #[must_use]
    pub fn total_distance_km(&self) -> f64 {
        self.legs.iter().map(TripLeg::distance_km).sum()
    }

    /// Sum of all leg emissions, in kg CO₂.
    #[must_use]
    pub fn total_emissions_kg(&self) -> f64 {
        self.legs.iter().map(TripLeg::emissions_kg).sum()
    }
}

impl FromIterator<TripLeg> for Itinerary {
    fn from_iter<I: IntoIterator<Item = TripLeg>>(iter: I) -> Self {
        Self {
            legs: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Itinerary {
    type Item = &'a TripLeg;
    type IntoIter = std::slice::Iter<'a, TripLeg>;

    fn into_iter(self) -> Self::IntoIter {
        self.legs.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mode::TransportMode;
    use approx::assert_relative_eq;

    fn leg(mode: TransportMode, km: f64, passengers: u32) -> TripLeg {
        TripLeg::record(mode, km, passengers).unwrap()
    }

    #[test]
    fn test_new_is_empty() {
        let itinerary = Itinerary::new();
        assert!(itinerary.is_empty());
        assert_eq!(itinerary.len(), 0);
        assert!(itinerary.all().is_empty());
        assert_relative_eq!(itinerary.total_distance_km(), 0.0);
        assert_relative_eq!(itinerary.total_emissions_kg(), 0.0);
    }

    #[test]
    fn test_append_preserves_order() {
        let mut itinerary = Itinerary::new();
        itinerary.append(leg(TransportMode::WalkCycle, 1.0, 1));
        itinerary.append(leg(TransportMode::MetroTrain, 8.0, 1));
        itinerary.append(leg(TransportMode::BusDiesel, 3.0, 1));

        let modes: Vec<_> = itinerary.iter().map(TripLeg::mode).collect();
        assert_eq!(
            modes,
            vec![
                TransportMode::WalkCycle,
                TransportMode::MetroTrain,
                TransportMode::BusDiesel
            ]
        );
    }

    #[test]
    fn test_totals() {
        let itinerary: Itinerary = [
            leg(TransportMode::CarDiesel, 10.0, 2),
            leg(TransportMode::MetroTrain, 8.0, 1),
        ]
        .into_iter()
        .collect();

        assert_relative_eq!(itinerary.total_distance_km(), 18.0);
        assert_relative_eq!(itinerary.total_emissions_kg(), 1.09, epsilon = 1e-12);
    }

    #[test]
    fn test_clear_discards_everything() {
        let mut itinerary = Itinerary::new();
        itinerary.append(leg(TransportMode::CarPetrol, 4.0, 1));
        itinerary.append(leg(TransportMode::CarPetrol, 4.0, 1));
        itinerary.clear();

        assert!(itinerary.is_empty());
        assert_eq!(itinerary, Itinerary::new());
    }

    #[test]
    fn test_serializes_as_list() {
        let mut itinerary = Itinerary::new();
        itinerary.append(leg(TransportMode::WalkCycle, 2.0, 1));
        let json = serde_json::to_string(&itinerary).unwrap();
        assert!(json.starts_with('['));
    }
}
