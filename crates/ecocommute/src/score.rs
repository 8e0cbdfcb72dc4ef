//! Eco-score calculation.
//!
//! The score rates average emission intensity against a petrol car: an
//! itinerary that emits as much per km as a petrol car scores 0, one that
//! emits nothing scores 100.

use crate::mode::CAR_PETROL_FACTOR;

/// Highest possible score.
pub const MAX_SCORE: u8 = 100;

/// Score an itinerary from its total emissions and distance.
///
/// Returns 0 when there is no distance to average over. Itineraries dirtier
/// than the baseline are clamped to 0, and the result is truncated toward
/// zero.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn score(total_emissions_kg: f64, total_distance_km: f64) -> u8 {
    if !total_distance_km.is_finite() || total_distance_km <= 0.0 {
        return 0;
    }
    let avg = total_emissions_kg / total_distance_km;
    let raw = 100.0 - (avg / CAR_PETROL_FACTOR * 100.0);
    if raw.is_nan() {
        return 0;
    }

    // Clamped to [0, 100] first, so the cast cannot wrap.
    raw.clamp(0.0, f64::from(MAX_SCORE)) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_distance_scores_zero() {
        assert_eq!(score(0.0, 0.0), 0);
        assert_eq!(score(5.0, 0.0), 0);
    }

    #[test]
    fn test_zero_emissions_scores_hundred() {
        for distance in [0.1, 1.0, 42.0, 100.0] {
            assert_eq!(score(0.0, distance), 100);
        }
    }

    #[test]
    fn test_petrol_car_baseline_scores_zero() {
        assert_eq!(score(0.57, 3.0), 0);
        assert_eq!(score(0.19, 1.0), 0);
    }

    #[test]
    fn test_dirtier_than_baseline_clamps_to_zero() {
        // Ride-share at 0.22 kg/km
        assert_eq!(score(2.2, 10.0), 0);
    }

    #[test]
    fn test_intermediate_score_truncates() {
        // 1.09 kg over 18 km: avg ~0.0606, raw ~68.1
        assert_eq!(score(1.09, 18.0), 68);
        // Diesel bus: 0.10 / 0.19 of the baseline, raw ~47.4
        assert_eq!(score(1.0, 10.0), 47);
    }

    #[test]
    fn test_monotonic_and_bounded() {
        let mut previous = u8::MAX;
        for step in 0..=300 {
            let intensity = f64::from(step) * 0.001;
            let s = score(intensity * 10.0, 10.0);
            assert!(s <= MAX_SCORE);
            assert!(s <= previous, "score rose at intensity {intensity}");
            previous = s;
        }
    }

    #[test]
    fn test_non_finite_inputs() {
        assert_eq!(score(1.0, f64::NAN), 0);
        assert_eq!(score(f64::NAN, 1.0), 0);
        assert_eq!(score(f64::INFINITY, 1.0), 0);
    }
}
