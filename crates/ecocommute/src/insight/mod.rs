//! Rule-based insights about a whole itinerary.
//!
//! The engine looks at travel patterns across every recorded leg rather
//! than at any single trip:
//!
//! - **Inefficiency alert**: the car was used, but only for a few km in total.
//! - **Carpool opportunity**: long car travel that includes solo drives.
//! - **Health bonus**: some of the itinerary was walked or cycled.
//! - **Top tier**: the total footprint is below 2 kg CO₂.
//!
//! # Example
//!
//! ```
//! use ecocommute::insight::{analyze, InsightKind};
//! use ecocommute::{Itinerary, TransportMode, TripLeg};
//!
//! let mut itinerary = Itinerary::new();
//! itinerary.append(TripLeg::record(TransportMode::CarPetrol, 25.0, 1)?);
//!
//! let insights = analyze(&itinerary);
//! assert_eq!(insights[0].kind, InsightKind::CarpoolOpportunity);
//! # Ok::<(), ecocommute::Error>(())
//! ```

mod engine;
mod rules;

pub use engine::{analyze, Insight, InsightEngine};
pub use rules::{
    builtin_rules, InsightKind, InsightRule, ItineraryFacts, Severity, LONG_CAR_THRESHOLD_KM,
    SHORT_CAR_LIMIT_KM, TOP_TIER_LIMIT_KG,
};
