//! `ecocommute` - Carbon footprint accounting for daily travel
//!
//! This library records the legs of a day's travel, computes each leg's
//! share of emissions, scores the itinerary against a petrol-car baseline
//! and produces rule-based insights about travel patterns.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod insight;
pub mod itinerary;
pub mod leg;
pub mod logging;
pub mod mode;
pub mod report;
pub mod score;
pub mod session;

pub use config::Config;
pub use error::{Error, Result};
pub use insight::{analyze, Insight};
pub use itinerary::Itinerary;
pub use leg::TripLeg;
pub use logging::init_logging;
pub use mode::{ModeCategory, TransportMode};
pub use report::Report;
pub use score::score;
pub use session::Session;
