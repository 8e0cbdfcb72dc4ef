//! Transport modes and the emission factor table.
//!
//! Every mode the recorder accepts has exactly one entry here: a fixed
//! emission factor in kg CO₂ per km and a [`ModeCategory`] tag that the
//! insight rules key off.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Error, Result};

/// Emission factor of a petrol car, used as the "worst common case" baseline.
pub const CAR_PETROL_FACTOR: f64 = 0.19;

/// Broad grouping of transport modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModeCategory {
    /// Human-powered travel (walking, cycling).
    Active,
    /// Private cars of any drivetrain.
    Car,
    /// Scheduled public transport.
    Transit,
    /// Everything else.
    Other,
}

impl fmt::Display for ModeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => write!(f, "active"),
            Self::Car => write!(f, "car"),
            Self::Transit => write!(f, "transit"),
            Self::Other => write!(f, "other"),
        }
    }
}

/// A transport mode with a known emission factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TransportMode {
    /// Walking or cycling.
    WalkCycle,
    /// Diesel bus.
    BusDiesel,
    /// Battery-electric bus.
    BusElectric,
    /// Metro, tram or train.
    MetroTrain,
    /// Motorbike or scooter.
    Motorbike,
    /// Petrol car.
    CarPetrol,
    /// Diesel car.
    CarDiesel,
    /// Battery-electric car.
    CarElectric,
    /// Ride-hailing services.
    RideShare,
}

/// One row of the emission factor table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FactorEntry {
    /// The mode this row describes.
    pub mode: TransportMode,
    /// Kebab-case identifier, suitable for command lines.
    pub id: &'static str,
    /// Human-readable label.
    pub label: &'static str,
    /// kg CO₂ per km.
    pub factor: f64,
    /// Category used by the insight rules.
    pub category: ModeCategory,
}

/// The emission factor table, in display order.
pub static EMISSION_FACTORS: [FactorEntry; 9] = [
    FactorEntry {
        mode: TransportMode::WalkCycle,
        id: "walk-cycle",
        label: "Walk/Cycle",
        factor: 0.0,
        category: ModeCategory::Active,
    },
    FactorEntry {
        mode: TransportMode::BusDiesel,
        id: "bus-diesel",
        label: "Bus (Diesel)",
        factor: 0.10,
        category: ModeCategory::Transit,
    },
    FactorEntry {
        mode: TransportMode::BusElectric,
        id: "bus-electric",
        label: "Bus (Electric)",
        factor: 0.04,
        category: ModeCategory::Transit,
    },
    FactorEntry {
        mode: TransportMode::MetroTrain,
        id: "metro-train",
        label: "Metro/Train",
        factor: 0.03,
        category: ModeCategory::Transit,
    },
    FactorEntry {
        mode: TransportMode::Motorbike,
        id: "motorbike",
        label: "Motorbike",
        factor: 0.11,
        category: ModeCategory::Other,
    },
    FactorEntry {
        mode: TransportMode::CarPetrol,
        id: "car-petrol",
        label: "Car (Petrol)",
        factor: CAR_PETROL_FACTOR,
        category: ModeCategory::Car,
    },
    FactorEntry {
        mode: TransportMode::CarDiesel,
        id: "car-diesel",
        label: "Car (Diesel)",
        factor: 0.17,
        category: ModeCategory::Car,
    },
    FactorEntry {
        mode: TransportMode::CarElectric,
        id: "car-electric",
        label: "Car (Electric)",
        factor: 0.05,
        category: ModeCategory::Car,
    },
    FactorEntry {
        mode: TransportMode::RideShare,
        id: "ride-share",
        label: "Ride-share",
        factor: 0.22,
        category: ModeCategory::Other,
    },
];

/// Older label still found in exported reports.
const RIDE_SHARE_LONG_LABEL: &str = "Ride-share (Uber/Ola)";

impl TransportMode {
    /// All modes, in table order.
    pub const ALL: [TransportMode; 9] = [
        Self::WalkCycle,
        Self::BusDiesel,
        Self::BusElectric,
        Self::MetroTrain,
        Self::Motorbike,
        Self::CarPetrol,
        Self::CarDiesel,
        Self::CarElectric,
        Self::RideShare,
    ];

    /// The table row for this mode.
    #[must_use]
    pub fn entry(self) -> &'static FactorEntry {
        // Rows are laid out in declaration order.
        &EMISSION_FACTORS[self as usize]
    }

    /// Emission factor in kg CO₂ per km.
    #[must_use]
    pub fn factor(self) -> f64 {
        self.entry().factor
    }

    /// Category tag.
    #[must_use]
    pub fn category(self) -> ModeCategory {
        self.entry().category
    }

    /// Human-readable label.
    #[must_use]
    pub fn label(self) -> &'static str {
        self.entry().label
    }

    /// Kebab-case identifier.
    #[must_use]
    pub fn id(self) -> &'static str {
        self.entry().id
    }
}

/// Look up the emission factor for a mode identifier.
///
/// Accepts anything [`TransportMode::from_str`] accepts.
///
/// # Errors
///
/// Returns [`Error::UnknownMode`] if the identifier names no mode in the table.
pub fn factor(mode: &str) -> Result<f64> {
    mode.parse::<TransportMode>().map(TransportMode::factor)
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TransportMode {
    type Err = Error;

    /// Parse a mode from its label (case-insensitive) or kebab-case id.
    fn from_str(s: &str) -> Result<Self> {
        let needle = s.trim();
        if needle.eq_ignore_ascii_case(RIDE_SHARE_LONG_LABEL) {
            return Ok(Self::RideShare);
        }
        EMISSION_FACTORS
            .iter()
            .find(|e| e.id.eq_ignore_ascii_case(needle) || e.label.eq_ignore_ascii_case(needle))
            .map(|e| e.mode)
            .ok_or_else(|| Error::unknown_mode(needle))
    }
}

impl Serialize for TransportMode {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for TransportMode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
