//! Built-in insight rules.
//!
//! Each rule is a predicate over [`ItineraryFacts`] paired with the message it
//! produces. Rules are listed in the order they are reported.

use serde::Serialize;

use crate::itinerary::Itinerary;
use crate::mode::ModeCategory;

/// Car travel below this total (km) counts as short-hop car use.
pub const SHORT_CAR_LIMIT_KM: f64 = 5.0;

/// Car travel above this total (km) counts as long-distance driving.
pub const LONG_CAR_THRESHOLD_KM: f64 = 20.0;

/// Itineraries emitting less than this (kg CO₂) are top tier.
pub const TOP_TIER_LIMIT_KG: f64 = 2.0;

/// Which rule produced an insight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightKind {
    /// Car used for very short total distances.
    InefficiencyAlert,
    /// Long car travel with the driver alone.
    CarpoolOpportunity,
    /// Itinerary includes walking or cycling.
    HealthBonus,
    /// Total footprint is below the top-tier benchmark.
    TopTier,
}

/// How an insight should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Behaviour that hurts the score.
    Alert,
    /// A concrete way to cut emissions.
    Opportunity,
    /// Positive reinforcement.
    Positive,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Alert => write!(f, "alert"),
            Self::Opportunity => write!(f, "opportunity"),
            Self::Positive => write!(f, "positive"),
        }
    }
}

/// Itinerary-wide measurements the rules are evaluated against.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ItineraryFacts {
    /// Number of legs.
    pub leg_count: usize,
    /// Total distance over car legs, in km.
    pub car_distance_km: f64,
    /// Whether any car leg had a single occupant.
    pub has_solo_car_leg: bool,
    /// Whether any leg was walked or cycled.
    pub has_active_leg: bool,
    /// Total emissions, in kg CO₂.
    pub total_emissions_kg: f64,
}

impl ItineraryFacts {
    /// Measure an itinerary.
    #[must_use]
    pub fn gather(itinerary: &Itinerary) -> Self {
        itinerary.iter().fold(Self::default(), |mut facts, leg| {
            facts.leg_count += 1;
            facts.total_emissions_kg += leg.emissions_kg();
            match leg.mode().category() {
                ModeCategory::Car => {
                    facts.car_distance_km += leg.distance_km();
                    facts.has_solo_car_leg |= leg.is_solo();
                }
                ModeCategory::Active => facts.has_active_leg = true,
                ModeCategory::Transit | ModeCategory::Other => {}
            }
            facts
        })
    }

    /// Car was used, but only for a short total distance.
    #[must_use]
    pub fn is_short_car_use(&self) -> bool {
        self.car_distance_km > 0.0 && self.car_distance_km < SHORT_CAR_LIMIT_KM
    }
}

/// A rule that may produce an insight.
#[derive(Debug, Clone, Copy)]
pub struct InsightRule {
    /// Identifies the rule.
    pub kind: InsightKind,
    /// Severity of the produced insight.
    pub severity: Severity,
    /// Short headline.
    pub title: &'static str,
    /// Full recommendation text.
    pub message: &'static str,
    predicate: fn(&ItineraryFacts) -> bool,
}

impl InsightRule {
    /// Check whether the rule fires for the given facts.
    #[must_use]
    pub fn applies(&self, facts: &ItineraryFacts) -> bool {
        (self.predicate)(facts)
    }
}

fn inefficiency_alert(facts: &ItineraryFacts) -> bool {
    facts.is_short_car_use()
}

/// Car rules exclusivity: the carpool check is the `else` branch of the
/// short-hop check, so it never fires alongside an inefficiency alert even
/// where the thresholds would otherwise allow it.
fn carpool_opportunity(facts: &ItineraryFacts) -> bool {
    !facts.is_short_car_use()
        && facts.car_distance_km > LONG_CAR_THRESHOLD_KM
        && facts.has_solo_car_leg
}

fn health_bonus(facts: &ItineraryFacts) -> bool {
    facts.has_active_leg
}

fn top_tier(facts: &ItineraryFacts) -> bool {
    facts.leg_count > 0 && facts.total_emissions_kg < TOP_TIER_LIMIT_KG
}

static BUILTIN_RULES: [InsightRule; 4] = [
    InsightRule {
        kind: InsightKind::InefficiencyAlert,
        severity: Severity::Alert,
        title: "Inefficiency Alert",
        message: "You are using a car for very short distances (<5km). This destroys your \
                  Eco-Score. Recommendation: Switch to Walking/Cycling for these legs.",
        predicate: inefficiency_alert,
    },
    InsightRule {
        kind: InsightKind::CarpoolOpportunity,
        severity: Severity::Opportunity,
        title: "Carpool Opportunity",
        message: "You have long solo car drives. Sharing these rides would cut your specific \
                  emissions by 50-75%.",
        predicate: carpool_opportunity,
    },
    InsightRule {
        kind: InsightKind::HealthBonus,
        severity: Severity::Positive,
        title: "Health Bonus",
        message: "Your itinerary includes active transport. This reduces carbon AND improves \
                  cardiovascular health.",
        predicate: health_bonus,
    },
    InsightRule {
        kind: InsightKind::TopTier,
        severity: Severity::Positive,
        title: "Top Tier",
        message: "Your footprint is better than 80% of daily commuters.",
        predicate: top_tier,
    },
];

/// Get all built-in rules, in evaluation order.
#[must_use]
pub fn builtin_rules() -> &'static [InsightRule] {
    &BUILTIN_RULES
}
