//! Insight engine.
//!
//! Runs the rule table over an itinerary and collects the insights that fire.

use serde::Serialize;
use tracing::{debug, trace};

use super::rules::{builtin_rules, InsightKind, InsightRule, ItineraryFacts, Severity};
use crate::itinerary::Itinerary;

/// An advisory message produced by a rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Insight {
    /// Which rule produced this insight.
    pub kind: InsightKind,
    /// How it should be presented.
    pub severity: Severity,
    /// Short headline.
    pub title: &'static str,
    /// Full recommendation text.
    pub message: &'static str,
}

impl From<&InsightRule> for Insight {
    fn from(rule: &InsightRule) -> Self {
        Self {
            kind: rule.kind,
            severity: rule.severity,
            title: rule.title,
            message: rule.message,
        }
    }
}

impl std::fmt::Display for Insight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.title, self.message)
    }
}

/// Evaluates an ordered set of rules against whole itineraries.
#[derive(Debug, Clone)]
pub struct InsightEngine {
    rules: Vec<InsightRule>,
}

impl Default for InsightEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl InsightEngine {
    /// Create an engine with the built-in rules.
    #[must_use]
    pub fn new() -> Self {
        Self::with_rules(builtin_rules().to_vec())
    }

    /// Create an engine with a custom, ordered rule set.
    #[must_use]
    pub fn with_rules(rules: Vec<InsightRule>) -> Self {
        Self { rules }
    }

    /// The rules this engine evaluates, in order.
    #[must_use]
    pub fn rules(&self) -> &[InsightRule] {
        &self.rules
    }

    /// Analyze an itinerary.
    ///
    /// Every rule is evaluated independently, in order; an empty itinerary
    /// yields no insights.
    #[must_use]
    pub fn analyze(&self, itinerary: &Itinerary) -> Vec<Insight> {
        if itinerary.is_empty() {
            return Vec::new();
        }

        let facts = ItineraryFacts::gather(itinerary);
        trace!(?facts, "Gathered itinerary facts");

        let insights: Vec<Insight> = self
            .rules
            .iter()
            .filter(|rule| rule.applies(&facts))
            .map(Insight::from)
            .collect();

        debug!(
            legs = itinerary.len(),
            fired = insights.len(),
            "Analyzed itinerary"
        );
        insights
    }
}

/// Analyze an itinerary with the built-in rules.
#[must_use]
pub fn analyze(itinerary: &Itinerary) -> Vec<Insight> {
    InsightEngine::new().analyze(itinerary)
}
