//! Static lookup data behind every command.
//!
//! - [`scores`] — curated per-region risk scores and the synthetic-score weights.
//! - [`recommendations`] — preparedness actions per (category, risk level).
//! - [`locations`] — the fixed country/region selection lists.
//! - [`hotspots`] — places shown on the risk map.
//! - [`knowledge`] — knowledge-base articles and FAQ.
//!
//! [`RiskTables`] bundles the score data the assessor reads. It is built once
//! and never mutated afterwards.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::models::{DisasterCategory, RiskLevel};

pub mod hotspots;
pub mod knowledge;
pub mod locations;
pub mod recommendations;
pub mod scores;

/// Immutable score table keyed by category, then by exact region name.
#[derive(Debug, Clone, Default)]
pub struct RiskTables {
    scores: HashMap<DisasterCategory, HashMap<String, f64>>,
}

impl RiskTables {
    /// Build the tables from the curated entries in [`scores::BUILTIN_SCORES`].
    pub fn from_builtin() -> Self {
        let mut tables = RiskTables::default();
        for (category, region, score) in scores::BUILTIN_SCORES {
            tables.insert(*category, region, *score);
        }
        tables
    }

    /// Copy of the built-in tables with `overrides` merged in.
    ///
    /// An override replaces a built-in entry for the same (category, region).
    /// Scores are expected to be validated by the caller.
    pub fn with_overrides<'a, I>(overrides: I) -> Self
    where
        I: IntoIterator<Item = (DisasterCategory, &'a str, f64)>,
    {
        let mut tables = builtin().clone();
        for (category, region, score) in overrides {
            tables.insert(category, region, score);
        }
        tables
    }

    fn insert(&mut self, category: DisasterCategory, region: &str, score: f64) {
        self.scores
            .entry(category)
            .or_default()
            .insert(region.to_string(), score);
    }

    /// Exact, case-sensitive lookup of a curated score.
    pub fn lookup(&self, category: DisasterCategory, region: &str) -> Option<f64> {
        self.scores.get(&category)?.get(region).copied()
    }

    /// Curated entries for one category, sorted by region name.
    pub fn entries(&self, category: DisasterCategory) -> Vec<(&str, f64)> {
        let mut entries: Vec<(&str, f64)> = self
            .scores
            .get(&category)
            .map(|m| m.iter().map(|(r, s)| (r.as_str(), *s)).collect())
            .unwrap_or_default();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }

    /// Recommendations for a category at a level, with the Moderate fallback.
    pub fn recommendations(&self, category: DisasterCategory, level: RiskLevel) -> &'static [&'static str] {
        recommendations::for_level(category, level)
    }
}

/// Process-wide built-in tables, constructed on first access.
pub fn builtin() -> &'static RiskTables {
    static BUILTIN: OnceLock<RiskTables> = OnceLock::new();
    BUILTIN.get_or_init(RiskTables::from_builtin)
}
