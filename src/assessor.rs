use tracing::debug;

use crate::models::{DisasterCategory, LocationKey, PredictionResult, RiskLevel, ScoreSource};
use crate::tables::{self, scores::synthetic_weight, RiskTables};

/// Synthetic scores are clamped to this range, in hundredths.
const SYNTHETIC_MIN: u32 = 20;
const SYNTHETIC_MAX: u32 = 95;

/// Produces risk predictions from a read-only set of [`RiskTables`].
///
/// Assessment is a pure function of its inputs and the tables: it never
/// fails, and unknown or empty locations fall through to the synthetic score.
#[derive(Debug, Clone, Copy)]
pub struct RiskAssessor<'t> {
    tables: &'t RiskTables,
}

impl RiskAssessor<'static> {
    /// Assessor over the process-wide built-in tables.
    pub fn builtin() -> Self {
        Self::new(tables::builtin())
    }
}

impl<'t> RiskAssessor<'t> {
    pub fn new(tables: &'t RiskTables) -> Self {
        Self { tables }
    }

    pub fn tables(&self) -> &'t RiskTables {
        self.tables
    }

    /// Score a (category, country, region) request.
    ///
    /// 1. An exact (category, region) hit in the score table is used as is.
    /// 2. Otherwise a [`synthetic_score`] is derived from the input lengths.
    /// 3. The score is bucketed with [`classify`] and scaled to a percentage.
    /// 4. Recommendations come from the (category, level) list, falling back
    ///    to the category's Moderate list.
    pub fn compute_risk(&self, category: DisasterCategory, country: &str, region: &str) -> PredictionResult {
        let (score, source) = match self.tables.lookup(category, region) {
            Some(score) => (score, ScoreSource::Table),
            None => (synthetic_score(category, country, region), ScoreSource::Synthetic),
        };

        let risk_level = classify(score);
        let risk_score = to_percent(score);

        debug!(
            %category,
            country,
            region,
            score,
            %risk_level,
            ?source,
            "assessed location"
        );

        PredictionResult {
            category,
            location: LocationKey::new(country, region),
            risk_score,
            risk_level,
            source,
            recommendations: self
                .tables
                .recommendations(category, risk_level)
                .iter()
                .map(|r| r.to_string())
                .collect(),
        }
    }
}

/// Placeholder score for locations without a curated entry.
///
/// `weight(category) + ((len(country) * 13 + len(region) * 7) mod 50) / 100`,
/// clamped to `[0.20, 0.95]`. Lengths count Unicode scalar values. The sum is
/// formed in whole hundredths so boundary values come out exact.
pub fn synthetic_score(category: DisasterCategory, country: &str, region: &str) -> f64 {
    // Reduce before multiplying; equal mod 50 and cannot overflow.
    let country_len = (country.chars().count() % 50) as u32;
    let region_len = (region.chars().count() % 50) as u32;
    let term = (country_len * 13 + region_len * 7) % 50;

    let hundredths = (synthetic_weight(category) + term).clamp(SYNTHETIC_MIN, SYNTHETIC_MAX);
    f64::from(hundredths) / 100.0
}

/// Bucket a fractional score. Each threshold belongs to the higher level.
pub fn classify(score: f64) -> RiskLevel {
    if score < 0.30 {
        RiskLevel::Low
    } else if score < 0.60 {
        RiskLevel::Moderate
    } else if score < 0.80 {
        RiskLevel::High
    } else {
        RiskLevel::Extreme
    }
}

fn to_percent(score: f64) -> u8 {
    (score.clamp(0.0, 1.0) * 100.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_hit() {
        let r = RiskAssessor::builtin().compute_risk(DisasterCategory::Earthquake, "United States", "California");
        assert_eq!(r.risk_score, 92);
        assert_eq!(r.risk_level, RiskLevel::Extreme);
        assert_eq!(r.source, ScoreSource::Table);
    }

    #[test]
    fn test_table_hit_ignores_country() {
        let a = RiskAssessor::builtin();
        let us = a.compute_risk(DisasterCategory::Wildfire, "United States", "California");
        let other = a.compute_risk(DisasterCategory::Wildfire, "Atlantis", "California");
        assert_eq!(us.risk_score, 90);
        assert_eq!(other.risk_score, 90);
    }

    #[test]
    fn test_synthetic_known_value() {
        // 8 * 13 + 7 * 7 = 153, mod 50 = 3
        let r = RiskAssessor::builtin().compute_risk(DisasterCategory::Flood, "Atlantis", "Nowhere");
        assert_eq!(r.source, ScoreSource::Synthetic);
        assert_eq!(r.risk_score, 63);
        assert_eq!(r.risk_level, RiskLevel::High);
    }

    #[test]
    fn test_synthetic_clamps_high() {
        // 3 * 13 + 8 * 7 = 95, mod 50 = 45; 0.70 + 0.45 clamps to 0.95
        let s = synthetic_score(DisasterCategory::Earthquake, "abc", "abcdefgh");
        assert_eq!(s, 0.95);
    }

    #[test]
    fn test_empty_strings() {
        assert_eq!(synthetic_score(DisasterCategory::Flood, "", ""), 0.60);
        let r = RiskAssessor::builtin().compute_risk(DisasterCategory::Tsunami, "", "");
        assert_eq!(r.risk_score, 55);
        assert_eq!(r.risk_level, RiskLevel::Moderate);
    }

    #[test]
    fn test_thresholds_are_exact() {
        assert_eq!(classify(0.0), RiskLevel::Low);
        assert_eq!(classify(0.2999), RiskLevel::Low);
        assert_eq!(classify(0.30), RiskLevel::Moderate);
        assert_eq!(classify(0.5999), RiskLevel::Moderate);
        assert_eq!(classify(0.60), RiskLevel::High);
        assert_eq!(classify(0.7999), RiskLevel::High);
        assert_eq!(classify(0.80), RiskLevel::Extreme);
        assert_eq!(classify(1.0), RiskLevel::Extreme);
    }

    #[test]
    fn test_synthetic_boundaries_land_on_higher_level() {
        // flood with a zero term is exactly 0.60
        let r = RiskAssessor::builtin().compute_risk(DisasterCategory::Flood, "", "");
        assert_eq!(r.risk_level, RiskLevel::High);
        // earthquake 0.70 + 0.10: 13a + 7b = 10 (mod 50) with a = 0, b = 30
        let region = "x".repeat(30);
        assert_eq!(synthetic_score(DisasterCategory::Earthquake, "", &region), 0.80);
        let r = RiskAssessor::builtin().compute_risk(DisasterCategory::Earthquake, "", &region);
        assert_eq!(r.risk_level, RiskLevel::Extreme);
        assert_eq!(r.risk_score, 80);
    }

    #[test]
    fn test_length_counts_characters() {
        assert_eq!(
            synthetic_score(DisasterCategory::Cyclone, "México", "Michoacán"),
            synthetic_score(DisasterCategory::Cyclone, "Mexico", "Michoacan"),
        );
    }

    #[test]
    fn test_huge_inputs_do_not_overflow() {
        let long = "y".repeat(1_000_003);
        let s = synthetic_score(DisasterCategory::Wildfire, &long, &long);
        assert!((0.20..=0.95).contains(&s));
    }

    #[test]
    fn test_recommendations_follow_level() {
        let r = RiskAssessor::builtin().compute_risk(DisasterCategory::Earthquake, "United States", "California");
        assert_eq!(
            r.recommendations,
            crate::tables::recommendations::for_level(DisasterCategory::Earthquake, RiskLevel::Extreme)
        );
    }
}
