use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisasterCategory {
    Earthquake,
    Flood,
    Wildfire,
    Tsunami,
    Cyclone,
}

impl DisasterCategory {
    pub const ALL: [DisasterCategory; 5] = [
        DisasterCategory::Earthquake,
        DisasterCategory::Flood,
        DisasterCategory::Wildfire,
        DisasterCategory::Tsunami,
        DisasterCategory::Cyclone,
    ];

    /// Lowercase identifier used in config keys and JSON.
    pub fn id(&self) -> &'static str {
        match self {
            DisasterCategory::Earthquake => "earthquake",
            DisasterCategory::Flood => "flood",
            DisasterCategory::Wildfire => "wildfire",
            DisasterCategory::Tsunami => "tsunami",
            DisasterCategory::Cyclone => "cyclone",
        }
    }
}

impl std::fmt::Display for DisasterCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DisasterCategory::Earthquake => write!(f, "Earthquake"),
            DisasterCategory::Flood => write!(f, "Flood"),
            DisasterCategory::Wildfire => write!(f, "Wildfire"),
            DisasterCategory::Tsunami => write!(f, "Tsunami"),
            DisasterCategory::Cyclone => write!(f, "Cyclone"),
        }
    }
}

impl FromStr for DisasterCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        DisasterCategory::ALL
            .into_iter()
            .find(|c| c.id().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown disaster category `{0}` (expected earthquake, flood, wildfire, tsunami or cyclone)")]
pub struct UnknownCategory(pub String);

/// Ordered from least to most severe. Config files may spell levels in lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskLevel {
    #[serde(alias = "low")]
    Low,
    #[serde(alias = "moderate")]
    Moderate,
    #[serde(alias = "high")]
    High,
    #[serde(alias = "extreme")]
    Extreme,
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "Low"),
            RiskLevel::Moderate => write!(f, "Moderate"),
            RiskLevel::High => write!(f, "High"),
            RiskLevel::Extreme => write!(f, "Extreme"),
        }
    }
}

/// Where the fractional score behind a prediction came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreSource {
    Table,
    Synthetic,
}

impl std::fmt::Display for ScoreSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScoreSource::Table => write!(f, "curated table"),
            ScoreSource::Synthetic => write!(f, "synthetic estimate"),
        }
    }
}

/// Country and region as entered by the caller. Never normalized.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LocationKey {
    pub country: String,
    pub region: String,
}

impl LocationKey {
    pub fn new(country: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            country: country.into(),
            region: region.into(),
        }
    }
}

impl std::fmt::Display for LocationKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}", self.region, self.country)
    }
}

/// One assessment request, as read from a batch file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PredictionRequest {
    pub category: DisasterCategory,
    pub country: String,
    pub region: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResult {
    pub category: DisasterCategory,
    #[serde(flatten)]
    pub location: LocationKey,
    pub risk_score: u8,
    pub risk_level: RiskLevel,
    pub source: ScoreSource,
    pub recommendations: Vec<String>,
}
