use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::models::{DisasterCategory, RiskLevel, UnknownCategory};
use crate::tables::RiskTables;

/// Delay shown before a prediction is displayed, matching the web form.
pub const DEFAULT_DELAY_MS: u64 = 1500;

/// Root configuration structure, deserialized from `.disaster-risk/config.toml`.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub assessment: AssessmentConfig,
    /// Extra curated scores keyed by category name, then exact region name.
    /// Sorted maps keep merge order and error reporting stable.
    #[serde(default)]
    pub scores: BTreeMap<String, BTreeMap<String, f64>>,
}

/// How predictions are presented and gated.
#[derive(Debug, Deserialize)]
pub struct AssessmentConfig {
    /// Simulated analysis latency before a result is shown.
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
    /// Exit with status 1 when any result reaches this level.
    #[serde(default)]
    pub fail_on: Option<RiskLevel>,
}

fn default_delay_ms() -> u64 {
    DEFAULT_DELAY_MS
}

impl Default for AssessmentConfig {
    fn default() -> Self {
        Self {
            delay_ms: DEFAULT_DELAY_MS,
            fail_on: None,
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("[scores] {0}")]
    UnknownCategory(#[from] UnknownCategory),
    #[error("score for {category}/{region} must be within 0.0..=1.0, got {score}")]
    ScoreOutOfRange {
        category: DisasterCategory,
        region: String,
        score: f64,
    },
    #[error("[scores.{first}] and [scores.{second}] both name the {category} category")]
    DuplicateCategory {
        category: DisasterCategory,
        first: String,
        second: String,
    },
}

impl Config {
    /// Check every configured score and resolve its category.
    pub fn score_overrides(&self) -> Result<Vec<(DisasterCategory, &str, f64)>, ConfigError> {
        let mut overrides = Vec::new();
        let mut seen: BTreeMap<DisasterCategory, &str> = BTreeMap::new();
        for (name, regions) in &self.scores {
            let category: DisasterCategory = name.parse()?;
            if let Some(first) = seen.insert(category, name.as_str()) {
                return Err(ConfigError::DuplicateCategory {
                    category,
                    first: first.to_string(),
                    second: name.clone(),
                });
            }
            for (region, &score) in regions {
                if !score.is_finite() || !(0.0..=1.0).contains(&score) {
                    return Err(ConfigError::ScoreOutOfRange {
                        category,
                        region: region.clone(),
                        score,
                    });
                }
                overrides.push((category, region.as_str(), score));
            }
        }
        Ok(overrides)
    }

    /// Build the score tables this configuration describes.
    ///
    /// Without configured scores this is a copy of the built-in tables.
    pub fn risk_tables(&self) -> Result<RiskTables, ConfigError> {
        let overrides = self.score_overrides()?;
        debug!(count = overrides.len(), "merging configured scores");
        Ok(RiskTables::with_overrides(overrides))
    }
}

fn read_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config: Config =
        toml::from_str(&content).with_context(|| format!("parsing config {}", path.display()))?;
    debug!(path = %path.display(), "loaded config");
    Ok(config)
}

/// Load configuration, searching in order:
///
/// 1. `config_override` — path passed via `--config`
/// 2. `<base_path>/.disaster-risk/config.toml`
/// 3. `~/.config/disaster-risk/config.toml`
/// 4. Built-in [`Config::default`]
pub fn load_config(base_path: &Path, config_override: Option<&Path>) -> Result<Config> {
    if let Some(path) = config_override {
        return read_config(path);
    }

    let project_config = base_path.join(".disaster-risk").join("config.toml");
    if project_config.exists() {
        return read_config(&project_config);
    }

    if let Some(home) = dirs::home_dir() {
        let home_config = home
            .join(".config")
            .join("disaster-risk")
            .join("config.toml");
        if home_config.exists() {
            return read_config(&home_config);
        }
    }

    debug!("no config file found, using defaults");
    Ok(Config::default())
}
