use anyhow::{bail, Result};

use crate::config::Config;
use crate::models::RiskLevel;
use crate::tables::locations;

/// Reject a single prediction before it reaches the assessor.
///
/// Country and region must be non-blank. With `strict`, the pair must also
/// appear in the location lists.
pub fn validate_request(country: &str, region: &str, strict: bool) -> Result<()> {
    if country.trim().is_empty() {
        bail!("a country is required");
    }
    if region.trim().is_empty() {
        bail!("a state/region is required");
    }
    if strict && !locations::is_known(country, region) {
        bail!(
            "`{}` is not a listed region of `{}`; run `disaster-risk locations` for the list",
            region,
            country
        );
    }
    Ok(())
}

/// Effective `fail_on` level: the flag wins over the config file.
pub fn fail_level(flag: Option<RiskLevel>, config: &Config) -> Option<RiskLevel> {
    flag.or(config.assessment.fail_on)
}
