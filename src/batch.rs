use std::path::Path;

use anyhow::{Context, Result};

use crate::assessor::RiskAssessor;
use crate::models::{PredictionRequest, PredictionResult, RiskLevel};

/// Read a JSON array of prediction requests.
pub fn load_requests(path: &Path) -> Result<Vec<PredictionRequest>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading requests from {}", path.display()))?;
    let requests: Vec<PredictionRequest> = serde_json::from_str(&content)
        .with_context(|| format!("parsing requests in {}", path.display()))?;
    Ok(requests)
}

/// Assess requests in order. Each result is independent of the others.
pub fn assess_all(assessor: &RiskAssessor<'_>, requests: &[PredictionRequest]) -> Vec<PredictionResult> {
    requests
        .iter()
        .map(|r| assessor.compute_risk(r.category, &r.country, &r.region))
        .collect()
}

/// Whether any result is at or above `threshold`.
pub fn reaches_level(results: &[PredictionResult], threshold: Option<RiskLevel>) -> bool {
    match threshold {
        Some(level) => results.iter().any(|r| r.risk_level >= level),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DisasterCategory;

    #[test]
    fn test_load_and_assess() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("requests.json");
        std::fs::write(
            &path,
            r#"[
                {"category": "earthquake", "country": "United States", "region": "California"},
                {"category": "flood", "country": "Atlantis", "region": "Nowhere"}
            ]"#,
        )
        .unwrap();

        let requests = load_requests(&path).unwrap();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[1].category, DisasterCategory::Flood);

        let results = assess_all(&RiskAssessor::builtin(), &requests);
        assert_eq!(results[0].risk_score, 92);
        assert_eq!(results[1].risk_score, 63);
    }

    #[test]
    fn test_bad_category_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("requests.json");
        std::fs::write(&path, r#"[{"category": "volcano", "country": "Italy", "region": "Sicily"}]"#)
            .unwrap();
        let err = load_requests(&path).unwrap_err();
        assert!(format!("{err:#}").contains("volcano"));
    }

    #[test]
    fn test_reaches_level() {
        let assessor = RiskAssessor::builtin();
        // Hokkaido flood is 0.50 (Moderate), Assam flood is 0.90 (Extreme)
        let moderate = assessor.compute_risk(DisasterCategory::Flood, "Japan", "Hokkaido");
        let extreme = assessor.compute_risk(DisasterCategory::Flood, "India", "Assam");

        assert!(!reaches_level(&[moderate.clone()], None));
        assert!(!reaches_level(&[moderate.clone()], Some(RiskLevel::High)));
        assert!(reaches_level(&[moderate.clone()], Some(RiskLevel::Moderate)));
        assert!(reaches_level(&[moderate, extreme], Some(RiskLevel::Extreme)));
        assert!(!reaches_level(&[], Some(RiskLevel::Low)));
    }
}
