use disaster_risk::assessor::{classify, synthetic_score, RiskAssessor};
use disaster_risk::models::{DisasterCategory, RiskLevel, ScoreSource};
use disaster_risk::tables::{self, recommendations, scores::BUILTIN_SCORES, RiskTables};

#[test]
fn table_entries_score_exactly() {
    let assessor = RiskAssessor::builtin();
    for (category, region, value) in BUILTIN_SCORES {
        let r = assessor.compute_risk(*category, "Anywhere", region);
        assert_eq!(r.source, ScoreSource::Table, "{category}/{region}");
        assert_eq!(
            f64::from(r.risk_score),
            (value * 100.0).round(),
            "{category}/{region}"
        );
        assert_eq!(r.risk_level, classify(*value), "{category}/{region}");
    }
}

#[test]
fn synthetic_scores_stay_in_range() {
    let assessor = RiskAssessor::builtin();
    let names = ["", "A", "Atlantis", "Nowhere", "Republic of Somewhere Far Away", "Ω", "  "];
    for category in DisasterCategory::ALL {
        for country in names {
            for region in names {
                let r = assessor.compute_risk(category, country, region);
                assert_eq!(r.source, ScoreSource::Synthetic);
                assert!(
                    (20..=95).contains(&r.risk_score),
                    "{category} {country:?}/{region:?} -> {}",
                    r.risk_score
                );
            }
        }
    }
}

#[test]
fn assessment_is_deterministic() {
    let assessor = RiskAssessor::builtin();
    let first = assessor.compute_risk(DisasterCategory::Flood, "Atlantis", "Nowhere");
    for _ in 0..10 {
        assert_eq!(assessor.compute_risk(DisasterCategory::Flood, "Atlantis", "Nowhere"), first);
    }
    assert_eq!(first.risk_score, 63);
}

#[test]
fn california_earthquake_is_extreme() {
    let r = RiskAssessor::builtin().compute_risk(DisasterCategory::Earthquake, "United States", "California");
    assert_eq!(r.risk_score, 92);
    assert_eq!(r.risk_level, RiskLevel::Extreme);
}

#[test]
fn lookup_is_not_normalized() {
    let assessor = RiskAssessor::builtin();
    let exact = assessor.compute_risk(DisasterCategory::Earthquake, "United States", "California");
    let lower = assessor.compute_risk(DisasterCategory::Earthquake, "United States", "california");
    let padded = assessor.compute_risk(DisasterCategory::Earthquake, "United States", "California ");
    assert_eq!(exact.source, ScoreSource::Table);
    assert_eq!(lower.source, ScoreSource::Synthetic);
    assert_eq!(padded.source, ScoreSource::Synthetic);
}

#[test]
fn level_boundaries_belong_to_higher_level() {
    assert_eq!(classify(0.30), RiskLevel::Moderate);
    assert_eq!(classify(0.60), RiskLevel::High);
    assert_eq!(classify(0.80), RiskLevel::Extreme);
    // reachable through the synthetic path as well
    assert_eq!(synthetic_score(DisasterCategory::Flood, "", ""), 0.60);
}

#[test]
fn earthquake_high_recommendations() {
    let expected = [
        "Secure heavy furniture and appliances to walls",
        "Identify safe places in each room (under sturdy furniture, against interior walls)",
        "Learn how to shut off gas, water, and electricity",
        "Practice earthquake drills ('Drop, Cover, and Hold On')",
    ];
    assert_eq!(
        recommendations::for_level(DisasterCategory::Earthquake, RiskLevel::High),
        expected
    );

    // Sicily earthquake is 0.65
    let r = RiskAssessor::builtin().compute_risk(DisasterCategory::Earthquake, "Italy", "Sicily");
    assert_eq!(r.risk_level, RiskLevel::High);
    assert_eq!(r.recommendations, expected);
}

#[test]
fn missing_levels_fall_back_to_moderate() {
    let levels = [RiskLevel::Low, RiskLevel::Moderate, RiskLevel::High, RiskLevel::Extreme];
    for category in DisasterCategory::ALL {
        let moderate = recommendations::explicit(category, RiskLevel::Moderate).unwrap();
        for level in levels {
            let got = recommendations::for_level(category, level);
            match recommendations::explicit(category, level) {
                Some(list) => assert_eq!(got, list),
                None => assert_eq!(got, moderate, "{category} {level}"),
            }
        }
    }
}

#[test]
fn configured_tables_feed_the_assessor() {
    let configured = RiskTables::with_overrides([(DisasterCategory::Tsunami, "Atlantis", 0.25)]);
    let assessor = RiskAssessor::new(&configured);

    let r = assessor.compute_risk(DisasterCategory::Tsunami, "Ocean", "Atlantis");
    assert_eq!(r.source, ScoreSource::Table);
    assert_eq!(r.risk_score, 25);
    assert_eq!(r.risk_level, RiskLevel::Low);
    // Tsunami has no Low list of its own
    assert_eq!(
        r.recommendations,
        recommendations::explicit(DisasterCategory::Tsunami, RiskLevel::Moderate).unwrap()
    );

    // builtin tables unaffected
    let builtin = RiskAssessor::new(tables::builtin()).compute_risk(DisasterCategory::Tsunami, "Ocean", "Atlantis");
    assert_eq!(builtin.source, ScoreSource::Synthetic);
}

#[test]
fn json_uses_camel_case_fields() {
    let r = RiskAssessor::builtin().compute_risk(DisasterCategory::Cyclone, "India", "Odisha");
    let value = serde_json::to_value(&r).unwrap();
    assert_eq!(value["riskScore"], 85);
    assert_eq!(value["riskLevel"], "Extreme");
    assert_eq!(value["category"], "cyclone");
    assert_eq!(value["country"], "India");
    assert_eq!(value["region"], "Odisha");
    assert_eq!(value["source"], "table");
    assert_eq!(value["recommendations"].as_array().map(Vec::len), Some(r.recommendations.len()));
}
