use serde::Serialize;

use crate::models::DisasterCategory;

/// A named place with a curated risk percentage, as plotted on the risk map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hotspot {
    pub name: &'static str,
    pub longitude: f64,
    pub latitude: f64,
    pub risk: u8,
}

const fn spot(name: &'static str, longitude: f64, latitude: f64, risk: u8) -> Hotspot {
    Hotspot {
        name,
        longitude,
        latitude,
        risk,
    }
}

const EARTHQUAKE: &[Hotspot] = &[
    spot("San Francisco", -122.4194, 37.7749, 85),
    spot("Tokyo", 139.6503, 35.6762, 90),
    spot("Mexico City", -99.1332, 19.4326, 75),
    spot("Istanbul", 28.9784, 41.0082, 80),
    spot("Kathmandu", 85.3240, 27.7172, 82),
    spot("Los Angeles", -118.2437, 34.0522, 80),
    spot("Seattle", -122.3321, 47.6062, 70),
    spot("Lima", -77.0428, -12.0464, 78),
    spot("Wellington", 174.7787, -41.2924, 75),
];

const FLOOD: &[Hotspot] = &[
    spot("New Orleans", -90.0715, 29.9511, 88),
    spot("Bangkok", 100.5018, 13.7563, 85),
    spot("Mumbai", 72.8777, 19.0760, 80),
    spot("Bangladesh", 90.3563, 23.6850, 90),
    spot("Jakarta", 106.8456, -6.2088, 82),
    spot("Houston", -95.3698, 29.7604, 75),
    spot("Venice", 12.3155, 45.4408, 78),
    spot("Manila", 120.9842, 14.5995, 83),
    spot("Chennai", 80.2707, 13.0827, 79),
];

const WILDFIRE: &[Hotspot] = &[
    spot("California", -119.4179, 36.7783, 90),
    spot("Australia", 133.7751, -25.2744, 88),
    spot("Portugal", -8.2245, 39.3999, 75),
    spot("Greece", 21.8243, 39.0742, 78),
    spot("Canada", -106.3468, 56.1304, 72),
    spot("Colorado", -105.7821, 39.5501, 80),
    spot("Spain", -3.7492, 40.4637, 77),
    spot("Arizona", -111.0937, 34.0489, 85),
    spot("Siberia", 99.1967, 61.0137, 70),
];

const TSUNAMI: &[Hotspot] = &[
    spot("Japan", 138.2529, 36.2048, 90),
    spot("Indonesia", 113.9213, -0.7893, 88),
    spot("Chile", -71.5430, -35.6751, 85),
    spot("Hawaii", -155.5828, 19.8968, 80),
    spot("Alaska", -149.4937, 64.2008, 75),
    spot("Philippines", 121.7740, 12.8797, 83),
    spot("Thailand", 100.9925, 15.8700, 75),
    spot("Sri Lanka", 80.7718, 7.8731, 70),
    spot("New Zealand", 171.7799, -41.2865, 78),
];

/// Hotspots in curated order. Cyclones are not mapped and yield an empty slice.
pub fn for_category(category: DisasterCategory) -> &'static [Hotspot] {
    match category {
        DisasterCategory::Earthquake => EARTHQUAKE,
        DisasterCategory::Flood => FLOOD,
        DisasterCategory::Wildfire => WILDFIRE,
        DisasterCategory::Tsunami => TSUNAMI,
        DisasterCategory::Cyclone => &[],
    }
}

/// Hotspots ordered by risk (highest first), ties broken by name.
pub fn ranked(category: DisasterCategory) -> Vec<&'static Hotspot> {
    let mut spots: Vec<&Hotspot> = for_category(category).iter().collect();
    spots.sort_by(|a, b| b.risk.cmp(&a.risk).then_with(|| a.name.cmp(b.name)));
    spots
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cyclone_has_no_hotspots() {
        assert!(for_category(DisasterCategory::Cyclone).is_empty());
        assert!(ranked(DisasterCategory::Cyclone).is_empty());
    }

    #[test]
    fn test_ranked_orders_by_risk_then_name() {
        let spots = ranked(DisasterCategory::Earthquake);
        assert_eq!(spots[0].name, "Tokyo");
        assert_eq!(spots[1].name, "San Francisco");
        // Istanbul and Los Angeles tie at 80
        assert_eq!(spots[3].name, "Istanbul");
        assert_eq!(spots[4].name, "Los Angeles");
        assert!(spots.windows(2).all(|w| w[0].risk >= w[1].risk));
    }

    #[test]
    fn test_coordinates_in_range() {
        for category in DisasterCategory::ALL {
            for s in for_category(category) {
                assert!((-180.0..=180.0).contains(&s.longitude), "{}", s.name);
                assert!((-90.0..=90.0).contains(&s.latitude), "{}", s.name);
                assert!(s.risk <= 100);
            }
        }
    }
}
