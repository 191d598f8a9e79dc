use crate::models::DisasterCategory::{self, *};

/// Curated (category, region, score) entries. Scores are fractions in `[0, 1]`.
pub const BUILTIN_SCORES: &[(DisasterCategory, &str, f64)] = &[
    // Earthquake
    (Earthquake, "California", 0.92),
    (Earthquake, "Tokyo", 0.90),
    (Earthquake, "Gujarat", 0.70),
    (Earthquake, "Java", 0.80),
    (Earthquake, "Miyagi", 0.85),
    (Earthquake, "Sichuan", 0.80),
    (Earthquake, "Oaxaca", 0.75),
    (Earthquake, "Sicily", 0.65),
    (Earthquake, "Wellington", 0.75),
    (Earthquake, "Canterbury", 0.70),
    // Flood
    (Flood, "Kerala", 0.80),
    (Flood, "Assam", 0.90),
    (Flood, "Florida", 0.75),
    (Flood, "Guangdong", 0.70),
    (Flood, "Queensland", 0.65),
    (Flood, "Sumatra", 0.75),
    (Flood, "Mindanao", 0.70),
    (Flood, "Hokkaido", 0.50),
    (Flood, "Texas", 0.60),
    (Flood, "Odisha", 0.80),
    // Wildfire
    (Wildfire, "California", 0.90),
    (Wildfire, "New South Wales", 0.85),
    (Wildfire, "Sumatra", 0.70),
    (Wildfire, "Michoacán", 0.65),
    (Wildfire, "Oregon", 0.80),
    (Wildfire, "Sardinia", 0.75),
    (Wildfire, "Victoria", 0.80),
    (Wildfire, "Hawke's Bay", 0.60),
    (Wildfire, "Yunnan", 0.50),
    // Tsunami
    (Tsunami, "Fukushima", 0.80),
    (Tsunami, "Hawaii", 0.70),
    (Tsunami, "Tamil Nadu", 0.65),
    (Tsunami, "Sumatra", 0.85),
    (Tsunami, "Mindanao", 0.75),
    (Tsunami, "Hokkaido", 0.70),
    (Tsunami, "Okinawa", 0.75),
    (Tsunami, "Calabria", 0.60),
    (Tsunami, "Bay of Plenty", 0.65),
    (Tsunami, "Papua", 0.70),
    // Cyclone
    (Cyclone, "Odisha", 0.85),
    (Cyclone, "Florida", 0.80),
    (Cyclone, "Queensland", 0.75),
    (Cyclone, "Guangdong", 0.70),
    (Cyclone, "Visayas", 0.85),
    (Cyclone, "Luzon", 0.80),
    (Cyclone, "Hainan", 0.75),
    (Cyclone, "Okinawa", 0.70),
    (Cyclone, "Fujian", 0.65),
    (Cyclone, "Tamil Nadu", 0.75),
];

/// Fixed per-category base weight of the synthetic score, in hundredths.
pub fn synthetic_weight(category: DisasterCategory) -> u32 {
    match category {
        Earthquake => 70,
        Flood => 60,
        Wildfire => 65,
        Tsunami => 55,
        Cyclone => 62,
    }
}
