//! Fixed country and region lists offered for selection.
//!
//! The assessor accepts any text; these lists only back the `locations`
//! listing and `predict --strict`.

const GAZETTEER: &[(&str, &[&str])] = &[
    (
        "India",
        &["Gujarat", "Tamil Nadu", "Maharashtra", "Kerala", "Assam", "Odisha"],
    ),
    (
        "United States",
        &["California", "Florida", "Texas", "Hawaii", "Washington", "Oregon"],
    ),
    ("Japan", &["Tokyo", "Miyagi", "Fukushima", "Hokkaido", "Okinawa"]),
    ("Indonesia", &["Java", "Sumatra", "Sulawesi", "Bali", "Papua"]),
    ("Philippines", &["Luzon", "Visayas", "Mindanao"]),
    ("China", &["Sichuan", "Yunnan", "Guangdong", "Fujian", "Hainan"]),
    ("Mexico", &["Oaxaca", "Chiapas", "Guerrero", "Michoacán", "Colima"]),
    ("Italy", &["Sicily", "Calabria", "Campania", "Lazio", "Emilia-Romagna"]),
    (
        "Australia",
        &[
            "Queensland",
            "New South Wales",
            "Western Australia",
            "Victoria",
            "Northern Territory",
        ],
    ),
    (
        "New Zealand",
        &["Canterbury", "Wellington", "Otago", "Hawke's Bay", "Bay of Plenty"],
    ),
];

/// Countries in display order.
pub fn countries() -> impl Iterator<Item = &'static str> {
    GAZETTEER.iter().map(|(country, _)| *country)
}

/// Regions listed for `country`, or `None` for a country not in the list.
pub fn regions(country: &str) -> Option<&'static [&'static str]> {
    GAZETTEER
        .iter()
        .find(|(c, _)| *c == country)
        .map(|(_, regions)| *regions)
}

/// Exact-match membership test for a (country, region) selection.
pub fn is_known(country: &str, region: &str) -> bool {
    regions(country).is_some_and(|rs| rs.contains(&region))
}
