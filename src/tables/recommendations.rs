use crate::models::DisasterCategory::{self, *};
use crate::models::RiskLevel;

/// Preparedness actions curated for one (category, level) pair.
///
/// Returns `None` where no list was written for that combination; callers
/// fall back to the category's [`RiskLevel::Moderate`] list, which every
/// category defines.
pub fn explicit(category: DisasterCategory, level: RiskLevel) -> Option<&'static [&'static str]> {
    let list: &'static [&'static str] = match (category, level) {
        (Earthquake, RiskLevel::Low) => &[
            "Keep an emergency kit with first aid supplies, food, and water",
            "Learn how to shut off gas, water, and electricity",
            "Practice earthquake drills ('Drop, Cover, and Hold On')",
        ],
        (Earthquake, RiskLevel::Moderate) => &[
            "Secure heavy furniture and appliances to walls",
            "Create an emergency communication plan",
            "Identify safe places in each room (under sturdy furniture, against interior walls)",
            "Keep an emergency kit with first aid supplies, food, and water",
        ],
        (Earthquake, RiskLevel::High) => &[
            "Secure heavy furniture and appliances to walls",
            "Identify safe places in each room (under sturdy furniture, against interior walls)",
            "Learn how to shut off gas, water, and electricity",
            "Practice earthquake drills ('Drop, Cover, and Hold On')",
        ],
        (Earthquake, RiskLevel::Extreme) => &[
            "Have your building assessed for seismic retrofitting",
            "Secure heavy furniture and appliances to walls",
            "Learn how to shut off gas, water, and electricity",
            "Practice earthquake drills ('Drop, Cover, and Hold On')",
            "Agree on an out-of-area contact and a meeting place outside the neighborhood",
        ],

        (Flood, RiskLevel::Moderate) => &[
            "Elevate electrical systems and valuables",
            "Install check valves in plumbing",
            "Waterproof your basement",
            "Know evacuation routes and have emergency supplies ready",
        ],
        (Flood, RiskLevel::High) => &[
            "Elevate electrical systems and valuables",
            "Install check valves in plumbing",
            "Prepare emergency supplies and important documents",
            "Create an evacuation plan",
            "Consider flood insurance",
        ],
        (Flood, RiskLevel::Extreme) => &[
            "Create an evacuation plan and rehearse it",
            "Keep important documents in a waterproof container",
            "Elevate electrical systems and valuables",
            "Consider flood insurance",
            "Follow official warnings and leave early when told to evacuate",
        ],

        (Wildfire, RiskLevel::Moderate) => &[
            "Create a defensible space around your home",
            "Use fire-resistant materials for construction and landscaping",
            "Keep gutters and roof clear of debris",
            "Have an evacuation plan and emergency kit ready",
        ],
        (Wildfire, RiskLevel::High) => &[
            "Create a defensible space around your home",
            "Keep gutters and roof clear of debris",
            "Stay informed about fire conditions and warnings",
            "Install smoke detectors and keep fire extinguishers",
            "Have an evacuation plan and emergency kit ready",
        ],

        (Tsunami, RiskLevel::Moderate) => &[
            "Know the tsunami warning signs and evacuation routes",
            "Move to higher ground immediately if warned",
            "Stay away from the coast during warnings",
            "Have an emergency kit prepared",
        ],
        (Tsunami, RiskLevel::Extreme) => &[
            "Know tsunami warning signs (ground shaking, unusual ocean behavior)",
            "Identify evacuation routes to higher ground and walk them with your family",
            "Move to higher ground immediately after strong shaking, without waiting for a warning",
            "Stay informed through official warning systems",
            "Have an emergency kit prepared",
        ],

        (Cyclone, RiskLevel::Moderate) => &[
            "Reinforce doors, windows, and roof",
            "Trim trees and branches near your home",
            "Prepare a storm shelter or identify sturdy interior rooms",
            "Stock emergency supplies including water and non-perishable food",
        ],
        (Cyclone, RiskLevel::High) => &[
            "Create a hurricane preparedness plan",
            "Reinforce doors, windows, and roof",
            "Prepare a storm shelter or identify sturdy interior rooms",
            "Stock emergency supplies including water and non-perishable food",
        ],
        (Cyclone, RiskLevel::Extreme) => &[
            "Create a hurricane preparedness plan",
            "Reinforce doors, windows, and roof",
            "Stock emergency supplies including water and non-perishable food",
            "Know evacuation routes and follow official directions",
        ],

        _ => return None,
    };
    Some(list)
}

/// Recommendations for (category, level), falling back to the Moderate list.
pub fn for_level(category: DisasterCategory, level: RiskLevel) -> &'static [&'static str] {
    explicit(category, level)
        .or_else(|| explicit(category, RiskLevel::Moderate))
        .unwrap_or(&[])
}
