//! Knowledge-base articles and frequently asked questions.

use crate::models::DisasterCategory;

#[derive(Debug, Clone)]
pub struct DisasterArticle {
    pub category: DisasterCategory,
    pub title: &'static str,
    pub description: &'static str,
    pub causes: &'static [&'static str],
    pub effects: &'static [&'static str],
    pub preparation: &'static [&'static str],
    pub high_risk_areas: &'static [&'static str],
    /// Short explanation of what drives this hazard's risk, shown next to the map.
    pub risk_factors: &'static str,
}

#[derive(Debug, Clone)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
    pub points: &'static [&'static str],
    pub note: Option<&'static str>,
}

const ARTICLES: &[DisasterArticle] = &[
    DisasterArticle {
        category: DisasterCategory::Earthquake,
        title: "Earthquakes",
        description: "Sudden shaking of the ground caused by movements within the Earth's crust.",
        causes: &[
            "Tectonic plate movements",
            "Volcanic activity",
            "Human activities like mining or reservoir-induced seismicity",
            "Natural gas extraction",
        ],
        effects: &[
            "Ground shaking and rupturing",
            "Landslides and avalanches",
            "Tsunamis in coastal regions",
            "Structural damage to buildings and infrastructure",
            "Fires from damaged gas lines",
            "Economic losses and societal disruption",
        ],
        preparation: &[
            "Identify safe places in each room (under sturdy furniture, against interior walls)",
            "Secure heavy furniture and appliances to walls",
            "Create an emergency communication plan",
            "Keep an emergency kit with first aid supplies, food, and water",
            "Learn how to shut off gas, water, and electricity",
            "Practice earthquake drills ('Drop, Cover, and Hold On')",
        ],
        high_risk_areas: &[
            "Pacific 'Ring of Fire' (Japan, Philippines, Indonesia, New Zealand, West Coast of North and South America)",
            "Mediterranean-Himalayan Belt (Italy, Greece, Turkey, Iran, Northern India)",
            "Mid-Atlantic Ridge",
            "East African Rift Zone",
        ],
        risk_factors: "Earthquake risk is highest along tectonic plate boundaries, particularly in the \
            Pacific Ring of Fire. Factors include fault line proximity, soil type, and building standards.",
    },
    DisasterArticle {
        category: DisasterCategory::Flood,
        title: "Floods",
        description: "Overflow of water onto normally dry land, often caused by heavy rainfall or coastal storm surges.",
        causes: &[
            "Heavy rainfall",
            "Snowmelt",
            "Dam or levee failures",
            "Storm surges in coastal areas",
            "Urban development reducing natural drainage",
            "Deforestation and loss of water-absorbing vegetation",
        ],
        effects: &[
            "Property damage and destruction",
            "Contamination of water supplies",
            "Loss of crops and livestock",
            "Erosion and soil degradation",
            "Displacement of populations",
            "Spread of waterborne diseases",
        ],
        preparation: &[
            "Know if you live in a flood-prone area",
            "Elevate electrical systems and valuables",
            "Install check valves in plumbing",
            "Waterproof your basement",
            "Create an evacuation plan",
            "Prepare emergency supplies and important documents",
            "Consider flood insurance",
        ],
        high_risk_areas: &[
            "Low-lying coastal regions",
            "River floodplains",
            "Monsoon-affected regions (South Asia)",
            "Areas with poor drainage systems",
            "Urban areas with high impervious surface coverage",
            "Regions affected by tropical cyclones",
        ],
        risk_factors: "Flooding risk is determined by elevation, proximity to water bodies, rainfall patterns, \
            and drainage infrastructure. Climate change is intensifying flood risks globally.",
    },
    DisasterArticle {
        category: DisasterCategory::Wildfire,
        title: "Wildfires",
        description: "Uncontrolled fires that burn in wildland vegetation, often in rural areas.",
        causes: &[
            "Lightning strikes",
            "Human activities (campfires, cigarettes, arson)",
            "Power line failures",
            "Prescribed burns that escape control",
            "Hot, dry, and windy conditions",
            "Climate change extending fire seasons",
        ],
        effects: &[
            "Destruction of forest ecosystems",
            "Loss of wildlife habitat",
            "Property damage in wildland-urban interface",
            "Air pollution and respiratory health issues",
            "Soil erosion and increased flood risk after fires",
            "Economic impact on tourism and forestry",
        ],
        preparation: &[
            "Create defensible space around your home",
            "Use fire-resistant materials for construction and landscaping",
            "Clear gutters and roof of debris",
            "Prepare an evacuation plan and emergency kit",
            "Stay informed about fire conditions and warnings",
            "Install smoke detectors and keep fire extinguishers",
        ],
        high_risk_areas: &[
            "Mediterranean climate regions (California, Southern Europe, Australia)",
            "Forested areas with long dry seasons",
            "Areas experiencing drought conditions",
            "Regions with high fuel loads (dense vegetation)",
            "Wildland-urban interface zones",
            "Areas affected by climate change-induced aridification",
        ],
        risk_factors: "Wildfire risk depends on vegetation type, climate conditions, drought frequency, \
            and human activity. Mediterranean climates and areas experiencing drought are particularly vulnerable.",
    },
    DisasterArticle {
        category: DisasterCategory::Tsunami,
        title: "Tsunamis",
        description: "Series of ocean waves caused by underwater disturbances such as earthquakes, volcanic eruptions, or landslides.",
        causes: &[
            "Underwater earthquakes",
            "Submarine landslides",
            "Volcanic eruptions",
            "Meteorite impacts (rare)",
            "Underwater explosions",
        ],
        effects: &[
            "Coastal flooding and inundation",
            "Destruction of buildings and infrastructure",
            "Erosion of shorelines",
            "Contamination of freshwater supplies with saltwater",
            "Loss of life and displacement of coastal populations",
            "Long-term economic impacts on coastal communities",
        ],
        preparation: &[
            "Know tsunami warning signs (ground shaking, unusual ocean behavior)",
            "Identify evacuation routes to higher ground",
            "Create a family emergency plan",
            "Prepare emergency supplies",
            "Stay informed through official warning systems",
            "For coastal buildings, consider tsunami-resistant design",
        ],
        high_risk_areas: &[
            "Pacific 'Ring of Fire' coastlines",
            "Indian Ocean coastlines",
            "Mediterranean Sea coastal areas",
            "Caribbean islands",
            "Low-lying coastal communities worldwide",
            "Islands and peninsulas with limited evacuation routes",
        ],
        risk_factors: "Tsunami risk is highest in coastal regions near subduction zones, particularly around the \
            Pacific Ocean. Risk factors include ocean depth, coastline shape, and elevation.",
    },
    DisasterArticle {
        category: DisasterCategory::Cyclone,
        title: "Cyclones, Hurricanes & Typhoons",
        description: "Powerful storms characterized by strong winds, heavy rainfall, and storm surges. \
            Called hurricanes in Atlantic/East Pacific, typhoons in Northwest Pacific, and cyclones in South Pacific/Indian Ocean.",
        causes: &[
            "Warm ocean temperatures (above 26°C/79°F)",
            "Atmospheric instability",
            "High humidity in the lower atmosphere",
            "Low vertical wind shear",
            "Pre-existing weather disturbance",
            "Coriolis effect (distance from equator)",
        ],
        effects: &[
            "Strong winds causing structural damage",
            "Heavy rainfall leading to flooding",
            "Storm surges causing coastal flooding",
            "Landslides in mountainous areas",
            "Power outages and infrastructure damage",
            "Economic disruption and displacement of populations",
        ],
        preparation: &[
            "Create a hurricane preparedness plan",
            "Reinforce doors, windows, and roof",
            "Trim trees and branches near your home",
            "Prepare a storm shelter or identify sturdy interior rooms",
            "Stock emergency supplies including water and non-perishable food",
            "Know evacuation routes and follow official directions",
        ],
        high_risk_areas: &[
            "Gulf and Atlantic coasts of the United States",
            "Caribbean islands",
            "East and Southeast Asian coastlines (China, Philippines, Japan, Taiwan)",
            "Bay of Bengal (India, Bangladesh, Myanmar)",
            "Northeast Australia",
            "Indian Ocean islands (Madagascar, Mauritius, Reunion)",
        ],
        risk_factors: "Cyclone risk is highest on low-lying tropical coastlines facing warm ocean basins. \
            Storm surge exposure, building quality, and the reach of early warning systems drive local impact.",
    },
];

const FAQ: &[FaqEntry] = &[
    FaqEntry {
        question: "How accurate are disaster predictions?",
        answer: "Disaster prediction accuracy varies by type. Meteorological disasters like hurricanes can be \
            predicted days in advance with increasing accuracy. Earthquake prediction remains challenging, with \
            scientists focusing on probabilistic forecasts rather than specific predictions. Flood predictions are \
            moderately accurate and improving with better models and data. All predictions become more accurate as \
            the event approaches, and continuous improvements in technology and data collection are enhancing \
            predictive capabilities.",
        points: &[],
        note: None,
    },
    FaqEntry {
        question: "Are natural disasters becoming more frequent due to climate change?",
        answer: "While the total number of natural disasters reported has increased, this is partly due to better \
            reporting and detection. However, climate change is influencing the frequency and intensity of certain \
            types of disasters. There's strong evidence that climate change is increasing the frequency and severity \
            of heat waves, droughts, and intense precipitation events. It's also contributing to more powerful \
            hurricanes and extended wildfire seasons in many regions. The relationship between climate change and \
            earthquakes or volcanic eruptions is minimal or not established.",
        points: &[],
        note: None,
    },
    FaqEntry {
        question: "What should be in a basic disaster preparedness kit?",
        answer: "A basic disaster preparedness kit should include:",
        points: &[
            "Water (one gallon per person per day for at least three days)",
            "Non-perishable food (at least a three-day supply)",
            "Battery-powered or hand-crank radio",
            "Flashlight and extra batteries",
            "First aid kit",
            "Whistle to signal for help",
            "Dust mask, plastic sheeting, and duct tape for shelter",
            "Moist towelettes, garbage bags, and plastic ties for sanitation",
            "Wrench or pliers to turn off utilities",
            "Manual can opener for food",
            "Local maps",
            "Cell phone with chargers and backup battery",
            "Prescription medications and glasses",
            "Important family documents in waterproof container",
        ],
        note: None,
    },
    FaqEntry {
        question: "How do I create a family emergency plan?",
        answer: "To create a family emergency plan:",
        points: &[
            "Discuss types of disasters that could affect your area",
            "Determine how to receive emergency alerts",
            "Identify two ways to exit each room and two meeting places (one near home, one out of neighborhood)",
            "Establish an out-of-area contact person",
            "Document everyone's contact information and medical needs",
            "Practice evacuation routes and meeting at designated locations",
            "Learn about school/workplace emergency plans",
            "Decide where to shelter in different scenarios",
            "Plan for pets and family members with special needs",
            "Keep the plan updated and review it regularly",
        ],
        note: None,
    },
    FaqEntry {
        question: "How can communities increase their disaster resilience?",
        answer: "Communities can increase disaster resilience through:",
        points: &[
            "Developing and maintaining comprehensive disaster management plans",
            "Establishing early warning systems",
            "Investing in infrastructure that can withstand disasters",
            "Incorporating disaster risk reduction in urban planning and building codes",
            "Preserving natural barriers like wetlands and forests",
            "Conducting regular drills and educational programs",
            "Creating community emergency response teams",
            "Supporting vulnerable populations with specific plans",
            "Maintaining emergency funds and insurance programs",
            "Fostering partnerships between government, businesses, and community organizations",
            "Learning from past disasters and adapting plans accordingly",
        ],
        note: None,
    },
    FaqEntry {
        question: "How do I protect important documents in a disaster?",
        answer: "To protect important documents:",
        points: &[
            "Store originals in waterproof, fireproof containers or safe deposit boxes",
            "Create digital copies (scan or photograph) and store in secure cloud storage",
            "Keep password-protected copies on encrypted flash drives",
            "Include copies in your emergency kit in a waterproof container",
            "Share access information with trusted family members",
            "Regularly update documents and their copies",
        ],
        note: Some(
            "Important documents to protect include: identification (passports, birth certificates), \
             financial records, insurance policies, medical information, property records, and emergency \
             contact information.",
        ),
    },
];

pub fn articles() -> &'static [DisasterArticle] {
    ARTICLES
}

pub fn article(category: DisasterCategory) -> &'static DisasterArticle {
    // ARTICLES is ordered like DisasterCategory::ALL
    &ARTICLES[category as usize]
}

pub fn faq() -> &'static [FaqEntry] {
    FAQ
}
