//! Static service catalog: the master list of categories and leaf services
//! used across the browse grid, the search flow, and the signup wizard.

/// Top-level service classification shown to end users
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceCategory {
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
}

/// A leaf offering within a category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Service {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    /// Typical rate in KSH
    pub typical_rate: u32,
    pub urgency_keywords: &'static [&'static str],
}

pub static CATEGORIES: &[ServiceCategory] = &[
    ServiceCategory {
        key: "plumbing",
        name: "Plumbing",
        description: "Water systems, pipes, and drainage solutions",
        icon: "🔧",
        color: "blue",
    },
    ServiceCategory {
        key: "electrical",
        name: "Electrical",
        description: "Wiring, lighting, and electrical installations",
        icon: "⚡",
        color: "yellow",
    },
    ServiceCategory {
        key: "hvac",
        name: "HVAC",
        description: "Heating, ventilation, and air conditioning",
        icon: "🌡️",
        color: "orange",
    },
    ServiceCategory {
        key: "carpentry",
        name: "Carpentry",
        description: "Wood work, furniture, and custom installations",
        icon: "🔨",
        color: "amber",
    },
    ServiceCategory {
        key: "painting",
        name: "Painting",
        description: "Interior and exterior painting services",
        icon: "🖌️",
        color: "green",
    },
    ServiceCategory {
        key: "cleaning",
        name: "Cleaning",
        description: "Residential and commercial cleaning services",
        icon: "🧹",
        color: "teal",
    },
    ServiceCategory {
        key: "appliance_repair",
        name: "Appliance Repair",
        description: "Repair and maintenance of home appliances",
        icon: "🛠️",
        color: "purple",
    },
    ServiceCategory {
        key: "gardening",
        name: "Gardening & Landscaping",
        description: "Garden maintenance and landscape design",
        icon: "🌱",
        color: "emerald",
    },
    ServiceCategory {
        key: "security",
        name: "Security & Safety",
        description: "Security systems and safety installations",
        icon: "🛡️",
        color: "red",
    },
    ServiceCategory {
        key: "roofing",
        name: "Roofing",
        description: "Roof installation, repair, and maintenance",
        icon: "🏠",
        color: "slate",
    },
    ServiceCategory {
        key: "flooring",
        name: "Flooring",
        description: "Floor installation and refinishing",
        icon: "🪵",
        color: "stone",
    },
    ServiceCategory {
        key: "general_handyman",
        name: "General Handyman",
        description: "Various small repairs and maintenance tasks",
        icon: "🧰",
        color: "gray",
    },
    ServiceCategory {
        key: "pest_control",
        name: "Pest Control",
        description: "Eliminate pests and prevent infestations",
        icon: "🐜",
        color: "red",
    },
    ServiceCategory {
        key: "moving",
        name: "Moving & Transport",
        description: "Moving services and transportation",
        icon: "🚚",
        color: "blue",
    },
    ServiceCategory {
        key: "automotive",
        name: "Automotive Services",
        description: "Car repairs and maintenance",
        icon: "🚗",
        color: "orange",
    },
    ServiceCategory {
        key: "wellness",
        name: "Health & Wellness",
        description: "Personal care and wellness services",
        icon: "💆",
        color: "pink",
    },
    ServiceCategory {
        key: "business_services",
        name: "Business Services",
        description: "Professional and business support services",
        icon: "💼",
        color: "indigo",
    },
    ServiceCategory {
        key: "catering",
        name: "Catering & Events",
        description: "Food service and event planning",
        icon: "🍽️",
        color: "yellow",
    },
    ServiceCategory {
        key: "tutoring",
        name: "Education & Tutoring",
        description: "Educational services and tutoring",
        icon: "🎓",
        color: "emerald",
    },
    ServiceCategory {
        key: "technology",
        name: "Tech Support",
        description: "Computer and technology services",
        icon: "💻",
        color: "cyan",
    },
];

pub static SERVICES: &[Service] = &[
    // Plumbing
    Service {
        id: "plumbing_001",
        name: "Pipe Installation",
        description: "Install new water supply or drainage pipes",
        category: "plumbing",
        typical_rate: 2500,
        urgency_keywords: &["leak", "burst", "flooding", "no water"],
    },
    Service {
        id: "plumbing_002",
        name: "Leak Repair",
        description: "Fix leaking pipes, faucets, or fixtures",
        category: "plumbing",
        typical_rate: 1500,
        urgency_keywords: &["leak", "dripping", "water damage"],
    },
    Service {
        id: "plumbing_003",
        name: "Toilet Repair/Installation",
        description: "Fix or install toilets and related plumbing",
        category: "plumbing",
        typical_rate: 2000,
        urgency_keywords: &["toilet blocked", "toilet broken", "bathroom flooded"],
    },
    Service {
        id: "plumbing_004",
        name: "Drain Cleaning",
        description: "Clear blocked drains and sewage lines",
        category: "plumbing",
        typical_rate: 1800,
        urgency_keywords: &["blocked", "clogged", "overflow", "backup"],
    },
    Service {
        id: "plumbing_005",
        name: "Water Heater Service",
        description: "Install, repair, or maintain water heaters",
        category: "plumbing",
        typical_rate: 3500,
        urgency_keywords: &["no hot water", "cold shower", "heater broken"],
    },
    // Electrical
    Service {
        id: "electrical_001",
        name: "Wiring Installation",
        description: "Install electrical wiring for new constructions or renovations",
        category: "electrical",
        typical_rate: 3000,
        urgency_keywords: &["no power", "electrical fire", "sparks", "shock"],
    },
    Service {
        id: "electrical_002",
        name: "Outlet Installation",
        description: "Install new electrical outlets and switches",
        category: "electrical",
        typical_rate: 800,
        urgency_keywords: &["no power", "outlet not working"],
    },
    Service {
        id: "electrical_003",
        name: "Light Fixture Installation",
        description: "Install ceiling lights, chandeliers, and other fixtures",
        category: "electrical",
        typical_rate: 1500,
        urgency_keywords: &["no lights", "darkness", "bulb won't work"],
    },
    Service {
        id: "electrical_004",
        name: "Circuit Breaker Repair",
        description: "Fix or replace circuit breakers and electrical panels",
        category: "electrical",
        typical_rate: 4000,
        urgency_keywords: &["power outage", "breaker tripping", "no electricity"],
    },
    Service {
        id: "electrical_005",
        name: "Emergency Electrical Repair",
        description: "Urgent electrical issues and safety concerns",
        category: "electrical",
        typical_rate: 5000,
        urgency_keywords: &["electrical emergency", "sparks", "burning smell", "shock"],
    },
    // HVAC
    Service {
        id: "hvac_001",
        name: "Air Conditioning Installation",
        description: "Install new AC units and cooling systems",
        category: "hvac",
        typical_rate: 15000,
        urgency_keywords: &["no cooling", "hot", "overheating"],
    },
    Service {
        id: "hvac_002",
        name: "AC Repair & Maintenance",
        description: "Repair and service air conditioning units",
        category: "hvac",
        typical_rate: 3500,
        urgency_keywords: &["ac not working", "not cooling", "hot air"],
    },
    Service {
        id: "hvac_003",
        name: "Ventilation System Installation",
        description: "Install exhaust fans and ventilation systems",
        category: "hvac",
        typical_rate: 4500,
        urgency_keywords: &["poor ventilation", "stuffy", "condensation"],
    },
    Service {
        id: "hvac_004",
        name: "Heating System Service",
        description: "Install and repair heating systems",
        category: "hvac",
        typical_rate: 8000,
        urgency_keywords: &["no heat", "cold", "heater broken"],
    },
    // Carpentry
    Service {
        id: "carpentry_001",
        name: "Custom Furniture Building",
        description: "Build custom cabinets, shelves, and furniture",
        category: "carpentry",
        typical_rate: 8000,
        urgency_keywords: &["broken furniture", "storage needed"],
    },
    Service {
        id: "carpentry_002",
        name: "Door Installation",
        description: "Install interior and exterior doors",
        category: "carpentry",
        typical_rate: 3500,
        urgency_keywords: &["door broken", "security issue", "won't close"],
    },
    Service {
        id: "carpentry_003",
        name: "Window Installation",
        description: "Install and repair windows and frames",
        category: "carpentry",
        typical_rate: 4500,
        urgency_keywords: &["broken window", "draft", "security risk"],
    },
    Service {
        id: "carpentry_004",
        name: "Kitchen Cabinet Installation",
        description: "Install kitchen cabinets and countertops",
        category: "carpentry",
        typical_rate: 12000,
        urgency_keywords: &["cabinet broken", "kitchen renovation"],
    },
    // Painting
    Service {
        id: "painting_001",
        name: "Interior Painting",
        description: "Paint interior walls, ceilings, and trim",
        category: "painting",
        typical_rate: 5000,
        urgency_keywords: &["damaged wall", "stains", "peeling paint"],
    },
    Service {
        id: "painting_002",
        name: "Exterior Painting",
        description: "Paint building exteriors and outdoor structures",
        category: "painting",
        typical_rate: 8000,
        urgency_keywords: &["weather damage", "fading", "protection needed"],
    },
    Service {
        id: "painting_003",
        name: "Wallpaper Installation",
        description: "Install and remove wallpaper",
        category: "painting",
        typical_rate: 3500,
        urgency_keywords: &["damaged wallpaper", "peeling", "renovation"],
    },
    // Cleaning
    Service {
        id: "cleaning_001",
        name: "Deep House Cleaning",
        description: "Comprehensive cleaning of entire home",
        category: "cleaning",
        typical_rate: 3500,
        urgency_keywords: &["dirty", "messy", "unhygienic", "guests coming"],
    },
    Service {
        id: "cleaning_002",
        name: "Carpet Cleaning",
        description: "Professional carpet and upholstery cleaning",
        category: "cleaning",
        typical_rate: 2500,
        urgency_keywords: &["stains", "odor", "dirty carpet"],
    },
    Service {
        id: "cleaning_003",
        name: "Post-Construction Cleanup",
        description: "Clean up after construction or renovation work",
        category: "cleaning",
        typical_rate: 4500,
        urgency_keywords: &["construction mess", "dust", "debris"],
    },
    // Appliance repair
    Service {
        id: "appliance_001",
        name: "Refrigerator Repair",
        description: "Fix cooling, leaks, and electrical faults in fridges",
        category: "appliance_repair",
        typical_rate: 3000,
        urgency_keywords: &["fridge not cooling", "food spoiling", "freezer broken"],
    },
    Service {
        id: "appliance_002",
        name: "Washing Machine Repair",
        description: "Repair washers that leak, drum faults, and motors",
        category: "appliance_repair",
        typical_rate: 2500,
        urgency_keywords: &["washer broken", "leaking machine", "not spinning"],
    },
    Service {
        id: "appliance_003",
        name: "Cooker & Oven Repair",
        description: "Gas and electric cooker servicing and repair",
        category: "appliance_repair",
        typical_rate: 2000,
        urgency_keywords: &["gas smell", "oven not heating", "cooker broken"],
    },
    // Gardening
    Service {
        id: "gardening_001",
        name: "Garden Maintenance",
        description: "Regular mowing, pruning, and garden upkeep",
        category: "gardening",
        typical_rate: 2000,
        urgency_keywords: &["overgrown", "unkempt garden"],
    },
    Service {
        id: "gardening_002",
        name: "Landscape Design",
        description: "Design and install new garden landscapes",
        category: "gardening",
        typical_rate: 15000,
        urgency_keywords: &["new garden", "landscaping"],
    },
    Service {
        id: "gardening_003",
        name: "Tree Removal",
        description: "Safe removal of trees and large branches",
        category: "gardening",
        typical_rate: 6000,
        urgency_keywords: &["fallen tree", "dangerous branch", "storm damage"],
    },
    // Security
    Service {
        id: "security_001",
        name: "CCTV Installation",
        description: "Install security cameras and monitoring systems",
        category: "security",
        typical_rate: 12000,
        urgency_keywords: &["break in", "theft", "security breach"],
    },
    Service {
        id: "security_002",
        name: "Alarm System Installation",
        description: "Install and configure burglar alarm systems",
        category: "security",
        typical_rate: 8000,
        urgency_keywords: &["alarm not working", "security risk"],
    },
    Service {
        id: "security_003",
        name: "Lock Replacement",
        description: "Replace and upgrade door locks",
        category: "security",
        typical_rate: 1500,
        urgency_keywords: &["locked out", "broken lock", "lost keys"],
    },
    // Roofing
    Service {
        id: "roofing_001",
        name: "Roof Repair",
        description: "Fix leaking or damaged roofs",
        category: "roofing",
        typical_rate: 6000,
        urgency_keywords: &["roof leaking", "water coming in", "storm damage"],
    },
    Service {
        id: "roofing_002",
        name: "Roof Installation",
        description: "Install new roofing on constructions",
        category: "roofing",
        typical_rate: 30000,
        urgency_keywords: &["new roof", "construction"],
    },
    Service {
        id: "roofing_003",
        name: "Gutter Cleaning & Repair",
        description: "Clean and repair rain gutters and downpipes",
        category: "roofing",
        typical_rate: 2000,
        urgency_keywords: &["blocked gutter", "overflow", "rain damage"],
    },
    // Flooring
    Service {
        id: "flooring_001",
        name: "Tile Installation",
        description: "Install ceramic and porcelain floor tiles",
        category: "flooring",
        typical_rate: 5000,
        urgency_keywords: &["broken tiles", "cracked floor"],
    },
    Service {
        id: "flooring_002",
        name: "Wood Floor Installation",
        description: "Install and refinish hardwood floors",
        category: "flooring",
        typical_rate: 9000,
        urgency_keywords: &["damaged floor", "renovation"],
    },
    // General handyman
    Service {
        id: "handyman_001",
        name: "General Repairs",
        description: "Small household repairs and maintenance",
        category: "general_handyman",
        typical_rate: 1500,
        urgency_keywords: &["broken", "repair needed", "fix"],
    },
    Service {
        id: "handyman_002",
        name: "Furniture Assembly",
        description: "Assemble flat-pack and modular furniture",
        category: "general_handyman",
        typical_rate: 1200,
        urgency_keywords: &["assembly", "new furniture"],
    },
    Service {
        id: "handyman_003",
        name: "Mounting & Hanging",
        description: "Mount TVs, shelves, mirrors, and artwork",
        category: "general_handyman",
        typical_rate: 1000,
        urgency_keywords: &["mount tv", "hang shelf"],
    },
    // Pest control
    Service {
        id: "pest_001",
        name: "Fumigation",
        description: "Whole-property fumigation against insects",
        category: "pest_control",
        typical_rate: 5000,
        urgency_keywords: &["cockroaches", "bedbugs", "infestation"],
    },
    Service {
        id: "pest_002",
        name: "Rodent Control",
        description: "Eliminate rats and mice and seal entry points",
        category: "pest_control",
        typical_rate: 3500,
        urgency_keywords: &["rats", "mice", "rodents"],
    },
    // Moving
    Service {
        id: "moving_001",
        name: "House Moving",
        description: "Full household relocation services",
        category: "moving",
        typical_rate: 15000,
        urgency_keywords: &["moving house", "relocation"],
    },
    Service {
        id: "moving_002",
        name: "Furniture Transport",
        description: "Transport single items and small loads",
        category: "moving",
        typical_rate: 3000,
        urgency_keywords: &["deliver furniture", "pickup truck"],
    },
    // Automotive
    Service {
        id: "auto_001",
        name: "Mobile Mechanic",
        description: "On-site car diagnosis and repair",
        category: "automotive",
        typical_rate: 3000,
        urgency_keywords: &["car won't start", "breakdown", "stalled"],
    },
    Service {
        id: "auto_002",
        name: "Car Battery Replacement",
        description: "Supply and fit replacement car batteries",
        category: "automotive",
        typical_rate: 1500,
        urgency_keywords: &["dead battery", "jump start"],
    },
    // Wellness
    Service {
        id: "wellness_001",
        name: "Home Massage Therapy",
        description: "Professional massage at your home",
        category: "wellness",
        typical_rate: 3000,
        urgency_keywords: &["back pain", "massage"],
    },
    Service {
        id: "wellness_002",
        name: "Personal Training",
        description: "One-on-one fitness coaching",
        category: "wellness",
        typical_rate: 2000,
        urgency_keywords: &["fitness", "training"],
    },
    // Business services
    Service {
        id: "business_001",
        name: "Accounting Services",
        description: "Bookkeeping and tax preparation",
        category: "business_services",
        typical_rate: 5000,
        urgency_keywords: &["taxes", "accounting", "bookkeeping"],
    },
    Service {
        id: "business_002",
        name: "Marketing Services",
        description: "Digital marketing and advertising",
        category: "business_services",
        typical_rate: 6000,
        urgency_keywords: &["marketing", "advertising", "promotion"],
    },
    // Catering
    Service {
        id: "catering_001",
        name: "Event Catering",
        description: "Food service for events and parties",
        category: "catering",
        typical_rate: 12000,
        urgency_keywords: &["party", "event", "wedding", "catering"],
    },
    Service {
        id: "catering_002",
        name: "Event Planning",
        description: "Complete event planning and coordination",
        category: "catering",
        typical_rate: 15000,
        urgency_keywords: &["event planning", "party planning", "coordination"],
    },
    // Tutoring
    Service {
        id: "tutoring_001",
        name: "Academic Tutoring",
        description: "Subject-specific tutoring for students",
        category: "tutoring",
        typical_rate: 1500,
        urgency_keywords: &["homework help", "exam preparation", "tutoring"],
    },
    Service {
        id: "tutoring_002",
        name: "Language Teaching",
        description: "Foreign language instruction",
        category: "tutoring",
        typical_rate: 2000,
        urgency_keywords: &["learn language", "english lessons", "swahili"],
    },
    // Technology
    Service {
        id: "tech_001",
        name: "Computer Repair",
        description: "PC and laptop repair services",
        category: "technology",
        typical_rate: 3500,
        urgency_keywords: &["computer broken", "laptop repair", "blue screen"],
    },
    Service {
        id: "tech_002",
        name: "Phone Repair",
        description: "Smartphone and tablet repair",
        category: "technology",
        typical_rate: 2500,
        urgency_keywords: &["phone broken", "cracked screen", "water damage"],
    },
    Service {
        id: "tech_003",
        name: "Network Setup",
        description: "WiFi and network installation",
        category: "technology",
        typical_rate: 4000,
        urgency_keywords: &["no internet", "wifi setup", "network"],
    },
];

pub fn categories() -> &'static [ServiceCategory] {
    CATEGORIES
}

pub fn category(key: &str) -> Option<&'static ServiceCategory> {
    CATEGORIES.iter().find(|c| c.key == key)
}

pub fn services_for(category_key: &str) -> Vec<&'static Service> {
    SERVICES.iter().filter(|s| s.category == category_key).collect()
}

/// Services whose urgency keywords appear in a free-text description
pub fn urgent_services(description: &str) -> Vec<&'static Service> {
    let description = description.to_lowercase();
    SERVICES
        .iter()
        .filter(|s| {
            s.urgency_keywords
                .iter()
                .any(|kw| description.contains(&kw.to_lowercase()))
        })
        .collect()
}

/// Human form of a category key when the catalog has no entry for it
/// (e.g. a key minted server-side)
pub fn display_name(key: &str) -> String {
    match category(key) {
        Some(c) => c.name.to_string(),
        None => key.replace('_', " "),
    }
}

/// Card styling per catalog color scheme
pub fn color_classes(color: &str) -> &'static str {
    match color {
        "blue" => "border-blue-200 bg-blue-50 hover:bg-blue-100",
        "green" => "border-green-200 bg-green-50 hover:bg-green-100",
        "purple" => "border-purple-200 bg-purple-50 hover:bg-purple-100",
        "orange" => "border-orange-200 bg-orange-50 hover:bg-orange-100",
        "yellow" => "border-yellow-200 bg-yellow-50 hover:bg-yellow-100",
        "amber" => "border-amber-200 bg-amber-50 hover:bg-amber-100",
        "teal" => "border-teal-200 bg-teal-50 hover:bg-teal-100",
        "emerald" => "border-emerald-200 bg-emerald-50 hover:bg-emerald-100",
        "red" => "border-red-200 bg-red-50 hover:bg-red-100",
        "slate" => "border-slate-200 bg-slate-50 hover:bg-slate-100",
        "stone" => "border-stone-200 bg-stone-50 hover:bg-stone-100",
        "indigo" => "border-indigo-200 bg-indigo-50 hover:bg-indigo-100",
        "cyan" => "border-cyan-200 bg-cyan-50 hover:bg-cyan-100",
        "pink" => "border-pink-200 bg-pink-50 hover:bg-pink-100",
        _ => "border-gray-200 bg-gray-50 hover:bg-gray-100",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn category_keys_are_unique() {
        let mut seen = HashSet::new();
        for c in CATEGORIES {
            assert!(seen.insert(c.key), "duplicate category key {}", c.key);
        }
    }

    #[test]
    fn every_service_belongs_to_a_known_category() {
        for s in SERVICES {
            assert!(
                category(s.category).is_some(),
                "service {} references unknown category {}",
                s.id,
                s.category
            );
        }
    }

    #[test]
    fn every_category_offers_services() {
        for c in CATEGORIES {
            assert!(
                !services_for(c.key).is_empty(),
                "category {} has no services",
                c.key
            );
        }
    }

    #[test]
    fn urgency_scan_matches_case_insensitively() {
        let hits = urgent_services("There is a LEAK under my kitchen sink");
        assert!(hits.iter().any(|s| s.id == "plumbing_002"));
        assert!(urgent_services("everything is fine, no issues at all").is_empty());
    }

    #[test]
    fn display_name_falls_back_to_key() {
        assert_eq!(display_name("plumbing"), "Plumbing");
        assert_eq!(display_name("goat_grooming"), "goat grooming");
    }
}
