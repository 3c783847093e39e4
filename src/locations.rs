//! Kenya administrative divisions: County > Sub-County > Ward > areas.
//! Read-only; the cascading location selects are pure lookups against this
//! tree keyed by path.

/// Latitude/longitude box used to sanity-check picked coordinates
#[derive(Debug, Clone, Copy)]
pub struct GeoBounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

impl GeoBounds {
    pub fn contains(&self, lat: f64, lng: f64) -> bool {
        lat >= self.min_lat && lat <= self.max_lat && lng >= self.min_lng && lng <= self.max_lng
    }
}

pub const KENYA_BOUNDS: GeoBounds = GeoBounds {
    min_lat: -4.7,
    max_lat: 5.5,
    min_lng: 33.9,
    max_lng: 41.9,
};

#[derive(Debug, Clone, Copy)]
pub struct Ward {
    pub name: &'static str,
    pub areas: &'static [&'static str],
}

#[derive(Debug, Clone, Copy)]
pub struct SubCounty {
    pub name: &'static str,
    pub wards: &'static [Ward],
}

#[derive(Debug, Clone, Copy)]
pub struct County {
    pub name: &'static str,
    pub code: &'static str,
    pub sub_counties: &'static [SubCounty],
}

/// Generic options offered when a ward carries no specific area list
pub static DEFAULT_AREAS: &[&str] = &[
    "City Center",
    "Shopping Mall Area",
    "Residential Estate",
    "Industrial Area",
    "Commercial District",
    "Hospital Area",
    "School Zone",
    "Market Area",
    "Government Offices",
    "Estate",
];

pub static COUNTIES: &[County] = &[
    County {
        name: "Nairobi",
        code: "047",
        sub_counties: &[
            SubCounty {
                name: "Westlands",
                wards: &[
                    Ward {
                        name: "Kitisuru",
                        areas: &[
                            "Kitisuru Estate",
                            "Runda Estate",
                            "Spring Valley",
                            "Gigiri Estate",
                            "Two Rivers Mall Area",
                            "Rosslyn Estate",
                        ],
                    },
                    Ward {
                        name: "Parklands/Highridge",
                        areas: &["Parklands", "Highridge", "Ngara", "Pangani Estate", "Museum Hill"],
                    },
                    Ward {
                        name: "Kangemi",
                        areas: &["Kangemi Market", "Mountain View Estate", "Uthiru", "Kinoo"],
                    },
                ],
            },
            SubCounty {
                name: "Dagoretti North",
                wards: &[
                    Ward {
                        name: "Kilimani",
                        areas: &[
                            "Kilimani Estate",
                            "Hurlingham",
                            "Kileleshwa",
                            "Adam's Arcade",
                            "Junction Shopping Mall",
                        ],
                    },
                    Ward {
                        name: "Kawangware",
                        areas: &["Kawangware 46", "Kawangware 56", "Riruta Satellite", "Dagoretti Corner"],
                    },
                    Ward {
                        name: "Kileleshwa",
                        areas: &["Kileleshwa Estate", "General Mathenge", "Kirichwa Road"],
                    },
                ],
            },
            SubCounty {
                name: "Langata",
                wards: &[
                    Ward {
                        name: "Karen",
                        areas: &[
                            "Karen Estate",
                            "Karen Shopping Centre",
                            "Bogani Road",
                            "Giraffe Centre Area",
                            "Bomas of Kenya Area",
                        ],
                    },
                    Ward {
                        name: "Nairobi West",
                        areas: &["Nairobi West Estate", "Madaraka Estate", "Nyayo Stadium Area", "Wilson Airport Area"],
                    },
                    Ward {
                        name: "South C",
                        areas: &["South C Estate", "Capital Centre", "Bellevue"],
                    },
                ],
            },
            SubCounty {
                name: "Embakasi East",
                wards: &[
                    Ward {
                        name: "Utawala",
                        areas: &["Utawala Estate", "Mihang'o", "Benedicta"],
                    },
                    Ward {
                        name: "Embakasi",
                        areas: &["Pipeline", "Fedha Estate", "Nyayo Estate", "Avenue Park"],
                    },
                ],
            },
        ],
    },
    County {
        name: "Mombasa",
        code: "001",
        sub_counties: &[
            SubCounty {
                name: "Mvita",
                wards: &[
                    Ward {
                        name: "Mji wa Kale/Makadara",
                        areas: &["Old Town", "Makadara", "Fort Jesus Area"],
                    },
                    Ward {
                        name: "Tononoka",
                        areas: &["Tononoka", "Buxton", "Sparki"],
                    },
                ],
            },
            SubCounty {
                name: "Nyali",
                wards: &[
                    Ward {
                        name: "Frere Town",
                        areas: &["Nyali Estate", "Links Road", "Mamba Village Area"],
                    },
                    Ward {
                        name: "Kongowea",
                        areas: &["Kongowea Market", "Maweni", "Kisimani"],
                    },
                ],
            },
            SubCounty {
                name: "Kisauni",
                wards: &[
                    Ward {
                        name: "Bamburi",
                        areas: &["Bamburi Beach", "Utange", "Mwembe Legeza"],
                    },
                    Ward {
                        name: "Shanzu",
                        areas: &["Shanzu Beach", "Serena Area", "Mtwapa Creek"],
                    },
                ],
            },
        ],
    },
    County {
        name: "Kisumu",
        code: "042",
        sub_counties: &[
            SubCounty {
                name: "Kisumu Central",
                wards: &[
                    Ward {
                        name: "Market Milimani",
                        areas: &["Milimani Estate", "Kisumu CBD", "Jomo Kenyatta Grounds Area"],
                    },
                    Ward {
                        name: "Kondele",
                        areas: &["Kondele Market", "Manyatta A", "Kibuye"],
                    },
                ],
            },
            SubCounty {
                name: "Kisumu East",
                wards: &[
                    Ward {
                        name: "Kajulu",
                        areas: &["Riat Hills", "Mamboleo", "Korando"],
                    },
                    Ward {
                        name: "Manyatta B",
                        areas: &["Manyatta", "Flamingo", "Nyalenda"],
                    },
                ],
            },
        ],
    },
    County {
        name: "Nakuru",
        code: "032",
        sub_counties: &[
            SubCounty {
                name: "Nakuru Town East",
                wards: &[
                    Ward {
                        name: "Biashara",
                        areas: &["Nakuru CBD", "Section 58", "Railways Area"],
                    },
                    Ward {
                        name: "Flamingo",
                        areas: &["Flamingo Estate", "Lake View", "Bondeni"],
                    },
                ],
            },
            SubCounty {
                name: "Nakuru Town West",
                wards: &[
                    Ward {
                        name: "London",
                        areas: &["London Estate", "Kaptembwo", "Rhonda"],
                    },
                    Ward {
                        name: "Shaabab",
                        areas: &["Shaabab Estate", "Mwariki", "Barut"],
                    },
                ],
            },
            SubCounty {
                name: "Naivasha",
                wards: &[
                    Ward {
                        name: "Lake View",
                        areas: &["Naivasha Town", "Lakeside", "Kihoto"],
                    },
                    // No curated estate list for the outskirts yet
                    Ward { name: "Maiella", areas: &[] },
                ],
            },
        ],
    },
    County {
        name: "Kiambu",
        code: "022",
        sub_counties: &[
            SubCounty {
                name: "Ruiru",
                wards: &[
                    Ward {
                        name: "Kahawa Wendani",
                        areas: &["Kahawa Wendani", "Kahawa Sukari", "Kenyatta Road"],
                    },
                    Ward {
                        name: "Biashara",
                        areas: &["Ruiru Town", "Membley Estate", "Kamakis"],
                    },
                ],
            },
            SubCounty {
                name: "Thika Town",
                wards: &[
                    Ward {
                        name: "Township",
                        areas: &["Thika CBD", "Section 9", "Makongeni"],
                    },
                    Ward {
                        name: "Kamenu",
                        areas: &["Kamenu", "Kiganjo Estate", "Landless"],
                    },
                ],
            },
            SubCounty {
                name: "Kikuyu",
                wards: &[
                    Ward {
                        name: "Kikuyu",
                        areas: &["Kikuyu Town", "Thogoto", "Gitaru"],
                    },
                    Ward { name: "Karai", areas: &[] },
                ],
            },
        ],
    },
    County {
        name: "Machakos",
        code: "016",
        sub_counties: &[
            SubCounty {
                name: "Machakos Town",
                wards: &[
                    Ward {
                        name: "Machakos Central",
                        areas: &["Machakos CBD", "Miwani", "Eastleigh Estate"],
                    },
                    Ward { name: "Mumbuni North", areas: &[] },
                ],
            },
            SubCounty {
                name: "Athi River",
                wards: &[
                    Ward {
                        name: "Athi River",
                        areas: &["Athi River Town", "Mlolongo", "Syokimau", "Greatwall Gardens"],
                    },
                    Ward {
                        name: "Kinanie",
                        areas: &["Kinanie", "EPZ Area"],
                    },
                ],
            },
        ],
    },
];

pub fn counties() -> &'static [County] {
    COUNTIES
}

pub fn county(name: &str) -> Option<&'static County> {
    COUNTIES.iter().find(|c| c.name == name)
}

pub fn sub_counties(county_name: &str) -> &'static [SubCounty] {
    county(county_name).map(|c| c.sub_counties).unwrap_or(&[])
}

pub fn sub_county(county_name: &str, sub_county_name: &str) -> Option<&'static SubCounty> {
    sub_counties(county_name)
        .iter()
        .find(|sc| sc.name == sub_county_name)
}

pub fn wards(county_name: &str, sub_county_name: &str) -> &'static [Ward] {
    sub_county(county_name, sub_county_name)
        .map(|sc| sc.wards)
        .unwrap_or(&[])
}

pub fn ward(county_name: &str, sub_county_name: &str, ward_name: &str) -> Option<&'static Ward> {
    wards(county_name, sub_county_name)
        .iter()
        .find(|w| w.name == ward_name)
}

/// Areas for a ward path, falling back to the generic list when the ward
/// exists but carries no curated areas. An unknown path yields nothing.
pub fn areas(
    county_name: &str,
    sub_county_name: &str,
    ward_name: &str,
) -> Option<&'static [&'static str]> {
    let ward = ward(county_name, sub_county_name, ward_name)?;
    if ward.areas.is_empty() {
        Some(DEFAULT_AREAS)
    } else {
        Some(ward.areas)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_lookup_finds_curated_areas() {
        let areas = areas("Nairobi", "Westlands", "Kitisuru").unwrap();
        assert!(areas.contains(&"Runda Estate"));
    }

    #[test]
    fn empty_ward_falls_back_to_default_areas() {
        let areas = areas("Nakuru", "Naivasha", "Maiella").unwrap();
        assert_eq!(areas, DEFAULT_AREAS);
    }

    #[test]
    fn unknown_paths_yield_nothing() {
        assert!(areas("Nairobi", "Westlands", "Atlantis").is_none());
        assert!(areas("Gotham", "Westlands", "Kitisuru").is_none());
        assert!(sub_counties("Gotham").is_empty());
    }

    #[test]
    fn county_names_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for c in COUNTIES {
            assert!(seen.insert(c.name), "duplicate county {}", c.name);
        }
    }

    #[test]
    fn bounding_box_accepts_nairobi_rejects_kampala() {
        assert!(KENYA_BOUNDS.contains(-1.286389, 36.817223));
        assert!(!KENYA_BOUNDS.contains(0.3476, 32.5825));
    }
}
