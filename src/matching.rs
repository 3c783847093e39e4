//! Provider search constraints and the client-side sort pipeline.
//!
//! Filtering is server-side: changing constraints re-queries the backend
//! and wholesale-replaces the cached result set. Sorting is client-side
//! and pure: it reorders the last-fetched set in place without touching
//! any field and without a network round trip.

use crate::types::{ProviderSearchRequest, ProviderSummary};

/// Hard ceiling on the distance filter
pub const MAX_DISTANCE_KM: f64 = 50.0;

/// Server-side filter predicates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchConstraints {
    pub max_distance_km: f64,
    pub min_rating: f64,
    pub max_rate: Option<f64>,
}

impl Default for SearchConstraints {
    fn default() -> Self {
        Self {
            max_distance_km: MAX_DISTANCE_KM,
            min_rating: 0.0,
            max_rate: None,
        }
    }
}

impl SearchConstraints {
    /// Build the wire request for a category, clamping out-of-range values
    pub fn request(&self, category: impl Into<String>) -> ProviderSearchRequest {
        ProviderSearchRequest {
            category: category.into(),
            max_distance: self.max_distance_km.clamp(0.0, MAX_DISTANCE_KM),
            min_rating: self.min_rating.clamp(0.0, 5.0),
            max_rate: self.max_rate,
        }
    }
}

/// Client-side sort keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Distance,
    Rating,
    Rate,
    Reviews,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [SortKey::Distance, SortKey::Rating, SortKey::Rate, SortKey::Reviews];

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Distance => "Distance",
            SortKey::Rating => "Rating",
            SortKey::Rate => "Rate (Low to High)",
            SortKey::Reviews => "Most Reviewed",
        }
    }

    pub fn as_value(&self) -> &'static str {
        match self {
            SortKey::Distance => "distance",
            SortKey::Rating => "rating",
            SortKey::Rate => "rate",
            SortKey::Reviews => "reviews",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        match value {
            "distance" => Some(SortKey::Distance),
            "rating" => Some(SortKey::Rating),
            "rate" => Some(SortKey::Rate),
            "reviews" => Some(SortKey::Reviews),
            _ => None,
        }
    }
}

/// Stable in-place reorder of the cached result set. Distance and rate
/// sort ascending; rating and review count descending.
pub fn sort_providers(providers: &mut [ProviderSummary], key: SortKey) {
    match key {
        SortKey::Distance => providers.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km)),
        SortKey::Rate => providers.sort_by(|a, b| a.hourly_rate_min.total_cmp(&b.hourly_rate_min)),
        SortKey::Rating => providers.sort_by(|a, b| b.average_rating.total_cmp(&a.average_rating)),
        SortKey::Reviews => providers.sort_by(|a, b| b.total_reviews.cmp(&a.total_reviews)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ResponseTime;

    fn provider(id: i64, distance: f64, rating: f64, rate: f64, reviews: u32) -> ProviderSummary {
        ProviderSummary {
            id,
            name: format!("Provider {id}"),
            business_name: String::new(),
            phone: String::new(),
            distance_km: distance,
            average_rating: rating,
            total_reviews: reviews,
            hourly_rate_min: rate,
            hourly_rate_max: rate * 2.0,
            specialties: vec![],
            response_time: ResponseTime::SameDay,
            description: String::new(),
            primary_location: String::new(),
        }
    }

    fn sample() -> Vec<ProviderSummary> {
        vec![
            provider(1, 12.0, 4.5, 900.0, 31),
            provider(2, 3.2, 3.9, 1500.0, 104),
            provider(3, 8.7, 4.9, 600.0, 12),
            provider(4, 0.4, 4.5, 2500.0, 77),
        ]
    }

    #[test]
    fn every_sort_is_a_permutation_with_no_field_mutation() {
        for key in SortKey::ALL {
            let original = sample();
            let mut sorted = original.clone();
            sort_providers(&mut sorted, key);
            assert_eq!(sorted.len(), original.len());
            for p in &original {
                let found = sorted.iter().find(|s| s.id == p.id).expect("element dropped");
                assert_eq!(found, p, "element mutated by sort {key:?}");
            }
        }
    }

    #[test]
    fn distance_and_rate_sort_ascending() {
        let mut providers = sample();
        sort_providers(&mut providers, SortKey::Distance);
        assert!(providers.windows(2).all(|w| w[0].distance_km <= w[1].distance_km));

        sort_providers(&mut providers, SortKey::Rate);
        assert!(providers
            .windows(2)
            .all(|w| w[0].hourly_rate_min <= w[1].hourly_rate_min));
    }

    #[test]
    fn rating_and_reviews_sort_descending() {
        let mut providers = sample();
        sort_providers(&mut providers, SortKey::Rating);
        assert!(providers
            .windows(2)
            .all(|w| w[0].average_rating >= w[1].average_rating));

        sort_providers(&mut providers, SortKey::Reviews);
        assert!(providers.windows(2).all(|w| w[0].total_reviews >= w[1].total_reviews));
    }

    #[test]
    fn rating_sort_is_stable_on_ties() {
        let mut providers = sample();
        sort_providers(&mut providers, SortKey::Rating);
        // Providers 1 and 4 share a 4.5 rating; input order is preserved
        let ids: Vec<i64> = providers.iter().map(|p| p.id).collect();
        let pos1 = ids.iter().position(|&id| id == 1).unwrap();
        let pos4 = ids.iter().position(|&id| id == 4).unwrap();
        assert!(pos1 < pos4);
    }

    #[test]
    fn constraints_clamp_into_range() {
        let constraints = SearchConstraints {
            max_distance_km: 500.0,
            min_rating: 9.0,
            max_rate: Some(100.0),
        };
        let req = constraints.request("plumbing");
        assert_eq!(req.max_distance, MAX_DISTANCE_KM);
        assert_eq!(req.min_rating, 5.0);
        assert_eq!(req.max_rate, Some(100.0));
        assert_eq!(req.category, "plumbing");
    }

    #[test]
    fn default_constraints_match_contract() {
        let req = SearchConstraints::default().request("electrical");
        assert_eq!(req.max_distance, 50.0);
        assert_eq!(req.min_rating, 0.0);
        assert_eq!(req.max_rate, None);
    }
}
