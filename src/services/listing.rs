use serde::Serialize;
use crate::models::filter::{FilterCriteria, SortOrder};
use crate::models::restaurant::RestaurantSummary;
use crate::models::tags::PriceTier;
use crate::services::filter_engine::filter_restaurants;
use crate::services::sort_engine::sort_restaurants;

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum EmptyState {
    /// Nothing has been reviewed yet.
    NoRestaurants,
    /// Reviews exist but the active filters exclude all of them.
    NoMatches,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct RestaurantListing {
    pub restaurants: Vec<RestaurantSummary>,
    pub total: usize,
    pub matched: usize,
    pub active_filters: usize,
    /// Whether any filter is set, i.e. whether clearing filters would change the result.
    pub filtering: bool,
    pub sort_by: SortOrder,
    pub empty_state: Option<EmptyState>,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct MapMarker {
    pub slug: String,
    pub name: String,
    pub rating: f64,
    pub price_range: PriceTier,
    pub latitude: f64,
    pub longitude: f64,
}

pub fn build_listing(
    restaurants: &[RestaurantSummary],
    criteria: &FilterCriteria,
) -> RestaurantListing {
    let filtered = filter_restaurants(restaurants, criteria);
    let sorted = sort_restaurants(&filtered, criteria.sort_by);

    let empty_state = match (restaurants.is_empty(), sorted.is_empty()) {
        (true, _) => Some(EmptyState::NoRestaurants),
        (false, true) => Some(EmptyState::NoMatches),
        (false, false) => None,
    };

    RestaurantListing {
        total: restaurants.len(),
        matched: sorted.len(),
        active_filters: criteria.active_filter_count(),
        filtering: criteria.is_filtering(),
        sort_by: criteria.sort_by,
        empty_state,
        restaurants: sorted,
    }
}

/// Restaurants without coordinates are left off the map.
pub fn map_markers(restaurants: &[RestaurantSummary]) -> Vec<MapMarker> {
    restaurants
        .iter()
        .filter_map(|restaurant| {
            let location = restaurant.location?;
            Some(MapMarker {
                slug: restaurant.slug.clone(),
                name: restaurant.name.clone(),
                rating: restaurant.rating,
                price_range: restaurant.price_range,
                latitude: location.latitude,
                longitude: location.longitude,
            })
        })
        .collect()
}
