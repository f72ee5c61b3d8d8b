use crate::helpers::slug::same_slug;
use crate::models::filter::FilterCriteria;
use crate::models::restaurant::RestaurantSummary;

/// Returns the restaurants that pass every active filter group, in input order.
pub fn filter_restaurants(
    restaurants: &[RestaurantSummary],
    criteria: &FilterCriteria,
) -> Vec<RestaurantSummary> {
    restaurants
        .iter()
        .filter(|restaurant| matches_criteria(restaurant, criteria))
        .cloned()
        .collect()
}

pub fn matches_criteria(restaurant: &RestaurantSummary, criteria: &FilterCriteria) -> bool {
    matches_price(restaurant, criteria)
        && matches_cuisine(restaurant, criteria)
        && matches_neighborhood(restaurant, criteria)
        && matches_features(restaurant, criteria)
        && matches_dietary(restaurant, criteria)
        && matches_min_rating(restaurant, criteria)
}

fn matches_price(restaurant: &RestaurantSummary, criteria: &FilterCriteria) -> bool {
    criteria.price_tiers.is_empty() || criteria.price_tiers.contains(&restaurant.price_range)
}

fn matches_cuisine(restaurant: &RestaurantSummary, criteria: &FilterCriteria) -> bool {
    criteria.cuisines.is_empty()
        || criteria
            .cuisines
            .iter()
            .any(|cuisine| same_slug(&restaurant.cuisine, cuisine))
}

fn matches_neighborhood(restaurant: &RestaurantSummary, criteria: &FilterCriteria) -> bool {
    criteria.neighborhoods.is_empty()
        || criteria
            .neighborhoods
            .iter()
            .any(|neighborhood| same_slug(&restaurant.neighborhood, neighborhood))
}

// match-any
fn matches_features(restaurant: &RestaurantSummary, criteria: &FilterCriteria) -> bool {
    criteria.features.is_empty()
        || criteria
            .features
            .iter()
            .any(|feature| restaurant.features.contains(feature))
}

fn matches_dietary(restaurant: &RestaurantSummary, criteria: &FilterCriteria) -> bool {
    criteria.dietary.is_empty()
        || criteria
            .dietary
            .iter()
            .any(|diet| restaurant.dietary.contains(diet))
}

fn matches_min_rating(restaurant: &RestaurantSummary, criteria: &FilterCriteria) -> bool {
    criteria.min_rating.is_any() || restaurant.rating >= criteria.min_rating.threshold()
}
