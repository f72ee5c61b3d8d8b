use std::cmp::Ordering;
use crate::models::filter::SortOrder;
use crate::models::restaurant::RestaurantSummary;

/// Returns a sorted copy. `sort_by` is stable, so equal keys keep input order.
pub fn sort_restaurants(
    restaurants: &[RestaurantSummary],
    order: SortOrder,
) -> Vec<RestaurantSummary> {
    let mut sorted = restaurants.to_vec();
    sorted.sort_by(|a, b| compare(a, b, order));
    sorted
}

fn compare(a: &RestaurantSummary, b: &RestaurantSummary, order: SortOrder) -> Ordering {
    match order {
        SortOrder::RatingDesc => b.rating.total_cmp(&a.rating),
        SortOrder::RatingAsc => a.rating.total_cmp(&b.rating),
        // None orders before any date, like an empty string would
        SortOrder::DateDesc => b.visit_date.cmp(&a.visit_date),
        SortOrder::DateAsc => a.visit_date.cmp(&b.visit_date),
        SortOrder::PriceAsc => a.price_range.cmp(&b.price_range),
        SortOrder::PriceDesc => b.price_range.cmp(&a.price_range),
        SortOrder::NameAsc => a.name.cmp(&b.name),
    }
}
