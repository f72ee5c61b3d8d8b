use serde::Serialize;
use crate::models::comparison::ComparisonSelection;
use crate::models::restaurant::{RatingCategory, RestaurantDetail};
use crate::models::tags::PriceTier;

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ComparisonColumn {
    pub slug: String,
    pub name: String,
    pub neighborhood: String,
    pub cuisine: String,
    pub price_range: PriceTier,
    pub overall_rating: f64,
    pub features: Vec<&'static str>,
    pub dietary: Vec<&'static str>,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ComparisonRow {
    pub category: RatingCategory,
    pub label: &'static str,
    /// One value per column, in column order.
    pub values: Vec<f64>,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ComparisonTable {
    pub columns: Vec<ComparisonColumn>,
    pub rows: Vec<ComparisonRow>,
}

/// Puts fetched details into selection order. Selected slugs without a
/// record are skipped, as are records nobody selected.
pub fn order_by_selection(
    selection: &ComparisonSelection,
    mut details: Vec<RestaurantDetail>,
) -> Vec<RestaurantDetail> {
    let mut ordered = Vec::with_capacity(selection.len());
    for slug in selection.slugs() {
        if let Some(index) = details.iter().position(|d| &d.summary.slug == slug) {
            ordered.push(details.swap_remove(index));
        }
    }
    ordered
}

pub fn build_comparison_table(details: &[RestaurantDetail]) -> ComparisonTable {
    let columns = details
        .iter()
        .map(|detail| ComparisonColumn {
            slug: detail.summary.slug.clone(),
            name: detail.summary.name.clone(),
            neighborhood: detail.summary.neighborhood.clone(),
            cuisine: detail.summary.cuisine.clone(),
            price_range: detail.summary.price_range,
            overall_rating: detail.summary.rating,
            features: detail.feature_labels(),
            dietary: detail.dietary_labels(),
        })
        .collect();

    let rows = RatingCategory::ALL
        .into_iter()
        .map(|category| ComparisonRow {
            category,
            label: category.label(),
            values: details.iter().map(|d| d.ratings.get(category)).collect(),
        })
        .collect();

    ComparisonTable { columns, rows }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::restaurant::CategoryRatings;
    use crate::models::tags::{DietaryTag, FeatureTag};
    use crate::services::filter_engine::tests::restaurant;

    fn detail(slug: &str, food_quality: f64) -> RestaurantDetail {
        RestaurantDetail {
            summary: restaurant(slug, 4.0, PriceTier::Moderate),
            ratings: CategoryRatings { food_quality, ..Default::default() },
            review_body: None,
            dishes_tried: Vec::new(),
        }
    }

    #[test]
    fn orders_details_by_selection_and_drops_unknowns() {
        let selection = ComparisonSelection::from_query(Some("c,missing,a"));
        let details = vec![detail("a", 4.0), detail("b", 3.0), detail("c", 5.0)];

        let ordered = order_by_selection(&selection, details);
        let slugs: Vec<&str> = ordered.iter().map(|d| d.summary.slug.as_str()).collect();
        assert_eq!(slugs, ["c", "a"]);
    }

    #[test]
    fn builds_one_row_per_category_in_column_order() {
        let mut first = detail("graze", 4.5);
        first.summary.features = vec![FeatureTag::CraftCocktails];
        first.summary.dietary = vec![DietaryTag::DairyFree];
        let second = detail("merchant", 3.5);

        let table = build_comparison_table(&[first, second]);

        assert_eq!(table.columns.len(), 2);
        assert_eq!(table.columns[0].features, ["Craft Cocktails"]);
        assert_eq!(table.columns[0].dietary, ["Dairy-Free Options"]);
        assert!(table.columns[1].features.is_empty());

        assert_eq!(table.rows.len(), 6);
        assert_eq!(table.rows[0].label, "Food Quality");
        assert_eq!(table.rows[0].values, [4.5, 3.5]);
        assert_eq!(table.rows[5].category, RatingCategory::ReturnFactor);
    }
}
