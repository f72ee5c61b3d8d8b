use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use crate::models::filter::{MinRating, SortOrder};
use crate::models::tags::{DietaryTag, FeatureTag, PriceTier};

pub fn router() -> Router {
    Router::new().route("/filters", get(list_filter_options))
}

#[derive(Clone, Serialize, Debug)]
pub struct PriceOption {
    pub value: PriceTier,
    pub description: &'static str,
}

#[derive(Clone, Serialize, Debug)]
pub struct TagOption<T> {
    pub value: T,
    pub label: &'static str,
}

/// Everything the filter panel offers, in display order.
#[derive(Clone, Serialize, Debug)]
pub struct FilterOptions {
    pub price_tiers: Vec<PriceOption>,
    pub features: Vec<TagOption<FeatureTag>>,
    pub dietary: Vec<TagOption<DietaryTag>>,
    pub min_ratings: Vec<MinRating>,
    pub sort_orders: Vec<TagOption<SortOrder>>,
}

impl FilterOptions {
    pub fn all() -> Self {
        Self {
            price_tiers: PriceTier::ALL
                .into_iter()
                .map(|value| PriceOption { value, description: value.description() })
                .collect(),
            features: FeatureTag::ALL
                .into_iter()
                .map(|value| TagOption { value, label: value.label() })
                .collect(),
            dietary: DietaryTag::ALL
                .into_iter()
                .map(|value| TagOption { value, label: value.label() })
                .collect(),
            min_ratings: MinRating::ALL.to_vec(),
            sort_orders: SortOrder::ALL
                .into_iter()
                .map(|value| TagOption { value, label: value.label() })
                .collect(),
        }
    }
}

async fn list_filter_options() -> Json<FilterOptions> {
    Json(FilterOptions::all())
}
