use std::sync::Arc;
use axum::{Extension, Json, Router};
use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use serde::{Deserialize, Serialize};
use serde_with::formats::CommaSeparator;
use serde_with::{serde_as, DisplayFromStr, StringWithSeparator};
use tracing::warn;
use crate::controller::AppState;
use crate::error::AppError;
use crate::models::filter::{FilterCriteria, MinRating, SortOrder};
use crate::models::lookup::Lookup;
use crate::models::restaurant::RestaurantSummary;
use crate::models::tags::{DietaryTag, FeatureTag, PriceTier};
use crate::repositories::{RestaurantRepository, TOP_RESTAURANTS_LIMIT};
use crate::services::listing::{build_listing, map_markers, MapMarker};

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/restaurants", get(list_restaurants))
        .route("/restaurants/map", get(map_restaurants))
        .route("/restaurants/search", get(search_restaurants))
        .route("/restaurants/top", get(top_restaurants))
        .route("/restaurants/:slug", get(retrieve_restaurant))
        .route_layer(Extension(app_state.restaurant_repo))
}

/// Filter panel state as query parameters. Multi-valued groups are comma
/// separated, e.g. `?price=%24,%24%24&feature=late-night,full-bar`.
#[serde_as]
#[derive(Clone, Deserialize, Debug, Default)]
pub struct ListingParams {
    #[serde_as(as = "StringWithSeparator::<CommaSeparator, PriceTier>")]
    #[serde(default)]
    pub price: Vec<PriceTier>,
    #[serde_as(as = "StringWithSeparator::<CommaSeparator, String>")]
    #[serde(default)]
    pub cuisine: Vec<String>,
    #[serde_as(as = "StringWithSeparator::<CommaSeparator, String>")]
    #[serde(default)]
    pub neighborhood: Vec<String>,
    #[serde_as(as = "StringWithSeparator::<CommaSeparator, FeatureTag>")]
    #[serde(default)]
    pub feature: Vec<FeatureTag>,
    #[serde_as(as = "StringWithSeparator::<CommaSeparator, DietaryTag>")]
    #[serde(default)]
    pub dietary: Vec<DietaryTag>,
    #[serde_as(as = "Option<DisplayFromStr>")]
    pub min_rating: Option<MinRating>,
    #[serde(default)]
    pub sort: SortOrder,
}

impl ListingParams {
    pub fn into_criteria(self) -> FilterCriteria {
        FilterCriteria {
            price_tiers: self.price,
            cuisines: self.cuisine,
            neighborhoods: self.neighborhood,
            features: self.feature,
            dietary: self.dietary,
            min_rating: self.min_rating.unwrap_or_default(),
            sort_by: self.sort,
        }
    }
}

pub async fn list_restaurants(
    Extension(restaurant_repo): Extension<Arc<dyn RestaurantRepository>>,
    Query(params): Query<ListingParams>,
) -> impl IntoResponse {
    let criteria = params.into_criteria();
    let restaurants_res = restaurant_repo.all_summaries().await;

    return match restaurants_res {
        Ok(restaurants) => {
            let listing = build_listing(&restaurants.into_vec(), &criteria);
            (StatusCode::OK, Json(listing)).into_response()
        }
        Err(e) => {
            warn!("Something went wrong listing restaurants due to: {}", e);
            AppError::Internal(e).into_response()
        }
    };
}

#[derive(Clone, Serialize, Debug)]
pub struct MapResponse {
    pub markers: Vec<MapMarker>,
    pub matched: usize,
}

pub async fn map_restaurants(
    Extension(restaurant_repo): Extension<Arc<dyn RestaurantRepository>>,
    Query(params): Query<ListingParams>,
) -> impl IntoResponse {
    let criteria = params.into_criteria();
    let restaurants_res = restaurant_repo.all_summaries().await;

    return match restaurants_res {
        Ok(restaurants) => {
            let listing = build_listing(&restaurants.into_vec(), &criteria);
            let response = MapResponse {
                markers: map_markers(&listing.restaurants),
                matched: listing.matched,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            warn!("Something went wrong building the restaurant map due to: {}", e);
            AppError::Internal(e).into_response()
        }
    };
}

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct SearchRestaurantParam {
    #[serde(default)]
    pub q: String,
}

pub async fn search_restaurants(
    Extension(restaurant_repo): Extension<Arc<dyn RestaurantRepository>>,
    Query(query): Query<SearchRestaurantParam>,
) -> Result<Json<Vec<RestaurantSummary>>, AppError> {
    let restaurants = restaurant_repo
        .search(&query.q)
        .await
        .map_err(|e| {
            warn!("Something went wrong searching for restaurants due to: {}", e);
            AppError::Internal(e)
        })?;

    Ok(Json(restaurants.into_vec()))
}

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct TopRestaurantParam {
    pub limit: Option<usize>,
}

#[derive(Clone, Serialize, Debug)]
pub struct RankedRestaurant {
    pub rank: usize,
    #[serde(flatten)]
    pub restaurant: RestaurantSummary,
}

pub async fn top_restaurants(
    Extension(restaurant_repo): Extension<Arc<dyn RestaurantRepository>>,
    Query(query): Query<TopRestaurantParam>,
) -> Result<Json<Vec<RankedRestaurant>>, AppError> {
    let limit = query
        .limit
        .unwrap_or(TOP_RESTAURANTS_LIMIT)
        .min(TOP_RESTAURANTS_LIMIT);

    let restaurants = restaurant_repo
        .top_rated(limit)
        .await
        .map_err(|e| {
            warn!("Something went wrong retrieving top restaurants due to: {}", e);
            AppError::Internal(e)
        })?;

    let ranked = restaurants
        .into_vec()
        .into_iter()
        .enumerate()
        .map(|(index, restaurant)| RankedRestaurant { rank: index + 1, restaurant })
        .collect();

    Ok(Json(ranked))
}

pub async fn retrieve_restaurant(
    Extension(restaurant_repo): Extension<Arc<dyn RestaurantRepository>>,
    Path(slug): Path<String>,
) -> impl IntoResponse {
    let restaurant_res = restaurant_repo
        .detail_by_slug(&slug)
        .await;

    return match restaurant_res {
        Ok(Lookup::Found(restaurant)) => {
            (StatusCode::OK, Json(restaurant)).into_response()
        }
        Ok(Lookup::NotFound) => {
            AppError::NotFound(format!("Restaurant not found: {}", slug)).into_response()
        }
        Err(e) => {
            warn!("Something went wrong retrieving restaurant {} due to: {}", slug, e);
            AppError::Internal(e).into_response()
        }
    };
}
