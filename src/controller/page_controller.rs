use std::sync::Arc;
use axum::{Extension, Json, Router};
use axum::extract::Path;
use axum::routing::get;
use serde::Serialize;
use tracing::warn;
use crate::controller::AppState;
use crate::error::AppError;
use crate::helpers::slug::title_case_slug;
use crate::models::restaurant::{RestaurantDetail, RestaurantSummary};
use crate::repositories::RestaurantRepository;

pub const FEATURED_REVIEW_COUNT: usize = 3;

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/home", get(retrieve_home_page))
        .route("/neighborhoods/:slug", get(retrieve_neighborhood_page))
        .route("/cuisines/:slug", get(retrieve_cuisine_page))
        .route_layer(Extension(app_state.restaurant_repo))
}

#[derive(Clone, Serialize, Debug)]
pub struct HomePage {
    pub featured_reviews: Vec<RestaurantDetail>,
    pub total_restaurants: usize,
}

pub async fn retrieve_home_page(
    Extension(restaurant_repo): Extension<Arc<dyn RestaurantRepository>>,
) -> Result<Json<HomePage>, AppError> {
    let (featured_reviews, restaurants) = futures::try_join!(
        restaurant_repo.featured_reviews(FEATURED_REVIEW_COUNT),
        restaurant_repo.all_summaries(),
    )
    .map_err(|e| {
        warn!("Something went wrong loading the home page due to: {}", e);
        AppError::Internal(e)
    })?;

    Ok(Json(HomePage {
        featured_reviews: featured_reviews.into_vec(),
        total_restaurants: restaurants.len(),
    }))
}

/// A listing scoped to one neighborhood or cuisine.
#[derive(Clone, Serialize, Debug)]
pub struct CollectionPage {
    pub slug: String,
    pub name: String,
    pub restaurants: Vec<RestaurantSummary>,
}

pub async fn retrieve_neighborhood_page(
    Extension(restaurant_repo): Extension<Arc<dyn RestaurantRepository>>,
    Path(slug): Path<String>,
) -> Result<Json<CollectionPage>, AppError> {
    let restaurants = restaurant_repo
        .summaries_by_neighborhood(&slug)
        .await
        .map_err(|e| {
            warn!("Something went wrong retrieving restaurants in {} due to: {}", slug, e);
            AppError::Internal(e)
        })?;

    Ok(Json(CollectionPage {
        name: title_case_slug(&slug),
        restaurants: restaurants.into_vec(),
        slug,
    }))
}

pub async fn retrieve_cuisine_page(
    Extension(restaurant_repo): Extension<Arc<dyn RestaurantRepository>>,
    Path(slug): Path<String>,
) -> Result<Json<CollectionPage>, AppError> {
    let restaurants = restaurant_repo
        .summaries_by_cuisine(&slug)
        .await
        .map_err(|e| {
            warn!("Something went wrong retrieving {} restaurants due to: {}", slug, e);
            AppError::Internal(e)
        })?;

    Ok(Json(CollectionPage {
        name: title_case_slug(&slug),
        restaurants: restaurants.into_vec(),
        slug,
    }))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use crate::controller::test_support::{empty_app, fixture_app, get_json};

    #[tokio::test]
    async fn home_page_features_recent_reviews() {
        let (status, body) = get_json(fixture_app(), "/home").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total_restaurants"], 5);
        assert_eq!(body["featured_reviews"][0]["slug"], "graze");
        assert_eq!(body["featured_reviews"].as_array().unwrap().len(), 2);

        let (_, body) = get_json(empty_app(), "/home").await;
        assert_eq!(body["total_restaurants"], 0);
    }

    #[tokio::test]
    async fn neighborhood_page_names_itself_from_slug() {
        let (status, body) = get_json(fixture_app(), "/neighborhoods/south-madison").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "South Madison");
        assert_eq!(body["restaurants"][0]["slug"], "taqueria-guadalajara");
    }

    #[tokio::test]
    async fn unknown_cuisine_is_an_empty_page() {
        let (status, body) = get_json(fixture_app(), "/cuisines/ethiopian").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "Ethiopian");
        assert!(body["restaurants"].as_array().unwrap().is_empty());
    }
}
