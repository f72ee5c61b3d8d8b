use std::sync::Arc;
use axum::{Extension, Json, Router};
use axum::extract::Query;
use axum::routing::get;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use crate::controller::AppState;
use crate::error::AppError;
use crate::models::comparison::{ComparisonSelection, ComparisonStatus, ToggleOutcome};
use crate::repositories::RestaurantRepository;
use crate::services::comparison::{build_comparison_table, order_by_selection, ComparisonTable};

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/compare", get(compare_restaurants))
        .route("/compare/toggle", get(toggle_comparison))
        .route_layer(Extension(app_state.restaurant_repo))
}

#[derive(Clone, Serialize, Deserialize, Debug, Default)]
pub struct CompareParams {
    pub restaurants: Option<String>,
}

#[derive(Clone, Serialize, Debug)]
pub struct ComparisonResponse {
    pub selection: ComparisonSelection,
    pub query: Option<String>,
    pub share_path: String,
    pub status: ComparisonStatus,
    /// Present once at least two restaurants are selected.
    pub table: Option<ComparisonTable>,
}

pub async fn compare_restaurants(
    Extension(restaurant_repo): Extension<Arc<dyn RestaurantRepository>>,
    Query(params): Query<CompareParams>,
) -> Result<Json<ComparisonResponse>, AppError> {
    let selection = ComparisonSelection::from_query(params.restaurants.as_deref());
    let status = selection.status();

    let table = if status == ComparisonStatus::Ready {
        let details = restaurant_repo
            .details_by_slugs(selection.slugs())
            .await
            .map_err(|e| {
                warn!("Something went wrong loading restaurants to compare due to: {}", e);
                AppError::Internal(e)
            })?;

        let ordered = order_by_selection(&selection, details.into_vec());
        if ordered.len() < selection.len() {
            debug!("{} selected restaurants had no review", selection.len() - ordered.len());
        }
        Some(build_comparison_table(&ordered))
    } else {
        None
    };

    Ok(Json(ComparisonResponse {
        query: selection.to_query(),
        share_path: selection.compare_path(),
        selection,
        status,
        table,
    }))
}

#[derive(Clone, Serialize, Deserialize, Debug, Default)]
pub struct ToggleParams {
    pub restaurants: Option<String>,
    #[serde(default)]
    pub slug: String,
}

#[derive(Clone, Serialize, Debug)]
pub struct ToggleResponse {
    pub outcome: ToggleOutcome,
    pub selection: ComparisonSelection,
    pub query: Option<String>,
    pub share_path: String,
    pub status: ComparisonStatus,
}

/// Adds or removes one slug and hands back the resulting shareable state.
pub async fn toggle_comparison(
    Query(params): Query<ToggleParams>,
) -> Result<Json<ToggleResponse>, AppError> {
    let slug = params.slug.trim();
    if slug.is_empty() {
        return Err(AppError::BadRequest("A restaurant slug is required".to_string()));
    }
    if !ComparisonSelection::is_selectable(slug) {
        return Err(AppError::BadRequest(format!("Invalid restaurant slug: {}", slug)));
    }

    let mut selection = ComparisonSelection::from_query(params.restaurants.as_deref());
    let outcome = selection.toggle(slug);

    Ok(Json(ToggleResponse {
        outcome,
        query: selection.to_query(),
        share_path: selection.compare_path(),
        status: selection.status(),
        selection,
    }))
}
