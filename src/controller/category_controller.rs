use std::sync::Arc;
use axum::{Extension, Json, Router};
use axum::extract::{Path, Query};
use axum::routing::get;
use serde::{Deserialize, Serialize};
use tracing::warn;
use crate::controller::AppState;
use crate::error::AppError;
use crate::models::category::{find_category, Category, CategoryGroup, CATEGORY_GROUPS};
use crate::models::dish::{dish_by_slug, featured_dishes, Dish, DEFAULT_FEATURED_DISHES};
use crate::models::restaurant::RestaurantSummary;
use crate::repositories::RestaurantRepository;

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/categories", get(list_categories))
        .route("/categories/:slug", get(retrieve_category_page))
        .route("/dishes", get(list_featured_dishes))
        .route("/dishes/:slug", get(retrieve_dish_page))
        .route_layer(Extension(app_state.restaurant_repo))
}

#[derive(Clone, Serialize, Debug)]
pub struct CategoryGroupView {
    pub group: CategoryGroup,
    pub categories: &'static [Category],
}

pub async fn list_categories() -> Json<Vec<CategoryGroupView>> {
    let groups = CATEGORY_GROUPS
        .iter()
        .map(|(group, categories)| CategoryGroupView { group: *group, categories: *categories })
        .collect();

    Json(groups)
}

#[derive(Clone, Serialize, Debug)]
pub struct CategoryPage {
    pub category: Category,
    pub restaurants: Vec<RestaurantSummary>,
}

pub async fn retrieve_category_page(
    Extension(restaurant_repo): Extension<Arc<dyn RestaurantRepository>>,
    Path(slug): Path<String>,
) -> Result<Json<CategoryPage>, AppError> {
    let category = find_category(&slug)
        .ok_or_else(|| AppError::NotFound(format!("Category not found: {}", slug)))?;

    let restaurants = restaurant_repo
        .summaries_by_feature(category.slug)
        .await
        .map_err(|e| {
            warn!("Something went wrong retrieving restaurants for category {} due to: {}", slug, e);
            AppError::Internal(e)
        })?;

    Ok(Json(CategoryPage {
        category: *category,
        restaurants: restaurants.into_vec(),
    }))
}

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct FeaturedDishesParam {
    pub count: Option<usize>,
}

pub async fn list_featured_dishes(
    Query(query): Query<FeaturedDishesParam>,
) -> Json<&'static [Dish]> {
    Json(featured_dishes(query.count.unwrap_or(DEFAULT_FEATURED_DISHES)))
}

#[derive(Clone, Serialize, Debug)]
pub struct DishPage {
    pub dish: Dish,
    pub restaurants: Vec<RestaurantSummary>,
}

pub async fn retrieve_dish_page(
    Extension(restaurant_repo): Extension<Arc<dyn RestaurantRepository>>,
    Path(slug): Path<String>,
) -> Result<Json<DishPage>, AppError> {
    let dish = dish_by_slug(&slug)
        .ok_or_else(|| AppError::NotFound(format!("Dish not found: {}", slug)))?;

    let restaurants = restaurant_repo
        .summaries_by_dish(dish.slug)
        .await
        .map_err(|e| {
            warn!("Something went wrong retrieving restaurants serving {} due to: {}", slug, e);
            AppError::Internal(e)
        })?;

    Ok(Json(DishPage {
        dish: *dish,
        restaurants: restaurants.into_vec(),
    }))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use crate::controller::test_support::{fixture_app, get_json};

    #[tokio::test]
    async fn lists_category_groups() {
        let (status, body) = get_json(fixture_app(), "/categories").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 6);
        assert_eq!(body[0]["group"], "occasions");
        assert_eq!(body[2]["categories"][1]["slug"], "vegan");
    }

    #[tokio::test]
    async fn category_page_lists_tagged_restaurants() {
        let (status, body) = get_json(fixture_app(), "/categories/outdoor-seating").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["category"]["name"], "Outdoor Seating");
        assert_eq!(body["restaurants"][0]["slug"], "merchant");
        assert_eq!(body["restaurants"][1]["slug"], "ha-long-bay");

        let (status, body) = get_json(fixture_app(), "/categories/brunch").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["restaurants"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn unknown_category_or_dish_is_404() {
        let (status, body) = get_json(fixture_app(), "/categories/moon-base").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Category not found: moon-base");

        let (status, _) = get_json(fixture_app(), "/dishes/lutefisk").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn dish_pages_and_featured_dishes() {
        let (status, body) = get_json(fixture_app(), "/dishes/cheese-curds").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["dish"]["name"], "Cheese Curds");
        assert_eq!(body["restaurants"].as_array().unwrap().len(), 2);

        let (_, body) = get_json(fixture_app(), "/dishes").await;
        assert_eq!(body.as_array().unwrap().len(), 6);

        let (_, body) = get_json(fixture_app(), "/dishes?count=2").await;
        assert_eq!(body[1]["slug"], "cheese-curds");
    }
}
