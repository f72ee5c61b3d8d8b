use std::net::SocketAddr;
use std::sync::Arc;
use anyhow::Context;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderValue, Method};
use axum::Router;
use tower::limit::ConcurrencyLimitLayer;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};
use crate::config::Config;
use crate::helpers::handler_404::page_not_found_handler;
use crate::repositories::RestaurantRepository;

pub mod category_controller;
pub mod compare_controller;
pub mod filter_controller;
pub mod health_check;
pub mod page_controller;
pub mod restaurant_controller;

const MAX_IN_FLIGHT_REQUESTS: usize = 512;

#[derive(Clone)]
pub struct AppState {
    pub restaurant_repo: Arc<dyn RestaurantRepository>,
}

impl AppState {
    pub fn new(restaurant_repo: Arc<dyn RestaurantRepository>) -> Self {
        Self { restaurant_repo }
    }
}

pub async fn serve(
    app_state: AppState,
    config: &Config,
) -> anyhow::Result<()> {
    let origins: Vec<HeaderValue> = config
        .origin_urls
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .filter_map(|s| match s.parse() {
            Ok(origin) => Some(origin),
            Err(e) => {
                warn!("Skipping invalid CORS origin {} due to: {}", s, e);
                None
            }
        })
        .collect::<Vec<HeaderValue>>();

    let application = router_endpoints(app_state)
        .layer(
            ServiceBuilder::new()
                .layer(ConcurrencyLimitLayer::new(MAX_IN_FLIGHT_REQUESTS))
                .layer(CompressionLayer::new())
                .layer(
                    CorsLayer::new()
                        .allow_methods([
                            Method::GET,
                            Method::OPTIONS
                        ])
                        .allow_origin(origins)
                        .allow_headers([AUTHORIZATION, CONTENT_TYPE])
                )
        );

    let address: SocketAddr = config
        .bind_address
        .parse()
        .with_context(|| format!("Invalid bind address: {}", config.bind_address))?;
    info!("API server listening on: {}", address);
    axum::Server::bind(&address)
        .serve(application.into_make_service())
        .await
        .context("Error spinning up the API server")
}

pub fn router_endpoints(app_state: AppState) -> Router {
    health_check::router()
        .merge(filter_controller::router())
        .merge(page_controller::router(app_state.clone()))
        .merge(restaurant_controller::router(app_state.clone()))
        .merge(category_controller::router(app_state.clone()))
        .merge(compare_controller::router(app_state))
        .fallback(page_not_found_handler)
}


#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use super::test_support::{fixture_app, get_json};

    #[tokio::test]
    async fn unknown_routes_fall_back_to_404_json() {
        let (status, body) = get_json(fixture_app(), "/not/a/page").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body["error"].is_string());
    }
}
