use std::sync::Arc;
use anyhow::bail;
use clap::Parser;
use dotenv::dotenv;
use tracing::info;
use crate::config::Config;
use crate::controller::AppState;
use crate::repositories::RestaurantRepository;
use crate::repositories::memory_repo::InMemoryRestaurantRepo;
use crate::repositories::postgres_repo::PostgresConnectionRepo;

pub mod config;
pub mod controller;
pub mod error;
pub mod helpers;
pub mod models;
pub mod repositories;
pub mod services;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = Config::parse();
    info!("Starting curd reviews backend in {} environment", config.environment);

    let restaurant_repo = restaurant_repository(&config).await?;
    controller::serve(AppState::new(restaurant_repo), &config).await
}

async fn restaurant_repository(config: &Config) -> anyhow::Result<Arc<dyn RestaurantRepository>> {
    if let Some(fixture) = &config.restaurants_fixture {
        return Ok(Arc::new(InMemoryRestaurantRepo::load(fixture)?));
    }

    if let Some(database_url) = &config.database_url {
        info!("Connecting to postgres with a pool of {}", config.pool_size());
        let repo = PostgresConnectionRepo::connect(database_url, config.pool_size()).await?;
        return Ok(Arc::new(repo));
    }

    bail!("Either DATABASE_URL or RESTAURANTS_FIXTURE must be set")
}
