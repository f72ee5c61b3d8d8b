use async_trait::async_trait;
use crate::models::lookup::{Listing, Lookup};
use crate::models::restaurant::{RestaurantDetail, RestaurantSummary};

pub mod memory_repo;
pub mod postgres_repo;

pub const TOP_RESTAURANTS_LIMIT: usize = 100;

/// Read side of the review catalog. "No rows" is a `Listing::Empty` or
/// `Lookup::NotFound`; errors are reserved for infrastructure failures.
#[async_trait]
pub trait RestaurantRepository: Send + Sync {
    async fn all_summaries(&self) -> anyhow::Result<Listing<RestaurantSummary>>;

    async fn detail_by_slug(&self, slug: &str) -> anyhow::Result<Lookup<RestaurantDetail>>;

    async fn details_by_slugs(&self, slugs: &[String]) -> anyhow::Result<Listing<RestaurantDetail>>;

    async fn summaries_by_neighborhood(
        &self,
        neighborhood_slug: &str,
    ) -> anyhow::Result<Listing<RestaurantSummary>>;

    async fn summaries_by_cuisine(&self, cuisine_slug: &str) -> anyhow::Result<Listing<RestaurantSummary>>;

    /// Restaurants tagged with a feature or dietary slug.
    async fn summaries_by_feature(&self, feature_slug: &str) -> anyhow::Result<Listing<RestaurantSummary>>;

    async fn summaries_by_dish(&self, dish_slug: &str) -> anyhow::Result<Listing<RestaurantSummary>>;

    /// Case-insensitive substring match on name, neighborhood or cuisine.
    async fn search(&self, term: &str) -> anyhow::Result<Listing<RestaurantSummary>>;

    async fn top_rated(&self, limit: usize) -> anyhow::Result<Listing<RestaurantSummary>>;

    /// Most recent visits that have a written review.
    async fn featured_reviews(&self, limit: usize) -> anyhow::Result<Listing<RestaurantDetail>>;
}
