use std::collections::HashSet;
use std::path::Path;
use anyhow::{bail, Context};
use async_trait::async_trait;
use tracing::info;
use crate::helpers::slug::{same_slug, slugify};
use crate::models::filter::SortOrder;
use crate::models::lookup::{Listing, Lookup};
use crate::models::restaurant::{is_valid_rating, RestaurantDetail, RestaurantSummary};
use crate::repositories::RestaurantRepository;
use crate::services::sort_engine::sort_restaurants;

/// Serves restaurants from memory, typically loaded from a JSON fixture file.
pub struct InMemoryRestaurantRepo {
    restaurants: Vec<RestaurantDetail>,
}

impl InMemoryRestaurantRepo {
    pub fn new(restaurants: Vec<RestaurantDetail>) -> anyhow::Result<Self> {
        let mut slugs = HashSet::new();
        for restaurant in &restaurants {
            let summary = &restaurant.summary;
            if !slugs.insert(summary.slug.as_str()) {
                bail!("Duplicate restaurant slug: {}", summary.slug);
            }
            if !is_valid_rating(summary.rating) || !restaurant.ratings.is_valid() {
                bail!("Rating out of range for restaurant: {}", summary.slug);
            }
        }

        Ok(Self { restaurants })
    }

    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let restaurants: Vec<RestaurantDetail> =
            serde_json::from_str(json).context("Failed to parse restaurant fixture")?;
        Self::new(restaurants)
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read restaurant fixture at {}", path.display()))?;
        let repo = Self::from_json(&json)?;
        info!("Loaded {} restaurants from {}", repo.restaurants.len(), path.display());
        Ok(repo)
    }

    fn summaries_where<F>(&self, predicate: F) -> Vec<RestaurantSummary>
    where
        F: Fn(&RestaurantDetail) -> bool,
    {
        self.restaurants
            .iter()
            .filter(|restaurant| predicate(restaurant))
            .map(|restaurant| restaurant.summary.clone())
            .collect()
    }

    fn by_rating(&self, summaries: Vec<RestaurantSummary>) -> Listing<RestaurantSummary> {
        sort_restaurants(&summaries, SortOrder::RatingDesc).into()
    }
}

#[async_trait]
impl RestaurantRepository for InMemoryRestaurantRepo {
    async fn all_summaries(&self) -> anyhow::Result<Listing<RestaurantSummary>> {
        let summaries = self.summaries_where(|_| true);
        Ok(sort_restaurants(&summaries, SortOrder::DateDesc).into())
    }

    async fn detail_by_slug(&self, slug: &str) -> anyhow::Result<Lookup<RestaurantDetail>> {
        Ok(self
            .restaurants
            .iter()
            .find(|restaurant| restaurant.summary.slug == slug)
            .cloned()
            .into())
    }

    async fn details_by_slugs(&self, slugs: &[String]) -> anyhow::Result<Listing<RestaurantDetail>> {
        let details: Vec<RestaurantDetail> = self
            .restaurants
            .iter()
            .filter(|restaurant| slugs.contains(&restaurant.summary.slug))
            .cloned()
            .collect();
        Ok(details.into())
    }

    async fn summaries_by_neighborhood(
        &self,
        neighborhood_slug: &str,
    ) -> anyhow::Result<Listing<RestaurantSummary>> {
        let summaries = self.summaries_where(|r| same_slug(&r.summary.neighborhood, neighborhood_slug));
        Ok(self.by_rating(summaries))
    }

    async fn summaries_by_cuisine(&self, cuisine_slug: &str) -> anyhow::Result<Listing<RestaurantSummary>> {
        let summaries = self.summaries_where(|r| same_slug(&r.summary.cuisine, cuisine_slug));
        Ok(self.by_rating(summaries))
    }

    async fn summaries_by_feature(&self, feature_slug: &str) -> anyhow::Result<Listing<RestaurantSummary>> {
        let summaries = self.summaries_where(|r| {
            r.summary.features.iter().any(|f| f.slug() == feature_slug)
                || r.summary.dietary.iter().any(|d| d.slug() == feature_slug)
        });
        Ok(self.by_rating(summaries))
    }

    async fn summaries_by_dish(&self, dish_slug: &str) -> anyhow::Result<Listing<RestaurantSummary>> {
        let summaries = self.summaries_where(|r| {
            r.dishes_tried.iter().any(|dish| slugify(dish) == dish_slug)
        });
        Ok(self.by_rating(summaries))
    }

    async fn search(&self, term: &str) -> anyhow::Result<Listing<RestaurantSummary>> {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return Ok(Listing::Empty);
        }

        let summaries = self.summaries_where(|r| {
            [&r.summary.name, &r.summary.neighborhood, &r.summary.cuisine]
                .iter()
                .any(|field| field.to_lowercase().contains(&term))
        });
        Ok(self.by_rating(summaries))
    }

    async fn top_rated(&self, limit: usize) -> anyhow::Result<Listing<RestaurantSummary>> {
        let mut summaries = self.by_rating(self.summaries_where(|_| true)).into_vec();
        summaries.truncate(limit);
        Ok(summaries.into())
    }

    async fn featured_reviews(&self, limit: usize) -> anyhow::Result<Listing<RestaurantDetail>> {
        let mut reviewed: Vec<RestaurantDetail> = self
            .restaurants
            .iter()
            .filter(|r| r.review_body.as_deref().is_some_and(|body| !body.trim().is_empty()))
            .cloned()
            .collect();
        reviewed.sort_by(|a, b| b.summary.visit_date.cmp(&a.summary.visit_date));
        reviewed.truncate(limit);
        Ok(reviewed.into())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) const FIXTURE: &str = include_str!("../../fixtures/restaurants.json");

    pub(crate) fn fixture_repo() -> InMemoryRestaurantRepo {
        InMemoryRestaurantRepo::from_json(FIXTURE).unwrap()
    }

    fn slugs(listing: Listing<RestaurantSummary>) -> Vec<String> {
        listing.into_vec().into_iter().map(|r| r.slug).collect()
    }

    #[test]
    fn rejects_duplicate_slugs() {
        let mut restaurants = fixture_repo().restaurants;
        let duplicate = restaurants[0].clone();
        restaurants.push(duplicate);
        assert!(InMemoryRestaurantRepo::new(restaurants).is_err());
    }

    #[test]
    fn rejects_out_of_range_ratings() {
        let mut restaurants = fixture_repo().restaurants;
        restaurants[0].summary.rating = 5.5;
        assert!(InMemoryRestaurantRepo::new(restaurants).is_err());
    }

    #[tokio::test]
    async fn looks_up_details() {
        let repo = fixture_repo();
        assert!(matches!(repo.detail_by_slug("merchant").await.unwrap(), Lookup::Found(_)));
        assert_eq!(repo.detail_by_slug("nope").await.unwrap(), Lookup::NotFound);

        let details = repo
            .details_by_slugs(&["graze".to_string(), "nope".to_string()])
            .await
            .unwrap();
        assert_eq!(details.len(), 1);
    }

    #[tokio::test]
    async fn page_queries_match_by_slug() {
        let repo = fixture_repo();
        assert_eq!(slugs(repo.summaries_by_neighborhood("east-side").await.unwrap()), ["ha-long-bay"]);
        assert_eq!(slugs(repo.summaries_by_cuisine("mexican").await.unwrap()), ["taqueria-guadalajara"]);
        assert_eq!(
            slugs(repo.summaries_by_feature("outdoor-seating").await.unwrap()),
            ["merchant", "ha-long-bay"]
        );
        assert_eq!(slugs(repo.summaries_by_feature("vegan").await.unwrap()), ["ha-long-bay"]);
        assert_eq!(slugs(repo.summaries_by_dish("cheese-curds").await.unwrap()), ["merchant", "graze"]);
        assert!(repo.summaries_by_feature("dog-friendly").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn searches_name_neighborhood_and_cuisine() {
        let repo = fixture_repo();
        assert_eq!(slugs(repo.search("GRAZE").await.unwrap()), ["graze"]);
        assert_eq!(slugs(repo.search("south").await.unwrap()), ["taqueria-guadalajara"]);
        assert!(repo.search("   ").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn top_rated_and_featured() {
        let repo = fixture_repo();
        assert_eq!(slugs(repo.top_rated(2).await.unwrap()), ["merchant", "graze"]);

        let featured = repo.featured_reviews(3).await.unwrap().into_vec();
        let featured: Vec<&str> = featured.iter().map(|d| d.summary.slug.as_str()).collect();
        assert_eq!(featured, ["graze", "merchant"]);
    }
}
