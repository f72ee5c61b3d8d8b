use anyhow::{anyhow, Context};
use async_trait::async_trait;
use bb8_postgres::bb8::{Pool, PooledConnection};
use bb8_postgres::PostgresConnectionManager;
use bb8_postgres::tokio_postgres::types::ToSql;
use bb8_postgres::tokio_postgres::{NoTls, Row};
use time::Date;
use tracing::{debug, warn};
use crate::helpers::json_list::{parse_string_list, parse_tag_list};
use crate::models::lookup::{Listing, Lookup};
use crate::models::restaurant::{
    normalize_rating, CategoryRatings, Location, RestaurantDetail, RestaurantSummary,
};
use crate::models::tags::PriceTier;
use crate::repositories::RestaurantRepository;

pub const RETRY_LIMIT: usize = 5;

const SELECT_REVIEWED: &str = "SELECT * FROM v_restaurants_full WHERE overall_rating IS NOT NULL";

fn detail_by_slug_statement() -> String {
    format!("{} AND slug = $1 LIMIT 1;", SELECT_REVIEWED)
}

fn details_by_slugs_statement() -> String {
    format!("{} AND slug = ANY($1);", SELECT_REVIEWED)
}

pub struct PostgresConnectionRepo {
    postgres_connection: Pool<PostgresConnectionManager<NoTls>>,
}

impl PostgresConnectionRepo {
    pub fn new(
        postgres_connection: Pool<PostgresConnectionManager<NoTls>>,
    ) -> Self {
        Self {
            postgres_connection
        }
    }

    pub async fn connect(database_url: &str, max_size: u32) -> anyhow::Result<Self> {
        let manager = PostgresConnectionManager::new_from_stringlike(database_url, NoTls)
            .context("Invalid postgres connection string")?;
        let pool = Pool::builder()
            .max_size(max_size)
            .build(manager)
            .await
            .context("Failed to build postgres pool")?;

        Ok(Self::new(pool))
    }

    async fn get_postgres_connection(
        &self,
    ) -> anyhow::Result<PooledConnection<'_, PostgresConnectionManager<NoTls>>> {
        for _ in 0..RETRY_LIMIT {
            match self.postgres_connection.get().await {
                Ok(conn) => return Ok(conn),
                Err(e) => {
                    warn!("Failed to retrieve postgres connection due to: {}, retrying in 3s", e);
                    tokio::time::sleep(tokio::time::Duration::from_secs(3)).await;
                    continue;
                }
            }
        }

        return Err(anyhow!("Failed to retrieve a valid connection from postgres pool, BAILING"));
    }

    async fn query_rows(
        &self,
        stmt: &str,
        params: &[&(dyn ToSql + Sync)],
    ) -> anyhow::Result<Vec<Row>> {
        let conn = self.get_postgres_connection().await?;
        debug!("Running query: {}", stmt);

        match conn.query(stmt, params).await {
            Ok(rows) => Ok(rows),
            Err(e) => {
                warn!("Ran into an error running restaurant query due to: {}", e);
                Err(anyhow!(e).context("Restaurant query failed"))
            }
        }
    }

    async fn query_summaries(
        &self,
        stmt: &str,
        params: &[&(dyn ToSql + Sync)],
    ) -> anyhow::Result<Listing<RestaurantSummary>> {
        let rows = self.query_rows(stmt, params).await?;

        let mut restaurants = Vec::new();
        for row in rows {
            match parse_row_into_summary(&row) {
                Ok(restaurant) => restaurants.push(restaurant),
                Err(e) => warn!("Skipping unreadable restaurant row due to: {}", e),
            }
        }

        Ok(restaurants.into())
    }

    async fn query_details(
        &self,
        stmt: &str,
        params: &[&(dyn ToSql + Sync)],
    ) -> anyhow::Result<Listing<RestaurantDetail>> {
        let rows = self.query_rows(stmt, params).await?;

        let mut restaurants = Vec::new();
        for row in rows {
            match parse_row_into_detail(&row) {
                Ok(restaurant) => restaurants.push(restaurant),
                Err(e) => warn!("Skipping unreadable restaurant row due to: {}", e),
            }
        }

        Ok(restaurants.into())
    }
}

#[async_trait]
impl RestaurantRepository for PostgresConnectionRepo {
    async fn all_summaries(&self) -> anyhow::Result<Listing<RestaurantSummary>> {
        let stmt = format!("{} ORDER BY visit_date DESC NULLS LAST;", SELECT_REVIEWED);
        self.query_summaries(&stmt, &[]).await
    }

    async fn detail_by_slug(&self, slug: &str) -> anyhow::Result<Lookup<RestaurantDetail>> {
        let stmt = detail_by_slug_statement();
        let details = self.query_details(&stmt, &[&slug]).await?;

        Ok(details.into_vec().into_iter().next().into())
    }

    async fn details_by_slugs(&self, slugs: &[String]) -> anyhow::Result<Listing<RestaurantDetail>> {
        if slugs.is_empty() {
            return Ok(Listing::Empty);
        }
        let stmt = details_by_slugs_statement();
        self.query_details(&stmt, &[&slugs]).await
    }

    async fn summaries_by_neighborhood(
        &self,
        neighborhood_slug: &str,
    ) -> anyhow::Result<Listing<RestaurantSummary>> {
        let stmt = format!(
            "{} AND neighborhood_slug = $1 ORDER BY overall_rating DESC;",
            SELECT_REVIEWED
        );
        self.query_summaries(&stmt, &[&neighborhood_slug]).await
    }

    async fn summaries_by_cuisine(&self, cuisine_slug: &str) -> anyhow::Result<Listing<RestaurantSummary>> {
        let stmt = format!(
            "{} AND cuisine_slug = $1 ORDER BY overall_rating DESC;",
            SELECT_REVIEWED
        );
        self.query_summaries(&stmt, &[&cuisine_slug]).await
    }

    async fn summaries_by_feature(&self, feature_slug: &str) -> anyhow::Result<Listing<RestaurantSummary>> {
        let stmt = "SELECT DISTINCT r.* FROM v_restaurants_full r \
            JOIN restaurant_features rf ON r.id = rf.restaurant_id \
            JOIN features f ON rf.feature_id = f.id \
            WHERE f.slug = $1 AND r.overall_rating IS NOT NULL \
            ORDER BY r.overall_rating DESC;";
        self.query_summaries(stmt, &[&feature_slug]).await
    }

    async fn summaries_by_dish(&self, dish_slug: &str) -> anyhow::Result<Listing<RestaurantSummary>> {
        let stmt = "SELECT DISTINCT r.* FROM v_restaurants_full r \
            JOIN review_dishes rd ON r.id = rd.restaurant_id \
            WHERE rd.dish_slug = $1 AND r.overall_rating IS NOT NULL \
            ORDER BY r.overall_rating DESC;";
        self.query_summaries(stmt, &[&dish_slug]).await
    }

    async fn search(&self, term: &str) -> anyhow::Result<Listing<RestaurantSummary>> {
        let term = term.trim();
        if term.is_empty() {
            return Ok(Listing::Empty);
        }

        let pattern = format!("%{}%", term);
        let stmt = format!(
            "{} AND (name ILIKE $1 OR neighborhood_name ILIKE $1 OR cuisine_name ILIKE $1) \
            ORDER BY overall_rating DESC;",
            SELECT_REVIEWED
        );
        self.query_summaries(&stmt, &[&pattern]).await
    }

    async fn top_rated(&self, limit: usize) -> anyhow::Result<Listing<RestaurantSummary>> {
        let limit = limit as i64;
        let stmt = format!("{} ORDER BY overall_rating DESC LIMIT $1;", SELECT_REVIEWED);
        self.query_summaries(&stmt, &[&limit]).await
    }

    async fn featured_reviews(&self, limit: usize) -> anyhow::Result<Listing<RestaurantDetail>> {
        let limit = limit as i64;
        let stmt = format!(
            "{} AND review_body IS NOT NULL AND review_body <> '' \
            ORDER BY visit_date DESC NULLS LAST LIMIT $1;",
            SELECT_REVIEWED
        );
        self.query_details(&stmt, &[&limit]).await
    }
}

fn parse_row_into_summary(
    row: &Row,
) -> anyhow::Result<RestaurantSummary> {
    let price_range: String = row.try_get("price_range")?;
    let latitude = row.try_get::<&str, Option<f64>>("latitude").ok().flatten();
    let longitude = row.try_get::<&str, Option<f64>>("longitude").ok().flatten();
    let features = row.try_get::<&str, Option<&str>>("features").ok().flatten();
    let dietary = row.try_get::<&str, Option<&str>>("dietary").ok().flatten();

    Ok(RestaurantSummary {
        slug: row.try_get("slug")?,
        name: row.try_get("name")?,
        neighborhood: optional_text(row, "neighborhood_name").unwrap_or_default(),
        cuisine: optional_text(row, "cuisine_name").unwrap_or_default(),
        rating: normalize_rating(row.try_get::<&str, Option<f64>>("overall_rating")?.unwrap_or(0.0)),
        price_range: price_range.parse::<PriceTier>()?,
        location: latitude
            .zip(longitude)
            .map(|(latitude, longitude)| Location { latitude, longitude }),
        image_url: optional_text(row, "featured_image_url"),
        review_snippet: optional_text(row, "review_snippet"),
        visit_date: row.try_get::<&str, Option<Date>>("visit_date").ok().flatten(),
        features: parse_tag_list(features),
        dietary: parse_tag_list(dietary),
    })
}

fn parse_row_into_detail(
    row: &Row,
) -> anyhow::Result<RestaurantDetail> {
    let dishes_tried = row.try_get::<&str, Option<&str>>("dishes_tried").ok().flatten();

    Ok(RestaurantDetail {
        summary: parse_row_into_summary(row)?,
        ratings: CategoryRatings {
            food_quality: category_rating(row, "food_quality"),
            atmosphere: category_rating(row, "atmosphere"),
            service: category_rating(row, "service"),
            value: category_rating(row, "value"),
            creativity: category_rating(row, "creativity"),
            return_factor: category_rating(row, "return_factor"),
        },
        review_body: optional_text(row, "review_body"),
        dishes_tried: parse_string_list(dishes_tried),
    })
}

fn optional_text(row: &Row, column: &str) -> Option<String> {
    row.try_get::<&str, Option<String>>(column).ok().flatten()
}

fn category_rating(row: &Row, column: &str) -> f64 {
    let rating = row.try_get::<&str, Option<f64>>(column).ok().flatten();
    normalize_rating(rating.unwrap_or(0.0))
}
