use serde::{Deserialize, Serialize};
use time::Date;
use crate::models::tags::{DietaryTag, FeatureTag, PriceTier};

pub const MAX_RATING: f64 = 5.0;

time::serde::format_description!(visit_date_format, Date, "[year]-[month]-[day]");

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct RestaurantSummary {
    pub slug: String,
    pub name: String,
    pub neighborhood: String,
    pub cuisine: String,
    pub rating: f64,
    pub price_range: PriceTier,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_snippet: Option<String>,
    #[serde(default, with = "visit_date_format::option")]
    pub visit_date: Option<Date>,
    #[serde(default)]
    pub features: Vec<FeatureTag>,
    #[serde(default)]
    pub dietary: Vec<DietaryTag>,
}

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct RestaurantDetail {
    #[serde(flatten)]
    pub summary: RestaurantSummary,
    pub ratings: CategoryRatings,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_body: Option<String>,
    #[serde(default)]
    pub dishes_tried: Vec<String>,
}

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Default)]
pub struct CategoryRatings {
    pub food_quality: f64,
    pub atmosphere: f64,
    pub service: f64,
    pub value: f64,
    pub creativity: f64,
    pub return_factor: f64,
}

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum RatingCategory {
    FoodQuality,
    Atmosphere,
    Service,
    Value,
    Creativity,
    ReturnFactor,
}

impl RatingCategory {
    pub const ALL: [RatingCategory; 6] = [
        RatingCategory::FoodQuality,
        RatingCategory::Atmosphere,
        RatingCategory::Service,
        RatingCategory::Value,
        RatingCategory::Creativity,
        RatingCategory::ReturnFactor,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            RatingCategory::FoodQuality => "Food Quality",
            RatingCategory::Atmosphere => "Atmosphere",
            RatingCategory::Service => "Service",
            RatingCategory::Value => "Value",
            RatingCategory::Creativity => "Creativity",
            RatingCategory::ReturnFactor => "Return Factor",
        }
    }
}

impl CategoryRatings {
    pub fn get(&self, category: RatingCategory) -> f64 {
        match category {
            RatingCategory::FoodQuality => self.food_quality,
            RatingCategory::Atmosphere => self.atmosphere,
            RatingCategory::Service => self.service,
            RatingCategory::Value => self.value,
            RatingCategory::Creativity => self.creativity,
            RatingCategory::ReturnFactor => self.return_factor,
        }
    }

    pub fn is_valid(&self) -> bool {
        RatingCategory::ALL
            .into_iter()
            .all(|category| is_valid_rating(self.get(category)))
    }
}

impl RestaurantDetail {
    pub fn feature_labels(&self) -> Vec<&'static str> {
        self.summary.features.iter().map(|f| f.label()).collect()
    }

    pub fn dietary_labels(&self) -> Vec<&'static str> {
        self.summary.dietary.iter().map(|d| d.label()).collect()
    }
}

pub fn is_valid_rating(rating: f64) -> bool {
    (0.0..=MAX_RATING).contains(&rating)
}

/// Clamps into [0, 5] and rounds to one decimal. NaN becomes 0.
pub fn normalize_rating(rating: f64) -> f64 {
    if rating.is_nan() {
        return 0.0;
    }
    (rating.clamp(0.0, MAX_RATING) * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn deserializes_summary_with_optional_fields_missing() {
        let json = r#"{
            "slug": "merchant-madison",
            "name": "Merchant",
            "neighborhood": "Downtown",
            "cuisine": "American",
            "rating": 4.5,
            "price_range": "$$$"
        }"#;

        let summary: RestaurantSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.price_range, PriceTier::Upscale);
        assert!(summary.location.is_none());
        assert!(summary.visit_date.is_none());
        assert!(summary.features.is_empty());
        assert!(summary.dietary.is_empty());
    }

    #[test]
    fn visit_date_uses_calendar_format() {
        let json = r#"{
            "slug": "a", "name": "A", "neighborhood": "Isthmus", "cuisine": "Thai",
            "rating": 3.5, "price_range": "$", "visit_date": "2024-03-09",
            "features": ["late-night"], "dietary": ["vegan"]
        }"#;

        let summary: RestaurantSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.visit_date, Some(date!(2024 - 03 - 09)));

        let value = serde_json::to_value(&summary).unwrap();
        assert_eq!(value["visit_date"], "2024-03-09");
        assert_eq!(value["features"][0], "late-night");
    }

    #[test]
    fn normalizes_out_of_range_ratings() {
        assert_eq!(normalize_rating(7.2), 5.0);
        assert_eq!(normalize_rating(-1.0), 0.0);
        assert_eq!(normalize_rating(3.46), 3.5);
        assert_eq!(normalize_rating(f64::NAN), 0.0);
        assert!(is_valid_rating(0.0));
        assert!(is_valid_rating(5.0));
        assert!(!is_valid_rating(5.1));
    }
}
