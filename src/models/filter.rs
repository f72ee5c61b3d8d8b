use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use crate::models::tags::{DietaryTag, FeatureTag, PriceTier};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    #[default]
    RatingDesc,
    RatingAsc,
    DateDesc,
    DateAsc,
    PriceAsc,
    PriceDesc,
    NameAsc,
}

impl SortOrder {
    pub const ALL: [SortOrder; 7] = [
        SortOrder::RatingDesc,
        SortOrder::RatingAsc,
        SortOrder::DateDesc,
        SortOrder::DateAsc,
        SortOrder::PriceAsc,
        SortOrder::PriceDesc,
        SortOrder::NameAsc,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SortOrder::RatingDesc => "Highest Rated",
            SortOrder::RatingAsc => "Lowest Rated",
            SortOrder::DateDesc => "Newest Reviews",
            SortOrder::DateAsc => "Oldest Reviews",
            SortOrder::PriceAsc => "Price: Low to High",
            SortOrder::PriceDesc => "Price: High to Low",
            SortOrder::NameAsc => "Name: A to Z",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("minimum rating must be one of 0, 3, 3.5, 4, 4.5 (got {0})")]
pub struct InvalidMinRating(pub String);

/// The stepped minimum-rating choices offered by the filter panel.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MinRating {
    #[default]
    #[serde(rename = "0")]
    Any,
    #[serde(rename = "3")]
    Three,
    #[serde(rename = "3.5")]
    ThreeAndHalf,
    #[serde(rename = "4")]
    Four,
    #[serde(rename = "4.5")]
    FourAndHalf,
}

impl MinRating {
    pub const ALL: [MinRating; 5] = [
        MinRating::Any,
        MinRating::Three,
        MinRating::ThreeAndHalf,
        MinRating::Four,
        MinRating::FourAndHalf,
    ];

    pub fn threshold(&self) -> f64 {
        match self {
            MinRating::Any => 0.0,
            MinRating::Three => 3.0,
            MinRating::ThreeAndHalf => 3.5,
            MinRating::Four => 4.0,
            MinRating::FourAndHalf => 4.5,
        }
    }

    pub fn is_any(&self) -> bool {
        *self == MinRating::Any
    }
}

impl fmt::Display for MinRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.threshold())
    }
}

impl FromStr for MinRating {
    type Err = InvalidMinRating;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: f64 = s
            .trim()
            .parse()
            .map_err(|_| InvalidMinRating(s.to_string()))?;

        MinRating::ALL
            .into_iter()
            .find(|step| step.threshold() == value)
            .ok_or_else(|| InvalidMinRating(s.to_string()))
    }
}

/// Transient filter selection for a listing. Multi-valued groups are OR'd
/// internally and AND'd with each other.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct FilterCriteria {
    pub price_tiers: Vec<PriceTier>,
    pub cuisines: Vec<String>,
    pub neighborhoods: Vec<String>,
    pub features: Vec<FeatureTag>,
    pub dietary: Vec<DietaryTag>,
    pub min_rating: MinRating,
    pub sort_by: SortOrder,
}

impl FilterCriteria {
    pub fn clear(&mut self) {
        *self = FilterCriteria::default();
    }

    pub fn active_filter_count(&self) -> usize {
        self.price_tiers.len()
            + self.cuisines.len()
            + self.neighborhoods.len()
            + self.features.len()
            + self.dietary.len()
            + usize::from(!self.min_rating.is_any())
    }

    pub fn is_filtering(&self) -> bool {
        self.active_filter_count() > 0
    }
}
