use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown {kind}: {value}")]
pub struct UnknownTag {
    pub kind: &'static str,
    pub value: String,
}

/// Ordinal price bucket. Declaration order matches the lexicographic order of
/// the dollar-sign strings, so the derived `Ord` can be used for sorting.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PriceTier {
    #[serde(rename = "$")]
    Budget,
    #[serde(rename = "$$")]
    Moderate,
    #[serde(rename = "$$$")]
    Upscale,
    #[serde(rename = "$$$$")]
    FineDining,
}

impl PriceTier {
    pub const ALL: [PriceTier; 4] = [
        PriceTier::Budget,
        PriceTier::Moderate,
        PriceTier::Upscale,
        PriceTier::FineDining,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PriceTier::Budget => "$",
            PriceTier::Moderate => "$$",
            PriceTier::Upscale => "$$$",
            PriceTier::FineDining => "$$$$",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            PriceTier::Budget => "Under $15",
            PriceTier::Moderate => "$15-30",
            PriceTier::Upscale => "$30-50",
            PriceTier::FineDining => "$50+",
        }
    }
}

impl fmt::Display for PriceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PriceTier {
    type Err = UnknownTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PriceTier::ALL
            .into_iter()
            .find(|tier| tier.as_str() == s.trim())
            .ok_or_else(|| UnknownTag { kind: "price tier", value: s.to_string() })
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum FeatureTag {
    OutdoorSeating,
    DateNight,
    FamilyFriendly,
    GoodForGroups,
    LateNight,
    TakesReservations,
    FullBar,
    CraftCocktails,
}

impl FeatureTag {
    pub const ALL: [FeatureTag; 8] = [
        FeatureTag::OutdoorSeating,
        FeatureTag::DateNight,
        FeatureTag::FamilyFriendly,
        FeatureTag::GoodForGroups,
        FeatureTag::LateNight,
        FeatureTag::TakesReservations,
        FeatureTag::FullBar,
        FeatureTag::CraftCocktails,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            FeatureTag::OutdoorSeating => "outdoor-seating",
            FeatureTag::DateNight => "date-night",
            FeatureTag::FamilyFriendly => "family-friendly",
            FeatureTag::GoodForGroups => "good-for-groups",
            FeatureTag::LateNight => "late-night",
            FeatureTag::TakesReservations => "takes-reservations",
            FeatureTag::FullBar => "full-bar",
            FeatureTag::CraftCocktails => "craft-cocktails",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FeatureTag::OutdoorSeating => "Outdoor Seating",
            FeatureTag::DateNight => "Date Night",
            FeatureTag::FamilyFriendly => "Family Friendly",
            FeatureTag::GoodForGroups => "Good for Groups",
            FeatureTag::LateNight => "Late Night",
            FeatureTag::TakesReservations => "Takes Reservations",
            FeatureTag::FullBar => "Full Bar",
            FeatureTag::CraftCocktails => "Craft Cocktails",
        }
    }
}

impl FromStr for FeatureTag {
    type Err = UnknownTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FeatureTag::ALL
            .into_iter()
            .find(|tag| tag.slug() == s.trim())
            .ok_or_else(|| UnknownTag { kind: "feature tag", value: s.to_string() })
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum DietaryTag {
    Vegetarian,
    Vegan,
    GlutenFree,
    DairyFree,
}

impl DietaryTag {
    pub const ALL: [DietaryTag; 4] = [
        DietaryTag::Vegetarian,
        DietaryTag::Vegan,
        DietaryTag::GlutenFree,
        DietaryTag::DairyFree,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            DietaryTag::Vegetarian => "vegetarian",
            DietaryTag::Vegan => "vegan",
            DietaryTag::GlutenFree => "gluten-free",
            DietaryTag::DairyFree => "dairy-free",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DietaryTag::Vegetarian => "Vegetarian Options",
            DietaryTag::Vegan => "Vegan Options",
            DietaryTag::GlutenFree => "Gluten-Free Options",
            DietaryTag::DairyFree => "Dairy-Free Options",
        }
    }
}

impl FromStr for DietaryTag {
    type Err = UnknownTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DietaryTag::ALL
            .into_iter()
            .find(|tag| tag.slug() == s.trim())
            .ok_or_else(|| UnknownTag { kind: "dietary tag", value: s.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_tiers_order_like_their_strings() {
        let mut by_string: Vec<&str> = PriceTier::ALL.iter().map(|t| t.as_str()).collect();
        by_string.sort();
        let by_tier: Vec<&str> = PriceTier::ALL.iter().map(|t| t.as_str()).collect();
        assert_eq!(by_string, by_tier);
        assert!(PriceTier::Budget < PriceTier::FineDining);
    }

    #[test]
    fn tags_serialize_as_their_slugs() {
        assert_eq!(serde_json::to_string(&FeatureTag::TakesReservations).unwrap(), "\"takes-reservations\"");
        assert_eq!(serde_json::to_string(&DietaryTag::GlutenFree).unwrap(), "\"gluten-free\"");
        assert_eq!(serde_json::to_string(&PriceTier::Upscale).unwrap(), "\"$$$\"");

        for tag in FeatureTag::ALL {
            let json = serde_json::to_string(&tag).unwrap();
            assert_eq!(json, format!("\"{}\"", tag.slug()));
        }
    }

    #[test]
    fn parses_known_values_and_rejects_others() {
        assert_eq!("$$".parse::<PriceTier>(), Ok(PriceTier::Moderate));
        assert_eq!("late-night".parse::<FeatureTag>(), Ok(FeatureTag::LateNight));
        assert_eq!("vegan".parse::<DietaryTag>(), Ok(DietaryTag::Vegan));

        assert!("$$$$$".parse::<PriceTier>().is_err());
        assert!("dog-friendly".parse::<FeatureTag>().is_err());
        assert!("keto".parse::<DietaryTag>().is_err());
    }
}
