use serde::Serialize;

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum CategoryGroup {
    Occasions,
    Features,
    Dietary,
    PriceRanges,
    LocationFeatures,
    DishSearches,
}

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Category {
    pub slug: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
}

const fn category(
    slug: &'static str,
    name: &'static str,
    icon: &'static str,
    description: &'static str,
) -> Category {
    Category { slug, name, icon, description }
}

pub const OCCASIONS: &[Category] = &[
    category("date-night", "Date Night", "💑", "Romantic restaurants perfect for date night in Madison"),
    category("brunch", "Brunch", "🥞", "Best brunch spots in Madison"),
    category("family-friendly", "Family Friendly", "👨‍👩‍👧‍👦", "Kid-friendly restaurants in Madison"),
    category("group-dining", "Group Dining", "👥", "Great restaurants for large groups"),
    category("business-lunch", "Business Lunch", "💼", "Professional lunch spots in Madison"),
    category("celebration", "Special Occasions", "🎉", "Restaurants for birthdays and celebrations"),
];

pub const FEATURES: &[Category] = &[
    category("outdoor-seating", "Outdoor Seating", "🌳", "Restaurants with patios and outdoor dining"),
    category("happy-hour", "Happy Hour", "🍻", "Best happy hour deals in Madison"),
    category("late-night", "Late Night", "🌙", "Restaurants open late in Madison"),
    category("dog-friendly", "Dog Friendly", "🐕", "Dog-friendly patios and restaurants"),
    category("live-music", "Live Music", "🎵", "Restaurants with live music"),
    category("craft-cocktails", "Craft Cocktails", "🍸", "Best cocktail bars and restaurants"),
    category("local-beer", "Local Beer", "🍺", "Wisconsin craft beer selection"),
    category("waterfront", "Waterfront", "🌊", "Lakeside and waterfront dining"),
];

pub const DIETARY: &[Category] = &[
    category("vegetarian", "Vegetarian Options", "🥗", "Great vegetarian options in Madison"),
    category("vegan", "Vegan Friendly", "🌱", "Vegan-friendly restaurants"),
    category("gluten-free", "Gluten Free", "🌾", "Gluten-free friendly dining"),
];

pub const PRICE_RANGES: &[Category] = &[
    category("cheap-eats", "Cheap Eats", "💵", "Best budget-friendly restaurants under $15"),
    category("mid-range", "Mid-Range", "💰", "Quality dining $15-$30 per person"),
    category("fine-dining", "Fine Dining", "💎", "Upscale dining experiences"),
];

pub const LOCATION_FEATURES: &[Category] = &[
    category("parking", "Easy Parking", "🅿️", "Restaurants with convenient parking"),
    category("near-capitol", "Near Capitol", "🏛️", "Restaurants near the Wisconsin State Capitol"),
    category("near-campus", "Near UW Campus", "🎓", "Restaurants near University of Wisconsin"),
];

pub const DISH_SEARCHES: &[Category] = &[
    category("best-burgers", "Best Burgers", "🍔", "Top burger spots in Madison"),
    category("best-pizza", "Best Pizza", "🍕", "Best pizza in Madison"),
    category("best-tacos", "Best Tacos", "🌮", "Top taco spots in Madison"),
    category("best-sushi", "Best Sushi", "🍣", "Best sushi restaurants in Madison"),
    category("best-bbq", "Best BBQ", "🍖", "Top BBQ joints in Madison"),
    category("best-fish-fry", "Best Fish Fry", "🐟", "Wisconsin tradition: best fish fry"),
    category("best-ramen", "Best Ramen", "🍜", "Top ramen spots in Madison"),
    category("best-wings", "Best Wings", "🍗", "Best chicken wings in Madison"),
];

pub const CATEGORY_GROUPS: [(CategoryGroup, &[Category]); 6] = [
    (CategoryGroup::Occasions, OCCASIONS),
    (CategoryGroup::Features, FEATURES),
    (CategoryGroup::Dietary, DIETARY),
    (CategoryGroup::PriceRanges, PRICE_RANGES),
    (CategoryGroup::LocationFeatures, LOCATION_FEATURES),
    (CategoryGroup::DishSearches, DISH_SEARCHES),
];

pub fn all_categories() -> impl Iterator<Item = &'static Category> {
    CATEGORY_GROUPS.iter().flat_map(|(_, categories)| categories.iter())
}

pub fn find_category(slug: &str) -> Option<&'static Category> {
    all_categories().find(|category| category.slug == slug)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use super::*;

    #[test]
    fn category_slugs_are_unique() {
        let mut seen = HashSet::new();
        for category in all_categories() {
            assert!(seen.insert(category.slug), "duplicate category slug {}", category.slug);
        }
        assert_eq!(seen.len(), 31);
    }

    #[test]
    fn finds_categories_by_slug() {
        assert_eq!(find_category("brunch").map(|c| c.name), Some("Brunch"));
        assert_eq!(find_category("vegan").map(|c| c.icon), Some("🌱"));
        assert!(find_category("not-a-category").is_none());
    }
}
