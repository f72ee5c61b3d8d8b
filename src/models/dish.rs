use serde::Serialize;

pub const DEFAULT_FEATURED_DISHES: usize = 6;

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dish {
    pub slug: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
}

const fn dish(
    slug: &'static str,
    name: &'static str,
    icon: &'static str,
    description: &'static str,
) -> Dish {
    Dish { slug, name, icon, description }
}

pub const POPULAR_DISHES: &[Dish] = &[
    dish("fish-fry", "Fish Fry", "🐟", "The quintessential Wisconsin Friday tradition, crispy fried fish with all the fixings"),
    dish("cheese-curds", "Cheese Curds", "🧀", "Wisconsin's iconic snack, fresh, squeaky and perfectly fried"),
    dish("old-fashioned", "Old Fashioned", "🥃", "Wisconsin's signature cocktail, brandy-based and uniquely ours"),
    dish("pizza", "Pizza", "🍕", "From Neapolitan to New York style, Madison's best pizza spots"),
    dish("burger", "Burger", "🍔", "Juicy, flavorful burgers from smash patties to gourmet creations"),
    dish("tacos", "Tacos", "🌮", "Authentic street tacos to creative fusion, Madison's taco scene"),
    dish("sushi", "Sushi", "🍣", "Fresh sushi, creative rolls, and authentic sashimi in Madison"),
    dish("ramen", "Ramen", "🍜", "Steaming bowls of tonkotsu, miso, and shoyu ramen"),
    dish("fried-chicken", "Fried Chicken", "🍗", "Crispy, juicy fried chicken done right, from classic to Nashville hot"),
    dish("pho", "Pho", "🥢", "Authentic Vietnamese pho with aromatic broth and fresh ingredients"),
    dish("breakfast-sandwich", "Breakfast Sandwich", "🥪", "The perfect start to your day with egg, cheese, and your choice of protein"),
    dish("wings", "Chicken Wings", "🍗", "Saucy, crispy wings in every flavor imaginable"),
    dish("bbq", "BBQ", "🍖", "Slow-smoked meats and authentic barbecue flavors"),
    dish("ice-cream", "Ice Cream", "🍦", "Creamy scoops, unique flavors, and frozen Wisconsin treats"),
    dish("bloody-mary", "Bloody Mary", "🍅", "Wisconsin's legendary brunch cocktail, the more garnishes the better"),
];

pub fn dish_by_slug(slug: &str) -> Option<&'static Dish> {
    POPULAR_DISHES.iter().find(|dish| dish.slug == slug)
}

pub fn featured_dishes(count: usize) -> &'static [Dish] {
    &POPULAR_DISHES[..count.min(POPULAR_DISHES.len())]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn looks_up_dishes() {
        assert_eq!(dish_by_slug("cheese-curds").map(|d| d.name), Some("Cheese Curds"));
        assert!(dish_by_slug("lutefisk").is_none());
    }

    #[test]
    fn featured_dishes_are_a_prefix() {
        let featured = featured_dishes(DEFAULT_FEATURED_DISHES);
        assert_eq!(featured.len(), 6);
        assert_eq!(featured[0].slug, "fish-fry");
        assert_eq!(featured_dishes(100).len(), POPULAR_DISHES.len());
        assert!(featured_dishes(0).is_empty());
    }
}
