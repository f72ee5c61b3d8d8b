/// Lowercases and joins whitespace-separated words with `-`, the way the site
/// builds neighborhood and cuisine slugs from display labels.
pub fn slugify(label: &str) -> String {
    label
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<String>>()
        .join("-")
}

/// `east-side` -> `East Side`
pub fn title_case_slug(slug: &str) -> String {
    slug.split('-')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

pub fn same_slug(label: &str, slug: &str) -> bool {
    !label.trim().is_empty() && slugify(label) == slugify(slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugifies_labels() {
        assert_eq!(slugify("East Side"), "east-side");
        assert_eq!(slugify("  South   Madison "), "south-madison");
        assert_eq!(slugify("Italian"), "italian");
        assert_eq!(slugify(""), "");
    }

    #[test]
    fn title_cases_slugs() {
        assert_eq!(title_case_slug("east-side"), "East Side");
        assert_eq!(title_case_slug("downtown"), "Downtown");
        assert_eq!(title_case_slug("near--west"), "Near West");
    }

    #[test]
    fn compares_labels_against_slugs() {
        assert!(same_slug("Near West", "near-west"));
        assert!(same_slug("MEXICAN", "mexican"));
        assert!(!same_slug("", ""));
        assert!(!same_slug("Downtown", "east-side"));
    }
}
