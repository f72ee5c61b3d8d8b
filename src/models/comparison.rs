use serde::{Deserialize, Serialize};

pub const MAX_COMPARISON_SIZE: usize = 3;
pub const COMPARE_QUERY_PARAM: &str = "restaurants";

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ComparisonStatus {
    /// Nothing selected yet.
    Empty,
    /// Exactly one restaurant selected.
    NeedsOneMore,
    /// Two or more selected, the side-by-side table can be rendered.
    Ready,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ToggleOutcome {
    Added,
    Removed,
    AtCapacity,
}

/// Ordered, duplicate-free set of up to three restaurant slugs.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
#[serde(transparent)]
pub struct ComparisonSelection {
    slugs: Vec<String>,
}

impl ComparisonSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a selection from the `restaurants` query value. Only the first
    /// three comma-separated tokens are read; blanks and repeats among them
    /// are skipped.
    pub fn from_query(query: Option<&str>) -> Self {
        let mut selection = Self::new();
        let Some(query) = query else {
            return selection;
        };

        let tokens = query
            .split(',')
            .take(MAX_COMPARISON_SIZE)
            .map(str::trim)
            .filter(|t| !t.is_empty());
        for token in tokens {
            if !selection.contains(token) {
                selection.slugs.push(token.to_string());
            }
        }
        selection
    }

    /// A slug can join the selection only if it survives the query mapping
    /// unchanged.
    pub fn is_selectable(slug: &str) -> bool {
        !slug.is_empty() && !slug.contains(',') && slug.trim() == slug
    }

    /// The `restaurants` query value, or `None` when nothing is selected.
    pub fn to_query(&self) -> Option<String> {
        if self.slugs.is_empty() {
            None
        } else {
            Some(self.slugs.join(","))
        }
    }

    pub fn compare_path(&self) -> String {
        match self.to_query() {
            Some(query) => format!("/compare?{}={}", COMPARE_QUERY_PARAM, query),
            None => "/compare".to_string(),
        }
    }

    pub fn toggle(&mut self, slug: &str) -> ToggleOutcome {
        if let Some(index) = self.slugs.iter().position(|s| s == slug) {
            self.slugs.remove(index);
            return ToggleOutcome::Removed;
        }
        if self.is_full() {
            return ToggleOutcome::AtCapacity;
        }
        self.slugs.push(slug.to_string());
        ToggleOutcome::Added
    }

    pub fn clear(&mut self) {
        self.slugs.clear();
    }

    pub fn contains(&self, slug: &str) -> bool {
        self.slugs.iter().any(|s| s == slug)
    }

    pub fn slugs(&self) -> &[String] {
        &self.slugs
    }

    pub fn len(&self) -> usize {
        self.slugs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slugs.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.slugs.len() >= MAX_COMPARISON_SIZE
    }

    pub fn status(&self) -> ComparisonStatus {
        match self.slugs.len() {
            0 => ComparisonStatus::Empty,
            1 => ComparisonStatus::NeedsOneMore,
            _ => ComparisonStatus::Ready,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selection(slugs: &[&str]) -> ComparisonSelection {
        let mut selection = ComparisonSelection::new();
        for slug in slugs {
            selection.toggle(slug);
        }
        selection
    }

    #[test]
    fn seeds_at_most_three_from_query() {
        let seeded = ComparisonSelection::from_query(Some("a,b,c,d"));
        assert_eq!(seeded.slugs(), ["a", "b", "c"]);
        assert_eq!(seeded.status(), ComparisonStatus::Ready);
    }

    #[test]
    fn missing_or_blank_query_is_empty() {
        assert!(ComparisonSelection::from_query(None).is_empty());
        assert!(ComparisonSelection::from_query(Some("")).is_empty());
        assert!(ComparisonSelection::from_query(Some(" , ,")).is_empty());
    }

    #[test]
    fn query_seeding_skips_repeats() {
        let seeded = ComparisonSelection::from_query(Some("a, a ,b"));
        assert_eq!(seeded.slugs(), ["a", "b"]);
    }

    #[test]
    fn tokens_past_the_third_are_ignored_even_after_repeats() {
        assert_eq!(ComparisonSelection::from_query(Some("a,a,b,c")).slugs(), ["a", "b"]);
        assert_eq!(ComparisonSelection::from_query(Some("a,,b,c")).slugs(), ["a", "b"]);
    }

    #[test]
    fn selectable_slugs_survive_the_query_mapping() {
        assert!(ComparisonSelection::is_selectable("merchant"));
        assert!(!ComparisonSelection::is_selectable("c,d"));
        assert!(!ComparisonSelection::is_selectable(" graze"));
        assert!(!ComparisonSelection::is_selectable(""));
    }

    #[test]
    fn toggle_sequence_respects_capacity() {
        let mut selection = selection(&["a", "b"]);

        assert_eq!(selection.toggle("a"), ToggleOutcome::Removed);
        assert_eq!(selection.slugs(), ["b"]);

        assert_eq!(selection.toggle("c"), ToggleOutcome::Added);
        assert_eq!(selection.slugs(), ["b", "c"]);

        assert_eq!(selection.toggle("d"), ToggleOutcome::Added);
        assert_eq!(selection.toggle("e"), ToggleOutcome::AtCapacity);
        assert_eq!(selection.slugs(), ["b", "c", "d"]);
    }

    #[test]
    fn toggle_twice_restores_selection() {
        let original = selection(&["x", "y"]);
        let mut toggled = original.clone();
        toggled.toggle("z");
        toggled.toggle("z");
        assert_eq!(toggled, original);

        toggled.toggle("x");
        toggled.toggle("x");
        assert_eq!(toggled.len(), original.len());
        assert!(toggled.contains("x"));
    }

    #[test]
    fn never_exceeds_capacity() {
        let mut selection = ComparisonSelection::new();
        for i in 0..20 {
            selection.toggle(&format!("slug-{}", i % 7));
            assert!(selection.len() <= MAX_COMPARISON_SIZE);
        }
    }

    #[test]
    fn query_mapping_round_trips_and_builds_paths() {
        let selection = selection(&["merchant", "graze"]);
        assert_eq!(selection.to_query().as_deref(), Some("merchant,graze"));
        assert_eq!(selection.compare_path(), "/compare?restaurants=merchant,graze");
        assert_eq!(
            ComparisonSelection::from_query(selection.to_query().as_deref()),
            selection
        );

        let mut cleared = selection.clone();
        cleared.clear();
        assert_eq!(cleared.to_query(), None);
        assert_eq!(cleared.compare_path(), "/compare");
        assert_eq!(cleared.status(), ComparisonStatus::Empty);
    }

    #[test]
    fn single_selection_needs_one_more() {
        assert_eq!(selection(&["a"]).status(), ComparisonStatus::NeedsOneMore);
    }
}
