//! Free-text and tag filtering over content collections.
//!
//! An item passes when both hold:
//! - the query is empty, or it occurs (case-insensitively) in the title,
//!   the summary or any tag;
//! - the selected tag set is empty, or every selected tag is one of the
//!   item's tags.
//!
//! Results keep the collection's order. An empty result is a valid answer;
//! rendering an empty state is left to the caller.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Anything that can be narrowed by [`filter`].
pub trait Searchable {
    fn title(&self) -> &str;
    fn summary(&self) -> &str;
    fn tags(&self) -> &[String];
}

/// Transient filter input owned by a single view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub search_text: String,
    pub selected_tags: BTreeSet<String>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selected_tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
    }

    /// Select the tag if absent, otherwise deselect it.
    /// Returns whether the tag is selected afterwards.
    pub fn toggle_tag(&mut self, tag: &str) -> bool {
        if self.selected_tags.remove(tag) {
            false
        } else {
            self.selected_tags.insert(tag.to_string());
            true
        }
    }

    pub fn clear(&mut self) {
        self.search_text.clear();
        self.selected_tags.clear();
    }

    /// True when the state lets every item through.
    pub fn is_empty(&self) -> bool {
        self.query().is_empty() && self.selected_tags.is_empty()
    }

    /// Trimmed, lowercased query.
    fn query(&self) -> String {
        self.search_text.trim().to_lowercase()
    }
}

/// Check a single item against the filter state.
pub fn matches<T: Searchable + ?Sized>(item: &T, state: &FilterState) -> bool {
    matches_query(item, &state.query()) && matches_tags(item, &state.selected_tags)
}

/// Return the ordered subsequence of `items` passing `state`.
pub fn filter<'a, T: Searchable>(items: &'a [T], state: &FilterState) -> Vec<&'a T> {
    let query = state.query();
    items
        .iter()
        .filter(|item| matches_query(*item, &query) && matches_tags(*item, &state.selected_tags))
        .collect()
}

/// Sorted, deduplicated tags across a collection.
pub fn all_tags<T: Searchable>(items: &[T]) -> Vec<String> {
    items
        .iter()
        .flat_map(|item| item.tags().iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

fn matches_query<T: Searchable + ?Sized>(item: &T, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }

    item.title().to_lowercase().contains(query)
        || item.summary().to_lowercase().contains(query)
        || item
            .tags()
            .iter()
            .any(|tag| tag.to_lowercase().contains(query))
}

fn matches_tags<T: Searchable + ?Sized>(item: &T, selected: &BTreeSet<String>) -> bool {
    selected
        .iter()
        .all(|wanted| item.tags().iter().any(|tag| tag == wanted))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Item {
        title: String,
        summary: String,
        tags: Vec<String>,
    }

    impl Searchable for Item {
        fn title(&self) -> &str {
            &self.title
        }
        fn summary(&self) -> &str {
            &self.summary
        }
        fn tags(&self) -> &[String] {
            &self.tags
        }
    }

    fn item(title: &str, summary: &str, tags: &[&str]) -> Item {
        Item {
            title: title.to_string(),
            summary: summary.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    fn sample() -> Vec<Item> {
        vec![
            item("Neural Search", "Semantic retrieval engine", &["AI", "Rust"]),
            item("Portfolio", "This very site", &["Web"]),
            item("Vision Lab", "Image classification demos", &["AI", "Web"]),
        ]
    }

    #[test]
    fn empty_state_returns_everything_in_order() {
        let items = sample();
        let result = filter(&items, &FilterState::new());
        let titles: Vec<_> = result.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["Neural Search", "Portfolio", "Vision Lab"]);
    }

    #[test]
    fn query_is_case_insensitive_and_trimmed() {
        let items = sample();
        let state = FilterState::new().with_search("  SEMANTIC ");
        let result = filter(&items, &state);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].title, "Neural Search");
    }

    #[test]
    fn query_matches_tags() {
        let items = sample();
        let state = FilterState::new().with_search("web");
        let result = filter(&items, &state);
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn selected_tags_are_combined_with_and() {
        let items = sample();
        let state = FilterState::new().with_tags(["AI", "Web"]);
        let result = filter(&items, &state);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].title, "Vision Lab");
    }

    #[test]
    fn tag_selection_is_exact() {
        let items = sample();
        let state = FilterState::new().with_tags(["ai"]);
        assert!(filter(&items, &state).is_empty());
    }

    #[test]
    fn unmatched_query_yields_empty_result() {
        let items = sample();
        let state = FilterState::new().with_search("blockchain");
        assert!(filter(&items, &state).is_empty());
    }

    #[test]
    fn toggle_tag_adds_then_removes() {
        let mut state = FilterState::new();
        assert!(state.toggle_tag("AI"));
        assert!(state.selected_tags.contains("AI"));
        assert!(!state.toggle_tag("AI"));
        assert!(state.is_empty());
    }

    #[test]
    fn whitespace_query_counts_as_empty() {
        let state = FilterState::new().with_search("   ");
        assert!(state.is_empty());
    }

    #[test]
    fn all_tags_is_sorted_and_unique() {
        let items = sample();
        assert_eq!(all_tags(&items), vec!["AI", "Rust", "Web"]);
    }
}
