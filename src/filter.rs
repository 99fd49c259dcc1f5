use std::collections::BTreeMap;

use crate::models::events::SoundEventItem;

/// Keyword and category filter over indexed events.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilter {
    keywords: Vec<String>,
    category: Option<String>,
}

impl SearchFilter {
    /// Splits `query` on whitespace into lowercase keywords. All keywords must match.
    pub fn new(query: &str, category: Option<&str>) -> Self {
        SearchFilter {
            keywords: query.split_whitespace().map(str::to_lowercase).collect(),
            category: category.map(str::to_owned),
        }
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// True if the event is in the selected category and every keyword occurs in its
    /// display name or id, ignoring case.
    pub fn matches(&self, event: &SoundEventItem) -> bool {
        if self
            .category
            .as_ref()
            .is_some_and(|category| *category != event.category)
        {
            return false;
        }

        let display_name = event.display_name.to_lowercase();
        let id = event.id.to_lowercase();
        self.keywords
            .iter()
            .all(|keyword| display_name.contains(keyword.as_str()) || id.contains(keyword.as_str()))
    }

    /// Matching events, in their original order.
    pub fn apply<'a>(&self, events: &'a [SoundEventItem]) -> Vec<&'a SoundEventItem> {
        events.iter().filter(|event| self.matches(event)).collect()
    }
}

/// Distinct categories of `events`, sorted.
pub fn categories(events: &[SoundEventItem]) -> Vec<String> {
    category_counts(events).into_keys().collect()
}

/// Number of events per category.
pub fn category_counts(events: &[SoundEventItem]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for event in events {
        *counts.entry(event.category.clone()).or_insert(0) += 1;
    }
    counts
}
