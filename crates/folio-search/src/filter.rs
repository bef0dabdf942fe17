//! Facet filters for search.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::types::{ResultKind, SearchResult};

/// Date range facet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DateRange {
    /// No restriction.
    #[default]
    All,
    /// Updated within the last seven days.
    PastWeek,
    /// Updated within the last month.
    PastMonth,
    /// Updated within the last year.
    PastYear,
}

/// Active facet filters.
///
/// Empty sets mean "no restriction" for that facet.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchFilters {
    /// Selected result kinds.
    pub kinds: BTreeSet<ResultKind>,
    /// Selected categories.
    pub categories: BTreeSet<String>,
    /// Selected date range.
    pub date_range: DateRange,
}

impl SearchFilters {
    /// Flip membership of a kind.
    pub fn toggle_kind(&mut self, kind: ResultKind) {
        if !self.kinds.remove(&kind) {
            self.kinds.insert(kind);
        }
    }

    /// Flip membership of a category.
    pub fn toggle_category(&mut self, category: &str) {
        if !self.categories.remove(category) {
            self.categories.insert(category.to_owned());
        }
    }

    /// Reset every facet to its default in one step.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Number of active filters, as shown on the filter badge.
    pub fn active_count(&self) -> usize {
        self.kinds.len() + self.categories.len() + usize::from(self.date_range != DateRange::All)
    }

    /// Whether a result passes the kind and category facets.
    pub fn matches(&self, result: &SearchResult) -> bool {
        let kind_ok = self.kinds.is_empty() || self.kinds.contains(&result.kind);
        let category_ok =
            self.categories.is_empty() || self.categories.contains(&result.category);
        kind_ok && category_ok
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn result(kind: ResultKind, category: &str) -> SearchResult {
        SearchResult {
            id: "x".to_owned(),
            title: "Title".to_owned(),
            body: "Body".to_owned(),
            url: "/x".to_owned(),
            kind,
            category: category.to_owned(),
            updated_at: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            relevance: 0.5,
        }
    }

    #[test]
    fn test_toggle_is_membership_flip() {
        let mut filters = SearchFilters::default();
        filters.toggle_kind(ResultKind::Api);
        assert!(filters.kinds.contains(&ResultKind::Api));
        filters.toggle_kind(ResultKind::Api);
        assert!(filters.kinds.is_empty());

        filters.toggle_category("Deployment");
        filters.toggle_category("Deployment");
        filters.toggle_category("Authentication");
        assert_eq!(filters.categories.len(), 1);
        assert!(filters.categories.contains("Authentication"));
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut filters = SearchFilters::default();
        filters.toggle_kind(ResultKind::Guide);
        filters.toggle_category("Deployment");
        filters.date_range = DateRange::PastMonth;

        filters.clear();

        assert!(filters.kinds.is_empty());
        assert!(filters.categories.is_empty());
        assert_eq!(filters.date_range, DateRange::All);
    }

    #[test]
    fn test_active_count() {
        let mut filters = SearchFilters::default();
        assert_eq!(filters.active_count(), 0);
        filters.toggle_kind(ResultKind::Guide);
        filters.toggle_kind(ResultKind::Tutorial);
        filters.toggle_category("Deployment");
        assert_eq!(filters.active_count(), 3);
        filters.date_range = DateRange::PastWeek;
        assert_eq!(filters.active_count(), 4);
    }

    #[test]
    fn test_matches_empty_filters_accept_all() {
        let filters = SearchFilters::default();
        assert!(filters.matches(&result(ResultKind::Reference, "Anything")));
    }

    #[test]
    fn test_matches_requires_both_facets() {
        let mut filters = SearchFilters::default();
        filters.toggle_kind(ResultKind::Api);
        filters.toggle_category("API Reference");

        assert!(filters.matches(&result(ResultKind::Api, "API Reference")));
        assert!(!filters.matches(&result(ResultKind::Guide, "API Reference")));
        assert!(!filters.matches(&result(ResultKind::Api, "Deployment")));
    }
}
