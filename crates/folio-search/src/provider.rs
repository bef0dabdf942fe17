//! Search result providers.

use crate::filter::SearchFilters;
use crate::fixture::fixture_results;
use crate::types::SearchResult;

/// Source of ranked search results.
///
/// This is the seam a real search backend implements: given the query text
/// and the active filters, return matching results ordered by descending
/// relevance.
pub trait SearchProvider {
    /// Run a search.
    fn search(&self, query: &str, filters: &SearchFilters) -> Vec<SearchResult>;
}

/// Case-insensitive substring match against title or body.
pub fn matches_query(result: &SearchResult, query: &str) -> bool {
    let needle = query.to_lowercase();
    result.title.to_lowercase().contains(&needle) || result.body.to_lowercase().contains(&needle)
}

/// Provider over a fixed, in-memory result list.
#[derive(Clone, Debug, Default)]
pub struct StaticProvider {
    results: Vec<SearchResult>,
}

impl StaticProvider {
    /// Create a provider over the given results.
    pub fn new(results: Vec<SearchResult>) -> Self {
        Self { results }
    }

    /// Create a provider over the built-in dataset.
    pub fn fixture() -> Self {
        Self::new(fixture_results())
    }

    /// All results, in source order.
    pub fn results(&self) -> &[SearchResult] {
        &self.results
    }
}

impl SearchProvider for StaticProvider {
    fn search(&self, query: &str, filters: &SearchFilters) -> Vec<SearchResult> {
        let mut matches: Vec<SearchResult> = self
            .results
            .iter()
            .filter(|result| matches_query(result, query) && filters.matches(result))
            .cloned()
            .collect();
        // Stable: equal relevance keeps source order.
        matches.sort_by(|a, b| b.relevance.total_cmp(&a.relevance));
        matches
    }
}
