//! Search overlay state machine.

use tracing::debug;

use crate::filter::{DateRange, SearchFilters};
use crate::keys::{Key, KeyEvent};
use crate::provider::SearchProvider;
use crate::types::{ResultKind, SearchResult};

/// Shortest query (in characters) that triggers a search.
pub const MIN_QUERY_LEN: usize = 3;

/// Maximum number of remembered queries.
pub const MAX_RECENT_SEARCHES: usize = 5;

const SEEDED_RECENT_SEARCHES: [&str; 3] = ["authentication", "deployment", "api endpoints"];

/// Request to navigate to a result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Navigation {
    /// Target URL path.
    pub url: String,
}

/// Effect of a key press on the overlay.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The overlay opened and the input should take focus.
    Opened,
    /// The overlay closed.
    Closed,
    /// The key was not for the overlay.
    Ignored,
}

/// What the overlay list shows.
#[derive(Debug, PartialEq)]
pub enum OverlayView<'a> {
    /// Empty query: recent searches.
    Recent(&'a [String]),
    /// Non-empty query without matches.
    NoResults {
        /// `No results found for "<query>"`.
        message: String,
    },
    /// Ranked matches.
    Results {
        /// Group heading, e.g. `2 results`.
        heading: String,
        /// Matching entries, best first.
        results: &'a [SearchResult],
    },
}

/// Search overlay state.
///
/// Holds the query, the facet filters, the recency list and the current
/// result list. Every change to the query or the filters recomputes the
/// results through the injected [`SearchProvider`].
pub struct SearchOverlay {
    provider: Box<dyn SearchProvider>,
    open: bool,
    focus_requested: bool,
    query: String,
    filters: SearchFilters,
    results: Vec<SearchResult>,
    recent: Vec<String>,
}

impl SearchOverlay {
    /// Create a closed overlay backed by `provider`.
    pub fn new(provider: Box<dyn SearchProvider>) -> Self {
        Self {
            provider,
            open: false,
            focus_requested: false,
            query: String::new(),
            filters: SearchFilters::default(),
            results: Vec::new(),
            recent: SEEDED_RECENT_SEARCHES.iter().map(|s| (*s).to_owned()).collect(),
        }
    }

    /// Open the overlay and request input focus.
    pub fn open(&mut self) {
        self.open = true;
        self.focus_requested = true;
    }

    /// Close the overlay.
    pub fn close(&mut self) {
        self.open = false;
        self.focus_requested = false;
    }

    /// Whether the overlay is shown.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Consume a pending focus request for the query input.
    pub fn take_focus_request(&mut self) -> bool {
        std::mem::take(&mut self.focus_requested)
    }

    /// Current query text.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Replace the query and recompute.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.recompute();
    }

    /// Active filters.
    pub fn filters(&self) -> &SearchFilters {
        &self.filters
    }

    /// Flip a kind filter and recompute.
    pub fn toggle_kind(&mut self, kind: ResultKind) {
        self.filters.toggle_kind(kind);
        self.recompute();
    }

    /// Flip a category filter and recompute.
    pub fn toggle_category(&mut self, category: &str) {
        self.filters.toggle_category(category);
        self.recompute();
    }

    /// Select a date range and recompute.
    pub fn set_date_range(&mut self, range: DateRange) {
        self.filters.date_range = range;
        self.recompute();
    }

    /// Reset all filters and recompute.
    pub fn clear_filters(&mut self) {
        self.filters.clear();
        self.recompute();
    }

    /// Current results, best first.
    pub fn results(&self) -> &[SearchResult] {
        &self.results
    }

    /// Remembered queries, most recent first.
    pub fn recent_searches(&self) -> &[String] {
        &self.recent
    }

    /// Run a remembered query.
    pub fn select_recent(&mut self, query: &str) {
        self.set_query(query);
        self.remember(query);
    }

    /// Select a result by id.
    ///
    /// Records the current query, closes the overlay and returns where to go.
    /// Returns `None` if `id` is not in the current result list.
    pub fn select_result(&mut self, id: &str) -> Option<Navigation> {
        let url = self.results.iter().find(|r| r.id == id)?.url.clone();
        let query = self.query.clone();
        self.remember(&query);
        self.close();
        Some(Navigation { url })
    }

    /// Apply the overlay keyboard contract.
    ///
    /// Ctrl/Cmd+K opens from anywhere; Escape closes while open.
    pub fn handle_key(&mut self, event: &KeyEvent) -> KeyOutcome {
        if event.is_search_shortcut() {
            self.open();
            return KeyOutcome::Opened;
        }
        if event.key == Key::Escape && self.open {
            self.close();
            return KeyOutcome::Closed;
        }
        KeyOutcome::Ignored
    }

    /// The list the overlay currently shows.
    pub fn view(&self) -> OverlayView<'_> {
        if self.query.is_empty() {
            OverlayView::Recent(&self.recent)
        } else if self.results.is_empty() {
            OverlayView::NoResults {
                message: format!("No results found for \"{}\"", self.query),
            }
        } else {
            OverlayView::Results {
                heading: format!("{} results", self.results.len()),
                results: &self.results,
            }
        }
    }

    fn remember(&mut self, query: &str) {
        if query.is_empty() || self.recent.iter().any(|q| q == query) {
            return;
        }
        self.recent.insert(0, query.to_owned());
        self.recent.truncate(MAX_RECENT_SEARCHES);
    }

    fn recompute(&mut self) {
        if self.query.chars().count() < MIN_QUERY_LEN {
            self.results.clear();
            return;
        }
        self.results = self.provider.search(&self.query, &self.filters);
        debug!(query = %self.query, matches = self.results.len(), "Search recomputed");
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::provider::{StaticProvider, matches_query};

    fn overlay() -> SearchOverlay {
        SearchOverlay::new(Box::new(StaticProvider::fixture()))
    }

    #[test]
    fn test_auth_example() {
        let mut overlay = overlay();
        overlay.set_query("auth");
        let first = &overlay.results()[0];
        assert_eq!(first.title, "Getting Started with Authentication");
        assert!((first.relevance - 0.95).abs() < f64::EPSILON);
    }

    #[test]
    fn test_short_queries_yield_nothing() {
        let mut overlay = overlay();
        for query in ["", "a", "au", "éé"] {
            overlay.set_query(query);
            assert!(overlay.results().is_empty(), "query {query:?}");
        }
        overlay.toggle_kind(ResultKind::Guide);
        assert!(overlay.results().is_empty());
    }

    #[test]
    fn test_results_satisfy_predicates_and_are_sorted() {
        let mut overlay = overlay();
        overlay.toggle_category("Deployment");
        overlay.toggle_category("API Reference");
        overlay.set_query("your");
        overlay.set_query("use");

        let results = overlay.results();
        assert!(!results.is_empty());
        for result in results {
            assert!(matches_query(result, "use"));
            assert!(overlay.filters().matches(result));
        }
        assert!(results.windows(2).all(|w| w[0].relevance >= w[1].relevance));
    }

    #[test]
    fn test_filter_change_recomputes() {
        let mut overlay = overlay();
        overlay.set_query("api");
        assert_eq!(overlay.results().len(), 1);
        overlay.toggle_kind(ResultKind::Tutorial);
        assert!(overlay.results().is_empty());
        overlay.clear_filters();
        assert_eq!(overlay.results().len(), 1);
        assert_eq!(overlay.filters(), &SearchFilters::default());
    }

    #[test]
    fn test_date_range_counts_as_filter() {
        let mut overlay = overlay();
        overlay.set_date_range(DateRange::PastYear);
        assert_eq!(overlay.filters().active_count(), 1);
        overlay.clear_filters();
        assert_eq!(overlay.filters().active_count(), 0);
    }

    #[test]
    fn test_select_result_records_query_and_closes() {
        let mut overlay = overlay();
        overlay.open();
        overlay.set_query("docker");

        let nav = overlay.select_result("3");

        assert_eq!(
            nav,
            Some(Navigation {
                url: "/deployment/docker".to_owned()
            })
        );
        assert!(!overlay.is_open());
        assert_eq!(overlay.recent_searches()[0], "docker");
        assert_eq!(overlay.recent_searches().len(), 4);
    }

    #[test]
    fn test_select_unknown_result() {
        let mut overlay = overlay();
        overlay.open();
        overlay.set_query("docker");
        assert_eq!(overlay.select_result("1"), None);
        assert!(overlay.is_open());
    }

    #[test]
    fn test_recent_searches_are_not_duplicated_and_bounded() {
        let mut overlay = overlay();
        for query in ["jwt", "docker", "jwt", "users", "containers", "update"] {
            overlay.set_query(query);
            if let Some(id) = overlay.results().first().map(|r| r.id.clone()) {
                overlay.select_result(&id);
            }
        }
        let recent = overlay.recent_searches();
        assert_eq!(recent.len(), MAX_RECENT_SEARCHES);
        assert_eq!(recent[0], "update");
        assert_eq!(recent.iter().filter(|q| *q == "jwt").count(), 1);
    }

    #[test]
    fn test_select_recent_replaces_query() {
        let mut overlay = overlay();
        overlay.select_recent("deployment");
        assert_eq!(overlay.query(), "deployment");
        assert_eq!(overlay.results()[0].id, "3");
        assert_eq!(
            overlay.recent_searches(),
            &["authentication", "deployment", "api endpoints"]
        );
    }

    #[test]
    fn test_keyboard_contract() {
        let mut overlay = overlay();
        assert_eq!(
            overlay.handle_key(&KeyEvent::plain(Key::Escape)),
            KeyOutcome::Ignored
        );
        assert_eq!(
            overlay.handle_key(&KeyEvent::meta(Key::Char('k'))),
            KeyOutcome::Opened
        );
        assert!(overlay.is_open());
        assert!(overlay.take_focus_request());
        assert!(!overlay.take_focus_request());

        assert_eq!(
            overlay.handle_key(&KeyEvent::ctrl(Key::Char('K'))),
            KeyOutcome::Opened
        );
        assert_eq!(
            overlay.handle_key(&KeyEvent::plain(Key::Char('k'))),
            KeyOutcome::Ignored
        );
        assert_eq!(
            overlay.handle_key(&KeyEvent::plain(Key::Escape)),
            KeyOutcome::Closed
        );
        assert!(!overlay.is_open());
    }

    #[test]
    fn test_view_states() {
        let mut overlay = overlay();
        assert!(matches!(overlay.view(), OverlayView::Recent(recent) if recent.len() == 3));

        overlay.set_query("au");
        assert_eq!(
            overlay.view(),
            OverlayView::NoResults {
                message: "No results found for \"au\"".to_owned()
            }
        );

        overlay.set_query("endpoints");
        match overlay.view() {
            OverlayView::Results { heading, results } => {
                assert_eq!(heading, "1 results");
                assert_eq!(results[0].id, "2");
            }
            other => panic!("unexpected view: {other:?}"),
        }
    }
}
