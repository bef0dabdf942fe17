//! Documentation search for folio.
//!
//! The search overlay keeps query text, facet filters and a short list of
//! recent searches, and recomputes a ranked result list whenever the query or
//! the filters change. Results come from a [`SearchProvider`]; the bundled
//! [`StaticProvider`] filters a fixed in-memory dataset, and a real backend can
//! be substituted without touching the overlay.
//!
//! # Example
//!
//! ```
//! use folio_search::{SearchOverlay, StaticProvider};
//!
//! let mut overlay = SearchOverlay::new(Box::new(StaticProvider::fixture()));
//! overlay.set_query("auth");
//!
//! assert_eq!(overlay.results()[0].title, "Getting Started with Authentication");
//! ```

mod filter;
mod fixture;
mod keys;
mod overlay;
mod provider;
mod types;

pub use filter::{DateRange, SearchFilters};
pub use fixture::{CATEGORIES, fixture_results};
pub use keys::{Key, KeyEvent, Modifiers};
pub use overlay::{
    KeyOutcome, MIN_QUERY_LEN, MAX_RECENT_SEARCHES, Navigation, OverlayView, SearchOverlay,
};
pub use provider::{SearchProvider, StaticProvider, matches_query};
pub use types::{ParseKindError, ResultKind, SearchResult};
