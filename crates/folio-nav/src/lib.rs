//! Page navigation aids for folio.
//!
//! This crate holds the pure, environment-independent parts of page
//! navigation:
//!
//! - [`breadcrumb_trail`]: derives a root-first trail from a URL path
//! - [`build_forest`]: nests an ordered heading sequence into a [`TocNode`] forest
//! - [`TableOfContents`]: one outline instance with expansion state and
//!   active-section tracking
//! - [`SectionTracker`]: viewport-intersection bookkeeping for the active heading
//!
//! Heading extraction from rendered markup lives in `folio-render`; this crate
//! only ever sees an explicit sequence of [`Heading`] values.
//!
//! # Example
//!
//! ```
//! use folio_nav::{Heading, build_forest};
//!
//! let headings = vec![
//!     Heading::new("intro", "Intro", 1),
//!     Heading::new("setup", "Setup", 2),
//!     Heading::new("usage", "Usage", 1),
//! ];
//! let forest = build_forest(&headings);
//!
//! assert_eq!(forest.len(), 2);
//! assert_eq!(forest[0].children[0].title, "Setup");
//! ```

mod breadcrumb;
mod section;
mod toc;

pub use breadcrumb::{BreadcrumbItem, breadcrumb_trail, breadcrumbs, segment_label};
pub use section::{HeadingRect, IntersectionEntry, IntersectionZone, SectionTracker};
pub use toc::{
    Heading, ScrollBehavior, ScrollBlock, ScrollRequest, TableOfContents, TocNode, TocRow,
    build_forest,
};
