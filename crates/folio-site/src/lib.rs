//! Page shells and static site generation for folio.
//!
//! This crate composes the navigation, search and rendering crates into a
//! documentation site:
//!
//! - [`AppShell`]: per-page interactive state (breadcrumbs, outline, search
//!   overlay, version selector, sidebar, scroll progress)
//! - [`KeyDispatcher`]: shell-owned keyboard dispatch with drop-to-unsubscribe
//!   [`Subscription`] guards
//! - [`VersionSelector`]: single-choice selection over the version catalog
//! - [`SeoHead`]: document head metadata
//! - [`SiteBuilder`]: renders every page to a static output directory
//!
//! # Example
//!
//! ```
//! use folio_config::Config;
//! use folio_site::AppShell;
//!
//! let mut shell = AppShell::new(Config::default());
//! shell.navigate("/guides/setup");
//! shell.load_content("# Setup\n\n## Install\n");
//!
//! assert_eq!(shell.breadcrumbs().map(<[_]>::len), Some(3));
//! assert_eq!(shell.toc().forest()[0].id, "setup");
//! assert_eq!(shell.toc().forest()[0].children[0].id, "install");
//! ```

mod builder;
mod input;
mod nav;
mod pages;
mod seo;
mod shell;
mod template;
mod version;

pub use builder::{BuildError, BuildReport, SEARCH_INDEX_FILE, SiteBuilder, page_output_path};
pub use input::{KeyDispatcher, KeyHandler, Subscription};
pub use nav::{NAV_LINKS, NavLink, Sidebar};
pub use pages::{Page, PageSource, builtin_pages, collect_pages, scan_pages};
pub use seo::SeoHead;
pub use shell::{AppShell, scroll_progress};
pub use template::{PageData, render_page};
pub use version::{Version, VersionChangeCallback, VersionKind, VersionSelector, version_catalog};
