//! Static site builder.
//!
//! Renders every page through the application shell and writes the result as
//! a directory of `index.html` files plus a JSON search index.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Datelike;
use folio_config::Config;
use folio_search::fixture_results;
use tracing::{debug, info};

use crate::pages::{Page, PageSource, collect_pages};
use crate::shell::AppShell;

/// File name of the search index in the output directory.
pub const SEARCH_INDEX_FILE: &str = "search-index.json";

/// Error returned by the static site builder.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to serialize search index: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("No page at {0}")]
    PageNotFound(String),
}

impl BuildError {
    fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Summary of a finished build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    /// Files written, in write order.
    pub written: Vec<PathBuf>,
    /// Number of HTML pages among them.
    pub pages: usize,
}

/// Builds a static documentation site.
pub struct SiteBuilder {
    config: Config,
    pages: Vec<Page>,
    year: i32,
}

impl SiteBuilder {
    /// Builder for the built-in pages plus those under the configured
    /// source directory.
    pub fn new(config: Config) -> Self {
        let pages = collect_pages(&config.docs_resolved.source_dir);
        debug!(
            source_dir = %config.docs_resolved.source_dir.display(),
            pages = pages.len(),
            "Collected pages"
        );
        Self {
            config,
            pages,
            year: chrono::Local::now().year(),
        }
    }

    /// Override the copyright year shown in page footers.
    #[must_use]
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Render the page at `path` to a full HTML document.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::PageNotFound`] for unknown paths and
    /// [`BuildError::Io`] if the page source cannot be read.
    pub fn render(&self, path: &str) -> Result<String, BuildError> {
        let page = self
            .pages
            .iter()
            .find(|p| p.path == path)
            .ok_or_else(|| BuildError::PageNotFound(path.to_owned()))?;
        self.render_page(page)
    }

    fn render_page(&self, page: &Page) -> Result<String, BuildError> {
        let markdown = page.markdown().map_err(|e| {
            let source_path = match &page.source {
                PageSource::File(file) => file.clone(),
                PageSource::Builtin(_) => PathBuf::from(&page.path),
            };
            BuildError::io(source_path, e)
        })?;

        let mut shell = AppShell::new(self.config.clone());
        shell.navigate(&page.path);
        shell.load_content(&markdown);
        Ok(shell.render_html(self.year))
    }

    /// Write the whole site into `out_dir`.
    ///
    /// # Errors
    ///
    /// Returns the first I/O or serialization failure, naming the path.
    pub fn build(&self, out_dir: &Path) -> Result<BuildReport, BuildError> {
        let mut written = Vec::with_capacity(self.pages.len() + 1);

        for page in &self.pages {
            let html = self.render_page(page)?;
            let target = page_output_path(out_dir, &page.path);
            write_file(&target, html.as_bytes())?;
            info!(page = %page.path, output = %target.display(), "Wrote page");
            written.push(target);
        }

        let index = serde_json::to_vec_pretty(&fixture_results())?;
        let index_path = out_dir.join(SEARCH_INDEX_FILE);
        write_file(&index_path, &index)?;
        info!(output = %index_path.display(), "Wrote search index");
        written.push(index_path);

        Ok(BuildReport {
            written,
            pages: self.pages.len(),
        })
    }
}

/// Output file for a page path: `/` maps to `index.html`, `/a/b` to
/// `a/b/index.html`.
#[must_use]
pub fn page_output_path(out_dir: &Path, page_path: &str) -> PathBuf {
    let mut target = out_dir.to_path_buf();
    for segment in page_path.split('/').filter(|s| !s.is_empty()) {
        target.push(segment);
    }
    target.push("index.html");
    target
}

fn write_file(path: &Path, contents: &[u8]) -> Result<(), BuildError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| BuildError::io(parent, e))?;
    }
    fs::write(path, contents).map_err(|e| BuildError::io(path, e))
}
