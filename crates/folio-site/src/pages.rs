//! Page discovery.
//!
//! A site is made of the built-in pages embedded in the binary plus any
//! markdown files found under the configured source directory.

use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};

const HOME_MD: &str = include_str!("../content/home.md");
const GETTING_STARTED_MD: &str = include_str!("../content/getting-started.md");

/// Where a page's markdown comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageSource {
    /// Markdown compiled into the binary.
    Builtin(&'static str),
    /// Markdown file on disk.
    File(PathBuf),
}

/// A page addressable by URL path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// URL path with a leading slash (`/`, `/guides/setup`).
    pub path: String,
    pub source: PageSource,
}

impl Page {
    /// Read the page markdown.
    ///
    /// # Errors
    ///
    /// Returns the I/O error if a file-backed page cannot be read.
    pub fn markdown(&self) -> std::io::Result<Cow<'static, str>> {
        match &self.source {
            PageSource::Builtin(text) => Ok(Cow::Borrowed(*text)),
            PageSource::File(path) => fs::read_to_string(path).map(Cow::Owned),
        }
    }
}

/// The pages shipped with every site.
#[must_use]
pub fn builtin_pages() -> Vec<Page> {
    vec![
        Page {
            path: "/".to_owned(),
            source: PageSource::Builtin(HOME_MD),
        },
        Page {
            path: "/getting-started".to_owned(),
            source: PageSource::Builtin(GETTING_STARTED_MD),
        },
    ]
}

/// Find markdown pages under `source_dir`.
///
/// `a/b.md` maps to `/a/b` and `a/index.md` to `/a`. Hidden entries are
/// skipped. Returns an empty list if the directory does not exist.
#[must_use]
pub fn scan_pages(source_dir: &Path) -> Vec<Page> {
    let mut pages = Vec::new();
    if source_dir.is_dir() {
        scan_directory(source_dir, "", &mut pages);
    }
    pages.sort_by(|a, b| a.path.cmp(&b.path));
    pages
}

fn scan_directory(dir: &Path, url_prefix: &str, pages: &mut Vec<Page>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };

    for entry in entries.filter_map(Result::ok) {
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with('.') {
            continue;
        }

        let path = entry.path();
        if entry.file_type().is_ok_and(|t| t.is_dir()) {
            scan_directory(&path, &format!("{url_prefix}/{name}"), pages);
        } else if path.extension().is_some_and(|e| e == "md") {
            let url_path = file_url(&path, url_prefix);
            pages.push(Page {
                path: url_path,
                source: PageSource::File(path),
            });
        }
    }
}

fn file_url(file: &Path, url_prefix: &str) -> String {
    let stem = file
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    if stem.eq_ignore_ascii_case("index") {
        if url_prefix.is_empty() {
            "/".to_owned()
        } else {
            url_prefix.to_owned()
        }
    } else {
        format!("{url_prefix}/{stem}")
    }
}

/// Built-in pages merged with pages from `source_dir`.
///
/// A scanned page replaces the built-in page at the same path.
#[must_use]
pub fn collect_pages(source_dir: &Path) -> Vec<Page> {
    let scanned = scan_pages(source_dir);
    let mut pages: Vec<Page> = builtin_pages()
        .into_iter()
        .filter(|builtin| !scanned.iter().any(|page| page.path == builtin.path))
        .collect();
    pages.extend(scanned);
    pages.sort_by(|a, b| a.path.cmp(&b.path));
    pages
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;

    fn paths(pages: &[Page]) -> Vec<&str> {
        pages.iter().map(|p| p.path.as_str()).collect()
    }

    #[test]
    fn test_builtin_pages() {
        let pages = builtin_pages();
        assert_eq!(paths(&pages), vec!["/", "/getting-started"]);
        assert!(pages[1].markdown().unwrap().starts_with("# Getting Started"));
    }

    #[test]
    fn test_scan_missing_dir() {
        assert!(scan_pages(Path::new("/nonexistent/folio/docs")).is_empty());
    }

    #[test]
    fn test_scan_maps_paths() {
        let temp = TempDir::new().unwrap();
        let docs = temp.path();
        fs::create_dir_all(docs.join("guides/advanced")).unwrap();
        fs::create_dir_all(docs.join(".hidden")).unwrap();
        fs::write(docs.join("deployment.md"), "# Deployment").unwrap();
        fs::write(docs.join("guides/index.md"), "# Guides").unwrap();
        fs::write(docs.join("guides/setup.md"), "# Setup").unwrap();
        fs::write(docs.join("guides/advanced/tuning.md"), "# Tuning").unwrap();
        fs::write(docs.join(".hidden/secret.md"), "# Secret").unwrap();
        fs::write(docs.join("notes.txt"), "ignored").unwrap();

        let pages = scan_pages(docs);

        assert_eq!(
            paths(&pages),
            vec!["/deployment", "/guides", "/guides/advanced/tuning", "/guides/setup"]
        );
        assert_eq!(pages[1].markdown().unwrap(), "# Guides");
    }

    #[test]
    fn test_collect_overrides_builtin() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("index.md"), "# Custom Home").unwrap();
        fs::write(temp.path().join("faq.md"), "# FAQ").unwrap();

        let pages = collect_pages(temp.path());

        assert_eq!(paths(&pages), vec!["/", "/faq", "/getting-started"]);
        assert_eq!(pages[0].markdown().unwrap(), "# Custom Home");
    }
}
