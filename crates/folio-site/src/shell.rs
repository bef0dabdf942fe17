//! Application shell.
//!
//! [`AppShell`] owns the state that lives around page content: the key
//! dispatcher, search overlay, version selector, sidebar, breadcrumbs, outline
//! and scroll progress. Navigation and content changes recompute the derived
//! pieces from scratch.

use std::cell::RefCell;
use std::rc::Rc;

use folio_config::Config;
use folio_nav::{BreadcrumbItem, HeadingRect, TableOfContents, breadcrumbs};
use folio_render::{MarkdownRenderer, RenderResult};
use folio_search::{KeyEvent, SearchOverlay, SearchProvider, StaticProvider};

use crate::input::{KeyDispatcher, Subscription};
use crate::nav::Sidebar;
use crate::seo::SeoHead;
use crate::template::{PageData, render_page};
use crate::version::VersionSelector;

/// Percentage of the document scrolled past.
///
/// Zero when the document fits in the viewport.
#[must_use]
pub fn scroll_progress(scroll_top: f64, document_height: f64, viewport_height: f64) -> f64 {
    let scrollable = document_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_top / scrollable * 100.0).clamp(0.0, 100.0)
}

/// Interactive state of a documentation page.
pub struct AppShell {
    config: Config,
    // Declared before the dispatcher so the handler is removed first.
    _search_subscription: Subscription,
    dispatcher: KeyDispatcher,
    search: Rc<RefCell<SearchOverlay>>,
    versions: VersionSelector,
    sidebar: Sidebar,
    path: String,
    breadcrumbs: Option<Vec<BreadcrumbItem>>,
    toc: TableOfContents,
    content: Option<RenderResult>,
    progress: f64,
}

impl AppShell {
    /// Shell backed by the bundled search dataset.
    pub fn new(config: Config) -> Self {
        Self::with_provider(config, Box::new(StaticProvider::fixture()))
    }

    /// Shell with an explicit search backend.
    pub fn with_provider(config: Config, provider: Box<dyn SearchProvider>) -> Self {
        let dispatcher = KeyDispatcher::new();
        let search = Rc::new(RefCell::new(SearchOverlay::new(provider)));
        let _search_subscription = dispatcher.subscribe(Rc::clone(&search));
        let versions = VersionSelector::new(config.versions.current.clone());

        Self {
            config,
            _search_subscription,
            dispatcher,
            search,
            versions,
            sidebar: Sidebar::default(),
            path: "/".to_owned(),
            breadcrumbs: None,
            toc: TableOfContents::new(),
            content: None,
            progress: 0.0,
        }
    }

    /// Move to `path`.
    ///
    /// Recomputes breadcrumbs, closes the mobile sidebar and resets scroll
    /// progress. Content must be supplied separately with
    /// [`load_content`](Self::load_content).
    pub fn navigate(&mut self, path: &str) {
        path.clone_into(&mut self.path);
        self.breadcrumbs = breadcrumbs(path);
        self.sidebar.close();
        self.progress = 0.0;
    }

    /// Render `markdown` as the current content and rebuild the outline.
    pub fn load_content(&mut self, markdown: &str) -> &RenderResult {
        let result = MarkdownRenderer::new()
            .with_title_extraction()
            .render_markdown(markdown);
        self.toc.rescan(&result.headings);
        self.content.insert(result)
    }

    /// Deliver a key press to every subscribed handler.
    pub fn handle_key(&mut self, event: &KeyEvent) -> bool {
        self.dispatcher.dispatch(event)
    }

    /// Pick a search result and navigate to it.
    ///
    /// Returns the destination path, or `None` for unknown ids.
    pub fn open_search_result(&mut self, id: &str) -> Option<String> {
        let navigation = self.search.borrow_mut().select_result(id)?;
        self.navigate(&navigation.url);
        Some(navigation.url)
    }

    /// Update scroll progress and active section after a scroll.
    pub fn on_scroll(
        &mut self,
        scroll_top: f64,
        document_height: f64,
        viewport_height: f64,
        headings: &[HeadingRect],
    ) {
        self.progress = scroll_progress(scroll_top, document_height, viewport_height);
        self.toc.tracker_mut().on_scroll(viewport_height, headings);
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn dispatcher(&self) -> &KeyDispatcher {
        &self.dispatcher
    }

    pub fn search(&self) -> &Rc<RefCell<SearchOverlay>> {
        &self.search
    }

    pub fn versions(&self) -> &VersionSelector {
        &self.versions
    }

    pub fn versions_mut(&mut self) -> &mut VersionSelector {
        &mut self.versions
    }

    pub fn sidebar(&self) -> &Sidebar {
        &self.sidebar
    }

    pub fn sidebar_mut(&mut self) -> &mut Sidebar {
        &mut self.sidebar
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Breadcrumb trail, `None` at the root.
    pub fn breadcrumbs(&self) -> Option<&[BreadcrumbItem]> {
        self.breadcrumbs.as_deref()
    }

    pub fn toc(&self) -> &TableOfContents {
        &self.toc
    }

    pub fn toc_mut(&mut self) -> &mut TableOfContents {
        &mut self.toc
    }

    pub fn content(&self) -> Option<&RenderResult> {
        self.content.as_ref()
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Head metadata for the current page.
    pub fn seo_head(&self) -> SeoHead {
        let site = &self.config.site;
        let title = self
            .content
            .as_ref()
            .and_then(|c| c.title.clone())
            .unwrap_or_else(|| site.title.clone());
        SeoHead::for_page(site, title)
            .with_canonical(site, &self.path)
            .with_structured_data(serde_json::json!({
                "@context": "https://schema.org",
                "@type": "TechArticle",
                "publisher": { "@type": "Organization", "name": site.author },
            }))
    }

    /// Render the current page to a full HTML document.
    pub fn render_html(&self, year: i32) -> String {
        let head = self.seo_head();
        let content_html = self.content.as_ref().map_or("", |c| c.html.as_str());
        render_page(&PageData {
            site: &self.config.site,
            head: &head,
            path: &self.path,
            content_html,
            breadcrumbs: self.breadcrumbs(),
            toc: &self.toc,
            versions: &self.versions,
            sidebar_open: self.sidebar.is_open(),
            progress: self.progress,
            year,
        })
    }
}

#[cfg(test)]
mod tests {
    use folio_search::Key;
    use pretty_assertions::assert_eq;

    use super::*;

    const GUIDE: &str = "# Guide\n\n## Install\n\n### Linux\n\n## Usage\n";

    fn rect(id: &str, top: f64) -> HeadingRect {
        HeadingRect {
            id: id.to_owned(),
            top,
            bottom: top + 30.0,
        }
    }

    #[test]
    fn test_scroll_progress() {
        assert_eq!(scroll_progress(0.0, 2000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(500.0, 2000.0, 1000.0), 50.0);
        assert_eq!(scroll_progress(1500.0, 2000.0, 1000.0), 100.0);
        assert_eq!(scroll_progress(100.0, 800.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(100.0, 1000.0, 1000.0), 0.0);
    }

    #[test]
    fn test_navigate_recomputes_breadcrumbs() {
        let mut shell = AppShell::new(Config::default());
        assert_eq!(shell.breadcrumbs(), None);

        shell.sidebar_mut().open();
        shell.navigate("/api-docs/users");

        let labels: Vec<&str> = shell
            .breadcrumbs()
            .unwrap()
            .iter()
            .map(|b| b.label.as_str())
            .collect();
        assert_eq!(labels, vec!["Home", "Api Docs", "Users"]);
        assert!(!shell.sidebar().is_open());

        shell.navigate("/");
        assert_eq!(shell.breadcrumbs(), None);
    }

    #[test]
    fn test_load_content_rescans_outline() {
        let mut shell = AppShell::new(Config::default());
        shell.load_content(GUIDE);

        let forest = shell.toc().forest();
        assert_eq!(forest.len(), 1);
        assert_eq!(forest[0].id, "guide");
        assert_eq!(forest[0].children[0].id, "install");
        assert_eq!(forest[0].children[0].children[0].id, "linux");
        assert!(shell.toc().is_expanded("install"));

        shell.load_content("# Other\n\n## Only\n");
        assert_eq!(shell.toc().forest()[0].id, "other");
        assert_eq!(shell.content().and_then(|c| c.title.as_deref()), Some("Other"));
    }

    #[test]
    fn test_page_heading_is_part_of_outline() {
        let mut shell = AppShell::new(Config::default());
        shell.load_content("# Intro\n\n## Setup\n\n## Install\n\n# Usage\n");

        let rows: Vec<(String, usize)> = shell
            .toc()
            .forest()
            .iter()
            .map(|node| (node.id.clone(), node.children.len()))
            .collect();
        assert_eq!(
            rows,
            vec![("intro".to_owned(), 2), ("usage".to_owned(), 0)]
        );
        assert_eq!(
            shell.toc().tracker().observed(),
            ["intro", "setup", "install", "usage"]
        );
    }

    #[test]
    fn test_scroll_updates_active_section() {
        let mut shell = AppShell::new(Config::default());
        shell.load_content(GUIDE);

        shell.on_scroll(
            500.0,
            3000.0,
            1000.0,
            &[rect("install", 50.0), rect("linux", 300.0), rect("usage", 900.0)],
        );

        assert_eq!(shell.toc().active_id(), Some("linux"));
        assert_eq!(shell.progress(), 25.0);
    }

    #[test]
    fn test_keyboard_opens_search() {
        let mut shell = AppShell::new(Config::default());
        assert!(shell.handle_key(&KeyEvent::meta(Key::Char('K'))));
        assert!(shell.search().borrow().is_open());
        assert!(shell.handle_key(&KeyEvent::plain(Key::Escape)));
        assert!(!shell.search().borrow().is_open());
    }

    #[test]
    fn test_open_search_result_navigates() {
        let mut shell = AppShell::new(Config::default());
        shell.search().borrow_mut().open();
        shell.search().borrow_mut().set_query("docker");

        let url = shell.open_search_result("3").unwrap();

        assert_eq!(shell.path(), url);
        assert!(shell.breadcrumbs().is_some());
        assert!(!shell.search().borrow().is_open());
        assert_eq!(shell.search().borrow().recent_searches()[0], "docker");
        assert_eq!(shell.open_search_result("missing"), None);
    }

    #[test]
    fn test_render_uses_page_title() {
        let mut shell = AppShell::new(Config::default());
        shell.navigate("/guide");
        shell.load_content(GUIDE);

        let html = shell.render_html(2024);

        assert!(html.contains("<title>Guide | Einstein Labs Documentation</title>"));
        assert!(html.contains("<h2 id=\"install\">Install</h2>"));
        assert!(html.contains("On this page"));
    }
}
