//! HTML page template.
//!
//! Produces the full documentation layout around rendered page content:
//! scroll progress bar, sidebar, breadcrumbs, content, outline and footer.

use std::fmt::Write;

use folio_config::SiteConfig;
use folio_nav::{BreadcrumbItem, TableOfContents, TocNode};
use folio_render::escape_html as escape;

use crate::nav::NAV_LINKS;
use crate::seo::SeoHead;
use crate::version::VersionSelector;

/// Everything needed to render one page.
pub struct PageData<'a> {
    pub site: &'a SiteConfig,
    pub head: &'a SeoHead,
    pub path: &'a str,
    pub content_html: &'a str,
    /// `None` hides the breadcrumb bar.
    pub breadcrumbs: Option<&'a [BreadcrumbItem]>,
    pub toc: &'a TableOfContents,
    pub versions: &'a VersionSelector,
    pub sidebar_open: bool,
    /// Scroll progress in percent.
    pub progress: f64,
    /// Copyright year shown in the footer.
    pub year: i32,
}

/// Render a complete HTML page.
pub fn render_page(page: &PageData<'_>) -> String {
    let mut html = String::with_capacity(16384);

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str(&page.head.render_html(page.site));
    html.push_str("</head>\n<body>\n");

    let _ = writeln!(
        html,
        "<div class=\"scroll-progress\" role=\"progressbar\" aria-valuemin=\"0\" aria-valuemax=\"100\" aria-valuenow=\"{progress:.0}\" style=\"width: {progress:.2}%\"></div>",
        progress = page.progress
    );

    html.push_str("<div class=\"layout\">\n");
    render_sidebar(&mut html, page);

    html.push_str("<div class=\"main\">\n");
    if let Some(trail) = page.breadcrumbs {
        render_breadcrumbs(&mut html, trail);
    }

    html.push_str("<div class=\"content-row\">\n");
    html.push_str("<main class=\"content\">\n<article class=\"prose\">\n");
    html.push_str(page.content_html);
    html.push_str("\n</article>\n</main>\n");
    render_toc(&mut html, page.toc);
    html.push_str("</div>\n");

    render_footer(&mut html, page.site, page.year);
    html.push_str("</div>\n</div>\n</body>\n</html>\n");
    html
}

fn render_sidebar(html: &mut String, page: &PageData<'_>) {
    let class = if page.sidebar_open {
        "sidebar open"
    } else {
        "sidebar"
    };
    let _ = writeln!(html, "<aside class=\"{class}\">");

    let _ = writeln!(
        html,
        "<a href=\"/\" class=\"brand\"><span class=\"brand-name\">{}</span><span class=\"brand-tagline\">Documentation</span></a>",
        escape(&page.site.name)
    );

    html.push_str(
        "<button type=\"button\" class=\"search-trigger\" data-shortcut=\"mod+k\">\
         <span>Search documentation...</span><kbd>⌘K</kbd></button>\n",
    );

    html.push_str(&page.versions.render_html());

    html.push_str("<nav class=\"site-nav\">\n<ul>\n");
    for link in &NAV_LINKS {
        let active = if link.is_active(page.path) {
            " class=\"active\" aria-current=\"page\""
        } else {
            ""
        };
        let _ = writeln!(
            html,
            "<li><a href=\"{}\"{active}><span class=\"nav-title\">{}</span><span class=\"nav-description\">{}</span></a></li>",
            link.href, link.title, link.description
        );
    }
    html.push_str("</ul>\n</nav>\n");
    html.push_str("</aside>\n");
}

fn render_breadcrumbs(html: &mut String, trail: &[BreadcrumbItem]) {
    html.push_str("<nav class=\"breadcrumbs\" aria-label=\"Breadcrumb\">\n<ol>\n");
    for item in trail {
        if item.is_current {
            let _ = writeln!(
                html,
                "<li class=\"breadcrumb-item\"><span aria-current=\"page\">{}</span></li>",
                escape(&item.label)
            );
        } else {
            let _ = writeln!(
                html,
                "<li class=\"breadcrumb-item\"><a href=\"{}\">{}</a></li>",
                escape(&item.path),
                escape(&item.label)
            );
        }
    }
    html.push_str("</ol>\n</nav>\n");
}

fn render_toc(html: &mut String, toc: &TableOfContents) {
    if toc.is_empty() {
        return;
    }
    html.push_str("<aside class=\"toc\">\n<h3>On this page</h3>\n<nav>\n");
    render_toc_nodes(html, toc, toc.forest());
    html.push_str("</nav>\n</aside>\n");
}

fn render_toc_nodes(html: &mut String, toc: &TableOfContents, nodes: &[TocNode]) {
    html.push_str("<ul>\n");
    for node in nodes {
        let active = toc.active_id() == Some(node.id.as_str());
        let expanded = toc.is_expanded(&node.id);
        let _ = write!(html, "<li class=\"toc-level-{}\">", node.level);
        if node.has_children() {
            let _ = write!(
                html,
                "<button type=\"button\" class=\"toc-toggle\" aria-expanded=\"{expanded}\" aria-controls=\"toc-{}\"></button>",
                escape(&node.id)
            );
        }
        let _ = write!(
            html,
            "<a href=\"#{}\"{}>{}</a>",
            escape(&node.id),
            if active { " class=\"active\"" } else { "" },
            escape(&node.title)
        );
        if node.has_children() {
            let _ = write!(html, "\n<div id=\"toc-{}\"", escape(&node.id));
            if !expanded {
                html.push_str(" hidden");
            }
            html.push_str(">\n");
            render_toc_nodes(html, toc, &node.children);
            html.push_str("</div>");
        }
        html.push_str("</li>\n");
    }
    html.push_str("</ul>\n");
}

fn render_footer(html: &mut String, site: &SiteConfig, year: i32) {
    html.push_str("<footer class=\"site-footer\">\n");
    let _ = writeln!(
        html,
        "<p>&copy; {year} {}. All rights reserved.</p>",
        escape(&site.name)
    );
    html.push_str(
        "<ul class=\"footer-links\">\
         <li><a href=\"/privacy\">Privacy</a></li>\
         <li><a href=\"/terms\">Terms</a></li>\
         <li><a href=\"/contact\">Contact</a></li></ul>\n",
    );
    html.push_str("</footer>\n");
}
