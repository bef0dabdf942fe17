//! Document head metadata.

use std::fmt::Write;

use folio_config::SiteConfig;
use folio_render::escape_html;

/// Metadata rendered into a page's `<head>`.
#[derive(Debug, Clone, PartialEq)]
pub struct SeoHead {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub og_image: String,
    pub canonical_url: Option<String>,
    pub structured_data: Option<serde_json::Value>,
}

impl SeoHead {
    /// Head metadata using the site defaults for everything but the title.
    pub fn for_page(site: &SiteConfig, title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: site.description.clone(),
            keywords: site.keywords.clone(),
            og_image: site.og_image.clone(),
            canonical_url: None,
            structured_data: None,
        }
    }

    /// Set the canonical URL from the site base URL and a page path.
    ///
    /// Does nothing when the site has no base URL.
    #[must_use]
    pub fn with_canonical(mut self, site: &SiteConfig, path: &str) -> Self {
        self.canonical_url = site
            .base_url
            .as_deref()
            .map(|base| format!("{}{path}", base.trim_end_matches('/')));
        self
    }

    #[must_use]
    pub fn with_structured_data(mut self, data: serde_json::Value) -> Self {
        self.structured_data = Some(data);
        self
    }

    /// Title shown in the browser tab.
    ///
    /// Titles that already name the brand are left as they are.
    pub fn full_title(&self, site: &SiteConfig) -> String {
        if self.title.contains(&site.name) {
            self.title.clone()
        } else {
            format!("{} | {}", self.title, site.title)
        }
    }

    /// Render the head tags, without the surrounding `<head>` element.
    pub fn render_html(&self, site: &SiteConfig) -> String {
        let title = escape_html(&self.full_title(site));
        let description = escape_html(&self.description);
        let image = escape_html(&self.og_image);
        let mut html = String::with_capacity(2048);

        html.push_str("<meta charset=\"utf-8\">\n");
        let _ = writeln!(html, "<title>{title}</title>");
        let _ = writeln!(html, "<meta name=\"description\" content=\"{description}\">");
        let _ = writeln!(
            html,
            "<meta name=\"keywords\" content=\"{}\">",
            escape_html(&self.keywords.join(", "))
        );

        let _ = writeln!(html, "<meta property=\"og:title\" content=\"{title}\">");
        let _ = writeln!(html, "<meta property=\"og:description\" content=\"{description}\">");
        let _ = writeln!(html, "<meta property=\"og:image\" content=\"{image}\">");
        html.push_str("<meta property=\"og:type\" content=\"website\">\n");

        html.push_str("<meta name=\"twitter:card\" content=\"summary_large_image\">\n");
        let _ = writeln!(html, "<meta name=\"twitter:title\" content=\"{title}\">");
        let _ = writeln!(html, "<meta name=\"twitter:description\" content=\"{description}\">");
        let _ = writeln!(html, "<meta name=\"twitter:image\" content=\"{image}\">");

        if let Some(url) = &self.canonical_url {
            let _ = writeln!(html, "<link rel=\"canonical\" href=\"{}\">", escape_html(url));
        }
        if let Some(data) = &self.structured_data {
            // `</` would terminate the script element early.
            let json = data.to_string().replace("</", "<\\/");
            let _ = writeln!(html, "<script type=\"application/ld+json\">{json}</script>");
        }

        html.push_str("<meta name=\"robots\" content=\"index, follow\">\n");
        let _ = writeln!(
            html,
            "<meta name=\"author\" content=\"{}\">",
            escape_html(&site.author)
        );
        html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
        html.push_str("<link rel=\"icon\" href=\"/favicon.ico\">\n");
        html
    }
}
