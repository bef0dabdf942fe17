//! Documentation version selector.

use std::fmt::Write;

use chrono::NaiveDate;
use folio_render::escape_html;
use serde::Serialize;
use tracing::info;

/// Kind of a documentation version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VersionKind {
    Release,
    Branch,
    Tag,
}

impl VersionKind {
    /// Group heading used when listing versions of this kind.
    #[must_use]
    pub fn group_label(self) -> &'static str {
        match self {
            Self::Release => "Releases",
            Self::Branch => "Branches",
            Self::Tag => "Tags",
        }
    }
}

/// One selectable documentation version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Version {
    pub id: String,
    pub name: String,
    pub kind: VersionKind,
    pub is_latest: bool,
    pub is_prerelease: bool,
    pub release_date: Option<NaiveDate>,
}

impl Version {
    fn release(id: &str, date: (i32, u32, u32)) -> Self {
        Self {
            id: id.to_owned(),
            name: id.to_owned(),
            kind: VersionKind::Release,
            is_latest: false,
            is_prerelease: false,
            release_date: NaiveDate::from_ymd_opt(date.0, date.1, date.2),
        }
    }

    fn branch(id: &str) -> Self {
        Self {
            id: id.to_owned(),
            name: id.to_owned(),
            kind: VersionKind::Branch,
            is_latest: false,
            is_prerelease: false,
            release_date: None,
        }
    }
}

/// The built-in version catalog.
#[must_use]
pub fn version_catalog() -> Vec<Version> {
    vec![
        Version {
            is_latest: true,
            ..Version::release("v2.1.0", (2024, 1, 15))
        },
        Version::release("v2.0.0", (2024, 1, 1)),
        Version {
            is_prerelease: true,
            ..Version::release("v2.0.0-beta.1", (2023, 12, 15))
        },
        Version::branch("main"),
        Version::branch("develop"),
        Version::branch("feature/new-auth"),
    ]
}

/// Callback invoked with the id of a newly selected version.
pub type VersionChangeCallback = Box<dyn FnMut(&str)>;

/// Single-choice selection over a version catalog.
///
/// Unknown ids are accepted: the selection simply matches no catalog entry.
pub struct VersionSelector {
    catalog: Vec<Version>,
    selected: String,
    on_change: Option<VersionChangeCallback>,
}

impl VersionSelector {
    /// Selector over the built-in catalog with `current` selected.
    pub fn new(current: impl Into<String>) -> Self {
        Self::with_catalog(version_catalog(), current)
    }

    /// Selector over an explicit catalog.
    pub fn with_catalog(catalog: Vec<Version>, current: impl Into<String>) -> Self {
        Self {
            catalog,
            selected: current.into(),
            on_change: None,
        }
    }

    /// Register the callback notified on every selection.
    #[must_use]
    pub fn on_change(mut self, callback: impl FnMut(&str) + 'static) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    /// Select `id` and notify the callback.
    pub fn select(&mut self, id: &str) {
        info!(version = id, "Switching to version");
        id.clone_into(&mut self.selected);
        if let Some(callback) = self.on_change.as_mut() {
            callback(id);
        }
    }

    pub fn selected(&self) -> &str {
        &self.selected
    }

    /// Catalog entry for the current selection, if any.
    pub fn selected_version(&self) -> Option<&Version> {
        self.catalog.iter().find(|v| v.id == self.selected)
    }

    pub fn catalog(&self) -> &[Version] {
        &self.catalog
    }

    /// Catalog grouped by kind, in Releases, Branches, Tags order.
    ///
    /// Empty groups are omitted.
    pub fn groups(&self) -> Vec<(VersionKind, Vec<&Version>)> {
        [VersionKind::Release, VersionKind::Branch, VersionKind::Tag]
            .into_iter()
            .filter_map(|kind| {
                let members: Vec<&Version> =
                    self.catalog.iter().filter(|v| v.kind == kind).collect();
                (!members.is_empty()).then_some((kind, members))
            })
            .collect()
    }

    /// Render the selector as a `<details>` dropdown.
    pub fn render_html(&self) -> String {
        let mut html = String::with_capacity(1024);
        html.push_str("<details class=\"version-selector\">\n");
        let _ = write!(
            html,
            "<summary><span class=\"version-current\">{}</span>",
            escape_html(&self.selected)
        );
        if self.selected_version().is_some_and(|v| v.is_latest) {
            html.push_str(" <span class=\"badge\">Latest</span>");
        }
        html.push_str("</summary>\n");

        for (kind, members) in self.groups() {
            let _ = writeln!(
                html,
                "<div class=\"version-group\"><div class=\"version-group-label\">{}</div>\n<ul>",
                kind.group_label()
            );
            for version in members {
                let _ = write!(
                    html,
                    "<li data-version=\"{}\"><span class=\"version-name\">{}</span>",
                    escape_html(&version.id),
                    escape_html(&version.name)
                );
                if version.is_latest {
                    html.push_str(" <span class=\"badge\">Latest</span>");
                }
                if version.is_prerelease {
                    html.push_str(" <span class=\"badge badge-outline\">Beta</span>");
                }
                if version.id == self.selected {
                    html.push_str(" <span class=\"version-check\" aria-label=\"selected\">✓</span>");
                }
                html.push_str("</li>\n");
            }
            html.push_str("</ul></div>\n");
        }

        html.push_str("</details>\n");
        html
    }
}
