//! Breadcrumb derivation from URL paths.
//!
//! Trails are recomputed from the path string on every navigation; nothing is
//! looked up in a site structure, so any path (including unknown or malformed
//! ones) yields a trail with literal labels.

/// Label of the root breadcrumb.
const HOME_LABEL: &str = "Home";

/// Breadcrumb navigation item.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct BreadcrumbItem {
    /// Display label.
    pub label: String,
    /// Link target path (with leading slash).
    pub path: String,
    /// Whether this item is the page being viewed.
    pub is_current: bool,
}

/// Build the full breadcrumb trail for a URL path.
///
/// The trail always starts with a `Home` item bound to `/`, followed by one
/// item per non-empty path segment. Each item links to the accumulated path
/// prefix and only the last one is marked current.
///
/// # Examples
///
/// ```
/// use folio_nav::breadcrumb_trail;
///
/// let trail = breadcrumb_trail("/api-docs/users");
/// assert_eq!(trail.len(), 3);
/// assert_eq!(trail[1].label, "Api Docs");
/// assert_eq!(trail[2].path, "/api-docs/users");
/// assert!(trail[2].is_current);
/// ```
pub fn breadcrumb_trail(path: &str) -> Vec<BreadcrumbItem> {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    let mut trail = Vec::with_capacity(segments.len() + 1);
    trail.push(BreadcrumbItem {
        label: HOME_LABEL.to_owned(),
        path: "/".to_owned(),
        is_current: false,
    });

    let mut current_path = String::with_capacity(path.len());
    for (index, segment) in segments.iter().enumerate() {
        current_path.push('/');
        current_path.push_str(segment);
        trail.push(BreadcrumbItem {
            label: segment_label(segment),
            path: current_path.clone(),
            is_current: index + 1 == segments.len(),
        });
    }

    trail
}

/// Build the breadcrumb trail, or `None` when there is nothing beyond `Home`.
///
/// Use this for rendering: a root-only trail is not displayed.
pub fn breadcrumbs(path: &str) -> Option<Vec<BreadcrumbItem>> {
    let trail = breadcrumb_trail(path);
    (trail.len() > 1).then_some(trail)
}

/// Convert a path segment to a readable label.
///
/// Splits on hyphens and upper-cases the first character of every word:
/// `getting-started` becomes `Getting Started`. Empty words are kept, so
/// `a--b` becomes `A  B`.
pub fn segment_label(segment: &str) -> String {
    segment
        .split('-')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
