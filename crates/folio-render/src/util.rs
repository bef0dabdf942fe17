//! Shared helpers for rendering.

use pulldown_cmark::HeadingLevel;

/// Escape HTML special characters.
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

/// Derive a heading anchor from its text.
///
/// Lower-cases the text and joins whitespace-separated words with `-`.
/// Punctuation is kept and equal texts produce equal ids. Leading and
/// trailing whitespace is dropped rather than turned into `-`.
///
/// # Examples
///
/// ```
/// use folio_render::synthesize_id;
///
/// assert_eq!(synthesize_id("Getting Started"), "getting-started");
/// assert_eq!(synthesize_id("  What's   New? "), "what's-new?");
/// ```
#[must_use]
pub fn synthesize_id(text: &str) -> String {
    text.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

/// Convert heading level enum to number (1-6).
#[must_use]
pub(crate) fn heading_level_to_num(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}
