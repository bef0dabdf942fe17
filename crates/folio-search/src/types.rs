//! Search result types.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Kind of documentation a result points to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultKind {
    /// Narrative guide.
    Guide,
    /// API endpoint documentation.
    Api,
    /// Reference material.
    Reference,
    /// Step-by-step tutorial.
    Tutorial,
}

impl ResultKind {
    /// All kinds, in facet display order.
    pub const ALL: [Self; 4] = [Self::Guide, Self::Api, Self::Reference, Self::Tutorial];

    /// Lowercase identifier.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Guide => "guide",
            Self::Api => "api",
            Self::Reference => "reference",
            Self::Tutorial => "tutorial",
        }
    }
}

impl fmt::Display for ResultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown result kind.
#[derive(Debug, thiserror::Error)]
#[error("unknown result kind '{0}' (expected guide, api, reference or tutorial)")]
pub struct ParseKindError(String);

impl FromStr for ResultKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseKindError(s.to_owned()))
    }
}

/// A searchable documentation entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    /// Stable identifier.
    pub id: String,
    /// Entry title.
    pub title: String,
    /// Summary text.
    pub body: String,
    /// Target URL path.
    pub url: String,
    /// Documentation kind.
    pub kind: ResultKind,
    /// Facet category (e.g. "Authentication").
    pub category: String,
    /// Date of the last update.
    pub updated_at: NaiveDate,
    /// Relevance in `[0, 1]`; higher ranks first.
    pub relevance: f64,
}
