//! Built-in search dataset.

use chrono::NaiveDate;

use crate::types::{ResultKind, SearchResult};

/// Categories offered as filter facets.
pub const CATEGORIES: [&str; 4] = [
    "Authentication",
    "API Reference",
    "Deployment",
    "Getting Started",
];

/// The fixed dataset served by [`StaticProvider::fixture`](crate::StaticProvider::fixture).
pub fn fixture_results() -> Vec<SearchResult> {
    vec![
        entry(
            "1",
            "Getting Started with Authentication",
            "Learn how to implement JWT authentication in your Einstein Labs projects...",
            "/api-docs/authentication",
            ResultKind::Guide,
            "Authentication",
            (2024, 1, 15),
            0.95,
        ),
        entry(
            "2",
            "User API Endpoints",
            "Complete reference for user management API endpoints including create, read, update...",
            "/api-docs/users",
            ResultKind::Api,
            "API Reference",
            (2024, 1, 14),
            0.87,
        ),
        entry(
            "3",
            "Deployment with Docker",
            "Step-by-step guide to deploy your application using Docker containers...",
            "/deployment/docker",
            ResultKind::Tutorial,
            "Deployment",
            (2024, 1, 13),
            0.82,
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn entry(
    id: &str,
    title: &str,
    body: &str,
    url: &str,
    kind: ResultKind,
    category: &str,
    (year, month, day): (i32, u32, u32),
    relevance: f64,
) -> SearchResult {
    SearchResult {
        id: id.to_owned(),
        title: title.to_owned(),
        body: body.to_owned(),
        url: url.to_owned(),
        kind,
        category: category.to_owned(),
        updated_at: NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default(),
        relevance,
    }
}
