//! `folio search` command implementation.

use clap::Args;
use folio_search::{
    CATEGORIES, MIN_QUERY_LEN, OverlayView, ResultKind, SearchOverlay, SearchResult,
    StaticProvider,
};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the search command.
#[derive(Args)]
pub(crate) struct SearchArgs {
    /// Search query (at least three characters).
    query: String,

    /// Only show results of this kind (repeatable).
    #[arg(short, long = "kind", value_name = "KIND")]
    kinds: Vec<ResultKind>,

    /// Only show results in this category (repeatable).
    #[arg(long = "category", value_name = "CATEGORY")]
    categories: Vec<String>,

    /// Print results as JSON.
    #[arg(long)]
    json: bool,
}

impl SearchArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let status = Output::new();
        let out = Output::stdout();

        let mut overlay = SearchOverlay::new(Box::new(StaticProvider::fixture()));
        for kind in &self.kinds {
            if !overlay.filters().kinds.contains(kind) {
                overlay.toggle_kind(*kind);
            }
        }
        for category in &self.categories {
            let known = CATEGORIES
                .iter()
                .find(|c| c.eq_ignore_ascii_case(category))
                .ok_or_else(|| {
                    CliError::Validation(format!(
                        "Unknown category '{category}' (expected one of: {})",
                        CATEGORIES.join(", ")
                    ))
                })?;
            if !overlay.filters().categories.contains(*known) {
                overlay.toggle_category(known);
            }
        }
        overlay.set_query(self.query.as_str());

        if self.query.chars().count() < MIN_QUERY_LEN {
            status.warning(&format!(
                "Queries shorter than {MIN_QUERY_LEN} characters return no results"
            ));
        }

        if self.json {
            out.info(&serde_json::to_string_pretty(overlay.results())?);
            return Ok(());
        }

        match overlay.view() {
            OverlayView::Recent(recent) => {
                out.highlight("Recent searches");
                for query in recent {
                    out.info(&format!("  {query}"));
                }
            }
            OverlayView::NoResults { message } => out.info(&message),
            OverlayView::Results { heading, results } => {
                out.highlight(&heading);
                for result in results {
                    out.info(&format_result(result));
                    out.muted(&format!("    {}", result.body));
                }
            }
        }
        Ok(())
    }
}

fn format_result(result: &SearchResult) -> String {
    format!(
        "  {} [{} / {}] {}",
        result.title, result.kind, result.category, result.url
    )
}
