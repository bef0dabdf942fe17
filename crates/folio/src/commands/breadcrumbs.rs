//! `folio breadcrumbs` command implementation.

use clap::Args;
use folio_nav::{BreadcrumbItem, breadcrumb_trail};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the breadcrumbs command.
#[derive(Args)]
pub(crate) struct BreadcrumbsArgs {
    /// URL path, e.g. /api-docs/users.
    path: String,
}

impl BreadcrumbsArgs {
    #[allow(clippy::unnecessary_wraps)]
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let out = Output::stdout();
        let trail = breadcrumb_trail(&self.path);

        out.highlight(&format_trail(&trail));
        for item in &trail {
            let marker = if item.is_current { " (current)" } else { "" };
            out.muted(&format!("  {} -> {}{marker}", item.label, item.path));
        }
        Ok(())
    }
}

fn format_trail(trail: &[BreadcrumbItem]) -> String {
    trail
        .iter()
        .map(|item| item.label.as_str())
        .collect::<Vec<_>>()
        .join(" / ")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_format_trail() {
        assert_eq!(
            format_trail(&breadcrumb_trail("/api-docs/users")),
            "Home / Api Docs / Users"
        );
        assert_eq!(format_trail(&breadcrumb_trail("/")), "Home");
    }
}
