//! `folio toc` command implementation.

use std::path::PathBuf;

use clap::Args;
use folio_nav::{TableOfContents, TocRow};
use folio_render::MarkdownRenderer;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the toc command.
#[derive(Args)]
pub(crate) struct TocArgs {
    /// Markdown file to outline.
    file: PathBuf,

    /// Print the outline forest as JSON.
    #[arg(long)]
    json: bool,
}

impl TocArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let out = Output::stdout();

        let markdown = std::fs::read_to_string(&self.file)?;
        let rendered = MarkdownRenderer::new()
            .with_title_extraction()
            .render_markdown(&markdown);
        let toc = TableOfContents::from_headings(&rendered.headings);

        if self.json {
            out.info(&serde_json::to_string_pretty(toc.forest())?);
            return Ok(());
        }

        if let Some(title) = &rendered.title {
            out.highlight(title);
        }
        if toc.is_empty() {
            out.muted("No headings");
        }
        for row in toc.visible_rows() {
            out.info(&format_row(&row));
        }
        Ok(())
    }
}

fn format_row(row: &TocRow) -> String {
    format!("{}- {} (#{})", "  ".repeat(row.depth), row.title, row.id)
}

#[cfg(test)]
mod tests {
    use folio_nav::Heading;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_rows_are_indented_by_depth() {
        let toc = TableOfContents::from_headings(&[
            Heading::new("setup", "Setup", 2),
            Heading::new("editor", "Editor Configuration", 3),
            Heading::new("next-steps", "Next Steps", 2),
        ]);
        let lines: Vec<String> = toc.visible_rows().iter().map(format_row).collect();
        assert_eq!(
            lines,
            vec![
                "- Setup (#setup)",
                "  - Editor Configuration (#editor)",
                "- Next Steps (#next-steps)",
            ]
        );
    }
}
