//! Markdown rendering for folio pages.
//!
//! [`MarkdownRenderer`] turns page markdown into HTML and returns the page's
//! heading sequence alongside, so the outline builder in `folio-nav` never
//! has to inspect rendered markup. Fenced code blocks become interactive
//! [`CodeBlock`]s with tabs, line numbers, highlighting, copy and download.
//!
//! # Example
//!
//! ```
//! use folio_render::MarkdownRenderer;
//!
//! let result = MarkdownRenderer::new()
//!     .with_title_extraction()
//!     .render_markdown("# Guide\n\n## Install {#install}\n\n## First Steps\n");
//!
//! assert_eq!(result.title.as_deref(), Some("Guide"));
//! assert_eq!(result.headings[0].id, "guide");
//! assert_eq!(result.headings[1].id, "install");
//! assert_eq!(result.headings[2].id, "first-steps");
//! ```

mod clipboard;
mod code_block;
mod download;
mod renderer;
mod state;
mod util;

pub use clipboard::{COPY_FEEDBACK_DURATION, Clipboard, ClipboardError, CopyFeedback, MemoryClipboard};
pub use code_block::{CodeBlock, CodeLine, CodeVariant};
pub use download::Download;
pub use renderer::{MarkdownRenderer, RenderResult, parser_options};
pub use util::{escape_html, synthesize_id};
