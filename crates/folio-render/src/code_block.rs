//! Interactive code blocks.
//!
//! A [`CodeBlock`] shows one or more variants of a snippet in tabs, with
//! optional line numbers, highlighted lines, a run affordance, a download
//! link and a copy button.

use std::collections::{BTreeSet, HashMap};
use std::fmt::Write;
use std::time::Instant;

use tracing::warn;

use crate::clipboard::{Clipboard, CopyFeedback};
use crate::download::Download;
use crate::util::escape_html;

/// Language used when a fence declares none.
const DEFAULT_LANGUAGE: &str = "text";

/// One variant of a snippet, shown as a tab.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodeVariant {
    /// Tab label.
    pub label: String,
    /// Literal source text.
    pub code: String,
    /// Language tag, e.g. `rust`.
    pub language: String,
}

impl CodeVariant {
    /// Create a variant.
    pub fn new(
        label: impl Into<String>,
        code: impl Into<String>,
        language: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            code: code.into(),
            language: language.into(),
        }
    }
}

/// A formatted source line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CodeLine<'a> {
    /// 1-based line number.
    pub number: usize,
    /// Line text without the newline.
    pub text: &'a str,
    /// Whether the line is highlighted.
    pub highlighted: bool,
}

/// A code snippet with its display options and interaction state.
#[derive(Clone, Debug)]
#[allow(clippy::struct_excessive_bools)]
pub struct CodeBlock {
    variants: Vec<CodeVariant>,
    active: usize,
    tabbed: bool,
    title: Option<String>,
    filename: Option<String>,
    show_line_numbers: bool,
    highlight_lines: BTreeSet<usize>,
    runnable: bool,
    downloadable: bool,
    feedback: CopyFeedback,
}

impl CodeBlock {
    /// A single snippet without tabs.
    pub fn new(code: impl Into<String>, language: impl Into<String>) -> Self {
        let language = language.into();
        Self::from_variants(vec![CodeVariant::new(language.clone(), code, language)], false)
    }

    /// A tabbed snippet; the first variant starts active.
    ///
    /// Returns `None` when `variants` is empty.
    pub fn tabbed(variants: Vec<CodeVariant>) -> Option<Self> {
        if variants.is_empty() {
            return None;
        }
        Some(Self::from_variants(variants, true))
    }

    fn from_variants(variants: Vec<CodeVariant>, tabbed: bool) -> Self {
        Self {
            variants,
            active: 0,
            tabbed,
            title: None,
            filename: None,
            show_line_numbers: false,
            highlight_lines: BTreeSet::new(),
            runnable: false,
            downloadable: false,
            feedback: CopyFeedback::default(),
        }
    }

    /// Build a block from a fenced code block.
    ///
    /// Recognized attributes: `title`, `filename`, `lines`, `highlight`
    /// (e.g. `1,3-5`), `download` and `run`.
    pub fn from_fence(language: &str, attrs: &HashMap<String, String>, code: &str) -> Self {
        let language = if language.is_empty() {
            DEFAULT_LANGUAGE
        } else {
            language
        };
        let code = code.strip_suffix('\n').unwrap_or(code);
        let mut block = Self::new(code, language);
        block.apply_attrs(attrs);
        block
    }

    pub(crate) fn apply_attrs(&mut self, attrs: &HashMap<String, String>) {
        self.title = attrs.get("title").cloned().filter(|t| !t.is_empty());
        self.filename = attrs.get("filename").cloned().filter(|f| !f.is_empty());
        self.show_line_numbers = attrs.get("lines").is_some_and(|v| is_truthy(v));
        self.highlight_lines = attrs
            .get("highlight")
            .map(|v| parse_line_ranges(v))
            .unwrap_or_default();
        self.runnable = attrs.get("run").is_some_and(|v| is_truthy(v));
        self.downloadable = attrs.get("download").is_some_and(|v| is_truthy(v));
    }

    pub(crate) fn push_variant(&mut self, variant: CodeVariant) {
        self.tabbed = true;
        self.variants.push(variant);
    }

    /// Set the title bar text.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the file name shown in the header and used for downloads.
    #[must_use]
    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    /// Show line numbers.
    #[must_use]
    pub fn with_line_numbers(mut self) -> Self {
        self.show_line_numbers = true;
        self
    }

    /// Highlight the given 1-based lines.
    #[must_use]
    pub fn with_highlighted_lines(mut self, lines: impl IntoIterator<Item = usize>) -> Self {
        self.highlight_lines = lines.into_iter().collect();
        self
    }

    /// Offer a run affordance.
    #[must_use]
    pub fn runnable(mut self) -> Self {
        self.runnable = true;
        self
    }

    /// Offer a download link.
    #[must_use]
    pub fn downloadable(mut self) -> Self {
        self.downloadable = true;
        self
    }

    /// All variants, in tab order.
    pub fn variants(&self) -> &[CodeVariant] {
        &self.variants
    }

    /// Index of the active tab.
    pub fn active_index(&self) -> usize {
        self.active
    }

    /// The active variant.
    pub fn active_variant(&self) -> &CodeVariant {
        &self.variants[self.active]
    }

    /// Make tab `index` active. Out-of-range indices are ignored.
    pub fn select_tab(&mut self, index: usize) -> bool {
        if index < self.variants.len() {
            self.active = index;
            true
        } else {
            false
        }
    }

    /// Copy the active variant's exact source text.
    ///
    /// On success the "copied" acknowledgement starts at `now`. Failures are
    /// logged and otherwise ignored.
    pub fn copy(&mut self, clipboard: &mut dyn Clipboard, now: Instant) -> bool {
        match clipboard.write_text(&self.variants[self.active].code) {
            Ok(()) => {
                self.feedback.mark(now);
                true
            }
            Err(e) => {
                warn!(error = %e, "Failed to copy code to clipboard");
                false
            }
        }
    }

    /// Whether the "copied" acknowledgement shows at `now`.
    pub fn is_copied(&self, now: Instant) -> bool {
        self.feedback.is_active(now)
    }

    /// The active variant packaged as a plain-text file.
    ///
    /// Named after the explicit filename, or `code.<language>`.
    pub fn download(&self) -> Download {
        self.download_for(self.active_variant())
    }

    fn download_for(&self, variant: &CodeVariant) -> Download {
        let filename = self
            .filename
            .clone()
            .unwrap_or_else(|| format!("code.{}", variant.language));
        Download::text(filename, variant.code.clone())
    }

    /// Split `code` into numbered lines with highlight flags.
    pub fn format_lines<'a>(&self, code: &'a str) -> Vec<CodeLine<'a>> {
        code.split('\n')
            .enumerate()
            .map(|(index, text)| CodeLine {
                number: index + 1,
                text,
                highlighted: self.highlight_lines.contains(&(index + 1)),
            })
            .collect()
    }

    /// Render as static HTML. `block_id` keeps tab ids unique on a page.
    pub fn render_html(&self, block_id: usize) -> String {
        let mut out = String::with_capacity(512);
        write!(out, r#"<div class="code-block" id="code-{block_id}">"#).unwrap();

        if let Some(title) = &self.title {
            write!(
                out,
                r#"<div class="code-block-title"><h4>{}</h4></div>"#,
                escape_html(title)
            )
            .unwrap();
        }

        if self.tabbed {
            out.push_str(r#"<div class="tabs-buttons" role="tablist">"#);
            for (idx, variant) in self.variants.iter().enumerate() {
                let selected = idx == self.active;
                write!(
                    out,
                    r#"<button role="tab" id="code-{block_id}-tab-{idx}" aria-controls="code-{block_id}-panel-{idx}" aria-selected="{selected}" tabindex="{}">{}</button>"#,
                    if selected { "0" } else { "-1" },
                    escape_html(&variant.label)
                )
                .unwrap();
            }
            out.push_str("</div>");

            for (idx, variant) in self.variants.iter().enumerate() {
                let hidden = if idx == self.active { "" } else { " hidden" };
                write!(
                    out,
                    r#"<div role="tabpanel" id="code-{block_id}-panel-{idx}" aria-labelledby="code-{block_id}-tab-{idx}"{hidden}>"#
                )
                .unwrap();
                self.render_variant(variant, &mut out);
                out.push_str("</div>");
            }
        } else {
            self.render_variant(self.active_variant(), &mut out);
        }

        out.push_str("</div>");
        out
    }

    fn render_variant(&self, variant: &CodeVariant, out: &mut String) {
        let language = escape_html(&variant.language);

        out.push_str(r#"<div class="code-block-header"><div class="code-block-meta">"#);
        if let Some(filename) = &self.filename {
            write!(
                out,
                r#"<span class="code-block-filename">{}</span>"#,
                escape_html(filename)
            )
            .unwrap();
        }
        write!(out, r#"<span class="code-block-language">{language}</span>"#).unwrap();
        out.push_str(r#"</div><div class="code-block-actions">"#);

        if self.runnable {
            out.push_str(r#"<button type="button" class="code-block-run">Run</button>"#);
        }
        if self.downloadable {
            let download = self.download_for(variant);
            write!(
                out,
                r#"<a class="code-block-download" href="{}" download="{}">Download</a>"#,
                download.data_uri(),
                escape_html(&download.filename)
            )
            .unwrap();
        }
        out.push_str(
            r#"<button type="button" class="code-block-copy" aria-label="Copy code">Copy</button>"#,
        );
        out.push_str("</div></div>");

        write!(out, r#"<pre><code class="language-{language}">"#).unwrap();
        for line in self.format_lines(&variant.code) {
            let class = if line.highlighted {
                "line highlighted"
            } else {
                "line"
            };
            write!(out, r#"<span class="{class}">"#).unwrap();
            if self.show_line_numbers {
                write!(out, r#"<span class="line-number">{}</span>"#, line.number).unwrap();
            }
            writeln!(out, "{}</span>", escape_html(line.text)).unwrap();
        }
        out.push_str("</code></pre>");
    }
}

/// Parse fence info into the language and its attributes.
///
/// Values may be double-quoted to contain spaces. A bare word after the
/// language is a flag with value `true`.
pub(crate) fn parse_fence_info(info: &str) -> (String, HashMap<String, String>) {
    let mut tokens = tokenize(info).into_iter();
    let language = tokens.next().unwrap_or_default();

    let mut attrs = HashMap::new();
    for token in tokens {
        match token.split_once('=') {
            Some((key, value)) => {
                attrs.insert(key.to_owned(), value.to_owned());
            }
            None => {
                attrs.insert(token, "true".to_owned());
            }
        }
    }

    (language, attrs)
}

/// Split on whitespace outside double quotes, dropping the quotes.
fn tokenize(info: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for c in info.chars() {
        match c {
            '"' => in_quotes = !in_quotes,
            c if c.is_whitespace() && !in_quotes => {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
            }
            c => current.push(c),
        }
    }
    if !current.is_empty() {
        tokens.push(current);
    }
    tokens
}

/// Parse a line list such as `1,3-5` into line numbers.
///
/// Malformed parts and zero are skipped.
pub(crate) fn parse_line_ranges(spec: &str) -> BTreeSet<usize> {
    let mut lines = BTreeSet::new();
    for part in spec.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        match part.split_once('-') {
            Some((start, end)) => {
                if let (Ok(start), Ok(end)) = (
                    start.trim().parse::<usize>(),
                    end.trim().parse::<usize>(),
                ) {
                    let (lo, hi) = if start <= end { (start, end) } else { (end, start) };
                    lines.extend((lo..=hi).filter(|&n| n > 0));
                }
            }
            None => {
                if let Ok(n) = part.parse::<usize>()
                    && n > 0
                {
                    lines.insert(n);
                }
            }
        }
    }
    lines
}

fn is_truthy(value: &str) -> bool {
    !matches!(value, "false" | "0" | "no")
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::clipboard::{ClipboardError, MemoryClipboard};

    struct BrokenClipboard;

    impl Clipboard for BrokenClipboard {
        fn write_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
            Err(ClipboardError::PermissionDenied)
        }
    }

    fn tabs() -> CodeBlock {
        CodeBlock::tabbed(vec![
            CodeVariant::new("npm", "npm install folio", "bash"),
            CodeVariant::new("yarn", "yarn add folio", "bash"),
        ])
        .unwrap()
    }

    #[test]
    fn test_parse_fence_info() {
        let (lang, attrs) =
            parse_fence_info(r#"rust title="Hello world" highlight=1,3-5 lines download"#);
        assert_eq!(lang, "rust");
        assert_eq!(attrs.get("title").map(String::as_str), Some("Hello world"));
        assert_eq!(attrs.get("highlight").map(String::as_str), Some("1,3-5"));
        assert_eq!(attrs.get("lines").map(String::as_str), Some("true"));
        assert_eq!(attrs.get("download").map(String::as_str), Some("true"));
    }

    #[test]
    fn test_parse_fence_info_empty() {
        let (lang, attrs) = parse_fence_info("");
        assert_eq!(lang, "");
        assert!(attrs.is_empty());
    }

    #[test]
    fn test_parse_line_ranges() {
        let lines: Vec<usize> = parse_line_ranges("1, 3-5,x,0,9-8").into_iter().collect();
        assert_eq!(lines, vec![1, 3, 4, 5, 8, 9]);
    }

    #[test]
    fn test_format_lines_marks_highlights() {
        let block = CodeBlock::new("a\nb\nc", "text").with_highlighted_lines([2]);
        let lines = block.format_lines("a\nb\nc");
        assert_eq!(
            lines,
            vec![
                CodeLine { number: 1, text: "a", highlighted: false },
                CodeLine { number: 2, text: "b", highlighted: true },
                CodeLine { number: 3, text: "c", highlighted: false },
            ]
        );
    }

    #[test]
    fn test_select_tab() {
        let mut block = tabs();
        assert_eq!(block.active_index(), 0);
        assert!(block.select_tab(1));
        assert_eq!(block.active_variant().label, "yarn");
        assert!(!block.select_tab(2));
        assert_eq!(block.active_index(), 1);
    }

    #[test]
    fn test_tabbed_requires_variants() {
        assert!(CodeBlock::tabbed(Vec::new()).is_none());
    }

    #[test]
    fn test_copy_active_variant() {
        let mut block = tabs();
        block.select_tab(1);
        let mut clipboard = MemoryClipboard::default();
        let now = Instant::now();

        assert!(block.copy(&mut clipboard, now));
        assert_eq!(clipboard.contents(), Some("yarn add folio"));
        assert!(block.is_copied(now + Duration::from_secs(1)));
        assert!(!block.is_copied(now + Duration::from_secs(2)));
    }

    #[test]
    fn test_copy_failure_is_swallowed() {
        let mut block = CodeBlock::new("ls", "bash");
        let now = Instant::now();
        assert!(!block.copy(&mut BrokenClipboard, now));
        assert!(!block.is_copied(now));
    }

    #[test]
    fn test_download_name() {
        let block = CodeBlock::new("print(1)", "python");
        assert_eq!(block.download().filename, "code.python");
        assert_eq!(block.download().contents, "print(1)");

        let named = CodeBlock::new("print(1)", "python").with_filename("hello.py");
        assert_eq!(named.download().filename, "hello.py");
    }

    #[test]
    fn test_from_fence_strips_trailing_newline() {
        let block = CodeBlock::from_fence("", &HashMap::new(), "echo hi\n");
        assert_eq!(block.active_variant().code, "echo hi");
        assert_eq!(block.active_variant().language, "text");
    }

    #[test]
    fn test_render_single_block() {
        let block = CodeBlock::new("let x = 1;\nlet y = 2;", "rust")
            .with_line_numbers()
            .with_highlighted_lines([2]);
        let html = block.render_html(0);

        assert!(html.starts_with(r#"<div class="code-block" id="code-0">"#));
        assert!(html.contains(r#"<span class="code-block-language">rust</span>"#));
        assert!(html.contains(
            r#"<span class="line highlighted"><span class="line-number">2</span>let y = 2;</span>"#
        ));
        assert!(!html.contains("role=\"tablist\""));
        assert!(!html.contains("code-block-download"));
        assert!(!html.contains("code-block-run"));
    }

    #[test]
    fn test_render_tabs() {
        let html = tabs().render_html(3);
        assert!(html.contains(r#"<div class="tabs-buttons" role="tablist">"#));
        assert!(html.contains(
            r#"<button role="tab" id="code-3-tab-0" aria-controls="code-3-panel-0" aria-selected="true" tabindex="0">npm</button>"#
        ));
        assert!(html.contains(
            r#"<div role="tabpanel" id="code-3-panel-1" aria-labelledby="code-3-tab-1" hidden>"#
        ));
    }

    #[test]
    fn test_render_actions_and_title() {
        let block = CodeBlock::new("<b>", "html")
            .with_title("Markup")
            .with_filename("index.html")
            .runnable()
            .downloadable();
        let html = block.render_html(0);
        assert!(html.contains(r#"<div class="code-block-title"><h4>Markup</h4></div>"#));
        assert!(html.contains(r#"<span class="code-block-filename">index.html</span>"#));
        assert!(html.contains("code-block-run"));
        assert!(html.contains(
            r#"href="data:text/plain;charset=utf-8,%3Cb%3E" download="index.html""#
        ));
        assert!(html.contains("&lt;b&gt;"));
    }
}
