//! Event-processing state for the markdown renderer.

use folio_nav::Heading;
use pulldown_cmark::Alignment;

use crate::util::synthesize_id;

/// State for tracking code block rendering.
#[derive(Default)]
pub(crate) struct CodeBlockState {
    active: bool,
    info: String,
    buffer: String,
}

impl CodeBlockState {
    /// Start a new code block with its fence info string.
    pub fn start(&mut self, info: &str) {
        self.active = true;
        self.info = info.to_owned();
        self.buffer.clear();
    }

    /// End the current code block and return (info, content).
    pub fn end(&mut self) -> (String, String) {
        self.active = false;
        (
            std::mem::take(&mut self.info),
            std::mem::take(&mut self.buffer),
        )
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn push_str(&mut self, text: &str) {
        self.buffer.push_str(text);
    }
}

/// State for tracking table rendering.
#[derive(Default)]
pub(crate) struct TableState {
    in_head: bool,
    alignments: Vec<Alignment>,
    cell_index: usize,
}

impl TableState {
    pub fn start(&mut self, alignments: Vec<Alignment>) {
        self.alignments = alignments;
        self.in_head = false;
        self.cell_index = 0;
    }

    pub fn start_head(&mut self) {
        self.in_head = true;
        self.cell_index = 0;
    }

    pub fn end_head(&mut self) {
        self.in_head = false;
    }

    pub fn start_row(&mut self) {
        self.cell_index = 0;
    }

    pub fn next_cell(&mut self) {
        self.cell_index += 1;
    }

    pub fn is_in_head(&self) -> bool {
        self.in_head
    }

    /// Inline style for the current cell's alignment.
    pub fn current_alignment_style(&self) -> &'static str {
        match self.alignments.get(self.cell_index) {
            Some(Alignment::Left) => r#" style="text-align:left""#,
            Some(Alignment::Center) => r#" style="text-align:center""#,
            Some(Alignment::Right) => r#" style="text-align:right""#,
            Some(Alignment::None) | None => "",
        }
    }
}

/// State for capturing image alt text.
#[derive(Default)]
pub(crate) struct ImageState {
    active: bool,
    alt_text: String,
}

impl ImageState {
    pub fn start(&mut self) {
        self.active = true;
        self.alt_text.clear();
    }

    pub fn end(&mut self) -> String {
        self.active = false;
        std::mem::take(&mut self.alt_text)
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn push_str(&mut self, text: &str) {
        self.alt_text.push_str(text);
    }
}

/// A heading ready to be written out.
pub(crate) struct CompletedHeading {
    pub level: u8,
    pub id: String,
    pub html: String,
}

/// Tracks heading text and collects the document's heading sequence.
pub(crate) struct HeadingState {
    /// Whether the first H1 becomes the page title.
    extract_title: bool,
    title: Option<String>,
    /// Level and explicit `{#id}` of the heading being processed.
    current: Option<(u8, Option<String>)>,
    /// Plain text, for the id and the outline title.
    text: String,
    /// Inline HTML, for the rendered heading.
    html: String,
    headings: Vec<Heading>,
}

impl HeadingState {
    pub fn new(extract_title: bool) -> Self {
        Self {
            extract_title,
            title: None,
            current: None,
            text: String::new(),
            html: String::new(),
            headings: Vec::new(),
        }
    }

    pub fn is_active(&self) -> bool {
        self.current.is_some()
    }

    pub fn start_heading(&mut self, level: u8, explicit_id: Option<String>) {
        self.current = Some((level, explicit_id.filter(|id| !id.is_empty())));
        self.text.clear();
        self.html.clear();
    }

    /// Finish the current heading and record it in the outline.
    ///
    /// Every heading is recorded. With title extraction on, the first H1 also
    /// becomes the page title.
    pub fn complete_heading(&mut self) -> Option<CompletedHeading> {
        let (level, explicit_id) = self.current.take()?;
        let text = std::mem::take(&mut self.text);
        let html = std::mem::take(&mut self.html);
        let title = text.trim().to_owned();
        let id = explicit_id.unwrap_or_else(|| synthesize_id(&title));

        if self.extract_title && level == 1 && self.title.is_none() {
            self.title = Some(title.clone());
        }
        self.headings.push(Heading::new(id.clone(), title, level));

        Some(CompletedHeading { level, id, html })
    }

    pub fn push_text(&mut self, text: &str) {
        self.text.push_str(text);
    }

    pub fn push_html(&mut self, html: &str) {
        self.html.push_str(html);
    }

    pub fn take_title(&mut self) -> Option<String> {
        self.title.take()
    }

    pub fn take_headings(&mut self) -> Vec<Heading> {
        std::mem::take(&mut self.headings)
    }
}
