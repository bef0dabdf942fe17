//! Table of contents outline.
//!
//! [`build_forest`] nests a flat, document-ordered heading sequence into a
//! forest using a single pass over a stack of open ancestors: every entry whose
//! level is greater than or equal to the incoming heading is closed (attached
//! to its parent) before the heading is pushed. A node therefore only ever
//! receives children of a strictly deeper level.
//!
//! [`TableOfContents`] is one outline instance as shown next to a page. It
//! owns the forest, the per-node expansion state and a [`SectionTracker`], and
//! is rebuilt from scratch on every content change.

use std::collections::HashSet;

use crate::section::SectionTracker;

/// A heading as found in rendered content.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Heading {
    /// Anchor id.
    pub id: String,
    /// Heading text.
    pub title: String,
    /// Heading level (1-6).
    pub level: u8,
}

impl Heading {
    /// Create a heading.
    pub fn new(id: impl Into<String>, title: impl Into<String>, level: u8) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            level,
        }
    }
}

/// Node of the table of contents forest.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TocNode {
    /// Anchor id of the heading.
    pub id: String,
    /// Heading text.
    pub title: String,
    /// Heading level (1-6).
    pub level: u8,
    /// Nested headings, in document order.
    pub children: Vec<TocNode>,
}

impl TocNode {
    fn leaf(heading: &Heading) -> Self {
        Self {
            id: heading.id.clone(),
            title: heading.title.clone(),
            level: heading.level,
            children: Vec::new(),
        }
    }

    /// Whether the node has nested headings.
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

/// Nest an ordered heading sequence into a forest.
///
/// Runs in O(n) over the heading count. A heading becomes a child of the
/// nearest preceding heading with a strictly lower level, or a root when there
/// is none.
pub fn build_forest(headings: &[Heading]) -> Vec<TocNode> {
    let mut roots = Vec::new();
    let mut stack: Vec<TocNode> = Vec::new();

    for heading in headings {
        while stack.last().is_some_and(|top| top.level >= heading.level) {
            close_top(&mut stack, &mut roots);
        }
        stack.push(TocNode::leaf(heading));
    }
    while !stack.is_empty() {
        close_top(&mut stack, &mut roots);
    }

    roots
}

/// Pop the innermost open node and attach it to its parent (or the roots).
fn close_top(stack: &mut Vec<TocNode>, roots: &mut Vec<TocNode>) {
    if let Some(node) = stack.pop() {
        match stack.last_mut() {
            Some(parent) => parent.children.push(node),
            None => roots.push(node),
        }
    }
}

/// How a scroll should be animated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollBehavior {
    /// Animate the scroll.
    Smooth,
    /// Jump immediately.
    Instant,
}

/// Where the target should land in the viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollBlock {
    /// Align the target with the top of the viewport.
    Start,
    /// Center the target.
    Center,
}

/// Request to scroll a heading into view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrollRequest {
    /// Anchor id of the target heading.
    pub id: String,
    /// Scroll animation.
    pub behavior: ScrollBehavior,
    /// Vertical alignment of the target.
    pub block: ScrollBlock,
}

/// One visible row of the outline, ready for display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TocRow {
    /// Anchor id.
    pub id: String,
    /// Heading text.
    pub title: String,
    /// Nesting depth (0 for roots).
    pub depth: usize,
    /// Whether the row has an expand affordance.
    pub has_children: bool,
    /// Whether the row's children are shown.
    pub expanded: bool,
    /// Whether the row is the active section.
    pub active: bool,
}

/// A table of contents instance for one page view.
///
/// Expansion state lives only as long as the instance and is reset to the
/// auto-expansion policy (every node with children expanded) on each
/// [`rescan`](Self::rescan).
#[derive(Debug, Default)]
pub struct TableOfContents {
    forest: Vec<TocNode>,
    expanded: HashSet<String>,
    tracker: SectionTracker,
}

impl TableOfContents {
    /// Create an empty outline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an outline from a heading sequence.
    pub fn from_headings(headings: &[Heading]) -> Self {
        let mut toc = Self::new();
        toc.rescan(headings);
        toc
    }

    /// Rebuild the outline after a content change.
    ///
    /// Rebuilds the forest, re-applies auto-expansion and reconnects the
    /// section tracker to the new heading ids.
    pub fn rescan(&mut self, headings: &[Heading]) {
        self.forest = build_forest(headings);
        self.expanded.clear();
        collect_expandable(&self.forest, &mut self.expanded);
        self.tracker.observe(headings.iter().map(|h| h.id.clone()));
        tracing::debug!(headings = headings.len(), roots = self.forest.len(), "Rebuilt outline");
    }

    /// The outline forest.
    pub fn forest(&self) -> &[TocNode] {
        &self.forest
    }

    /// Whether there is nothing to show.
    pub fn is_empty(&self) -> bool {
        self.forest.is_empty()
    }

    /// Whether the node with `id` shows its children.
    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.contains(id)
    }

    /// Flip the expansion state of a node.
    ///
    /// Only nodes with children can be toggled; other ids are ignored.
    pub fn toggle_expanded(&mut self, id: &str) {
        if !find_node(&self.forest, id).is_some_and(TocNode::has_children) {
            return;
        }
        if !self.expanded.remove(id) {
            self.expanded.insert(id.to_owned());
        }
    }

    /// The currently active heading id.
    pub fn active_id(&self) -> Option<&str> {
        self.tracker.active_id()
    }

    /// The section tracker, for feeding intersection updates.
    pub fn tracker(&self) -> &SectionTracker {
        &self.tracker
    }

    /// Mutable access to the section tracker.
    pub fn tracker_mut(&mut self) -> &mut SectionTracker {
        &mut self.tracker
    }

    /// Handle a click on an outline entry.
    ///
    /// Returns a smooth, top-aligned scroll request for known ids.
    pub fn click(&self, id: &str) -> Option<ScrollRequest> {
        find_node(&self.forest, id).map(|node| ScrollRequest {
            id: node.id.clone(),
            behavior: ScrollBehavior::Smooth,
            block: ScrollBlock::Start,
        })
    }

    /// Rows currently visible, in display order.
    ///
    /// Children of collapsed nodes are omitted.
    pub fn visible_rows(&self) -> Vec<TocRow> {
        let mut rows = Vec::new();
        self.push_rows(&self.forest, 0, &mut rows);
        rows
    }

    fn push_rows(&self, nodes: &[TocNode], depth: usize, rows: &mut Vec<TocRow>) {
        for node in nodes {
            let expanded = self.is_expanded(&node.id);
            rows.push(TocRow {
                id: node.id.clone(),
                title: node.title.clone(),
                depth,
                has_children: node.has_children(),
                expanded,
                active: self.active_id() == Some(node.id.as_str()),
            });
            if node.has_children() && expanded {
                self.push_rows(&node.children, depth + 1, rows);
            }
        }
    }
}

fn collect_expandable(nodes: &[TocNode], expanded: &mut HashSet<String>) {
    for node in nodes.iter().filter(|n| n.has_children()) {
        expanded.insert(node.id.clone());
        collect_expandable(&node.children, expanded);
    }
}

fn find_node<'a>(nodes: &'a [TocNode], id: &str) -> Option<&'a TocNode> {
    nodes.iter().find_map(|node| {
        if node.id == id {
            Some(node)
        } else {
            find_node(&node.children, id)
        }
    })
}
