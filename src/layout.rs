//! Row-based page geometry.
//!
//! The viewer lays blocks out top to bottom in fixed-height rows. Each heading takes a row plus
//! a spacer, text blocks take one row per line plus a spacer, and page rules take two rows.
//! Blocks inside a folded section take no rows at all and count as hidden. Pixel values are
//! rows multiplied by the configured line height, so thresholds and offsets keep their usual
//! pixel meaning.

use crate::document::{Block, Document, NodeRef};
use crate::scrollspy::Layout;
use std::collections::HashSet;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Rows occupied by a visible block.
pub struct RowSpan {
    /// First row.
    pub start: usize,
    /// Number of rows.
    pub height: usize,
}

#[must_use]
/// Rows a block needs when visible.
pub fn block_height(block: &Block) -> usize {
    match block {
        Block::Heading { .. } | Block::Rule => 2,
        Block::Text { lines } => lines.len() + 1,
    }
}

/// Geometry of a document inside a scrolling pane.
pub struct PageLayout<'a> {
    doc: &'a Document,
    spans: Vec<Option<RowSpan>>,
    total_rows: usize,
    /// Pixels per row.
    pub line_height: f64,
    /// Document offset of the pane's top edge, in pixels.
    pub origin: f64,
    /// Current scroll offset of the pane, in pixels.
    pub scroll_top: f64,
    /// Visible rows in the pane.
    pub viewport_rows: usize,
    /// Whether the pane is the whole viewport.
    pub viewport_scrolling: bool,
}

impl<'a> PageLayout<'a> {
    #[must_use]
    /// Lay out `doc`, hiding the sections under the headings in `folded`.
    ///
    /// A folded heading hides everything after it up to the next heading of the same or a
    /// higher rank, or the next page rule.
    pub fn compute(doc: &'a Document, folded: &HashSet<usize>, line_height: f64) -> Self {
        let mut spans = Vec::with_capacity(doc.blocks.len());
        let mut row = 0;
        let mut fold_rank: Option<u8> = None;

        for (node, block) in doc.blocks.iter().enumerate() {
            match (block, fold_rank) {
                (Block::Heading { level, .. }, Some(rank)) if *level <= rank => fold_rank = None,
                (Block::Rule, Some(_)) => fold_rank = None,
                _ => {}
            }

            if fold_rank.is_some() {
                spans.push(None);
                continue;
            }

            let height = block_height(block);
            spans.push(Some(RowSpan { start: row, height }));
            row += height;

            if let Block::Heading { level, .. } = block {
                if folded.contains(&node) {
                    fold_rank = Some(*level);
                }
            }
        }

        Self {
            doc,
            spans,
            total_rows: row,
            line_height,
            origin: 0.0,
            scroll_top: 0.0,
            viewport_rows: 0,
            viewport_scrolling: false,
        }
    }

    #[must_use]
    /// Rows of block `node`, `None` when hidden or out of range.
    pub fn span(&self, node: usize) -> Option<RowSpan> {
        self.spans.get(node).copied().flatten()
    }

    #[must_use]
    /// Total rows of all visible blocks.
    pub fn total_rows(&self) -> usize {
        self.total_rows
    }

    #[must_use]
    /// Block rendered at content row `row`.
    pub fn block_at_row(&self, row: usize) -> Option<usize> {
        self.spans.iter().position(|span| {
            span.is_some_and(|s| row >= s.start && row < s.start + s.height)
        })
    }

    #[must_use]
    /// Pixel offset that scrolls block `node` to the top of the pane.
    pub fn scroll_offset_of(&self, node: usize) -> Option<f64> {
        self.span(node).map(|s| self.rows_to_px(s.start))
    }

    #[must_use]
    /// Convert a row count to pixels.
    #[allow(clippy::cast_precision_loss)]
    pub fn rows_to_px(&self, rows: usize) -> f64 {
        rows as f64 * self.line_height
    }

    fn block_of(node: NodeRef) -> usize {
        match node {
            NodeRef::Block(i) | NodeRef::Anchor(i) => i,
        }
    }
}

impl Layout for PageLayout<'_> {
    fn find_by_id(&self, id: &str) -> Option<NodeRef> {
        self.doc.find_by_id(id)
    }

    fn parent(&self, node: NodeRef) -> Option<NodeRef> {
        self.doc.parent(node)
    }

    fn is_visible(&self, node: NodeRef) -> bool {
        // Anchors are empty inline elements and never take up space.
        matches!(node, NodeRef::Block(i) if self.span(i).is_some())
    }

    fn offset_top(&self, node: NodeRef) -> f64 {
        let row = self.span(Self::block_of(node)).map_or(0, |s| s.start);
        self.origin + self.rows_to_px(row)
    }

    fn position_top(&self, node: NodeRef) -> f64 {
        let row = self.span(Self::block_of(node)).map_or(0, |s| s.start);
        self.rows_to_px(row) - self.scroll_top
    }

    fn scrolls_viewport(&self) -> bool {
        self.viewport_scrolling
    }

    fn scroll_top(&self) -> f64 {
        self.scroll_top
    }

    fn scroll_height(&self) -> f64 {
        self.rows_to_px(self.total_rows)
    }

    fn viewport_height(&self) -> f64 {
        self.rows_to_px(self.viewport_rows)
    }
}

#[cfg(test)]
#[path = "tests/layout.rs"]
mod tests;
