//! Decorated heading representation.
//!
//! A heading is a section title at one of the two levels that take part in navigation:
//! primary headings become top-level sidebar entries, secondary headings are nested under the
//! nearest preceding primary heading. The original text and slug are captured once, when the
//! heading is first seen, and never change afterwards.

use crate::document::{Block, Document};
use crate::slug::slugify;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Role of a heading in the two-level navigation hierarchy.
pub enum HeadingLevel {
    /// Top-level sidebar entry.
    Primary,
    /// Nested under the preceding primary heading.
    Secondary,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Which heading ranks are primary and secondary.
pub struct HeadingLevels {
    /// Rank of primary headings (`2` for `<h2>` / `##`).
    pub primary: u8,
    /// Rank of secondary headings.
    pub secondary: u8,
}

impl Default for HeadingLevels {
    fn default() -> Self {
        Self {
            primary: 2,
            secondary: 3,
        }
    }
}

impl HeadingLevels {
    #[must_use]
    /// Classify a heading rank, `None` for ranks outside the navigation hierarchy.
    pub fn classify(&self, rank: u8) -> Option<HeadingLevel> {
        if rank == self.primary {
            Some(HeadingLevel::Primary)
        } else if rank == self.secondary {
            Some(HeadingLevel::Secondary)
        } else {
            None
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// A navigation heading with its immutable text and slug.
pub struct Heading {
    /// Heading text before any decoration.
    pub text: String,
    /// Fragment identifier derived from `text`.
    pub slug: String,
    /// Primary or secondary.
    pub level: HeadingLevel,
    /// Block index of the heading in its document.
    pub node: usize,
    /// Index (into the heading list) of the enclosing primary heading.
    pub parent_index: Option<usize>,
}

impl Heading {
    #[must_use]
    /// Fragment link to this heading.
    pub fn href(&self) -> String {
        format!("#{}", self.slug)
    }
}

#[must_use]
/// Collect navigation headings in document order.
///
/// A secondary heading belongs to the nearest preceding primary heading of the same section.
/// Higher-ranked headings and page rules close the current section, so a secondary heading
/// that follows one of them has no parent.
pub fn collect_headings(doc: &Document, levels: HeadingLevels) -> Vec<Heading> {
    let mut headings: Vec<Heading> = Vec::new();
    let mut current_primary: Option<usize> = None;

    for (node, block) in doc.blocks.iter().enumerate() {
        let rank = match block {
            Block::Heading { level, .. } => *level,
            Block::Rule => {
                current_primary = None;
                continue;
            }
            Block::Text { .. } => continue,
        };

        let Some(level) = levels.classify(rank) else {
            if rank < levels.primary {
                current_primary = None;
            }
            continue;
        };

        let text = doc.heading_text(node).unwrap_or_default();
        let parent_index = match level {
            HeadingLevel::Primary => {
                current_primary = Some(headings.len());
                None
            }
            HeadingLevel::Secondary => current_primary,
        };

        headings.push(Heading {
            slug: slugify(&text),
            text,
            level,
            node,
            parent_index,
        });
    }

    headings
}

#[cfg(test)]
#[path = "tests/heading.rs"]
mod tests;
