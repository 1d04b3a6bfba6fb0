//! Heading anchors and hover deep links.
//!
//! Every navigation heading gets an empty anchor carrying its slug, appended to the heading
//! content exactly once. While the pointer is over a heading a link icon pointing at that anchor
//! is appended as well; leaving the heading removes the icon again and leaves the anchor in
//! place.

use crate::document::{Document, Inline};
use crate::heading::{collect_headings, Heading, HeadingLevels};
use std::collections::HashSet;

/// Owns the decorated headings of a page and their hover state.
pub struct Decorator {
    headings: Vec<Heading>,
    hovered: HashSet<usize>,
}

impl Decorator {
    /// Attach slug anchors to every navigation heading of `doc`.
    ///
    /// Running this on a page that is already decorated leaves the page unchanged.
    pub fn decorate(doc: &mut Document, levels: HeadingLevels) -> Self {
        let headings = collect_headings(doc, levels);
        let mut attached = 0;

        for heading in &headings {
            if let Some(content) = doc.content_mut(heading.node) {
                if attach_anchor(content, &heading.slug) {
                    attached += 1;
                }
            }
        }

        log::debug!(
            "Decorated {attached} of {} headings in {:?}",
            headings.len(),
            doc.title
        );

        Self {
            headings,
            hovered: HashSet::new(),
        }
    }

    #[must_use]
    /// Decorated headings in document order.
    pub fn headings(&self) -> &[Heading] {
        &self.headings
    }

    #[must_use]
    /// Heading decorated at block `node`, if any.
    pub fn heading_at(&self, node: usize) -> Option<&Heading> {
        self.headings.iter().find(|h| h.node == node)
    }

    #[must_use]
    /// Whether the link icon is currently shown on block `node`.
    pub fn is_hovered(&self, node: usize) -> bool {
        self.hovered.contains(&node)
    }

    /// Pointer entered heading `node`: show its deep link icon.
    ///
    /// Returns whether the page changed. Nodes that are not decorated headings are ignored.
    pub fn pointer_enter(&mut self, doc: &mut Document, node: usize) -> bool {
        let Some(heading) = self.headings.iter().find(|h| h.node == node) else {
            return false;
        };
        if self.hovered.contains(&node) {
            return false;
        }
        let Some(content) = doc.content_mut(node) else {
            return false;
        };

        content.push(Inline::LinkIcon {
            href: heading.href(),
        });
        self.hovered.insert(node);
        true
    }

    /// Pointer left heading `node`: drop the deep link icon, keep the anchor.
    ///
    /// Returns whether the page changed.
    pub fn pointer_leave(&mut self, doc: &mut Document, node: usize) -> bool {
        if !self.hovered.remove(&node) {
            return false;
        }
        let Some(content) = doc.content_mut(node) else {
            return false;
        };

        let before = content.len();
        content.retain(|inline| !matches!(inline, Inline::LinkIcon { .. }));
        content.len() != before
    }
}

fn attach_anchor(content: &mut Vec<Inline>, slug: &str) -> bool {
    if content
        .iter()
        .any(|inline| matches!(inline, Inline::Anchor { .. }))
    {
        return false;
    }
    content.push(Inline::Anchor {
        id: slug.to_string(),
    });
    true
}

#[cfg(test)]
#[path = "tests/decorate.rs"]
mod tests;
