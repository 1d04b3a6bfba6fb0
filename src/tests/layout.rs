use super::{block_height, PageLayout, RowSpan};
use crate::document::{Block, Document, NodeRef};
use crate::scrollspy::Layout;
use std::collections::HashSet;

fn page() -> Document {
    let mut doc = Document::new("Guide");
    doc.push_heading(2, "Getting Started");
    doc.push_heading(3, "Install");
    doc.push_text(["one", "two", "three"]);
    doc.push_heading(2, "Usage");
    doc
}

#[test]
fn test_block_heights() {
    assert_eq!(block_height(&Block::Rule), 2);
    assert_eq!(
        block_height(&Block::Text {
            lines: vec!["a".to_string(), "b".to_string()]
        }),
        3
    );
}

#[test]
fn test_rows_stack_in_document_order() {
    let doc = page();
    let layout = PageLayout::compute(&doc, &HashSet::new(), 20.0);

    assert_eq!(layout.span(0), Some(RowSpan { start: 0, height: 2 }));
    assert_eq!(layout.span(2), Some(RowSpan { start: 4, height: 4 }));
    assert_eq!(layout.span(3), Some(RowSpan { start: 8, height: 2 }));
    assert_eq!(layout.total_rows(), 10);
    assert_eq!(layout.block_at_row(5), Some(2));
    assert_eq!(layout.block_at_row(10), None);
    assert_eq!(layout.scroll_offset_of(3), Some(160.0));
}

#[test]
fn test_folded_section_is_hidden_until_next_primary() {
    let doc = page();
    let folded: HashSet<usize> = [0].into_iter().collect();
    let layout = PageLayout::compute(&doc, &folded, 20.0);

    assert!(layout.is_visible(NodeRef::Block(0)));
    assert!(!layout.is_visible(NodeRef::Block(1)));
    assert!(!layout.is_visible(NodeRef::Block(2)));
    assert_eq!(layout.span(3), Some(RowSpan { start: 2, height: 2 }));
    assert_eq!(layout.total_rows(), 4);
}

#[test]
fn test_anchor_is_never_visible_but_resolves_to_heading() {
    let doc = page();
    let layout = PageLayout::compute(&doc, &HashSet::new(), 20.0);

    assert!(!layout.is_visible(NodeRef::Anchor(0)));
    assert_eq!(layout.parent(NodeRef::Anchor(3)), Some(NodeRef::Block(3)));
}

#[test]
fn test_offsets_and_positions() {
    let doc = page();
    let mut layout = PageLayout::compute(&doc, &HashSet::new(), 20.0);
    layout.origin = 60.0;
    layout.scroll_top = 100.0;
    layout.viewport_rows = 3;

    assert!((layout.offset_top(NodeRef::Block(3)) - 220.0).abs() < f64::EPSILON);
    assert!((layout.position_top(NodeRef::Block(3)) - 60.0).abs() < f64::EPSILON);
    assert!((layout.scroll_height() - 200.0).abs() < f64::EPSILON);
    assert!((layout.viewport_height() - 60.0).abs() < f64::EPSILON);
    assert!(!layout.scrolls_viewport());
}
