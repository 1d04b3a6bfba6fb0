use super::{collect_headings, HeadingLevel, HeadingLevels};
use crate::document::Document;

#[test]
fn test_collects_primary_and_secondary_in_order() {
    let mut doc = Document::new("Guide");
    doc.push_heading(1, "Guide");
    doc.push_heading(2, "Getting Started");
    doc.push_heading(3, "Install");
    doc.push_text(["pip install it"]);
    doc.push_heading(4, "Too deep");
    doc.push_heading(2, "Usage");

    let headings = collect_headings(&doc, HeadingLevels::default());
    let slugs: Vec<&str> = headings.iter().map(|h| h.slug.as_str()).collect();
    assert_eq!(slugs, ["getting-started", "install", "usage"]);

    assert_eq!(headings[0].level, HeadingLevel::Primary);
    assert_eq!(headings[1].level, HeadingLevel::Secondary);
    assert_eq!(headings[1].parent_index, Some(0));
    assert_eq!(headings[1].node, 2);
    assert_eq!(headings[2].parent_index, None);
    assert_eq!(headings[1].href(), "#install");
}

#[test]
fn test_secondary_before_any_primary_has_no_parent() {
    let mut doc = Document::new("Guide");
    doc.push_heading(3, "Orphan");
    doc.push_heading(2, "Primary");
    doc.push_heading(3, "Child");

    let headings = collect_headings(&doc, HeadingLevels::default());
    assert_eq!(headings[0].parent_index, None);
    assert_eq!(headings[2].parent_index, Some(1));
}

#[test]
fn test_higher_rank_heading_closes_section() {
    let mut doc = Document::new("Guide");
    doc.push_heading(2, "Primary");
    doc.push_heading(1, "Next Chapter");
    doc.push_heading(3, "Stray");

    let headings = collect_headings(&doc, HeadingLevels::default());
    assert_eq!(headings.len(), 2);
    assert_eq!(headings[1].parent_index, None);
}

#[test]
fn test_custom_levels() {
    let mut doc = Document::new("Guide");
    doc.push_heading(1, "Top");
    doc.push_heading(2, "Nested");

    let levels = HeadingLevels {
        primary: 1,
        secondary: 2,
    };
    let headings = collect_headings(&doc, levels);
    assert_eq!(headings.len(), 2);
    assert_eq!(headings[1].parent_index, Some(0));
    assert_eq!(levels.classify(3), None);
}

#[test]
fn test_no_headings_is_valid() {
    let mut doc = Document::new("Empty");
    doc.push_text(["just text"]);
    assert!(collect_headings(&doc, HeadingLevels::default()).is_empty());
}
