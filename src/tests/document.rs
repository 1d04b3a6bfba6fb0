use super::{escape_html, Block, Document, Inline, NodeRef};

fn sample() -> Document {
    let mut doc = Document::new("Guide");
    doc.push_heading(2, "Getting Started");
    doc.push_text(["Read this first.", "", "Then this."]);
    doc.push_heading(3, "Install");
    doc
}

#[test]
fn test_heading_text_ignores_decoration() {
    let mut doc = sample();
    if let Some(content) = doc.content_mut(0) {
        content.push(Inline::Anchor {
            id: "getting-started".to_string(),
        });
        content.push(Inline::LinkIcon {
            href: "#getting-started".to_string(),
        });
    }
    assert_eq!(doc.heading_text(0).as_deref(), Some("Getting Started"));
    assert_eq!(doc.heading_text(1), None, "text blocks are not headings");
}

#[test]
fn test_find_by_id_returns_first_match() {
    let mut doc = sample();
    for node in [0, 2] {
        if let Some(content) = doc.content_mut(node) {
            content.push(Inline::Anchor {
                id: "dup".to_string(),
            });
        }
    }
    assert_eq!(doc.find_by_id("dup"), Some(NodeRef::Anchor(0)));
    assert_eq!(doc.find_by_id("missing"), None);
}

#[test]
fn test_anchor_parent_is_heading_block() {
    let doc = sample();
    assert_eq!(doc.parent(NodeRef::Anchor(2)), Some(NodeRef::Block(2)));
    assert_eq!(doc.parent(NodeRef::Block(2)), None);
    assert_eq!(doc.parent(NodeRef::Anchor(99)), None);
}

#[test]
fn test_append_inserts_rule_between_pages() {
    let mut doc = sample();
    let mut other = Document::new("Other");
    other.push_heading(2, "Usage");
    doc.append(other);
    assert_eq!(doc.blocks.len(), 5);
    assert_eq!(doc.blocks[3], Block::Rule);
    assert_eq!(doc.heading_level(4), Some(2));

    let mut empty = Document::new("Empty");
    empty.append(sample());
    assert_eq!(empty.blocks.len(), 3, "no leading rule on an empty page");
}

#[test]
fn test_to_html_renders_decoration_and_paragraphs() {
    let mut doc = sample();
    if let Some(content) = doc.content_mut(0) {
        content.push(Inline::Anchor {
            id: "getting-started".to_string(),
        });
    }
    let html = doc.to_html();
    assert!(html.contains(
        r##"<h2>Getting Started<a id="getting-started" href="#" class="a-link"></a></h2>"##
    ));
    assert!(html.contains("<p>Read this first.</p>"));
    assert!(html.contains("<p>Then this.</p>"));
    assert!(html.contains("<h3>Install</h3>"));
}

#[test]
fn test_escape_html() {
    assert_eq!(
        escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
        "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
    );
}
