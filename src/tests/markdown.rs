use super::MarkdownFormat;
use crate::formats::Format;
use crate::decorate::Decorator;
use crate::heading::HeadingLevels;
use crate::input::parse_document;
use crate::sidebar::SidebarBuilder;

#[test]
fn test_atx_heading_levels_and_titles() {
    let source = "# Guide\n\n## Getting Started\n\nText.\n\n### Install\n";
    let doc = parse_document(source, "guide", &MarkdownFormat).unwrap();

    let headings: Vec<(u8, String)> = (0..doc.blocks.len())
        .filter_map(|i| Some((doc.heading_level(i)?, doc.heading_text(i)?)))
        .collect();
    assert_eq!(
        headings,
        [
            (1, "Guide".to_string()),
            (2, "Getting Started".to_string()),
            (3, "Install".to_string()),
        ]
    );
}

#[test]
fn test_setext_headings() {
    let source = "Title\n=====\n\nSection\n-------\n\nbody\n";
    let doc = parse_document(source, "setext", &MarkdownFormat).unwrap();

    assert_eq!(doc.heading_level(0), Some(1));
    assert_eq!(doc.heading_text(0).as_deref(), Some("Title"));
    assert_eq!(doc.heading_level(1), Some(2));
    assert_eq!(doc.heading_text(1).as_deref(), Some("Section"));
}

#[test]
fn test_format_metadata() {
    assert_eq!(MarkdownFormat.file_extension(), "md");
    assert!(MarkdownFormat.heading_query().contains("atx_heading"));
}

fn titles(source: &str) -> Vec<String> {
    let doc = parse_document(source, "page", &MarkdownFormat).unwrap();
    (0..doc.blocks.len()).filter_map(|i| doc.heading_text(i)).collect()
}

#[test]
fn test_atx_closing_sequence_is_dropped() {
    assert_eq!(
        titles("## Closing ##\n\n### Spaced   ###   \n\n## Not # closing\n\n## C#\n"),
        ["Closing", "Spaced", "Not # closing", "C#"]
    );
}

#[test]
fn test_inline_markup_renders_to_plain_text() {
    let source = "## [Foo](http://x.y)\n\n## `code` and *emph*\n\n## **Bold** ![alt](img.png) \\*star\n";
    assert_eq!(
        titles(source),
        ["Foo", "code and emph", "Bold alt *star"]
    );
}

#[test]
fn test_slug_and_label_come_from_rendered_text() {
    let source = "## [Getting Started](#intro) ##\n\n### `cargo install`\n";
    let mut doc = parse_document(source, "page", &MarkdownFormat).unwrap();
    let decorator = Decorator::decorate(&mut doc, HeadingLevels::default());
    let sidebar = SidebarBuilder::build(decorator.headings());

    assert_eq!(sidebar.entries[0].label, "Getting Started");
    assert_eq!(sidebar.entries[0].href, "#getting-started");
    let child = sidebar.entries[0].children.as_ref().map(|c| c[0].href.as_str());
    assert_eq!(child, Some("#cargo-install"));
}
