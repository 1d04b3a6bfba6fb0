use super::{find_documents, load_document, parse_document};
use crate::document::Block;
use crate::formats::markdown::MarkdownFormat;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_body_text_between_headings() {
    let source = "Intro line\n\n## Getting Started\n\nFirst.\n\nSecond.\n\n## Usage\n";
    let doc = parse_document(source, "guide", &MarkdownFormat).unwrap();

    assert_eq!(doc.title, "guide", "no rank-1 heading, file name is the title");
    assert_eq!(
        doc.blocks[0],
        Block::Text {
            lines: vec!["Intro line".to_string()]
        }
    );
    assert_eq!(doc.heading_text(1).as_deref(), Some("Getting Started"));
    assert_eq!(
        doc.blocks[2],
        Block::Text {
            lines: vec!["First.".to_string(), String::new(), "Second.".to_string()]
        }
    );
    assert_eq!(doc.heading_text(3).as_deref(), Some("Usage"));
    assert_eq!(doc.blocks.len(), 4);
}

#[test]
fn test_title_from_first_top_level_heading() {
    let doc = parse_document("# Handbook\n\n## Part\n", "file", &MarkdownFormat).unwrap();
    assert_eq!(doc.title, "Handbook");
}

#[test]
fn test_no_headings() {
    let doc = parse_document("just words\n", "notes", &MarkdownFormat).unwrap();
    assert_eq!(doc.blocks.len(), 1);
    assert!(doc.heading_level(0).is_none());
}

#[test]
fn test_find_documents_walks_sorted_and_filters() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("sub")).unwrap();
    fs::write(dir.path().join("b.md"), "## B\n").unwrap();
    fs::write(dir.path().join("a.md"), "## A\n").unwrap();
    fs::write(dir.path().join("notes.txt"), "skip").unwrap();
    fs::write(dir.path().join("sub").join("c.md"), "## C\n").unwrap();

    let found = find_documents(vec![dir.path().to_path_buf()], &["md".to_string()]).unwrap();
    let names: Vec<String> = found
        .iter()
        .filter_map(|p| p.strip_prefix(dir.path()).ok())
        .map(|p| p.to_string_lossy().replace('\\', "/"))
        .collect();
    assert_eq!(names, ["a.md", "b.md", "sub/c.md"]);
}

#[test]
fn test_explicit_file_is_kept_regardless_of_extension() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("README");
    fs::write(&path, "## Readme\n").unwrap();

    let found = find_documents(vec![path.clone()], &["md".to_string()]).unwrap();
    assert_eq!(found, [path.clone()]);

    let doc = load_document(&path, &MarkdownFormat).unwrap();
    assert_eq!(doc.title, "README");
    assert_eq!(doc.heading_text(0).as_deref(), Some("Readme"));
}

#[test]
fn test_missing_paths_are_skipped() {
    let dir = tempdir().unwrap();
    let found =
        find_documents(vec![dir.path().join("nope.md")], &["md".to_string()]).unwrap();
    assert!(found.is_empty());
}
