//! Source discovery and parsing into documents.
//!
//! Paths given on the command line may be files or directories. Directories are walked
//! recursively and every file with a matching extension is kept, in sorted order so that pages
//! always appear in the same sequence. Each file is parsed with the tree-sitter grammar of its
//! format; headings become heading blocks and everything between them becomes text blocks.

use crate::document::Document;
use crate::error::{Error, Result};
use crate::formats::Format;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use streaming_iterator::StreamingIterator;
use tree_sitter::{Parser, Query, QueryCursor};

/// Expand `paths` into the list of source files with one of `extensions`.
///
/// # Errors
///
/// Returns an error if a directory cannot be read.
pub fn find_documents(paths: Vec<PathBuf>, extensions: &[String]) -> io::Result<Vec<PathBuf>> {
    let paths = if paths.is_empty() {
        vec![PathBuf::from(".")]
    } else {
        paths
    };

    let mut documents = Vec::new();
    for path in paths {
        if path.is_dir() {
            walk(&path, extensions, &mut documents)?;
        } else if path.is_file() {
            documents.push(path);
        } else {
            log::warn!("Skipping missing path {}", path.display());
        }
    }
    Ok(documents)
}

fn walk(dir: &Path, extensions: &[String], out: &mut Vec<PathBuf>) -> io::Result<()> {
    let mut entries: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .collect();
    entries.sort();

    for path in entries {
        if path.is_dir() {
            walk(&path, extensions, out)?;
        } else if has_extension(&path, extensions) {
            out.push(path);
        }
    }
    Ok(())
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.iter().any(|wanted| wanted == ext))
}

/// Read and parse one source file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_document(path: &Path, format: &impl Format) -> Result<Document> {
    let source = fs::read_to_string(path)?;
    let fallback_title = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    parse_document(&source, &fallback_title, format)
        .map_err(|e| match e {
            Error::Parse(_) => Error::Parse(path.display().to_string()),
            other => other,
        })
}

struct HeadingMatch {
    start_byte: usize,
    end_byte: usize,
    level: u8,
    title: String,
}

/// Parse `source` into a document.
///
/// The document title is the first rank-1 heading, or `fallback_title` when there is none.
///
/// # Errors
///
/// Returns an error if the grammar or query cannot be loaded or the source yields no tree.
pub fn parse_document(source: &str, fallback_title: &str, format: &impl Format) -> Result<Document> {
    let language = format.language();
    let mut parser = Parser::new();
    parser.set_language(&language)?;

    let tree = parser
        .parse(source, None)
        .ok_or_else(|| Error::Parse(fallback_title.to_string()))?;

    let query = Query::new(&language, format.heading_query())?;
    let mut cursor = QueryCursor::new();
    let mut matches = cursor.matches(&query, tree.root_node(), source.as_bytes());

    let mut headings = Vec::new();
    while let Some(m) = matches.next() {
        for capture in m.captures {
            let node = capture.node;
            let Some(level) = format.heading_level(node) else {
                continue;
            };
            headings.push(HeadingMatch {
                start_byte: node.start_byte(),
                end_byte: node.end_byte(),
                level,
                title: format.heading_title(node, source).unwrap_or_default(),
            });
        }
    }
    headings.sort_by_key(|h| h.start_byte);

    let title = headings
        .iter()
        .find(|h| h.level == 1)
        .map_or_else(|| fallback_title.to_string(), |h| h.title.clone());
    let mut doc = Document::new(title);

    let mut cursor_byte = 0;
    for heading in &headings {
        push_body(&mut doc, source.get(cursor_byte..heading.start_byte));
        doc.push_heading(heading.level, heading.title.clone());
        cursor_byte = heading.end_byte;
    }
    push_body(&mut doc, source.get(cursor_byte..));

    Ok(doc)
}

fn push_body(doc: &mut Document, body: Option<&str>) {
    let Some(body) = body else {
        return;
    };
    let lines: Vec<&str> = body.lines().collect();
    let Some(first) = lines.iter().position(|line| !line.trim().is_empty()) else {
        return;
    };
    let last = lines
        .iter()
        .rposition(|line| !line.trim().is_empty())
        .unwrap_or(first);
    doc.push_text(lines[first..=last].iter().copied());
}

#[cfg(test)]
#[path = "tests/input.rs"]
mod tests;
