//! Markdown format implementation using tree-sitter-md.
//!
//! This module provides tree-sitter queries for parsing markdown documents
//! and extracting headings from both ATX-style (`#` syntax) and setext-style
//! (underlined) headings.

use crate::formats::Format;
use tree_sitter::{Node, Parser};

/// Tree-sitter queries for ATX and setext markdown headings.
pub struct MarkdownFormat;

impl Format for MarkdownFormat {
    fn file_extension(&self) -> &'static str {
        "md"
    }

    fn language(&self) -> tree_sitter::Language {
        tree_sitter_md::LANGUAGE.into()
    }

    fn heading_query(&self) -> &'static str {
        "[(atx_heading) (setext_heading)] @heading"
    }

    fn heading_level(&self, node: Node) -> Option<u8> {
        let mut cursor = node.walk();
        let level = node.children(&mut cursor).find_map(|child| match child.kind() {
            "setext_h1_underline" => Some(1),
            "setext_h2_underline" => Some(2),
            kind => kind
                .strip_prefix("atx_h")
                .and_then(|rest| rest.strip_suffix("_marker"))
                .and_then(|digit| digit.parse().ok()),
        });
        level
    }

    fn heading_title(&self, node: Node, source: &str) -> Option<String> {
        let mut cursor = node.walk();
        let content = node
            .children(&mut cursor)
            .find(|child| matches!(child.kind(), "inline" | "paragraph"))?;
        let raw = source.get(content.start_byte()..content.end_byte())?;
        let raw = if node.kind() == "atx_heading" {
            strip_closing_sequence(raw)
        } else {
            raw
        };
        Some(plain_text(raw))
    }
}

/// Drop an ATX closing sequence: trailing `#`s preceded by whitespace, or nothing but `#`s.
fn strip_closing_sequence(raw: &str) -> &str {
    let trimmed = raw.trim_end();
    let stripped = trimmed.trim_end_matches('#');
    let closed = stripped.is_empty() || stripped.ends_with([' ', '\t']);
    if stripped.len() < trimmed.len() && closed {
        stripped.trim_end()
    } else {
        trimmed
    }
}

/// Render heading markup to its visible text with the inline grammar.
///
/// Falls back to the raw text when the inline grammar is unavailable.
fn plain_text(raw: &str) -> String {
    let mut parser = Parser::new();
    let tree = parser
        .set_language(&tree_sitter_md::INLINE_LANGUAGE.into())
        .ok()
        .and_then(|()| parser.parse(raw, None));

    let mut text = String::new();
    match tree {
        Some(tree) => collect_text(tree.root_node(), raw, &mut text),
        None => text.push_str(raw),
    }
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn collect_text(node: Node, source: &str, out: &mut String) {
    let node_text = || source.get(node.start_byte()..node.end_byte()).unwrap_or_default();

    match node.kind() {
        "emphasis_delimiter" | "code_span_delimiter" | "link_destination" | "link_title"
        | "link_label" | "html_tag" => return,
        "inline_link" | "full_reference_link" | "collapsed_reference_link" | "shortcut_link"
        | "image" => {
            let mut cursor = node.walk();
            for child in node.children(&mut cursor) {
                if matches!(child.kind(), "link_text" | "image_description") {
                    collect_text(child, source, out);
                }
            }
            return;
        }
        "backslash_escape" => {
            let escaped = node_text();
            out.push_str(escaped.strip_prefix('\\').unwrap_or(escaped));
            return;
        }
        "uri_autolink" | "email_autolink" => {
            out.push_str(node_text().trim_start_matches('<').trim_end_matches('>'));
            return;
        }
        "hard_line_break" => {
            out.push(' ');
            return;
        }
        _ => {}
    }

    let in_link_text = matches!(node.kind(), "link_text" | "image_description");
    let mut pos = node.start_byte();
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        out.push_str(source.get(pos..child.start_byte()).unwrap_or_default());
        let bracket = !child.is_named() && matches!(child.kind(), "[" | "]" | "![");
        if !(in_link_text && bracket) {
            collect_text(child, source, out);
        }
        pos = child.end_byte();
    }
    out.push_str(source.get(pos..node.end_byte()).unwrap_or_default());
}

#[cfg(test)]
#[path = "../tests/markdown.rs"]
mod tests;
