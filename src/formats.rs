//! Format trait and implementations for different document types.
//!
//! This module defines the `Format` trait which abstracts over different
//! document formats by providing the tree-sitter grammar and heading query
//! for each one, plus how to read a heading's rank and title from a match.

pub mod markdown;

/// Grammar and heading extraction rules for one source format.
pub trait Format {
    /// Default file suffix for this format.
    fn file_extension(&self) -> &'static str;
    /// Tree-sitter grammar.
    fn language(&self) -> tree_sitter::Language;
    /// Query capturing every heading node as `@heading`.
    fn heading_query(&self) -> &str;
    /// Rank (1-6) of a captured heading node.
    fn heading_level(&self, node: tree_sitter::Node) -> Option<u8>;
    /// Plain title text of a captured heading node, as a reader would see it rendered.
    fn heading_title(&self, node: tree_sitter::Node, source: &str) -> Option<String>;
}
