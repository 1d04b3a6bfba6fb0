//! Errors raised at the I/O and parsing boundary.
//!
//! The enhancement components themselves never fail: a missing heading, container or header
//! element just means nothing happens. Only reading sources, parsing them and writing output
//! can go wrong.

use thiserror::Error;

/// Failure while loading, parsing or exporting documentation pages.
#[derive(Error, Debug)]
pub enum Error {
    /// Reading a source or writing an export failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The tree-sitter grammar or heading query could not be loaded.
    #[error("Query failed: {0}")]
    Query(String),

    /// A source file produced no syntax tree.
    #[error("Could not parse {0}")]
    Parse(String),

    /// Sidebar serialisation failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<tree_sitter::LanguageError> for Error {
    fn from(e: tree_sitter::LanguageError) -> Self {
        Error::Query(e.to_string())
    }
}

impl From<tree_sitter::QueryError> for Error {
    fn from(e: tree_sitter::QueryError) -> Self {
        Error::Query(e.to_string())
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;
