//! Error types for headnum operations.
//!
//! Most anomalies in a document are not errors: unrecognised heading lines are logged and
//! skipped, and invalid settings values fall back silently. The variants here cover the cases
//! that abort an operation.

use thiserror::Error;

/// Failures that abort a headnum operation.
#[derive(Error, Debug)]
pub enum Error {
    /// Reading or writing a document failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The markdown grammar could not be loaded or the document could not be parsed.
    #[error("Parse error: {0}")]
    Parse(String),

    /// A tree-sitter query failed to compile.
    #[error("Query error: {0}")]
    Query(#[from] tree_sitter::QueryError),

    /// An edit plan referenced a range outside the document or overlapping another edit.
    ///
    /// The whole plan is rejected before any text is changed.
    #[error("Invalid edit: {0}")]
    InvalidEdit(String),

    /// A textum patch could not be applied to the document text.
    #[error("Patch error: {0}")]
    Patch(#[from] textum::PatchError),

    /// The front matter declares the `number headings` key but no line carries it.
    #[error("front matter starting at line {start_line} has a `number headings` entry but no matching line")]
    MissingDirectiveLine {
        /// Line of the opening `---` delimiter.
        start_line: usize,
    },

    /// Serialising output failed.
    #[error("Serialize error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;
