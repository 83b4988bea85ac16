//! Reading documents from disk, extracting their headings, and writing them back.

use crate::document::MarkdownDocument;
use crate::error::{Error, Result};
use crate::formats::Format;
use crate::heading::Heading;
use std::fs;
use std::io::Write;
use std::path::Path;
use streaming_iterator::StreamingIterator;
use tree_sitter::{Parser, Query, QueryCursor};

/// Extracts headings from `source` in document order.
///
/// # Errors
///
/// Returns an error if the grammar cannot be loaded, the query does not compile, or the parse
/// fails.
pub fn extract_headings<F: Format + ?Sized>(source: &str, format: &F) -> Result<Vec<Heading>> {
    let language = format.language();
    let mut parser = Parser::new();
    parser
        .set_language(&language)
        .map_err(|e| Error::Parse(format!("Failed to set language: {e}")))?;
    let tree = parser
        .parse(source, None)
        .ok_or_else(|| Error::Parse("Failed to parse document".into()))?;

    let query = Query::new(&language, format.heading_query())?;
    let mut cursor = QueryCursor::new();
    let bytes = source.as_bytes();
    let mut matches = cursor.matches(&query, tree.root_node(), bytes);

    let mut headings = Vec::new();
    while let Some(query_match) = matches.next() {
        for capture in query_match.captures {
            let node = capture.node;
            let Some(level) = format.heading_level(node) else {
                tracing::debug!(row = node.start_position().row, "heading without level marker");
                continue;
            };
            let start = node.start_position();
            headings.push(Heading {
                level,
                text: format.heading_text(node, bytes),
                line: start.row,
                column: start.column,
            });
        }
    }

    headings.sort_by_key(|heading| (heading.line, heading.column));
    Ok(headings)
}

/// Reads and parses a markdown document.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn read_document(path: &Path) -> Result<MarkdownDocument> {
    let source = fs::read_to_string(path)?;
    let document = MarkdownDocument::parse(&source)?;
    tracing::debug!(path = %path.display(), "read document");
    Ok(document)
}

/// Replaces the file at `path` with the document text.
///
/// The text is written to a temporary file next to the target and renamed over it, so readers
/// never observe a partially written document.
///
/// # Errors
///
/// Returns an error if the temporary file cannot be written or persisted.
pub fn write_document(path: &Path, document: &MarkdownDocument) -> Result<()> {
    let directory = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let mut file = tempfile::NamedTempFile::new_in(directory)?;
    file.write_all(document.text().as_bytes())?;
    file.flush()?;
    file.persist(path).map_err(|e| e.error)?;
    tracing::info!(path = %path.display(), "wrote document");
    Ok(())
}

#[cfg(test)]
#[path = "tests/input.rs"]
mod tests;
