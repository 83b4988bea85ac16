//! Format trait and implementations for different document types.
//!
//! This module defines the `Format` trait which abstracts over the tree-sitter grammar used to
//! find headings, so that heading extraction does not depend on markdown node names directly.

pub mod markdown;

/// Grammar, query and node interpretation for one heading syntax.
pub trait Format {
    /// Tree-sitter language used to parse documents.
    fn language(&self) -> tree_sitter::Language;

    /// Query whose `@heading` captures are heading nodes.
    fn heading_query(&self) -> &str;

    /// Nesting level of a captured heading node, if it has a recognisable marker.
    fn heading_level(&self, node: tree_sitter::Node<'_>) -> Option<usize>;

    /// Display text of a captured heading node, without markup symbols.
    fn heading_text(&self, node: tree_sitter::Node<'_>, source: &[u8]) -> String;
}
