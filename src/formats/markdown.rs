//! Markdown headings via tree-sitter-md.
//!
//! Both ATX (`#` syntax) and setext (underlined) headings are captured, so every heading takes
//! its place in the outline. Only ATX headings have a marker run that numbering can rewrite.

use crate::formats::Format;

/// Heading extraction for the tree-sitter-md block grammar.
pub struct MarkdownFormat;

impl Format for MarkdownFormat {
    fn language(&self) -> tree_sitter::Language {
        tree_sitter_md::LANGUAGE.into()
    }

    fn heading_query(&self) -> &'static str {
        "[(atx_heading) (setext_heading)] @heading"
    }

    fn heading_level(&self, node: tree_sitter::Node<'_>) -> Option<usize> {
        let mut cursor = node.walk();
        let level = node.children(&mut cursor).find_map(|child| {
            let kind = child.kind();
            kind.strip_prefix("atx_h")
                .and_then(|rest| rest.strip_suffix("_marker"))
                .or_else(|| {
                    kind.strip_prefix("setext_h")
                        .and_then(|rest| rest.strip_suffix("_underline"))
                })?
                .parse()
                .ok()
        });
        level
    }

    fn heading_text(&self, node: tree_sitter::Node<'_>, source: &[u8]) -> String {
        let mut cursor = node.walk();
        let text = node
            .children(&mut cursor)
            .find(|child| matches!(child.kind(), "inline" | "paragraph"))
            .and_then(|content| content.utf8_text(source).ok())
            .map(|text| text.trim().to_string())
            .unwrap_or_default();
        text
    }
}
