//! Heading representation for tree-sitter parsed documents.
//!
//! A heading is the structural marker of one outline entry. Headings are produced in document
//! order by the markdown parse and are read-only to the numbering and contents passes, which
//! locate the heading's line through the recorded start position.

#[derive(Clone, Debug, PartialEq, Eq)]
/// One heading with the coordinates needed to rewrite its prefix.
pub struct Heading {
    /// Nesting depth (1 for `#`, 2 for `##`, ...).
    pub level: usize,
    /// Heading text without markup symbols, including any existing numbering.
    pub text: String,
    /// Zero-based line of the heading in the source document.
    pub line: usize,
    /// Zero-based byte column where the heading starts.
    pub column: usize,
}

impl Heading {
    #[must_use]
    /// Creates a heading at column 0 of `line`.
    pub fn new(level: usize, text: impl Into<String>, line: usize) -> Self {
        Self {
            level,
            text: text.into(),
            line,
            column: 0,
        }
    }
}
