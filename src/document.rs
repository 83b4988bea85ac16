//! Line-addressed access to a document and its headings.
//!
//! The numbering, contents and settings passes only read lines and headings through
//! [`DocumentAccessor`], and hand their results back as an [`EditPlan`]. [`MarkdownDocument`]
//! is the in-memory implementation backed by a tree-sitter heading parse.

use crate::edit_plan::{EditPlan, Position};
use crate::error::Result;
use crate::formats::markdown::MarkdownFormat;
use crate::heading::Heading;
use crate::input;

/// Read access to lines and headings, plus atomic application of edit plans.
pub trait DocumentAccessor {
    /// Text of the line at `index`, without its line terminator.
    fn line(&self, index: usize) -> Option<&str>;

    /// Number of lines, counting a trailing empty line after a final newline.
    fn line_count(&self) -> usize;

    /// Headings in document order.
    fn headings(&self) -> &[Heading];

    /// Applies every edit in `plan` or none of them.
    ///
    /// # Errors
    ///
    /// Returns an error if any edit is invalid against the current text, in which case the
    /// document is unchanged.
    fn apply(&mut self, plan: &EditPlan) -> Result<()>;

    /// Current text between two positions, or `None` if the range is out of bounds.
    fn text_in_range(&self, from: Position, to: Position) -> Option<String> {
        if from.line == to.line {
            return self
                .line(from.line)?
                .get(from.ch..to.ch)
                .map(str::to_string);
        }
        if from.line > to.line {
            return None;
        }
        let mut text = self.line(from.line)?.get(from.ch..)?.to_string();
        for index in from.line + 1..to.line {
            text.push('\n');
            text.push_str(self.line(index)?);
        }
        text.push('\n');
        text.push_str(self.line(to.line)?.get(..to.ch)?);
        Some(text)
    }
}

#[derive(Clone, Debug)]
/// A markdown document held as lines, with headings re-parsed after every applied plan.
pub struct MarkdownDocument {
    lines: Vec<String>,
    headings: Vec<Heading>,
}

impl MarkdownDocument {
    /// Parses `source` and extracts its ATX and setext headings.
    ///
    /// # Errors
    ///
    /// Returns an error if the markdown grammar cannot be loaded or the parse fails.
    pub fn parse(source: &str) -> Result<Self> {
        let headings = input::extract_headings(source, &MarkdownFormat)?;
        Ok(Self {
            lines: source.split('\n').map(str::to_string).collect(),
            headings,
        })
    }

    #[must_use]
    /// Full document text, line terminators restored.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

impl DocumentAccessor for MarkdownDocument {
    fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn headings(&self) -> &[Heading] {
        &self.headings
    }

    fn apply(&mut self, plan: &EditPlan) -> Result<()> {
        if plan.is_empty() {
            return Ok(());
        }
        let mut lines = self.lines.clone();
        plan.apply_to_lines(&mut lines)?;
        let headings = input::extract_headings(&lines.join("\n"), &MarkdownFormat)?;
        self.lines = lines;
        self.headings = headings;
        tracing::debug!(edits = plan.len(), "applied edit plan");
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/document.rs"]
mod tests;
