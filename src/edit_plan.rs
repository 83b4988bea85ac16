//! The edit plan batches document modifications into one atomic transaction.
//!
//! Numbering, table-of-contents and settings passes never touch the document directly. They
//! collect [`Edit`]s into an [`EditPlan`], dropping any edit whose replacement equals the text
//! already in its range, and the document applies the plan in one step.

use crate::document::DocumentAccessor;
use crate::error::{Error, Result};
use ropey::Rope;
use serde::{Deserialize, Serialize};
use textum::{Boundary, BoundaryMode, Patch, Snippet, Target};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
/// A location inside a document.
pub struct Position {
    /// Zero-based line index.
    pub line: usize,
    /// Zero-based byte offset within the line.
    pub ch: usize,
}

impl Position {
    #[must_use]
    /// Creates a position from a line and byte column.
    pub const fn new(line: usize, ch: usize) -> Self {
        Self { line, ch }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
/// Replacement of the text between two positions.
pub struct Edit {
    /// Start of the replaced range (inclusive).
    pub from: Position,
    /// End of the replaced range (exclusive).
    pub to: Position,
    /// New content for the range.
    pub text: String,
    /// Heading or operation the edit belongs to, for tracking and debugging.
    pub label: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
/// Serialisable collection of edits applied as a single transaction.
pub struct EditPlan {
    /// Individual range replacements, in the order they were computed.
    pub edits: Vec<Edit>,
}

impl EditPlan {
    #[must_use]
    /// Creates an empty plan.
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    /// Whether the plan would leave the document unchanged.
    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }

    #[must_use]
    /// Number of edits in the plan.
    pub fn len(&self) -> usize {
        self.edits.len()
    }

    /// Queues a replacement unless `text` already occupies the range.
    ///
    /// Returns whether the edit was queued.
    pub fn replace<D: DocumentAccessor + ?Sized>(
        &mut self,
        doc: &D,
        from: Position,
        to: Position,
        text: impl Into<String>,
        label: impl Into<String>,
    ) -> bool {
        let text = text.into();
        let label = label.into();
        if doc.text_in_range(from, to).as_deref() == Some(text.as_str()) {
            tracing::trace!(line = from.line, %label, "skipping no-op edit");
            return false;
        }
        self.edits.push(Edit {
            from,
            to,
            text,
            label,
        });
        true
    }

    /// Applies every edit to a line buffer.
    ///
    /// All ranges are resolved against the original text before anything changes, so a plan with
    /// an out-of-range or overlapping edit leaves `lines` untouched. Each edit becomes one textum
    /// patch, applied to a rope from the highest offset down.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidEdit`] if a position lies outside the buffer, splits a character,
    /// runs backwards, or overlaps another edit, and [`Error::Patch`] if a patch fails to apply.
    pub fn apply_to_lines(&self, lines: &mut Vec<String>) -> Result<()> {
        if self.edits.is_empty() {
            return Ok(());
        }

        let mut line_offsets = Vec::with_capacity(lines.len());
        let mut total = 0;
        for line in lines.iter() {
            line_offsets.push(total);
            total += line.len() + 1;
        }

        let mut spans = self
            .edits
            .iter()
            .enumerate()
            .map(|(index, edit)| {
                let start = byte_offset(lines, &line_offsets, edit.from)?;
                let end = byte_offset(lines, &line_offsets, edit.to)?;
                if start > end {
                    return Err(Error::InvalidEdit(format!(
                        "range for '{}' ends before it starts",
                        edit.label
                    )));
                }
                Ok((start, end, index))
            })
            .collect::<Result<Vec<_>>>()?;

        spans.sort_unstable();
        for pair in spans.windows(2) {
            if pair[0].1 > pair[1].0 {
                return Err(Error::InvalidEdit(format!(
                    "edits for '{}' and '{}' overlap",
                    self.edits[pair[0].2].label, self.edits[pair[1].2].label
                )));
            }
        }

        let mut rope = Rope::from_str(&lines.join("\n"));
        let ranges: Vec<(usize, usize, usize)> = spans
            .iter()
            .map(|&(start, end, index)| (rope.byte_to_char(start), rope.byte_to_char(end), index))
            .collect();
        for &(start, end, index) in ranges.iter().rev() {
            let edit = &self.edits[index];
            let patch = Patch {
                file: edit.label.clone(),
                snippet: char_snippet(&rope, start, end),
                replacement: edit.text.clone(),
            };
            patch.apply(&mut rope)?;
        }

        *lines = rope.to_string().split('\n').map(str::to_string).collect();
        Ok(())
    }
}

fn byte_offset(lines: &[String], line_offsets: &[usize], position: Position) -> Result<usize> {
    let line = lines.get(position.line).ok_or_else(|| {
        Error::InvalidEdit(format!("line {} is past the end of the document", position.line))
    })?;
    if position.ch > line.len() || !line.is_char_boundary(position.ch) {
        return Err(Error::InvalidEdit(format!(
            "column {} is not a valid offset in line {}",
            position.ch, position.line
        )));
    }
    Ok(line_offsets[position.line] + position.ch)
}

/// Snippet covering the char range `start..end` of the current `rope`.
///
/// Char targets only address existing characters, so an offset at the end of the rope is
/// expressed through the boundary of its last character.
fn char_snippet(rope: &Rope, start: usize, end: usize) -> Snippet {
    let len = rope.len_chars();
    if len == 0 {
        return Snippet::All;
    }
    let start = if start < len {
        Boundary::new(Target::Char(start), BoundaryMode::Include)
    } else {
        Boundary::new(Target::Char(len - 1), BoundaryMode::Exclude)
    };
    let end = if end < len {
        Boundary::new(Target::Char(end), BoundaryMode::Exclude)
    } else {
        Boundary::new(Target::Char(len - 1), BoundaryMode::Include)
    };
    Snippet::Between { start, end }
}

#[cfg(test)]
#[path = "tests/edit_plan.rs"]
mod tests;
