//! Locating and decoding the metadata block at the top of a document.
//!
//! The block is delimited by `---` lines and holds YAML. Only its position and a few scalar
//! entries are of interest: the compact `number headings` directive and the legacy keys.

use crate::document::DocumentAccessor;
use serde_yaml::{Mapping, Value};

/// Line that opens and closes the block.
pub const DELIMITER: &str = "---";

#[derive(Clone, Debug, Default)]
/// A decoded front-matter block and its location.
pub struct FrontMatter {
    /// Line of the opening delimiter (always 0).
    pub start_line: usize,
    /// Line of the closing delimiter.
    pub end_line: usize,
    entries: Mapping,
}

impl FrontMatter {
    /// Reads the block at the start of `doc`, if there is a closed one.
    ///
    /// A block whose body is not a YAML mapping is still returned, with no entries, so that
    /// settings can be written into it.
    pub fn read<D: DocumentAccessor + ?Sized>(doc: &D) -> Option<Self> {
        if doc.line(0)?.trim_end() != DELIMITER {
            return None;
        }
        let end_line = (1..doc.line_count())
            .find(|&index| doc.line(index).is_some_and(|line| line.trim_end() == DELIMITER))?;

        let body = (1..end_line)
            .filter_map(|index| doc.line(index))
            .collect::<Vec<_>>()
            .join("\n");
        let entries = if body.trim().is_empty() {
            Mapping::new()
        } else {
            match serde_yaml::from_str::<Value>(&body) {
                Ok(Value::Mapping(entries)) => entries,
                Ok(_) => {
                    tracing::warn!("front matter is not a mapping, ignoring its entries");
                    Mapping::new()
                }
                Err(e) => {
                    tracing::warn!(error = %e, "front matter is not valid YAML, ignoring its entries");
                    Mapping::new()
                }
            }
        };

        Some(Self {
            start_line: 0,
            end_line,
            entries,
        })
    }

    #[must_use]
    /// Whether the block declares `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    #[must_use]
    /// Scalar value of `key` rendered as text; `None` if absent or not a scalar.
    pub fn get_text(&self, key: &str) -> Option<String> {
        match self.entries.get(key)? {
            Value::String(text) => Some(text.clone()),
            Value::Number(number) => Some(number.to_string()),
            Value::Bool(flag) => Some(flag.to_string()),
            _ => None,
        }
    }

    /// Line inside the block that starts with `key:`.
    pub fn key_line<D: DocumentAccessor + ?Sized>(&self, doc: &D, key: &str) -> Option<usize> {
        (self.start_line + 1..self.end_line).find(|&index| {
            doc.line(index).is_some_and(|line| {
                line.strip_prefix(key)
                    .is_some_and(|rest| rest.starts_with(':'))
            })
        })
    }
}

#[cfg(test)]
#[path = "tests/front_matter.rs"]
mod tests;
