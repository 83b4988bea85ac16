//! Scanning heading lines for their marker run and existing numbering prefix.
//!
//! A heading line looks like `## 1.2. Title`: up to four columns of indentation, the `#` marker
//! run, then optionally a numbering prefix made of `digits.` or `LETTER.` groups, a final token,
//! one terminal punctuation mark among `:`, `.` and `-`, and the spaces before the body text.

use regex::Regex;
use std::sync::LazyLock;

static MARKER_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s{0,4}#+").unwrap_or_else(|e| {
        tracing::error!("Failed to compile MARKER_RUN regex: {e}");
        never_matching_regex()
    })
});

static NUMBERING_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s{0,4}#+( )?([0-9]+\.|[A-Z]\.)*([0-9]+|[A-Z])?[:.\-]?( )+").unwrap_or_else(
        |e| {
            tracing::error!("Failed to compile NUMBERING_PREFIX regex: {e}");
            never_matching_regex()
        },
    )
});

/// Separators the prefix scanner can strip again on the next run.
pub const SEPARATORS: [&str; 4] = ["", ".", ":", "-"];

#[must_use]
/// The heading's marker run (`#`, `##`, ...) with indentation removed.
///
/// `None` means the line does not start like an ATX heading within four columns.
pub fn heading_markers(line: &str) -> Option<&str> {
    MARKER_RUN.find(line).map(|m| m.as_str().trim())
}

#[must_use]
/// Byte offset where the heading body starts, after markers and any numbering prefix.
///
/// The prefix always begins at column 0. `None` means the line has no space after its marker
/// run and cannot be renumbered.
pub fn numbering_prefix_end(line: &str) -> Option<usize> {
    NUMBERING_PREFIX.find(line).map(|m| m.end())
}

#[must_use]
/// Builds the replacement prefix `markers + " " + tokens + separator + " "`.
///
/// With no tokens the result is the bare `markers + " "` form used for unnumbered headings.
pub fn compose_prefix<T: ToString>(markers: &str, tokens: &[T], separator: &str) -> String {
    if tokens.is_empty() {
        return format!("{markers} ");
    }
    let numbering = tokens
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(".");
    format!("{markers} {numbering}{separator} ")
}

/// A regex that never matches, used if a pattern fails to compile.
fn never_matching_regex() -> Regex {
    Regex::new(r"[^\s\S]").unwrap_or_else(|_| unreachable!("[^\\s\\S] is a valid pattern"))
}

#[cfg(test)]
#[path = "tests/prefix.rs"]
mod tests;
