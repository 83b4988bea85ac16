//! Table of contents maintenance under a designated heading.
//!
//! The contents heading is the last heading whose text ends with the configured marker. Its
//! bullet list is rebuilt from the headings that would be numbered, one wiki-link per heading,
//! indented with tabs by depth:
//!
//! ```text
//! ## Contents
//!
//! - [[#1. Intro|1. Intro]]
//! 	- [[#1.1. Background|1.1. Background]]
//! ```

use crate::document::DocumentAccessor;
use crate::edit_plan::{EditPlan, Position};
use crate::heading::Heading;
use crate::settings::Settings;

/// Character that starts every contents entry.
pub const BULLET: char = '-';

#[must_use]
/// One contents line for `heading`.
pub fn toc_entry(heading: &Heading, start_level: usize) -> String {
    let indent = "\t".repeat(heading.level.saturating_sub(start_level));
    let label = clean_label(&heading.text);
    format!("{indent}{BULLET} [[#{}|{label}]]", heading.text)
}

/// Heading text with any trailing `^reference` removed and surrounding whitespace trimmed.
fn clean_label(text: &str) -> &str {
    text.split('^').next().unwrap_or(text).trim()
}

#[must_use]
/// The contents block: a leading newline and one newline-terminated entry per eligible heading.
///
/// Returns the empty string when no heading is eligible.
pub fn build_toc_block(headings: &[Heading], settings: &Settings) -> String {
    let start_level = settings.start_level();
    let entries: Vec<String> = headings
        .iter()
        .filter(|heading| !settings.is_excluded(heading.level))
        .map(|heading| toc_entry(heading, start_level))
        .collect();
    if entries.is_empty() {
        return String::new();
    }
    let mut block = String::from("\n");
    for entry in entries {
        block.push_str(&entry);
        block.push('\n');
    }
    block
}

#[must_use]
/// The heading the contents belong under, if any heading ends with the marker.
pub fn find_contents_heading<'h>(headings: &'h [Heading], marker: &str) -> Option<&'h Heading> {
    if marker.is_empty() {
        return None;
    }
    headings
        .iter()
        .rev()
        .find(|heading| heading.text.ends_with(marker))
}

/// Range after the contents heading that the rebuilt block replaces.
///
/// The range starts on the line after the heading and runs to the end of the existing bullet
/// list. Without a list before the next heading, or before the end of the document, it is empty.
fn contents_range<D: DocumentAccessor + ?Sized>(doc: &D, anchor_line: usize) -> (Position, Position) {
    let from = Position::new(anchor_line + 1, 0);
    let mut found_list = false;

    for index in anchor_line + 1..doc.line_count() {
        let Some(line) = doc.line(index) else {
            break;
        };
        let trimmed = line.trim_start();
        if found_list {
            if !trimmed.starts_with(BULLET) || trimmed.starts_with('#') {
                return (from, Position::new(index, 0));
            }
        } else if trimmed.starts_with(BULLET) {
            found_list = true;
        } else if trimmed.starts_with('#') {
            return (from, from);
        }
    }

    if found_list {
        let last = doc.line_count().saturating_sub(1);
        let end = doc.line(last).map_or(0, str::len);
        return (from, Position::new(last, end));
    }
    (from, from)
}

/// Computes the edit that rebuilds the table of contents.
///
/// The plan is empty when no contents marker is configured, no heading carries it, or the
/// existing block is already up to date.
pub fn update_contents<D: DocumentAccessor + ?Sized>(doc: &D, settings: &Settings) -> EditPlan {
    let mut plan = EditPlan::new();
    let headings = doc.headings();

    let Some(anchor) = find_contents_heading(headings, &settings.contents) else {
        tracing::debug!(marker = %settings.contents, "no contents heading");
        return plan;
    };
    let block = build_toc_block(headings, settings);
    if anchor.line + 1 >= doc.line_count() {
        if !block.is_empty() {
            let end = doc.line(anchor.line).map_or(0, str::len);
            let at = Position::new(anchor.line, end);
            plan.replace(doc, at, at, format!("\n{block}"), anchor.text.clone());
        }
    } else {
        let (from, to) = contents_range(doc, anchor.line);
        plan.replace(doc, from, to, block, anchor.text.clone());
    }
    tracing::debug!(edits = plan.len(), line = anchor.line, "computed contents");
    plan
}

#[cfg(test)]
#[path = "tests/toc.rs"]
mod tests;
