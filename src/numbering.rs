//! The numbering engine: renumbers headings top to bottom with a stack of per-level counters.
//!
//! The stack mirrors the current nesting path. A sibling heading increments the top counter,
//! a shallower heading pops back out and increments its own counter, and a deeper heading pushes
//! a fresh counter per level entered:
//!
//! ```text
//! # Intro          [1]
//! ## Background    [1, 1]
//! ## Related Work  [1, 2]
//! # Methods        [2]
//! ## Setup         [2, 1]
//! ```

use crate::document::DocumentAccessor;
use crate::edit_plan::{EditPlan, Position};
use crate::heading::Heading;
use crate::prefix::{compose_prefix, heading_markers, numbering_prefix_end};
use crate::settings::Settings;
use crate::token::{NumberingStyle, NumberingToken};
use std::cmp::Ordering;

#[derive(Clone, Debug)]
/// Counters for the active nesting path of a single numbering pass.
pub struct NumberingStack {
    tokens: Vec<NumberingToken>,
    previous_level: usize,
    style_level_other: NumberingStyle,
}

impl NumberingStack {
    #[must_use]
    /// Seeds the stack so that the first top-level heading increments to its first value.
    pub fn new(settings: &Settings) -> Self {
        Self {
            tokens: vec![NumberingToken::start_at_or_zeroth(
                &settings.start_at,
                settings.style_level_1,
            )],
            previous_level: settings.start_level(),
            style_level_other: settings.style_level_other,
        }
    }

    /// Moves the stack to a heading at `level`.
    pub fn advance(&mut self, level: usize) {
        match level.cmp(&self.previous_level) {
            Ordering::Equal => self.increment_top(),
            Ordering::Less => {
                for _ in level..self.previous_level {
                    self.tokens.pop();
                }
                self.increment_top();
            }
            Ordering::Greater => {
                for _ in self.previous_level..level {
                    self.tokens
                        .push(NumberingToken::first_in_style(self.style_level_other));
                }
            }
        }
        self.previous_level = level;
    }

    fn increment_top(&mut self) {
        if let Some(top) = self.tokens.pop() {
            self.tokens.push(top.next());
        }
    }

    #[must_use]
    /// Counters from the top level down to the current level.
    pub fn tokens(&self) -> &[NumberingToken] {
        &self.tokens
    }

    #[must_use]
    /// Current nesting depth.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[must_use]
    /// Whether no counter is active.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Computes the edits that number every heading according to `settings`.
///
/// Excluded headings have any numbering stripped back to `markers + " "`. Headings whose line
/// cannot be scanned are logged and left alone, but still advance the counters.
pub fn number_headings<D: DocumentAccessor + ?Sized>(doc: &D, settings: &Settings) -> EditPlan {
    let mut plan = EditPlan::new();
    let mut stack = NumberingStack::new(settings);

    for heading in doc.headings() {
        if settings.is_excluded(heading.level) {
            strip_numbering(doc, heading, &mut plan);
            continue;
        }

        stack.advance(heading.level);

        // Already filtered by the exclusion check above.
        if heading.level > settings.max_level {
            continue;
        }

        let Some((markers, prefix_end)) = scan_heading(doc, heading) else {
            continue;
        };
        let prefix = compose_prefix(markers, stack.tokens(), &settings.separator);
        plan.replace(
            doc,
            Position::new(heading.line, 0),
            Position::new(heading.line, prefix_end),
            prefix,
            heading.text.clone(),
        );
    }

    tracing::debug!(edits = plan.len(), "computed numbering");
    plan
}

/// Computes the edits that strip numbering from every heading.
pub fn remove_numbering<D: DocumentAccessor + ?Sized>(doc: &D) -> EditPlan {
    let mut plan = EditPlan::new();
    for heading in doc.headings() {
        strip_numbering(doc, heading, &mut plan);
    }
    tracing::debug!(edits = plan.len(), "computed numbering removal");
    plan
}

fn strip_numbering<D: DocumentAccessor + ?Sized>(doc: &D, heading: &Heading, plan: &mut EditPlan) {
    let Some((markers, prefix_end)) = scan_heading(doc, heading) else {
        return;
    };
    let no_tokens: [NumberingToken; 0] = [];
    plan.replace(
        doc,
        Position::new(heading.line, 0),
        Position::new(heading.line, prefix_end),
        compose_prefix(markers, &no_tokens, ""),
        heading.text.clone(),
    );
}

/// Marker run and prefix end of a heading's line, or `None` if the line is not recognised.
fn scan_heading<'d, D: DocumentAccessor + ?Sized>(
    doc: &'d D,
    heading: &Heading,
) -> Option<(&'d str, usize)> {
    let Some(line) = doc.line(heading.line) else {
        tracing::warn!(line = heading.line, "heading line is past the end of the document");
        return None;
    };
    let Some(markers) = heading_markers(line) else {
        tracing::warn!(line = heading.line, text = %heading.text, "unrecognized heading format, skipping");
        return None;
    };
    let Some(prefix_end) = numbering_prefix_end(line) else {
        tracing::warn!(line = heading.line, text = %heading.text, "no numbering prefix position, skipping");
        return None;
    };
    Some((markers, prefix_end))
}

#[cfg(test)]
#[path = "tests/numbering.rs"]
mod tests;
