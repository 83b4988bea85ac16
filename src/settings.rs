//! Settings that control one numbering or contents run.

use crate::token::NumberingStyle;
use serde::{Deserialize, Serialize};

/// Deepest heading level markdown can express.
pub const MAX_HEADING_LEVEL: usize = 6;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
/// Effective settings, resolved once per run and never mutated by the passes that read them.
pub struct Settings {
    /// Style of the top-level counter.
    pub style_level_1: NumberingStyle,
    /// Style of every deeper counter.
    pub style_level_other: NumberingStyle,
    /// Text written after the full numbering string, before the space.
    pub separator: String,
    /// Deepest level that gets numbered; deeper headings are kept unnumbered.
    pub max_level: usize,
    /// Shallowest level that gets numbered.
    pub first_level: usize,
    /// Leave level 1 headings (typically the title) unnumbered.
    pub skip_top_level: bool,
    /// Renumber whenever the document is processed with `--if-auto`.
    pub auto: bool,
    /// Value of the first top-level counter; empty means the style's first value.
    pub start_at: String,
    /// Suffix identifying the heading under which the table of contents lives; empty disables it.
    pub contents: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            style_level_1: NumberingStyle::Decimal,
            style_level_other: NumberingStyle::Decimal,
            separator: ".".to_string(),
            max_level: MAX_HEADING_LEVEL,
            first_level: 1,
            skip_top_level: false,
            auto: false,
            start_at: String::new(),
            contents: String::new(),
        }
    }
}

impl Settings {
    #[must_use]
    /// Level whose headings form the top of the numbering path.
    ///
    /// This is 1, or 2 when the top level is skipped, unless `first_level` asks for deeper.
    pub fn start_level(&self) -> usize {
        if self.skip_top_level {
            self.first_level.max(2)
        } else {
            self.first_level
        }
    }

    #[must_use]
    /// Whether headings at `level` are kept unnumbered and left out of the contents.
    pub fn is_excluded(&self, level: usize) -> bool {
        level < self.start_level() || level > self.max_level
    }
}

#[must_use]
/// Whether `level` is a heading level settings may refer to.
pub fn is_valid_level(level: usize) -> bool {
    (1..=MAX_HEADING_LEVEL).contains(&level)
}
