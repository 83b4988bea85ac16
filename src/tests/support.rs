//! In-memory document used by unit tests that should not depend on the markdown grammar.

use crate::document::DocumentAccessor;
use crate::edit_plan::EditPlan;
use crate::heading::Heading;
use crate::Result;

/// Lines plus headings derived from lines of the form `#... text`.
pub struct StubDocument {
    pub lines: Vec<String>,
    pub headings: Vec<Heading>,
}

impl StubDocument {
    pub fn new(text: &str) -> Self {
        let lines: Vec<String> = text.split('\n').map(str::to_string).collect();
        let headings = derive_headings(&lines);
        Self { lines, headings }
    }

    pub fn with_headings(text: &str, headings: Vec<Heading>) -> Self {
        Self {
            lines: text.split('\n').map(str::to_string).collect(),
            headings,
        }
    }

    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

fn derive_headings(lines: &[String]) -> Vec<Heading> {
    lines
        .iter()
        .enumerate()
        .filter_map(|(line, text)| {
            let trimmed = text.trim_start();
            let level = trimmed.chars().take_while(|c| *c == '#').count();
            let rest = &trimmed[level..];
            if level == 0 || !rest.starts_with(' ') {
                return None;
            }
            Some(Heading::new(level, rest.trim(), line))
        })
        .collect()
}

impl DocumentAccessor for StubDocument {
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
        plan.apply_to_lines(&mut self.lines)?;
        self.headings = derive_headings(&self.lines);
        Ok(())
    }
}
