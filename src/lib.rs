//! headnum: outline numbering for markdown headings.
//!
//! The library renumbers ATX headings (`## 1.2. Title`), maintains a table of contents under a
//! designated heading, and reads/writes its settings from a compact directive stored in the
//! document's front matter. Every operation produces an [`edit_plan::EditPlan`] that is applied
//! to a [`document::DocumentAccessor`] as one atomic transaction.

pub mod config;
pub mod directive;
pub mod document;
pub mod edit_plan;
pub mod error;
pub mod formats;
pub mod front_matter;
pub mod heading;
pub mod input;
pub mod numbering;
pub mod prefix;
pub mod settings;
pub mod toc;
pub mod token;

pub use error::{Error, Result};

#[cfg(test)]
#[path = "tests/support.rs"]
mod test_support;
