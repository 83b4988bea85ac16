//! Configuration to acknowledge developer preferences as well as set defaults.
//!
//! Specifically, we try to find a headnum.toml, and if present we load settings from there.
//! It provides the default numbering settings for documents whose front matter has none.

use crate::directive::parse_directive;
use crate::settings::Settings;
use facet::Facet;
use std::fs;
use std::path::Path;

/// File looked up in the working directory when no path is given.
pub const CONFIG_FILE: &str = "headnum.toml";

#[derive(Facet, Clone, Debug, Default, PartialEq, Eq)]
/// User preferences loaded from headnum.toml or falling back to defaults.
pub struct Config {
    #[facet(default = String::new())]
    /// Directive supplying default settings, e.g. `max 3, contents Contents, 1.1.`.
    pub directive: String,
}

impl Config {
    #[must_use]
    /// Load configuration from headnum.toml in the working directory if present.
    pub fn load() -> Self {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    #[must_use]
    /// Load configuration from `path`, falling back to defaults if it is missing or invalid.
    pub fn load_from(path: &Path) -> Self {
        let Ok(contents) = fs::read_to_string(path) else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Self::default();
        };
        match facet_toml::from_str::<Self>(&contents) {
            Ok(config) => config,
            Err(_) => {
                tracing::warn!(path = %path.display(), "invalid config file, using defaults");
                Self::default()
            }
        }
    }

    #[must_use]
    /// Default settings described by the configured directive.
    pub fn settings(&self) -> Settings {
        parse_directive(&self.directive)
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
