//! The compact settings directive stored under the `number headings` front-matter key.
//!
//! A directive is a comma-separated list such as `auto, first-level 2, max 4, contents
//! Overview, _.1.A:`. The last part is the format token: an optional `_.` to skip the top
//! level, the top-level style, a dot, the style of deeper levels, and the separator.
//!
//! Invalid values never fail a parse; the affected setting keeps its previous value. Documents
//! written before the directive existed use one key per setting, read by [`parse_legacy`].

use crate::document::DocumentAccessor;
use crate::edit_plan::{EditPlan, Position};
use crate::error::{Error, Result};
use crate::front_matter::{FrontMatter, DELIMITER};
use crate::prefix::SEPARATORS;
use crate::settings::{is_valid_level, Settings};
use crate::token::{is_valid_start_at, NumberingStyle};

/// Front-matter key holding the directive.
pub const DIRECTIVE_KEY: &str = "number headings";

type Setter = fn(&mut Settings, &str) -> bool;

/// Keyed directive parts, matched by prefix in this order after `auto`.
const DIRECTIVE_KEYS: [(&str, Setter); 4] = [
    ("first-level ", set_first_level),
    ("max ", set_max_level),
    ("start-at ", set_start_at),
    ("contents ", set_contents),
];

/// Legacy keys, newer naming scheme first.
const LEGACY_KEYS: [([&str; 2], Setter); 5] = [
    (
        [
            "number-headings-skip-top-level",
            "header-numbering-skip-top-level",
        ],
        set_skip_top_level,
    ),
    (
        ["number-headings-max-level", "header-numbering-max-level"],
        set_max_level,
    ),
    (
        [
            "number-headings-style-level-1",
            "header-numbering-style-level-1",
        ],
        set_style_level_1,
    ),
    (
        [
            "number-headings-style-level-other",
            "header-numbering-style-level-other",
        ],
        set_style_level_other,
    ),
    (
        ["number-headings-auto", "header-numbering-auto"],
        set_auto,
    ),
];

fn set_first_level(settings: &mut Settings, value: &str) -> bool {
    match value.parse() {
        Ok(level) if is_valid_level(level) => {
            settings.first_level = level;
            true
        }
        _ => false,
    }
}

fn set_max_level(settings: &mut Settings, value: &str) -> bool {
    match value.parse() {
        Ok(level) if is_valid_level(level) => {
            settings.max_level = level;
            true
        }
        _ => false,
    }
}

fn set_start_at(settings: &mut Settings, value: &str) -> bool {
    if !is_valid_start_at(value) {
        return false;
    }
    settings.start_at = value.to_string();
    true
}

fn set_contents(settings: &mut Settings, value: &str) -> bool {
    if value.is_empty() {
        return false;
    }
    settings.contents = value.to_string();
    true
}

fn set_skip_top_level(settings: &mut Settings, value: &str) -> bool {
    value
        .parse()
        .map(|flag| settings.skip_top_level = flag)
        .is_ok()
}

fn set_auto(settings: &mut Settings, value: &str) -> bool {
    value.parse().map(|flag| settings.auto = flag).is_ok()
}

fn set_style_level_1(settings: &mut Settings, value: &str) -> bool {
    NumberingStyle::from_code(value)
        .map(|style| settings.style_level_1 = style)
        .is_some()
}

fn set_style_level_other(settings: &mut Settings, value: &str) -> bool {
    NumberingStyle::from_code(value)
        .map(|style| settings.style_level_other = style)
        .is_some()
}

/// Applies a format token such as `_.1.A:`; returns `false` and changes nothing if malformed.
fn parse_format_part(settings: &mut Settings, part: &str) -> bool {
    let (skip_top_level, rest) = match part.strip_prefix("_.") {
        Some(rest) => (true, rest),
        None => (false, part),
    };
    let (Some(level_1), Some(rest)) = (rest.get(..1), rest.get(1..)) else {
        return false;
    };
    let Some(rest) = rest.strip_prefix('.') else {
        return false;
    };
    let (Some(other), Some(separator)) = (rest.get(..1), rest.get(1..)) else {
        return false;
    };
    let (Some(style_level_1), Some(style_level_other)) = (
        NumberingStyle::from_code(level_1),
        NumberingStyle::from_code(other),
    ) else {
        return false;
    };
    if !SEPARATORS.contains(&separator) {
        return false;
    }

    settings.skip_top_level = skip_top_level;
    settings.style_level_1 = style_level_1;
    settings.style_level_other = style_level_other;
    settings.separator = separator.to_string();
    true
}

#[must_use]
/// Parses a directive, starting from the built-in defaults.
pub fn parse_directive(directive: &str) -> Settings {
    parse_directive_over(directive, Settings::default())
}

#[must_use]
/// Parses a directive on top of `settings`; parts that are absent or invalid keep their value.
pub fn parse_directive_over(directive: &str, mut settings: Settings) -> Settings {
    for part in directive.split(',').map(str::trim) {
        if part.is_empty() {
            continue;
        }
        if part == "auto" {
            settings.auto = true;
            continue;
        }
        let keyed = DIRECTIVE_KEYS.iter().find_map(|(key, setter)| {
            part.strip_prefix(key)
                .map(|value| (value.trim(), *setter))
        });
        let accepted = match keyed {
            Some((value, setter)) => setter(&mut settings, value),
            None => parse_format_part(&mut settings, part),
        };
        if !accepted {
            tracing::debug!(part, "ignoring invalid directive part");
        }
    }
    settings
}

#[must_use]
/// Serialises settings into the directive form [`parse_directive`] reads back.
pub fn to_directive(settings: &Settings) -> String {
    let mut parts = Vec::with_capacity(6);
    if settings.auto {
        parts.push("auto".to_string());
    }
    parts.push(format!("first-level {}", settings.first_level));
    parts.push(format!("max {}", settings.max_level));
    if !settings.contents.is_empty() {
        parts.push(format!("contents {}", settings.contents));
    }
    if !settings.start_at.is_empty() {
        parts.push(format!("start-at {}", settings.start_at));
    }
    let skip = if settings.skip_top_level { "_." } else { "" };
    parts.push(format!(
        "{skip}{}.{}{}",
        settings.style_level_1, settings.style_level_other, settings.separator
    ));
    parts.join(", ")
}

#[must_use]
/// Whether the block uses any of the per-setting legacy keys.
pub fn has_legacy_keys(front_matter: &FrontMatter) -> bool {
    LEGACY_KEYS
        .iter()
        .flat_map(|(keys, _)| keys.iter())
        .any(|key| front_matter.contains_key(key))
}

#[must_use]
/// Reads the legacy per-setting keys on top of `defaults`.
pub fn parse_legacy(front_matter: &FrontMatter, defaults: &Settings) -> Settings {
    let mut settings = defaults.clone();
    for (keys, setter) in &LEGACY_KEYS {
        let Some(value) = keys.iter().find_map(|key| front_matter.get_text(key)) else {
            continue;
        };
        if !setter(&mut settings, value.trim()) {
            tracing::debug!(key = keys[0], %value, "ignoring invalid legacy setting");
        }
    }
    settings
}

#[must_use]
/// Effective settings for a document.
///
/// The directive wins when present; otherwise legacy keys are read over `defaults`; otherwise
/// `defaults` apply unchanged.
pub fn resolve_settings(front_matter: Option<&FrontMatter>, defaults: &Settings) -> Settings {
    let Some(front_matter) = front_matter else {
        return defaults.clone();
    };
    if let Some(directive) = front_matter.get_text(DIRECTIVE_KEY) {
        return parse_directive(&directive);
    }
    if has_legacy_keys(front_matter) {
        return parse_legacy(front_matter, defaults);
    }
    defaults.clone()
}

/// Effective settings read from the document's own front matter.
pub fn read_settings<D: DocumentAccessor + ?Sized>(doc: &D, defaults: &Settings) -> Settings {
    resolve_settings(FrontMatter::read(doc).as_ref(), defaults)
}

/// Computes the edit that stores `settings` in the document's front matter.
///
/// An existing directive line is replaced in place, a block without one gains a line after its
/// opening delimiter, and a document without a block gets a new one at the very start.
///
/// # Errors
///
/// Returns [`Error::MissingDirectiveLine`] if the block decodes with a directive entry but no
/// line starts with `number headings:` (for example a quoted key).
pub fn save_settings<D: DocumentAccessor + ?Sized>(doc: &D, settings: &Settings) -> Result<EditPlan> {
    let entry = format!("{DIRECTIVE_KEY}: {}", to_directive(settings));
    let mut plan = EditPlan::new();

    match FrontMatter::read(doc) {
        Some(front_matter) if front_matter.contains_key(DIRECTIVE_KEY) => {
            let line = front_matter
                .key_line(doc, DIRECTIVE_KEY)
                .ok_or(Error::MissingDirectiveLine {
                    start_line: front_matter.start_line,
                })?;
            let end = doc.line(line).map_or(0, str::len);
            plan.replace(
                doc,
                Position::new(line, 0),
                Position::new(line, end),
                entry,
                DIRECTIVE_KEY,
            );
        }
        Some(front_matter) => {
            let at = Position::new(front_matter.start_line + 1, 0);
            plan.replace(doc, at, at, format!("{entry}\n"), DIRECTIVE_KEY);
        }
        None => {
            let at = Position::new(0, 0);
            plan.replace(
                doc,
                at,
                at,
                format!("{DELIMITER}\n{entry}\n{DELIMITER}\n\n"),
                DIRECTIVE_KEY,
            );
        }
    }

    Ok(plan)
}

#[cfg(test)]
#[path = "tests/directive.rs"]
mod tests;
