//! Numbering tokens: the per-level counters of an outline number.
//!
//! A token is either a decimal integer or an uppercase letter. The numbering stack is seeded
//! with the *zeroth* token of the top-level style so that every heading, including the first,
//! is produced by "increment then use".

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
/// How the counter of one level is written.
pub enum NumberingStyle {
    /// Decimal numbers: 1, 2, 3, ...
    #[serde(rename = "1")]
    Decimal,
    /// Uppercase letters: A, B, ..., Z, A, ...
    #[serde(rename = "A")]
    Letter,
}

impl NumberingStyle {
    #[must_use]
    /// Parses the single-character style code used in directives (`1` or `A`).
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "1" => Some(Self::Decimal),
            "A" => Some(Self::Letter),
            _ => None,
        }
    }

    #[must_use]
    /// The style code written in directives.
    pub const fn code(self) -> char {
        match self {
            Self::Decimal => '1',
            Self::Letter => 'A',
        }
    }
}

impl fmt::Display for NumberingStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// One entry of the numbering path.
pub enum NumberingToken {
    /// Decimal counter.
    Integer(u32),
    /// Uppercase ASCII letter counter.
    Letter(char),
}

impl NumberingToken {
    #[must_use]
    /// The token a fresh level starts at.
    pub const fn first_in_style(style: NumberingStyle) -> Self {
        match style {
            NumberingStyle::Decimal => Self::Integer(1),
            NumberingStyle::Letter => Self::Letter('A'),
        }
    }

    #[must_use]
    /// The token whose increment is the first token.
    pub const fn zeroth_in_style(style: NumberingStyle) -> Self {
        match style {
            NumberingStyle::Decimal => Self::Integer(0),
            NumberingStyle::Letter => Self::Letter('Z'),
        }
    }

    #[must_use]
    /// The following token. Letters wrap from `Z` to `A`.
    pub fn next(self) -> Self {
        match self {
            Self::Integer(value) => Self::Integer(value.saturating_add(1)),
            Self::Letter('Z') => Self::Letter('A'),
            Self::Letter(letter) => Self::Letter(shift_letter(letter, 1)),
        }
    }

    #[must_use]
    /// The preceding token. Letters wrap from `A` to `Z`; integers stop at 0.
    pub fn previous(self) -> Self {
        match self {
            Self::Integer(value) => Self::Integer(value.saturating_sub(1)),
            Self::Letter('A') => Self::Letter('Z'),
            Self::Letter(letter) => Self::Letter(shift_letter(letter, -1)),
        }
    }

    #[must_use]
    /// Seed for the top-level counter.
    ///
    /// A `start_at` value valid for `style` makes the first top-level heading carry exactly that
    /// value; anything else, including the empty string, falls back to the zeroth token.
    pub fn start_at_or_zeroth(start_at: &str, style: NumberingStyle) -> Self {
        let first = match style {
            NumberingStyle::Decimal => start_at.parse::<u32>().ok().map(Self::Integer),
            NumberingStyle::Letter => single_uppercase(start_at).map(Self::Letter),
        };
        first.map_or_else(|| Self::zeroth_in_style(style), Self::previous)
    }
}

impl fmt::Display for NumberingToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Letter(letter) => write!(f, "{letter}"),
        }
    }
}

/// Whether `value` is acceptable as a `start-at` setting: digits, or one uppercase letter.
#[must_use]
pub fn is_valid_start_at(value: &str) -> bool {
    (!value.is_empty() && value.bytes().all(|b| b.is_ascii_digit()))
        || single_uppercase(value).is_some()
}

fn single_uppercase(value: &str) -> Option<char> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(letter), None) if letter.is_ascii_uppercase() => Some(letter),
        _ => None,
    }
}

fn shift_letter(letter: char, delta: i8) -> char {
    let index = (letter as u8).wrapping_sub(b'A');
    let shifted = (i16::from(index) + i16::from(delta)).rem_euclid(26);
    char::from(b'A' + u8::try_from(shifted).unwrap_or(0))
}

#[cfg(test)]
#[path = "tests/token.rs"]
mod tests;
