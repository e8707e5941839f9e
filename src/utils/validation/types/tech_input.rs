//! Validation of the rows of the technologies list.
//!
//! Each row is checked on its own and reports its errors under its indexed
//! path (`techs.<index>.title`, `techs.<index>.knowledge`).

use serde::Serialize;
use std::fmt;

use crate::models::{RawKnowledge, RawTech};
use crate::utils::error_messages::{FieldErrorSet, FieldPath, FormField, ValidationError};
use crate::utils::validation::{MAX_KNOWLEDGE, MIN_KNOWLEDGE};

/// Name of a technology; never blank.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct TechTitle(String);

impl TechTitle {
    pub fn new(title: &str) -> Result<Self, ValidationError> {
        if title.trim().is_empty() {
            return Err(ValidationError::EntryFieldMissing);
        }
        Ok(Self(title.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TechTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Knowledge level, an integer between `MIN_KNOWLEDGE` and `MAX_KNOWLEDGE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Knowledge(u8);

impl Knowledge {
    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<f64> for Knowledge {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        let in_range = value >= f64::from(MIN_KNOWLEDGE) && value <= f64::from(MAX_KNOWLEDGE);

        // NaN fails the range comparison
        if !in_range || value.fract() != 0.0 {
            return Err(ValidationError::EntryValueOutOfRange);
        }
        Ok(Self(value as u8))
    }
}

/// Coerces the raw input value, as typed in a numeric field, to a level
impl TryFrom<&RawKnowledge> for Knowledge {
    type Error = ValidationError;

    fn try_from(raw: &RawKnowledge) -> Result<Self, Self::Error> {
        let value = match raw {
            RawKnowledge::Number(value) => *value,
            RawKnowledge::Text(text) => {
                parse_number(text).ok_or(ValidationError::EntryValueOutOfRange)?
            }
        };
        Self::try_from(value)
    }
}

/// Parses text the way a browser numeric field converts it: surrounding
/// whitespace is ignored, an empty value is zero, and unsigned `0x`, `0o`
/// and `0b` literals are accepted besides decimal numbers.
fn parse_number(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() {
        return Some(0.0);
    }

    let radix_literal = text
        .get(..2)
        .and_then(|prefix| match prefix.to_ascii_lowercase().as_str() {
            "0x" => Some(16),
            "0o" => Some(8),
            "0b" => Some(2),
            _ => None,
        });
    if let Some(radix) = radix_literal {
        let digits = &text[2..];
        // from_str_radix would accept a sign here
        if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
            return None;
        }
        return u64::from_str_radix(digits, radix).ok().map(|value| value as f64);
    }

    // Only the spelled-out infinities are numbers, not inf or NaN
    match text.trim_start_matches(['+', '-']) {
        "Infinity" => return text.parse::<f64>().ok(),
        other if other.chars().any(|c| c.is_ascii_alphabetic() && c != 'e' && c != 'E') => {
            return None;
        }
        _ => {}
    }
    text.parse::<f64>().ok()
}

impl fmt::Display for Knowledge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One validated row of the technologies list
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TechInput {
    title: TechTitle,
    knowledge: Knowledge,
}

impl TechInput {
    /// Validates the row at `index`, reporting every failing field of the row.
    pub fn validate(index: usize, raw: &RawTech) -> Result<Self, FieldErrorSet> {
        let path = FieldPath::root(FormField::Techs).index(index);
        let mut errors = FieldErrorSet::new();

        let title = errors.check(path.clone().key("title"), TechTitle::new(&raw.title));
        let knowledge = errors.check(
            path.key("knowledge"),
            Knowledge::try_from(&raw.knowledge),
        );

        match (title, knowledge) {
            (Some(title), Some(knowledge)) => Ok(Self { title, knowledge }),
            _ => Err(errors),
        }
    }

    pub fn title(&self) -> &TechTitle {
        &self.title
    }

    pub fn knowledge(&self) -> Knowledge {
        self.knowledge
    }
}
