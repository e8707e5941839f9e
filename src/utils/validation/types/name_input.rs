//! Represents a validated person name.
//!
//! Names are normalized to title case: each whitespace-delimited word gets its
//! first character upper-cased, the rest of the word is kept as typed, and the
//! words are joined back with single spaces.

use serde::Serialize;
use std::fmt;

use crate::utils::error_messages::{FormField, ValidationError};

/// A non-empty, title-cased name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct NameInput {
    name: String,
}

impl NameInput {
    /// Validates and normalizes a raw name.
    ///
    /// # Example
    /// ```
    /// use signup_form::utils::validation::NameInput;
    ///
    /// let name = NameInput::new("  ana   maria ").unwrap();
    /// assert_eq!(name.as_str(), "Ana Maria");
    /// assert!(NameInput::new("   ").is_err());
    /// ```
    pub fn new(name: &str) -> Result<Self, ValidationError> {
        if name.trim().is_empty() {
            return Err(ValidationError::RequiredFieldMissing {
                field: FormField::Name,
            });
        }

        let name = name
            .split_whitespace()
            .map(capitalize)
            .collect::<Vec<_>>()
            .join(" ");

        Ok(Self { name })
    }

    /// Returns a string slice of the normalized name
    pub fn as_str(&self) -> &str {
        &self.name
    }
}

/// Upper-cases the first character of a word and keeps the remainder untouched
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl fmt::Display for NameInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl AsRef<str> for NameInput {
    fn as_ref(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case() {
        let cases = vec![
            ("ana", "Ana"),
            ("  ana maria ", "Ana Maria"),
            ("ana\tmaria\n silva", "Ana Maria Silva"),
            ("joão da silva", "João Da Silva"),
            ("mcDONALD o'neil", "McDONALD O'neil"),
            ("Already Titled", "Already Titled"),
            ("élodie", "Élodie"),
            ("42 street", "42 Street"),
        ];

        for (raw, expected) in cases {
            let name = NameInput::new(raw).unwrap();
            assert_eq!(name.as_str(), expected, "Name '{}' was badly normalized", raw);
        }
    }

    #[test]
    fn test_only_first_character_changes() {
        let name = NameInput::new("aNA mARIA").unwrap();
        assert_eq!(name.as_str(), "ANA MARIA");
    }

    #[test]
    fn test_empty_names() {
        for raw in vec!["", " ", "\t\n", "   "] {
            assert_eq!(
                NameInput::new(raw),
                Err(ValidationError::RequiredFieldMissing { field: FormField::Name }),
                "Empty name {:?} was accepted !",
                raw
            );
        }
    }

    #[test]
    fn test_normalization_is_stable() {
        let once = NameInput::new(" maria  clara  ").unwrap();
        let twice = NameInput::new(once.as_str()).unwrap();
        assert_eq!(once, twice);
    }
}
