//! Represents a password accepted by the form.

use serde::Serialize;
use std::fmt;

use crate::utils::error_messages::ValidationError;
use crate::utils::validation::MIN_PASSWORD_LENGTH;

/// A password of at least `MIN_PASSWORD_LENGTH` characters, kept as typed.
#[derive(Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PasswordInput {
    password: String,
}

impl PasswordInput {
    pub fn new(password: &str) -> Result<Self, ValidationError> {
        // Length is counted in characters, not bytes
        if password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(ValidationError::LengthTooShort);
        }

        Ok(Self {
            password: password.to_owned(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.password
    }
}

/// Never prints the password itself
impl fmt::Debug for PasswordInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PasswordInput").field(&"********").finish()
    }
}
