//! Represents a validated email address.
//!
//! This module provides a type-safe wrapper around email addresses that ensures
//! they meet standard email format requirements and belong to the accepted
//! domain. It uses the validator crate to perform the syntax check according
//! to HTML5 email specifications.

use serde::Serialize;
use std::fmt;
use validator::ValidateEmail;

use crate::utils::error_messages::{FormField, ValidationError};
use crate::utils::validation::EMAIL_DOMAIN_SUFFIX;

/// A validated, lower-cased email address ending with the accepted domain.
/// This type can only be constructed through validation.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct EmailInput {
    // The validated and normalized email address
    email: String,
}

impl EmailInput {
    /// Creates a new `EmailInput` after validating the provided email string.
    ///
    /// Checks run in order: presence, syntax, then the domain suffix. The
    /// address is lower-cased before the suffix check, so any casing of the
    /// accepted domain is fine.
    ///
    /// # Example
    /// ```
    /// use signup_form::utils::validation::EmailInput;
    ///
    /// let email = EmailInput::new("Ana@EMAIL.COM.BR").unwrap();
    /// assert_eq!(email.as_str(), "ana@email.com.br");
    /// assert!(EmailInput::new("ana@example.com").is_err());
    /// ```
    pub fn new(email: &str) -> Result<Self, ValidationError> {
        let email_trimmed = email.trim();

        // Check for empty input first
        if email_trimmed.is_empty() {
            return Err(ValidationError::RequiredFieldMissing {
                field: FormField::Email,
            });
        }

        if !email_trimmed.validate_email() {
            return Err(ValidationError::FormatInvalid);
        }

        let normalized_email = email_trimmed.to_lowercase();

        if !normalized_email.ends_with(EMAIL_DOMAIN_SUFFIX) {
            return Err(ValidationError::DomainMismatch);
        }

        Ok(Self {
            email: normalized_email,
        })
    }

    /// Returns a string slice of the validated email address
    pub fn as_str(&self) -> &str {
        &self.email
    }
}

/// Implements Display to allow printing the email address
impl fmt::Display for EmailInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.email)
    }
}

/// Allows using EmailInput wherever a string reference is needed
impl AsRef<str> for EmailInput {
    fn as_ref(&self) -> &str {
        &self.email
    }
}
