//! Root module for the validation system.
//! Exposes one validated type per form field.

mod constants;
mod types;

// Re-export commonly used types and functions
pub use constants::*;
pub use types::{AvatarInput, EmailInput, Knowledge, NameInput, PasswordInput, TechInput, TechTitle};
