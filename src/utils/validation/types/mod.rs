//! Type definitions for the validation system

mod email_input;
mod file_input;
mod name_input;
mod password_input;
mod tech_input;

// Re-export commonly used types and functions
pub use email_input::EmailInput;
pub use file_input::AvatarInput;
pub use name_input::NameInput;
pub use password_input::PasswordInput;
pub use tech_input::{Knowledge, TechInput, TechTitle};
