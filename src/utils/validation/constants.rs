//! Constants used throughout the validation system

/// The only email domain accepted by the form
pub const EMAIL_DOMAIN_SUFFIX: &str = "@email.com.br";
/// Minimum password length, in characters
pub const MIN_PASSWORD_LENGTH: usize = 6;
/// Minimum number of technology entries
pub const MIN_TECHS: usize = 2;
/// Lowest accepted knowledge level
pub const MIN_KNOWLEDGE: u8 = 1;
/// Highest accepted knowledge level
pub const MAX_KNOWLEDGE: u8 = 100;
