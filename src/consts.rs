//! Global constants of the application.

use log::LevelFilter;

pub const LOG_LEVEL_VAR: &str = "SIGNUP_FORM_LOG"; // Log level filter (off, error, warn, info, debug, trace).
pub const PRETTY_OUTPUT_VAR: &str = "SIGNUP_FORM_PRETTY"; // Pretty-print the JSON output (true/false).
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;
pub const DEFAULT_PRETTY_OUTPUT: bool = true;
