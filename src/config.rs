//! Runtime settings, read from the environment (and `.env` when present).

use std::env;
use std::str::FromStr;

use log::LevelFilter;
use thiserror::Error;

use crate::consts::{DEFAULT_LOG_LEVEL, DEFAULT_PRETTY_OUTPUT, LOG_LEVEL_VAR, PRETTY_OUTPUT_VAR};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid log level in {}: {}", LOG_LEVEL_VAR, .0)]
    InvalidLogLevel(String),

    #[error("Invalid boolean in {}: {}", PRETTY_OUTPUT_VAR, .0)]
    InvalidPrettyOutput(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub log_level: LevelFilter,
    pub pretty_output: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL,
            pretty_output: DEFAULT_PRETTY_OUTPUT,
        }
    }
}

impl Settings {
    /// Reads the settings from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Reads the settings through `lookup`, falling back to defaults for unset keys
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let log_level = match lookup(LOG_LEVEL_VAR) {
            None => DEFAULT_LOG_LEVEL,
            Some(level) => LevelFilter::from_str(level.trim())
                .map_err(|_| ConfigError::InvalidLogLevel(level.clone()))?,
        };

        let pretty_output = match lookup(PRETTY_OUTPUT_VAR) {
            None => DEFAULT_PRETTY_OUTPUT,
            Some(value) => parse_bool(&value).ok_or(ConfigError::InvalidPrettyOutput(value))?,
        };

        Ok(Self {
            log_level,
            pretty_output,
        })
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
