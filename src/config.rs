//! Configuration management for the contact book.
//!
//! This module handles loading and validating configuration from environment variables.
//! A `.env` file is honored when present; it is parsed silently so nothing is
//! printed on stdout, which the shell uses for its own output.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

/// Configuration for the contact book.
#[derive(Debug, Clone)]
pub struct Config {
    /// Contact file location (default: `<documents>/Contacts/Contact.json`)
    pub contacts_file: Option<PathBuf>,

    /// Refuse Apply while the working copy has validation errors (default: false)
    pub require_valid_apply: bool,

    /// Match search text case-sensitively (default: true)
    pub search_case_sensitive: bool,

    /// Buffer size of the session change stream (default: 64)
    pub event_capacity: usize,

    /// Log level (default: "warn")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACTS_FILE`: Path of the contact file
    /// - `CONTACTS_REQUIRE_VALID_APPLY`: Block Apply on invalid data (default: false)
    /// - `CONTACTS_SEARCH_CASE_SENSITIVE`: Case-sensitive search (default: true)
    /// - `CONTACTS_EVENT_CAPACITY`: Change stream buffer size (default: 64)
    /// - `LOG_LEVEL`: Logging level (default: "warn")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let contacts_file = match env::var("CONTACTS_FILE") {
            Ok(val) if val.trim().is_empty() => {
                return Err(ConfigError::InvalidValue {
                    var: "CONTACTS_FILE".to_string(),
                    reason: "Cannot be empty".to_string(),
                });
            }
            Ok(val) => Some(PathBuf::from(val)),
            Err(_) => None,
        };

        let require_valid_apply = Self::parse_env_bool("CONTACTS_REQUIRE_VALID_APPLY", false)?;
        let search_case_sensitive =
            Self::parse_env_bool("CONTACTS_SEARCH_CASE_SENSITIVE", true)?;
        let event_capacity = Self::parse_env_usize("CONTACTS_EVENT_CAPACITY", 64)?;

        if event_capacity == 0 {
            return Err(ConfigError::InvalidValue {
                var: "CONTACTS_EVENT_CAPACITY".to_string(),
                reason: "Must be greater than zero".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());

        Ok(Config {
            contacts_file,
            require_valid_apply,
            search_case_sensitive,
            event_capacity,
            log_level,
        })
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as bool with a default value.
    fn parse_env_bool(var_name: &str, default: bool) -> ConfigResult<bool> {
        match env::var(var_name) {
            Ok(val) => match val.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => Ok(true),
                "0" | "false" | "no" | "off" => Ok(false),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be true or false, got: {}", val),
                }),
            },
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            contacts_file: None,
            require_valid_apply: false,
            search_case_sensitive: true,
            event_capacity: 64,
            log_level: "warn".to_string(),
        }
    }
}
