//! Configuration management for the address book assistant.
//!
//! Settings come from environment variables, with an optional `.env` file
//! loaded first. Every setting has a default, so an empty environment is valid.

use crate::calendar::DEFAULT_WINDOW_DAYS;
use crate::error::{ConfigError, ConfigResult};
use crate::storage::DEFAULT_FILE_NAME;
use std::env;
use std::path::PathBuf;

/// Largest accepted birthday window.
const MAX_WINDOW_DAYS: u32 = 365;

/// Configuration for the address book assistant.
#[derive(Debug, Clone)]
pub struct Config {
    /// Where the address book is stored (default: "addressbook.json")
    pub book_path: PathBuf,

    /// Days ahead covered by the `birthdays` command (default: 7)
    pub birthday_window_days: u32,

    /// Log level (default: "warn")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ADDRESS_BOOK_FILE`: path of the address book file (default: "addressbook.json")
    /// - `BIRTHDAY_WINDOW_DAYS`: days ahead for upcoming birthdays, 1-365 (default: 7)
    /// - `LOG_LEVEL`: logging level (default: "warn")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is fine
        let _ = dotenvy::dotenv();

        let book_path = match env::var("ADDRESS_BOOK_FILE") {
            Ok(val) if val.trim().is_empty() => {
                return Err(ConfigError::InvalidValue {
                    var: "ADDRESS_BOOK_FILE".to_string(),
                    reason: "Cannot be empty".to_string(),
                });
            }
            Ok(val) => PathBuf::from(val),
            Err(_) => PathBuf::from(DEFAULT_FILE_NAME),
        };

        let window = Self::parse_env_u32("BIRTHDAY_WINDOW_DAYS", DEFAULT_WINDOW_DAYS)?;
        if window == 0 || window > MAX_WINDOW_DAYS {
            return Err(ConfigError::InvalidValue {
                var: "BIRTHDAY_WINDOW_DAYS".to_string(),
                reason: format!("Must be between 1 and {}", MAX_WINDOW_DAYS),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());

        Ok(Config {
            book_path,
            birthday_window_days: window,
            log_level,
        })
    }

    /// Parse an environment variable as u32 with a default value.
    fn parse_env_u32(var_name: &str, default: u32) -> ConfigResult<u32> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u32>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            book_path: PathBuf::from(DEFAULT_FILE_NAME),
            birthday_window_days: DEFAULT_WINDOW_DAYS,
            log_level: "warn".to_string(),
        }
    }
}
