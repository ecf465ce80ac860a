//! Configuration management for the contact book.
//!
//! This module handles loading and validating configuration from environment
//! variables, reading a `.env` file first if one is present.

use crate::book::DEFAULT_PAGE_SIZE;
use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Configuration for the contact book.
#[derive(Debug, Clone)]
pub struct Config {
    /// Records per page when listing the book (default: 1)
    pub page_size: usize,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACT_BOOK_PAGE_SIZE`: Records per page, at least 1 (default: 1)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let page_size = Self::parse_env_usize("CONTACT_BOOK_PAGE_SIZE", DEFAULT_PAGE_SIZE.get())?;

        if page_size == 0 {
            return Err(ConfigError::InvalidValue {
                var: "CONTACT_BOOK_PAGE_SIZE".to_string(),
                reason: "Must be at least 1".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            page_size,
            log_level,
        })
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<usize>().map_err(|_| ConfigError::InvalidValue {
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
            page_size: DEFAULT_PAGE_SIZE.get(),
            log_level: "error".to_string(),
        }
    }
}
