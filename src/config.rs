//! Configuration management for the contact book.
//!
//! Settings come from environment variables, optionally seeded from a `.env`
//! file in the working directory.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::{Path, PathBuf};

/// Data file used when `CONTACT_BOOK_PATH` is not set.
pub const DEFAULT_DATA_FILE: &str = "addressbook.json";

/// Configuration for the contact book.
#[derive(Debug, Clone)]
pub struct Config {
    /// Where the address book is persisted (default: "addressbook.json")
    pub data_file: PathBuf,

    /// Log filter used when `RUST_LOG` is unset (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACT_BOOK_PATH`: Path of the data file (default: "addressbook.json")
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        Self::check_dotenv(dotenvy::dotenv().map(|_| ()))?;
        Self::from_process_env()
    }

    /// Like [`Config::from_env`], but seeds variables from the given env file.
    pub fn from_env_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        Self::check_dotenv(dotenvy::from_path(path.as_ref()))?;
        Self::from_process_env()
    }

    /// A missing env file is fine; a malformed one is reported.
    fn check_dotenv(result: Result<(), dotenvy::Error>) -> ConfigResult<()> {
        match result {
            Err(e) if !e.not_found() => Err(ConfigError::DotenvError(e.to_string())),
            _ => Ok(()),
        }
    }

    fn from_process_env() -> ConfigResult<Self> {
        let data_file = match env::var("CONTACT_BOOK_PATH") {
            Ok(path) if path.trim().is_empty() => {
                return Err(ConfigError::InvalidValue {
                    var: "CONTACT_BOOK_PATH".to_string(),
                    reason: "Cannot be empty".to_string(),
                });
            }
            Ok(path) => PathBuf::from(path),
            Err(_) => PathBuf::from(DEFAULT_DATA_FILE),
        };

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            data_file,
            log_level,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            log_level: "error".to_string(),
        }
    }
}
