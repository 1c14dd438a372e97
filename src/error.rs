//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors a command handler can report back to the user.
///
/// None of these end the session; [`crate::handlers::respond`] turns each
/// one into the line that gets printed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Bad phone, bad date, or duplicate phone
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// No contact with the given name
    #[error("Contact {0} not found.")]
    NotFound(String),

    /// Wrong number of arguments; carries the usage hint
    #[error("{0}")]
    Usage(&'static str),

    /// The command word is not one the session knows
    #[error("Invalid command. Type 'help' to see the list of available commands.")]
    UnknownCommand(String),
}

/// Errors that can occur while loading or saving the address book.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing the data file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The data file is not valid JSON or holds invalid values
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The data file was written by an incompatible version
    #[error("Unsupported data file version: {0}")]
    UnsupportedVersion(u32),
}

/// Errors that end an interactive session early.
#[derive(Error, Debug)]
pub enum SessionError {
    /// Reading input or writing output failed
    #[error("Console I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The address book could not be persisted
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Failed to load .env file
    #[error("Failed to load .env file: {0}")]
    DotenvError(String),
}

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with SessionError
pub type SessionResult<T> = Result<T, SessionError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
