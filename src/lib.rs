//! Contact Book - an interactive command-line contact manager.
//!
//! Contacts carry a name, any number of ten-digit phone numbers, and an
//! optional birthday. The book lives in memory for the length of a session
//! and is saved to a JSON file when the session ends.
//!
//! # Architecture
//!
//! - **domain**: Validated value types (name, phone number, birthday)
//! - **models**: `Record` and the `AddressBook` collection
//! - **handlers**: One function per command, plus uniform error rendering
//! - **session**: The read-dispatch-print loop
//! - **repositories**: Load/save boundary for the address book
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

pub mod config;
pub mod domain;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod session;

pub use config::Config;
pub use domain::{Birthday, Name, PhoneNumber, ValidationError};
pub use error::{CommandError, ConfigError, SessionError, StorageError};
pub use handlers::Command;
pub use models::{AddressBook, Record};
pub use repositories::{AddressBookRepository, JsonFileRepository};
pub use session::{Session, SessionState};
