//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for the values a contact is made
//! of: its name, its phone numbers, and its birthday. Phone numbers and
//! birthdays are validated at construction time so invalid data cannot be
//! represented in the address book.

pub mod birthday;
pub mod errors;
pub mod name;
pub mod phone;

pub use birthday::Birthday;
pub use errors::ValidationError;
pub use name::Name;
pub use phone::PhoneNumber;
