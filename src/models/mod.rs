//! Data models for the address book.
//!
//! A [`Record`] is one contact; an [`AddressBook`] is the ordered collection
//! of every record in the current session.

pub mod address_book;
pub mod record;

pub use address_book::AddressBook;
pub use record::Record;
