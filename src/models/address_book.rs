//! The in-memory collection of all contacts.

use super::record::Record;
use serde::{Deserialize, Serialize};

/// Ordered collection of records with case-insensitive lookup by name.
///
/// The book does not enforce unique names; lookups return the first match in
/// insertion order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AddressBook {
    #[serde(default)]
    contacts: Vec<Record>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record. No uniqueness check is performed.
    pub fn add_record(&mut self, record: Record) {
        self.contacts.push(record);
    }

    /// Find the first record whose name matches, ignoring case.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.contacts.iter().find(|r| r.name().matches(name))
    }

    /// Mutable variant of [`AddressBook::find`].
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.contacts.iter_mut().find(|r| r.name().matches(name))
    }

    /// All records in insertion order.
    pub fn records(&self) -> &[Record] {
        &self.contacts
    }

    /// Records that have a birthday set, in insertion order.
    pub fn birthdays(&self) -> impl Iterator<Item = &Record> {
        self.contacts.iter().filter(|r| r.birthday().is_some())
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }
}

impl FromIterator<Record> for AddressBook {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self {
            contacts: iter.into_iter().collect(),
        }
    }
}
