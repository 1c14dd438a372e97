//! Record model representing one contact in the address book.

use crate::domain::{Birthday, Name, PhoneNumber, ValidationError};
use serde::{Deserialize, Serialize};

/// A single contact: a name, its phone numbers, and an optional birthday.
///
/// Phone numbers keep insertion order and never repeat.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Record {
    /// Name the contact is looked up by
    name: Name,

    /// Phone numbers in the order they were added
    #[serde(default)]
    phones: Vec<PhoneNumber>,

    /// Date of birth, if known
    #[serde(default)]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a new record with no phones and no birthday.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Name::new(name),
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Phone numbers joined with `", "` for display.
    pub fn phones_joined(&self) -> String {
        self.phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Add a phone number.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::DuplicatePhone` if the number is already on
    /// this record, or `ValidationError::InvalidPhone` if it is malformed.
    pub fn add_phone(&mut self, value: &str) -> Result<(), ValidationError> {
        if self.phones.iter().any(|p| p.as_str() == value) {
            return Err(ValidationError::DuplicatePhone(value.to_string()));
        }
        self.phones.push(PhoneNumber::new(value)?);
        Ok(())
    }

    /// Set the birthday, replacing any previous one.
    pub fn add_birthday(&mut self, value: &str) -> Result<(), ValidationError> {
        self.birthday = Some(Birthday::new(value)?);
        Ok(())
    }

    /// Replace every phone number with a single new one.
    ///
    /// The new number is validated before anything is removed, so a bad
    /// value leaves the record unchanged.
    pub fn replace_phones(&mut self, value: &str) -> Result<(), ValidationError> {
        let phone = PhoneNumber::new(value)?;
        self.phones.clear();
        self.phones.push(phone);
        Ok(())
    }
}
