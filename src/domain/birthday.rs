//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Format used both for parsing input and for display.
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

// chrono alone accepts unpadded fields, so the shape is pinned down first.
static BIRTHDAY_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{2}\.\d{2}\.\d{4}$").expect("birthday pattern is valid"));

/// A contact's date of birth.
///
/// Accepted input is `DD.MM.YYYY` with a zero-padded day and month and a
/// four-digit year from 0001 on, and it has to name a real calendar date.
///
/// # Example
///
/// ```
/// use contact_book::domain::Birthday;
///
/// let birthday = Birthday::new("29.02.2024").unwrap();
/// assert_eq!(birthday.to_string(), "29.02.2024");
/// assert!(Birthday::new("29.02.2023").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a birthday from `DD.MM.YYYY` text.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if the text has the wrong
    /// shape or does not name a real date.
    pub fn new(value: &str) -> Result<Self, ValidationError> {
        if !BIRTHDAY_SHAPE.is_match(value) {
            return Err(ValidationError::InvalidBirthday(value.to_string()));
        }

        match NaiveDate::parse_from_str(value, BIRTHDAY_FORMAT) {
            // chrono's proleptic calendar has a year 0; the civil calendar does not.
            Ok(date) if date.year() >= 1 => Ok(Self(date)),
            _ => Err(ValidationError::InvalidBirthday(value.to_string())),
        }
    }

    /// The underlying calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_string().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(&s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}
