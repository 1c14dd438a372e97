//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided phone number is not exactly ten digits.
    InvalidPhone(String),

    /// The provided birthday is not a real `DD.MM.YYYY` date.
    InvalidBirthday(String),

    /// The record already holds this phone number.
    DuplicatePhone(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPhone(_) => write!(f, "Phone number must be a 10-digit number."),
            Self::InvalidBirthday(_) => write!(f, "Invalid date format. Use DD.MM.YYYY"),
            Self::DuplicatePhone(_) => write!(f, "Phone number already exists."),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        assert_eq!(
            ValidationError::InvalidPhone("123".to_string()).to_string(),
            "Phone number must be a 10-digit number."
        );
        assert_eq!(
            ValidationError::InvalidBirthday("1.1.2000".to_string()).to_string(),
            "Invalid date format. Use DD.MM.YYYY"
        );
        assert_eq!(
            ValidationError::DuplicatePhone("1234567890".to_string()).to_string(),
            "Phone number already exists."
        );
    }
}
