//! Field validation errors.

use std::fmt;

/// Errors that can occur while constructing a validated field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The contact name is empty.
    EmptyName,

    /// The phone number is not exactly ten decimal digits.
    InvalidPhone(String),

    /// The birthday is not a real date in `DD.MM.YYYY` form.
    InvalidBirthday(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Invalid name."),
            Self::InvalidPhone(_) => write!(f, "Phone number must contain exactly 10 digits."),
            Self::InvalidBirthday(_) => write!(f, "Invalid date format. Use DD.MM.YYYY"),
        }
    }
}

impl std::error::Error for ValidationError {}
