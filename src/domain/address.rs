//! Address value object.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A free-form postal or street address. Any string is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Address(String);

impl Address {
    /// Create a new Address.
    pub fn new(address: impl Into<String>) -> Self {
        Self(address.into())
    }

    /// Replace the address text in place.
    pub fn update(&mut self, address: impl Into<String>) {
        self.0 = address.into();
    }

    /// Get the address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl PartialEq<str> for Address {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}
