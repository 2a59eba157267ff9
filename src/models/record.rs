//! Record model representing one contact in the address book.

use crate::domain::{Address, Birthday, ContactName, Phone, ValidationError};
use crate::error::{BookError, BookResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A contact: a name, its phones, an optional birthday and its addresses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Record {
    /// Name of the contact, also its key in the book
    name: ContactName,

    /// Phone numbers in insertion order (duplicates allowed)
    #[serde(default)]
    phones: Vec<Phone>,

    /// Date of birth, set at most once
    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,

    /// Addresses in insertion order
    #[serde(default)]
    addresses: Vec<Address>,
}

impl Record {
    /// Create a record with no phones, birthday or addresses.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` if `name` is empty.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            name: ContactName::new(name)?,
            phones: Vec::new(),
            birthday: None,
            addresses: Vec::new(),
        })
    }

    pub fn name(&self) -> &ContactName {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    pub fn addresses(&self) -> &[Address] {
        &self.addresses
    }

    /// Validate and append a phone number.
    pub fn add_phone(&mut self, number: &str) -> Result<(), ValidationError> {
        self.phones.push(Phone::new(number)?);
        Ok(())
    }

    /// Remove the first phone equal to `number`. Returns whether one was removed.
    pub fn remove_phone(&mut self, number: &str) -> bool {
        match self.phones.iter().position(|p| p == number) {
            Some(index) => {
                self.phones.remove(index);
                true
            }
            None => false,
        }
    }

    /// Replace the first phone equal to `old` with `new`.
    ///
    /// Returns `Ok(false)` when `old` is not on the record. An invalid `new`
    /// is an error and leaves the phones untouched.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<bool, ValidationError> {
        match self.phones.iter_mut().find(|p| *p == old) {
            Some(phone) => {
                phone.update(new)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn find_phone(&self, number: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| *p == number)
    }

    /// Set the birthday from a `DD.MM.YYYY` string.
    ///
    /// # Errors
    ///
    /// `BookError::BirthdayAlreadySet` if a birthday exists (regardless of the
    /// new value), otherwise `BookError::Validation` for a malformed date.
    pub fn add_birthday(&mut self, value: &str) -> BookResult<()> {
        if self.birthday.is_some() {
            return Err(BookError::BirthdayAlreadySet);
        }
        self.birthday = Some(Birthday::parse(value)?);
        Ok(())
    }

    pub fn add_address(&mut self, address: &str) {
        self.addresses.push(Address::new(address));
    }

    /// Replace the first address equal to `old`. Returns false if there is none.
    pub fn change_address(&mut self, old: &str, new: &str) -> bool {
        match self.addresses.iter_mut().find(|a| *a == old) {
            Some(address) => {
                address.update(new);
                true
            }
            None => false,
        }
    }

    /// Drop every address equal to `address`. Returns whether any were removed.
    pub fn remove_address(&mut self, address: &str) -> bool {
        let before = self.addresses.len();
        self.addresses.retain(|a| a != address);
        self.addresses.len() != before
    }

    /// Addresses joined with `"; "`, or `"No addresses."`.
    pub fn show_addresses(&self) -> String {
        if self.addresses.is_empty() {
            return "No addresses.".to_string();
        }
        join(&self.addresses)
    }

    /// Phones joined with `"; "`, or an empty string.
    pub fn phones_str(&self) -> String {
        join(&self.phones)
    }
}

fn join<T: fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = if self.phones.is_empty() {
            "No phones".to_string()
        } else {
            self.phones_str()
        };
        let birthday = self
            .birthday
            .map(|b| b.date_str())
            .unwrap_or_else(|| "N/A".to_string());
        write!(
            f,
            "Contact name: {}, phones: {}, birthday: {}",
            self.name, phones, birthday
        )
    }
}
