//! Data models for the address book.
//!
//! This module contains the [`Record`] for a single contact and the
//! [`AddressBook`] that owns every record.

pub mod address_book;
pub mod record;

pub use address_book::{AddressBook, UpcomingBirthday};
pub use record::Record;
