//! Address Book - a personal contact directory.
//!
//! Stores contacts with validated phone numbers, an optional birthday and
//! free-form addresses, and reports whose birthday falls in the coming week
//! (weekend dates moved to the following Monday).
//!
//! # Architecture
//!
//! - **domain**: Validated field types (name, phone, birthday, address)
//! - **models**: The contact record and the address book that owns them
//! - **calendar**: Date arithmetic for the upcoming-birthday report
//! - **storage**: Loading and saving the book as a JSON file
//! - **commands**: Handlers behind the interactive assistant
//! - **session**: The read-eval loop the binary runs
//! - **config**: Configuration from environment variables
//! - **error**: Error types for each layer

pub mod calendar;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod session;
pub mod storage;

pub use config::Config;
pub use domain::{Address, Birthday, ContactName, Phone, ValidationError};
pub use error::{BookError, CommandError, ConfigError, StorageError};
pub use models::{AddressBook, Record, UpcomingBirthday};
pub use storage::{BookStorage, JsonFileStorage};
