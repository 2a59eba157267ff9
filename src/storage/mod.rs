//! Persistence for the address book.
//!
//! The book is stored as a single JSON file. A missing file is the normal
//! first-run state and loads as an empty book.

mod json_file_storage;
mod traits;

pub use json_file_storage::{load, save, JsonFileStorage, DEFAULT_FILE_NAME, FORMAT_VERSION};
pub use traits::BookStorage;
