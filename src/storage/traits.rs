use crate::error::StorageResult;
use crate::models::AddressBook;

/// Storage backend for the address book.
///
/// Loaded once at startup and saved once at shutdown, so implementations
/// only need whole-book reads and writes.
pub trait BookStorage {
    /// Read the whole book. A backend with nothing stored yet returns an empty book.
    fn load(&self) -> StorageResult<AddressBook>;

    /// Replace whatever is stored with `book`.
    fn save(&self, book: &AddressBook) -> StorageResult<()>;
}
