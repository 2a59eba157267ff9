use crate::error::{StorageError, StorageResult};
use crate::models::{AddressBook, Record};
use crate::storage::traits::BookStorage;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// File name used when no path is configured.
pub const DEFAULT_FILE_NAME: &str = "addressbook.json";

/// On-disk format version written by this build.
pub const FORMAT_VERSION: u32 = 1;

#[derive(Serialize)]
struct BookFileOut<'a> {
    version: u32,
    contacts: Vec<&'a Record>,
}

#[derive(Deserialize)]
struct BookFileIn {
    version: u32,
    #[serde(default)]
    contacts: serde_json::Value,
}

/// Address book storage backed by one pretty-printed JSON file.
///
/// Records are written in name order, so saving the same book twice
/// produces identical files. Saves replace the file with a rename.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    /// Create a storage for the file at `path`. Nothing is touched until
    /// [`load`](BookStorage::load) or [`save`](BookStorage::save).
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.display().to_string(),
            source,
        }
    }
}

impl Default for JsonFileStorage {
    fn default() -> Self {
        Self::new(DEFAULT_FILE_NAME)
    }
}

impl BookStorage for JsonFileStorage {
    fn load(&self) -> StorageResult<AddressBook> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!(
                    "No address book at {}, starting with an empty one",
                    self.path.display()
                );
                return Ok(AddressBook::new());
            }
            Err(e) => return Err(self.io_error(e)),
        };

        let stored: BookFileIn = serde_json::from_reader(BufReader::new(file))?;
        if stored.version != FORMAT_VERSION {
            return Err(StorageError::UnsupportedVersion {
                found: stored.version,
                expected: FORMAT_VERSION,
            });
        }

        let records: Vec<Record> = if stored.contacts.is_null() {
            Vec::new()
        } else {
            serde_json::from_value(stored.contacts)?
        };

        let mut book = AddressBook::new();
        for record in records {
            if book.find(record.name().as_str()).is_some() {
                return Err(StorageError::DuplicateContact(
                    record.name().as_str().to_string(),
                ));
            }
            book.add_record(record);
        }

        tracing::info!(
            "Loaded {} contacts from {}",
            book.len(),
            self.path.display()
        );
        Ok(book)
    }

    fn save(&self, book: &AddressBook) -> StorageResult<()> {
        // Written beside the target and renamed over it, so a failed write
        // leaves the previous file intact
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut temp = NamedTempFile::new_in(dir).map_err(|e| self.io_error(e))?;

        let contents = BookFileOut {
            version: FORMAT_VERSION,
            contacts: book.records().collect(),
        };
        {
            let mut writer = BufWriter::new(&mut temp);
            serde_json::to_writer_pretty(&mut writer, &contents)?;
            writer.write_all(b"\n").map_err(|e| self.io_error(e))?;
            writer.flush().map_err(|e| self.io_error(e))?;
        }
        temp.as_file().sync_all().map_err(|e| self.io_error(e))?;
        temp.persist(&self.path).map_err(|e| self.io_error(e.error))?;

        tracing::info!("Saved {} contacts to {}", book.len(), self.path.display());
        Ok(())
    }
}

/// Write `book` to `path`, replacing any existing file.
pub fn save(book: &AddressBook, path: impl AsRef<Path>) -> StorageResult<()> {
    JsonFileStorage::new(path.as_ref()).save(book)
}

/// Read the book at `path`; a missing file gives an empty book.
pub fn load(path: impl AsRef<Path>) -> StorageResult<AddressBook> {
    JsonFileStorage::new(path.as_ref()).load()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let book = load(dir.path().join("nothing-here.json")).unwrap();
        assert!(book.is_empty());
    }

    #[test]
    fn test_save_overwrites() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("book.json");

        let mut book = AddressBook::new();
        book.add_record(Record::new("John").unwrap());
        book.add_record(Record::new("Jane").unwrap());
        save(&book, &path).unwrap();

        book.delete("John");
        save(&book, &path).unwrap();

        let loaded = load(&path).unwrap();
        assert_eq!(loaded.len(), 1);
        assert!(loaded.find("Jane").is_some());
    }

    #[test]
    fn test_save_is_deterministic() {
        let dir = TempDir::new().unwrap();
        let first = dir.path().join("a.json");
        let second = dir.path().join("b.json");

        let mut book = AddressBook::new();
        book.add_record(Record::new("Zed").unwrap());
        book.add_record(Record::new("Amy").unwrap());
        save(&book, &first).unwrap();
        save(&load(&first).unwrap(), &second).unwrap();

        let a = std::fs::read_to_string(&first).unwrap();
        let b = std::fs::read_to_string(&second).unwrap();
        assert_eq!(a, b);
        assert!(a.find("Amy").unwrap() < a.find("Zed").unwrap());
    }

    #[test]
    fn test_rejects_other_version() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("book.json");
        std::fs::write(&path, r#"{"version": 2, "contacts": []}"#).unwrap();

        let result = load(&path);
        assert!(matches!(
            result,
            Err(StorageError::UnsupportedVersion {
                found: 2,
                expected: 1
            })
        ));
    }

    #[test]
    fn test_rejects_duplicate_names() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("book.json");
        std::fs::write(
            &path,
            r#"{"version": 1, "contacts": [{"name": "A"}, {"name": "A"}]}"#,
        )
        .unwrap();

        assert!(matches!(
            load(&path),
            Err(StorageError::DuplicateContact(name)) if name == "A"
        ));
    }

    #[test]
    fn test_rejects_invalid_phone_in_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("book.json");
        std::fs::write(
            &path,
            r#"{"version": 1, "contacts": [{"name": "A", "phones": ["123"]}]}"#,
        )
        .unwrap();

        assert!(matches!(load(&path), Err(StorageError::JsonError(_))));
    }

    #[test]
    fn test_rejects_garbage() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("book.json");
        std::fs::write(&path, "not json").unwrap();

        assert!(matches!(load(&path), Err(StorageError::JsonError(_))));
    }

    fn dir_entries(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(dir)
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_save_leaves_no_temp_files() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("book.json");

        let mut book = AddressBook::new();
        book.add_record(Record::new("John").unwrap());
        save(&book, &path).unwrap();
        save(&book, &path).unwrap();

        assert_eq!(dir_entries(dir.path()), vec!["book.json".to_string()]);
    }

    #[test]
    fn test_failed_save_keeps_previous_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("book.json");

        let mut book = AddressBook::new();
        book.add_record(Record::new("John").unwrap());
        save(&book, &path).unwrap();
        let before = std::fs::read_to_string(&path).unwrap();

        // A directory where the file should be makes the final rename fail
        let blocked = dir.path().join("blocked");
        std::fs::create_dir(&blocked).unwrap();
        std::fs::write(blocked.join("keep.txt"), "x").unwrap();
        book.add_record(Record::new("Jane").unwrap());

        assert!(matches!(save(&book, &blocked), Err(StorageError::Io { .. })));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), before);
        assert_eq!(dir_entries(&blocked), vec!["keep.txt".to_string()]);
        assert_eq!(
            dir_entries(dir.path()),
            vec!["blocked".to_string(), "book.json".to_string()]
        );
    }

    #[test]
    fn test_save_into_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("book.json");

        let result = save(&AddressBook::new(), &path);
        assert!(matches!(result, Err(StorageError::Io { .. })));
    }
}
