mod fixtures;

use address_book::storage::{BookStorage, JsonFileStorage};
use address_book::session;
use fixtures::date;
use tempfile::TempDir;

/// Load the book, run one session over `input`, save, and return the output.
fn run_session(storage: &JsonFileStorage, input: &[u8]) -> String {
    let mut book = storage.load().unwrap();
    let mut out = Vec::new();
    let outcome = session::run(input, &mut out, &mut book, 7, || date(2024, 6, 10));
    storage.save(&book).unwrap();
    outcome.unwrap();
    String::from_utf8_lossy(&out).into_owned()
}

#[test]
fn test_session_with_bad_bytes_is_saved() {
    let dir = TempDir::new().unwrap();
    let storage = JsonFileStorage::new(dir.path().join("addressbook.json"));

    let out = run_session(
        &storage,
        b"add John 0501234567\nadd-birthday John 01.01.1990\n\xff\xfe bad\nexit\n",
    );
    assert!(out.contains("Contact added."));
    assert!(out.contains("Birthday added."));

    let book = storage.load().unwrap();
    let john = book.find("John").unwrap();
    assert_eq!(john.phones_str(), "0501234567");
    assert_eq!(john.birthday().unwrap().date_str(), "01.01.1990");
}

#[test]
fn test_sessions_accumulate_across_runs() {
    let dir = TempDir::new().unwrap();
    let storage = JsonFileStorage::new(dir.path().join("addressbook.json"));

    run_session(&storage, b"add Emma 0501234567\nadd-birthday Emma 15.06.1985\nclose\n");
    let out = run_session(&storage, b"birthdays\nphone Emma\n");

    assert!(out.contains("2024-06-17: Emma"));
    assert!(out.contains("0501234567"));
}

#[test]
fn test_session_without_exit_still_saved() {
    let dir = TempDir::new().unwrap();
    let storage = JsonFileStorage::new(dir.path().join("addressbook.json"));

    run_session(&storage, b"add Liam 0501234567");

    assert!(storage.load().unwrap().find("Liam").is_some());
}
