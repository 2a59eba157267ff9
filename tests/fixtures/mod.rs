//! Shared sample data for integration tests.

use address_book::{AddressBook, Record};
use chrono::NaiveDate;

/// Build a date, panicking on invalid input.
#[allow(dead_code)]
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

/// A record with the given phones and optional `DD.MM.YYYY` birthday.
#[allow(dead_code)]
pub fn sample_record(name: &str, phones: &[&str], birthday: Option<&str>) -> Record {
    let mut record = Record::new(name).expect("valid name");
    for phone in phones {
        record.add_phone(phone).expect("valid phone");
    }
    if let Some(birthday) = birthday {
        record.add_birthday(birthday).expect("valid birthday");
    }
    record
}

/// A record that only has a birthday.
#[allow(dead_code)]
pub fn birthday_record(name: &str, birthday: &str) -> Record {
    sample_record(name, &[], Some(birthday))
}

/// The three contacts the assistant ships with as demo data, plus one
/// with phones and addresses.
#[allow(dead_code)]
pub fn sample_book() -> AddressBook {
    let mut full = sample_record(
        "Olena",
        &["0501234567", "0679876543", "0501234567"],
        Some("29.02.2000"),
    );
    full.add_address("Kyiv, Khreshchatyk 1");
    full.add_address("Lviv");

    vec![
        birthday_record("John Smith", "01.01.1990"),
        birthday_record("Emma Brown", "12.12.1985"),
        birthday_record("Liam Johnson", "25.03.2000"),
        full,
    ]
    .into_iter()
    .collect()
}

/// Render upcoming birthdays as report lines, sorted for order-free comparison.
#[allow(dead_code)]
pub fn upcoming_lines(book: &AddressBook, today: NaiveDate) -> Vec<String> {
    let mut lines: Vec<String> = book
        .get_upcoming_birthdays(today)
        .iter()
        .map(ToString::to_string)
        .collect();
    lines.sort();
    lines
}
