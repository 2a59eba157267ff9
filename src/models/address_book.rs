//! The address book: all records keyed by contact name.

use crate::calendar::{self, DEFAULT_WINDOW_DAYS};
use crate::error::{BookError, BookResult};
use crate::models::Record;
use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::fmt;

/// One line of the upcoming-birthday report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    /// Contact name
    pub name: String,

    /// Day to congratulate on, already moved off the weekend
    pub congratulation_date: NaiveDate,
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}",
            self.congratulation_date.format("%Y-%m-%d"),
            self.name
        )
    }
}

/// Name-keyed collection of [`Record`]s.
///
/// Iteration is in name order. Adding a record whose name is already present
/// replaces the existing one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: BTreeMap<String, Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `record`, replacing any record with the same name.
    pub fn add_record(&mut self, record: Record) {
        let name = record.name().as_str().to_string();
        if self.records.insert(name.clone(), record).is_some() {
            tracing::debug!("Replaced record: name={}", name);
        } else {
            tracing::debug!("Added record: name={}", name);
        }
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Like [`find_mut`](Self::find_mut), but a missing contact is an error.
    pub fn get_mut(&mut self, name: &str) -> BookResult<&mut Record> {
        self.records
            .get_mut(name)
            .ok_or_else(|| BookError::ContactNotFound(name.to_string()))
    }

    /// Remove the record named `name`, if any.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        let removed = self.records.remove(name);
        if removed.is_some() {
            tracing::debug!("Deleted record: name={}", name);
        }
        removed
    }

    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Contacts to congratulate within seven days of `today`.
    pub fn get_upcoming_birthdays(&self, today: NaiveDate) -> Vec<UpcomingBirthday> {
        self.get_upcoming_birthdays_within(today, DEFAULT_WINDOW_DAYS)
    }

    /// Contacts whose next birthday falls between `today` and
    /// `today + window_days` inclusive, with weekend dates moved to Monday.
    pub fn get_upcoming_birthdays_within(
        &self,
        today: NaiveDate,
        window_days: u32,
    ) -> Vec<UpcomingBirthday> {
        let upcoming: Vec<UpcomingBirthday> = self
            .records()
            .filter_map(|record| {
                let birthday = record.birthday()?;
                let congratulation_date =
                    calendar::congratulation_date(birthday.date(), today, window_days)?;
                Some(UpcomingBirthday {
                    name: record.name().as_str().to_string(),
                    congratulation_date,
                })
            })
            .collect();

        tracing::debug!(
            "Upcoming birthdays: today={}, window_days={}, found={}",
            today,
            window_days,
            upcoming.len()
        );
        upcoming
    }
}

impl FromIterator<Record> for AddressBook {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut book = AddressBook::new();
        for record in iter {
            book.add_record(record);
        }
        book
    }
}
