//! Birthday commands.

use super::arg;
use crate::error::{BookError, CommandResult};
use crate::models::AddressBook;
use chrono::NaiveDate;

/// `add-birthday <name> <DD.MM.YYYY>`
pub fn add_birthday(args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    const USAGE: &str = "add-birthday <name> <DD.MM.YYYY>";
    let name = arg(args, 0, USAGE)?;
    let date = arg(args, 1, USAGE)?;

    book.get_mut(name)?.add_birthday(date)?;
    Ok("Birthday added.".to_string())
}

/// `show-birthday <name>`
pub fn show_birthday(args: &[String], book: &AddressBook) -> CommandResult<String> {
    let name = arg(args, 0, "show-birthday <name>")?;
    let record = book
        .find(name)
        .ok_or_else(|| BookError::ContactNotFound(name.to_string()))?;

    Ok(record
        .birthday()
        .map(|b| b.date_str())
        .unwrap_or_else(|| "Birthday not set.".to_string()))
}

/// `birthdays`: who to congratulate in the next `window_days` days.
pub fn birthdays(book: &AddressBook, today: NaiveDate, window_days: u32) -> String {
    let upcoming = book.get_upcoming_birthdays_within(today, window_days);
    if upcoming.is_empty() {
        return format!("No birthdays in the next {} days.", window_days);
    }
    upcoming
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}
