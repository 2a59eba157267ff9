//! Contact and phone commands.

use super::arg;
use crate::error::{BookError, CommandResult};
use crate::models::{AddressBook, Record};

/// `add <name> <phone>`: create the contact if needed, then add the phone.
///
/// The phone is validated before a new contact is inserted, so a bad number
/// never leaves an empty contact behind.
pub fn add_contact(args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    const USAGE: &str = "add <name> <phone>";
    let name = arg(args, 0, USAGE)?;
    let phone = arg(args, 1, USAGE)?;

    if let Some(record) = book.find_mut(name) {
        record.add_phone(phone)?;
        return Ok("Contact updated.".to_string());
    }

    let mut record = Record::new(name)?;
    record.add_phone(phone)?;
    book.add_record(record);
    Ok("Contact added.".to_string())
}

/// `change <name> <old phone> <new phone>`
pub fn change_contact(args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    const USAGE: &str = "change <name> <old phone> <new phone>";
    let name = arg(args, 0, USAGE)?;
    let old = arg(args, 1, USAGE)?;
    let new = arg(args, 2, USAGE)?;

    let record = book.get_mut(name)?;
    if record.edit_phone(old, new)? {
        Ok("Phone updated.".to_string())
    } else {
        Ok("Old phone not found.".to_string())
    }
}

/// `phone <name>`
pub fn show_phone(args: &[String], book: &AddressBook) -> CommandResult<String> {
    let name = arg(args, 0, "phone <name>")?;
    let record = book
        .find(name)
        .ok_or_else(|| BookError::ContactNotFound(name.to_string()))?;

    if record.phones().is_empty() {
        Ok("No phones.".to_string())
    } else {
        Ok(record.phones_str())
    }
}

/// `remove-phone <name> <phone>`
pub fn remove_phone(args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    const USAGE: &str = "remove-phone <name> <phone>";
    let name = arg(args, 0, USAGE)?;
    let phone = arg(args, 1, USAGE)?;

    if book.get_mut(name)?.remove_phone(phone) {
        Ok("Phone removed.".to_string())
    } else {
        Ok("Phone not found.".to_string())
    }
}

/// `delete <name>`
pub fn delete_contact(args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    let name = arg(args, 0, "delete <name>")?;
    match book.delete(name) {
        Some(_) => Ok("Contact deleted.".to_string()),
        None => Err(BookError::ContactNotFound(name.to_string()).into()),
    }
}

/// `all`: one line per contact.
pub fn show_all(book: &AddressBook) -> String {
    if book.is_empty() {
        return "No contacts.".to_string();
    }
    book.records()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}
