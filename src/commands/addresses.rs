//! Address commands.

use super::arg;
use crate::error::{BookError, CommandResult};
use crate::models::AddressBook;

/// `add-address <name> <address>`
pub fn add_address(args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    const USAGE: &str = "add-address <name> <address>";
    let name = arg(args, 0, USAGE)?;
    let address = arg(args, 1, USAGE)?;

    book.get_mut(name)?.add_address(address);
    Ok("Address added.".to_string())
}

/// `change-address <name> <old> <new>`
pub fn change_address(args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    const USAGE: &str = "change-address <name> <old> <new>";
    let name = arg(args, 0, USAGE)?;
    let old = arg(args, 1, USAGE)?;
    let new = arg(args, 2, USAGE)?;

    if book.get_mut(name)?.change_address(old, new) {
        Ok("Address updated.".to_string())
    } else {
        Ok("Old address not found.".to_string())
    }
}

/// `show-address <name>`
pub fn show_address(args: &[String], book: &AddressBook) -> CommandResult<String> {
    let name = arg(args, 0, "show-address <name>")?;
    let record = book
        .find(name)
        .ok_or_else(|| BookError::ContactNotFound(name.to_string()))?;
    Ok(record.show_addresses())
}

/// `remove-address <name> <address>`
pub fn remove_address(args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    const USAGE: &str = "remove-address <name> <address>";
    let name = arg(args, 0, USAGE)?;
    let address = arg(args, 1, USAGE)?;

    book.get_mut(name)?.remove_address(address);
    Ok("Address removed.".to_string())
}
