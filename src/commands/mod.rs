//! Command handlers for the interactive assistant.
//!
//! Each handler takes the whitespace-split arguments and the address book
//! and returns the message to show. Failures come back as [`CommandError`],
//! which the caller turns into text with [`CommandError::user_message`];
//! nothing in here prints.
//!
//! [`CommandError`]: crate::error::CommandError
//! [`CommandError::user_message`]: crate::error::CommandError::user_message

pub mod addresses;
pub mod birthdays;
pub mod contacts;
pub mod parser;

pub use addresses::{add_address, change_address, remove_address, show_address};
pub use birthdays::{add_birthday, birthdays, show_birthday};
pub use contacts::{add_contact, change_contact, delete_contact, remove_phone, show_all, show_phone};
pub use parser::{parse_input, Command, UnknownCommand};

use crate::error::{CommandError, CommandResult};
use crate::models::AddressBook;
use chrono::NaiveDate;

/// Fetch the positional argument at `index` or fail with a usage error.
pub(crate) fn arg<'a>(
    args: &'a [String],
    index: usize,
    usage: &'static str,
) -> CommandResult<&'a str> {
    args.get(index)
        .map(String::as_str)
        .ok_or(CommandError::Usage(usage))
}

/// Run one command against the book.
///
/// `today` and `window_days` only matter for [`Command::Birthdays`].
pub fn execute(
    command: Command,
    args: &[String],
    book: &mut AddressBook,
    today: NaiveDate,
    window_days: u32,
) -> CommandResult<String> {
    tracing::debug!("Executing {:?} with {} args", command, args.len());

    match command {
        Command::Hello => Ok("How can I help you?".to_string()),
        Command::Add => add_contact(args, book),
        Command::Change => change_contact(args, book),
        Command::Phone => show_phone(args, book),
        Command::RemovePhone => remove_phone(args, book),
        Command::Delete => delete_contact(args, book),
        Command::All => Ok(show_all(book)),
        Command::AddBirthday => add_birthday(args, book),
        Command::ShowBirthday => show_birthday(args, book),
        Command::Birthdays => Ok(birthdays(book, today, window_days)),
        Command::AddAddress => add_address(args, book),
        Command::ChangeAddress => change_address(args, book),
        Command::ShowAddress => show_address(args, book),
        Command::RemoveAddress => remove_address(args, book),
        Command::Exit => Ok("Good bye!".to_string()),
    }
}

/// Parse and run one input line, always producing the text to show.
///
/// Returns `None` for blank input.
pub fn respond(
    line: &str,
    book: &mut AddressBook,
    today: NaiveDate,
    window_days: u32,
) -> Option<String> {
    let (word, args) = parse_input(line);
    if word.is_empty() {
        return None;
    }

    let reply = match word.parse::<Command>() {
        Ok(command) => match execute(command, &args, book, today, window_days) {
            Ok(message) => message,
            Err(e) => {
                tracing::debug!("Command {:?} failed: {}", command, e);
                e.user_message()
            }
        },
        Err(UnknownCommand(word)) => {
            tracing::debug!("Unknown command: {}", word);
            "Invalid command.".to_string()
        }
    };
    Some(reply)
}
