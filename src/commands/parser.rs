//! Parsing of the user's input line.

use std::str::FromStr;

/// Every command the assistant understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add,
    Change,
    Phone,
    RemovePhone,
    Delete,
    All,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    AddAddress,
    ChangeAddress,
    ShowAddress,
    RemoveAddress,
    /// `close` or `exit`
    Exit,
}

/// The command word did not name a known command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCommand(pub String);

impl FromStr for Command {
    type Err = UnknownCommand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hello" => Ok(Command::Hello),
            "add" => Ok(Command::Add),
            "change" => Ok(Command::Change),
            "phone" => Ok(Command::Phone),
            "remove-phone" => Ok(Command::RemovePhone),
            "delete" => Ok(Command::Delete),
            "all" => Ok(Command::All),
            "add-birthday" => Ok(Command::AddBirthday),
            "show-birthday" => Ok(Command::ShowBirthday),
            "birthdays" => Ok(Command::Birthdays),
            "add-address" => Ok(Command::AddAddress),
            "change-address" => Ok(Command::ChangeAddress),
            "show-address" => Ok(Command::ShowAddress),
            "remove-address" => Ok(Command::RemoveAddress),
            "close" | "exit" => Ok(Command::Exit),
            other => Err(UnknownCommand(other.to_string())),
        }
    }
}

/// Split a line into a lower-cased command word and its arguments.
///
/// Blank input yields an empty command and no arguments.
pub fn parse_input(line: &str) -> (String, Vec<String>) {
    let mut parts = line.split_whitespace();
    match parts.next() {
        Some(command) => (
            command.to_lowercase(),
            parts.map(ToString::to_string).collect(),
        ),
        None => (String::new(), Vec::new()),
    }
}
