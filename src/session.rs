//! The interactive read-eval loop.
//!
//! Kept apart from `main` so any reader/writer pair can drive it. The loop
//! never loses the book: a failed read ends the session normally, and the
//! caller saves whatever the loop returns.

use crate::commands::{self, parse_input, Command};
use crate::models::AddressBook;
use chrono::NaiveDate;
use std::io::{self, BufRead, Write};

/// Read commands from `input` until `close`/`exit`, end of input or a read
/// error, writing replies to `output`.
///
/// Lines that are not valid UTF-8 are decoded lossily. `today` is asked for
/// the current date each time a command runs.
///
/// # Errors
///
/// Only write failures on `output` are returned; the book keeps every change
/// made before the failure.
pub fn run<R, W, F>(
    mut input: R,
    output: &mut W,
    book: &mut AddressBook,
    window_days: u32,
    today: F,
) -> io::Result<()>
where
    R: BufRead,
    W: Write,
    F: Fn() -> NaiveDate,
{
    writeln!(output, "Welcome to the assistant bot!")?;

    let mut buf = Vec::new();
    loop {
        write!(output, "Enter a command: ")?;
        output.flush()?;

        buf.clear();
        match input.read_until(b'\n', &mut buf) {
            Ok(0) => {
                writeln!(output)?;
                break;
            }
            Ok(_) => {}
            Err(e) => {
                tracing::error!("Failed to read input, ending session: {}", e);
                writeln!(output)?;
                break;
            }
        }
        let line = String::from_utf8_lossy(&buf);

        let (word, _) = parse_input(&line);
        if matches!(word.parse::<Command>(), Ok(Command::Exit)) {
            break;
        }

        if let Some(reply) = commands::respond(&line, book, today(), window_days) {
            writeln!(output, "{}", reply)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{BufReader, Cursor, Read};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()
    }

    // Yields `data` once, then fails every read
    struct BrokenReader {
        data: Cursor<Vec<u8>>,
    }

    impl Read for BrokenReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            match self.data.read(buf)? {
                0 => Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed")),
                n => Ok(n),
            }
        }
    }

    #[test]
    fn test_run_stops_at_exit() {
        let mut book = AddressBook::new();
        let mut out = Vec::new();
        let input = Cursor::new("add John 0501234567\nexit\nadd Jane 0501234567\n");

        run(input, &mut out, &mut book, 7, today).unwrap();

        assert!(book.find("John").is_some());
        assert!(book.find("Jane").is_none());
        let out = String::from_utf8(out).unwrap();
        assert!(out.starts_with("Welcome to the assistant bot!"));
        assert!(out.contains("Contact added."));
    }

    #[test]
    fn test_run_survives_invalid_utf8() {
        let mut book = AddressBook::new();
        let mut out = Vec::new();
        let input: &[u8] = b"add John 0501234567\n\xff\xfe bad\nadd-birthday John 01.01.1990\n";

        run(input, &mut out, &mut book, 7, today).unwrap();

        let john = book.find("John").unwrap();
        assert_eq!(john.birthday().unwrap().date_str(), "01.01.1990");
        assert!(String::from_utf8_lossy(&out).contains("Invalid command."));
    }

    #[test]
    fn test_run_read_error_keeps_changes() {
        let mut book = AddressBook::new();
        let mut out = Vec::new();
        let input = BufReader::new(BrokenReader {
            data: Cursor::new(b"add John 0501234567\n".to_vec()),
        });

        run(input, &mut out, &mut book, 7, today).unwrap();

        assert_eq!(book.find("John").unwrap().phones_str(), "0501234567");
    }
}
