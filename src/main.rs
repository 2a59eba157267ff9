//! Address Book assistant - main entry point
//!
//! An interactive prompt over the address book. The book is loaded when the
//! assistant starts and written back when the session ends, however it ends.

use address_book::{session, BookStorage, Config, JsonFileStorage};
use anyhow::Result;
use std::io::{self, Write};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration
    let config = Config::from_env()?;

    // Log to stderr so the conversation on stdout stays clean
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!(
        "Starting assistant with address book {}",
        config.book_path.display()
    );

    let storage = JsonFileStorage::new(&config.book_path);
    let mut book = match storage.load() {
        Ok(book) => book,
        Err(e) => {
            error!("Failed to load address book: {}", e);
            return Err(e.into());
        }
    };

    let mut stdout = io::stdout();
    let outcome = session::run(
        io::stdin().lock(),
        &mut stdout,
        &mut book,
        config.birthday_window_days,
        || chrono::Local::now().date_naive(),
    );
    if let Err(e) = &outcome {
        error!("Session ended with an output error: {}", e);
    }

    // Save before reporting any session error
    storage.save(&book)?;
    outcome?;
    writeln!(stdout, "Data saved. Good bye!")?;

    info!("Assistant shutdown complete");
    Ok(())
}
