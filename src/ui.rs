// UI layer: the pre-run confirmation prompt (`dialoguer`) and a console
// log sink that shows an `indicatif` spinner while each call is in flight.

use std::time::Duration;

use anyhow::Result;
use dialoguer::Confirm;
use indicatif::{ProgressBar, ProgressStyle};

use crate::seed::{Level, LogEntry, SeedLog};

/// Ask the user to confirm seeding against `base_url`. Defaults to yes so
/// a plain Enter proceeds.
pub fn confirm_seed(base_url: &str) -> Result<bool> {
    let ok = Confirm::new()
        .with_prompt(format!("Seed demo data into {}?", base_url))
        .default(true)
        .interact()?;
    Ok(ok)
}

/// Console sink: step announcements become a spinner, classified entries
/// replace it as plain lines. Warnings and errors go to stderr.
pub struct ConsoleLog {
    spinner: Option<ProgressBar>,
}

impl ConsoleLog {
    pub fn new() -> Self {
        ConsoleLog { spinner: None }
    }

    fn clear_spinner(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
    }
}

impl SeedLog for ConsoleLog {
    fn step(&mut self, message: &str) {
        self.clear_spinner();
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(ProgressStyle::with_template("{spinner} {msg}").unwrap());
        spinner.enable_steady_tick(Duration::from_millis(80));
        spinner.set_message(message.to_string());
        self.spinner = Some(spinner);
    }

    fn entry(&mut self, entry: LogEntry) {
        self.clear_spinner();
        match entry.level {
            Level::Info => println!("{}", entry.message),
            Level::Warn => eprintln!("warning: {}", entry.message),
            Level::Error => eprintln!("error: {}", entry.message),
        }
    }
}
