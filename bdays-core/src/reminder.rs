//! The core `Reminder` struct, providing the primary API for a reminder run.

use crate::config::Config;
use crate::entry::Entry;
use crate::parse_entries::parse_content;
use crate::render::{Messages, format_messages};
use crate::views::Views;
use anyhow::{Context, Result};
use chrono::{Duration, Local, NaiveDate};
use std::fs;

/// The central struct for all reminder operations.
///
/// An instance of `Reminder` holds the configuration and ties together file
/// loading, classification and message rendering.
#[derive(Debug)]
pub struct Reminder {
    pub config: Config,
}

impl Reminder {
    /// Creates a new `Reminder` instance, loading configuration from
    /// standard paths.
    pub fn new() -> Result<Self> {
        let config = Config::load()?;
        Ok(Self::with_config(config))
    }

    /// Creates a new `Reminder` instance with a specific `Config`.
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// Reads the entries file once and parses every non-blank, non-comment
    /// line.
    ///
    /// Parse failures stay per-entry (see [`Entry::is_error`]); the only
    /// fatal error here is an unreadable file.
    pub fn load_entries(&self) -> Result<Vec<Entry>> {
        let content = fs::read_to_string(&self.config.entries_path)
            .with_context(|| format!("reading {}", self.config.entries_path.display()))?;
        Ok(parse_content(&content))
    }

    /// Full reminder run: load the entries, classify them relative to
    /// `reference_date` (today when `None`) with the configured window, and
    /// render the two display messages.
    pub fn check(&self, reference_date: Option<NaiveDate>) -> Result<Messages> {
        let now = reference_date.unwrap_or_else(|| Local::now().date_naive());
        let entries = self.load_entries()?;
        let views = Views::classify(
            now,
            Duration::days(self.config.upcoming_window_days),
            entries,
        );
        Ok(format_messages(&views, self.config.language.labels()))
    }
}
