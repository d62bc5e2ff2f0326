//! Append-only game event log.
//!
//! Lines look like `[2026-01-31 18:04:11] Aria reached level 2`. The file gets
//! a short header when it is first created.

use super::persistence;
use crate::core::constants::LOG_FILE_NAME;
use chrono::Local;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Receives human-readable game events.
pub trait EventSink {
    fn record(&mut self, message: &str);
}

/// Keeps events in memory.
impl EventSink for Vec<String> {
    fn record(&mut self, message: &str) {
        self.push(message.to_string());
    }
}

pub struct EventLog {
    path: PathBuf,
}

impl EventLog {
    /// Log file in the default data directory (`~/.quest-rpg/quest.log`).
    pub fn new() -> io::Result<Self> {
        Self::with_path(persistence::data_file(LOG_FILE_NAME)?)
    }

    /// Opens (creating if needed) the log at `path`.
    pub fn with_path(path: impl Into<PathBuf>) -> io::Result<Self> {
        let log = Self { path: path.into() };
        if let Some(parent) = log.path.parent() {
            fs::create_dir_all(parent)?;
        }
        if !log.path.exists() {
            log.write_header("Started")?;
        }
        Ok(log)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn append(&self, message: &str) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "[{}] {}", Local::now().format(TIMESTAMP_FORMAT), message)
    }

    /// Truncates the log back to a fresh header.
    pub fn clear(&self) -> io::Result<()> {
        self.write_header("Cleared")
    }

    fn write_header(&self, verb: &str) -> io::Result<()> {
        let header = format!(
            "=== Quest RPG Log ===\n{} at: {}\n{}\n\n",
            verb,
            Local::now().format(TIMESTAMP_FORMAT),
            "=".repeat(50)
        );
        fs::write(&self.path, header)
    }
}

impl EventSink for EventLog {
    fn record(&mut self, message: &str) {
        tracing::debug!(event = message, "game event");
        if let Err(e) = self.append(message) {
            tracing::warn!(path = %self.path.display(), error = %e, "failed to write event log");
        }
    }
}
