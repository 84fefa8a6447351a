//! Flat log file mirror
//!
//! Every chunk emitted while a file sink is configured becomes one line:
//!
//! ```text
//! 03-14 09:26:53 I  APP_MainActivity onResume
//! ```
//!
//! The file is opened, appended to, flushed and closed on each call; no handle
//! is kept between calls, so the file can be moved or deleted at any time.

use crate::core::{LogLevel, LoggerError, Result};
use chrono::{DateTime, Local};
use parking_lot::Mutex;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

/// Timestamp layout of the first column.
pub const FILE_TIMESTAMP_FORMAT: &str = "%m-%d %H:%M:%S";

#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

/// Appends log lines to a path, one contiguous write per line.
#[derive(Debug, Default)]
pub struct FileSink {
    write_lock: Mutex<()>,
}

impl FileSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render one file line, including the line terminator.
    pub fn format_line(
        timestamp: &DateTime<Local>,
        level: LogLevel,
        tag: &str,
        chunk: &str,
    ) -> String {
        format!(
            "{} {}  {} {}{}",
            timestamp.format(FILE_TIMESTAMP_FORMAT),
            level.level_char(),
            tag,
            chunk,
            LINE_ENDING
        )
    }

    /// Append one line stamped with the current local time.
    pub fn append(&self, path: &Path, level: LogLevel, tag: &str, chunk: &str) -> Result<()> {
        let line = Self::format_line(&Local::now(), level, tag, chunk);

        let _guard = self.write_lock.lock();
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| {
                LoggerError::io_operation("opening log file", path.display().to_string(), e)
            })?;

        file.write_all(line.as_bytes())?;
        file.flush()?;
        Ok(())
    }

    /// Delete the file at `path` so the next append starts it fresh.
    ///
    /// A file that does not exist is not an error.
    pub fn remove_existing(&self, path: &Path) -> Result<()> {
        let _guard = self.write_lock.lock();
        match fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(LoggerError::io_operation(
                "resetting log file",
                path.display().to_string(),
                e,
            )),
        }
    }
}
