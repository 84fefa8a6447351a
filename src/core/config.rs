//! Process-wide logger configuration
//!
//! One [`LoggerConfig`] is owned by each registry and shared by reference with
//! every logger it hands out, so a setter call is seen by all loggers on
//! their next log call.

use super::log_level::LogLevel;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;

/// Logcat drops anything past roughly 4 KiB per entry.
pub const DEFAULT_MAX_CHARS_PER_LINE: usize = 4000;

/// Configuration shared between a registry and its loggers.
pub type SharedConfig = Arc<RwLock<LoggerConfig>>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Calls below this level are dropped
    pub min_level: LogLevel,
    /// Prepended to every display name as `PREFIX_`
    pub tag_prefix: Option<String>,
    /// Split messages longer than `max_chars_per_line` into several entries
    pub multiline_enabled: bool,
    pub max_chars_per_line: usize,
    /// Log file mirrored by every logger, if any
    pub file_sink: Option<PathBuf>,
}

impl LoggerConfig {
    #[inline]
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        level >= self.min_level
    }

    pub fn into_shared(self) -> SharedConfig {
        Arc::new(RwLock::new(self))
    }

    /// Line length used for splitting, or `None` when messages are emitted whole.
    pub(crate) fn split_width(&self) -> Option<usize> {
        (self.multiline_enabled && self.max_chars_per_line > 0).then_some(self.max_chars_per_line)
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            min_level: LogLevel::Trace,
            tag_prefix: None,
            multiline_enabled: false,
            max_chars_per_line: DEFAULT_MAX_CHARS_PER_LINE,
            file_sink: None,
        }
    }
}
