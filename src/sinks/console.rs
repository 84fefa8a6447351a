//! Console sink implementation
//!
//! Stands in for logcat on desktop targets, printing entries in logcat's
//! "brief" layout: `I/APP_MainActivity: onResume`.

use crate::core::{LogLevel, NativeSink};
#[cfg(feature = "console")]
use colored::Colorize;

pub struct ConsoleSink {
    use_colors: bool,
}

impl ConsoleSink {
    pub fn new() -> Self {
        Self {
            use_colors: cfg!(feature = "console"),
        }
    }

    pub fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }

    /// Format an entry as `L/tag: message`
    pub fn format_entry(&self, level: LogLevel, tag: &str, message: &str) -> String {
        let prefix = format!("{}/{}", level.level_char(), tag);

        if self.use_colors {
            #[cfg(feature = "console")]
            return format!("{}: {}", prefix.color(level.color_code()), message);
        }

        format!("{}: {}", prefix, message)
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl NativeSink for ConsoleSink {
    fn write(&self, level: LogLevel, tag: &str, message: &str) {
        let output = self.format_entry(level, tag, message);

        // Route Warn and Error levels to stderr, others to stdout
        match level {
            LogLevel::Warn | LogLevel::Error => eprintln!("{}", output),
            _ => println!("{}", output),
        }
    }

    fn name(&self) -> &str {
        "console"
    }
}
