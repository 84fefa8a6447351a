//! Formatted record produced for each enabled log call

use super::formatter::{format_message, render_error};
use super::log_level::LogLevel;
use std::error::Error;
use std::fmt::Display;

/// A rendered message waiting to be emitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedRecord {
    pub level: LogLevel,
    pub message: String,
    /// Rendered error chain attached to the message, if any
    pub error: Option<String>,
}

impl FormattedRecord {
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            error: None,
        }
    }

    /// Build a record from a `{}` template and its arguments.
    pub fn from_template(level: LogLevel, template: &str, args: &[&dyn Display]) -> Self {
        Self::new(level, format_message(template, args))
    }

    #[must_use]
    pub fn with_error(mut self, err: &dyn Error) -> Self {
        self.error = Some(render_error(err));
        self
    }

    /// Full text to emit: the message, then the error chain on the next line.
    pub fn into_text(self) -> String {
        match self.error {
            Some(error) => {
                let mut text = self.message;
                text.reserve(error.len() + 1);
                text.push('\n');
                text.push_str(&error);
                text
            }
            None => self.message,
        }
    }
}
