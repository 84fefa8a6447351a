//! Bridge from the `log` crate to a [`LoggerRegistry`]
//!
//! Libraries that log through `log::info!` and friends end up in the same
//! sinks as code using [`Logger`](crate::Logger) directly. The record target
//! (the module path by default) is used as the logger's raw name, with `::`
//! turned into `.` so `my_app::net::client` is tagged `client`.

use crate::core::{LogLevel, LoggerError, LoggerRegistry, Result};
use log::{Level, LevelFilter, Metadata, Record};
use std::sync::Arc;

pub struct LogBridge {
    registry: Arc<LoggerRegistry>,
}

impl LogBridge {
    pub fn new(registry: Arc<LoggerRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &LoggerRegistry {
        &self.registry
    }

    fn logger_name(target: &str) -> String {
        target.replace("::", ".")
    }
}

impl From<Level> for LogLevel {
    fn from(level: Level) -> Self {
        match level {
            Level::Trace => LogLevel::Trace,
            Level::Debug => LogLevel::Debug,
            Level::Info => LogLevel::Info,
            Level::Warn => LogLevel::Warn,
            Level::Error => LogLevel::Error,
        }
    }
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => Level::Trace,
            LogLevel::Debug => Level::Debug,
            LogLevel::Info => Level::Info,
            LogLevel::Warn => Level::Warn,
            LogLevel::Error => Level::Error,
        }
    }
}

impl log::Log for LogBridge {
    fn enabled(&self, metadata: &Metadata) -> bool {
        self.registry.is_enabled(metadata.level().into())
    }

    fn log(&self, record: &Record) {
        let level = LogLevel::from(record.level());
        if !self.registry.is_enabled(level) {
            return;
        }

        let logger = self.registry.get_logger(&Self::logger_name(record.target()));
        match record.args().as_str() {
            Some(message) => logger.log(level, message),
            None => logger.log(level, record.args().to_string()),
        }
    }

    fn flush(&self) {}
}

/// Install a [`LogBridge`] for `registry` as the process-wide `log` logger.
///
/// The `log` max level is left at `Trace`; filtering happens in the registry
/// so later `set_min_level` calls keep working.
///
/// # Errors
///
/// Returns [`LoggerError::LoggerAlreadyInstalled`] if a `log` logger was
/// already set for this process.
pub fn init(registry: Arc<LoggerRegistry>) -> Result<()> {
    log::set_boxed_logger(Box::new(LogBridge::new(registry)))
        .map_err(|_| LoggerError::LoggerAlreadyInstalled)?;
    log::set_max_level(LevelFilter::Trace);
    Ok(())
}

/// Install a [`LogBridge`] for the process-wide [`registry`](crate::registry).
///
/// # Errors
///
/// Same as [`init`].
pub fn init_global() -> Result<()> {
    init(Arc::clone(crate::registry()))
}
