//! Per-name logging facade

use super::{
    config::SharedConfig,
    formatter::split_chunks,
    log_level::LogLevel,
    metrics::LoggerMetrics,
    record::FormattedRecord,
    sink::NativeSink,
};
use crate::sinks::FileSink;
use parking_lot::RwLock;
use std::error::Error;
use std::fmt::{self, Display};
use std::path::Path;
use std::sync::Arc;

/// Everything a logger writes through, shared with its registry.
pub(crate) struct Dispatch {
    pub(crate) config: SharedConfig,
    pub(crate) sink: Arc<dyn NativeSink>,
    pub(crate) file_sink: FileSink,
    pub(crate) metrics: LoggerMetrics,
}

impl Dispatch {
    pub(crate) fn new(config: SharedConfig, sink: Arc<dyn NativeSink>) -> Self {
        Self {
            config,
            sink,
            file_sink: FileSink::new(),
            metrics: LoggerMetrics::new(),
        }
    }
}

/// A named logger handed out by [`LoggerRegistry`](super::LoggerRegistry).
///
/// Loggers are cheap to share (`Arc<Logger>`) and read the registry's
/// configuration on every call, so level, multiline and file settings changed
/// after a logger was obtained take effect immediately. The display name is
/// likewise updated in place when the registry's tag prefix changes.
///
/// # Example
///
/// ```
/// use logcat_facade::prelude::*;
/// use std::sync::Arc;
///
/// let registry = LoggerRegistry::builder()
///     .sink(Arc::new(NullSink))
///     .tag_prefix("APP")
///     .build()
///     .unwrap();
///
/// let logger = registry.get_logger("com.example.app.MainActivity");
/// assert_eq!(logger.display_name(), "APP_MainActivity");
///
/// logger.info("onCreate");
/// logger.debug_fmt("loaded {} items in {} ms", &[&12, &40]);
/// ```
pub struct Logger {
    raw_name: String,
    display_name: RwLock<String>,
    dispatch: Arc<Dispatch>,
}

impl Logger {
    pub(crate) fn new(raw_name: String, display_name: String, dispatch: Arc<Dispatch>) -> Self {
        Self {
            raw_name,
            display_name: RwLock::new(display_name),
            dispatch,
        }
    }

    /// The logical name this logger was requested with.
    pub fn raw_name(&self) -> &str {
        &self.raw_name
    }

    /// The tag written to the sinks.
    pub fn display_name(&self) -> String {
        self.display_name.read().clone()
    }

    pub(crate) fn set_display_name(&self, name: String) {
        *self.display_name.write() = name;
    }

    #[inline]
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        self.dispatch.config.read().is_enabled(level)
    }

    pub fn is_trace_enabled(&self) -> bool {
        self.is_enabled(LogLevel::Trace)
    }

    pub fn is_debug_enabled(&self) -> bool {
        self.is_enabled(LogLevel::Debug)
    }

    pub fn is_info_enabled(&self) -> bool {
        self.is_enabled(LogLevel::Info)
    }

    pub fn is_warn_enabled(&self) -> bool {
        self.is_enabled(LogLevel::Warn)
    }

    pub fn is_error_enabled(&self) -> bool {
        self.is_enabled(LogLevel::Error)
    }

    pub fn log(&self, level: LogLevel, message: impl Into<String>) {
        if !self.is_enabled(level) {
            return;
        }
        self.emit(FormattedRecord::new(level, message));
    }

    /// Log a `{}` template; see [`format_message`](super::formatter::format_message).
    pub fn log_fmt(&self, level: LogLevel, template: &str, args: &[&dyn Display]) {
        if !self.is_enabled(level) {
            return;
        }
        self.emit(FormattedRecord::from_template(level, template, args));
    }

    /// Log a message followed by the error and its causes on the next lines.
    pub fn log_err(&self, level: LogLevel, message: impl Into<String>, err: &dyn Error) {
        if !self.is_enabled(level) {
            return;
        }
        self.emit(FormattedRecord::new(level, message).with_error(err));
    }

    pub fn log_fmt_err(
        &self,
        level: LogLevel,
        template: &str,
        args: &[&dyn Display],
        err: &dyn Error,
    ) {
        if !self.is_enabled(level) {
            return;
        }
        self.emit(FormattedRecord::from_template(level, template, args).with_error(err));
    }

    /// Emit a record built by the caller, subject to the same level check.
    pub fn log_record(&self, record: FormattedRecord) {
        if !self.is_enabled(record.level) {
            return;
        }
        self.emit(record);
    }

    pub fn trace(&self, message: impl Into<String>) {
        self.log(LogLevel::Trace, message);
    }

    pub fn trace_fmt(&self, template: &str, args: &[&dyn Display]) {
        self.log_fmt(LogLevel::Trace, template, args);
    }

    pub fn trace_err(&self, message: impl Into<String>, err: &dyn Error) {
        self.log_err(LogLevel::Trace, message, err);
    }

    pub fn debug(&self, message: impl Into<String>) {
        self.log(LogLevel::Debug, message);
    }

    pub fn debug_fmt(&self, template: &str, args: &[&dyn Display]) {
        self.log_fmt(LogLevel::Debug, template, args);
    }

    pub fn debug_err(&self, message: impl Into<String>, err: &dyn Error) {
        self.log_err(LogLevel::Debug, message, err);
    }

    pub fn info(&self, message: impl Into<String>) {
        self.log(LogLevel::Info, message);
    }

    pub fn info_fmt(&self, template: &str, args: &[&dyn Display]) {
        self.log_fmt(LogLevel::Info, template, args);
    }

    pub fn info_err(&self, message: impl Into<String>, err: &dyn Error) {
        self.log_err(LogLevel::Info, message, err);
    }

    pub fn warn(&self, message: impl Into<String>) {
        self.log(LogLevel::Warn, message);
    }

    pub fn warn_fmt(&self, template: &str, args: &[&dyn Display]) {
        self.log_fmt(LogLevel::Warn, template, args);
    }

    pub fn warn_err(&self, message: impl Into<String>, err: &dyn Error) {
        self.log_err(LogLevel::Warn, message, err);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.log(LogLevel::Error, message);
    }

    pub fn error_fmt(&self, template: &str, args: &[&dyn Display]) {
        self.log_fmt(LogLevel::Error, template, args);
    }

    pub fn error_err(&self, message: impl Into<String>, err: &dyn Error) {
        self.log_err(LogLevel::Error, message, err);
    }

    /// Write a record to the native sink and, if configured, the log file.
    ///
    /// With multiline enabled, text longer than the configured line width is
    /// written as consecutive chunks, each a separate sink write and file line.
    fn emit(&self, record: FormattedRecord) {
        let level = record.level;
        let text = record.into_text();

        let (split_width, file_path) = {
            let config = self.dispatch.config.read();
            (config.split_width(), config.file_sink.clone())
        };
        let tag = self.display_name();

        let chunks = match split_width {
            Some(width) => split_chunks(&text, width),
            None => vec![text.as_str()],
        };

        self.dispatch.metrics.record_emitted();
        for chunk in chunks {
            self.write_native(level, &tag, chunk);
            if let Some(ref path) = file_path {
                self.write_file(path, level, &tag, chunk);
            }
        }
    }

    /// Write one chunk to the native sink, isolating the caller from sink panics.
    fn write_native(&self, level: LogLevel, tag: &str, chunk: &str) {
        let sink = &self.dispatch.sink;
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            sink.write(level, tag, chunk)
        }));

        match result {
            Ok(()) => {
                self.dispatch.metrics.record_chunk();
            }
            Err(panic_info) => {
                let panic_msg = if let Some(s) = panic_info.downcast_ref::<&str>() {
                    s.to_string()
                } else if let Some(s) = panic_info.downcast_ref::<String>() {
                    s.clone()
                } else {
                    "Unknown panic".to_string()
                };
                eprintln!(
                    "[LOGGER CRITICAL] Sink '{}' panicked: {}",
                    sink.name(),
                    panic_msg
                );
            }
        }
    }

    /// Append one chunk to the log file. Failures are reported and dropped.
    fn write_file(&self, path: &Path, level: LogLevel, tag: &str, chunk: &str) {
        match self.dispatch.file_sink.append(path, level, tag, chunk) {
            Ok(()) => {
                self.dispatch.metrics.record_file_line();
            }
            Err(e) => {
                self.dispatch.metrics.record_file_failure();
                eprintln!("[LOGGER ERROR] File sink failed: {}", e);
            }
        }
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("raw_name", &self.raw_name)
            .field("display_name", &*self.display_name.read())
            .field("sink", &self.dispatch.sink.name())
            .finish()
    }
}
