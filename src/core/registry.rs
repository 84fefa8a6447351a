//! Logger registry: name-to-logger cache and the configuration it owns

use super::{
    config::LoggerConfig,
    display_name::derive_display_name,
    error::{LoggerError, Result},
    log_level::LogLevel,
    logger::{Dispatch, Logger},
    metrics::LoggerMetrics,
    sink::NativeSink,
};
use crate::sinks::default_sink;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Hands out one [`Logger`] per logical name and owns their configuration.
///
/// Lock order is cache first, then configuration; both `get_logger` and
/// `set_tag_prefix` follow it so a logger created concurrently with a prefix
/// change never keeps a stale display name.
pub struct LoggerRegistry {
    dispatch: Arc<Dispatch>,
    loggers: RwLock<HashMap<String, Arc<Logger>>>,
}

impl LoggerRegistry {
    /// Registry with default configuration writing to [`default_sink`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_sink(default_sink())
    }

    #[must_use]
    pub fn with_sink(sink: Arc<dyn NativeSink>) -> Self {
        Self::from_parts(LoggerConfig::default(), sink)
    }

    fn from_parts(config: LoggerConfig, sink: Arc<dyn NativeSink>) -> Self {
        Self {
            dispatch: Arc::new(Dispatch::new(config.into_shared(), sink)),
            loggers: RwLock::new(HashMap::new()),
        }
    }

    /// Return the logger cached for `raw_name`, creating it on first use.
    ///
    /// Concurrent first calls for the same name all receive the instance that
    /// was inserted first.
    pub fn get_logger(&self, raw_name: &str) -> Arc<Logger> {
        if let Some(logger) = self.loggers.read().get(raw_name) {
            return Arc::clone(logger);
        }

        let mut loggers = self.loggers.write();
        let logger = loggers.entry(raw_name.to_string()).or_insert_with(|| {
            let prefix = self.dispatch.config.read().tag_prefix.clone();
            let display_name = derive_display_name(Some(raw_name), prefix.as_deref());
            Arc::new(Logger::new(
                raw_name.to_string(),
                display_name,
                Arc::clone(&self.dispatch),
            ))
        });
        Arc::clone(logger)
    }

    /// Logger named after a Rust type path, e.g. `my_app::ui::MainActivity`.
    ///
    /// Path separators are turned into dots so the display name is the last
    /// segment, as for a dotted class name.
    pub fn get_logger_for<T: ?Sized>(&self) -> Arc<Logger> {
        self.get_logger(&std::any::type_name::<T>().replace("::", "."))
    }

    /// Change the tag prefix and rename every cached logger in place.
    ///
    /// Names are re-derived from each logger's raw name, so switching
    /// prefixes never stacks them. An empty prefix clears it.
    pub fn set_tag_prefix(&self, prefix: impl Into<String>) {
        let prefix = prefix.into();
        self.update_tag_prefix((!prefix.is_empty()).then_some(prefix));
    }

    pub fn clear_tag_prefix(&self) {
        self.update_tag_prefix(None);
    }

    fn update_tag_prefix(&self, prefix: Option<String>) {
        let loggers = self.loggers.read();
        let mut config = self.dispatch.config.write();
        if config.tag_prefix == prefix {
            return;
        }

        for logger in loggers.values() {
            logger.set_display_name(derive_display_name(
                Some(logger.raw_name()),
                prefix.as_deref(),
            ));
        }
        config.tag_prefix = prefix;
    }

    pub fn tag_prefix(&self) -> Option<String> {
        self.dispatch.config.read().tag_prefix.clone()
    }

    pub fn set_min_level(&self, level: LogLevel) {
        self.dispatch.config.write().min_level = level;
    }

    pub fn min_level(&self) -> LogLevel {
        self.dispatch.config.read().min_level
    }

    pub fn set_multiline_enabled(&self, enabled: bool) {
        self.dispatch.config.write().multiline_enabled = enabled;
    }

    /// Set the width at which multiline mode splits messages.
    ///
    /// # Errors
    ///
    /// Returns [`LoggerError::InvalidConfiguration`] for zero.
    pub fn set_max_chars_per_line(&self, max_chars: usize) -> Result<()> {
        validate_max_chars(max_chars)?;
        self.dispatch.config.write().max_chars_per_line = max_chars;
        Ok(())
    }

    /// Mirror all output to the file at `path`.
    ///
    /// Unless `append` is set, an existing file is deleted first so the log
    /// starts empty. An empty path disables file logging.
    ///
    /// # Errors
    ///
    /// Returns an error if the existing file cannot be deleted; the previous
    /// file sink stays active in that case.
    pub fn set_file_sink(&self, path: impl AsRef<Path>, append: bool) -> Result<()> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            self.clear_file_sink();
            return Ok(());
        }

        if !append {
            self.dispatch.file_sink.remove_existing(path)?;
        }
        self.dispatch.config.write().file_sink = Some(path.to_path_buf());
        Ok(())
    }

    pub fn clear_file_sink(&self) {
        self.dispatch.config.write().file_sink = None;
    }

    pub fn file_sink(&self) -> Option<PathBuf> {
        self.dispatch.config.read().file_sink.clone()
    }

    #[inline]
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        self.dispatch.config.read().is_enabled(level)
    }

    /// Snapshot of the current configuration.
    pub fn config(&self) -> LoggerConfig {
        self.dispatch.config.read().clone()
    }

    /// All loggers created so far, in no particular order.
    pub fn loggers(&self) -> Vec<Arc<Logger>> {
        self.loggers.read().values().cloned().collect()
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.dispatch.metrics
    }

    /// Create a builder for LoggerRegistry
    ///
    /// # Example
    /// ```
    /// use logcat_facade::prelude::*;
    ///
    /// let registry = LoggerRegistry::builder()
    ///     .min_level(LogLevel::Info)
    ///     .tag_prefix("APP")
    ///     .multiline(true)
    ///     .build()
    ///     .unwrap();
    ///
    /// assert!(!registry.is_enabled(LogLevel::Debug));
    /// ```
    #[must_use]
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }
}

impl Default for LoggerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for LoggerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Never hold the config lock while taking the cache lock
        let config = self.dispatch.config.read().clone();
        let loggers = self.loggers.read().len();
        f.debug_struct("LoggerRegistry")
            .field("config", &config)
            .field("sink", &self.dispatch.sink.name())
            .field("loggers", &loggers)
            .finish()
    }
}

fn validate_max_chars(max_chars: usize) -> Result<()> {
    if max_chars == 0 {
        return Err(LoggerError::config(
            "LoggerRegistry",
            "max_chars_per_line must be greater than zero",
        ));
    }
    Ok(())
}

/// Builder for LoggerRegistry
pub struct RegistryBuilder {
    config: LoggerConfig,
    append: bool,
    sink: Option<Arc<dyn NativeSink>>,
}

impl RegistryBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            config: LoggerConfig::default(),
            append: true,
            sink: None,
        }
    }

    /// Start from an existing configuration, e.g. one loaded by the host app.
    ///
    /// A configured file sink is appended to; call [`file_sink`](Self::file_sink)
    /// to reset it instead.
    #[must_use = "builder methods return a new value"]
    pub fn config(mut self, config: LoggerConfig) -> Self {
        self.config = config;
        self.append = true;
        self
    }

    /// Set minimum log level
    #[must_use = "builder methods return a new value"]
    pub fn min_level(mut self, level: LogLevel) -> Self {
        self.config.min_level = level;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn tag_prefix(mut self, prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        self.config.tag_prefix = (!prefix.is_empty()).then_some(prefix);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn multiline(mut self, enabled: bool) -> Self {
        self.config.multiline_enabled = enabled;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn max_chars_per_line(mut self, max_chars: usize) -> Self {
        self.config.max_chars_per_line = max_chars;
        self
    }

    /// Mirror output to a log file, deleting it first unless `append` is set
    #[must_use = "builder methods return a new value"]
    pub fn file_sink(mut self, path: impl Into<PathBuf>, append: bool) -> Self {
        self.config.file_sink = Some(path.into());
        self.append = append;
        self
    }

    /// Set the native sink (defaults to [`default_sink`])
    #[must_use = "builder methods return a new value"]
    pub fn sink(mut self, sink: Arc<dyn NativeSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Build the LoggerRegistry
    ///
    /// # Errors
    ///
    /// Fails on a zero `max_chars_per_line` or when a file sink set up
    /// without `append` cannot be reset.
    pub fn build(self) -> Result<LoggerRegistry> {
        validate_max_chars(self.config.max_chars_per_line)?;

        let mut config = self.config;
        let file_sink = config
            .file_sink
            .take()
            .filter(|path| !path.as_os_str().is_empty());

        let registry =
            LoggerRegistry::from_parts(config, self.sink.unwrap_or_else(default_sink));
        if let Some(path) = file_sink {
            registry.set_file_sink(path, self.append)?;
        }
        Ok(registry)
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}
