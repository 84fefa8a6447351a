//! # Logcat Facade
//!
//! A leveled logging facade over the platform's native log (logcat on
//! Android, the console elsewhere) with a global minimum level, short
//! logcat-friendly tags and an optional flat log file.
//!
//! ## Features
//!
//! - **Named loggers**: one cached [`Logger`] per component name, tagged with
//!   the last segment of a dotted path (`com.example.app.MainActivity`
//!   becomes `MainActivity`) and an optional prefix (`APP_MainActivity`)
//! - **Live configuration**: level, prefix, multiline and file settings apply
//!   to existing loggers immediately
//! - **Long messages**: optionally split into several entries at a fixed width
//! - **File mirror**: `MM-dd HH:mm:ss L  Tag message` lines appended per call
//! - **`log` crate bridge**: route `log::info!` and friends through the same
//!   registry
//!
//! ```
//! use logcat_facade::prelude::*;
//! use std::sync::Arc;
//!
//! let registry = LoggerRegistry::builder()
//!     .sink(Arc::new(NullSink))
//!     .tag_prefix("APP")
//!     .min_level(LogLevel::Debug)
//!     .build()?;
//!
//! let log = registry.get_logger("com.example.app.MainActivity");
//! log.debug("onCreate: ");
//! log.info_fmt("loaded {} of {} items", &[&3, &5]);
//! # Ok::<(), logcat_facade::LoggerError>(())
//! ```

pub mod core;
pub mod macros;
pub mod sinks;

#[cfg(feature = "log-bridge")]
pub mod bridge;

use std::sync::{Arc, OnceLock};

pub mod prelude {
    pub use crate::core::{
        FormattedRecord, LogLevel, Logger, LoggerConfig, LoggerError, LoggerMetrics,
        LoggerRegistry, NativeSink, RegistryBuilder, Result,
    };
    pub use crate::sinks::{ConsoleSink, FileSink, NullSink};
}

pub use crate::core::{
    derive_display_name, format_message, FormattedRecord, LogLevel, Logger, LoggerConfig,
    LoggerError, LoggerMetrics, LoggerRegistry, NativeSink, RegistryBuilder, Result,
    DEFAULT_MAX_CHARS_PER_LINE, TAG_MAX_LENGTH,
};
pub use sinks::{default_sink, ConsoleSink, FileSink, NullSink};

static GLOBAL_REGISTRY: OnceLock<Arc<LoggerRegistry>> = OnceLock::new();

/// The process-wide registry, created on first use with [`default_sink`].
pub fn registry() -> &'static Arc<LoggerRegistry> {
    GLOBAL_REGISTRY.get_or_init(|| Arc::new(LoggerRegistry::new()))
}

/// Make `registry` the process-wide registry.
///
/// # Errors
///
/// Fails if the global registry was already set or already used.
pub fn set_global_registry(registry: LoggerRegistry) -> Result<()> {
    GLOBAL_REGISTRY
        .set(Arc::new(registry))
        .map_err(|_| LoggerError::config("registry", "global registry is already initialized"))
}

/// Shorthand for `registry().get_logger(name)`.
pub fn get_logger(name: &str) -> Arc<Logger> {
    registry().get_logger(name)
}
