//! Logging macros for `{}` template formatting.
//!
//! The macros collect their arguments into a `&[&dyn Display]` slice and hand
//! it to the logger's template formatter. Unlike `format!`, placeholders and
//! arguments do not have to match up: unmatched placeholders stay literal
//! and surplus arguments are ignored. An error attached with `cause:` is
//! rendered on the lines after the message.
//!
//! # Examples
//!
//! ```
//! use logcat_facade::prelude::*;
//! use logcat_facade::{info, warn};
//! use std::sync::Arc;
//!
//! let registry = LoggerRegistry::with_sink(Arc::new(NullSink));
//! let logger = registry.get_logger("com.example.net.Client");
//!
//! // Basic logging
//! info!(logger, "Connected");
//!
//! // With template arguments
//! let port = 8080;
//! info!(logger, "Listening on port {}", port);
//!
//! // With an attached error
//! let err = std::io::Error::new(std::io::ErrorKind::TimedOut, "handshake timed out");
//! warn!(logger, cause: err, "Retrying {} in {} ms", "example.com", 500);
//! ```

/// Log a templated message at the given level.
///
/// # Examples
///
/// ```
/// # use logcat_facade::prelude::*;
/// # use std::sync::Arc;
/// # let registry = LoggerRegistry::with_sink(Arc::new(NullSink));
/// # let logger = registry.get_logger("Demo");
/// use logcat_facade::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, cause: $err:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $logger.log_fmt_err(
            $level,
            $template,
            &[$(&$arg as &dyn ::std::fmt::Display),*],
            &$err,
        )
    };
    ($logger:expr, $level:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $logger.log_fmt($level, $template, &[$(&$arg as &dyn ::std::fmt::Display),*])
    };
}

/// Log a trace-level message.
///
/// # Examples
///
/// ```
/// # use logcat_facade::prelude::*;
/// # use std::sync::Arc;
/// # let registry = LoggerRegistry::with_sink(Arc::new(NullSink));
/// # let logger = registry.get_logger("Demo");
/// use logcat_facade::trace;
/// trace!(logger, "Entering function: calculate()");
/// trace!(logger, "Variable value: {}", 42);
/// ```
#[macro_export]
macro_rules! trace {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Trace, $($arg)+)
    };
}

/// Log a debug-level message.
///
/// # Examples
///
/// ```
/// # use logcat_facade::prelude::*;
/// # use std::sync::Arc;
/// # let registry = LoggerRegistry::with_sink(Arc::new(NullSink));
/// # let logger = registry.get_logger("Demo");
/// use logcat_facade::debug;
/// debug!(logger, "onResume: ");
/// debug!(logger, "Counter value: {}", 10);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Log an error-level message.
///
/// # Examples
///
/// ```
/// # use logcat_facade::prelude::*;
/// # use std::sync::Arc;
/// # let registry = LoggerRegistry::with_sink(Arc::new(NullSink));
/// # let logger = registry.get_logger("Demo");
/// use logcat_facade::error;
/// let err = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
/// error!(logger, "Failed to save {}", "profile.json");
/// error!(logger, cause: err, "Failed to save {}", "profile.json");
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}
