//! Sink implementations

pub mod console;
pub mod file;
#[cfg(target_os = "android")]
pub mod logcat;

pub use console::ConsoleSink;
pub use file::FileSink;
#[cfg(target_os = "android")]
pub use logcat::LogcatSink;

pub use crate::core::NativeSink;

use crate::core::LogLevel;
use std::sync::Arc;

/// Sink that discards every entry, for file-only setups.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl NativeSink for NullSink {
    fn write(&self, _level: LogLevel, _tag: &str, _message: &str) {}

    fn name(&self) -> &str {
        "null"
    }
}

/// The platform's native sink: logcat on Android, the console elsewhere.
pub fn default_sink() -> Arc<dyn NativeSink> {
    #[cfg(target_os = "android")]
    {
        Arc::new(LogcatSink::new())
    }
    #[cfg(not(target_os = "android"))]
    {
        Arc::new(ConsoleSink::new())
    }
}
