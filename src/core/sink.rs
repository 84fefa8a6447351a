//! Native sink trait for the platform log destination

use super::log_level::LogLevel;

/// The platform's own log primitive (logcat, a console, a test spy).
///
/// Implementations receive one call per emitted chunk and must not fail;
/// anything that can go wrong is handled inside the sink.
pub trait NativeSink: Send + Sync {
    fn write(&self, level: LogLevel, tag: &str, message: &str);

    fn name(&self) -> &str;
}
