//! Logger metrics for observability
//!
//! Counters shared by every logger of a registry. File sink failures are
//! swallowed by design of the facade, so this is the place to notice them.

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics for logger observability
///
/// # Example
///
/// ```
/// use logcat_facade::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
///
/// metrics.record_emitted();
/// metrics.record_chunk();
/// metrics.record_file_failure();
///
/// assert_eq!(metrics.records_emitted(), 1);
/// assert_eq!(metrics.chunks_written(), 1);
/// assert_eq!(metrics.file_write_failures(), 1);
/// ```
#[derive(Debug)]
pub struct LoggerMetrics {
    /// Enabled log calls that reached emission
    records_emitted: AtomicU64,

    /// Writes made to the native sink (one per chunk)
    chunks_written: AtomicU64,

    /// Lines successfully appended to the log file
    file_lines_written: AtomicU64,

    /// Log file appends that failed and were discarded
    file_write_failures: AtomicU64,
}

impl LoggerMetrics {
    /// Create a new metrics instance with all counters at zero
    pub const fn new() -> Self {
        Self {
            records_emitted: AtomicU64::new(0),
            chunks_written: AtomicU64::new(0),
            file_lines_written: AtomicU64::new(0),
            file_write_failures: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn records_emitted(&self) -> u64 {
        self.records_emitted.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn chunks_written(&self) -> u64 {
        self.chunks_written.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn file_lines_written(&self) -> u64 {
        self.file_lines_written.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn file_write_failures(&self) -> u64 {
        self.file_write_failures.load(Ordering::Relaxed)
    }

    /// Record an emitted record, returning the previous count
    #[inline]
    pub fn record_emitted(&self) -> u64 {
        self.records_emitted.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_chunk(&self) -> u64 {
        self.chunks_written.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_file_line(&self) -> u64 {
        self.file_lines_written.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_file_failure(&self) -> u64 {
        self.file_write_failures.fetch_add(1, Ordering::Relaxed)
    }

    /// Share of file appends that failed, as a percentage (0.0 - 100.0)
    ///
    /// Returns 0.0 if nothing was written to a file yet.
    pub fn file_failure_rate(&self) -> f64 {
        let failed = self.file_write_failures() as f64;
        let total = self.file_lines_written() as f64 + failed;
        if total == 0.0 {
            0.0
        } else {
            (failed / total) * 100.0
        }
    }

    /// Reset all metrics to zero
    pub fn reset(&self) {
        self.records_emitted.store(0, Ordering::Relaxed);
        self.chunks_written.store(0, Ordering::Relaxed);
        self.file_lines_written.store(0, Ordering::Relaxed);
        self.file_write_failures.store(0, Ordering::Relaxed);
    }
}

impl Default for LoggerMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for LoggerMetrics {
    /// Create a snapshot of the current metrics values
    fn clone(&self) -> Self {
        Self {
            records_emitted: AtomicU64::new(self.records_emitted()),
            chunks_written: AtomicU64::new(self.chunks_written()),
            file_lines_written: AtomicU64::new(self.file_lines_written()),
            file_write_failures: AtomicU64::new(self.file_write_failures()),
        }
    }
}
