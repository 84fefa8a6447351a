//! Shared helpers for integration tests

#![allow(dead_code)]

use logcat_facade::{LogLevel, NativeSink};
use parking_lot::Mutex;

/// A native sink that records every write for later inspection
#[derive(Default)]
pub struct SpySink {
    writes: Mutex<Vec<SinkWrite>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SinkWrite {
    pub level: LogLevel,
    pub tag: String,
    pub message: String,
}

impl SpySink {
    pub fn writes(&self) -> Vec<SinkWrite> {
        self.writes.lock().clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.writes.lock().iter().map(|w| w.message.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.writes.lock().len()
    }
}

impl NativeSink for SpySink {
    fn write(&self, level: LogLevel, tag: &str, message: &str) {
        self.writes.lock().push(SinkWrite {
            level,
            tag: tag.to_string(),
            message: message.to_string(),
        });
    }

    fn name(&self) -> &str {
        "spy"
    }
}

/// Strip the `MM-dd HH:mm:ss ` timestamp from a log file line
pub fn strip_timestamp(line: &str) -> &str {
    // "03-14 09:26:53 " is 15 bytes
    &line[15..]
}
