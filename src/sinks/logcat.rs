//! Android logcat sink
//!
//! Writes through `__android_log_write` from the system `liblog`.

use crate::core::{LogLevel, NativeSink};
use std::ffi::{c_char, c_int, CString};

#[link(name = "log")]
extern "C" {
    fn __android_log_write(prio: c_int, tag: *const c_char, text: *const c_char) -> c_int;
}

#[derive(Debug, Default)]
pub struct LogcatSink;

impl LogcatSink {
    pub fn new() -> Self {
        Self
    }
}

/// Interior NULs would cut the C string short; replace them instead.
fn to_c_string(s: &str) -> CString {
    CString::new(s.replace('\0', "\\0")).unwrap_or_default()
}

impl NativeSink for LogcatSink {
    fn write(&self, level: LogLevel, tag: &str, message: &str) {
        let tag = to_c_string(tag);
        let text = to_c_string(message);
        // SAFETY: both pointers come from live NUL-terminated CStrings and
        // liblog copies the data before returning.
        unsafe {
            __android_log_write(level.android_priority(), tag.as_ptr(), text.as_ptr());
        }
    }

    fn name(&self) -> &str {
        "logcat"
    }
}
