//! Integration tests for the logger registry and facade
//!
//! These tests verify:
//! - Display name derivation and caching
//! - Live configuration changes
//! - Long-message splitting across both sinks
//! - File sink layout, reset and append behaviour
//! - File failures never reaching the caller

mod common;

use common::{strip_timestamp, SinkWrite, SpySink};
use logcat_facade::prelude::*;
use logcat_facade::{error, info};
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;

fn spy_registry() -> (Arc<SpySink>, LoggerRegistry) {
    let sink = Arc::new(SpySink::default());
    let registry = LoggerRegistry::with_sink(sink.clone());
    (sink, registry)
}

#[test]
fn test_display_names() {
    let (_, registry) = spy_registry();
    assert_eq!(
        registry.get_logger("com.example.app.MainActivity").display_name(),
        "MainActivity"
    );
    assert_eq!(registry.get_logger("X").display_name(), "X");
    assert_eq!(registry.get_logger("a.b").display_name(), "a.b");

    let (_, prefixed) = spy_registry();
    prefixed.set_tag_prefix("APP");
    assert_eq!(
        prefixed.get_logger("com.example.app.MainActivity").display_name(),
        "APP_MainActivity"
    );
}

#[test]
fn test_get_logger_returns_identical_instance() {
    let (_, registry) = spy_registry();
    let first = registry.get_logger("com.example.Service");
    let second = registry.get_logger("com.example.Service");
    let other = registry.get_logger("com.example.Other");

    assert!(Arc::ptr_eq(&first, &second));
    assert!(!Arc::ptr_eq(&first, &other));
}

#[test]
fn test_prefix_change_is_retroactive() {
    let (sink, registry) = spy_registry();
    let logger = registry.get_logger("com.example.app.MainActivity");

    logger.info("before");
    registry.set_tag_prefix("APP");
    logger.info("after");

    let tags: Vec<String> = sink.writes().into_iter().map(|w| w.tag).collect();
    assert_eq!(tags, vec!["MainActivity", "APP_MainActivity"]);
}

#[test]
fn test_same_prefix_is_a_no_op() {
    let (_, registry) = spy_registry();
    registry.set_tag_prefix("APP");
    let logger = registry.get_logger("com.example.Widget");
    registry.set_tag_prefix("APP");
    assert_eq!(logger.display_name(), "APP_Widget");
}

#[test]
fn test_level_change_applies_to_existing_loggers() {
    let (sink, registry) = spy_registry();
    let logger = registry.get_logger("com.example.Widget");

    logger.debug("visible");
    registry.set_min_level(LogLevel::Info);
    logger.debug("hidden");
    logger.info("visible too");

    assert_eq!(sink.messages(), vec!["visible", "visible too"]);
}

#[test]
fn test_long_message_split_into_three_chunks() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("split.log");

    let (sink, registry) = spy_registry();
    registry.set_multiline_enabled(true);
    registry.set_max_chars_per_line(10).unwrap();
    registry.set_file_sink(&log_file, false).unwrap();

    let message = "0123456789abcdefghijKLMNO";
    assert_eq!(message.len(), 25);
    registry.get_logger("Splitter").warn(message);

    assert_eq!(
        sink.messages(),
        vec!["0123456789", "abcdefghij", "KLMNO"]
    );

    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    let lines: Vec<&str> = content.lines().map(strip_timestamp).collect();
    assert_eq!(
        lines,
        vec![
            "W  Splitter 0123456789",
            "W  Splitter abcdefghij",
            "W  Splitter KLMNO",
        ]
    );
    assert_eq!(registry.metrics().chunks_written(), 3);
    assert_eq!(registry.metrics().file_lines_written(), 3);
}

#[test]
fn test_disabled_calls_write_nothing() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("disabled.log");

    let (sink, registry) = spy_registry();
    registry.set_file_sink(&log_file, true).unwrap();
    registry.set_min_level(LogLevel::Error);

    let logger = registry.get_logger("Quiet");
    logger.trace("t");
    logger.debug_fmt("{}", &[&1]);
    logger.info_err("i", &std::io::Error::other("boom"));
    logger.warn("w");
    info!(logger, "macro {}", 2);

    assert_eq!(sink.len(), 0);
    assert!(!log_file.exists());
    assert_eq!(registry.metrics().records_emitted(), 0);
}

#[test]
fn test_file_line_layout() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("layout.log");

    let registry = LoggerRegistry::builder()
        .sink(Arc::new(NullSink))
        .tag_prefix("APP")
        .file_sink(&log_file, false)
        .build()
        .expect("Failed to build registry");

    registry
        .get_logger("com.example.app.MainActivity")
        .trace("hello from my test app!");

    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    let line = content.lines().next().expect("one line");

    // MM-dd HH:mm:ss
    let bytes = line.as_bytes();
    for (i, b) in bytes[..14].iter().enumerate() {
        match i {
            2 => assert_eq!(*b, b'-'),
            5 => assert_eq!(*b, b' '),
            8 | 11 => assert_eq!(*b, b':'),
            _ => assert!(b.is_ascii_digit(), "unexpected byte at {}: {}", i, line),
        }
    }
    assert_eq!(
        strip_timestamp(line),
        "V  APP_MainActivity hello from my test app!"
    );
}

#[test]
fn test_file_sink_without_append_resets_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("reset.log");
    fs::write(&log_file, "stale line\n").unwrap();

    let (_, registry) = spy_registry();
    registry.set_file_sink(&log_file, false).unwrap();
    registry.get_logger("Fresh").info("new line");

    let content = fs::read_to_string(&log_file).unwrap();
    assert!(!content.contains("stale line"));
    assert_eq!(content.lines().count(), 1);
}

#[test]
fn test_file_sink_with_append_keeps_content() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("append.log");
    fs::write(&log_file, "stale line\n").unwrap();

    let (_, registry) = spy_registry();
    registry.set_file_sink(&log_file, true).unwrap();
    registry.get_logger("Kept").info("new line");

    let content = fs::read_to_string(&log_file).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "stale line");
    assert!(lines[1].ends_with("I  Kept new line"));
}

#[test]
fn test_clearing_file_sink_stops_file_writes() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("cleared.log");

    let (sink, registry) = spy_registry();
    registry.set_file_sink(&log_file, false).unwrap();
    let logger = registry.get_logger("Toggle");
    logger.info("to file");
    registry.clear_file_sink();
    logger.info("console only");

    assert_eq!(sink.len(), 2);
    assert_eq!(fs::read_to_string(&log_file).unwrap().lines().count(), 1);
}

#[test]
fn test_file_failure_does_not_stop_native_sink() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let unwritable = temp_dir.path().join("no_such_dir").join("app.log");

    let (sink, registry) = spy_registry();
    registry.set_file_sink(&unwritable, true).unwrap();
    let logger = registry.get_logger("Resilient");

    logger.error("first");
    logger.error("second");

    assert_eq!(sink.messages(), vec!["first", "second"]);
    assert_eq!(registry.metrics().file_write_failures(), 2);
    assert_eq!(registry.metrics().file_lines_written(), 0);
}

#[test]
fn test_error_detail_follows_message() {
    let (sink, registry) = spy_registry();
    let logger = registry.get_logger("com.example.Uploader");
    let err = std::io::Error::new(std::io::ErrorKind::ConnectionReset, "connection reset");

    logger.error_err("upload failed", &err);
    error!(logger, cause: err, "upload {} failed", 7);

    assert_eq!(
        sink.writes(),
        vec![
            SinkWrite {
                level: LogLevel::Error,
                tag: "Uploader".to_string(),
                message: "upload failed\nconnection reset".to_string(),
            },
            SinkWrite {
                level: LogLevel::Error,
                tag: "Uploader".to_string(),
                message: "upload 7 failed\nconnection reset".to_string(),
            },
        ]
    );
}

#[test]
fn test_error_detail_is_split_with_message() {
    let (sink, registry) = spy_registry();
    registry.set_multiline_enabled(true);
    registry.set_max_chars_per_line(8).unwrap();
    let err = std::io::Error::other("12345");

    registry.get_logger("Split").info_err("abcdef", &err);

    // "abcdef\n12345" is 12 characters
    assert_eq!(sink.messages(), vec!["abcdef\n1", "2345"]);
}

#[test]
fn test_formatting_rules() {
    let (sink, registry) = spy_registry();
    let logger = registry.get_logger("Fmt");

    logger.info_fmt("{} + {} = {}", &[&1, &2, &3]);
    logger.info_fmt("{} and {}", &[&"only"]);
    logger.info_fmt("{}", &[&"a", &"b"]);

    assert_eq!(sink.messages(), vec!["1 + 2 = 3", "only and {}", "a"]);
}

#[test]
fn test_log_record_respects_level() {
    let (sink, registry) = spy_registry();
    registry.set_min_level(LogLevel::Warn);
    let logger = registry.get_logger("Records");

    logger.log_record(FormattedRecord::new(LogLevel::Info, "dropped"));
    logger.log_record(FormattedRecord::new(LogLevel::Error, "kept"));

    assert_eq!(sink.messages(), vec!["kept"]);
}

#[test]
fn test_global_registry_caches_loggers() {
    let first = logcat_facade::get_logger("com.example.GlobalThing");
    let second = logcat_facade::registry().get_logger("com.example.GlobalThing");
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(first.display_name(), "GlobalThing");
}
