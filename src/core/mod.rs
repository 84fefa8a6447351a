//! Core logger types and traits

pub mod config;
pub mod display_name;
pub mod error;
pub mod formatter;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod record;
pub mod registry;
pub mod sink;

pub use config::{LoggerConfig, SharedConfig, DEFAULT_MAX_CHARS_PER_LINE};
pub use display_name::{derive_display_name, TAG_MAX_LENGTH};
pub use error::{LoggerError, Result};
pub use formatter::{format_message, render_error};
pub use log_level::LogLevel;
pub use logger::Logger;
pub use metrics::LoggerMetrics;
pub use record::FormattedRecord;
pub use registry::{LoggerRegistry, RegistryBuilder};
pub use sink::NativeSink;
