//! Sample application setup
//!
//! Configures the global registry the way an app would at startup, then logs
//! from a couple of components, both directly and through the `log` crate.
//!
//! Run with: cargo run --example sample_app

use logcat_facade::prelude::*;
use logcat_facade::{debug, info, warn};

struct MainActivity;

fn main() -> Result<()> {
    let debug_build = cfg!(debug_assertions);
    let log_path = std::env::temp_dir().join("sample_app.log");

    let registry = LoggerRegistry::builder()
        // log TAG becomes "APP_<component>"
        .tag_prefix("APP")
        // log everything in debug builds
        .min_level(if debug_build { LogLevel::Trace } else { LogLevel::Info })
        // split lines longer than 4000 characters in debug builds
        .multiline(debug_build)
        .file_sink(&log_path, false)
        .build()?;
    logcat_facade::set_global_registry(registry)?;
    logcat_facade::bridge::init_global()?;

    let app = logcat_facade::get_logger("com.example.sample.SampleApp");
    app.trace("hello from my test app!");

    let activity = logcat_facade::registry().get_logger_for::<MainActivity>();
    debug!(activity, "onCreate: ");
    debug!(activity, "onResume: ");
    info!(activity, "rendered {} items in {} ms", 24, 16);
    warn!(activity, "cache miss ratio {}", 0.42);
    debug!(activity, "onPause: ");

    log::info!("routed through the log crate");

    let payload = "0123456789".repeat(500);
    activity.debug(format!("long payload: {}", payload));

    println!("\nLog file written to {}", log_path.display());
    Ok(())
}
