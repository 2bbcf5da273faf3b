//! Browser console backend for the `log` facade.
//!
//! # Invariants
//! - Initialization is idempotent for the same level.
//! - Re-initialization with a different level only moves the max level filter.
//! - Initialization never panics.

use log::{Level, LevelFilter, Log, Metadata, Record};
use std::sync::OnceLock;

static LOGGER: ConsoleLogger = ConsoleLogger;
static INSTALLED: OnceLock<()> = OnceLock::new();

struct ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = format_record(record.level(), record.target(), &record.args().to_string());
        let line = wasm_bindgen::JsValue::from(line);
        match record.level() {
            Level::Error => web_sys::console::error_1(&line),
            Level::Warn => web_sys::console::warn_1(&line),
            Level::Info => web_sys::console::log_1(&line),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

fn format_record(level: Level, target: &str, message: &str) -> String {
    // Crate paths are noise in the console; keep the last segment.
    let short = target.rsplit("::").next().unwrap_or(target);
    format!("[{short}] {level} {message}")
}

pub(crate) fn normalize_level(level: &str) -> Result<LevelFilter, String> {
    match level.trim().to_ascii_lowercase().as_str() {
        "off" => Ok(LevelFilter::Off),
        "error" => Ok(LevelFilter::Error),
        "warn" | "warning" => Ok(LevelFilter::Warn),
        "info" => Ok(LevelFilter::Info),
        "debug" => Ok(LevelFilter::Debug),
        "trace" => Ok(LevelFilter::Trace),
        other => Err(format!("unsupported log level `{other}`")),
    }
}

/// Route `log` records to the browser console at `level`.
pub fn init_logging(level: &str) -> Result<(), String> {
    let filter = normalize_level(level)?;

    if INSTALLED.get().is_none() {
        log::set_logger(&LOGGER).map_err(|e| format!("failed to install console logger: {e}"))?;
        let _ = INSTALLED.set(());
    }

    log::set_max_level(filter);
    Ok(())
}
