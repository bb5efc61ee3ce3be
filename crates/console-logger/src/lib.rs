//! Console Logger
//!
//! `log` backend for WebAssembly frontends. Records go to the matching
//! browser console method, prefixed with a wall-clock timestamp, level and
//! target.

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use wasm_bindgen::JsValue;

static LOGGER: ConsoleLogger = ConsoleLogger;

struct ConsoleLogger;

/// Wall-clock time of a record
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timestamp {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
    pub millis: u32,
}

impl Timestamp {
    fn now() -> Self {
        let now = js_sys::Date::new_0();
        Self {
            hours: now.get_hours(),
            minutes: now.get_minutes(),
            seconds: now.get_seconds(),
            millis: now.get_milliseconds(),
        }
    }
}

/// Install the console logger as the global `log` backend
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(level);
    Ok(())
}

/// Render one log line
pub fn format_line(time: Timestamp, level: Level, target: &str, message: &str) -> String {
    format!(
        "{:02}:{:02}:{:02}.{:03} [{:<5} {}] {}",
        time.hours, time.minutes, time.seconds, time.millis, level, target, message
    )
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = format_line(
            Timestamp::now(),
            record.level(),
            record.target(),
            &record.args().to_string(),
        );
        let line = JsValue::from_str(&line);

        match record.level() {
            Level::Error => web_sys::console::error_1(&line),
            Level::Warn => web_sys::console::warn_1(&line),
            Level::Info => web_sys::console::info_1(&line),
            Level::Debug => web_sys::console::log_1(&line),
            Level::Trace => web_sys::console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}
