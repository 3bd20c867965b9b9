//! Console Logger
//!
//! `log` backend writing to the browser devtools console.

use log::{Level, LevelFilter, Log, Metadata, Record};

pub struct ConsoleLogger {
    level: LevelFilter,
}

impl ConsoleLogger {
    pub const fn new(level: LevelFilter) -> Self {
        Self { level }
    }
}

/// `[target] message`, with the crate prefix stripped from the target
pub(crate) fn format_record(target: &str, args: &std::fmt::Arguments<'_>) -> String {
    let target = target.strip_prefix("venue_delete_ui::").unwrap_or(target);
    format!("[{}] {}", target, args)
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line: wasm_bindgen::JsValue = format_record(record.target(), record.args()).into();
        match record.level() {
            Level::Error => web_sys::console::error_1(&line),
            Level::Warn => web_sys::console::warn_1(&line),
            Level::Info => web_sys::console::log_1(&line),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

/// Install the console logger. Later calls are ignored.
pub fn init(level: LevelFilter) {
    static LOGGER: std::sync::OnceLock<ConsoleLogger> = std::sync::OnceLock::new();
    let logger = LOGGER.get_or_init(|| ConsoleLogger::new(level));
    if log::set_logger(logger).is_ok() {
        log::set_max_level(level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_strips_crate_prefix() {
        let line = format_record("venue_delete_ui::trigger", &format_args!("clicked {}", 42));
        assert_eq!(line, "[trigger] clicked 42");
    }

    #[test]
    fn test_format_keeps_foreign_targets() {
        let line = format_record("other", &format_args!("hi"));
        assert_eq!(line, "[other] hi");
    }

    #[test]
    fn test_enabled_respects_level() {
        let logger = ConsoleLogger::new(LevelFilter::Warn);
        let warn = Metadata::builder().level(Level::Warn).build();
        let debug = Metadata::builder().level(Level::Debug).build();
        assert!(logger.enabled(&warn));
        assert!(!logger.enabled(&debug));
    }
}
