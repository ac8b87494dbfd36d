//! Browser console logger implementation

use std::sync::Arc;

use super::completion::Completion;
use super::level::LogLevel;
use super::timestamp;
use super::traits::Logger;
use crate::config::LoggerOptions;
use crate::console::{default_console, Channel, Console};

/// A logger for browser-style consoles
///
/// Lines look like `2024-05-01T12:00:00.000Z [INFO] main: server started`
/// and are prefixed with a `%c` placeholder so the console applies a
/// per-level text color.
#[derive(Clone)]
pub struct BrowserLogger {
    loglevel: LogLevel,
    console: Arc<dyn Console>,
}

impl std::fmt::Debug for BrowserLogger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BrowserLogger")
            .field("loglevel", &self.loglevel)
            .finish_non_exhaustive()
    }
}

impl BrowserLogger {
    /// Create a browser logger writing to the default console
    pub fn new(options: LoggerOptions) -> Self {
        Self {
            loglevel: options.loglevel,
            console: default_console(),
        }
    }

    /// Write to `console` instead of the default one
    pub fn with_console(mut self, console: Arc<dyn Console>) -> Self {
        self.console = console;
        self
    }

    /// CSS applied to each level. Warnings and errors share red.
    pub fn style(level: LogLevel) -> &'static str {
        match level {
            LogLevel::Trace => "color: gray;",
            LogLevel::Info => "color: black;",
            LogLevel::Warn | LogLevel::Err => "color: red;",
        }
    }

    /// Format a line without the style placeholder
    pub fn format(timestamp: &str, level: LogLevel, source: &str, message: &str) -> String {
        format!("{} [{}] {}: {}", timestamp, level.label(), source, message)
    }

    fn write(&self, level: LogLevel, source: &str, message: &str) -> Completion {
        if !self.loglevel.allows(level) {
            return Completion::DONE;
        }

        let formatted = Self::format(&timestamp::now(), level, source, message);
        self.console.write(
            Channel::for_level(level),
            &format!("%c{}", formatted),
            Some(Self::style(level)),
        );
        Completion::DONE
    }
}

impl Logger for BrowserLogger {
    fn loglevel(&self) -> LogLevel {
        self.loglevel
    }

    fn trace(&self, source: &str, message: &str) -> Completion {
        self.write(LogLevel::Trace, source, message)
    }

    fn info(&self, source: &str, message: &str) -> Completion {
        self.write(LogLevel::Info, source, message)
    }

    fn warn(&self, source: &str, message: &str) -> Completion {
        self.write(LogLevel::Warn, source, message)
    }

    fn err(&self, source: &str, message: &str) -> Completion {
        self.write(LogLevel::Err, source, message)
    }
}
