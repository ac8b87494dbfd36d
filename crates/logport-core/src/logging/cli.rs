//! Terminal logger implementation

use std::sync::Arc;

use super::completion::Completion;
use super::level::LogLevel;
use super::timestamp;
use super::traits::Logger;
use crate::config::LoggerOptions;
use crate::console::{default_console, Channel, Console};
use crate::host::HostInfo;

/// ANSI reset sequence appended to every line
pub const RESET: &str = "\x1b[0m";

/// A logger for terminals
///
/// Lines look like
/// `2024-05-01T12:00:00.000Z [INFO] myhost(4242): main: server started`
/// and are wrapped in a per-level ANSI color followed by a reset.
#[derive(Clone)]
pub struct CliLogger {
    loglevel: LogLevel,
    host: HostInfo,
    console: Arc<dyn Console>,
}

impl std::fmt::Debug for CliLogger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CliLogger")
            .field("loglevel", &self.loglevel)
            .field("host", &self.host)
            .finish_non_exhaustive()
    }
}

impl CliLogger {
    /// Create a terminal logger for this host, writing to the default console
    pub fn new(options: LoggerOptions) -> Self {
        Self {
            loglevel: options.loglevel,
            host: HostInfo::detect(),
            console: default_console(),
        }
    }

    /// Write to `console` instead of the default one
    pub fn with_console(mut self, console: Arc<dyn Console>) -> Self {
        self.console = console;
        self
    }

    /// Show `host` instead of the detected hostname and pid
    pub fn with_host(mut self, host: HostInfo) -> Self {
        self.host = host;
        self
    }

    pub fn host(&self) -> &HostInfo {
        &self.host
    }

    /// ANSI color for each level
    pub fn color(level: LogLevel) -> &'static str {
        match level {
            LogLevel::Trace => "\x1b[90m",
            LogLevel::Info => "\x1b[37m",
            LogLevel::Warn => "\x1b[33m",
            LogLevel::Err => "\x1b[31m",
        }
    }

    /// Format a full colored line
    pub fn format(&self, timestamp: &str, level: LogLevel, source: &str, message: &str) -> String {
        let color = Self::color(level);
        match self.host.prefix() {
            Some(prefix) => format!(
                "{}{} [{}] {}: {}: {}{}",
                color, timestamp, level.label(), prefix, source, message, RESET
            ),
            None => format!(
                "{}{} [{}] {}: {}{}",
                color, timestamp, level.label(), source, message, RESET
            ),
        }
    }

    fn write(&self, level: LogLevel, source: &str, message: &str) -> Completion {
        if !self.loglevel.allows(level) {
            return Completion::DONE;
        }

        let line = self.format(&timestamp::now(), level, source, message);
        self.console.write(Channel::for_level(level), &line, None);
        Completion::DONE
    }
}

impl Logger for CliLogger {
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
