//! Logger construction options

use serde::{Deserialize, Serialize};

use crate::logging::LogLevel;

/// Options shared by the `cli` and `browser` adapters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerOptions {
    /// Minimum level that will be emitted
    pub loglevel: LogLevel,
}

impl LoggerOptions {
    pub fn new(loglevel: LogLevel) -> Self {
        Self { loglevel }
    }
}

impl Default for LoggerOptions {
    fn default() -> Self {
        Self::new(LogLevel::Info)
    }
}

impl From<LogLevel> for LoggerOptions {
    fn from(loglevel: LogLevel) -> Self {
        Self::new(loglevel)
    }
}
