//! Console trait definition

use crate::logging::LogLevel;

/// One of the three standard console streams
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    /// `console.log` / stdout
    Standard,
    /// `console.warn`
    Warning,
    /// `console.error`
    Error,
}

impl Channel {
    /// The channel a message at `level` is routed to
    pub fn for_level(level: LogLevel) -> Self {
        match level {
            LogLevel::Warn => Channel::Warning,
            LogLevel::Err => Channel::Error,
            LogLevel::Trace | LogLevel::Info => Channel::Standard,
        }
    }
}

/// Output boundary for loggers
///
/// Implementations:
/// - `StdConsole`: stdout/stderr
/// - `WebConsole`: the browser `console` object (wasm32 only)
/// - `MemoryConsole`: records writes for tests
///
/// `style` carries a CSS directive for a leading `%c` placeholder in `line`;
/// consoles that cannot apply styles consume the placeholder and drop it.
pub trait Console: Send + Sync {
    /// Write one line to `channel`
    fn write(&self, channel: Channel, line: &str, style: Option<&str>);
}
