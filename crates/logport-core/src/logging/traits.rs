//! Logger trait definition

use std::sync::Arc;

use super::completion::Completion;
use super::level::LogLevel;

/// Logger abstraction shared by every output adapter
///
/// Implementations:
/// - `CliLogger`: colored terminal lines with hostname and pid
/// - `BrowserLogger`: styled lines for a browser-like console
/// - `NullLogger`: discards everything
///
/// The minimum level is fixed at construction. Calls below it return
/// immediately without formatting or touching any output channel.
pub trait Logger: Send + Sync {
    /// The minimum level this logger emits
    fn loglevel(&self) -> LogLevel;

    /// Log a trace message
    fn trace(&self, source: &str, message: &str) -> Completion;

    /// Log an info message
    fn info(&self, source: &str, message: &str) -> Completion;

    /// Log a warning message
    fn warn(&self, source: &str, message: &str) -> Completion;

    /// Log an error message
    fn err(&self, source: &str, message: &str) -> Completion;

    /// Log a message at a level chosen at runtime
    fn log(&self, level: LogLevel, source: &str, message: &str) -> Completion {
        match level {
            LogLevel::Trace => self.trace(source, message),
            LogLevel::Info => self.info(source, message),
            LogLevel::Warn => self.warn(source, message),
            LogLevel::Err => self.err(source, message),
        }
    }

    /// Whether a message at `level` would be emitted
    fn is_enabled(&self, level: LogLevel) -> bool {
        self.loglevel().allows(level)
    }
}

/// Type alias for a boxed logger
pub type BoxedLogger = Box<dyn Logger>;

/// Type alias for an Arc-wrapped logger
pub type SharedLogger = Arc<dyn Logger>;

/// Extension trait for logging with format arguments
///
/// The message is only rendered when the level is enabled.
pub trait LoggerExt: Logger {
    /// Log a trace message with format arguments
    fn trace_fmt(&self, source: &str, args: std::fmt::Arguments<'_>) -> Completion {
        if !self.is_enabled(LogLevel::Trace) {
            return Completion::DONE;
        }
        self.trace(source, &args.to_string())
    }

    /// Log an info message with format arguments
    fn info_fmt(&self, source: &str, args: std::fmt::Arguments<'_>) -> Completion {
        if !self.is_enabled(LogLevel::Info) {
            return Completion::DONE;
        }
        self.info(source, &args.to_string())
    }

    /// Log a warning message with format arguments
    fn warn_fmt(&self, source: &str, args: std::fmt::Arguments<'_>) -> Completion {
        if !self.is_enabled(LogLevel::Warn) {
            return Completion::DONE;
        }
        self.warn(source, &args.to_string())
    }

    /// Log an error message with format arguments
    fn err_fmt(&self, source: &str, args: std::fmt::Arguments<'_>) -> Completion {
        self.err(source, &args.to_string())
    }
}

// Implement LoggerExt for all Logger implementations
impl<T: Logger + ?Sized> LoggerExt for T {}

/// Convenience macros for logging
///
/// ```
/// use logport_core::logging::NullLogger;
/// use logport_core::log_info;
///
/// let logger = NullLogger::new();
/// let port = 8080;
/// log_info!(logger, "main", "listening on {}", port);
/// ```
#[macro_export]
macro_rules! log_trace {
    ($logger:expr, $source:expr, $($arg:tt)*) => {
        {
            use $crate::logging::LoggerExt as _;
            $logger.trace_fmt($source, format_args!($($arg)*))
        }
    };
}

#[macro_export]
macro_rules! log_info {
    ($logger:expr, $source:expr, $($arg:tt)*) => {
        {
            use $crate::logging::LoggerExt as _;
            $logger.info_fmt($source, format_args!($($arg)*))
        }
    };
}

#[macro_export]
macro_rules! log_warn {
    ($logger:expr, $source:expr, $($arg:tt)*) => {
        {
            use $crate::logging::LoggerExt as _;
            $logger.warn_fmt($source, format_args!($($arg)*))
        }
    };
}

#[macro_export]
macro_rules! log_err {
    ($logger:expr, $source:expr, $($arg:tt)*) => {
        {
            use $crate::logging::LoggerExt as _;
            $logger.err_fmt($source, format_args!($($arg)*))
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::{Channel, MemoryConsole};
    use crate::logging::CliLogger;
    use crate::config::LoggerOptions;
    use crate::host::HostInfo;

    fn capture(level: LogLevel) -> (CliLogger, Arc<MemoryConsole>) {
        let console = Arc::new(MemoryConsole::new());
        let logger = CliLogger::new(LoggerOptions::new(level))
            .with_host(HostInfo::new(None, None))
            .with_console(console.clone());
        (logger, console)
    }

    #[test]
    fn test_log_dispatches_by_level() {
        let (logger, console) = capture(LogLevel::Trace);

        logger.log(LogLevel::Trace, "src", "a");
        logger.log(LogLevel::Info, "src", "b");
        logger.log(LogLevel::Warn, "src", "c");
        logger.log(LogLevel::Err, "src", "d");

        assert_eq!(console.count(Channel::Standard), 2);
        assert_eq!(console.count(Channel::Warning), 1);
        assert_eq!(console.count(Channel::Error), 1);
    }

    #[test]
    fn test_is_enabled() {
        let (logger, _) = capture(LogLevel::Warn);
        assert!(!logger.is_enabled(LogLevel::Info));
        assert!(logger.is_enabled(LogLevel::Warn));
        assert!(logger.is_enabled(LogLevel::Err));
    }

    #[test]
    fn test_macros_format_message() {
        let (logger, console) = capture(LogLevel::Info);

        crate::log_trace!(logger, "net", "dropped {}", 1);
        crate::log_info!(logger, "net", "listening on {}:{}", "0.0.0.0", 8080);
        crate::log_err!(logger, "net", "closed");

        let entries = console.entries();
        assert_eq!(entries.len(), 2);
        assert!(entries[0].line.contains("net: listening on 0.0.0.0:8080"));
        assert!(entries[1].line.contains("[ERR] net: closed"));
    }

    #[test]
    fn test_shared_logger_trait_object() {
        let (logger, console) = capture(LogLevel::Trace);
        let shared: SharedLogger = Arc::new(logger);

        shared.warn_fmt("api", format_args!("latency {}ms", 250));

        assert_eq!(console.count(Channel::Warning), 1);
        assert!(console.entries()[0].line.contains("latency 250ms"));
    }
}
