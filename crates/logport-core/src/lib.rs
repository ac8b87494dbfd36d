//! logport Core
//!
//! A leveled logging facade with interchangeable output adapters.
//! Every adapter implements the same `Logger` trait, so callers can swap
//! terminal output, browser console output, or silence without changing
//! call sites.
//!
//! ```rust
//! use logport_core::{CliLogger, Logger, LoggerOptions, LogLevel};
//!
//! let logger = CliLogger::new(LoggerOptions::new(LogLevel::Warn));
//! logger.info("main", "suppressed");
//! logger.err("main", "written to stderr");
//! ```
//!
//! ## Adapters
//!
//! - `CliLogger`: ANSI-colored lines with hostname and pid
//! - `BrowserLogger`: `%c`-styled lines for browser consoles
//! - `NullLogger`: discards everything
//!
//! Adapters can also be created by name through the registry, typically from
//! a `LoggingConfig` loaded from YAML or the environment:
//!
//! ```rust,ignore
//! use logport_core::LoggingConfig;
//!
//! let logger = LoggingConfig::from_file(LoggingConfig::user_path())?
//!     .with_env_overrides()?
//!     .build()?;
//! ```

pub mod logging;
pub mod console;
pub mod config;
pub mod host;

// Re-export commonly used types
pub use logging::{
    LogLevel, ParseLevelError, Completion,
    Logger, LoggerExt, BoxedLogger, SharedLogger,
    CliLogger, BrowserLogger, NullLogger,
    register_logger, create_logger, list_loggers,
};

pub use console::{Channel, Console, StdConsole, MemoryConsole, ConsoleEntry};

pub use config::{LoggerOptions, LoggingConfig, ConfigError, ConfigResult};

pub use host::HostInfo;
