//! Logger options and configuration loading
//!
//! - `LoggerOptions`: per-adapter construction options
//! - `LoggingConfig`: adapter choice plus options, from YAML/JSON files or the environment

mod options;
mod error;
mod file;

pub use options::LoggerOptions;
pub use error::{ConfigError, ConfigResult};
pub use file::{LoggingConfig, ENV_ADAPTER, ENV_LOG_LEVEL};
