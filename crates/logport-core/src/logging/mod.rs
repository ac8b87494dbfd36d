//! Leveled logging with interchangeable output adapters

mod level;
mod completion;
mod traits;
mod timestamp;
mod null;
mod browser;
mod cli;
pub mod registry;

pub use level::{LogLevel, ParseLevelError};
pub use completion::Completion;
pub use traits::{Logger, LoggerExt, BoxedLogger, SharedLogger};
pub use timestamp::iso8601;
pub use null::NullLogger;
pub use browser::BrowserLogger;
pub use cli::{CliLogger, RESET};

pub use registry::{
    register_logger, create_logger, list_loggers, has_logger, unregister_logger,
    LoggerFactory,
};
