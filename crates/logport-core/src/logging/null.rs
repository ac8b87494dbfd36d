//! Null logger implementation

use super::completion::Completion;
use super::level::LogLevel;
use super::traits::Logger;

/// A logger that does nothing
///
/// Pass it wherever a logger is required to disable logging without
/// changing call sites. Its level is always `err`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullLogger;

impl NullLogger {
    /// Create a new null logger
    pub fn new() -> Self {
        Self
    }
}

impl Logger for NullLogger {
    fn loglevel(&self) -> LogLevel {
        LogLevel::Err
    }

    #[inline]
    fn trace(&self, _source: &str, _message: &str) -> Completion {
        Completion::DONE
    }

    #[inline]
    fn info(&self, _source: &str, _message: &str) -> Completion {
        Completion::DONE
    }

    #[inline]
    fn warn(&self, _source: &str, _message: &str) -> Completion {
        Completion::DONE
    }

    #[inline]
    fn err(&self, _source: &str, _message: &str) -> Completion {
        Completion::DONE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_logger_level_is_err() {
        assert_eq!(NullLogger::new().loglevel(), LogLevel::Err);
        assert_eq!(NullLogger.loglevel(), LogLevel::Err);
    }

    #[tokio::test]
    async fn test_null_logger_returns_shared_completion() {
        let logger = NullLogger::new();

        let c1 = logger.trace("a.ts", "msg1");
        let c2 = logger.info("a.ts", "msg2");
        let c3 = logger.warn("a.ts", "msg3");
        let c4 = logger.err("a.ts", "msg4");

        assert_eq!(c1, c2);
        assert_eq!(c2, c3);
        assert_eq!(c3, c4);
        assert_eq!(c4, logger.err("a.ts", "again"));

        c4.await;
    }

    #[test]
    fn test_null_logger_as_trait_object() {
        let logger: Box<dyn Logger> = Box::new(NullLogger::new());
        assert!(!logger.is_enabled(LogLevel::Warn));
        assert!(logger.is_enabled(LogLevel::Err));
        logger.log(LogLevel::Info, "a.ts", "discarded");
    }

    #[test]
    fn test_null_logger_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<NullLogger>();
    }
}
