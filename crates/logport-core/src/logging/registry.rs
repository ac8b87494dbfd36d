//! Logger registry for creating adapters by name

use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::RwLock;

use super::browser::BrowserLogger;
use super::cli::CliLogger;
use super::null::NullLogger;
use super::traits::SharedLogger;
use crate::config::LoggerOptions;

/// Factory function type for creating loggers
pub type LoggerFactory = Box<dyn Fn(LoggerOptions) -> SharedLogger + Send + Sync>;

/// Definition of a registered logger adapter
pub struct LoggerDefinition {
    /// Unique name for this adapter
    pub name: String,
    /// Human-readable description
    pub description: String,
    /// Factory function to create instances
    pub factory: LoggerFactory,
}

impl std::fmt::Debug for LoggerDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoggerDefinition")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish()
    }
}

fn definition(name: &str, description: &str, factory: LoggerFactory) -> (String, LoggerDefinition) {
    (
        name.to_string(),
        LoggerDefinition {
            name: name.to_string(),
            description: description.to_string(),
            factory,
        },
    )
}

/// Global registry of logger adapters
static REGISTRY: Lazy<RwLock<HashMap<String, LoggerDefinition>>> = Lazy::new(|| {
    let map = HashMap::from([
        definition(
            "cli",
            "Colored terminal output with hostname and pid",
            Box::new(|options: LoggerOptions| -> SharedLogger { Arc::new(CliLogger::new(options)) }),
        ),
        definition(
            "browser",
            "Styled output for browser consoles",
            Box::new(|options: LoggerOptions| -> SharedLogger { Arc::new(BrowserLogger::new(options)) }),
        ),
        definition(
            "null",
            "Discards all messages",
            Box::new(|_: LoggerOptions| -> SharedLogger { Arc::new(NullLogger::new()) }),
        ),
    ]);

    RwLock::new(map)
});

/// Register a new logger adapter, replacing any adapter with the same name
///
/// # Example
///
/// ```
/// use logport_core::logging::{register_logger, create_logger, NullLogger, SharedLogger};
/// use logport_core::config::LoggerOptions;
/// use std::sync::Arc;
///
/// register_logger(
///     "quiet",
///     "Silent logger",
///     Box::new(|_: LoggerOptions| -> SharedLogger { Arc::new(NullLogger::new()) }),
/// );
/// assert!(create_logger("quiet", LoggerOptions::default()).is_some());
/// ```
pub fn register_logger(name: &str, description: &str, factory: LoggerFactory) {
    let (key, def) = definition(name, description, factory);
    REGISTRY.write().insert(key, def);
}

/// Create a logger by adapter name
///
/// # Returns
/// The created logger, or None if the name is not registered
pub fn create_logger(name: &str, options: LoggerOptions) -> Option<SharedLogger> {
    let registry = REGISTRY.read();
    registry.get(name).map(|def| (def.factory)(options))
}

/// List all registered adapters as (name, description) pairs, sorted by name
pub fn list_loggers() -> Vec<(String, String)> {
    let registry = REGISTRY.read();
    let mut loggers: Vec<_> = registry
        .values()
        .map(|def| (def.name.clone(), def.description.clone()))
        .collect();
    loggers.sort();
    loggers
}

/// Check if an adapter is registered
pub fn has_logger(name: &str) -> bool {
    REGISTRY.read().contains_key(name)
}

/// Unregister an adapter (mainly for testing)
pub fn unregister_logger(name: &str) -> bool {
    REGISTRY.write().remove(name).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::{LogLevel, Logger};

    #[test]
    fn test_builtin_loggers_registered() {
        assert!(has_logger("cli"));
        assert!(has_logger("browser"));
        assert!(has_logger("null"));
    }

    #[test]
    fn test_create_passes_options() {
        let cli = create_logger("cli", LoggerOptions::new(LogLevel::Warn)).unwrap();
        assert_eq!(cli.loglevel(), LogLevel::Warn);

        let browser = create_logger("browser", LoggerOptions::new(LogLevel::Trace)).unwrap();
        assert_eq!(browser.loglevel(), LogLevel::Trace);
    }

    #[test]
    fn test_null_ignores_options() {
        let null = create_logger("null", LoggerOptions::new(LogLevel::Trace)).unwrap();
        assert_eq!(null.loglevel(), LogLevel::Err);
    }

    #[test]
    fn test_create_unknown_logger() {
        assert!(create_logger("nonexistent_xyz", LoggerOptions::default()).is_none());
    }

    #[test]
    fn test_list_loggers() {
        let names: Vec<_> = list_loggers().into_iter().map(|(n, _)| n).collect();
        assert!(names.contains(&"cli".to_string()));
        assert!(names.contains(&"browser".to_string()));
        assert!(names.contains(&"null".to_string()));
    }

    #[test]
    fn test_register_custom_logger() {
        register_logger(
            "test_custom_logger",
            "A test logger",
            Box::new(|_: LoggerOptions| -> SharedLogger { Arc::new(NullLogger::new()) }),
        );

        assert!(has_logger("test_custom_logger"));
        let logger = create_logger("test_custom_logger", LoggerOptions::default()).unwrap();
        assert_eq!(logger.loglevel(), LogLevel::Err);

        // Clean up
        assert!(unregister_logger("test_custom_logger"));
        assert!(!has_logger("test_custom_logger"));
    }
}
