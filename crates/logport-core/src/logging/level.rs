//! Severity levels and the filtering rule

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Log levels in ascending severity
///
/// A logger configured with a minimum level emits every message at that
/// level or above and silently drops the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Detailed debugging output
    Trace = 0,
    /// Standard informational messages
    Info = 1,
    /// Unusual or potentially problematic behavior
    Warn = 2,
    /// Errors that require attention
    Err = 3,
}

impl LogLevel {
    /// All levels, least severe first
    pub const ALL: [LogLevel; 4] = [LogLevel::Trace, LogLevel::Info, LogLevel::Warn, LogLevel::Err];

    /// Lowercase name, as accepted in options and config files
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Err => "err",
        }
    }

    /// Uppercase tag used inside formatted lines
    pub fn label(&self) -> &'static str {
        match self {
            LogLevel::Trace => "TRACE",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Err => "ERR",
        }
    }

    /// Whether a logger with `self` as its minimum emits a message at `level`
    #[inline]
    pub fn allows(self, level: LogLevel) -> bool {
        level >= self
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not one of `trace`, `info`, `warn`, `err`
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid log level '{0}' (expected one of: trace, info, warn, err)")]
pub struct ParseLevelError(pub String);

impl FromStr for LogLevel {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, ParseLevelError> {
        match s.trim().to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "err" => Ok(LogLevel::Err),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_ordering() {
        assert!(LogLevel::Trace < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Warn);
        assert!(LogLevel::Warn < LogLevel::Err);
    }

    #[test]
    fn test_allows_matrix() {
        for (i, min) in LogLevel::ALL.iter().enumerate() {
            for (j, level) in LogLevel::ALL.iter().enumerate() {
                assert_eq!(min.allows(*level), j >= i, "min={} level={}", min, level);
            }
        }
    }

    #[test]
    fn test_err_minimum_still_allows_err() {
        assert!(LogLevel::Err.allows(LogLevel::Err));
        assert!(!LogLevel::Err.allows(LogLevel::Warn));
    }

    #[test]
    fn test_labels() {
        assert_eq!(LogLevel::Trace.label(), "TRACE");
        assert_eq!(LogLevel::Err.label(), "ERR");
        assert_eq!(LogLevel::Warn.to_string(), "warn");
    }

    #[test]
    fn test_parse() {
        assert_eq!("info".parse::<LogLevel>(), Ok(LogLevel::Info));
        assert_eq!(" WARN ".parse::<LogLevel>(), Ok(LogLevel::Warn));
        assert_eq!("err".parse::<LogLevel>(), Ok(LogLevel::Err));

        let err = "error".parse::<LogLevel>().unwrap_err();
        assert_eq!(err, ParseLevelError("error".to_string()));
        assert!(err.to_string().contains("'error'"));
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&LogLevel::Trace).unwrap();
        assert_eq!(json, "\"trace\"");

        let level: LogLevel = serde_json::from_str("\"err\"").unwrap();
        assert_eq!(level, LogLevel::Err);

        assert!(serde_json::from_str::<LogLevel>("\"debug\"").is_err());
    }
}
