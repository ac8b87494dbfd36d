//! Configuration errors

use crate::logging::ParseLevelError;

/// Errors that can occur while loading logging configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    InvalidLevel(#[from] ParseLevelError),

    #[error("Unknown logger adapter: {0}")]
    UnknownAdapter(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
