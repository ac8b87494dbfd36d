//! File and environment based logging configuration
//!
//! ```yaml
//! # ~/.config/logport/logging.yaml
//! adapter: cli
//! loglevel: warn
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::error::{ConfigError, ConfigResult};
use super::options::LoggerOptions;
use crate::logging::{create_logger, LogLevel, SharedLogger};

/// Environment variable selecting the adapter
pub const ENV_ADAPTER: &str = "LOGPORT_ADAPTER";

/// Environment variable selecting the minimum level
pub const ENV_LOG_LEVEL: &str = "LOGPORT_LOG_LEVEL";

fn default_adapter() -> String {
    "cli".to_string()
}

fn default_loglevel() -> LogLevel {
    LogLevel::Info
}

/// Which adapter to build and with what options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Registered adapter name (`cli`, `browser`, `null`, or a custom one)
    #[serde(default = "default_adapter")]
    pub adapter: String,

    /// Minimum level that will be emitted
    #[serde(default = "default_loglevel")]
    pub loglevel: LogLevel,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            adapter: default_adapter(),
            loglevel: default_loglevel(),
        }
    }
}

impl LoggingConfig {
    /// Parse a YAML document
    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Parse a JSON document
    pub fn from_json_str(content: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Load a YAML file. A missing file yields the defaults.
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Defaults overridden by `LOGPORT_ADAPTER` and `LOGPORT_LOG_LEVEL`
    pub fn from_env() -> ConfigResult<Self> {
        Self::default().with_env_overrides()
    }

    /// Apply `LOGPORT_ADAPTER` and `LOGPORT_LOG_LEVEL` on top of this config
    pub fn with_env_overrides(self) -> ConfigResult<Self> {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides read through `lookup`, keyed by the `LOGPORT_*` names
    pub fn with_overrides_from<F>(mut self, lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(adapter) = lookup(ENV_ADAPTER).filter(|v| !v.trim().is_empty()) {
            self.adapter = adapter.trim().to_lowercase();
        }
        if let Some(level) = lookup(ENV_LOG_LEVEL).filter(|v| !v.trim().is_empty()) {
            self.loglevel = level.parse()?;
        }
        Ok(self)
    }

    /// User-level config path (`~/.config/logport/logging.yaml` on Linux)
    pub fn user_path() -> PathBuf {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")).join(".config"));
        config_dir.join("logport").join("logging.yaml")
    }

    /// Options handed to the adapter
    pub fn options(&self) -> LoggerOptions {
        LoggerOptions::new(self.loglevel)
    }

    /// Build the configured logger through the adapter registry
    pub fn build(&self) -> ConfigResult<SharedLogger> {
        create_logger(&self.adapter, self.options())
            .ok_or_else(|| ConfigError::UnknownAdapter(self.adapter.clone()))
    }
}
