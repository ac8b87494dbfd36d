//! Node.js bindings for logport via napi-rs

#![deny(clippy::all)]

use napi::bindgen_prelude::*;
use napi_derive::napi;
use std::sync::Arc;

use logport_core::logging::{
    Logger as CoreLogger,
    LogLevel as CoreLogLevel,
    SharedLogger,
    CliLogger as CoreCliLogger,
    BrowserLogger as CoreBrowserLogger,
    NullLogger as CoreNullLogger,
    create_logger as core_create_logger,
    list_loggers as core_list_loggers,
};
use logport_core::config::LoggerOptions as CoreLoggerOptions;

// ============================================================================
// Options
// ============================================================================

/// `{ loglevel: "trace" | "info" | "warn" | "err" }`
#[napi(object)]
pub struct LoggerOptions {
    pub loglevel: String,
}

impl TryFrom<LoggerOptions> for CoreLoggerOptions {
    type Error = Error;

    fn try_from(options: LoggerOptions) -> Result<Self> {
        let level: CoreLogLevel = options
            .loglevel
            .parse()
            .map_err(|e: logport_core::ParseLevelError| Error::from_reason(e.to_string()))?;
        Ok(CoreLoggerOptions::new(level))
    }
}

#[napi(object)]
pub struct LoggerInfo {
    pub name: String,
    pub description: String,
}

// ============================================================================
// CliLogger
// ============================================================================

/// Colored terminal logger with hostname and pid
#[napi]
pub struct CliLogger {
    inner: Arc<CoreCliLogger>,
}

#[napi]
impl CliLogger {
    #[napi(constructor)]
    pub fn new(options: LoggerOptions) -> Result<Self> {
        Ok(Self { inner: Arc::new(CoreCliLogger::new(options.try_into()?)) })
    }

    #[napi(getter)]
    pub fn loglevel(&self) -> String { self.inner.loglevel().to_string() }

    #[napi]
    pub async fn trace(&self, source: String, message: String) { self.inner.trace(&source, &message).await }

    #[napi]
    pub async fn info(&self, source: String, message: String) { self.inner.info(&source, &message).await }

    #[napi]
    pub async fn warn(&self, source: String, message: String) { self.inner.warn(&source, &message).await }

    #[napi]
    pub async fn err(&self, source: String, message: String) { self.inner.err(&source, &message).await }
}

// ============================================================================
// BrowserLogger
// ============================================================================

/// Browser-style logger; on Node the style placeholder is dropped
#[napi]
pub struct BrowserLogger {
    inner: Arc<CoreBrowserLogger>,
}

#[napi]
impl BrowserLogger {
    #[napi(constructor)]
    pub fn new(options: LoggerOptions) -> Result<Self> {
        Ok(Self { inner: Arc::new(CoreBrowserLogger::new(options.try_into()?)) })
    }

    #[napi(getter)]
    pub fn loglevel(&self) -> String { self.inner.loglevel().to_string() }

    #[napi]
    pub async fn trace(&self, source: String, message: String) { self.inner.trace(&source, &message).await }

    #[napi]
    pub async fn info(&self, source: String, message: String) { self.inner.info(&source, &message).await }

    #[napi]
    pub async fn warn(&self, source: String, message: String) { self.inner.warn(&source, &message).await }

    #[napi]
    pub async fn err(&self, source: String, message: String) { self.inner.err(&source, &message).await }
}

// ============================================================================
// NullLogger
// ============================================================================

/// Logger that discards everything; `loglevel` is always "err"
#[napi]
pub struct NullLogger {
    inner: CoreNullLogger,
}

#[napi]
impl NullLogger {
    #[napi(constructor)]
    pub fn new() -> Self {
        Self { inner: CoreNullLogger::new() }
    }

    #[napi(getter)]
    pub fn loglevel(&self) -> String { self.inner.loglevel().to_string() }

    #[napi]
    pub async fn trace(&self, source: String, message: String) { self.inner.trace(&source, &message).await }

    #[napi]
    pub async fn info(&self, source: String, message: String) { self.inner.info(&source, &message).await }

    #[napi]
    pub async fn warn(&self, source: String, message: String) { self.inner.warn(&source, &message).await }

    #[napi]
    pub async fn err(&self, source: String, message: String) { self.inner.err(&source, &message).await }
}

// ============================================================================
// Registry
// ============================================================================

/// A logger created by adapter name
#[napi]
pub struct Logger {
    inner: SharedLogger,
}

#[napi]
impl Logger {
    #[napi(getter)]
    pub fn loglevel(&self) -> String { self.inner.loglevel().to_string() }

    #[napi]
    pub async fn trace(&self, source: String, message: String) { self.inner.trace(&source, &message).await }

    #[napi]
    pub async fn info(&self, source: String, message: String) { self.inner.info(&source, &message).await }

    #[napi]
    pub async fn warn(&self, source: String, message: String) { self.inner.warn(&source, &message).await }

    #[napi]
    pub async fn err(&self, source: String, message: String) { self.inner.err(&source, &message).await }
}

/// Create a logger by adapter name ("cli", "browser", "null")
#[napi]
pub fn create_logger(adapter: String, options: Option<LoggerOptions>) -> Result<Logger> {
    let options = match options {
        Some(options) => options.try_into()?,
        None => CoreLoggerOptions::default(),
    };
    core_create_logger(&adapter, options)
        .map(|inner| Logger { inner })
        .ok_or_else(|| Error::from_reason(format!("Unknown logger adapter: {}", adapter)))
}

/// List all registered logger adapters
#[napi]
pub fn list_loggers() -> Vec<LoggerInfo> {
    core_list_loggers()
        .into_iter()
        .map(|(name, description)| LoggerInfo { name, description })
        .collect()
}
