//! Python bindings for logport via PyO3

use pyo3::prelude::*;
use pyo3::exceptions::PyValueError;

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

fn parse_options(loglevel: &str) -> PyResult<CoreLoggerOptions> {
    let level: CoreLogLevel = loglevel
        .parse()
        .map_err(|e: logport_core::ParseLevelError| PyValueError::new_err(e.to_string()))?;
    Ok(CoreLoggerOptions::new(level))
}

// ============================================================================
// CliLogger
// ============================================================================

#[pyclass]
pub struct CliLogger {
    inner: CoreCliLogger,
}

#[pymethods]
impl CliLogger {
    #[new]
    #[pyo3(signature = (loglevel = "info"))]
    pub fn new(loglevel: &str) -> PyResult<Self> {
        Ok(Self { inner: CoreCliLogger::new(parse_options(loglevel)?) })
    }

    #[getter]
    pub fn loglevel(&self) -> String { self.inner.loglevel().to_string() }

    pub fn trace(&self, source: &str, message: &str) { self.inner.trace(source, message); }

    pub fn info(&self, source: &str, message: &str) { self.inner.info(source, message); }

    pub fn warn(&self, source: &str, message: &str) { self.inner.warn(source, message); }

    pub fn err(&self, source: &str, message: &str) { self.inner.err(source, message); }

    fn __repr__(&self) -> String { format!("CliLogger(loglevel='{}')", self.inner.loglevel()) }
}

// ============================================================================
// BrowserLogger
// ============================================================================

#[pyclass]
pub struct BrowserLogger {
    inner: CoreBrowserLogger,
}

#[pymethods]
impl BrowserLogger {
    #[new]
    #[pyo3(signature = (loglevel = "info"))]
    pub fn new(loglevel: &str) -> PyResult<Self> {
        Ok(Self { inner: CoreBrowserLogger::new(parse_options(loglevel)?) })
    }

    #[getter]
    pub fn loglevel(&self) -> String { self.inner.loglevel().to_string() }

    pub fn trace(&self, source: &str, message: &str) { self.inner.trace(source, message); }

    pub fn info(&self, source: &str, message: &str) { self.inner.info(source, message); }

    pub fn warn(&self, source: &str, message: &str) { self.inner.warn(source, message); }

    pub fn err(&self, source: &str, message: &str) { self.inner.err(source, message); }

    fn __repr__(&self) -> String { format!("BrowserLogger(loglevel='{}')", self.inner.loglevel()) }
}

// ============================================================================
// NullLogger
// ============================================================================

#[pyclass]
pub struct NullLogger {
    inner: CoreNullLogger,
}

#[pymethods]
impl NullLogger {
    #[new]
    pub fn new() -> Self {
        Self { inner: CoreNullLogger::new() }
    }

    #[getter]
    pub fn loglevel(&self) -> String { self.inner.loglevel().to_string() }

    pub fn trace(&self, source: &str, message: &str) { self.inner.trace(source, message); }

    pub fn info(&self, source: &str, message: &str) { self.inner.info(source, message); }

    pub fn warn(&self, source: &str, message: &str) { self.inner.warn(source, message); }

    pub fn err(&self, source: &str, message: &str) { self.inner.err(source, message); }

    fn __repr__(&self) -> String { "NullLogger(loglevel='err')".to_string() }
}

// ============================================================================
// Registry
// ============================================================================

/// A logger created by adapter name
#[pyclass]
pub struct Logger {
    adapter: String,
    inner: SharedLogger,
}

#[pymethods]
impl Logger {
    #[getter]
    pub fn loglevel(&self) -> String { self.inner.loglevel().to_string() }

    #[getter]
    pub fn adapter(&self) -> String { self.adapter.clone() }

    pub fn trace(&self, source: &str, message: &str) { self.inner.trace(source, message); }

    pub fn info(&self, source: &str, message: &str) { self.inner.info(source, message); }

    pub fn warn(&self, source: &str, message: &str) { self.inner.warn(source, message); }

    pub fn err(&self, source: &str, message: &str) { self.inner.err(source, message); }

    fn __repr__(&self) -> String {
        format!("Logger(adapter='{}', loglevel='{}')", self.adapter, self.inner.loglevel())
    }
}

/// Create a logger by adapter name ("cli", "browser", "null")
#[pyfunction]
#[pyo3(signature = (adapter, loglevel = "info"))]
pub fn create_logger(adapter: &str, loglevel: &str) -> PyResult<Logger> {
    let options = parse_options(loglevel)?;
    core_create_logger(adapter, options)
        .map(|inner| Logger { adapter: adapter.to_string(), inner })
        .ok_or_else(|| PyValueError::new_err(format!("Unknown logger adapter: {}", adapter)))
}

/// List all registered logger adapters as (name, description) tuples
#[pyfunction]
pub fn list_loggers() -> Vec<(String, String)> {
    core_list_loggers()
}

// ============================================================================
// Module Definition
// ============================================================================

#[pymodule]
fn logport(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<CliLogger>()?;
    m.add_class::<BrowserLogger>()?;
    m.add_class::<NullLogger>()?;
    m.add_class::<Logger>()?;

    m.add_function(wrap_pyfunction!(create_logger, m)?)?;
    m.add_function(wrap_pyfunction!(list_loggers, m)?)?;

    Ok(())
}
