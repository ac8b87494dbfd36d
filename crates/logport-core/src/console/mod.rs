//! Output channels that loggers write to
//!
//! - `StdConsole`: stdout/stderr for native processes
//! - `WebConsole`: the browser console (wasm32)
//! - `MemoryConsole`: in-memory capture for testing

mod traits;
mod std_console;
mod memory;
#[cfg(target_arch = "wasm32")]
mod web;

use std::sync::Arc;

pub use traits::{Channel, Console};
pub use std_console::StdConsole;
pub use memory::{ConsoleEntry, MemoryConsole};
#[cfg(target_arch = "wasm32")]
pub use web::WebConsole;

/// The console loggers use unless one is supplied
#[cfg(not(target_arch = "wasm32"))]
pub fn default_console() -> Arc<dyn Console> {
    Arc::new(StdConsole::new())
}

/// The console loggers use unless one is supplied
#[cfg(target_arch = "wasm32")]
pub fn default_console() -> Arc<dyn Console> {
    Arc::new(WebConsole::new())
}
