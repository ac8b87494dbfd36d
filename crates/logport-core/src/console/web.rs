//! Browser console (wasm32 only)

use wasm_bindgen::JsValue;

use super::traits::{Channel, Console};

/// A console backed by the browser's global `console` object
///
/// Styles are passed as the second argument so `%c` placeholders apply them.
#[derive(Debug, Clone, Copy, Default)]
pub struct WebConsole;

impl WebConsole {
    /// Create a new web console
    pub fn new() -> Self {
        Self
    }
}

impl Console for WebConsole {
    fn write(&self, channel: Channel, line: &str, style: Option<&str>) {
        let line = JsValue::from_str(line);
        match (channel, style) {
            (Channel::Standard, Some(css)) => web_sys::console::log_2(&line, &JsValue::from_str(css)),
            (Channel::Standard, None) => web_sys::console::log_1(&line),
            (Channel::Warning, Some(css)) => web_sys::console::warn_2(&line, &JsValue::from_str(css)),
            (Channel::Warning, None) => web_sys::console::warn_1(&line),
            (Channel::Error, Some(css)) => web_sys::console::error_2(&line, &JsValue::from_str(css)),
            (Channel::Error, None) => web_sys::console::error_1(&line),
        }
    }
}
