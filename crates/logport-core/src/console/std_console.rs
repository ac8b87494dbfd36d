//! Console writing to the process's stdout/stderr

use super::traits::{Channel, Console};

/// Placeholder consumed by a style argument
const STYLE_PLACEHOLDER: &str = "%c";

/// A console that writes to stdout (standard) and stderr (warning, error)
#[derive(Debug, Clone, Copy, Default)]
pub struct StdConsole;

impl StdConsole {
    /// Create a new std console
    pub fn new() -> Self {
        Self
    }

    /// The text actually printed for `line`
    pub fn render<'a>(line: &'a str, style: Option<&str>) -> &'a str {
        match style {
            Some(_) => line.strip_prefix(STYLE_PLACEHOLDER).unwrap_or(line),
            None => line,
        }
    }
}

impl Console for StdConsole {
    fn write(&self, channel: Channel, line: &str, style: Option<&str>) {
        let text = Self::render(line, style);
        match channel {
            Channel::Standard => println!("{}", text),
            Channel::Warning | Channel::Error => eprintln!("{}", text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_consumes_style_placeholder() {
        assert_eq!(StdConsole::render("%cstyled", Some("color: red;")), "styled");
        assert_eq!(StdConsole::render("%cunstyled", None), "%cunstyled");
        assert_eq!(StdConsole::render("plain", Some("color: red;")), "plain");
    }

    #[test]
    fn test_std_console_writes() {
        // This test just verifies the console doesn't panic
        let console = StdConsole::new();
        console.write(Channel::Standard, "standard line", None);
        console.write(Channel::Warning, "%cwarning line", Some("color: red;"));
        console.write(Channel::Error, "error line", None);
    }
}
