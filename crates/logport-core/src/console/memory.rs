//! In-memory console

use parking_lot::Mutex;

use super::traits::{Channel, Console};

/// A single recorded write
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleEntry {
    pub channel: Channel,
    pub line: String,
    pub style: Option<String>,
}

/// Console that records every write, for tests and embedders that
/// want to inspect log output
#[derive(Debug, Default)]
pub struct MemoryConsole {
    entries: Mutex<Vec<ConsoleEntry>>,
}

impl MemoryConsole {
    /// Create a new empty memory console
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all writes so far, oldest first
    pub fn entries(&self) -> Vec<ConsoleEntry> {
        self.entries.lock().clone()
    }

    /// Number of writes to `channel`
    pub fn count(&self, channel: Channel) -> usize {
        self.entries.lock().iter().filter(|e| e.channel == channel).count()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    /// Forget all recorded writes
    pub fn clear(&self) {
        self.entries.lock().clear();
    }
}

impl Console for MemoryConsole {
    fn write(&self, channel: Channel, line: &str, style: Option<&str>) {
        self.entries.lock().push(ConsoleEntry {
            channel,
            line: line.to_string(),
            style: style.map(str::to_string),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_console() {
        let console = MemoryConsole::new();
        assert!(console.is_empty());

        console.write(Channel::Standard, "one", None);
        console.write(Channel::Error, "%ctwo", Some("color: red;"));

        assert_eq!(console.len(), 2);
        assert_eq!(console.count(Channel::Standard), 1);
        assert_eq!(console.count(Channel::Warning), 0);
        assert_eq!(console.count(Channel::Error), 1);

        let entries = console.entries();
        assert_eq!(entries[1].line, "%ctwo");
        assert_eq!(entries[1].style.as_deref(), Some("color: red;"));

        console.clear();
        assert!(console.is_empty());
    }
}
