//! Host identity shown in terminal log lines

/// Hostname and process id, captured once per logger
///
/// Either value may be unavailable (e.g. on wasm targets); formatting
/// simply omits whatever is missing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HostInfo {
    hostname: Option<String>,
    pid: Option<u32>,
}

impl HostInfo {
    /// Build host info from explicit values
    ///
    /// Empty hostnames and a pid of 0 are treated as unavailable.
    pub fn new(hostname: Option<String>, pid: Option<u32>) -> Self {
        Self {
            hostname: hostname.filter(|h| !h.is_empty()),
            pid: pid.filter(|p| *p != 0),
        }
    }

    /// Look up the current machine's hostname and this process's id
    #[cfg(not(target_arch = "wasm32"))]
    pub fn detect() -> Self {
        let hostname = gethostname::gethostname().into_string().ok();
        Self::new(hostname, Some(std::process::id()))
    }

    /// Look up the current machine's hostname and this process's id
    #[cfg(target_arch = "wasm32")]
    pub fn detect() -> Self {
        Self::default()
    }

    pub fn hostname(&self) -> Option<&str> {
        self.hostname.as_deref()
    }

    pub fn pid(&self) -> Option<u32> {
        self.pid
    }

    /// Render the `hostname(pid)` segment, or `None` when both are missing
    pub fn prefix(&self) -> Option<String> {
        match (&self.hostname, self.pid) {
            (Some(host), Some(pid)) => Some(format!("{}({})", host, pid)),
            (Some(host), None) => Some(host.clone()),
            (None, Some(pid)) => Some(format!("({})", pid)),
            (None, None) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_combinations() {
        let both = HostInfo::new(Some("box".to_string()), Some(42));
        assert_eq!(both.prefix().as_deref(), Some("box(42)"));

        let host_only = HostInfo::new(Some("box".to_string()), None);
        assert_eq!(host_only.prefix().as_deref(), Some("box"));

        let pid_only = HostInfo::new(None, Some(42));
        assert_eq!(pid_only.prefix().as_deref(), Some("(42)"));

        assert_eq!(HostInfo::new(None, None).prefix(), None);
    }

    #[test]
    fn test_empty_values_are_unavailable() {
        let info = HostInfo::new(Some(String::new()), Some(0));
        assert_eq!(info.hostname(), None);
        assert_eq!(info.pid(), None);
        assert_eq!(info.prefix(), None);
    }

    #[test]
    fn test_detect_uses_current_process() {
        let info = HostInfo::detect();
        assert_eq!(info.pid(), Some(std::process::id()));
    }
}
