use anyhow::Result;
use log::info;

/// Access to the page location: where we are and where to go next
pub trait NavigationPort {
    /// Current search string, e.g. `?sort_by=name&page=2`, or empty
    fn read_current_query(&self) -> String;

    /// Navigate to a relative target such as `?per_page=50`
    fn navigate_to(&mut self, target: &str) -> Result<()>;
}

/// In-memory location.
///
/// Every navigation is recorded and becomes the current query, the same
/// way a reload would land on the new URL.
#[derive(Debug, Clone, Default)]
pub struct MemoryLocation {
    current: String,
    history: Vec<String>,
}

impl MemoryLocation {
    pub fn new(current: impl Into<String>) -> Self {
        Self {
            current: current.into(),
            history: Vec::new(),
        }
    }

    pub fn current(&self) -> &str {
        &self.current
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn last_target(&self) -> Option<&str> {
        self.history.last().map(String::as_str)
    }
}

impl NavigationPort for MemoryLocation {
    fn read_current_query(&self) -> String {
        self.current.clone()
    }

    fn navigate_to(&mut self, target: &str) -> Result<()> {
        info!("Navigating to {}", target);
        self.history.push(target.to_string());
        self.current = target.to_string();
        Ok(())
    }
}
