//! Authentication settings from TOML (`[auth]` section)

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw auth configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAuthConfig {
    /// Simulated login latency
    pub delay_ms: u64,
}

impl Default for FileAuthConfig {
    fn default() -> Self {
        Self { delay_ms: 1000 }
    }
}

impl FileAuthConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}
