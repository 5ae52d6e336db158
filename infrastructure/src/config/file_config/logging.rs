//! Logging destinations from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};

/// Raw logging configuration
///
/// ```toml
/// [logging]
/// activity_log = "~/.local/share/autoreply/activity.jsonl"
/// file = "/tmp/autoreply.log"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// JSONL activity log path
    pub activity_log: Option<String>,
    /// Diagnostic (tracing) log file; stderr when unset
    pub file: Option<String>,
}
