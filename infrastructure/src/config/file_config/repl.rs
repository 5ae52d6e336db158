//! Dashboard REPL configuration from TOML (`[repl]` section)

use serde::{Deserialize, Serialize};

/// Raw REPL configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileReplConfig {
    /// Show a spinner while replies are generated
    pub show_progress: bool,
    /// Path to history file
    pub history_file: Option<String>,
    /// Prompt label
    pub prompt: String,
}

impl Default for FileReplConfig {
    fn default() -> Self {
        Self {
            show_progress: true,
            history_file: None,
            prompt: "autoreply".to_string(),
        }
    }
}
