//! Presentation-level configuration
//!
//! Configuration for output formatting and dashboard behavior.

use crate::cli::commands::OutputFormat;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Output configuration for the presentation layer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format: "text" or "json"
    pub format: Option<String>,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
        }
    }
}

impl OutputConfig {
    /// Parse the format string, falling back to text when unset or unknown
    pub fn parse_format(&self) -> OutputFormat {
        self.format
            .as_deref()
            .and_then(|f| f.parse().ok())
            .unwrap_or_default()
    }
}

/// Dashboard REPL configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReplConfig {
    /// Show progress indicators
    pub show_progress: bool,
    /// Path to history file
    pub history_file: Option<String>,
    /// Prompt label
    pub prompt: String,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            show_progress: true,
            history_file: None,
            prompt: "autoreply".to_string(),
        }
    }
}

impl ReplConfig {
    /// Resolve the history file, defaulting to the user data directory.
    /// A leading `~/` expands to the home directory.
    pub fn history_path(&self) -> Option<PathBuf> {
        match &self.history_file {
            Some(path) => match path.strip_prefix("~/") {
                Some(rest) => dirs::home_dir().map(|home| home.join(rest)),
                None => Some(PathBuf::from(path)),
            },
            None => dirs::data_dir().map(|d| d.join("autoreply").join("history.txt")),
        }
    }
}
