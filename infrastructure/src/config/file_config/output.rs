//! Output configuration from TOML (`[output]` section)

use autoreply_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};

/// Accepted values for `output.format`
pub const OUTPUT_FORMATS: [&str; 2] = ["text", "json"];

/// Raw output configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Output format: "text" or "json"
    pub format: Option<String>,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
        }
    }
}

impl FileOutputConfig {
    pub fn validate(&self) -> Vec<ConfigIssue> {
        match &self.format {
            Some(format) if !OUTPUT_FORMATS.contains(&format.to_lowercase().as_str()) => {
                vec![ConfigIssue::warning(
                    ConfigIssueCode::InvalidEnumValue {
                        field: "output.format".to_string(),
                        value: format.clone(),
                        valid_values: OUTPUT_FORMATS.iter().map(|v| v.to_string()).collect(),
                    },
                    format!("output.format: unknown value '{}', falling back to 'text'", format),
                )]
            }
            _ => Vec::new(),
        }
    }
}
