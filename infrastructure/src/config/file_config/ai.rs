//! AI generation settings from TOML (`[ai]` section)

use serde::{Deserialize, Serialize};

/// Raw AI settings; unset fields keep the built-in defaults
///
/// # Example
///
/// ```toml
/// [ai]
/// model = "gpt-4"
/// temperature = 0.7
/// max_tokens = 150
/// timeout_secs = 30
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAiConfig {
    pub model: Option<String>,
    pub temperature: Option<f32>,
    pub max_tokens: Option<u32>,
    /// Upper bound on a single generation call
    pub timeout_secs: Option<u64>,
}
