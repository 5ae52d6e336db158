//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! Unset optional fields fall back to the built-in [`BusinessConfig`] defaults.

mod ai;
mod auth;
mod business;
mod generator;
mod logging;
mod output;
mod repl;

pub use ai::FileAiConfig;
pub use auth::FileAuthConfig;
pub use business::{FileBusinessConfig, FileCommonResponse};
pub use generator::FileGeneratorConfig;
pub use logging::FileLoggingConfig;
pub use output::{FileOutputConfig, OUTPUT_FORMATS};
pub use repl::FileReplConfig;

use autoreply_domain::{BusinessConfig, ConfigIssue};
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Business profile
    pub business: FileBusinessConfig,
    /// AI generation parameters
    pub ai: FileAiConfig,
    /// Canned responses; replaces the built-in pair when set
    pub responses: Option<Vec<FileCommonResponse>>,
    /// Generator selection
    pub generator: FileGeneratorConfig,
    /// Simulated authentication
    pub auth: FileAuthConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// REPL settings
    pub repl: FileReplConfig,
    /// Log destinations
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Merge the file values over the built-in business defaults
    pub fn to_business_config(&self) -> BusinessConfig {
        let mut config = BusinessConfig::default();

        if let Some(name) = &self.business.name {
            config.name = name.clone();
        }
        if let Some(hours) = &self.business.hours {
            config.hours = hours.clone();
        }
        if let Some(categories) = &self.business.categories {
            config.categories = categories.iter().map(|c| c.trim().to_string()).collect();
        }

        if let Some(model) = &self.ai.model {
            config.ai.model = model.clone();
        }
        if let Some(temperature) = self.ai.temperature {
            config.ai.temperature = temperature;
        }
        if let Some(max_tokens) = self.ai.max_tokens {
            config.ai.max_tokens = max_tokens;
        }
        if let Some(timeout_secs) = self.ai.timeout_secs {
            config.ai.timeout_secs = timeout_secs;
        }

        if let Some(responses) = &self.responses {
            config.common_responses = FileCommonResponse::to_common_responses(responses);
        }

        config
    }

    /// Validate the entire configuration, returning all detected issues.
    ///
    /// Checks the merged business configuration, then the enum-like string
    /// fields that fall back to defaults when unknown.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = self.to_business_config().validate();
        issues.extend(self.generator.parse_kind().1);
        issues.extend(self.output.validate());
        issues
    }
}
