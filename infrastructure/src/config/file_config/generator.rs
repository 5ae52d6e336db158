//! Generator selection from TOML (`[generator]` section)

use crate::generator::GeneratorKind;
use autoreply_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw generator configuration
///
/// ```toml
/// [generator]
/// kind = "canned"   # "template" (default) or "canned"
/// delay_ms = 250
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGeneratorConfig {
    pub kind: String,
    /// Simulated generation latency
    pub delay_ms: u64,
}

impl Default for FileGeneratorConfig {
    fn default() -> Self {
        Self {
            kind: GeneratorKind::default().as_str().to_string(),
            delay_ms: 1000,
        }
    }
}

impl FileGeneratorConfig {
    /// Parse `kind`, falling back to the default with a warning
    pub fn parse_kind(&self) -> (GeneratorKind, Vec<ConfigIssue>) {
        match self.kind.parse::<GeneratorKind>() {
            Ok(kind) => (kind, Vec::new()),
            Err(_) => (
                GeneratorKind::default(),
                vec![ConfigIssue::warning(
                    ConfigIssueCode::InvalidEnumValue {
                        field: "generator.kind".to_string(),
                        value: self.kind.clone(),
                        valid_values: GeneratorKind::VALID_VALUES
                            .iter()
                            .map(|v| v.to_string())
                            .collect(),
                    },
                    format!(
                        "generator.kind: unknown value '{}', falling back to '{}'",
                        self.kind,
                        GeneratorKind::default().as_str()
                    ),
                )],
            ),
        }
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}
