//! Business configuration value objects

use super::validation::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::time::Duration;

/// Parameters passed to the reply generator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiSettings {
    /// Model identifier, e.g. "gpt-4"
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    /// Upper bound on a single generation call
    pub timeout_secs: u64,
}

impl AiSettings {
    pub const MAX_TEMPERATURE: f32 = 2.0;

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for AiSettings {
    fn default() -> Self {
        Self {
            model: "gpt-4".to_string(),
            temperature: 0.7,
            max_tokens: 150,
            timeout_secs: 30,
        }
    }
}

/// A trigger keyword paired with a canned reply
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommonResponse {
    pub id: u32,
    pub trigger: String,
    pub response: String,
}

impl CommonResponse {
    pub fn new(id: u32, trigger: impl Into<String>, response: impl Into<String>) -> Self {
        Self {
            id,
            trigger: trigger.into(),
            response: response.into(),
        }
    }

    /// Case-insensitive substring match of the trigger in `text`.
    /// A blank trigger never matches.
    pub fn matches(&self, text: &str) -> bool {
        let trigger = self.trigger.trim();
        !trigger.is_empty() && text.to_lowercase().contains(&trigger.to_lowercase())
    }

    /// First response in `responses` whose trigger occurs in `text`
    pub fn first_match<'a>(
        responses: &'a [CommonResponse],
        text: &str,
    ) -> Option<&'a CommonResponse> {
        responses.iter().find(|r| r.matches(text))
    }
}

/// Business profile and reply settings (Value Object)
///
/// Immutable for the lifetime of a dashboard session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessConfig {
    pub name: String,
    /// Human-readable operating hours, e.g. "9:00 AM - 5:00 PM"
    pub hours: String,
    pub ai: AiSettings,
    pub common_responses: Vec<CommonResponse>,
    pub categories: Vec<String>,
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self {
            name: "Sample Business".to_string(),
            hours: "9:00 AM - 5:00 PM".to_string(),
            ai: AiSettings::default(),
            common_responses: vec![
                CommonResponse::new(
                    1,
                    "pricing",
                    "Our pricing starts at $99/month. Would you like to see our detailed pricing guide?",
                ),
                CommonResponse::new(
                    2,
                    "hours",
                    "We're open Monday-Friday, 9:00 AM - 5:00 PM. How can we help you today?",
                ),
            ],
            categories: ["General", "Sales", "Support", "Technical", "Billing"]
                .iter()
                .map(|c| c.to_string())
                .collect(),
        }
    }
}

impl BusinessConfig {
    /// Check whether `category` is one of the configured labels (case-insensitive)
    pub fn has_category(&self, category: &str) -> bool {
        self.categories
            .iter()
            .any(|c| c.eq_ignore_ascii_case(category.trim()))
    }

    /// Validate the configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if self.categories.is_empty() {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::NoCategories,
                "business.categories: at least one category is required",
            ));
        }

        let mut seen = HashSet::new();
        for category in &self.categories {
            let key = category.trim().to_lowercase();
            if key.is_empty() {
                issues.push(ConfigIssue::error(
                    ConfigIssueCode::EmptyCategory,
                    "business.categories: category label cannot be empty",
                ));
            } else if !seen.insert(key) {
                issues.push(ConfigIssue::warning(
                    ConfigIssueCode::DuplicateCategory {
                        category: category.clone(),
                    },
                    format!("business.categories: duplicate category '{}'", category),
                ));
            }
        }

        if self.ai.model.trim().is_empty() {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::EmptyModelName,
                "ai.model: model name cannot be empty",
            ));
        }

        if !(0.0..=AiSettings::MAX_TEMPERATURE).contains(&self.ai.temperature) {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::TemperatureOutOfRange,
                format!(
                    "ai.temperature: {} is outside 0.0-{}",
                    self.ai.temperature,
                    AiSettings::MAX_TEMPERATURE
                ),
            ));
        }

        if self.ai.max_tokens == 0 {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::ZeroMaxTokens,
                "ai.max_tokens: must be greater than zero",
            ));
        }

        if self.ai.timeout_secs == 0 {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::ZeroTimeout,
                "ai.timeout_secs: must be greater than zero",
            ));
        }

        for response in &self.common_responses {
            if response.trigger.trim().is_empty() {
                issues.push(ConfigIssue::warning(
                    ConfigIssueCode::EmptyTrigger { id: response.id },
                    format!("responses[{}]: trigger is empty and will never match", response.id),
                ));
            }
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::business::validation::Severity;

    #[test]
    fn test_default_matches_sample_business() {
        let config = BusinessConfig::default();
        assert_eq!(config.name, "Sample Business");
        assert_eq!(config.ai.model, "gpt-4");
        assert_eq!(config.ai.max_tokens, 150);
        assert_eq!(config.categories.len(), 5);
        assert_eq!(config.common_responses.len(), 2);
        assert_eq!(config.ai.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_default_is_valid() {
        assert!(BusinessConfig::default().validate().is_empty());
    }

    #[test]
    fn test_has_category() {
        let config = BusinessConfig::default();
        assert!(config.has_category("Sales"));
        assert!(config.has_category("billing"));
        assert!(!config.has_category("Spam"));
    }

    #[test]
    fn test_first_match_over_default_responses() {
        let responses = BusinessConfig::default().common_responses;
        let hit = CommonResponse::first_match(&responses, "Can you tell me about your PRICING?")
            .unwrap();
        assert_eq!(hit.id, 1);
        assert!(CommonResponse::first_match(&responses, "Where are you located?").is_none());
    }

    #[test]
    fn test_blank_trigger_never_matches() {
        let response = CommonResponse::new(9, "  ", "anything");
        assert!(!response.matches("hello"));
    }

    #[test]
    fn test_validate_collects_all_issues() {
        let mut config = BusinessConfig::default();
        config.categories = vec!["Sales".into(), "sales".into(), "".into()];
        config.ai.model = " ".into();
        config.ai.temperature = 3.5;
        config.ai.max_tokens = 0;
        config.ai.timeout_secs = 0;
        config.common_responses.push(CommonResponse::new(3, "", "x"));

        let issues = config.validate();
        let codes: Vec<_> = issues.iter().map(|i| i.code.clone()).collect();
        assert!(codes.contains(&ConfigIssueCode::EmptyCategory));
        assert!(codes.contains(&ConfigIssueCode::DuplicateCategory {
            category: "sales".into()
        }));
        assert!(codes.contains(&ConfigIssueCode::EmptyModelName));
        assert!(codes.contains(&ConfigIssueCode::TemperatureOutOfRange));
        assert!(codes.contains(&ConfigIssueCode::ZeroMaxTokens));
        assert!(codes.contains(&ConfigIssueCode::ZeroTimeout));
        assert!(codes.contains(&ConfigIssueCode::EmptyTrigger { id: 3 }));
        assert!(issues.iter().any(|i| i.severity == Severity::Error));
    }

    #[test]
    fn test_no_categories_is_error() {
        let config = BusinessConfig {
            categories: vec![],
            ..BusinessConfig::default()
        };
        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert!(issues[0].is_error());
    }
}
