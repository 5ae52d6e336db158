//! Configuration issue reporting.
//!
//! [`BusinessConfig::validate`](super::config::BusinessConfig::validate) and the
//! file-config layer report problems as [`ConfigIssue`]s instead of failing on
//! the first one, so callers can show every problem at once.

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: the configuration works but may not behave as expected.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// No message categories configured.
    NoCategories,
    /// A category label is blank.
    EmptyCategory,
    /// The same category label appears twice (case-insensitive).
    DuplicateCategory { category: String },
    /// The AI model name is blank.
    EmptyModelName,
    /// Temperature outside the accepted range.
    TemperatureOutOfRange,
    /// `max_tokens` is zero.
    ZeroMaxTokens,
    /// Generator timeout is zero.
    ZeroTimeout,
    /// A canned response has a blank trigger.
    EmptyTrigger { id: u32 },
    /// An enum-like string field has an unknown value.
    InvalidEnumValue {
        field: String,
        value: String,
        valid_values: Vec<String>,
    },
}

/// A detected issue in the configuration.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub fn error(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
        }
    }

    pub fn warning(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl std::fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let level = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        write!(f, "{}: {}", level, self.message)
    }
}
