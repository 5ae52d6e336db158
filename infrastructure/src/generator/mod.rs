//! Reply generator adapters
//!
//! Implementations of the [`ReplyGenerator`] port.

mod canned;
mod template;

pub use canned::CannedReplyGenerator;
pub use template::{DEFAULT_DELAY, TemplateReplyGenerator};

use autoreply_application::ReplyGenerator;
use autoreply_domain::BusinessConfig;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

/// Which generator backs the dispatcher
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GeneratorKind {
    /// Simulated AI template reply
    #[default]
    Template,
    /// Canned responses first, simulated AI otherwise
    Canned,
}

impl GeneratorKind {
    pub const VALID_VALUES: [&'static str; 2] = ["template", "canned"];

    pub fn as_str(&self) -> &str {
        match self {
            GeneratorKind::Template => "template",
            GeneratorKind::Canned => "canned",
        }
    }
}

impl std::str::FromStr for GeneratorKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "template" => Ok(GeneratorKind::Template),
            "canned" => Ok(GeneratorKind::Canned),
            other => Err(format!("unknown generator kind: {other}")),
        }
    }
}

/// Build the generator selected by `kind`
pub fn build_generator(
    kind: GeneratorKind,
    business: &BusinessConfig,
    delay: Duration,
) -> Arc<dyn ReplyGenerator> {
    let template: Arc<dyn ReplyGenerator> = Arc::new(TemplateReplyGenerator::new(delay));
    match kind {
        GeneratorKind::Template => template,
        GeneratorKind::Canned => Arc::new(CannedReplyGenerator::new(
            business.common_responses.clone(),
            template,
        )),
    }
}
