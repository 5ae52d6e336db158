//! Reply generator port
//!
//! Defines the interface for producing a reply to a customer message.
//! The AI backend behind it is a collaborator, not part of this crate.

use async_trait::async_trait;
use autoreply_domain::{AiSettings, Message};
use thiserror::Error;

/// Errors that can occur while generating a reply
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Generator returned an empty reply")]
    EmptyResponse,

    #[error("Other error: {0}")]
    Other(String),
}

/// Context passed alongside the message body
#[derive(Debug, Clone, PartialEq)]
pub struct ReplyContext {
    pub model: String,
    pub category: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl ReplyContext {
    /// Build the context for `message` from the configured AI settings
    pub fn for_message(message: &Message, ai: &AiSettings) -> Self {
        Self {
            model: ai.model.clone(),
            category: message.category().to_string(),
            temperature: ai.temperature,
            max_tokens: ai.max_tokens,
        }
    }
}

/// Generator for customer replies
///
/// Implementations (adapters) live in the infrastructure layer.
/// Calls may suspend for a long time; callers bound them with a timeout.
#[async_trait]
pub trait ReplyGenerator: Send + Sync {
    /// Generate a reply to `message`
    async fn generate(
        &self,
        message: &str,
        context: &ReplyContext,
    ) -> Result<String, GenerationError>;
}
