//! Canned-response generator
//!
//! Answers from the business's trigger → response pairs when a trigger
//! keyword appears in the message, and defers to another generator otherwise.

use async_trait::async_trait;
use autoreply_application::{GenerationError, ReplyContext, ReplyGenerator};
use autoreply_domain::CommonResponse;
use std::sync::Arc;
use tracing::debug;

pub struct CannedReplyGenerator {
    responses: Vec<CommonResponse>,
    fallback: Arc<dyn ReplyGenerator>,
}

impl CannedReplyGenerator {
    pub fn new(responses: Vec<CommonResponse>, fallback: Arc<dyn ReplyGenerator>) -> Self {
        Self {
            responses,
            fallback,
        }
    }
}

#[async_trait]
impl ReplyGenerator for CannedReplyGenerator {
    async fn generate(
        &self,
        message: &str,
        context: &ReplyContext,
    ) -> Result<String, GenerationError> {
        if let Some(canned) = CommonResponse::first_match(&self.responses, message) {
            debug!("Canned response {} matched trigger '{}'", canned.id, canned.trigger);
            return Ok(canned.response.clone());
        }
        self.fallback.generate(message, context).await
    }
}
