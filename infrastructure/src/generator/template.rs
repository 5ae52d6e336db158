//! Simulated AI reply generator

use async_trait::async_trait;
use autoreply_application::{GenerationError, ReplyContext, ReplyGenerator};
use std::time::Duration;
use tracing::debug;

/// Default simulated latency of a generation call
pub const DEFAULT_DELAY: Duration = Duration::from_millis(1000);

/// Stand-in for a real AI backend: waits, then fills in a fixed template.
pub struct TemplateReplyGenerator {
    delay: Duration,
}

impl TemplateReplyGenerator {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Render the reply text without waiting
    pub fn render(message: &str, context: &ReplyContext) -> String {
        format!(
            "AI-generated response based on: {} (Using {})",
            message, context.model
        )
    }
}

impl Default for TemplateReplyGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY)
    }
}

#[async_trait]
impl ReplyGenerator for TemplateReplyGenerator {
    async fn generate(
        &self,
        message: &str,
        context: &ReplyContext,
    ) -> Result<String, GenerationError> {
        debug!(
            "Simulating {} generation ({}ms delay)",
            context.model,
            self.delay.as_millis()
        );
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        Ok(Self::render(message, context))
    }
}
