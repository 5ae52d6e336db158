//! Sample inbox used when the dashboard starts.

use autoreply_domain::{Message, MessageId, Sentiment};
use chrono::{TimeZone, Utc};
use tracing::warn;

/// The two demo messages: #1 answered (General), #2 pending (Sales)
pub fn sample_messages() -> Vec<Message> {
    let answered = Message::new(
        MessageId::new(1),
        "john@example.com",
        "What are your business hours?",
        "General",
        Utc.with_ymd_and_hms(2024, 2, 14, 10, 0, 0)
            .single()
            .unwrap_or_else(Utc::now),
    )
    .and_then(|m| {
        m.with_sentiment(Sentiment::Neutral).with_recorded_reply(
            "We're open Monday-Friday, 9:00 AM - 5:00 PM. How can we help you today?",
        )
    });

    let pending = Message::new(
        MessageId::new(2),
        "sarah@example.com",
        "Can you tell me about your pricing?",
        "Sales",
        Utc.with_ymd_and_hms(2024, 2, 14, 11, 30, 0)
            .single()
            .unwrap_or_else(Utc::now),
    )
    .map(|m| m.with_sentiment(Sentiment::Positive));

    [answered, pending]
        .into_iter()
        .filter_map(|result| match result {
            Ok(message) => Some(message),
            Err(e) => {
                warn!("Skipping invalid sample message: {}", e);
                None
            }
        })
        .collect()
}
