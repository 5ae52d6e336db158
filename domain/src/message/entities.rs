//! Message domain entities
//!
//! A [`Message`] is a customer inquiry tracked by the dashboard. Its status
//! moves one way only: `Pending` → `Answered`. The reply fields are private
//! so the `status == Answered ⇔ response.is_some()` invariant can only be
//! changed through [`Message::answer`].

use crate::core::error::DomainError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unique identifier for a message.
///
/// Assigned by the message store from a monotonically increasing counter;
/// never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageId(u64);

impl MessageId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    /// The identifier following this one, or `None` at `u64::MAX`
    pub fn next(&self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl std::fmt::Display for MessageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl std::str::FromStr for MessageId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .trim_start_matches('#')
            .parse::<u64>()
            .map(MessageId)
            .map_err(|_| DomainError::InvalidMessage(format!("invalid message id: {s}")))
    }
}

/// Lifecycle status of a message
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageStatus {
    /// Waiting for a reply
    #[default]
    Pending,
    /// A reply has been recorded (terminal)
    Answered,
}

impl MessageStatus {
    pub fn as_str(&self) -> &str {
        match self {
            MessageStatus::Pending => "pending",
            MessageStatus::Answered => "answered",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, MessageStatus::Answered)
    }
}

impl std::fmt::Display for MessageStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Informational sentiment label. Supplied with the message, never computed here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    #[default]
    Neutral,
    Negative,
}

impl Sentiment {
    pub fn as_str(&self) -> &str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Neutral => "neutral",
            Sentiment::Negative => "negative",
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Sentiment {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "positive" => Ok(Sentiment::Positive),
            "neutral" => Ok(Sentiment::Neutral),
            "negative" => Ok(Sentiment::Negative),
            other => Err(DomainError::InvalidMessage(format!(
                "unknown sentiment: {other}"
            ))),
        }
    }
}

/// Input for creating a new message. The store assigns the id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewMessage {
    pub customer: String,
    pub body: String,
    pub category: String,
    pub sentiment: Sentiment,
    /// Creation time; defaults to "now" at insertion
    pub timestamp: Option<DateTime<Utc>>,
}

impl NewMessage {
    pub fn new(
        customer: impl Into<String>,
        body: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            customer: customer.into(),
            body: body.into(),
            category: category.into(),
            sentiment: Sentiment::default(),
            timestamp: None,
        }
    }

    pub fn with_sentiment(mut self, sentiment: Sentiment) -> Self {
        self.sentiment = sentiment;
        self
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }
}

/// A customer message (Entity)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Message {
    id: MessageId,
    customer: String,
    body: String,
    status: MessageStatus,
    category: String,
    timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_time: Option<DateTime<Utc>>,
    sentiment: Sentiment,
}

impl Message {
    /// Create a pending message
    ///
    /// Returns an error if the customer or body is blank.
    pub fn new(
        id: MessageId,
        customer: impl Into<String>,
        body: impl Into<String>,
        category: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        let customer = customer.into();
        let body = body.into();
        if customer.trim().is_empty() {
            return Err(DomainError::InvalidMessage(
                "customer cannot be empty".to_string(),
            ));
        }
        if body.trim().is_empty() {
            return Err(DomainError::InvalidMessage(
                "message body cannot be empty".to_string(),
            ));
        }

        Ok(Self {
            id,
            customer,
            body,
            status: MessageStatus::Pending,
            category: category.into(),
            timestamp,
            response: None,
            response_time: None,
            sentiment: Sentiment::default(),
        })
    }

    pub fn with_sentiment(mut self, sentiment: Sentiment) -> Self {
        self.sentiment = sentiment;
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Mark a historical message as answered without a recorded reply time.
    ///
    /// Used when importing messages that were answered before the store
    /// existed. Fails like [`Message::answer`] on answered messages or
    /// blank replies.
    pub fn with_recorded_reply(mut self, response: impl Into<String>) -> Result<Self, DomainError> {
        self.record_reply(response.into(), None)?;
        Ok(self)
    }

    /// Record a reply, moving the message from `Pending` to `Answered`.
    pub fn answer(
        &mut self,
        response: impl Into<String>,
        responded_at: DateTime<Utc>,
    ) -> Result<(), DomainError> {
        self.record_reply(response.into(), Some(responded_at))
    }

    fn record_reply(
        &mut self,
        response: String,
        responded_at: Option<DateTime<Utc>>,
    ) -> Result<(), DomainError> {
        if self.status.is_terminal() {
            return Err(DomainError::AlreadyAnswered(self.id));
        }
        if response.trim().is_empty() {
            return Err(DomainError::EmptyReply(self.id));
        }

        self.status = MessageStatus::Answered;
        self.response = Some(response);
        self.response_time = responded_at;
        Ok(())
    }

    pub fn id(&self) -> MessageId {
        self.id
    }

    pub fn customer(&self) -> &str {
        &self.customer
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn status(&self) -> MessageStatus {
        self.status
    }

    pub fn is_pending(&self) -> bool {
        self.status == MessageStatus::Pending
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn response(&self) -> Option<&str> {
        self.response.as_deref()
    }

    pub fn response_time(&self) -> Option<DateTime<Utc>> {
        self.response_time
    }

    pub fn sentiment(&self) -> Sentiment {
        self.sentiment
    }
}
