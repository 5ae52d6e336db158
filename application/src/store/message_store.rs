//! In-memory message store
//!
//! [`MessageStore`] exclusively owns every [`Message`]. Reads (`list`, `get`)
//! return snapshots; the only ways to change state are [`MessageStore::insert`]
//! and [`MessageStore::apply_reply`]. Observers can follow changes through
//! [`MessageStore::subscribe`].

use autoreply_domain::{DomainError, Message, MessageFilter, MessageId, NewMessage};
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use thiserror::Error;
use tokio::sync::broadcast;
use tracing::{debug, info};

const EVENT_CAPACITY: usize = 64;

/// Errors returned by [`MessageStore`] mutations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Message {0} not found")]
    NotFound(MessageId),

    #[error("Message {0} has already been answered")]
    AlreadyAnswered(MessageId),

    #[error("Reply for message {0} is empty")]
    EmptyReply(MessageId),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Invalid message: {0}")]
    InvalidMessage(String),

    #[error("Duplicate message id {0}")]
    DuplicateId(MessageId),

    #[error("No message ids left after {0}")]
    IdsExhausted(MessageId),
}

impl From<DomainError> for StoreError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::AlreadyAnswered(id) => StoreError::AlreadyAnswered(id),
            DomainError::EmptyReply(id) => StoreError::EmptyReply(id),
            DomainError::UnknownCategory(c) => StoreError::UnknownCategory(c),
            DomainError::InvalidMessage(m) | DomainError::InvalidFilter(m) => {
                StoreError::InvalidMessage(m)
            }
        }
    }
}

/// Change notification published by the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent {
    Inserted(MessageId),
    Answered(MessageId),
}

/// Pending/answered totals
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreCounts {
    pub pending: usize,
    pub answered: usize,
}

impl StoreCounts {
    pub fn total(&self) -> usize {
        self.pending + self.answered
    }
}

struct Inner {
    messages: Vec<Message>,
    index: HashMap<MessageId, usize>,
    next_id: MessageId,
}

/// Ordered collection of customer messages
pub struct MessageStore {
    inner: RwLock<Inner>,
    categories: Vec<String>,
    events: broadcast::Sender<StoreEvent>,
}

impl MessageStore {
    /// Create an empty store accepting the given categories
    pub fn new(categories: Vec<String>) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            inner: RwLock::new(Inner {
                messages: Vec::new(),
                index: HashMap::new(),
                next_id: MessageId::new(1),
            }),
            categories,
            events,
        }
    }

    /// Create a store pre-populated with existing messages.
    ///
    /// Insertion order is kept. New ids continue after the highest existing id.
    pub fn with_messages(
        categories: Vec<String>,
        messages: Vec<Message>,
    ) -> Result<Self, StoreError> {
        let store = Self::new(categories);
        {
            let mut inner = store.write();
            for message in messages {
                let id = message.id();
                if inner.index.contains_key(&id) {
                    return Err(StoreError::DuplicateId(id));
                }
                let category = store
                    .canonical_category(message.category())
                    .ok_or_else(|| StoreError::UnknownCategory(message.category().to_string()))?
                    .to_string();
                if id >= inner.next_id {
                    inner.next_id = id.next().ok_or(StoreError::IdsExhausted(id))?;
                }
                let position = inner.messages.len();
                inner.index.insert(id, position);
                inner.messages.push(message.with_category(category));
            }
        }
        Ok(store)
    }

    /// Configured category labels
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Add a new pending message and return it
    pub fn insert(&self, new: NewMessage) -> Result<Message, StoreError> {
        let category = self
            .canonical_category(&new.category)
            .ok_or_else(|| StoreError::UnknownCategory(new.category.clone()))?
            .to_string();

        let message = {
            let mut inner = self.write();
            let id = inner.next_id;
            let next_id = id.next().ok_or(StoreError::IdsExhausted(id))?;
            let message = Message::new(
                id,
                new.customer,
                new.body,
                category,
                new.timestamp.unwrap_or_else(Utc::now),
            )?
            .with_sentiment(new.sentiment);

            inner.next_id = next_id;
            let position = inner.messages.len();
            inner.index.insert(id, position);
            inner.messages.push(message.clone());
            message
        };

        info!("Message {} received from {}", message.id(), message.customer());
        let _ = self.events.send(StoreEvent::Inserted(message.id()));
        Ok(message)
    }

    /// Messages matching `filter`, evaluated against the current time
    pub fn list(&self, filter: &MessageFilter) -> Vec<Message> {
        self.list_at(filter, Utc::now())
    }

    /// Messages matching `filter`, evaluated against `now`, in insertion order
    pub fn list_at(&self, filter: &MessageFilter, now: DateTime<Utc>) -> Vec<Message> {
        let inner = self.read();
        let result: Vec<Message> = inner
            .messages
            .iter()
            .filter(|m| filter.matches(m, now))
            .cloned()
            .collect();
        debug!(
            "Filter {:?} matched {}/{} messages",
            filter,
            result.len(),
            inner.messages.len()
        );
        result
    }

    pub fn get(&self, id: MessageId) -> Option<Message> {
        let inner = self.read();
        inner.index.get(&id).map(|&i| inner.messages[i].clone())
    }

    /// Record a reply for a pending message.
    ///
    /// The first reply wins: a second call for the same id fails with
    /// [`StoreError::AlreadyAnswered`] and leaves the stored reply untouched.
    pub fn apply_reply(
        &self,
        id: MessageId,
        response: impl Into<String>,
        responded_at: DateTime<Utc>,
    ) -> Result<Message, StoreError> {
        let updated = {
            let mut inner = self.write();
            let position = *inner.index.get(&id).ok_or(StoreError::NotFound(id))?;
            let message = &mut inner.messages[position];
            message.answer(response, responded_at)?;
            message.clone()
        };

        info!("Message {} answered", id);
        let _ = self.events.send(StoreEvent::Answered(id));
        Ok(updated)
    }

    /// Subscribe to store change notifications
    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.events.subscribe()
    }

    pub fn counts(&self) -> StoreCounts {
        let inner = self.read();
        let pending = inner.messages.iter().filter(|m| m.is_pending()).count();
        StoreCounts {
            pending,
            answered: inner.messages.len() - pending,
        }
    }

    pub fn len(&self) -> usize {
        self.read().messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The configured label matching `category` (case-insensitive)
    fn canonical_category(&self, category: &str) -> Option<&str> {
        let category = category.trim();
        self.categories
            .iter()
            .find(|c| c.eq_ignore_ascii_case(category))
            .map(String::as_str)
    }

    fn read(&self) -> RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}
