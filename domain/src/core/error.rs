//! Domain error types

use crate::message::entities::MessageId;
use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Message {0} has already been answered")]
    AlreadyAnswered(MessageId),

    #[error("Reply for message {0} is empty")]
    EmptyReply(MessageId),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Invalid message: {0}")]
    InvalidMessage(String),

    #[error("Invalid filter value: {0}")]
    InvalidFilter(String),
}
