//! Domain layer for autoreply
//!
//! This crate contains the core business entities and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Message lifecycle
//!
//! A customer [`Message`] starts `Pending` and becomes `Answered` exactly once,
//! when a reply is recorded. There is no way back.
//!
//! ## Session
//!
//! The dashboard is either anonymous or authenticated as a [`User`].

pub mod business;
pub mod core;
pub mod message;
pub mod session;

// Re-export commonly used types
pub use business::{
    config::{AiSettings, BusinessConfig, CommonResponse},
    validation::{ConfigIssue, ConfigIssueCode, Severity},
};
pub use core::error::DomainError;
pub use message::{
    entities::{Message, MessageId, MessageStatus, NewMessage, Sentiment},
    filter::{CategoryFilter, DateRange, MessageFilter, StatusFilter},
};
pub use session::entities::{ADMIN_ROLE, SessionState, User};
