//! Application layer for autoreply
//!
//! This crate contains the message store, the dashboard session, the reply
//! dispatch use case and the port definitions they depend on.
//! It depends only on the domain layer.

pub mod ports;
pub mod session;
pub mod store;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    activity_logger::{ActivityEvent, ActivityLogger, NoActivityLogger},
    auth_provider::{AuthError, AuthProvider},
    dispatch_progress::{DispatchNotifier, NoDispatchProgress},
    reply_generator::{GenerationError, ReplyContext, ReplyGenerator},
};
pub use session::Session;
pub use store::{MessageStore, StoreCounts, StoreError, StoreEvent};
pub use use_cases::generate_reply::{DispatchError, DispatchOutcome, ReplyDispatcher};
