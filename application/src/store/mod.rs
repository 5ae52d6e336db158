//! Message storage
//!
//! - [`message_store::MessageStore`]: the single owner of all messages

pub mod message_store;

pub use message_store::{MessageStore, StoreCounts, StoreError, StoreEvent};
