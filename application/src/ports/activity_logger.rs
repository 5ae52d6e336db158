//! Port for structured activity logging.
//!
//! Defines the [`ActivityLogger`] trait for recording dashboard events
//! (logins, generated replies, dispatch failures) to a structured log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostic messages, while this port captures an audit
//! trail in a machine-readable format (JSONL).

use serde_json::Value;

/// A structured activity event for logging.
pub struct ActivityEvent {
    /// Event type identifier (e.g., "reply_generated", "login").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl ActivityEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging activity events to a structured log.
///
/// `log` is synchronous and infallible; logging failures are swallowed by
/// the implementation and never reach the dispatch flow.
pub trait ActivityLogger: Send + Sync {
    /// Record an activity event.
    fn log(&self, event: ActivityEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoActivityLogger;

impl ActivityLogger for NoActivityLogger {
    fn log(&self, _event: ActivityEvent) {}
}
