//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure and presentation adapters must implement.

pub mod activity_logger;
pub mod auth_provider;
pub mod dispatch_progress;
pub mod reply_generator;
