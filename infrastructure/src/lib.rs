//! Infrastructure layer for autoreply
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, configuration file loading, and the sample inbox.

pub mod auth;
pub mod config;
pub mod generator;
pub mod logging;
pub mod seed;

// Re-export commonly used types
pub use auth::SimulatedAuthProvider;
pub use config::{ConfigLoader, FileConfig};
pub use generator::{CannedReplyGenerator, GeneratorKind, TemplateReplyGenerator, build_generator};
pub use logging::JsonlActivityLogger;
pub use seed::sample_messages;
