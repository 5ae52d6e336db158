//! Presentation layer for autoreply
//!
//! This crate contains CLI definitions, output formatters,
//! progress reporters, and the interactive dashboard.

pub mod cli;
pub mod config;
pub mod dashboard;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, ListArgs, OutputFormat};
pub use config::{OutputConfig, ReplConfig};
pub use dashboard::{DashboardCommand, DashboardRepl, build_filter};
pub use output::console::ConsoleFormatter;
pub use progress::reporter::{ProgressReporter, SimpleProgress};
