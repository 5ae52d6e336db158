//! Interactive dashboard
//!
//! A line-oriented REPL over the session, the message store and the reply
//! dispatcher. Input is parsed into [`DashboardCommand`] values first so the
//! grammar can be tested without a terminal.

pub mod command;
pub mod repl;

pub use command::{CommandError, DashboardCommand, build_filter, help_text};
pub use repl::DashboardRepl;
