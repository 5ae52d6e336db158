//! CLI command definitions

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for command results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable, colored text
    #[default]
    Text,
    /// JSON output
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as ValueEnum>::from_str(s, true)
    }
}

/// CLI arguments for autoreply
#[derive(Parser, Debug)]
#[command(name = "autoreply")]
#[command(author, version, about = "Auto-reply dashboard for small-business customer messages")]
#[command(long_about = r#"
autoreply keeps an inbox of customer messages and drafts replies with an
AI generator. Without a subcommand it starts the interactive dashboard.

Configuration files are loaded from (in priority order):
1. AUTOREPLY_* environment variables
2. --config <path>     Explicit config file
3. ./autoreply.toml    Project-level config
4. ~/.config/autoreply/config.toml   Global config

Example:
  autoreply
  autoreply --email owner@example.com --password secret list --status pending
  autoreply --email owner@example.com --password secret reply 2
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Email used to log in before running a one-shot command
    #[arg(long, global = true, value_name = "EMAIL")]
    pub email: Option<String>,

    /// Password used to log in before running a one-shot command
    #[arg(long, global = true, value_name = "PASSWORD")]
    pub password: Option<String>,

    /// Output format (overrides [output] format)
    #[arg(short, long, global = true, value_enum)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Write diagnostic logs to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Append activity events (logins, replies) as JSONL to this file
    #[arg(long, value_name = "PATH")]
    pub activity_log: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

/// One-shot commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List messages, optionally filtered
    List(ListArgs),
    /// Show a single message
    Show {
        /// Message id
        id: u64,
    },
    /// Generate and record a reply
    Reply {
        /// Message id (omit with --all)
        #[arg(required_unless_present = "all", conflicts_with = "all")]
        id: Option<u64>,
        /// Reply to every pending message
        #[arg(long)]
        all: bool,
    },
    /// Show business settings
    Settings,
}

/// Filter arguments for `list`
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct ListArgs {
    /// all, pending or answered
    #[arg(long, default_value = "all")]
    pub status: String,
    /// all or a category label
    #[arg(long, default_value = "all")]
    pub category: String,
    /// all, today, week or month
    #[arg(long, default_value = "all")]
    pub range: String,
}
