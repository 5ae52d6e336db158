//! Configuration file loading for autoreply
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `AUTOREPLY_*` environment variables (`__` separates nested keys)
//! 2. `--config <path>` specified file
//! 3. Project root: `./autoreply.toml` or `./.autoreply.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/autoreply/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    FileAiConfig, FileAuthConfig, FileBusinessConfig, FileCommonResponse, FileConfig,
    FileGeneratorConfig, FileLoggingConfig, FileOutputConfig, FileReplConfig, OUTPUT_FORMATS,
};
pub use loader::ConfigLoader;
