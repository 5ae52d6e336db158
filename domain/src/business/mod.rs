//! Business configuration domain.
//!
//! - [`config::BusinessConfig`]: business profile, AI settings, canned responses, categories
//! - [`validation::ConfigIssue`]: structured configuration problems

pub mod config;
pub mod validation;
