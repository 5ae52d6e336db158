//! Authentication provider port

use async_trait::async_trait;
use autoreply_domain::User;
use thiserror::Error;

/// Errors returned by an [`AuthProvider`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Login rejected")]
    Rejected,

    #[error("Authentication service unavailable: {0}")]
    Unavailable(String),
}

/// Checks operator credentials
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Authenticate and return the user on success
    async fn authenticate(&self, email: &str, password: &str) -> Result<User, AuthError>;
}
