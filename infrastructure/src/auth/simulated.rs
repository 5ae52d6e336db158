//! Simulated authentication provider

use async_trait::async_trait;
use autoreply_application::{AuthError, AuthProvider};
use autoreply_domain::User;
use std::time::Duration;
use tracing::debug;

/// Accepts any non-blank credentials after a fixed delay and grants the admin role.
pub struct SimulatedAuthProvider {
    delay: Duration,
}

impl SimulatedAuthProvider {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimulatedAuthProvider {
    fn default() -> Self {
        Self::new(Duration::from_millis(1000))
    }
}

#[async_trait]
impl AuthProvider for SimulatedAuthProvider {
    async fn authenticate(&self, email: &str, password: &str) -> Result<User, AuthError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            debug!("Rejecting blank credentials");
            return Err(AuthError::Rejected);
        }
        Ok(User::admin(email))
    }
}
