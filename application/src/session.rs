//! Dashboard session
//!
//! Holds the authentication state of the single operator. State changes are
//! published on a `watch` channel so the presentation layer can re-render
//! without polling.

use crate::ports::activity_logger::{ActivityEvent, ActivityLogger, NoActivityLogger};
use crate::ports::auth_provider::{AuthError, AuthProvider};
use autoreply_domain::{SessionState, User};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{info, warn};

/// Authentication state plus the provider used to change it
pub struct Session {
    auth: Arc<dyn AuthProvider>,
    state: watch::Sender<SessionState>,
    activity_logger: Arc<dyn ActivityLogger>,
}

impl Session {
    /// Create an anonymous session
    pub fn new(auth: Arc<dyn AuthProvider>) -> Self {
        let (state, _) = watch::channel(SessionState::Anonymous);
        Self {
            auth,
            state,
            activity_logger: Arc::new(NoActivityLogger),
        }
    }

    /// Create with an activity logger.
    pub fn with_activity_logger(mut self, logger: Arc<dyn ActivityLogger>) -> Self {
        self.activity_logger = logger;
        self
    }

    /// Authenticate and switch to the returned user.
    ///
    /// The dashboard has a single operator role, so the session user is
    /// always an admin whatever role the provider reports.
    /// On failure the current state is left as it was.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, AuthError> {
        match self.auth.authenticate(email, password).await {
            Ok(authenticated) => {
                let user = User::admin(authenticated.email);
                info!("Logged in as {} ({})", user.email, user.role);
                self.activity_logger.log(ActivityEvent::new(
                    "login",
                    serde_json::json!({ "email": user.email, "role": user.role }),
                ));
                self.state
                    .send_replace(SessionState::Authenticated(user.clone()));
                Ok(user)
            }
            Err(e) => {
                warn!("Login failed for {}: {}", email, e);
                self.activity_logger.log(ActivityEvent::new(
                    "login_failed",
                    serde_json::json!({ "email": email, "error": e.to_string() }),
                ));
                Err(e)
            }
        }
    }

    /// Return to the anonymous state. Idempotent.
    pub fn logout(&self) {
        let previous = self.state.send_replace(SessionState::Anonymous);
        if let Some(user) = previous.user() {
            info!("Logged out {}", user.email);
            self.activity_logger.log(ActivityEvent::new(
                "logout",
                serde_json::json!({ "email": user.email }),
            ));
        }
    }

    /// Snapshot of the current state
    pub fn state(&self) -> SessionState {
        self.state.borrow().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.borrow().is_authenticated()
    }

    pub fn current_user(&self) -> Option<User> {
        self.state.borrow().user().cloned()
    }

    /// Subscribe to state changes
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use autoreply_domain::ADMIN_ROLE;

    struct AcceptAll;

    #[async_trait]
    impl AuthProvider for AcceptAll {
        async fn authenticate(&self, email: &str, _password: &str) -> Result<User, AuthError> {
            Ok(User::admin(email))
        }
    }

    struct RejectAll;

    #[async_trait]
    impl AuthProvider for RejectAll {
        async fn authenticate(&self, _email: &str, _password: &str) -> Result<User, AuthError> {
            Err(AuthError::Rejected)
        }
    }

    struct ViewerRole;

    #[async_trait]
    impl AuthProvider for ViewerRole {
        async fn authenticate(&self, email: &str, _password: &str) -> Result<User, AuthError> {
            Ok(User::new(email, "viewer"))
        }
    }

    struct Offline;

    #[async_trait]
    impl AuthProvider for Offline {
        async fn authenticate(&self, _email: &str, _password: &str) -> Result<User, AuthError> {
            Err(AuthError::Unavailable("connection refused".to_string()))
        }
    }

    #[test]
    fn test_new_session_is_anonymous() {
        let session = Session::new(Arc::new(AcceptAll));
        assert!(!session.is_authenticated());
        assert!(session.current_user().is_none());
    }

    #[tokio::test]
    async fn test_login_success_sets_admin_user() {
        let session = Session::new(Arc::new(AcceptAll));
        let user = session.login("owner@example.com", "secret").await.unwrap();

        assert_eq!(user.role, "admin");
        assert!(session.is_authenticated());
        assert_eq!(session.current_user().unwrap().email, "owner@example.com");
    }

    #[tokio::test]
    async fn test_rejected_login_stays_unauthenticated() {
        let session = Session::new(Arc::new(RejectAll));
        let err = session.login("bad@x.com", "wrong").await.unwrap_err();

        assert_eq!(err, AuthError::Rejected);
        assert!(!session.is_authenticated());
        assert_eq!(session.state(), SessionState::Anonymous);
    }

    #[tokio::test]
    async fn test_login_always_grants_admin_role() {
        let session = Session::new(Arc::new(ViewerRole));
        let user = session.login("owner@example.com", "secret").await.unwrap();

        assert_eq!(user, User::admin("owner@example.com"));
        assert_eq!(session.current_user().unwrap().role, ADMIN_ROLE);
    }

    #[tokio::test]
    async fn test_provider_outage_stays_anonymous() {
        let session = Session::new(Arc::new(Offline));
        let err = session.login("owner@example.com", "secret").await.unwrap_err();

        assert_eq!(err, AuthError::Unavailable("connection refused".to_string()));
        assert_eq!(
            err.to_string(),
            "Authentication service unavailable: connection refused"
        );
        assert_eq!(session.state(), SessionState::Anonymous);
    }

    #[tokio::test]
    async fn test_logout_is_idempotent() {
        let session = Session::new(Arc::new(AcceptAll));
        session.login("owner@example.com", "secret").await.unwrap();

        session.logout();
        assert!(!session.is_authenticated());
        session.logout();
        assert!(!session.is_authenticated());
    }

    #[tokio::test]
    async fn test_subscribers_see_state_changes() {
        let session = Session::new(Arc::new(AcceptAll));
        let mut rx = session.subscribe();

        session.login("owner@example.com", "secret").await.unwrap();
        rx.changed().await.unwrap();
        assert!(rx.borrow_and_update().is_authenticated());

        session.logout();
        rx.changed().await.unwrap();
        assert!(!rx.borrow_and_update().is_authenticated());
    }
}
