//! Session domain entities

use serde::{Deserialize, Serialize};

/// Role granted to every operator of the dashboard
pub const ADMIN_ROLE: &str = "admin";

/// The logged-in operator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub email: String,
    pub role: String,
}

impl User {
    pub fn new(email: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            role: role.into(),
        }
    }

    pub fn admin(email: impl Into<String>) -> Self {
        Self::new(email, ADMIN_ROLE)
    }
}

/// Authentication state of the dashboard.
///
/// A user is present if and only if the session is authenticated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "user", rename_all = "snake_case")]
pub enum SessionState {
    #[default]
    Anonymous,
    Authenticated(User),
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated(_))
    }

    pub fn user(&self) -> Option<&User> {
        match self {
            SessionState::Anonymous => None,
            SessionState::Authenticated(user) => Some(user),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_anonymous() {
        let state = SessionState::default();
        assert!(!state.is_authenticated());
        assert!(state.user().is_none());
    }

    #[test]
    fn test_authenticated_carries_user() {
        let state = SessionState::Authenticated(User::admin("owner@example.com"));
        assert!(state.is_authenticated());
        let user = state.user().unwrap();
        assert_eq!(user.email, "owner@example.com");
        assert_eq!(user.role, ADMIN_ROLE);
    }

    #[test]
    fn test_serialize_tagged() {
        let json = serde_json::to_value(SessionState::Authenticated(User::admin("a@b.c"))).unwrap();
        assert_eq!(json["state"], "authenticated");
        assert_eq!(json["user"]["role"], "admin");
    }
}
