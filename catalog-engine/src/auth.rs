//! Authentication gateway
//!
//! Exchanges credentials for an owned [`Session`] value. Whoever holds
//! the session presents it where needed and hands it back to log out;
//! nothing here keeps ambient "current user" state for callers to
//! reach into.

use std::collections::HashSet;

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use shared::session::{AuthError, Credentials, Session, SessionUser};
use tracing::{debug, info, warn};
use uuid::Uuid;
use validator::Validate;

/// Login/logout seam in front of whatever verifies credentials
#[async_trait]
pub trait AuthGateway: Send + Sync {
    async fn login(&self, credentials: &Credentials) -> Result<Session, AuthError>;

    async fn logout(&self, session: &Session) -> Result<(), AuthError>;
}

/// One entry in the static credential table
#[derive(Debug, Clone)]
pub struct StaticUser {
    pub username: String,
    pub password: String,
    pub role: String,
    pub permissions: Vec<String>,
    pub active: bool,
}

impl StaticUser {
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            role: role.into(),
            permissions: Vec::new(),
            active: true,
        }
    }

    pub fn with_permissions(mut self, permissions: Vec<String>) -> Self {
        self.permissions = permissions;
        self
    }

    pub fn disabled(mut self) -> Self {
        self.active = false;
        self
    }
}

/// Gateway backed by a fixed in-memory credential table
///
/// Meant for demos and tests; a production deployment would put a real
/// identity backend behind [`AuthGateway`] instead.
pub struct StaticAuthGateway {
    users: Vec<StaticUser>,
    active_tokens: RwLock<HashSet<String>>,
}

impl StaticAuthGateway {
    pub fn new() -> Self {
        Self {
            users: Vec::new(),
            active_tokens: RwLock::new(HashSet::new()),
        }
    }

    pub fn with_user(mut self, user: StaticUser) -> Self {
        self.users.push(user);
        self
    }

    /// Whether a token belongs to a live session
    pub fn has_session(&self, token: &str) -> bool {
        self.active_tokens.read().contains(token)
    }
}

impl Default for StaticAuthGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AuthGateway for StaticAuthGateway {
    async fn login(&self, credentials: &Credentials) -> Result<Session, AuthError> {
        if credentials.validate().is_err() {
            return Err(AuthError::InvalidCredentials);
        }

        // Unknown user and wrong password share one answer so usernames
        // cannot be probed
        let user = self
            .users
            .iter()
            .find(|u| u.username == credentials.username)
            .ok_or(AuthError::InvalidCredentials)?;

        if !user.active {
            warn!(username = %user.username, "login rejected for disabled account");
            return Err(AuthError::AccountDisabled);
        }
        if user.password != credentials.password {
            return Err(AuthError::InvalidCredentials);
        }

        let session = Session {
            token: Uuid::new_v4().to_string(),
            user: SessionUser {
                id: format!("user-{}", user.username),
                username: user.username.clone(),
                role: user.role.clone(),
                permissions: user.permissions.clone(),
            },
            issued_at: Utc::now(),
        };
        self.active_tokens.write().insert(session.token.clone());
        info!(username = %user.username, role = %user.role, "session issued");
        Ok(session)
    }

    async fn logout(&self, session: &Session) -> Result<(), AuthError> {
        let removed = self.active_tokens.write().remove(&session.token);
        if removed {
            info!(username = %session.user.username, "session closed");
        } else {
            // Logging out twice is harmless
            debug!(username = %session.user.username, "logout for unknown token");
        }
        Ok(())
    }
}
