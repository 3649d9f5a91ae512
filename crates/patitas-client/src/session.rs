//! # Session Store
//!
//! Login state persisted through a [`KeyValueStorage`] backend. A
//! session exists exactly when a full user record sits under the
//! session key; login only reports success once that record has been
//! fetched and persisted.
//!
//! Session operations answer with booleans rather than errors. A
//! rejected credential, an unreachable auth service and a broken
//! storage backend all read as "not logged in", each logged at the
//! appropriate level.

use crate::services::AuthService;
use patitas_core::{BoxedStorage, IdentityResolver, User, TOKEN_KEY, USER_KEY};
use tracing::{info, instrument, warn};

/// Authentication state backed by the auth service and local storage
#[derive(Clone)]
pub struct SessionStore {
    auth: AuthService,
    storage: BoxedStorage,
}

impl SessionStore {
    /// Create a session store over the given auth client and storage
    pub fn new(auth: AuthService, storage: BoxedStorage) -> Self {
        Self { auth, storage }
    }

    /// The persisted user record, if a session exists
    pub fn current_user(&self) -> Option<User> {
        let raw = match self.storage.get(USER_KEY) {
            Ok(raw) => raw?,
            Err(e) => {
                warn!("Failed to read session record: {e}");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                warn!("Discarding corrupt session record: {e}");
                None
            }
        }
    }

    /// Whether a session exists
    pub fn is_authenticated(&self) -> bool {
        self.current_user().is_some()
    }

    /// Whether the session belongs to an admin account
    pub fn is_admin(&self) -> bool {
        self.current_user().map(|u| u.is_admin()).unwrap_or(false)
    }

    /// Check credentials and establish a session.
    ///
    /// Returns `true` only when the auth service accepted the
    /// credentials and the full user record was fetched and persisted.
    #[instrument(skip(self, password))]
    pub async fn login(&self, email: &str, password: &str) -> bool {
        let response = match self.auth.login(email, password).await {
            Ok(response) => response,
            Err(e) if e.is_unauthorized() => {
                info!("Login rejected for {email}");
                return false;
            }
            Err(e) => {
                warn!("Login request failed: {e}");
                return false;
            }
        };
        if !response.success {
            info!("Login rejected for {email}: {}", response.message);
            return false;
        }

        let user = match self.auth.user_by_email(email).await {
            Ok(user) => user,
            Err(e) => {
                warn!("Login accepted but profile fetch failed: {e}");
                return false;
            }
        };
        if self.persist_user(&user) {
            info!(user_id = user.id, "Session established");
            true
        } else {
            false
        }
    }

    /// Create an account and establish a session for it
    #[instrument(skip(self, password))]
    pub async fn register(&self, name: &str, email: &str, phone: &str, password: &str) -> bool {
        let user = match self.auth.register(name, email, phone, password).await {
            Ok(user) => user,
            Err(e) => {
                warn!("Registration failed: {e}");
                return false;
            }
        };
        if self.persist_user(&user) {
            info!(user_id = user.id, "Account created, session established");
            true
        } else {
            false
        }
    }

    /// Drop the session. Safe to call when no session exists.
    pub fn logout(&self) {
        for key in [USER_KEY, TOKEN_KEY] {
            if let Err(e) = self.storage.remove(key) {
                warn!("Failed to clear {key}: {e}");
            }
        }
        info!("Session cleared");
    }

    fn persist_user(&self, user: &User) -> bool {
        let json = match serde_json::to_string(user) {
            Ok(json) => json,
            Err(e) => {
                warn!("Failed to encode session record: {e}");
                return false;
            }
        };
        if let Err(e) = self.storage.set(USER_KEY, &json) {
            warn!("Failed to persist session: {e}");
            return false;
        }
        true
    }
}

impl IdentityResolver for SessionStore {
    fn current_user_id(&self) -> Option<i64> {
        self.current_user().map(|u| u.id)
    }
}
