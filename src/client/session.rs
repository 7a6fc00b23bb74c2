//! Session (auth context)
//!
//! Process-wide sign-in state: the access token and the signed-in user,
//! both persisted in the key-value store so a restart keeps the session.

use crate::client::error::StorageError;
use crate::client::storage::{keys, KeyValueStore};
use crate::shared::models::UserInfo;
use std::sync::Arc;

#[derive(Clone)]
pub struct Session {
    store: Arc<dyn KeyValueStore>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}

impl Session {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<dyn KeyValueStore> {
        &self.store
    }

    pub fn access_token(&self) -> Option<String> {
        self.store
            .get(keys::ACCESS_TOKEN)
            .filter(|token| !token.is_empty())
    }

    pub fn set_access_token(&self, token: &str) -> Result<(), StorageError> {
        self.store.set(keys::ACCESS_TOKEN, token)
    }

    /// Stored user info; an unreadable entry counts as absent
    pub fn user(&self) -> Option<UserInfo> {
        let raw = self.store.get(keys::USER_INFO)?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(err) => {
                tracing::warn!("[SESSION] Ignoring unreadable user info: {}", err);
                None
            }
        }
    }

    pub fn set_user(&self, user: &UserInfo) -> Result<(), StorageError> {
        self.store.set(keys::USER_INFO, &serde_json::to_string(user)?)
    }

    /// Store a freshly issued token together with its user
    pub fn establish(&self, token: &str, user: &UserInfo) -> Result<(), StorageError> {
        self.set_access_token(token)?;
        self.set_user(user)?;
        tracing::info!("[SESSION] Signed in as user {}", user.user_id);
        Ok(())
    }

    pub fn is_authenticated(&self) -> bool {
        self.access_token().is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.user().is_some_and(|user| user.is_admin())
    }

    /// Drop token and user info
    pub fn clear(&self) -> Result<(), StorageError> {
        self.store.remove(keys::ACCESS_TOKEN)?;
        self.store.remove(keys::USER_INFO)?;
        tracing::info!("[SESSION] Cleared");
        Ok(())
    }
}
