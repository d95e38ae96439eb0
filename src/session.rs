// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Session state: bearer credential plus cached user profile.
//!
//! The session is process-wide shared state. It is read by the gateway on
//! every request and written only by the auth client (login/signup/logout)
//! and the gateway's 401 handler. Credential and profile are always set and
//! cleared together; a session is never left half-populated.

use crate::models::User;
use crate::storage::KeyValueStorage;
use std::sync::{Arc, RwLock};

/// Storage key for the bearer credential.
const TOKEN_KEY: &str = "auth_token";
/// Storage key for the cached user profile (JSON).
const USER_KEY: &str = "user";

/// A bearer credential together with the profile it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub token: String,
    pub user: User,
}

/// Shared session store backed by persisted key/value storage.
///
/// An in-memory copy is kept in sync with the backing storage so that reads
/// on the request path never touch the storage backend.
#[derive(Clone)]
pub struct SessionStore {
    storage: Arc<dyn KeyValueStorage>,
    current: Arc<RwLock<Option<Session>>>,
}

impl SessionStore {
    /// Create a store over `storage`, restoring any persisted session.
    ///
    /// A persisted credential without a readable profile (or vice versa) is
    /// treated as no session at all and cleaned up, preserving the
    /// set-together/cleared-together invariant across restarts.
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        let restored = match (storage.get(TOKEN_KEY), storage.get(USER_KEY)) {
            (Some(token), Some(raw_user)) => match serde_json::from_str::<User>(&raw_user) {
                Ok(user) => Some(Session { token, user }),
                Err(e) => {
                    tracing::warn!(error = %e, "Discarding persisted session with unreadable profile");
                    storage.remove(TOKEN_KEY);
                    storage.remove(USER_KEY);
                    None
                }
            },
            (token, _) => {
                if token.is_some() {
                    tracing::warn!("Discarding persisted credential without a profile");
                }
                storage.remove(TOKEN_KEY);
                storage.remove(USER_KEY);
                None
            }
        };

        Self {
            storage,
            current: Arc::new(RwLock::new(restored)),
        }
    }

    /// Current bearer credential, if a session exists.
    pub fn token(&self) -> Option<String> {
        self.current
            .read()
            .unwrap()
            .as_ref()
            .map(|s| s.token.clone())
    }

    /// Cached user profile, if a session exists.
    pub fn user(&self) -> Option<User> {
        self.current.read().unwrap().as_ref().map(|s| s.user.clone())
    }

    /// Whether a session currently exists.
    pub fn is_authenticated(&self) -> bool {
        self.current.read().unwrap().is_some()
    }

    /// Replace the session. Credential and profile are written together
    /// under one lock, so no reader ever observes them out of sync.
    pub fn set(&self, session: Session) {
        let mut current = self.current.write().unwrap();
        self.storage.set(TOKEN_KEY, &session.token);
        match serde_json::to_string(&session.user) {
            Ok(raw) => self.storage.set(USER_KEY, &raw),
            Err(e) => tracing::warn!(error = %e, "Failed to persist user profile"),
        }
        *current = Some(session);
    }

    /// Clear the session (logout or 401), removing both persisted fields.
    pub fn clear(&self) {
        let mut current = self.current.write().unwrap();
        self.storage.remove(TOKEN_KEY);
        self.storage.remove(USER_KEY);
        *current = None;
    }
}
