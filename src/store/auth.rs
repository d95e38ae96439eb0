// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Authentication store.
//!
//! Bootstraps the cached profile from the persisted session (no network
//! round-trip on startup) and tracks the signed-in user across
//! login/signup/logout.

use crate::error::Result;
use crate::models::User;
use crate::services::{AuthClient, LoginRequest, SignupRequest, TokenResponse};
use std::sync::Mutex;

#[derive(Default)]
struct AuthState {
    user: Option<User>,
    error: Option<String>,
}

/// In-memory view of the signed-in user.
pub struct AuthStore {
    client: AuthClient,
    state: Mutex<AuthState>,
}

impl AuthStore {
    /// Create the store, restoring the user from the persisted session.
    pub fn new(client: AuthClient) -> Self {
        let user = client.stored_user();
        Self {
            client,
            state: Mutex::new(AuthState { user, error: None }),
        }
    }

    /// Log in; on success the session is persisted and the user recorded.
    /// On failure the error message is recorded and the error re-raised.
    pub async fn login(&self, request: &LoginRequest) -> Result<TokenResponse> {
        match self.client.login(request).await {
            Ok(response) => {
                let mut state = self.state.lock().unwrap();
                state.user = Some(response.user.clone());
                state.error = None;
                Ok(response)
            }
            Err(e) => {
                self.state.lock().unwrap().error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Sign up; same state handling as `login`.
    pub async fn signup(&self, request: &SignupRequest) -> Result<TokenResponse> {
        match self.client.signup(request).await {
            Ok(response) => {
                let mut state = self.state.lock().unwrap();
                state.user = Some(response.user.clone());
                state.error = None;
                Ok(response)
            }
            Err(e) => {
                self.state.lock().unwrap().error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Log out and drop the recorded user.
    pub async fn logout(&self) -> Result<()> {
        self.client.logout().await?;
        self.state.lock().unwrap().user = None;
        Ok(())
    }

    pub fn current_user(&self) -> Option<User> {
        self.state.lock().unwrap().user.clone()
    }

    pub fn error(&self) -> Option<String> {
        self.state.lock().unwrap().error.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.client.is_authenticated()
    }
}
