// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Authentication client.
//!
//! Signup and login persist the session (credential + profile) as a side
//! effect; logout clears it after the backend acknowledges. The synchronous
//! `is_authenticated` / `stored_user` reads serve app bootstrap before any
//! network round-trip.

use crate::error::Result;
use crate::gateway::Gateway;
use crate::models::User;
use crate::session::Session;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Sign-up request.
#[derive(Debug, Clone, Serialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Login request.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Token response from signup/login.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    /// Seconds until the access token expires
    pub expires_in: u64,
    pub user: User,
}

/// Client for the `/auth` endpoints.
#[derive(Clone)]
pub struct AuthClient {
    gateway: Arc<Gateway>,
}

impl AuthClient {
    pub fn new(gateway: Arc<Gateway>) -> Self {
        Self { gateway }
    }

    /// Sign up a new user and store the resulting session.
    pub async fn signup(&self, request: &SignupRequest) -> Result<TokenResponse> {
        let response: TokenResponse = self.gateway.post("/auth/signup", request).await?;
        self.store_session(&response);
        Ok(response)
    }

    /// Log in and store the resulting session.
    pub async fn login(&self, request: &LoginRequest) -> Result<TokenResponse> {
        let response: TokenResponse = self.gateway.post("/auth/login", request).await?;
        self.store_session(&response);
        Ok(response)
    }

    /// Log out on the backend, then clear the local session.
    ///
    /// The session survives a failed round-trip (a 401 is the exception:
    /// the gateway clears it on any 401).
    pub async fn logout(&self) -> Result<()> {
        let _: serde_json::Value = self
            .gateway
            .post("/auth/logout", &serde_json::json!({}))
            .await?;
        self.gateway.session().clear();
        tracing::info!("Logged out");
        Ok(())
    }

    /// Fetch the current user's profile from the backend.
    pub async fn me(&self) -> Result<User> {
        self.gateway.get("/auth/me", &[]).await
    }

    /// Whether a stored session exists (no network round-trip).
    pub fn is_authenticated(&self) -> bool {
        self.gateway.session().is_authenticated()
    }

    /// The cached profile from the stored session (no network round-trip).
    pub fn stored_user(&self) -> Option<User> {
        self.gateway.session().user()
    }

    fn store_session(&self, response: &TokenResponse) {
        self.gateway.session().set(Session {
            token: response.access_token.clone(),
            user: response.user.clone(),
        });
        tracing::info!(user_id = %response.user.id, "Session stored");
    }
}
