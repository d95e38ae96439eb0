// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! HTTP gateway for the Moments API.
//!
//! Handles:
//! - Bearer credential attachment from the shared session
//! - Success-envelope unwrapping (callers never see the envelope)
//! - 401 handling: clear session, notify the unauthorized observer, reject
//! - Error normalization into [`ApiError`]
//!
//! The gateway never performs navigation or any other UI side effect; the
//! hosting application registers an observer for authentication failure.

use crate::config::Config;
use crate::error::{ApiError, Result};
use crate::session::SessionStore;
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::sync::RwLock;
use std::time::Duration;

/// Success envelope every backend response uses.
///
/// `data` stays untyped until `success` has been checked, so a failure
/// envelope with a null payload is reported as the failure it is rather
/// than as a decode error.
#[derive(Debug, Deserialize)]
struct Envelope {
    success: bool,
    message: Option<String>,
    #[serde(default)]
    data: serde_json::Value,
}

/// List envelope: the item sequence plus pagination fields alongside it.
#[derive(Debug, Deserialize)]
struct PaginatedEnvelope {
    success: bool,
    message: Option<String>,
    #[serde(default)]
    data: serde_json::Value,
    page: u32,
    limit: u32,
    total: u64,
    total_pages: u32,
}

/// Error body shape for non-2xx responses.
///
/// The backend wraps errors as `{success: false, message}`; bare framework
/// errors use `{detail}` instead, so both are accepted.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    detail: Option<serde_json::Value>,
}

/// Pagination metadata returned by list endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub total_pages: u32,
}

impl Default for Pagination {
    /// State before the first page has been fetched.
    fn default() -> Self {
        Self {
            page: 1,
            limit: 20,
            total: 0,
            total_pages: 0,
        }
    }
}

/// One page of a listed collection, envelope already unwrapped.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub pagination: Pagination,
}

/// Configured request client shared by all resource clients.
pub struct Gateway {
    http: reqwest::Client,
    base_url: String,
    timeout: Duration,
    session: SessionStore,
    unauthorized_hook: RwLock<Option<Box<dyn Fn() + Send + Sync>>>,
}

impl Gateway {
    /// Create a gateway for the configured base URL over `session`.
    pub fn new(config: &Config, session: SessionStore) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(config.request_timeout_secs),
            session,
            unauthorized_hook: RwLock::new(None),
        }
    }

    /// The session store this gateway reads its credential from.
    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Register the observer invoked when a request comes back 401.
    ///
    /// The hosting application decides what "unauthenticated" means (e.g.
    /// switching to the login view); the gateway only emits the event.
    pub fn on_unauthorized(&self, hook: impl Fn() + Send + Sync + 'static) {
        *self.unauthorized_hook.write().unwrap() = Some(Box::new(hook));
    }

    // ─── Request API ─────────────────────────────────────────────

    /// GET `path` and unwrap the envelope.
    pub async fn get<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Result<T> {
        self.run(self.request(Method::GET, path).query(query)).await
    }

    /// GET a list endpoint, returning the items and pagination fields.
    pub async fn get_paginated<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<Page<T>> {
        let body = self.exec(self.request(Method::GET, path).query(query)).await?;
        let env: PaginatedEnvelope =
            serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))?;
        if !env.success {
            return Err(envelope_error(env.message));
        }
        let items: Vec<T> =
            serde_json::from_value(env.data).map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(Page {
            items,
            pagination: Pagination {
                page: env.page,
                limit: env.limit,
                total: env.total,
                total_pages: env.total_pages,
            },
        })
    }

    /// POST `body` as JSON and unwrap the envelope.
    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.run(self.request(Method::POST, path).json(body)).await
    }

    /// PUT `body` as JSON and unwrap the envelope.
    pub async fn put<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.run(self.request(Method::PUT, path).json(body)).await
    }

    /// DELETE `path`. The response envelope carries no useful payload.
    pub async fn delete(&self, path: &str) -> Result<()> {
        let body = self.exec(self.request(Method::DELETE, path)).await?;
        let env: Envelope =
            serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))?;
        if !env.success {
            return Err(envelope_error(env.message));
        }
        Ok(())
    }

    // ─── Internals ───────────────────────────────────────────────

    /// Build a request with the per-call timeout and, when a session
    /// exists, the bearer credential.
    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut builder = self.http.request(method, url).timeout(self.timeout);
        if let Some(token) = self.session.token() {
            builder = builder.bearer_auth(token);
        }
        builder
    }

    /// Send and unwrap a plain envelope.
    async fn run<T: DeserializeOwned>(&self, builder: reqwest::RequestBuilder) -> Result<T> {
        let body = self.exec(builder).await?;
        let env: Envelope =
            serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))?;
        if !env.success {
            return Err(envelope_error(env.message));
        }
        serde_json::from_value(env.data).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Execute a request, returning the raw body for 2xx and a normalized
    /// error for everything else.
    async fn exec(&self, builder: reqwest::RequestBuilder) -> Result<String> {
        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            self.handle_unauthorized();
            return Err(ApiError::Unauthorized);
        }

        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        if !status.is_success() {
            tracing::debug!(status = status.as_u16(), "Request rejected by backend");
            return Err(ApiError::from_status(
                status.as_u16(),
                parse_error_message(&body),
            ));
        }

        Ok(body)
    }

    fn handle_unauthorized(&self) {
        tracing::info!("Received 401, clearing session");
        self.session.clear();
        if let Some(hook) = self.unauthorized_hook.read().unwrap().as_ref() {
            hook();
        }
    }
}

/// Extract the server's message from an error body, if it carried one.
fn parse_error_message(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    if let Some(message) = parsed.message {
        return Some(message);
    }
    match parsed.detail {
        Some(serde_json::Value::String(detail)) => Some(detail),
        _ => None,
    }
}

/// A 2xx response whose envelope reports `success: false`. The status code
/// said OK, so this is surfaced as a validation failure with the envelope
/// message rather than a server error.
fn envelope_error(message: Option<String>) -> ApiError {
    ApiError::Validation {
        status: 200,
        message: message.unwrap_or_else(|| "request reported failure".to_string()),
    }
}
