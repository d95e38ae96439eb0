// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Client configuration loaded from environment variables.

use std::env;

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Client configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the Moments API (e.g. `http://localhost:8000/api`)
    pub api_base_url: String,
    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,
    /// Path of the persisted session file (None keeps the session in memory)
    pub session_file: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Reads a `.env` file first if one is present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            api_base_url: env::var("MOMENTS_API_URL")
                .map_err(|_| ConfigError::Missing("MOMENTS_API_URL"))?,
            request_timeout_secs: match env::var("MOMENTS_REQUEST_TIMEOUT_SECS") {
                Ok(raw) => raw
                    .parse()
                    .map_err(|_| ConfigError::Invalid("MOMENTS_REQUEST_TIMEOUT_SECS"))?,
                Err(_) => DEFAULT_TIMEOUT_SECS,
            },
            session_file: env::var("MOMENTS_SESSION_FILE").ok(),
        })
    }

    /// Default config for testing only.
    pub fn test_default() -> Self {
        Self {
            api_base_url: "http://localhost:8000/api".to_string(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            session_file: None,
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for environment variable: {0}")]
    Invalid(&'static str),
}
