// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Normalized API error type shared by the gateway and all resource clients.

/// Error returned by every gateway and client operation.
///
/// Every failure mode is normalized into one of these variants before it
/// leaves the gateway; callers never see raw reqwest or serde errors.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Network-level failure: no response was received (connect, DNS, timeout).
    #[error("request failed: {0}")]
    Transport(String),

    /// HTTP 401. The gateway has already cleared the session and notified
    /// the unauthorized observer by the time this is returned.
    #[error("authentication required")]
    Unauthorized,

    /// 4xx response (other than 401) with the server's message verbatim.
    #[error("{message}")]
    Validation { status: u16, message: String },

    /// 5xx response. The message falls back to a generic one when the
    /// server supplies none.
    #[error("server error: {message}")]
    Server { status: u16, message: String },

    /// A 2xx response whose body was not a well-formed envelope.
    #[error("failed to decode response: {0}")]
    Decode(String),
}

impl ApiError {
    /// HTTP status associated with this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Unauthorized => Some(401),
            ApiError::Validation { status, .. } | ApiError::Server { status, .. } => Some(*status),
            ApiError::Transport(_) | ApiError::Decode(_) => None,
        }
    }

    /// Build the appropriate variant for a non-2xx, non-401 status code.
    ///
    /// `message` is the server-supplied message, if the body carried one.
    pub fn from_status(status: u16, message: Option<String>) -> Self {
        if status >= 500 {
            ApiError::Server {
                status,
                message: message.unwrap_or_else(|| "internal server error".to_string()),
            }
        } else {
            ApiError::Validation {
                status,
                message: message.unwrap_or_else(|| format!("request rejected (HTTP {})", status)),
            }
        }
    }
}

/// Result type alias for gateway and client operations.
pub type Result<T> = std::result::Result<T, ApiError>;
