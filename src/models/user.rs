//! User profile model.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User profile as returned by the auth endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: Uuid,
    /// Email address (login identity)
    pub email: String,
    /// Display name
    pub name: Option<String>,
    /// Profile picture URL
    pub profile_pic: Option<String>,
    /// Role (e.g. "user")
    pub role: String,
    /// When the account was created (ISO 8601)
    pub created_at: String,
    /// Last login timestamp (ISO 8601)
    pub last_login: String,
}
