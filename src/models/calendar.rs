// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Calendar event model.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A calendar event.
///
/// `end_time >= start_time` is guaranteed by the backend, not checked here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalendarEvent {
    pub id: Uuid,
    /// Owning user
    pub user_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    /// Event start (ISO 8601)
    pub start_time: String,
    /// Event end (ISO 8601)
    pub end_time: String,
    /// All-day events ignore the time-of-day portion of start/end
    pub all_day: bool,
    /// Category (e.g. "work", "personal")
    pub category: Option<String>,
    /// Display color (hex string)
    pub color: Option<String>,
    pub location: Option<String>,
    /// Reminder offset in minutes before the event
    pub reminder_minutes: Option<u32>,
    /// When this record was created (ISO 8601)
    pub created_at: String,
    /// When this record was last updated (ISO 8601)
    pub updated_at: String,
}
