// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Journal entry model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A journal entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JournalEntry {
    pub id: Uuid,
    /// Owning user
    pub user_id: Uuid,
    pub title: String,
    pub content: String,
    /// Calendar date this entry is for
    pub date: NaiveDate,
    /// Cover image URL
    pub cover_image: Option<String>,
    /// Attached image URLs
    pub images: Vec<String>,
    /// Mood label (free-form)
    pub mood: Option<String>,
    pub tags: Vec<String>,
    /// Private entries are excluded from shared views
    pub is_private: bool,
    /// When this record was created (ISO 8601)
    pub created_at: String,
    /// When this record was last updated (ISO 8601)
    pub updated_at: String,
}
