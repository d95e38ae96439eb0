// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Expense entry model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An expense entry. Read-only in this client; the backend exposes listing
/// and reports but no mutation endpoints yet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Expense {
    pub id: Uuid,
    /// Owning user
    pub user_id: Uuid,
    pub amount: f64,
    /// Category: food, transport, entertainment, education, health, ...
    pub category: String,
    /// Calendar date of the expense
    pub date: NaiveDate,
    pub description: String,
    /// Payment method: cash, card, upi, ...
    pub payment_method: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// When this record was created (ISO 8601)
    pub created_at: String,
    /// When this record was last updated (ISO 8601)
    pub updated_at: String,
}
