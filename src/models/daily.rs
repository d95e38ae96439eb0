// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Daily summary aggregate.

use crate::models::{CollegeTask, HealthEntry, JournalEntry};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Read-only aggregate of one day across all resources.
///
/// Assembled by the backend; the client never persists or mutates it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailySummary {
    /// The day this summary covers
    pub date: NaiveDate,
    /// Owning user
    pub user_id: Uuid,
    /// At most one health entry exists per day
    pub health: Option<HealthEntry>,
    #[serde(default)]
    pub college_tasks: Vec<CollegeTask>,
    #[serde(default)]
    pub journal_entries: Vec<JournalEntry>,
    /// Total expenses recorded for the day
    #[serde(default)]
    pub total_expenses: f64,
    /// Glasses of water
    #[serde(default)]
    pub water_intake: u32,
    #[serde(default)]
    pub steps: u32,
    #[serde(default)]
    pub tasks_completed: u32,
    #[serde(default)]
    pub tasks_pending: u32,
}
