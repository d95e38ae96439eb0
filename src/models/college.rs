// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! College task model.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Completion status of a college task.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Pending,
    InProgress,
    Completed,
}

impl TaskStatus {
    /// Wire spelling, for query parameters.
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::InProgress => "in_progress",
            TaskStatus::Completed => "completed",
        }
    }
}

/// A college task (assignment, project, ...).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CollegeTask {
    pub id: Uuid,
    /// Owning user
    pub user_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    /// Task kind: assignment, project, homework, writing, ... (free-form)
    #[serde(rename = "type")]
    pub task_type: String,
    pub status: TaskStatus,
    /// Due date/time (ISO 8601)
    pub due_date: Option<String>,
    /// Priority label (free-form, e.g. "high")
    pub priority: Option<String>,
    /// Course or subject name
    pub subject: Option<String>,
    pub tags: Vec<String>,
    /// When this record was created (ISO 8601)
    pub created_at: String,
    /// When this record was last updated (ISO 8601)
    pub updated_at: String,
}
