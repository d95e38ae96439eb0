// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Data models for the Moments API.

pub mod calendar;
pub mod college;
pub mod daily;
pub mod expense;
pub mod health;
pub mod journal;
pub mod user;

pub use calendar::CalendarEvent;
pub use college::{CollegeTask, TaskStatus};
pub use daily::DailySummary;
pub use expense::Expense;
pub use health::{HealthEntry, HealthStats};
pub use journal::JournalEntry;
pub use user::User;
