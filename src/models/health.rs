// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Health tracking models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One day's health log.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HealthEntry {
    pub id: Uuid,
    /// Owning user
    pub user_id: Uuid,
    /// Calendar date this entry is for
    pub date: NaiveDate,
    /// Glasses of water
    pub water: u32,
    /// Step count
    pub steps: u32,
    /// Calories consumed
    pub calories: Option<u32>,
    /// Meal descriptions, parallel to `meal_types`
    pub meals: Vec<String>,
    /// Meal types (breakfast, lunch, ...), parallel to `meals`
    pub meal_types: Vec<String>,
    /// Cycle phase (new, waxing, full, waning)
    pub cycle: Option<String>,
    /// Day within the current period, if tracking
    pub period_day: Option<u32>,
    /// Hygiene flags
    pub bath: bool,
    pub face_wash: bool,
    pub notes: Option<String>,
    /// When this record was created (ISO 8601)
    pub created_at: String,
    /// When this record was last updated (ISO 8601)
    pub updated_at: String,
}

impl HealthEntry {
    /// Pair each meal with its type.
    ///
    /// `meals` and `meal_types` are parallel lists the backend is expected
    /// to keep the same length. A mismatch is tolerated: the pairing stops
    /// at the shorter list.
    pub fn meals(&self) -> impl Iterator<Item = (&str, &str)> {
        if self.meals.len() != self.meal_types.len() {
            tracing::debug!(
                entry_id = %self.id,
                meals = self.meals.len(),
                meal_types = self.meal_types.len(),
                "meals/meal_types length mismatch"
            );
        }
        self.meals
            .iter()
            .zip(self.meal_types.iter())
            .map(|(meal, meal_type)| (meal.as_str(), meal_type.as_str()))
    }
}

/// Aggregated health statistics for a date range.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HealthStats {
    /// Human-readable period description (e.g. "2024-06-01 to 2024-06-30")
    pub period: String,
    pub avg_water: f64,
    pub avg_steps: f64,
    pub avg_calories: Option<f64>,
    /// Number of days with an entry in the period
    pub total_days: u32,
    /// Current consecutive-day logging streak
    pub streak: u32,
}
