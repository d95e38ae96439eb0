// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Client-side state stores.
//!
//! Each store owns an in-memory view of one resource and keeps it
//! consistent with the last known backend response. The collection stores
//! are all instances of one generic construct; the daily summary and auth
//! stores are the two non-collection shapes.

pub mod auth;
pub mod collection;
pub mod daily;

pub use auth::AuthStore;
pub use collection::{CollectionSnapshot, CollectionStore, ResourceOps};
pub use daily::DailySummaryStore;

use crate::services::{CalendarClient, CollegeClient, HealthClient, JournalClient};

/// Calendar events collection view.
pub type CalendarStore = CollectionStore<CalendarClient>;
/// Health entries collection view.
pub type HealthStore = CollectionStore<HealthClient>;
/// Journal entries collection view.
pub type JournalStore = CollectionStore<JournalClient>;
/// College tasks collection view.
pub type CollegeStore = CollectionStore<CollegeClient>;
