// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Resource clients: typed mappings from domain operations to gateway calls.

pub mod auth;
pub mod calendar;
pub mod college;
pub mod daily;
pub mod expenses;
pub mod health;
pub mod journal;

pub use auth::{AuthClient, LoginRequest, SignupRequest, TokenResponse};
pub use calendar::{CalendarClient, CalendarQuery, CreateEventRequest, UpdateEventRequest};
pub use college::{CollegeClient, CollegeQuery, CreateCollegeTaskRequest, UpdateCollegeTaskRequest};
pub use daily::{DailyClient, SendEmailRequest};
pub use expenses::ExpensesClient;
pub use health::{
    CreateHealthEntryRequest, HealthClient, HealthQuery, UpdateHealthEntryRequest,
};
pub use journal::{
    CreateJournalEntryRequest, JournalClient, JournalQuery, UpdateJournalEntryRequest,
};
