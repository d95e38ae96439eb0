// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Moments client: typed access to the Moments personal life-organizer API.
//!
//! This crate is the data layer of the app — a session-bearing HTTP
//! gateway, one typed client per resource, and in-memory collection stores
//! that track loading/error/pagination state for the presentation layer.
//! Screens and rendering live elsewhere.

pub mod config;
pub mod error;
pub mod gateway;
pub mod models;
pub mod prefs;
pub mod services;
pub mod session;
pub mod storage;
pub mod store;
pub mod time_utils;

pub use error::{ApiError, Result};
pub use gateway::{Gateway, Page, Pagination};
pub use session::{Session, SessionStore};

use config::Config;
use services::{
    AuthClient, CalendarClient, CollegeClient, DailyClient, ExpensesClient, HealthClient,
    JournalClient,
};
use std::sync::Arc;
use storage::{FileStorage, KeyValueStorage, MemoryStorage};

/// All resource clients over one shared gateway.
pub struct ApiClient {
    gateway: Arc<Gateway>,
    pub auth: AuthClient,
    pub calendar: CalendarClient,
    pub health: HealthClient,
    pub journal: JournalClient,
    pub college: CollegeClient,
    pub daily: DailyClient,
    pub expenses: ExpensesClient,
}

impl ApiClient {
    /// Build the client set over `storage` (session persistence).
    pub fn new(config: &Config, storage: Arc<dyn KeyValueStorage>) -> Self {
        let session = SessionStore::new(storage);
        let gateway = Arc::new(Gateway::new(config, session));
        Self {
            auth: AuthClient::new(gateway.clone()),
            calendar: CalendarClient::new(gateway.clone()),
            health: HealthClient::new(gateway.clone()),
            journal: JournalClient::new(gateway.clone()),
            college: CollegeClient::new(gateway.clone()),
            daily: DailyClient::new(gateway.clone()),
            expenses: ExpensesClient::new(gateway.clone()),
            gateway,
        }
    }

    /// Build with the storage the config asks for: the configured session
    /// file, or in-memory when none is set.
    pub fn with_default_storage(config: &Config) -> Self {
        let storage: Arc<dyn KeyValueStorage> = match &config.session_file {
            Some(path) => Arc::new(FileStorage::open(path)),
            None => Arc::new(MemoryStorage::new()),
        };
        Self::new(config, storage)
    }

    /// The shared gateway (for registering the unauthorized observer).
    pub fn gateway(&self) -> &Arc<Gateway> {
        &self.gateway
    }
}
