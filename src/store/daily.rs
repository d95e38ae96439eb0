// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Daily summary store.
//!
//! Read-only variant of the collection store: one fetched aggregate, the
//! same Loading/Ready/Failed machine and generation tagging, no mutation
//! surface. Sending the summary email is a pass-through side effect that
//! never touches local state.

use crate::error::Result;
use crate::models::DailySummary;
use crate::services::{DailyClient, SendEmailRequest};
use chrono::NaiveDate;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

#[derive(Default)]
struct SummaryState {
    summary: Option<DailySummary>,
    loading: bool,
    error: Option<String>,
}

/// In-memory view of one day's summary.
pub struct DailySummaryStore {
    client: DailyClient,
    state: Mutex<SummaryState>,
    generation: AtomicU64,
}

impl DailySummaryStore {
    pub fn new(client: DailyClient) -> Self {
        Self {
            client,
            state: Mutex::new(SummaryState::default()),
            generation: AtomicU64::new(0),
        }
    }

    /// Fetch the summary for `date` (today when `None`).
    ///
    /// A failed fetch keeps the previously fetched summary and records the
    /// error; a stale result (superseded by a newer `refresh`) is discarded.
    pub async fn refresh(&self, date: Option<NaiveDate>) -> Result<()> {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        {
            let mut state = self.state.lock().unwrap();
            state.loading = true;
            state.error = None;
        }

        let result = self.client.summary(date).await;

        if self.generation.load(Ordering::SeqCst) != generation {
            tracing::debug!(generation, "Discarding stale summary result");
            return Ok(());
        }

        let mut state = self.state.lock().unwrap();
        state.loading = false;
        match result {
            Ok(summary) => {
                state.summary = Some(summary);
                state.error = None;
                Ok(())
            }
            Err(e) => {
                state.error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Ask the backend to email the summary. Local state is untouched.
    pub async fn send_email(&self, request: &SendEmailRequest) -> Result<()> {
        self.client.send_email(request).await
    }

    pub fn summary(&self) -> Option<DailySummary> {
        self.state.lock().unwrap().summary.clone()
    }

    pub fn loading(&self) -> bool {
        self.state.lock().unwrap().loading
    }

    pub fn error(&self) -> Option<String> {
        self.state.lock().unwrap().error.clone()
    }
}
