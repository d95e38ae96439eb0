// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Daily summary client.

use crate::error::Result;
use crate::gateway::Gateway;
use crate::models::DailySummary;
use chrono::NaiveDate;
use serde::Serialize;
use std::sync::Arc;

/// Request body for sending the daily summary email.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SendEmailRequest {
    /// Defaults to today on the backend
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    /// Defaults to the account email on the backend
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient_email: Option<String>,
}

/// Client for the `/daily` endpoints.
#[derive(Clone)]
pub struct DailyClient {
    gateway: Arc<Gateway>,
}

impl DailyClient {
    pub fn new(gateway: Arc<Gateway>) -> Self {
        Self { gateway }
    }

    /// Fetch the summary for `date` (today when `None`).
    pub async fn summary(&self, date: Option<NaiveDate>) -> Result<DailySummary> {
        let mut query = Vec::new();
        if let Some(date) = date {
            query.push(("date", date.to_string()));
        }
        self.gateway.get("/daily/summary", &query).await
    }

    /// Ask the backend to email the summary. Fire-and-forget from the
    /// client's point of view; local state is never touched.
    pub async fn send_email(&self, request: &SendEmailRequest) -> Result<()> {
        let _: serde_json::Value = self.gateway.post("/daily/email", request).await?;
        Ok(())
    }
}
