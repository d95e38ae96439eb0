// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Expenses client.
//!
//! Read-only: the backend currently exposes listing and a report rollup but
//! no mutation endpoints, so there is no collection store for expenses.

use crate::error::Result;
use crate::gateway::Gateway;
use crate::models::Expense;
use std::sync::Arc;

/// Client for the `/expenses` endpoints.
#[derive(Clone)]
pub struct ExpensesClient {
    gateway: Arc<Gateway>,
}

impl ExpensesClient {
    pub fn new(gateway: Arc<Gateway>) -> Self {
        Self { gateway }
    }

    /// List all expense entries. Not paginated by the backend.
    pub async fn list(&self) -> Result<Vec<Expense>> {
        self.gateway.get("/expenses", &[]).await
    }

    /// Spending reports rollup. The report shape is still settling on the
    /// backend side, so it is passed through as raw JSON.
    pub async fn reports(&self) -> Result<serde_json::Value> {
        self.gateway.get("/expenses/reports", &[]).await
    }
}
