// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Health entries client.

use crate::error::Result;
use crate::gateway::{Gateway, Page};
use crate::models::{HealthEntry, HealthStats};
use crate::store::ResourceOps;
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

/// List filter and pagination parameters for health entries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HealthQuery {
    /// Restrict to a single calendar date
    pub date: Option<NaiveDate>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl HealthQuery {
    fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(date) = self.date {
            query.push(("date", date.to_string()));
        }
        if let Some(page) = self.page {
            query.push(("page", page.to_string()));
        }
        if let Some(limit) = self.limit {
            query.push(("limit", limit.to_string()));
        }
        query
    }
}

/// Create-entry request body. Only the date is required; unset counters
/// default on the backend.
#[derive(Debug, Clone, Serialize)]
pub struct CreateHealthEntryRequest {
    pub date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub water: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calories: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meals: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meal_types: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cycle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period_day: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bath: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub face_wash: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl CreateHealthEntryRequest {
    /// An empty entry for `date`.
    pub fn for_date(date: NaiveDate) -> Self {
        Self {
            date,
            water: None,
            steps: None,
            calories: None,
            meals: None,
            meal_types: None,
            cycle: None,
            period_day: None,
            bath: None,
            face_wash: None,
            notes: None,
        }
    }
}

/// Update-entry request body; absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateHealthEntryRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub water: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calories: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meals: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meal_types: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cycle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period_day: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bath: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub face_wash: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Client for the `/health` endpoints.
#[derive(Clone)]
pub struct HealthClient {
    gateway: Arc<Gateway>,
}

impl HealthClient {
    pub fn new(gateway: Arc<Gateway>) -> Self {
        Self { gateway }
    }

    /// List entries matching `query`, with pagination.
    pub async fn list_entries(&self, query: &HealthQuery) -> Result<Page<HealthEntry>> {
        self.gateway
            .get_paginated("/health/entries", &query.to_query())
            .await
    }

    /// Get a single entry by id.
    pub async fn get_entry(&self, id: Uuid) -> Result<HealthEntry> {
        self.gateway.get(&format!("/health/entries/{id}"), &[]).await
    }

    /// Create an entry.
    pub async fn create_entry(&self, request: &CreateHealthEntryRequest) -> Result<HealthEntry> {
        self.gateway.post("/health/entries", request).await
    }

    /// Update an entry.
    pub async fn update_entry(
        &self,
        id: Uuid,
        request: &UpdateHealthEntryRequest,
    ) -> Result<HealthEntry> {
        self.gateway
            .put(&format!("/health/entries/{id}"), request)
            .await
    }

    /// Delete an entry.
    pub async fn delete_entry(&self, id: Uuid) -> Result<()> {
        self.gateway.delete(&format!("/health/entries/{id}")).await
    }

    /// Aggregated stats over an inclusive date range.
    pub async fn stats(&self, start_date: NaiveDate, end_date: NaiveDate) -> Result<HealthStats> {
        self.gateway
            .get(
                "/health/stats",
                &[
                    ("start_date", start_date.to_string()),
                    ("end_date", end_date.to_string()),
                ],
            )
            .await
    }
}

#[async_trait]
impl ResourceOps for HealthClient {
    type Item = HealthEntry;
    type Query = HealthQuery;
    type Create = CreateHealthEntryRequest;
    type Update = UpdateHealthEntryRequest;

    fn id_of(item: &HealthEntry) -> Uuid {
        item.id
    }

    async fn list(&self, query: &HealthQuery) -> Result<Page<HealthEntry>> {
        self.list_entries(query).await
    }

    async fn create(&self, input: &CreateHealthEntryRequest) -> Result<HealthEntry> {
        self.create_entry(input).await
    }

    async fn update(&self, id: Uuid, patch: &UpdateHealthEntryRequest) -> Result<HealthEntry> {
        self.update_entry(id, patch).await
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        self.delete_entry(id).await
    }
}
