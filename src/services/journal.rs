// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Journal entries client.

use crate::error::Result;
use crate::gateway::{Gateway, Page};
use crate::models::JournalEntry;
use crate::store::ResourceOps;
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

/// List filter and pagination parameters for journal entries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JournalQuery {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl JournalQuery {
    fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(start_date) = self.start_date {
            query.push(("start_date", start_date.to_string()));
        }
        if let Some(end_date) = self.end_date {
            query.push(("end_date", end_date.to_string()));
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

/// Create-entry request body. The date defaults to today on the backend.
#[derive(Debug, Clone, Serialize)]
pub struct CreateJournalEntryRequest {
    pub title: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mood: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_private: Option<bool>,
}

/// Update-entry request body; absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateJournalEntryRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mood: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_private: Option<bool>,
}

/// Client for the `/journal` endpoints.
#[derive(Clone)]
pub struct JournalClient {
    gateway: Arc<Gateway>,
}

impl JournalClient {
    pub fn new(gateway: Arc<Gateway>) -> Self {
        Self { gateway }
    }

    /// List entries matching `query`, with pagination.
    pub async fn list_entries(&self, query: &JournalQuery) -> Result<Page<JournalEntry>> {
        self.gateway
            .get_paginated("/journal/entries", &query.to_query())
            .await
    }

    /// Get a single entry by id.
    pub async fn get_entry(&self, id: Uuid) -> Result<JournalEntry> {
        self.gateway
            .get(&format!("/journal/entries/{id}"), &[])
            .await
    }

    /// Create an entry.
    pub async fn create_entry(&self, request: &CreateJournalEntryRequest) -> Result<JournalEntry> {
        self.gateway.post("/journal/entries", request).await
    }

    /// Update an entry.
    pub async fn update_entry(
        &self,
        id: Uuid,
        request: &UpdateJournalEntryRequest,
    ) -> Result<JournalEntry> {
        self.gateway
            .put(&format!("/journal/entries/{id}"), request)
            .await
    }

    /// Delete an entry.
    pub async fn delete_entry(&self, id: Uuid) -> Result<()> {
        self.gateway.delete(&format!("/journal/entries/{id}")).await
    }
}

#[async_trait]
impl ResourceOps for JournalClient {
    type Item = JournalEntry;
    type Query = JournalQuery;
    type Create = CreateJournalEntryRequest;
    type Update = UpdateJournalEntryRequest;

    fn id_of(item: &JournalEntry) -> Uuid {
        item.id
    }

    async fn list(&self, query: &JournalQuery) -> Result<Page<JournalEntry>> {
        self.list_entries(query).await
    }

    async fn create(&self, input: &CreateJournalEntryRequest) -> Result<JournalEntry> {
        self.create_entry(input).await
    }

    async fn update(&self, id: Uuid, patch: &UpdateJournalEntryRequest) -> Result<JournalEntry> {
        self.update_entry(id, patch).await
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        self.delete_entry(id).await
    }
}
