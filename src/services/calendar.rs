// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Calendar events client.

use crate::error::Result;
use crate::gateway::{Gateway, Page};
use crate::models::CalendarEvent;
use crate::store::ResourceOps;
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

/// List filter and pagination parameters for calendar events.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CalendarQuery {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl CalendarQuery {
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

/// Create-event request body.
#[derive(Debug, Clone, Serialize)]
pub struct CreateEventRequest {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Event start (ISO 8601)
    pub start_time: String,
    /// Event end (ISO 8601)
    pub end_time: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub all_day: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reminder_minutes: Option<u32>,
}

/// Update-event request body. Absent fields are left unchanged by the
/// backend, so PUT behaves as a partial patch.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateEventRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub all_day: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reminder_minutes: Option<u32>,
}

/// Client for the `/calendar` endpoints.
#[derive(Clone)]
pub struct CalendarClient {
    gateway: Arc<Gateway>,
}

impl CalendarClient {
    pub fn new(gateway: Arc<Gateway>) -> Self {
        Self { gateway }
    }

    /// List events matching `query`, with pagination.
    pub async fn list_events(&self, query: &CalendarQuery) -> Result<Page<CalendarEvent>> {
        self.gateway
            .get_paginated("/calendar/events", &query.to_query())
            .await
    }

    /// Get a single event by id.
    pub async fn get_event(&self, id: Uuid) -> Result<CalendarEvent> {
        self.gateway
            .get(&format!("/calendar/events/{id}"), &[])
            .await
    }

    /// Create an event.
    pub async fn create_event(&self, request: &CreateEventRequest) -> Result<CalendarEvent> {
        self.gateway.post("/calendar/events", request).await
    }

    /// Update an event.
    pub async fn update_event(
        &self,
        id: Uuid,
        request: &UpdateEventRequest,
    ) -> Result<CalendarEvent> {
        self.gateway
            .put(&format!("/calendar/events/{id}"), request)
            .await
    }

    /// Delete an event.
    pub async fn delete_event(&self, id: Uuid) -> Result<()> {
        self.gateway.delete(&format!("/calendar/events/{id}")).await
    }
}

#[async_trait]
impl ResourceOps for CalendarClient {
    type Item = CalendarEvent;
    type Query = CalendarQuery;
    type Create = CreateEventRequest;
    type Update = UpdateEventRequest;

    fn id_of(item: &CalendarEvent) -> Uuid {
        item.id
    }

    async fn list(&self, query: &CalendarQuery) -> Result<Page<CalendarEvent>> {
        self.list_events(query).await
    }

    async fn create(&self, input: &CreateEventRequest) -> Result<CalendarEvent> {
        self.create_event(input).await
    }

    async fn update(&self, id: Uuid, patch: &UpdateEventRequest) -> Result<CalendarEvent> {
        self.update_event(id, patch).await
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        self.delete_event(id).await
    }
}
