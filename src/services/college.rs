// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! College tasks client.

use crate::error::Result;
use crate::gateway::{Gateway, Page};
use crate::models::{CollegeTask, TaskStatus};
use crate::store::ResourceOps;
use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

/// List filter and pagination parameters for college tasks.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollegeQuery {
    pub status: Option<TaskStatus>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl CollegeQuery {
    fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(status) = self.status {
            query.push(("status", status.as_str().to_string()));
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

/// Create-task request body.
#[derive(Debug, Clone, Serialize)]
pub struct CreateCollegeTaskRequest {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Task kind: assignment, project, homework, writing, ...
    #[serde(rename = "type")]
    pub task_type: String,
    /// Defaults to pending on the backend
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// Update-task request body; absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateCollegeTaskRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub task_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// Client for the `/college` endpoints.
#[derive(Clone)]
pub struct CollegeClient {
    gateway: Arc<Gateway>,
}

impl CollegeClient {
    pub fn new(gateway: Arc<Gateway>) -> Self {
        Self { gateway }
    }

    /// List tasks matching `query`, with pagination.
    pub async fn list_tasks(&self, query: &CollegeQuery) -> Result<Page<CollegeTask>> {
        self.gateway
            .get_paginated("/college/tasks", &query.to_query())
            .await
    }

    /// Get a single task by id.
    pub async fn get_task(&self, id: Uuid) -> Result<CollegeTask> {
        self.gateway.get(&format!("/college/tasks/{id}"), &[]).await
    }

    /// Create a task.
    pub async fn create_task(&self, request: &CreateCollegeTaskRequest) -> Result<CollegeTask> {
        self.gateway.post("/college/tasks", request).await
    }

    /// Update a task.
    pub async fn update_task(
        &self,
        id: Uuid,
        request: &UpdateCollegeTaskRequest,
    ) -> Result<CollegeTask> {
        self.gateway
            .put(&format!("/college/tasks/{id}"), request)
            .await
    }

    /// Delete a task.
    pub async fn delete_task(&self, id: Uuid) -> Result<()> {
        self.gateway.delete(&format!("/college/tasks/{id}")).await
    }
}

#[async_trait]
impl ResourceOps for CollegeClient {
    type Item = CollegeTask;
    type Query = CollegeQuery;
    type Create = CreateCollegeTaskRequest;
    type Update = UpdateCollegeTaskRequest;

    fn id_of(item: &CollegeTask) -> Uuid {
        item.id
    }

    async fn list(&self, query: &CollegeQuery) -> Result<Page<CollegeTask>> {
        self.list_tasks(query).await
    }

    async fn create(&self, input: &CreateCollegeTaskRequest) -> Result<CollegeTask> {
        self.create_task(input).await
    }

    async fn update(&self, id: Uuid, patch: &UpdateCollegeTaskRequest) -> Result<CollegeTask> {
        self.update_task(id, patch).await
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        self.delete_task(id).await
    }
}
