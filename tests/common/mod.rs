// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared test fixtures: an in-process mock Moments backend and client
//! builders wired to it.

// Not every test binary uses every helper.
#![allow(dead_code)]

use axum::extract::{Path, Query, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use moments_client::config::Config;
use moments_client::models::User;
use moments_client::storage::{KeyValueStorage, MemoryStorage};
use moments_client::{ApiClient, Session};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use uuid::Uuid;

/// Fixed user id used by all fixtures.
pub const TEST_USER_ID: &str = "123e4567-e89b-12d3-a456-426614174000";
/// Bearer token the mock backend accepts.
pub const TEST_TOKEN: &str = "test-token";

/// start_date marker that makes the mock delay its list response.
pub const SLOW_DATE: &str = "2024-01-01";
/// start_date marker answered immediately, with a distinct event.
pub const FAST_DATE: &str = "2024-02-01";

/// Mutable backend state shared between the mock router and the test.
#[derive(Default)]
pub struct MockState {
    /// Calendar events in server order
    pub events: Mutex<Vec<Value>>,
    /// When set, list endpoints respond 500
    pub fail_list: AtomicBool,
    /// Bodies received on POST /daily/email
    pub email_requests: Mutex<Vec<Value>>,
}

// ─── Fixtures ────────────────────────────────────────────────────

pub fn test_user_json() -> Value {
    json!({
        "id": TEST_USER_ID,
        "email": "user@example.com",
        "name": "Test User",
        "profile_pic": null,
        "role": "user",
        "created_at": "2024-01-01T00:00:00Z",
        "last_login": "2024-06-01T00:00:00Z"
    })
}

pub fn test_user() -> User {
    serde_json::from_value(test_user_json()).unwrap()
}

/// A complete calendar event record.
pub fn event_json(id: Uuid, title: &str) -> Value {
    json!({
        "id": id,
        "user_id": TEST_USER_ID,
        "title": title,
        "description": null,
        "start_time": "2024-06-01T09:00:00Z",
        "end_time": "2024-06-01T09:15:00Z",
        "all_day": false,
        "category": null,
        "color": null,
        "location": null,
        "reminder_minutes": null,
        "created_at": "2024-06-01T00:00:00Z",
        "updated_at": "2024-06-01T00:00:00Z"
    })
}

pub fn envelope(data: Value) -> Value {
    json!({"success": true, "message": "ok", "data": data})
}

pub fn paginated(items: Vec<Value>, page: u32, limit: u32) -> Value {
    let total = items.len() as u64;
    let total_pages = if total == 0 {
        0
    } else {
        ((total + limit as u64 - 1) / limit as u64) as u32
    };
    json!({
        "success": true,
        "message": "ok",
        "data": items,
        "page": page,
        "limit": limit,
        "total": total,
        "total_pages": total_pages
    })
}

fn token_response(token: &str) -> Value {
    json!({
        "access_token": token,
        "token_type": "bearer",
        "expires_in": 3600,
        "user": test_user_json()
    })
}

// ─── Mock backend ────────────────────────────────────────────────

/// Serve `router` on an ephemeral port, returning its base URL.
pub async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

/// Spawn the full mock backend; returns its base URL and shared state.
pub async fn spawn_mock_api() -> (String, Arc<MockState>) {
    let state = Arc::new(MockState::default());
    let base_url = serve(mock_api_router(state.clone())).await;
    (base_url, state)
}

/// The full mock backend router.
pub fn mock_api_router(state: Arc<MockState>) -> Router {
    Router::new()
        .route("/auth/signup", post(auth_signup))
        .route("/auth/login", post(auth_login))
        .route("/auth/logout", post(auth_logout))
        .route("/auth/me", get(auth_me))
        .route("/calendar/events", get(list_events).post(create_event))
        .route(
            "/calendar/events/{id}",
            get(get_event).put(update_event).delete(delete_event),
        )
        .route("/health/entries", post(create_health_entry))
        .route("/health/stats", get(health_stats))
        .route("/journal/entries", get(list_journal_entries))
        .route("/college/tasks", get(list_college_tasks))
        .route("/daily/summary", get(daily_summary))
        .route("/daily/email", post(daily_email))
        .route("/expenses", get(list_expenses))
        .route("/expenses/reports", get(expense_reports))
        .with_state(state)
}

fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({"success": false, "message": "Not authenticated"})),
    )
        .into_response()
}

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .map(|h| h == format!("Bearer {TEST_TOKEN}"))
        .unwrap_or(false)
}

// ─── Auth handlers ───────────────────────────────────────────────

async fn auth_signup(Json(body): Json<Value>) -> Response {
    if body.get("email").and_then(Value::as_str).is_none() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"success": false, "message": "email is required"})),
        )
            .into_response();
    }
    Json(envelope(token_response(TEST_TOKEN))).into_response()
}

async fn auth_login(Json(body): Json<Value>) -> Response {
    if body.get("password").and_then(Value::as_str) == Some("wrong") {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"success": false, "message": "Invalid credentials"})),
        )
            .into_response();
    }
    Json(envelope(token_response(TEST_TOKEN))).into_response()
}

async fn auth_logout(headers: HeaderMap) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }
    Json(envelope(Value::Null)).into_response()
}

async fn auth_me(headers: HeaderMap) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }
    Json(envelope(test_user_json())).into_response()
}

// ─── Calendar handlers ───────────────────────────────────────────

async fn list_events(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }
    if state.fail_list.load(Ordering::SeqCst) {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"success": false})),
        )
            .into_response();
    }

    // Race-test markers: a slow generation and a fast one.
    match params.get("start_date").map(String::as_str) {
        Some(SLOW_DATE) => {
            tokio::time::sleep(Duration::from_millis(300)).await;
            let items = vec![event_json(Uuid::new_v4(), "slow")];
            return Json(paginated(items, 1, 20)).into_response();
        }
        Some(FAST_DATE) => {
            let items = vec![event_json(Uuid::new_v4(), "fast")];
            return Json(paginated(items, 1, 20)).into_response();
        }
        _ => {}
    }

    let page: u32 = params.get("page").and_then(|p| p.parse().ok()).unwrap_or(1);
    let limit: u32 = params
        .get("limit")
        .and_then(|l| l.parse().ok())
        .unwrap_or(20);
    let items = state.events.lock().unwrap().clone();
    Json(paginated(items, page, limit)).into_response()
}

async fn create_event(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }
    if body.get("title").and_then(Value::as_str) == Some("invalid") {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({"success": false, "message": "title is not allowed"})),
        )
            .into_response();
    }

    let mut event = event_json(Uuid::new_v4(), "");
    merge(&mut event, &body);
    state.events.lock().unwrap().push(event.clone());
    Json(envelope(event)).into_response()
}

async fn get_event(State(state): State<Arc<MockState>>, Path(id): Path<Uuid>) -> Response {
    let events = state.events.lock().unwrap();
    match events.iter().find(|e| e["id"] == json!(id)) {
        Some(event) => Json(envelope(event.clone())).into_response(),
        None => not_found(),
    }
}

async fn update_event(
    State(state): State<Arc<MockState>>,
    Path(id): Path<Uuid>,
    Json(patch): Json<Value>,
) -> Response {
    let mut events = state.events.lock().unwrap();
    match events.iter_mut().find(|e| e["id"] == json!(id)) {
        Some(event) => {
            merge(event, &patch);
            event["updated_at"] = json!("2024-06-02T00:00:00Z");
            Json(envelope(event.clone())).into_response()
        }
        None => not_found(),
    }
}

async fn delete_event(State(state): State<Arc<MockState>>, Path(id): Path<Uuid>) -> Response {
    let mut events = state.events.lock().unwrap();
    let before = events.len();
    events.retain(|e| e["id"] != json!(id));
    if events.len() == before {
        return not_found();
    }
    Json(envelope(Value::Null)).into_response()
}

fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({"success": false, "message": "Not found"})),
    )
        .into_response()
}

/// Overlay `patch`'s keys onto `target`.
fn merge(target: &mut Value, patch: &Value) {
    if let (Some(target), Some(patch)) = (target.as_object_mut(), patch.as_object()) {
        for (key, value) in patch {
            target.insert(key.clone(), value.clone());
        }
    }
}

// ─── Other resource handlers ─────────────────────────────────────

async fn create_health_entry(Json(body): Json<Value>) -> Response {
    let mut entry = json!({
        "id": Uuid::new_v4(),
        "user_id": TEST_USER_ID,
        "date": "2024-06-01",
        "water": 0,
        "steps": 0,
        "calories": null,
        "meals": [],
        "meal_types": [],
        "cycle": null,
        "period_day": null,
        "bath": false,
        "face_wash": false,
        "notes": null,
        "created_at": "2024-06-01T00:00:00Z",
        "updated_at": "2024-06-01T00:00:00Z"
    });
    merge(&mut entry, &body);
    Json(envelope(entry)).into_response()
}

async fn health_stats(Query(params): Query<HashMap<String, String>>) -> Response {
    let period = format!(
        "{} to {}",
        params.get("start_date").cloned().unwrap_or_default(),
        params.get("end_date").cloned().unwrap_or_default()
    );
    Json(envelope(json!({
        "period": period,
        "avg_water": 5.5,
        "avg_steps": 8000.0,
        "avg_calories": null,
        "total_days": 30,
        "streak": 4
    })))
    .into_response()
}

async fn list_journal_entries() -> Response {
    let entry = json!({
        "id": Uuid::new_v4(),
        "user_id": TEST_USER_ID,
        "title": "First entry",
        "content": "Dear diary",
        "date": "2024-06-01",
        "cover_image": null,
        "images": [],
        "mood": "calm",
        "tags": ["daily"],
        "is_private": true,
        "created_at": "2024-06-01T00:00:00Z",
        "updated_at": "2024-06-01T00:00:00Z"
    });
    Json(paginated(vec![entry], 1, 20)).into_response()
}

async fn list_college_tasks(Query(params): Query<HashMap<String, String>>) -> Response {
    let tasks = vec![
        json!({
            "id": "00000000-0000-0000-0000-000000000001",
            "user_id": TEST_USER_ID,
            "title": "Finish assignment",
            "description": null,
            "type": "assignment",
            "status": "pending",
            "due_date": "2024-06-10T23:59:00Z",
            "priority": "high",
            "subject": "Data Structures",
            "tags": [],
            "created_at": "2024-06-01T00:00:00Z",
            "updated_at": "2024-06-01T00:00:00Z"
        }),
        json!({
            "id": "00000000-0000-0000-0000-000000000002",
            "user_id": TEST_USER_ID,
            "title": "Submit project",
            "description": null,
            "type": "project",
            "status": "completed",
            "due_date": null,
            "priority": null,
            "subject": null,
            "tags": ["done"],
            "created_at": "2024-06-01T00:00:00Z",
            "updated_at": "2024-06-01T00:00:00Z"
        }),
    ];

    let filtered: Vec<Value> = match params.get("status") {
        Some(status) => tasks
            .into_iter()
            .filter(|t| t["status"] == json!(status))
            .collect(),
        None => tasks,
    };
    Json(paginated(filtered, 1, 20)).into_response()
}

async fn daily_summary(
    State(state): State<Arc<MockState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    if state.fail_list.load(Ordering::SeqCst) {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"success": false})),
        )
            .into_response();
    }
    let date = params
        .get("date")
        .cloned()
        .unwrap_or_else(|| "2024-06-01".to_string());
    Json(envelope(json!({
        "date": date,
        "user_id": TEST_USER_ID,
        "health": null,
        "college_tasks": [],
        "journal_entries": [],
        "total_expenses": 42.5,
        "water_intake": 6,
        "steps": 9000,
        "tasks_completed": 2,
        "tasks_pending": 3
    })))
    .into_response()
}

async fn daily_email(State(state): State<Arc<MockState>>, Json(body): Json<Value>) -> Response {
    state.email_requests.lock().unwrap().push(body);
    Json(envelope(json!({"note": "queued"}))).into_response()
}

async fn list_expenses() -> Response {
    let expense = json!({
        "id": Uuid::new_v4(),
        "user_id": TEST_USER_ID,
        "amount": 250.5,
        "category": "food",
        "date": "2024-06-01",
        "description": "Lunch at cafe",
        "payment_method": "card",
        "tags": ["dining"],
        "created_at": "2024-06-01T14:00:00Z",
        "updated_at": "2024-06-01T14:00:00Z"
    });
    Json(envelope(json!([expense]))).into_response()
}

async fn expense_reports() -> Response {
    Json(envelope(json!({"total": 250.5, "by_category": {"food": 250.5}}))).into_response()
}

// ─── Client builders ─────────────────────────────────────────────

pub fn test_config(base_url: &str) -> Config {
    Config {
        api_base_url: base_url.to_string(),
        ..Config::test_default()
    }
}

/// Client with no session (for auth flows).
pub fn anonymous_client(base_url: &str) -> ApiClient {
    ApiClient::new(&test_config(base_url), Arc::new(MemoryStorage::new()))
}

/// Client with a stored session the mock backend accepts.
pub fn client_with_session(base_url: &str) -> ApiClient {
    client_with_session_storage(base_url, Arc::new(MemoryStorage::new()))
}

/// Client with a stored session over caller-provided storage.
pub fn client_with_session_storage(
    base_url: &str,
    storage: Arc<dyn KeyValueStorage>,
) -> ApiClient {
    let client = ApiClient::new(&test_config(base_url), storage);
    client.gateway().session().set(Session {
        token: TEST_TOKEN.to_string(),
        user: test_user(),
    });
    client
}
