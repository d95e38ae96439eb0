// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Generic remote-collection store.
//!
//! One implementation of the fetch/mutate state machine shared by every
//! listable resource, parameterized by a [`ResourceOps`] client:
//!
//! - `refresh` drives Loading → Ready/Failed. A failed fetch keeps the
//!   previously fetched items (so the view does not flash empty) and
//!   records the error message.
//! - Each refresh is tagged with a generation; a response arriving for a
//!   superseded generation is discarded without touching state, so the
//!   last-issued refresh always wins regardless of arrival order.
//! - `create`/`update`/`remove` patch the collection element-wise on
//!   success and leave it untouched on failure. They do not interact with
//!   the Loading/Ready/Failed machine.
//!
//! Locks are plain `std::sync` and are never held across an await.

use crate::error::Result;
use crate::gateway::{Page, Pagination};
use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use uuid::Uuid;

/// CRUD operations of one listable resource, as the collection store
/// needs them. Implemented by the calendar, health, journal, and college
/// clients.
#[async_trait]
pub trait ResourceOps: Send + Sync {
    type Item: Clone + Send + Sync;
    type Query: Send + Sync;
    type Create: Send + Sync;
    type Update: Send + Sync;

    /// Identity used for element-wise patching.
    fn id_of(item: &Self::Item) -> Uuid;

    async fn list(&self, query: &Self::Query) -> Result<Page<Self::Item>>;
    async fn create(&self, input: &Self::Create) -> Result<Self::Item>;
    async fn update(&self, id: Uuid, patch: &Self::Update) -> Result<Self::Item>;
    async fn delete(&self, id: Uuid) -> Result<()>;
}

/// Cloned view of a store's state for the presentation layer.
#[derive(Debug, Clone)]
pub struct CollectionSnapshot<T> {
    pub items: Vec<T>,
    pub loading: bool,
    /// Set when the most recent fetch failed; cleared by the next
    /// successful one
    pub error: Option<String>,
    pub pagination: Pagination,
}

struct ViewState<T> {
    items: Vec<T>,
    loading: bool,
    error: Option<String>,
    pagination: Pagination,
}

impl<T> Default for ViewState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            error: None,
            pagination: Pagination::default(),
        }
    }
}

/// In-memory view of one remote collection.
pub struct CollectionStore<O: ResourceOps> {
    ops: O,
    state: Mutex<ViewState<O::Item>>,
    generation: AtomicU64,
}

impl<O: ResourceOps> CollectionStore<O> {
    pub fn new(ops: O) -> Self {
        Self {
            ops,
            state: Mutex::new(ViewState::default()),
            generation: AtomicU64::new(0),
        }
    }

    /// The underlying resource client.
    pub fn client(&self) -> &O {
        &self.ops
    }

    // ─── Fetch machine ───────────────────────────────────────────

    /// Fetch the collection for `query`, replacing the view wholesale on
    /// success.
    ///
    /// Parameter changes do not re-fetch automatically; the caller invokes
    /// `refresh` whenever its filters, page, or page size change.
    ///
    /// The error is both recorded in the view and returned. A stale result
    /// (superseded by a newer `refresh`) is discarded and reported as `Ok`.
    pub async fn refresh(&self, query: &O::Query) -> Result<()> {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        {
            let mut state = self.state.lock().unwrap();
            state.loading = true;
            state.error = None;
        }

        let result = self.ops.list(query).await;

        // A newer refresh owns the view now; this response is stale.
        if self.generation.load(Ordering::SeqCst) != generation {
            tracing::debug!(generation, "Discarding stale fetch result");
            return Ok(());
        }

        let mut state = self.state.lock().unwrap();
        state.loading = false;
        match result {
            Ok(page) => {
                state.items = page.items;
                state.pagination = page.pagination;
                state.error = None;
                Ok(())
            }
            Err(e) => {
                // Keep the previously fetched items so the view does not
                // flash empty under a transient failure.
                state.error = Some(e.to_string());
                Err(e)
            }
        }
    }

    // ─── Mutations ───────────────────────────────────────────────

    /// Create an item and prepend it to the view.
    ///
    /// Most-recent-first placement is a client-side choice; the next
    /// refresh re-establishes server ordering.
    pub async fn create(&self, input: &O::Create) -> Result<O::Item> {
        let item = self.ops.create(input).await?;
        self.state.lock().unwrap().items.insert(0, item.clone());
        Ok(item)
    }

    /// Update an item, replacing it in place by identity.
    pub async fn update(&self, id: Uuid, patch: &O::Update) -> Result<O::Item> {
        let updated = self.ops.update(id, patch).await?;
        let mut state = self.state.lock().unwrap();
        if let Some(existing) = state.items.iter_mut().find(|item| O::id_of(item) == id) {
            *existing = updated.clone();
        }
        Ok(updated)
    }

    /// Delete an item and drop it from the view by identity.
    pub async fn remove(&self, id: Uuid) -> Result<()> {
        self.ops.delete(id).await?;
        self.state
            .lock()
            .unwrap()
            .items
            .retain(|item| O::id_of(item) != id);
        Ok(())
    }

    // ─── Accessors ───────────────────────────────────────────────

    /// Cloned view of the current state.
    pub fn snapshot(&self) -> CollectionSnapshot<O::Item> {
        let state = self.state.lock().unwrap();
        CollectionSnapshot {
            items: state.items.clone(),
            loading: state.loading,
            error: state.error.clone(),
            pagination: state.pagination,
        }
    }

    pub fn items(&self) -> Vec<O::Item> {
        self.state.lock().unwrap().items.clone()
    }

    pub fn loading(&self) -> bool {
        self.state.lock().unwrap().loading
    }

    pub fn error(&self) -> Option<String> {
        self.state.lock().unwrap().error.clone()
    }

    pub fn pagination(&self) -> Pagination {
        self.state.lock().unwrap().pagination
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use std::collections::VecDeque;
    use std::sync::Arc;

    #[derive(Debug, Clone, PartialEq)]
    struct Note {
        id: Uuid,
        title: String,
    }

    /// Stub ops with scripted list responses; create/update/delete can be
    /// toggled to fail.
    #[derive(Default)]
    struct StubOps {
        list_responses: Mutex<VecDeque<Result<Page<Note>>>>,
        fail_mutations: Mutex<bool>,
    }

    impl StubOps {
        fn push_page(&self, items: Vec<Note>) {
            self.list_responses.lock().unwrap().push_back(Ok(Page {
                items,
                pagination: Pagination {
                    page: 1,
                    limit: 10,
                    total: 1,
                    total_pages: 1,
                },
            }));
        }

        fn push_error(&self) {
            self.list_responses
                .lock()
                .unwrap()
                .push_back(Err(ApiError::Transport("connection refused".to_string())));
        }

        fn mutation_result(&self) -> Result<()> {
            if *self.fail_mutations.lock().unwrap() {
                Err(ApiError::from_status(400, Some("rejected".to_string())))
            } else {
                Ok(())
            }
        }
    }

    #[async_trait]
    impl ResourceOps for Arc<StubOps> {
        type Item = Note;
        type Query = ();
        type Create = String;
        type Update = String;

        fn id_of(item: &Note) -> Uuid {
            item.id
        }

        async fn list(&self, _query: &()) -> Result<Page<Note>> {
            self.list_responses
                .lock()
                .unwrap()
                .pop_front()
                .expect("unscripted list call")
        }

        async fn create(&self, input: &String) -> Result<Note> {
            self.mutation_result()?;
            Ok(Note {
                id: Uuid::new_v4(),
                title: input.clone(),
            })
        }

        async fn update(&self, id: Uuid, patch: &String) -> Result<Note> {
            self.mutation_result()?;
            Ok(Note {
                id,
                title: patch.clone(),
            })
        }

        async fn delete(&self, _id: Uuid) -> Result<()> {
            self.mutation_result()
        }
    }

    fn note(title: &str) -> Note {
        Note {
            id: Uuid::new_v4(),
            title: title.to_string(),
        }
    }

    #[tokio::test]
    async fn test_refresh_replaces_view_wholesale() {
        let ops = Arc::new(StubOps::default());
        ops.push_page(vec![note("one"), note("two")]);

        let store = CollectionStore::new(ops.clone());
        store.refresh(&()).await.unwrap();

        let snapshot = store.snapshot();
        assert_eq!(snapshot.items.len(), 2);
        assert!(!snapshot.loading);
        assert!(snapshot.error.is_none());
        assert_eq!(snapshot.pagination.total, 1);
    }

    #[tokio::test]
    async fn test_failed_refresh_keeps_prior_items() {
        let ops = Arc::new(StubOps::default());
        ops.push_page(vec![note("keep me")]);
        ops.push_error();

        let store = CollectionStore::new(ops.clone());
        store.refresh(&()).await.unwrap();
        let err = store.refresh(&()).await.unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));

        let snapshot = store.snapshot();
        assert_eq!(snapshot.items.len(), 1);
        assert_eq!(snapshot.items[0].title, "keep me");
        assert!(!snapshot.loading);
        assert!(snapshot.error.is_some());
    }

    #[tokio::test]
    async fn test_create_prepends() {
        let ops = Arc::new(StubOps::default());
        ops.push_page(vec![note("existing")]);

        let store = CollectionStore::new(ops.clone());
        store.refresh(&()).await.unwrap();
        let created = store.create(&"newest".to_string()).await.unwrap();

        let items = store.items();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0], created);
        assert_eq!(items[1].title, "existing");
    }

    #[tokio::test]
    async fn test_update_replaces_in_place() {
        let ops = Arc::new(StubOps::default());
        let target = note("before");
        let target_id = target.id;
        ops.push_page(vec![note("first"), target, note("last")]);

        let store = CollectionStore::new(ops.clone());
        store.refresh(&()).await.unwrap();
        store.update(target_id, &"after".to_string()).await.unwrap();

        let items = store.items();
        assert_eq!(items.len(), 3);
        assert_eq!(items[1].id, target_id);
        assert_eq!(items[1].title, "after");
    }

    #[tokio::test]
    async fn test_remove_deletes_by_identity() {
        let ops = Arc::new(StubOps::default());
        let target = note("doomed");
        let target_id = target.id;
        ops.push_page(vec![note("survivor"), target]);

        let store = CollectionStore::new(ops.clone());
        store.refresh(&()).await.unwrap();
        store.remove(target_id).await.unwrap();

        let items = store.items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "survivor");
    }

    #[tokio::test]
    async fn test_failed_mutation_leaves_collection_untouched() {
        let ops = Arc::new(StubOps::default());
        let existing = note("existing");
        let existing_id = existing.id;
        ops.push_page(vec![existing]);

        let store = CollectionStore::new(ops.clone());
        store.refresh(&()).await.unwrap();
        *ops.fail_mutations.lock().unwrap() = true;

        assert!(store.create(&"nope".to_string()).await.is_err());
        assert!(store.update(existing_id, &"nope".to_string()).await.is_err());
        assert!(store.remove(existing_id).await.is_err());

        let items = store.items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "existing");
    }
}
