// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Persisted UI preferences.

use crate::storage::KeyValueStorage;
use std::sync::Arc;

/// Storage key for the theme preference.
const THEME_KEY: &str = "theme";

/// Persisted user preferences (currently just the theme).
///
/// No schema versioning: values are plain strings, matching the backend-free
/// key/value state the app has always kept client-side.
#[derive(Clone)]
pub struct Preferences {
    storage: Arc<dyn KeyValueStorage>,
}

impl Preferences {
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self { storage }
    }

    /// The persisted theme name, if one was saved.
    pub fn theme(&self) -> Option<String> {
        self.storage.get(THEME_KEY)
    }

    pub fn set_theme(&self, theme: &str) {
        self.storage.set(THEME_KEY, theme);
    }
}
