// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date handling.

use chrono::{NaiveDate, Utc};

/// Today's calendar date in UTC.
///
/// The backend interprets date-only parameters as UTC days, so the client
/// uses UTC here rather than the local timezone.
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}
