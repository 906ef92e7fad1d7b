// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date/time formatting.

use chrono::{DateTime, SecondsFormat, Utc};

/// Format a UTC timestamp as RFC3339 using a `Z` suffix.
pub fn format_utc_rfc3339(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Like [`format_utc_rfc3339`], with an empty string for a missing timestamp.
pub fn format_optional_utc_rfc3339(date: Option<DateTime<Utc>>) -> String {
    date.map(format_utc_rfc3339).unwrap_or_default()
}
