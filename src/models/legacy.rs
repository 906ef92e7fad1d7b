// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Legacy JSON shapes served by the public listing endpoints.
//!
//! Older frontend clients read these field names directly, so they must not
//! change. Every field is always present; absent source data is rendered as
//! an empty string, `false`, or an empty list.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// User entry in `GET /api/users`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct LegacyUser {
    pub id: String,
    pub username: String,
    pub xid: String,
    pub icon: String,
    pub ylink: String,
    pub x_linked: bool,
    pub created_at: String,
}

/// Video entry in `GET /api/videos`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct LegacyVideo {
    pub id: String,
    pub title: String,
    pub description: String,
    pub author: String,
    pub author_xid: String,
    pub icon: String,
    pub ylink: String,
    pub thumbnail: String,
    pub music: String,
    pub credit: String,
    #[serde(rename = "type")]
    pub entry_type: String,
    pub tags: Vec<String>,
    pub status: String,
    /// Premiere time (RFC 3339)
    pub start_time: String,
    pub created_at: String,
}
