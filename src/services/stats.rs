// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Admin dashboard counters.

use crate::db::{collections, DocumentStore};
use crate::error::AppError;
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Document counts shown on the admin dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct PlatformStats {
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub video_count: u64,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub user_count: u64,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub slot_count: u64,
}

/// Count users, videos and event slots concurrently.
///
/// Fails as a whole if any single count fails.
pub async fn collect_platform_stats(db: &dyn DocumentStore) -> Result<PlatformStats, AppError> {
    let (user_count, video_count, slot_count) = tokio::try_join!(
        db.count(collections::USERS),
        db.count(collections::VIDEOS),
        db.count(collections::EVENT_SLOTS),
    )?;

    tracing::debug!(user_count, video_count, slot_count, "Collected platform stats");

    Ok(PlatformStats {
        video_count,
        user_count,
        slot_count,
    })
}
