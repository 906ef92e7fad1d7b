// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Firestore integration tests.
//!
//! These tests require the Firestore emulator to be running and
//! FIRESTORE_EMULATOR_HOST to be set.

use pvsf_api::db::DocumentStore;
use pvsf_api::services::collect_platform_stats;

mod common;
use common::test_db;

fn unique_suffix() -> u128 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos()
}

#[tokio::test]
async fn test_count_of_empty_collection() {
    require_emulator!();

    let db = test_db().await;
    let collection = format!("empty_{}", unique_suffix());

    assert_eq!(db.count(&collection).await.unwrap(), 0);
}

#[tokio::test]
async fn test_platform_stats_query() {
    require_emulator!();

    let db = test_db().await;
    // Counts depend on emulator contents; only the queries are checked.
    collect_platform_stats(&db)
        .await
        .expect("count aggregations should succeed");
}

#[tokio::test]
async fn test_recent_videos_for_unknown_author() {
    require_emulator!();

    let db = test_db().await;
    let xid = format!("nobody_{}", unique_suffix());

    let videos = db.recent_videos_by_author(&xid, 50).await.unwrap();
    assert!(videos.is_empty());
}

#[tokio::test]
async fn test_listing_queries() {
    require_emulator!();

    let db = test_db().await;

    let videos = db.list_published_videos().await.unwrap();
    assert!(videos
        .iter()
        .all(|v| v.status == pvsf_api::models::VideoStatus::Published));

    let users = db.list_linked_users().await.unwrap();
    assert!(users.iter().all(|u| u.is_x_linked()));
}
