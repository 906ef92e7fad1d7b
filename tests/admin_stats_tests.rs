// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Admin stats authorization and counting tests.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use pvsf_api::models::{Role, UserDocument, VideoDocument};
use tower::ServiceExt;

mod common;

#[tokio::test]
async fn test_stats_without_session() {
    let (app, _, _) = common::create_test_app();

    let response = app
        .oneshot(common::get("/api/admin/stats", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = common::body_json(response).await;
    assert_eq!(body, serde_json::json!({ "error": "Authentication required" }));
}

#[tokio::test]
async fn test_stats_with_invalid_token() {
    let (app, _, _) = common::create_test_app();

    let response = app
        .oneshot(common::get("/api/admin/stats", Some("invalid.token.here")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_stats_with_non_admin_session() {
    let (app, state, _) = common::create_test_app();
    let token = common::create_test_token(&state, "user-1", Role::User);

    let response = app
        .oneshot(common::get("/api/admin/stats", Some(&token)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let body = common::body_json(response).await;
    assert_eq!(body, serde_json::json!({ "error": "Admin access required" }));
}

#[tokio::test]
async fn test_auth_checks_do_not_touch_store() {
    // The offline store fails every query, so a 500 here would mean the
    // handler ran before the session checks.
    let (app, state) = common::create_offline_app();
    let token = common::create_test_token(&state, "user-1", Role::User);

    let response = app
        .clone()
        .oneshot(common::get("/api/admin/stats", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = app
        .oneshot(common::get("/api/admin/stats", Some(&token)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_stats_with_admin_session() {
    let (app, state, store) = common::create_test_app();

    for i in 0..3 {
        store.insert_user(UserDocument {
            id: format!("user-{i}"),
            ..Default::default()
        });
    }
    for i in 0..5 {
        store.insert_video(VideoDocument {
            id: format!("video-{i}"),
            ..Default::default()
        });
    }
    store.insert_event_slot("slot-1", serde_json::json!({ "label": "Day 1" }));
    store.insert_event_slot("slot-2", serde_json::json!({ "label": "Day 2" }));

    let token = common::create_test_token(&state, "admin-1", Role::Admin);

    let response = app
        .oneshot(common::get("/api/admin/stats", Some(&token)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;
    assert_eq!(
        body,
        serde_json::json!({ "videoCount": 5, "userCount": 3, "slotCount": 2 })
    );
}

#[tokio::test]
async fn test_stats_empty_store() {
    let (app, state, _) = common::create_test_app();
    let token = common::create_test_token(&state, "admin-1", Role::Admin);

    let response = app
        .oneshot(common::get("/api/admin/stats", Some(&token)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;
    for key in ["videoCount", "userCount", "slotCount"] {
        assert_eq!(body[key].as_u64(), Some(0), "{key}");
    }
}

#[tokio::test]
async fn test_stats_session_cookie() {
    let (app, state, _) = common::create_test_app();
    let token = common::create_test_token(&state, "admin-1", Role::Admin);

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/admin/stats")
                .header(
                    header::COOKIE,
                    format!("{}={}", state.config.session_cookie_name, token),
                )
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_stats_store_failure_is_generic_500() {
    let (app, state) = common::create_offline_app();
    let token = common::create_test_token(&state, "admin-1", Role::Admin);

    let response = app
        .oneshot(common::get("/api/admin/stats", Some(&token)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = common::body_json(response).await;
    assert_eq!(body, serde_json::json!({ "error": "Internal server error" }));
}
