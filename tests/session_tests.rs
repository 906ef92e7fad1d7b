// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Session lookup endpoint tests.

use axum::http::{header, StatusCode};
use pvsf_api::models::Role;
use tower::ServiceExt;

mod common;

#[tokio::test]
async fn test_no_session() {
    let (app, _, _) = common::create_test_app();

    let response = app
        .oneshot(common::get("/api/auth/session", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CACHE_CONTROL).unwrap(),
        "no-store"
    );
    let body = common::body_json(response).await;
    assert_eq!(body, serde_json::json!({ "user": null, "isAdmin": false }));
}

#[tokio::test]
async fn test_admin_session() {
    let (app, state, _) = common::create_test_app();
    let token = common::create_test_token(&state, "admin-1", Role::Admin);

    let response = app
        .oneshot(common::get("/api/auth/session", Some(&token)))
        .await
        .unwrap();

    let body = common::body_json(response).await;
    assert_eq!(
        body,
        serde_json::json!({ "user": { "id": "admin-1", "role": "admin" }, "isAdmin": true })
    );
}

#[tokio::test]
async fn test_user_session() {
    let (app, state, _) = common::create_test_app();
    let token = common::create_test_token(&state, "user-1", Role::User);

    let response = app
        .oneshot(common::get("/api/auth/session", Some(&token)))
        .await
        .unwrap();

    let body = common::body_json(response).await;
    assert_eq!(body["isAdmin"], false);
    assert_eq!(body["user"]["role"], "user");
}
