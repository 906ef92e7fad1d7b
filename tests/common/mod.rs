// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::body::Body;
use axum::http::{header, Request, Response};
use pvsf_api::config::Config;
use pvsf_api::db::{FirestoreDb, MemoryStore};
use pvsf_api::middleware::auth::create_session_token;
use pvsf_api::models::Role;
use pvsf_api::routes::create_router;
use pvsf_api::AppState;
use std::sync::Arc;

/// Check if emulator is available via environment variable.
#[allow(dead_code)]
pub fn emulator_available() -> bool {
    std::env::var("FIRESTORE_EMULATOR_HOST").is_ok()
}

/// Skip test with message if emulator not available.
#[macro_export]
macro_rules! require_emulator {
    () => {
        if !crate::common::emulator_available() {
            eprintln!("⚠️  Skipping: FIRESTORE_EMULATOR_HOST not set");
            return;
        }
    };
}

/// Create a test database connection.
#[allow(dead_code)]
pub async fn test_db() -> FirestoreDb {
    FirestoreDb::new("test-project")
        .await
        .expect("Failed to connect to Firestore emulator")
}

/// Create a test app backed by an in-memory store the test can seed.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let state = Arc::new(AppState {
        config: Config::test_default(),
        db: store.clone(),
    });

    (create_router(state.clone()), state, store)
}

/// Create a test app whose store fails every query.
#[allow(dead_code)]
pub fn create_offline_app() -> (axum::Router, Arc<AppState>) {
    let state = Arc::new(AppState {
        config: Config::test_default(),
        db: Arc::new(FirestoreDb::new_mock()),
    });

    (create_router(state.clone()), state)
}

/// Create a session token signed with the test key.
#[allow(dead_code)]
pub fn create_test_token(state: &AppState, user_id: &str, role: Role) -> String {
    create_session_token(user_id, role, &state.config.session_signing_key)
        .expect("Failed to create session token")
}

/// GET request, optionally with a bearer token.
#[allow(dead_code)]
pub fn get(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::empty()).unwrap()
}

/// Read a response body as JSON.
#[allow(dead_code)]
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    serde_json::from_slice(&body).expect("response body should be JSON")
}
