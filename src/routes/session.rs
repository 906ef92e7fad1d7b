// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Current session lookup, used by the frontend admin gate.

use crate::middleware::auth::session_from_headers;
use crate::routes::method_not_allowed;
use crate::AppState;
use axum::{
    extract::State,
    http::{header, HeaderMap},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route(
        "/api/auth/session",
        get(get_session)
            .head(method_not_allowed)
            .fallback(method_not_allowed),
    )
}

#[derive(Debug, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct SessionUser {
    pub id: String,
    pub role: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct SessionResponse {
    pub user: Option<SessionUser>,
    pub is_admin: bool,
}

/// Always 200; an absent or invalid session yields `user: null`.
async fn get_session(State(state): State<Arc<AppState>>, headers: HeaderMap) -> impl IntoResponse {
    let session = session_from_headers(
        &headers,
        &state.config.session_cookie_name,
        &state.config.session_signing_key,
    );

    let body = SessionResponse {
        is_admin: session.as_ref().is_some_and(|s| s.is_admin()),
        user: session.map(|s| SessionUser {
            id: s.user_id,
            role: s.role.as_str().to_string(),
        }),
    };

    ([(header::CACHE_CONTROL, "no-store")], Json(body))
}
