// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Admin dashboard routes (admin session required).

use crate::error::{respond, Result};
use crate::middleware::auth::{require_admin, require_session};
use crate::routes::method_not_allowed;
use crate::services::{collect_platform_stats, PlatformStats};
use crate::AppState;
use axum::{extract::State, middleware, response::Response, routing::get, Json, Router};
use std::sync::Arc;

/// Session and role checks run before the handler and never reach the store.
/// HEAD and every other method get the unlayered 405 handler, so no session check runs.
pub fn routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new().route(
        "/api/admin/stats",
        get(get_stats)
            .route_layer(middleware::from_fn(require_admin))
            .route_layer(middleware::from_fn_with_state(state, require_session))
            .head(method_not_allowed)
            .fallback(method_not_allowed),
    )
}

async fn get_stats(State(state): State<Arc<AppState>>) -> Response {
    respond(load_stats(&state).await, "admin/stats")
}

async fn load_stats(state: &AppState) -> Result<Json<PlatformStats>> {
    let stats = collect_platform_stats(state.db.as_ref()).await?;
    Ok(Json(stats))
}
