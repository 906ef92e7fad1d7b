// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Public user listing and author icon lookup.

use crate::error::{respond, AppError, Result};
use crate::models::LegacyUser;
use crate::routes::method_not_allowed;
use crate::services::icons::{distinct_icon_urls, RECENT_VIDEO_LIMIT};
use crate::services::user_to_legacy;
use crate::AppState;
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::header,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

pub const USERS_CACHE_CONTROL: &str = "public, s-maxage=300, stale-while-revalidate=600";

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/api/users",
            get(list_users)
                .head(method_not_allowed)
                .fallback(method_not_allowed),
        )
        .route(
            "/api/user/icons",
            get(get_icons)
                .head(method_not_allowed)
                .fallback(method_not_allowed),
        )
}

// ─── User Listing ────────────────────────────────────────────

async fn list_users(State(state): State<Arc<AppState>>) -> Response {
    let result = load_users(&state)
        .await
        .map(|users| {
            ([(header::CACHE_CONTROL, USERS_CACHE_CONTROL)], Json(users)).into_response()
        });
    respond(result, "users")
}

async fn load_users(state: &AppState) -> Result<Vec<LegacyUser>> {
    let users = state.db.list_linked_users().await?;
    tracing::debug!(count = users.len(), "Loaded linked users");
    Ok(users.iter().map(user_to_legacy).collect())
}

// ─── Icon History ────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct IconsQuery {
    /// Author handle, matched case-insensitively
    xid: Option<String>,
}

#[derive(Debug, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct IconsResponse {
    pub icons: Vec<String>,
}

async fn get_icons(
    State(state): State<Arc<AppState>>,
    query: std::result::Result<Query<IconsQuery>, QueryRejection>,
) -> Response {
    respond(load_icons(&state, query).await, "user/icons")
}

async fn load_icons(
    state: &AppState,
    query: std::result::Result<Query<IconsQuery>, QueryRejection>,
) -> Result<Json<IconsResponse>> {
    let Query(params) = query.map_err(|_| {
        AppError::BadRequest("xid query parameter must be a single string".to_string())
    })?;

    let xid = params
        .xid
        .filter(|xid| !xid.is_empty())
        .ok_or_else(|| AppError::BadRequest("xid query parameter is required".to_string()))?;

    let videos = state
        .db
        .recent_videos_by_author(&xid.to_lowercase(), RECENT_VIDEO_LIMIT)
        .await?;

    let icons = distinct_icon_urls(&videos);
    tracing::debug!(
        videos = videos.len(),
        icons = icons.len(),
        "Collected author icons"
    );

    Ok(Json(IconsResponse { icons }))
}
