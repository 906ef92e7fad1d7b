// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Public video listing.

use crate::error::{respond, Result};
use crate::models::LegacyVideo;
use crate::routes::method_not_allowed;
use crate::services::video_to_legacy;
use crate::AppState;
use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use std::sync::Arc;

pub const VIDEOS_CACHE_CONTROL: &str = "public, s-maxage=60, stale-while-revalidate=300";

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route(
        "/api/videos",
        get(list_videos)
            .head(method_not_allowed)
            .fallback(method_not_allowed),
    )
}

async fn list_videos(State(state): State<Arc<AppState>>) -> Response {
    let result = load_videos(&state)
        .await
        .map(|videos| {
            ([(header::CACHE_CONTROL, VIDEOS_CACHE_CONTROL)], Json(videos)).into_response()
        });
    respond(result, "videos")
}

async fn load_videos(state: &AppState) -> Result<Vec<LegacyVideo>> {
    let videos = state.db.list_published_videos().await?;
    tracing::debug!(count = videos.len(), "Loaded published videos");
    Ok(videos.iter().map(video_to_legacy).collect())
}
