// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! PVSF API: read-only JSON endpoints for the video festival site.
//!
//! Serves the public user and video listings in their legacy JSON shape,
//! the author icon lookup, and the admin dashboard counters, all backed by
//! the Firestore document store.

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use db::DocumentStore;
use std::sync::Arc;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub db: Arc<dyn DocumentStore>,
}
