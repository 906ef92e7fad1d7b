// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Session authentication middleware.
//!
//! A session is an HS256 JWT carried in the session cookie or an
//! `Authorization: Bearer` header. Admin access is a predicate over the
//! session's role; nothing here touches the document store.

use crate::error::AppError;
use crate::models::Role;
use crate::AppState;
use axum::{
    extract::{Request, State},
    http::{header, HeaderMap},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::cookie::CookieJar;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Session lifetime.
pub const SESSION_TTL_SECS: usize = 30 * 24 * 60 * 60;

/// JWT claims structure.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject (user document ID)
    pub sub: String,
    #[serde(default)]
    pub role: String,
    /// Expiration time (Unix timestamp)
    pub exp: usize,
    /// Issued at (Unix timestamp)
    pub iat: usize,
}

/// Authenticated session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: String,
    pub role: Role,
}

impl Session {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// Resolve the session from a request's cookie or bearer token.
///
/// Returns `None` for a missing, malformed, expired or wrongly signed token.
pub fn session_from_headers(
    headers: &HeaderMap,
    cookie_name: &str,
    signing_key: &[u8],
) -> Option<Session> {
    let jar = CookieJar::from_headers(headers);
    let token = match jar.get(cookie_name) {
        Some(cookie) => cookie.value().to_string(),
        None => headers
            .get(header::AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .and_then(|h| h.strip_prefix("Bearer "))
            .map(str::to_string)?,
    };

    let key = DecodingKey::from_secret(signing_key);
    let validation = Validation::new(Algorithm::HS256);
    let token_data = decode::<Claims>(&token, &key, &validation).ok()?;

    if token_data.claims.sub.is_empty() {
        return None;
    }

    Some(Session {
        role: Role::from_claim(&token_data.claims.role),
        user_id: token_data.claims.sub,
    })
}

/// Middleware that requires a valid session.
pub async fn require_session(
    State(state): State<Arc<AppState>>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let session = session_from_headers(
        request.headers(),
        &state.config.session_cookie_name,
        &state.config.session_signing_key,
    )
    .ok_or(AppError::Unauthorized)?;

    request.extensions_mut().insert(session);
    Ok(next.run(request).await)
}

/// Middleware that requires the session set by [`require_session`] to be an admin.
pub async fn require_admin(request: Request, next: Next) -> Result<Response, AppError> {
    let session = request
        .extensions()
        .get::<Session>()
        .ok_or(AppError::Unauthorized)?;

    if !session.is_admin() {
        tracing::warn!(user_id = %session.user_id, "Non-admin session denied");
        return Err(AppError::Forbidden);
    }

    Ok(next.run(request).await)
}

/// Create a session token.
pub fn create_session_token(
    user_id: &str,
    role: Role,
    signing_key: &[u8],
) -> anyhow::Result<String> {
    use jsonwebtoken::{encode, EncodingKey, Header};
    use std::time::{SystemTime, UNIX_EPOCH};

    let now = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs() as usize;

    let claims = Claims {
        sub: user_id.to_string(),
        role: role.as_str().to_string(),
        iat: now,
        exp: now + SESSION_TTL_SECS,
    };

    Ok(encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(signing_key),
    )?)
}
