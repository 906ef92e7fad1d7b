// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types with consistent API responses.
//!
//! Every route funnels its failures through [`handle_api_error`], which logs
//! the error, derives the HTTP status and writes a `{"error": "..."}` body.
//! Server errors never expose their detail to the client.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Message shown to clients for every 5xx response.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Application error type that converts to HTTP responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("{0}")]
    BadRequest(String),

    #[error("Authentication required")]
    Unauthorized,

    #[error("Admin access required")]
    Forbidden,

    #[error("{0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::Forbidden => StatusCode::FORBIDDEN,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to return to the client.
    pub fn client_message(&self) -> String {
        if self.status_code().is_server_error() {
            INTERNAL_ERROR_MESSAGE.to_string()
        } else {
            self.to_string()
        }
    }
}

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Single-use response slot.
///
/// The first [`send`](ResponseSink::send) wins; any later write is dropped.
#[derive(Default)]
pub struct ResponseSink {
    response: Option<Response>,
}

impl ResponseSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a response has already been written.
    pub fn is_sent(&self) -> bool {
        self.response.is_some()
    }

    /// Store `response` unless one is already present. Returns whether it was stored.
    pub fn send(&mut self, response: Response) -> bool {
        if self.is_sent() {
            return false;
        }
        self.response = Some(response);
        true
    }

    /// Take the written response. An empty sink yields a generic 500.
    pub fn finish(self) -> Response {
        self.response.unwrap_or_else(|| {
            tracing::error!("Handler finished without writing a response");
            error_body(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE)
        })
    }
}

fn error_body(status: StatusCode, message: &str) -> Response {
    let body = ErrorResponse {
        error: message.to_string(),
    };
    (status, Json(body)).into_response()
}

/// Log `err` and write its JSON error envelope into `sink`.
///
/// Does nothing to the sink if a response was already written.
pub fn handle_api_error(sink: &mut ResponseSink, err: &AppError, context: Option<&str>) {
    let status = err.status_code();
    let context = context.unwrap_or("api");

    if status.is_server_error() {
        tracing::error!(error = %err, context, status = status.as_u16(), "API error");
    } else {
        tracing::warn!(error = %err, context, status = status.as_u16(), "API request rejected");
    }

    if sink.is_sent() {
        tracing::debug!(context, "Response already sent, dropping error body");
        return;
    }

    sink.send(error_body(status, &err.client_message()));
}

/// Turn a handler result into a response, labelling any error with `context`.
pub fn respond<T: IntoResponse>(result: Result<T>, context: &str) -> Response {
    let mut sink = ResponseSink::new();
    match result {
        Ok(body) => {
            sink.send(body.into_response());
        }
        Err(err) => handle_api_error(&mut sink, &err, Some(context)),
    }
    sink.finish()
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let mut sink = ResponseSink::new();
        handle_api_error(&mut sink, &self, None);
        sink.finish()
    }
}

/// Result type alias for handlers
pub type Result<T> = std::result::Result<T, AppError>;
