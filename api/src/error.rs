//! Unified error types for the ShelfScan API
//!
//! This module defines error types for each layer:
//! - `ProviderError`: product data provider failures (swallowed by the cascade)
//! - `VisionError`: vision/LLM client failures
//! - `AppError`: Application layer errors (rendered as HTTP responses)
//!
//! Panics are turned into 500 responses by the panic layer in `main.rs`.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Product data provider errors
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

/// Vision model client errors
#[derive(Debug, Error)]
pub enum VisionError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Model returned an empty reply")]
    EmptyReply,

    #[error("Could not parse model reply: {0}")]
    Parse(String),

    #[error("Vision model is not configured")]
    NotConfigured,
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    /// Failures of the image analysis path. Rendered with status 200 so the
    /// client library does not drop the body.
    #[error("Image analysis failed: {0}")]
    Vision(#[from] VisionError),
}

/// Error response body for JSON responses
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, "Bad request".to_string(), Some(msg.clone()))
            }
            AppError::NotFound(msg) => {
                (StatusCode::NOT_FOUND, "Product not found".to_string(), Some(msg.clone()))
            }
            AppError::Vision(e) => {
                tracing::warn!(error = %e, "Image analysis failed");
                (StatusCode::OK, self.to_string(), None)
            }
        };

        let body = Json(ErrorResponse { error, details });

        (status, body).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}
