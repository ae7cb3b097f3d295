//! API error handling
//!
//! Every failure crosses the boundary as a JSON body with a short `error`
//! string; internal detail stays in the server logs.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// API error response body
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiError {
    /// Human-readable message
    pub error: String,
}

impl ApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

/// Application error type
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    BadRequest(String),
    Conflict(String),
    Unauthorized,
    Forbidden(String),
    Internal(String),
    Database(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            AppError::NotFound(resource) => (
                StatusCode::NOT_FOUND,
                ApiError::new(format!("{resource} not found")),
            ),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, ApiError::new(msg)),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, ApiError::new(msg)),
            AppError::Unauthorized => {
                (StatusCode::UNAUTHORIZED, ApiError::new("Invalid credentials"))
            }
            AppError::Forbidden(msg) => (StatusCode::FORBIDDEN, ApiError::new(msg)),
            AppError::Internal(detail) => {
                tracing::error!(%detail, "internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiError::new("Internal server error"),
                )
            }
            AppError::Database(detail) => {
                tracing::error!(%detail, "database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiError::new("Internal server error"),
                )
            }
        };

        (status, Json(error)).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(format!("Invalid input: {}", rejection.body_text()))
    }
}

/// JSON extractor whose rejections map to the standard 400 error body
#[derive(Debug, axum::extract::FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
