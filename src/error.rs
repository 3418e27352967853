use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Redirect, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::forms::FieldErrors;

/// Everything a handler can fail with, converted to a response at the
/// request boundary.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("session error: {0}")]
    Session(#[from] tower_sessions::session::Error),

    #[error("password hashing failed: {0}")]
    PasswordHash(argon2::password_hash::Error),

    #[error("validation failed")]
    Validation(FieldErrors),

    /// Covers both a truly absent memo id and one owned by another user,
    /// so existence of foreign memos cannot be probed.
    #[error("memo not found")]
    NotFound,

    #[error("not authenticated")]
    Unauthenticated,

    #[error("invalid credentials")]
    LoginFailed,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({ "errors": errors })),
            )
                .into_response(),
            AppError::NotFound => (
                StatusCode::NOT_FOUND,
                Json(json!({ "error": "Memo not found" })),
            )
                .into_response(),
            AppError::Unauthenticated => Redirect::to("/login").into_response(),
            AppError::LoginFailed => (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "error": "Invalid username or password" })),
            )
                .into_response(),
            AppError::Database(e) => {
                log::error!("database error: {e}");
                internal_error()
            }
            AppError::Session(e) => {
                log::error!("session error: {e}");
                internal_error()
            }
            AppError::PasswordHash(e) => {
                log::error!("password hashing failed: {e}");
                internal_error()
            }
        }
    }
}

fn internal_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": "Internal server error" })),
    )
        .into_response()
}
