//! # Centralized Error Handling
//!
//! The application-wide error type [`AppError`] used across all backend
//! modules, following the `thiserror` pattern. Every variant maps to an
//! HTTP status and is rendered as a JSON body `{"error": ..., "code": ...}`
//! via `IntoResponse`, so handlers can simply return `Result<T, AppError>`.
//!
//! Internal details never reach the client: server-side failures log the
//! full error and respond with a generic message.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Application-wide error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration error during startup or environment loading.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Signup attempted with a username that already exists.
    #[error("Username already taken: {0}")]
    DuplicateUsername(String),

    /// Login failed. Deliberately carries no detail: a missing user and a
    /// wrong password must be indistinguishable to the caller.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// No bearer token was presented on a protected route.
    #[error("Missing authentication token")]
    Unauthenticated,

    /// A bearer token was presented but is invalid, expired, or forged.
    #[error("Invalid or expired token")]
    Forbidden,

    /// Malformed or invalid user input.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Requested resource does not exist (or is not owned by the caller).
    #[error("Not found: {0}")]
    NotFound(String),

    /// Internal server error (unexpected failures).
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::DuplicateUsername(_) | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidCredentials | AppError::Unauthenticated => StatusCode::UNAUTHORIZED,
            AppError::Forbidden => StatusCode::FORBIDDEN,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Config(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// User-facing error message.
    ///
    /// Server errors return a generic message to avoid exposing internals.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Config(_) | AppError::Internal(_) => {
                "An internal error occurred".to_string()
            }
            other => other.to_string(),
        }
    }

    /// Stable machine-readable code for the JSON error body.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Config(_) => "Config",
            AppError::DuplicateUsername(_) => "DuplicateUsername",
            AppError::InvalidCredentials => "InvalidCredentials",
            AppError::Unauthenticated => "Unauthenticated",
            AppError::Forbidden => "Forbidden",
            AppError::Validation(_) => "Validation",
            AppError::NotFound(_) => "NotFound",
            AppError::Internal(_) => "Internal",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!("Server error: {}", self);
        } else {
            tracing::debug!("Client error: {}", self);
        }

        let body = Json(json!({
            "error": self.user_message(),
            "code": self.code(),
        }));

        (status, body).into_response()
    }
}

/// Convert `sqlx::Error` to `AppError`.
///
/// The only UNIQUE column in the schema is `users.username`, so a unique
/// constraint violation always means a duplicate signup.
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => AppError::NotFound("Database record not found".to_string()),
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                AppError::DuplicateUsername("username".to_string())
            }
            sqlx::Error::Database(db_err) => {
                AppError::Internal(format!("Database error: {}", db_err.message()))
            }
            _ => AppError::Internal(format!("Database error: {}", err)),
        }
    }
}
