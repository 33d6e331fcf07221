/// Error types for the blog service
///
/// Every failure is recovered at the handler boundary and converted into an
/// HTTP response; nothing propagates as an unhandled fault. The taxonomy
/// keeps Forbidden (the post exists, the actor lacks rights) distinct from
/// NotFound (absent or filtered out).
use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use thiserror::Error;

use crate::models::forms::FieldErrors;

/// Result type for blog-service operations
pub type Result<T> = std::result::Result<T, AppError>;

/// Application error types
#[derive(Debug, Error)]
pub enum AppError {
    /// Entity id absent or filtered out (e.g. unpublished post requested
    /// anonymously)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Entity exists, actor lacks ownership
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Mutating action attempted while unauthenticated
    #[error("{0}")]
    AuthenticationRequired(String),

    /// Field-level validation errors; the form is redisplayed with the
    /// submitted input preserved
    #[error("Validation failed")]
    Validation(FieldErrors),

    /// Database operation failed
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::AuthenticationRequired(_) => StatusCode::UNAUTHORIZED,
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        match self {
            AppError::Validation(errors) => HttpResponse::build(status).json(serde_json::json!({
                "error": "Validation failed",
                "errors": errors,
                "status": status.as_u16(),
            })),
            other => HttpResponse::build(status).json(serde_json::json!({
                "error": other.to_string(),
                "status": status.as_u16(),
            })),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}
