//! Forum Error Types
//!
//! This module provides forum-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, code::ErrorCode};
use thiserror::Error;

/// Forum-specific result type alias
pub type ForumResult<T> = Result<T, ForumError>;

/// Forum-specific error variants
#[derive(Debug, Error)]
pub enum ForumError {
    /// Invalid or missing input
    #[error("{0}")]
    Validation(String),

    /// Post id unknown or unparseable
    #[error("Post not found")]
    PostNotFound,

    /// Comment id unknown, unparseable, or not on the given post
    #[error("Comment not found")]
    CommentNotFound,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ForumError {
    /// Get the stable error code for this error
    pub fn code(&self) -> ErrorCode {
        match self {
            ForumError::Validation(_) => ErrorCode::ValidationError,
            ForumError::PostNotFound | ForumError::CommentNotFound => ErrorCode::NotFound,
            ForumError::Database(_) | ForumError::Internal(_) => ErrorCode::InternalError,
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.code().kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        match self.code() {
            ErrorCode::InternalError => AppError::internal("Something went wrong"),
            code => AppError::from_code(code, self.to_string()),
        }
    }

    fn log(&self) {
        match self {
            ForumError::Database(e) => {
                tracing::error!(error = %e, "Forum database error");
            }
            ForumError::Internal(msg) => {
                tracing::error!(message = %msg, "Forum internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Forum error");
            }
        }
    }
}

impl IntoResponse for ForumError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for ForumError {
    fn from(err: AppError) -> Self {
        match err.code() {
            ErrorCode::ValidationError => ForumError::Validation(err.message().to_string()),
            ErrorCode::NotFound => ForumError::PostNotFound,
            _ => ForumError::Internal(err.to_string()),
        }
    }
}
