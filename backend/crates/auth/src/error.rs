//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, code::ErrorCode};
use platform::bearer::BearerError;
use thiserror::Error;

use crate::domain::token::TokenError;

/// Message returned when register/login bodies lack a field
pub const MISSING_FIELDS_MESSAGE: &str = "Please fill out all fields";

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Required field missing or invalid
    #[error("{0}")]
    Validation(String),

    /// User name already exists
    #[error("Username is already taken")]
    UserNameTaken,

    /// Unknown user or wrong password (deliberately indistinguishable)
    #[error("Incorrect username or password")]
    InvalidCredentials,

    /// No usable `Authorization: Bearer` header
    #[error("{0}")]
    MissingToken(#[from] BearerError),

    /// Token failed verification
    #[error("{0}")]
    InvalidToken(#[from] TokenError),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the stable error code for this error
    pub fn code(&self) -> ErrorCode {
        match self {
            AuthError::Validation(_) => ErrorCode::ValidationError,
            AuthError::UserNameTaken => ErrorCode::AlreadyExists,
            AuthError::InvalidCredentials => ErrorCode::InvalidCredentials,
            AuthError::MissingToken(_) => ErrorCode::Unauthorized,
            // Encoding only happens while issuing, never on a client's token
            AuthError::InvalidToken(TokenError::Encoding(_)) => ErrorCode::InternalError,
            AuthError::InvalidToken(_) => ErrorCode::Unauthorized,
            AuthError::Database(_) | AuthError::Internal(_) => ErrorCode::InternalError,
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.code().kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Convert to AppError
    ///
    /// Server-side failures get a generic message; details stay in the logs.
    pub fn to_app_error(&self) -> AppError {
        match self.code() {
            ErrorCode::InternalError => AppError::internal("Something went wrong"),
            ErrorCode::Unauthorized => AppError::unauthorized(self.to_string())
                .with_action("Log in to continue"),
            code => AppError::from_code(code, self.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidToken(TokenError::Encoding(msg)) => {
                tracing::error!(message = %msg, "Token encoding failed");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::InvalidToken(TokenError::BadSignature) => {
                tracing::warn!("Token with invalid signature presented");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for AuthError {
    /// Value-object validation failures arrive as `AppError`s
    fn from(err: AppError) -> Self {
        match err.code() {
            ErrorCode::ValidationError => AuthError::Validation(err.message().to_string()),
            _ => AuthError::Internal(err.to_string()),
        }
    }
}
