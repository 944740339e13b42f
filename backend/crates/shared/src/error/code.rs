//! Error Code - Stable, client-facing error identifiers
//!
//! HTTP status alone cannot tell a failed login from an expired token
//! (both are 401), so every error body carries one of these codes.

use serde::Serialize;

use super::kind::ErrorKind;

/// 安定したエラーコード
///
/// ## Examples
/// ```rust
/// use kernel::error::code::ErrorCode;
///
/// assert_eq!(ErrorCode::InvalidCredentials.as_str(), "INVALID_CREDENTIALS");
/// assert_eq!(ErrorCode::InvalidCredentials.kind().status_code(), 401);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Required field missing or malformed
    ValidationError,
    /// Missing, invalid or expired bearer token
    Unauthorized,
    /// Wrong username/password combination
    InvalidCredentials,
    /// Username already registered
    AlreadyExists,
    /// Unresolvable post or comment id
    NotFound,
    /// Persistence or other server-side failure
    InternalError,
}

impl ErrorCode {
    /// Wire representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::Unauthorized => "UNAUTHORIZED",
            ErrorCode::InvalidCredentials => "INVALID_CREDENTIALS",
            ErrorCode::AlreadyExists => "ALREADY_EXISTS",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        }
    }

    /// HTTP classification for this code
    pub const fn kind(&self) -> ErrorKind {
        match self {
            ErrorCode::ValidationError => ErrorKind::BadRequest,
            ErrorCode::Unauthorized | ErrorCode::InvalidCredentials => ErrorKind::Unauthorized,
            ErrorCode::AlreadyExists => ErrorKind::Conflict,
            ErrorCode::NotFound => ErrorKind::NotFound,
            ErrorCode::InternalError => ErrorKind::InternalServerError,
        }
    }

    /// Default code for errors built from a bare [`ErrorKind`]
    pub const fn from_kind(kind: ErrorKind) -> Self {
        match kind {
            ErrorKind::BadRequest => ErrorCode::ValidationError,
            ErrorKind::Unauthorized => ErrorCode::Unauthorized,
            ErrorKind::NotFound => ErrorCode::NotFound,
            ErrorKind::Conflict => ErrorCode::AlreadyExists,
            ErrorKind::InternalServerError => ErrorCode::InternalError,
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
