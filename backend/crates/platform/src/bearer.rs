//! Bearer Token Extraction
//!
//! Parses `Authorization: Bearer <token>` request headers.

use axum::http::{HeaderMap, header};
use thiserror::Error;

/// Why a bearer credential could not be read from a request
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BearerError {
    #[error("Missing Authorization header")]
    Missing,

    #[error("Malformed Authorization header")]
    Malformed,
}

/// Extract the bearer token from the `Authorization` header
///
/// The scheme is matched case-insensitively (RFC 7235); the token must be
/// a single non-empty word.
pub fn extract_bearer(headers: &HeaderMap) -> Result<&str, BearerError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .ok_or(BearerError::Missing)?
        .to_str()
        .map_err(|_| BearerError::Malformed)?;

    let (scheme, token) = value
        .trim()
        .split_once(' ')
        .ok_or(BearerError::Malformed)?;

    if !scheme.eq_ignore_ascii_case("bearer") {
        return Err(BearerError::Malformed);
    }

    let token = token.trim();
    if token.is_empty() || token.contains(char::is_whitespace) {
        return Err(BearerError::Malformed);
    }

    Ok(token)
}
