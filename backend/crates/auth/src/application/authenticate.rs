//! Authenticate Use Case
//!
//! Resolves the caller identity from an `Authorization: Bearer` header.

use std::sync::Arc;

use axum::http::HeaderMap;
use chrono::{DateTime, Utc};
use platform::bearer::extract_bearer;

use crate::domain::token::{TokenError, TokenService};
use crate::error::{AuthError, AuthResult};

/// Verified identity attached to authenticated requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    /// User name from the token; used as post/comment author
    pub user_name: String,
    /// When the presented token stops being valid
    pub expires_at: Option<DateTime<Utc>>,
}

/// Authenticate use case
pub struct AuthenticateUseCase {
    tokens: Arc<TokenService>,
}

impl AuthenticateUseCase {
    pub fn new(tokens: Arc<TokenService>) -> Self {
        Self { tokens }
    }

    pub fn execute(&self, headers: &HeaderMap) -> AuthResult<AuthenticatedUser> {
        let token = extract_bearer(headers)?;
        let claims = self.tokens.verify(token)?;

        if claims.username.is_empty() {
            return Err(AuthError::InvalidToken(TokenError::Malformed));
        }

        Ok(AuthenticatedUser {
            user_name: claims.username,
            expires_at: DateTime::<Utc>::from_timestamp(claims.exp, 0),
        })
    }
}
