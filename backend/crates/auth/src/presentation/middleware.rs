//! Auth Middleware
//!
//! Gates protected routes on a valid bearer token and hands the verified
//! identity to handlers.

use axum::extract::{FromRequestParts, Request, State};
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

use crate::application::{AuthenticateUseCase, AuthenticatedUser};
use crate::domain::token::TokenService;
use crate::error::AuthError;

/// Middleware that requires a valid bearer token
///
/// On success the [`AuthenticatedUser`] is stored in the request extensions.
/// Use with `axum::middleware::from_fn_with_state(tokens, require_auth)`.
pub async fn require_auth(
    State(tokens): State<Arc<TokenService>>,
    mut req: Request,
    next: Next,
) -> Response {
    match AuthenticateUseCase::new(tokens).execute(req.headers()) {
        Ok(user) => {
            tracing::debug!(user_name = %user.user_name, "Request authenticated");
            req.extensions_mut().insert(user);
            next.run(req).await
        }
        Err(e) => e.into_response(),
    }
}

impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Only present behind `require_auth`; a route without the layer is
        // treated as unauthenticated.
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or(AuthError::MissingToken(platform::bearer::BearerError::Missing))
    }
}
