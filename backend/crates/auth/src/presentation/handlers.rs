//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::{LoginInput, LoginUseCase, RegisterInput, RegisterUseCase};
use crate::domain::repository::UserRepository;
use crate::domain::token::TokenService;
use crate::error::{AuthError, AuthResult, MISSING_FIELDS_MESSAGE};
use crate::presentation::dto::{CredentialsRequest, TokenResponse};

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub tokens: Arc<TokenService>,
    pub config: Arc<AuthConfig>,
}

/// Unpack a credentials body, mapping absent/blank fields and bad JSON to
/// the "fill out all fields" validation error
fn credentials(
    body: Result<Json<CredentialsRequest>, JsonRejection>,
) -> AuthResult<(String, String)> {
    body.ok()
        .and_then(|Json(req)| req.into_fields())
        .ok_or_else(|| AuthError::Validation(MISSING_FIELDS_MESSAGE.to_string()))
}

/// POST /register
pub async fn register<R>(
    State(state): State<AuthAppState<R>>,
    body: Result<Json<CredentialsRequest>, JsonRejection>,
) -> AuthResult<Json<TokenResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let (username, password) = credentials(body)?;

    let use_case = RegisterUseCase::new(
        state.repo.clone(),
        state.tokens.clone(),
        state.config.clone(),
    );
    let output = use_case
        .execute(RegisterInput { username, password })
        .await?;

    Ok(Json(TokenResponse {
        token: output.token,
    }))
}

/// POST /login
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    body: Result<Json<CredentialsRequest>, JsonRejection>,
) -> AuthResult<Json<TokenResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let (username, password) = credentials(body)?;

    let use_case = LoginUseCase::new(
        state.repo.clone(),
        state.tokens.clone(),
        state.config.clone(),
    );
    let output = use_case.execute(LoginInput { username, password }).await?;

    Ok(Json(TokenResponse {
        token: output.token,
    }))
}
