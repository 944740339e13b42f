//! Login Use Case
//!
//! Verifies credentials and issues a bearer token.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::register::TokenOutput;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::token::TokenService;
use crate::domain::value_object::{
    user_name::UserName,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AuthError, AuthResult, MISSING_FIELDS_MESSAGE};

/// Login input
pub struct LoginInput {
    pub username: String,
    pub password: String,
}

/// Login use case
pub struct LoginUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    tokens: Arc<TokenService>,
    config: Arc<AuthConfig>,
}

impl<U> LoginUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, tokens: Arc<TokenService>, config: Arc<AuthConfig>) -> Self {
        Self {
            user_repo,
            tokens,
            config,
        }
    }

    /// Check a username/password pair
    ///
    /// Unknown user, malformed input and wrong password all fail with
    /// `InvalidCredentials`. An unknown user still pays for one Argon2
    /// verification.
    pub async fn verify_credentials(&self, username: &str, password: String) -> AuthResult<User> {
        let user_name = UserName::new(username).map_err(|_| AuthError::InvalidCredentials)?;
        let raw_password = RawPassword::new(password).map_err(|_| AuthError::InvalidCredentials)?;

        let user = self.user_repo.find_by_user_name(&user_name).await?;

        let config = self.config.clone();
        let (user, verified) = tokio::task::spawn_blocking(move || {
            let verified = match &user {
                Some(user) => user.password_hash.verify(&raw_password, config.pepper()),
                None => UserPassword::verify_missing(&raw_password, config.pepper()),
            };
            (user, verified)
        })
        .await
        .map_err(|e| AuthError::Internal(e.to_string()))?;

        match user {
            Some(user) if verified => Ok(user),
            _ => Err(AuthError::InvalidCredentials),
        }
    }

    pub async fn execute(&self, input: LoginInput) -> AuthResult<TokenOutput> {
        if input.username.trim().is_empty() || input.password.trim().is_empty() {
            return Err(AuthError::Validation(MISSING_FIELDS_MESSAGE.to_string()));
        }

        let user = self.verify_credentials(&input.username, input.password).await?;
        let token = self.tokens.issue(user.user_name.as_str())?;

        tracing::info!(user_name = %user.user_name, "User logged in");

        Ok(TokenOutput {
            token,
            user_name: user.user_name,
        })
    }
}
