//! Register Use Case
//!
//! Creates a new user account and returns a bearer token for it.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::token::TokenService;
use crate::domain::value_object::{
    user_name::UserName,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AuthError, AuthResult, MISSING_FIELDS_MESSAGE};

/// Register input
pub struct RegisterInput {
    pub username: String,
    pub password: String,
}

/// Output shared by register and login
#[derive(Debug)]
pub struct TokenOutput {
    pub token: String,
    pub user_name: UserName,
}

/// Register use case
pub struct RegisterUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    tokens: Arc<TokenService>,
    config: Arc<AuthConfig>,
}

impl<U> RegisterUseCase<U>
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

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<TokenOutput> {
        if input.username.trim().is_empty() || input.password.trim().is_empty() {
            return Err(AuthError::Validation(MISSING_FIELDS_MESSAGE.to_string()));
        }

        let user_name = UserName::new(&input.username)?;

        // Fast path only; the repository's uniqueness check is authoritative
        if self.user_repo.exists_by_user_name(&user_name).await? {
            return Err(AuthError::UserNameTaken);
        }

        let raw_password = RawPassword::new(input.password)?;
        let config = self.config.clone();
        let password_hash = tokio::task::spawn_blocking(move || {
            UserPassword::from_raw(&raw_password, config.pepper())
        })
        .await
        .map_err(|e| AuthError::Internal(e.to_string()))?
        .map_err(|e| AuthError::Internal(e.to_string()))?;

        let user = User::new(user_name, password_hash);
        self.user_repo.create(&user).await?;

        let token = self.tokens.issue(user.user_name.as_str())?;

        tracing::info!(
            user_id = %user.user_id,
            user_name = %user.user_name,
            "User registered"
        );

        Ok(TokenOutput {
            token,
            user_name: user.user_name,
        })
    }
}
