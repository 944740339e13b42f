//! Application Configuration
//!
//! Configuration for the Auth application layer. Loaded once at startup and
//! shared read-only behind an `Arc`.

use std::fmt;
use std::time::Duration;

use platform::config::{ConfigError, decode_secret, env_opt, env_parse_or};
use platform::crypto::random_bytes;

use crate::domain::token::TokenService;

/// Minimum decoded length of `TOKEN_SECRET`
pub const MIN_SECRET_BYTES: usize = 32;

/// Default token lifetime (60 days)
pub const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(60 * 24 * 3600);

/// Auth application configuration
#[derive(Clone)]
pub struct AuthConfig {
    /// HMAC key for signing bearer tokens
    pub token_secret: Vec<u8>,
    /// Lifetime of issued tokens
    pub token_ttl: Duration,
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
}

impl AuthConfig {
    /// Create config with an explicit secret and default TTL
    pub fn new(token_secret: impl Into<Vec<u8>>) -> Self {
        Self {
            token_secret: token_secret.into(),
            token_ttl: DEFAULT_TOKEN_TTL,
            password_pepper: None,
        }
    }

    /// Create config with a random token secret (for development)
    ///
    /// Tokens will not survive a restart.
    pub fn with_random_secret() -> Self {
        Self::new(random_bytes(MIN_SECRET_BYTES))
    }

    /// Load from the environment
    ///
    /// - `TOKEN_SECRET`: base64, at least 32 bytes. Required unless
    ///   `allow_random_secret` is set (debug builds).
    /// - `TOKEN_TTL_SECS`: token lifetime, default 60 days.
    /// - `PASSWORD_PEPPER`: optional base64 pepper.
    pub fn from_env(allow_random_secret: bool) -> Result<Self, ConfigError> {
        let mut config = match env_opt("TOKEN_SECRET") {
            Some(raw) => Self::new(decode_secret("TOKEN_SECRET", &raw, MIN_SECRET_BYTES)?),
            None if allow_random_secret => {
                tracing::warn!("TOKEN_SECRET not set, using a random secret for this process");
                Self::with_random_secret()
            }
            None => return Err(ConfigError::Missing("TOKEN_SECRET")),
        };

        config.token_ttl =
            Duration::from_secs(env_parse_or("TOKEN_TTL_SECS", DEFAULT_TOKEN_TTL.as_secs())?);

        if let Some(raw) = env_opt("PASSWORD_PEPPER") {
            config.password_pepper = Some(decode_secret("PASSWORD_PEPPER", &raw, 1)?);
        }

        Ok(config)
    }

    /// Build the token service for this configuration
    pub fn token_service(&self) -> TokenService {
        TokenService::new(self.token_secret.clone(), self.token_ttl)
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("token_secret", &"[REDACTED]")
            .field("token_ttl", &self.token_ttl)
            .field("password_pepper", &self.password_pepper.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_secrets_differ() {
        let a = AuthConfig::with_random_secret();
        let b = AuthConfig::with_random_secret();
        assert_eq!(a.token_secret.len(), MIN_SECRET_BYTES);
        assert_ne!(a.token_secret, b.token_secret);
        assert_eq!(a.token_ttl, DEFAULT_TOKEN_TTL);
    }

    #[test]
    fn test_token_service_uses_config() {
        let config = AuthConfig {
            token_ttl: Duration::from_secs(10),
            ..AuthConfig::new(vec![3u8; 32])
        };
        let tokens = config.token_service();
        let token = tokens.issue_at("alice", 100).unwrap();
        assert!(config.token_service().verify_at(&token, 109).is_ok());
        assert!(config.token_service().verify_at(&token, 110).is_err());
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let config = AuthConfig {
            password_pepper: Some(b"pepper".to_vec()),
            ..AuthConfig::new(b"super-secret-key-material-000000".to_vec())
        };
        let debug = format!("{config:?}");
        assert!(!debug.contains("super-secret"));
        assert!(!debug.contains("pepper\""));
    }
}
