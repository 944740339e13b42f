//! Bearer Token Service
//!
//! Issues and verifies compact HS256 JWTs through `jsonwebtoken`.
//! Claims are `{username, iat, exp}`; a token is valid while `now < exp`.
//!
//! The service holds only the signing keys and the TTL; it is a pure
//! function of secret, claims and clock, so it is shared as immutable
//! state (`Arc<TokenService>`) for the life of the process.

use std::fmt;
use std::time::Duration;

use chrono::Utc;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use zeroize::Zeroizing;

/// Token claims (the decoded payload segment)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Authenticated user name
    pub username: String,
    /// Issued at, epoch seconds
    pub iat: i64,
    /// Expiry, epoch seconds. Valid while `now < exp`.
    pub exp: i64,
}

/// Token verification / issuance failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// Not three base64url segments, or header/payload not the expected JSON
    #[error("Malformed token")]
    Malformed,

    /// Header names an algorithm other than HS256
    #[error("Unsupported token algorithm")]
    UnsupportedAlgorithm,

    /// Signature does not match header and payload
    #[error("Invalid token signature")]
    BadSignature,

    /// `exp` is not in the future
    #[error("Token expired")]
    Expired,

    /// Claims could not be serialized when issuing
    #[error("Failed to encode token: {0}")]
    Encoding(String),
}

impl From<jsonwebtoken::errors::Error> for TokenError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        match err.kind() {
            ErrorKind::InvalidSignature => Self::BadSignature,
            ErrorKind::InvalidAlgorithm => Self::UnsupportedAlgorithm,
            ErrorKind::ExpiredSignature => Self::Expired,
            _ => Self::Malformed,
        }
    }
}

/// HS256 token issuer / verifier
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl TokenService {
    pub fn new(secret: impl Into<Vec<u8>>, ttl: Duration) -> Self {
        let secret = Zeroizing::new(secret.into());

        // Expiry is checked against an explicit clock in `verify_at`
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.validate_exp = false;
        validation.set_required_spec_claims(&["exp"]);

        Self {
            encoding_key: EncodingKey::from_secret(&secret),
            decoding_key: DecodingKey::from_secret(&secret),
            validation,
            ttl,
        }
    }

    /// Issue a token for `username`, expiring `ttl` from now
    pub fn issue(&self, username: &str) -> Result<String, TokenError> {
        self.issue_at(username, Utc::now().timestamp())
    }

    /// Issue a token as if the current time were `now` (epoch seconds)
    pub fn issue_at(&self, username: &str, now: i64) -> Result<String, TokenError> {
        let ttl_secs = i64::try_from(self.ttl.as_secs()).unwrap_or(i64::MAX);
        let claims = Claims {
            username: username.to_string(),
            iat: now,
            exp: now.saturating_add(ttl_secs),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::Encoding(e.to_string()))
    }

    /// Verify a token against the current clock
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        self.verify_at(token, Utc::now().timestamp())
    }

    /// Verify a token as if the current time were `now` (epoch seconds)
    ///
    /// No leeway: a token whose `exp` equals `now` is already expired.
    pub fn verify_at(&self, token: &str, now: i64) -> Result<Claims, TokenError> {
        let claims = decode::<Claims>(token, &self.decoding_key, &self.validation)?.claims;

        if claims.exp <= now {
            return Err(TokenError::Expired);
        }

        Ok(claims)
    }
}

impl fmt::Debug for TokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenService")
            .field("secret", &"[REDACTED]")
            .field("ttl", &self.ttl)
            .finish()
    }
}
