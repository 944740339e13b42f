//! Token Session
//!
//! Keeps the bearer token for the current user and reads its payload
//! locally. The payload is decoded without checking the signature: the
//! result is only a UI hint, the server re-verifies every request.

use std::sync::{PoisonError, RwLock};

use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct Payload {
    username: String,
    exp: i64,
}

/// Holder of the current bearer token
#[derive(Debug, Default)]
pub struct Session {
    token: RwLock<Option<String>>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn save_token(&self, token: impl Into<String>) {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = Some(token.into());
    }

    pub fn token(&self) -> Option<String> {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn log_out(&self) {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = None;
    }

    /// A token is held and its `exp` is in the future
    pub fn is_logged_in(&self) -> bool {
        self.is_logged_in_at(Utc::now().timestamp())
    }

    pub fn is_logged_in_at(&self, now: i64) -> bool {
        self.payload().is_some_and(|p| p.exp > now)
    }

    /// User name from the held token, if logged in
    pub fn current_user(&self) -> Option<String> {
        self.is_logged_in()
            .then(|| self.payload().map(|p| p.username))
            .flatten()
    }

    fn payload(&self) -> Option<Payload> {
        let token = self.token()?;
        decode::<Payload>(&token, &DecodingKey::from_secret(&[]), &unverified())
            .ok()
            .map(|data| data.claims)
    }
}

/// Reads claims without the signing secret; expiry is checked by the caller
fn unverified() -> Validation {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false;
    validation
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{EncodingKey, Header, encode};

    /// Signed with a key the session never sees
    fn token(username: &str, exp: i64) -> String {
        encode(
            &Header::new(Algorithm::HS256),
            &serde_json::json!({ "username": username, "iat": 0, "exp": exp }),
            &EncodingKey::from_secret(b"server-side-secret"),
        )
        .unwrap()
    }

    #[test]
    fn test_empty_session() {
        let session = Session::new();
        assert!(session.token().is_none());
        assert!(!session.is_logged_in());
        assert!(session.current_user().is_none());
    }

    #[test]
    fn test_save_and_log_out() {
        let session = Session::new();
        let far_future = Utc::now().timestamp() + 3600;
        session.save_token(token("alice", far_future));

        assert!(session.is_logged_in());
        assert_eq!(session.current_user().as_deref(), Some("alice"));

        session.log_out();
        assert!(session.token().is_none());
        assert!(!session.is_logged_in());
    }

    #[test]
    fn test_expiry_is_strict() {
        let session = Session::new();
        session.save_token(token("alice", 1_000));

        assert!(session.is_logged_in_at(999));
        assert!(!session.is_logged_in_at(1_000));
        assert!(!session.is_logged_in_at(1_001));
    }

    #[test]
    fn test_expired_token_has_no_current_user() {
        let session = Session::new();
        session.save_token(token("alice", 1_000));
        assert!(session.current_user().is_none());
    }

    #[test]
    fn test_garbage_token() {
        let session = Session::new();
        session.save_token("not-a-token");
        assert!(!session.is_logged_in());
        assert!(session.token().is_some());
    }
}
