//! User Entity
//!
//! A registered account: the credential record owned by the credential store.

use chrono::{DateTime, Utc};

use crate::domain::value_object::{
    user_id::UserId, user_name::UserName, user_password::UserPassword,
};

/// User entity
///
/// Immutable after registration (there is no password reset).
#[derive(Debug, Clone)]
pub struct User {
    /// Internal UUID identifier
    pub user_id: UserId,
    /// User name (unique, for login and as post/comment author)
    pub user_name: UserName,
    /// Salted Argon2id hash of the password
    pub password_hash: UserPassword,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user
    pub fn new(user_name: UserName, password_hash: UserPassword) -> Self {
        Self {
            user_id: UserId::new(),
            user_name,
            password_hash,
            created_at: Utc::now(),
        }
    }
}
