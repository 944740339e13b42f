//! User Name Value Object
//!
//! The public handle a user registers with and logs in by. It is also
//! written verbatim as `author` on posts and comments.
//!
//! ## Invariants
//! - NFKC-normalized and trimmed
//! - 1..=32 characters after normalization
//! - No whitespace or control characters inside
//! - Compared case-sensitively (`Alice` and `alice` are different users)

use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use unicode_normalization::UnicodeNormalization;

/// Maximum length for user name (in characters)
pub const USER_NAME_MAX_LENGTH: usize = 32;

/// Validated user name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserName(String);

impl UserName {
    /// Normalize and validate raw input
    pub fn new(raw: impl AsRef<str>) -> AppResult<Self> {
        let normalized: String = raw.as_ref().nfkc().collect();
        let trimmed = normalized.trim();

        if trimmed.is_empty() {
            return Err(AppError::validation("Username cannot be empty")
                .with_action("Please enter a username"));
        }

        let char_count = trimmed.chars().count();
        if char_count > USER_NAME_MAX_LENGTH {
            return Err(AppError::validation(format!(
                "Username must be at most {} characters (got {})",
                USER_NAME_MAX_LENGTH, char_count
            )));
        }

        if trimmed
            .chars()
            .any(|c| c.is_whitespace() || c.is_control())
        {
            return Err(AppError::validation(
                "Username cannot contain spaces or control characters",
            ));
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for UserName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for UserName {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<UserName> for String {
    fn from(value: UserName) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names() {
        assert_eq!(UserName::new("alice").unwrap().as_str(), "alice");
        assert_eq!(UserName::new("  bob_42 ").unwrap().as_str(), "bob_42");
        assert_eq!(UserName::new("ｃａｒｏｌ").unwrap().as_str(), "carol");
        assert_eq!(UserName::new("名前").unwrap().as_str(), "名前");
    }

    #[test]
    fn test_case_is_preserved() {
        assert_ne!(UserName::new("Alice").unwrap(), UserName::new("alice").unwrap());
    }

    #[test]
    fn test_rejects_blank() {
        assert!(UserName::new("").is_err());
        assert!(UserName::new("   ").is_err());
    }

    #[test]
    fn test_rejects_inner_whitespace_and_control() {
        assert!(UserName::new("al ice").is_err());
        assert!(UserName::new("al\u{0000}ice").is_err());
    }

    #[test]
    fn test_rejects_too_long() {
        assert!(UserName::new("a".repeat(USER_NAME_MAX_LENGTH)).is_ok());
        assert!(UserName::new("a".repeat(USER_NAME_MAX_LENGTH + 1)).is_err());
    }

    #[test]
    fn test_serde_validates() {
        let name: UserName = serde_json::from_str("\"alice\"").unwrap();
        assert_eq!(name.as_str(), "alice");
        assert!(serde_json::from_str::<UserName>("\"\"").is_err());
    }
}
