//! Domain Value Objects
//!
//! Validated user input for posts and comments.

use kernel::error::app_error::{AppError, AppResult};
use unicode_normalization::UnicodeNormalization;

/// Maximum post title length (in characters)
pub const TITLE_MAX_LENGTH: usize = 300;

/// Maximum link length (in characters)
pub const LINK_MAX_LENGTH: usize = 2048;

/// Maximum comment body length (in characters)
pub const COMMENT_MAX_LENGTH: usize = 10_000;

/// NFC-normalize and trim; `None` if nothing is left
fn normalize(raw: &str) -> Option<String> {
    let normalized: String = raw.nfc().collect();
    let trimmed = normalized.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn check_length(value: &str, max: usize, field: &str) -> AppResult<()> {
    let len = value.chars().count();
    if len > max {
        return Err(AppError::validation(format!(
            "{field} must be at most {max} characters (got {len})"
        )));
    }
    Ok(())
}

/// Post title (required, non-blank)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostTitle(String);

impl PostTitle {
    pub fn new(raw: Option<&str>) -> AppResult<Self> {
        let value = raw.and_then(normalize).ok_or_else(|| {
            AppError::validation("Title is required").with_action("Please enter a title")
        })?;
        check_length(&value, TITLE_MAX_LENGTH, "Title")?;
        if value.chars().any(char::is_control) {
            return Err(AppError::validation("Title contains invalid characters"));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Link attached to a post
///
/// Stored as given (trimmed); the forum does not fetch or check it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostLink(String);

impl PostLink {
    /// Absent or blank input means "no link"
    pub fn new(raw: Option<&str>) -> AppResult<Option<Self>> {
        let Some(value) = raw.and_then(normalize) else {
            return Ok(None);
        };
        check_length(&value, LINK_MAX_LENGTH, "Link")?;
        if value.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(AppError::validation("Link must not contain spaces"));
        }
        Ok(Some(Self(value)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Comment text (required, non-blank)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentBody(String);

impl CommentBody {
    pub fn new(raw: Option<&str>) -> AppResult<Self> {
        let value = raw.and_then(normalize).ok_or_else(|| {
            AppError::validation("Comment body is required").with_action("Please write a comment")
        })?;
        check_length(&value, COMMENT_MAX_LENGTH, "Comment")?;
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_required() {
        assert!(PostTitle::new(None).is_err());
        assert!(PostTitle::new(Some("")).is_err());
        assert!(PostTitle::new(Some("  \t ")).is_err());
        assert_eq!(PostTitle::new(Some("  Rust 2024 ")).unwrap().as_str(), "Rust 2024");
    }

    #[test]
    fn test_title_length() {
        let max = "a".repeat(TITLE_MAX_LENGTH);
        assert!(PostTitle::new(Some(&max)).is_ok());
        let over = "a".repeat(TITLE_MAX_LENGTH + 1);
        assert!(PostTitle::new(Some(&over)).is_err());
    }

    #[test]
    fn test_title_rejects_control_chars() {
        assert!(PostTitle::new(Some("a\u{0007}b")).is_err());
    }

    #[test]
    fn test_link_optional() {
        assert_eq!(PostLink::new(None).unwrap(), None);
        assert_eq!(PostLink::new(Some("   ")).unwrap(), None);

        let link = PostLink::new(Some(" https://example.com/a ")).unwrap().unwrap();
        assert_eq!(link.as_str(), "https://example.com/a");

        assert!(PostLink::new(Some("https://exa mple.com")).is_err());
    }

    #[test]
    fn test_comment_body() {
        assert!(CommentBody::new(None).is_err());
        assert!(CommentBody::new(Some("\n")).is_err());
        assert_eq!(
            CommentBody::new(Some("multi\nline ")).unwrap().as_str(),
            "multi\nline"
        );
    }
}
