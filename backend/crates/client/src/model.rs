//! Wire Models
//!
//! Mirror the server's camelCase JSON.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Post as listed (comment ids only)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub link: Option<String>,
    pub author: String,
    pub upvotes: i64,
    pub comments: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
}

/// Post with comments populated
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDetail {
    pub id: Uuid,
    pub title: String,
    pub link: Option<String>,
    pub author: String,
    pub upvotes: i64,
    pub comments: Vec<Comment>,
    pub created_at: DateTime<Utc>,
}

impl PostDetail {
    /// Listed form of this post
    pub fn summary(&self) -> Post {
        Post {
            id: self.id,
            title: self.title.clone(),
            link: self.link.clone(),
            author: self.author.clone(),
            upvotes: self.upvotes,
            comments: self.comments.iter().map(|c| c.id).collect(),
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: Uuid,
    pub body: String,
    pub author: String,
    pub upvotes: i64,
    pub post: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Register / login body
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct NewPost {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewComment {
    pub body: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TokenResponse {
    pub token: String,
}

/// Server error body
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub code: String,
    pub message: String,
}
