//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::{Comment, Post, PostWithComments};

// ============================================================================
// Requests
// ============================================================================

/// POST /posts body
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
}

/// POST /posts/{id}/comments body
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentRequest {
    #[serde(default)]
    pub body: Option<String>,
}

// ============================================================================
// Responses
// ============================================================================

/// Post with comment ids
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub id: Uuid,
    pub title: String,
    pub link: Option<String>,
    pub author: String,
    pub upvotes: i64,
    pub comments: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.id.into_uuid(),
            title: post.title.as_str().to_string(),
            link: post.link.map(|l| l.as_str().to_string()),
            author: post.author,
            upvotes: post.upvotes,
            comments: post.comment_ids.into_iter().map(|id| id.into_uuid()).collect(),
            created_at: post.created_at,
        }
    }
}

/// Post with comments populated
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDetailResponse {
    pub id: Uuid,
    pub title: String,
    pub link: Option<String>,
    pub author: String,
    pub upvotes: i64,
    pub comments: Vec<CommentResponse>,
    pub created_at: DateTime<Utc>,
}

impl From<PostWithComments> for PostDetailResponse {
    fn from(PostWithComments { post, comments }: PostWithComments) -> Self {
        Self {
            id: post.id.into_uuid(),
            title: post.title.as_str().to_string(),
            link: post.link.map(|l| l.as_str().to_string()),
            author: post.author,
            upvotes: post.upvotes,
            comments: comments.into_iter().map(CommentResponse::from).collect(),
            created_at: post.created_at,
        }
    }
}

/// Comment
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentResponse {
    pub id: Uuid,
    pub body: String,
    pub author: String,
    pub upvotes: i64,
    /// Owning post id
    pub post: Uuid,
    pub created_at: DateTime<Utc>,
}

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id.into_uuid(),
            body: comment.body.as_str().to_string(),
            author: comment.author,
            upvotes: comment.upvotes,
            post: comment.post_id.into_uuid(),
            created_at: comment.created_at,
        }
    }
}
