//! Domain Entities

use chrono::{DateTime, Utc};
use kernel::id::{CommentId, PostId};

use crate::domain::value_objects::{CommentBody, PostLink, PostTitle};

/// Upvote count of a freshly created post or comment
pub const INITIAL_UPVOTES: i64 = 1;

/// A submitted link
///
/// Only `upvotes` and `comment_ids` change after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: PostId,
    pub title: PostTitle,
    pub link: Option<PostLink>,
    /// User name of the submitter
    pub author: String,
    pub upvotes: i64,
    /// Comments in append order
    pub comment_ids: Vec<CommentId>,
    pub created_at: DateTime<Utc>,
}

impl Post {
    pub fn new(title: PostTitle, link: Option<PostLink>, author: impl Into<String>) -> Self {
        Self {
            id: PostId::new(),
            title,
            link,
            author: author.into(),
            upvotes: INITIAL_UPVOTES,
            comment_ids: Vec::new(),
            created_at: Utc::now(),
        }
    }
}

/// A comment on a post
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: CommentId,
    /// Owning post
    pub post_id: PostId,
    pub body: CommentBody,
    pub author: String,
    pub upvotes: i64,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    pub fn new(post_id: PostId, body: CommentBody, author: impl Into<String>) -> Self {
        Self {
            id: CommentId::new(),
            post_id,
            body,
            author: author.into(),
            upvotes: INITIAL_UPVOTES,
            created_at: Utc::now(),
        }
    }
}

/// A post with its comments resolved, in append order
#[derive(Debug, Clone)]
pub struct PostWithComments {
    pub post: Post,
    pub comments: Vec<Comment>,
}
