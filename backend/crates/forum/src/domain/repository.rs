//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.
//! Upvote and comment-append are single atomic operations in every
//! implementation; callers never read-modify-write.

use kernel::id::{CommentId, PostId};

use crate::domain::entities::{Comment, Post};
use crate::error::ForumResult;

/// Post repository
#[trait_variant::make(PostRepository: Send)]
pub trait LocalPostRepository {
    /// All posts in creation order, with comment ids
    async fn list_posts(&self) -> ForumResult<Vec<Post>>;

    /// Find post by ID
    async fn find_post(&self, id: &PostId) -> ForumResult<Option<Post>>;

    /// Persist a new post
    async fn create_post(&self, post: &Post) -> ForumResult<()>;

    /// Increment the post's upvotes by one, returning the updated post
    ///
    /// Returns `None` if the post does not exist.
    async fn upvote_post(&self, id: &PostId) -> ForumResult<Option<Post>>;
}

/// Comment repository
#[trait_variant::make(CommentRepository: Send)]
pub trait LocalCommentRepository {
    /// Comments of a post in append order
    async fn list_comments(&self, post_id: &PostId) -> ForumResult<Vec<Comment>>;

    /// Append a comment to its post
    ///
    /// Returns `false` (and stores nothing) if the post does not exist.
    async fn add_comment(&self, comment: &Comment) -> ForumResult<bool>;

    /// Increment a comment's upvotes by one
    ///
    /// Returns `None` unless the comment exists and belongs to `post_id`.
    async fn upvote_comment(
        &self,
        post_id: &PostId,
        comment_id: &CommentId,
    ) -> ForumResult<Option<Comment>>;
}
