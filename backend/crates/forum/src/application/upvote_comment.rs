//! Upvote Comment Use Case

use std::sync::Arc;

use crate::application::{parse_comment_id, parse_post_id};
use crate::domain::entities::Comment;
use crate::domain::repository::CommentRepository;
use crate::error::{ForumError, ForumResult};

pub struct UpvoteCommentUseCase<R>
where
    R: CommentRepository,
{
    repo: Arc<R>,
}

impl<R> UpvoteCommentUseCase<R>
where
    R: CommentRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// The comment must belong to `post_id`
    pub async fn execute(&self, post_id: &str, comment_id: &str) -> ForumResult<Comment> {
        let post_id = parse_post_id(post_id)?;
        let comment_id = parse_comment_id(comment_id)?;

        let comment = self
            .repo
            .upvote_comment(&post_id, &comment_id)
            .await?
            .ok_or(ForumError::CommentNotFound)?;

        tracing::debug!(
            comment_id = %comment.id,
            upvotes = comment.upvotes,
            "Comment upvoted"
        );

        Ok(comment)
    }
}
