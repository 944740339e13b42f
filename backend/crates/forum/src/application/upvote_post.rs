//! Upvote Post Use Case

use std::sync::Arc;

use crate::application::parse_post_id;
use crate::domain::entities::Post;
use crate::domain::repository::PostRepository;
use crate::error::{ForumError, ForumResult};

/// Adds one upvote per call; repeat votes are counted
pub struct UpvotePostUseCase<R>
where
    R: PostRepository,
{
    repo: Arc<R>,
}

impl<R> UpvotePostUseCase<R>
where
    R: PostRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, post_id: &str) -> ForumResult<Post> {
        let post_id = parse_post_id(post_id)?;

        let post = self
            .repo
            .upvote_post(&post_id)
            .await?
            .ok_or(ForumError::PostNotFound)?;

        tracing::debug!(post_id = %post.id, upvotes = post.upvotes, "Post upvoted");

        Ok(post)
    }
}
