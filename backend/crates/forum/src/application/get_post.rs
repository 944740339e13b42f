//! Get Post Use Case
//!
//! Loads a single post with its comments resolved.

use std::sync::Arc;

use crate::application::parse_post_id;
use crate::domain::entities::PostWithComments;
use crate::domain::repository::{CommentRepository, PostRepository};
use crate::error::{ForumError, ForumResult};

pub struct GetPostUseCase<R>
where
    R: PostRepository + CommentRepository,
{
    repo: Arc<R>,
}

impl<R> GetPostUseCase<R>
where
    R: PostRepository + CommentRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, post_id: &str) -> ForumResult<PostWithComments> {
        let post_id = parse_post_id(post_id)?;

        let post = self
            .repo
            .find_post(&post_id)
            .await?
            .ok_or(ForumError::PostNotFound)?;
        let comments = self.repo.list_comments(&post_id).await?;

        Ok(PostWithComments { post, comments })
    }
}
