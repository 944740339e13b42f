//! Create Post Use Case

use std::sync::Arc;

use auth::AuthenticatedUser;

use crate::domain::entities::Post;
use crate::domain::repository::PostRepository;
use crate::domain::value_objects::{PostLink, PostTitle};
use crate::error::ForumResult;

/// Create post input
#[derive(Debug, Default)]
pub struct CreatePostInput {
    pub title: Option<String>,
    pub link: Option<String>,
}

/// Create post use case
pub struct CreatePostUseCase<R>
where
    R: PostRepository,
{
    repo: Arc<R>,
}

impl<R> CreatePostUseCase<R>
where
    R: PostRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Validate input and store a new post authored by `user`
    ///
    /// Nothing is written when validation fails.
    pub async fn execute(&self, user: &AuthenticatedUser, input: CreatePostInput) -> ForumResult<Post> {
        let title = PostTitle::new(input.title.as_deref())?;
        let link = PostLink::new(input.link.as_deref())?;

        let post = Post::new(title, link, user.user_name.as_str());
        self.repo.create_post(&post).await?;

        tracing::info!(
            post_id = %post.id,
            author = %post.author,
            "Post created"
        );

        Ok(post)
    }
}
