//! Add Comment Use Case

use std::sync::Arc;

use auth::AuthenticatedUser;

use crate::application::parse_post_id;
use crate::domain::entities::Comment;
use crate::domain::repository::CommentRepository;
use crate::domain::value_objects::CommentBody;
use crate::error::{ForumError, ForumResult};

/// Appends a comment to an existing post
pub struct AddCommentUseCase<R>
where
    R: CommentRepository,
{
    repo: Arc<R>,
}

impl<R> AddCommentUseCase<R>
where
    R: CommentRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(
        &self,
        user: &AuthenticatedUser,
        post_id: &str,
        body: Option<&str>,
    ) -> ForumResult<Comment> {
        let post_id = parse_post_id(post_id)?;
        let body = CommentBody::new(body)?;

        let comment = Comment::new(post_id, body, user.user_name.as_str());
        if !self.repo.add_comment(&comment).await? {
            return Err(ForumError::PostNotFound);
        }

        tracing::info!(
            post_id = %comment.post_id,
            comment_id = %comment.id,
            author = %comment.author,
            "Comment added"
        );

        Ok(comment)
    }
}
