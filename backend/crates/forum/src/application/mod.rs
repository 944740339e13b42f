//! Application Layer
//!
//! Use cases for reading and mutating posts and comments.

pub mod add_comment;
pub mod create_post;
pub mod get_post;
pub mod list_posts;
pub mod upvote_comment;
pub mod upvote_post;

use kernel::id::{CommentId, PostId};

use crate::error::{ForumError, ForumResult};

// Re-exports
pub use add_comment::AddCommentUseCase;
pub use create_post::{CreatePostInput, CreatePostUseCase};
pub use get_post::GetPostUseCase;
pub use list_posts::ListPostsUseCase;
pub use upvote_comment::UpvoteCommentUseCase;
pub use upvote_post::UpvotePostUseCase;

/// An id that does not parse cannot name an existing post
pub(crate) fn parse_post_id(raw: &str) -> ForumResult<PostId> {
    PostId::parse(raw).map_err(|_| ForumError::PostNotFound)
}

pub(crate) fn parse_comment_id(raw: &str) -> ForumResult<CommentId> {
    CommentId::parse(raw).map_err(|_| ForumError::CommentNotFound)
}
