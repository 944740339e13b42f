//! In-Memory Repository Implementation
//!
//! Used by tests and when the server runs without `DATABASE_URL`. Every
//! mutation happens under one write lock, which makes upvotes and
//! comment-append atomic.

use std::collections::HashMap;
use std::sync::Arc;

use kernel::id::{CommentId, PostId};
use tokio::sync::RwLock;

use crate::domain::entities::{Comment, Post};
use crate::domain::repository::{CommentRepository, PostRepository};
use crate::error::{ForumError, ForumResult};

#[derive(Default)]
struct ForumState {
    /// Creation order
    posts: Vec<Post>,
    post_index: HashMap<PostId, usize>,
    comments: HashMap<CommentId, Comment>,
}

impl ForumState {
    fn post_mut(&mut self, id: &PostId) -> Option<&mut Post> {
        let index = *self.post_index.get(id)?;
        self.posts.get_mut(index)
    }
}

/// Content store held in process memory
#[derive(Clone, Default)]
pub struct InMemoryForumRepository {
    state: Arc<RwLock<ForumState>>,
}

impl InMemoryForumRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PostRepository for InMemoryForumRepository {
    async fn list_posts(&self) -> ForumResult<Vec<Post>> {
        Ok(self.state.read().await.posts.clone())
    }

    async fn find_post(&self, id: &PostId) -> ForumResult<Option<Post>> {
        let state = self.state.read().await;
        Ok(state
            .post_index
            .get(id)
            .and_then(|&index| state.posts.get(index))
            .cloned())
    }

    async fn create_post(&self, post: &Post) -> ForumResult<()> {
        let mut state = self.state.write().await;
        if state.post_index.contains_key(&post.id) {
            return Err(ForumError::Internal(format!("Duplicate post id {}", post.id)));
        }
        let index = state.posts.len();
        state.post_index.insert(post.id, index);
        state.posts.push(post.clone());
        Ok(())
    }

    async fn upvote_post(&self, id: &PostId) -> ForumResult<Option<Post>> {
        let mut state = self.state.write().await;
        Ok(state.post_mut(id).map(|post| {
            post.upvotes += 1;
            post.clone()
        }))
    }
}

impl CommentRepository for InMemoryForumRepository {
    async fn list_comments(&self, post_id: &PostId) -> ForumResult<Vec<Comment>> {
        let state = self.state.read().await;
        let Some(post) = state
            .post_index
            .get(post_id)
            .and_then(|&index| state.posts.get(index))
        else {
            return Ok(Vec::new());
        };

        Ok(post
            .comment_ids
            .iter()
            .filter_map(|id| state.comments.get(id).cloned())
            .collect())
    }

    async fn add_comment(&self, comment: &Comment) -> ForumResult<bool> {
        let mut state = self.state.write().await;
        let Some(post) = state.post_mut(&comment.post_id) else {
            return Ok(false);
        };
        post.comment_ids.push(comment.id);
        state.comments.insert(comment.id, comment.clone());
        Ok(true)
    }

    async fn upvote_comment(
        &self,
        post_id: &PostId,
        comment_id: &CommentId,
    ) -> ForumResult<Option<Comment>> {
        let mut state = self.state.write().await;
        Ok(state
            .comments
            .get_mut(comment_id)
            .filter(|comment| comment.post_id == *post_id)
            .map(|comment| {
                comment.upvotes += 1;
                comment.clone()
            }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{CommentBody, PostTitle};

    fn post(title: &str) -> Post {
        Post::new(PostTitle::new(Some(title)).unwrap(), None, "alice")
    }

    fn comment(post_id: PostId, body: &str) -> Comment {
        Comment::new(post_id, CommentBody::new(Some(body)).unwrap(), "bob")
    }

    #[tokio::test]
    async fn test_list_keeps_creation_order() {
        let repo = InMemoryForumRepository::new();
        let first = post("first");
        let second = post("second");
        repo.create_post(&first).await.unwrap();
        repo.create_post(&second).await.unwrap();

        let ids: Vec<_> = repo.list_posts().await.unwrap().into_iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![first.id, second.id]);
    }

    #[tokio::test]
    async fn test_add_comment_links_post() {
        let repo = InMemoryForumRepository::new();
        let p = post("p");
        repo.create_post(&p).await.unwrap();

        let c = comment(p.id, "hi");
        assert!(repo.add_comment(&c).await.unwrap());

        let stored = repo.find_post(&p.id).await.unwrap().unwrap();
        assert_eq!(stored.comment_ids, vec![c.id]);
        assert_eq!(repo.list_comments(&p.id).await.unwrap(), vec![c]);
    }

    #[tokio::test]
    async fn test_add_comment_to_missing_post() {
        let repo = InMemoryForumRepository::new();
        let c = comment(PostId::new(), "orphan");

        assert!(!repo.add_comment(&c).await.unwrap());
        assert!(repo.state.read().await.comments.is_empty());
    }

    #[tokio::test]
    async fn test_upvote_comment_requires_matching_post() {
        let repo = InMemoryForumRepository::new();
        let a = post("a");
        let b = post("b");
        repo.create_post(&a).await.unwrap();
        repo.create_post(&b).await.unwrap();
        let c = comment(a.id, "on a");
        repo.add_comment(&c).await.unwrap();

        assert!(repo.upvote_comment(&b.id, &c.id).await.unwrap().is_none());
        let upvoted = repo.upvote_comment(&a.id, &c.id).await.unwrap().unwrap();
        assert_eq!(upvoted.upvotes, 2);
    }

    #[tokio::test]
    async fn test_upvote_missing_post() {
        let repo = InMemoryForumRepository::new();
        assert!(repo.upvote_post(&PostId::new()).await.unwrap().is_none());
    }
}
