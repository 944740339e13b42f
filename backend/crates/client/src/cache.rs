//! Posts Cache
//!
//! Client-side copy of the post list. Reads come from the cache, `refresh`
//! reloads it, and every write replaces the affected entry with the post
//! the server returns.

use std::sync::Arc;

use uuid::Uuid;

use crate::api::ForumApi;
use crate::error::{ClientError, ClientResult};
use crate::model::{Comment, NewComment, NewPost, Post, PostDetail};
use crate::session::Session;

pub struct PostCache<A: ForumApi> {
    api: Arc<A>,
    session: Arc<Session>,
    posts: Vec<Post>,
    loaded: bool,
}

impl<A: ForumApi> PostCache<A> {
    pub fn new(api: Arc<A>, session: Arc<Session>) -> Self {
        Self {
            api,
            session,
            posts: Vec::new(),
            loaded: false,
        }
    }

    /// Cached posts, in server order
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// Whether `refresh` has populated the cache since the last invalidation
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Drop all cached posts; the next `posts_or_refresh` reloads
    pub fn invalidate(&mut self) {
        self.posts.clear();
        self.loaded = false;
    }

    /// Reload the whole list from the server
    pub async fn refresh(&mut self) -> ClientResult<&[Post]> {
        self.posts = self.api.list_posts().await?;
        self.loaded = true;
        Ok(self.posts.as_slice())
    }

    /// Cached posts, loading them first if needed
    pub async fn posts_or_refresh(&mut self) -> ClientResult<&[Post]> {
        if !self.loaded {
            return self.refresh().await;
        }
        Ok(self.posts.as_slice())
    }

    /// Fetch one post with its comments and update its cached entry
    pub async fn get(&mut self, id: Uuid) -> ClientResult<PostDetail> {
        let detail = self.api.get_post(id).await?;
        self.replace(detail.summary());
        Ok(detail)
    }

    pub async fn create(&mut self, post: &NewPost) -> ClientResult<Post> {
        let token = self.token()?;
        let created = self.api.create_post(&token, post).await?;
        self.posts.push(created.clone());
        Ok(created)
    }

    pub async fn upvote(&mut self, id: Uuid) -> ClientResult<Post> {
        let token = self.token()?;
        let updated = self.api.upvote_post(&token, id).await?;
        self.replace(updated.clone());
        Ok(updated)
    }

    pub async fn add_comment(&mut self, post_id: Uuid, comment: &NewComment) -> ClientResult<Comment> {
        let token = self.token()?;
        let created = self.api.add_comment(&token, post_id, comment).await?;
        if let Some(post) = self.posts.iter_mut().find(|p| p.id == post_id) {
            post.comments.push(created.id);
        }
        Ok(created)
    }

    pub async fn upvote_comment(&mut self, post_id: Uuid, comment_id: Uuid) -> ClientResult<Comment> {
        let token = self.token()?;
        self.api.upvote_comment(&token, post_id, comment_id).await
    }

    fn token(&self) -> ClientResult<String> {
        self.session.token().ok_or(ClientError::NotLoggedIn)
    }

    /// Replace a cached post by id (no-op if it is not cached)
    fn replace(&mut self, post: Post) {
        if let Some(slot) = self.posts.iter_mut().find(|p| p.id == post.id) {
            *slot = post;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Credentials;
    use chrono::Utc;
    use std::sync::Mutex;

    /// In-process stand-in for the server
    #[derive(Default)]
    struct FakeApi {
        posts: Mutex<Vec<PostDetail>>,
        calls: Mutex<Vec<String>>,
    }

    impl FakeApi {
        fn record(&self, call: &str) {
            self.calls.lock().unwrap().push(call.to_string());
        }

        fn seed(&self, title: &str) -> Uuid {
            let id = Uuid::new_v4();
            self.posts.lock().unwrap().push(PostDetail {
                id,
                title: title.to_string(),
                link: None,
                author: "alice".to_string(),
                upvotes: 1,
                comments: Vec::new(),
                created_at: Utc::now(),
            });
            id
        }

        fn not_found() -> ClientError {
            ClientError::Api {
                status: 404,
                code: "NOT_FOUND".into(),
                message: "Post not found".into(),
            }
        }
    }

    impl ForumApi for FakeApi {
        async fn register(&self, _credentials: &Credentials) -> ClientResult<String> {
            Ok("token".into())
        }

        async fn login(&self, _credentials: &Credentials) -> ClientResult<String> {
            Ok("token".into())
        }

        async fn list_posts(&self) -> ClientResult<Vec<Post>> {
            self.record("list");
            Ok(self.posts.lock().unwrap().iter().map(PostDetail::summary).collect())
        }

        async fn get_post(&self, id: Uuid) -> ClientResult<PostDetail> {
            self.record("get");
            self.posts
                .lock()
                .unwrap()
                .iter()
                .find(|p| p.id == id)
                .cloned()
                .ok_or_else(FakeApi::not_found)
        }

        async fn create_post(&self, token: &str, post: &NewPost) -> ClientResult<Post> {
            assert_eq!(token, "token");
            let id = self.seed(&post.title);
            self.get_post(id).await.map(|p| p.summary())
        }

        async fn upvote_post(&self, _token: &str, id: Uuid) -> ClientResult<Post> {
            let mut posts = self.posts.lock().unwrap();
            let post = posts.iter_mut().find(|p| p.id == id).ok_or_else(FakeApi::not_found)?;
            post.upvotes += 1;
            Ok(post.summary())
        }

        async fn add_comment(
            &self,
            _token: &str,
            post_id: Uuid,
            comment: &NewComment,
        ) -> ClientResult<Comment> {
            let mut posts = self.posts.lock().unwrap();
            let post = posts.iter_mut().find(|p| p.id == post_id).ok_or_else(FakeApi::not_found)?;
            let created = Comment {
                id: Uuid::new_v4(),
                body: comment.body.clone(),
                author: "alice".into(),
                upvotes: 1,
                post: post_id,
                created_at: Utc::now(),
            };
            post.comments.push(created.clone());
            Ok(created)
        }

        async fn upvote_comment(
            &self,
            _token: &str,
            post_id: Uuid,
            comment_id: Uuid,
        ) -> ClientResult<Comment> {
            let mut posts = self.posts.lock().unwrap();
            let comment = posts
                .iter_mut()
                .find(|p| p.id == post_id)
                .and_then(|p| p.comments.iter_mut().find(|c| c.id == comment_id))
                .ok_or_else(FakeApi::not_found)?;
            comment.upvotes += 1;
            Ok(comment.clone())
        }
    }

    fn cache() -> (PostCache<FakeApi>, Arc<FakeApi>, Arc<Session>) {
        let api = Arc::new(FakeApi::default());
        let session = Arc::new(Session::new());
        (PostCache::new(api.clone(), session.clone()), api, session)
    }

    #[tokio::test]
    async fn test_refresh_and_invalidate() {
        let (mut cache, api, _) = cache();
        api.seed("one");
        api.seed("two");

        assert!(!cache.is_loaded());
        assert_eq!(cache.posts_or_refresh().await.unwrap().len(), 2);
        assert_eq!(cache.posts_or_refresh().await.unwrap().len(), 2);
        assert_eq!(api.calls.lock().unwrap().len(), 1);

        cache.invalidate();
        assert!(cache.posts().is_empty());
        cache.posts_or_refresh().await.unwrap();
        assert_eq!(api.calls.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_writes_require_token() {
        let (mut cache, api, _) = cache();
        let id = api.seed("one");

        let err = cache
            .create(&NewPost {
                title: "t".into(),
                link: None,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::NotLoggedIn));
        assert!(matches!(cache.upvote(id).await, Err(ClientError::NotLoggedIn)));
        assert!(matches!(
            cache.add_comment(id, &NewComment { body: "x".into() }).await,
            Err(ClientError::NotLoggedIn)
        ));
        assert!(matches!(
            cache.upvote_comment(id, Uuid::new_v4()).await,
            Err(ClientError::NotLoggedIn)
        ));
        assert_eq!(api.posts.lock().unwrap()[0].upvotes, 1);
    }

    #[tokio::test]
    async fn test_upvote_replaces_cached_entry() {
        let (mut cache, api, session) = cache();
        let id = api.seed("one");
        session.save_token("token");
        cache.refresh().await.unwrap();

        cache.upvote(id).await.unwrap();
        let post = cache.upvote(id).await.unwrap();

        assert_eq!(post.upvotes, 3);
        assert_eq!(cache.posts()[0].upvotes, 3);
    }

    #[tokio::test]
    async fn test_create_and_comment_update_cache() {
        let (mut cache, _, session) = cache();
        session.save_token("token");
        cache.refresh().await.unwrap();

        let post = cache
            .create(&NewPost {
                title: "new".into(),
                link: Some("https://example.com".into()),
            })
            .await
            .unwrap();
        assert_eq!(cache.posts().len(), 1);

        let comment = cache
            .add_comment(post.id, &NewComment { body: "first".into() })
            .await
            .unwrap();
        assert_eq!(cache.posts()[0].comments, vec![comment.id]);

        let upvoted = cache.upvote_comment(post.id, comment.id).await.unwrap();
        assert_eq!(upvoted.upvotes, 2);

        let detail = cache.get(post.id).await.unwrap();
        assert_eq!(detail.comments[0].upvotes, 2);
    }

    #[tokio::test]
    async fn test_get_unknown_post() {
        let (mut cache, _, _) = cache();
        let err = cache.get(Uuid::new_v4()).await.unwrap_err();
        assert_eq!(err.code(), Some("NOT_FOUND"));
    }
}
