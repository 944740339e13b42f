//! Forum HTTP API
//!
//! One method per server route. Writes take the bearer token explicitly;
//! holding it is the session's job.

use std::time::Duration;

use reqwest::{Method, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::error::{ClientError, ClientResult};
use crate::model::{
    Comment, Credentials, ErrorBody, NewComment, NewPost, Post, PostDetail, TokenResponse,
};

/// Default per-request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Forum endpoints
#[trait_variant::make(ForumApi: Send)]
pub trait LocalForumApi {
    /// POST /register, returns the token
    async fn register(&self, credentials: &Credentials) -> ClientResult<String>;

    /// POST /login, returns the token
    async fn login(&self, credentials: &Credentials) -> ClientResult<String>;

    /// GET /posts
    async fn list_posts(&self) -> ClientResult<Vec<Post>>;

    /// GET /posts/{id}
    async fn get_post(&self, id: Uuid) -> ClientResult<PostDetail>;

    /// POST /posts
    async fn create_post(&self, token: &str, post: &NewPost) -> ClientResult<Post>;

    /// PUT /posts/{id}/upvote
    async fn upvote_post(&self, token: &str, id: Uuid) -> ClientResult<Post>;

    /// POST /posts/{id}/comments
    async fn add_comment(
        &self,
        token: &str,
        post_id: Uuid,
        comment: &NewComment,
    ) -> ClientResult<Comment>;

    /// PUT /posts/{id}/comments/{comment_id}/upvote
    async fn upvote_comment(
        &self,
        token: &str,
        post_id: Uuid,
        comment_id: Uuid,
    ) -> ClientResult<Comment>;
}

/// reqwest-backed [`ForumApi`]
#[derive(Clone)]
pub struct HttpForumApi {
    http: reqwest::Client,
    base_url: String,
}

impl HttpForumApi {
    pub fn new(base_url: impl Into<String>) -> ClientResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self::with_client(http, base_url))
    }

    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    fn request(&self, method: Method, path: &str, token: Option<&str>) -> RequestBuilder {
        let builder = self.http.request(method, format!("{}{}", self.base_url, path));
        match token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn send<T: DeserializeOwned>(builder: RequestBuilder) -> ClientResult<T> {
        let response = builder.send().await?;
        Self::decode(response).await
    }

    async fn send_json<B, T>(builder: RequestBuilder, body: &B) -> ClientResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        Self::send(builder.json(body)).await
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            let (code, message) = match serde_json::from_slice::<ErrorBody>(&bytes) {
                Ok(body) => (body.code, body.message),
                Err(_) => (
                    "UNKNOWN".to_string(),
                    String::from_utf8_lossy(&bytes).into_owned(),
                ),
            };
            tracing::debug!(status = status.as_u16(), code = %code, "API error response");
            return Err(ClientError::Api {
                status: status.as_u16(),
                code,
                message,
            });
        }

        serde_json::from_slice(&bytes).map_err(|e| ClientError::Decode(e.to_string()))
    }
}

impl ForumApi for HttpForumApi {
    async fn register(&self, credentials: &Credentials) -> ClientResult<String> {
        let response: TokenResponse =
            Self::send_json(self.request(Method::POST, "/register", None), credentials).await?;
        Ok(response.token)
    }

    async fn login(&self, credentials: &Credentials) -> ClientResult<String> {
        let response: TokenResponse =
            Self::send_json(self.request(Method::POST, "/login", None), credentials).await?;
        Ok(response.token)
    }

    async fn list_posts(&self) -> ClientResult<Vec<Post>> {
        Self::send(self.request(Method::GET, "/posts", None)).await
    }

    async fn get_post(&self, id: Uuid) -> ClientResult<PostDetail> {
        Self::send(self.request(Method::GET, &format!("/posts/{id}"), None)).await
    }

    async fn create_post(&self, token: &str, post: &NewPost) -> ClientResult<Post> {
        Self::send_json(self.request(Method::POST, "/posts", Some(token)), post).await
    }

    async fn upvote_post(&self, token: &str, id: Uuid) -> ClientResult<Post> {
        Self::send(self.request(Method::PUT, &format!("/posts/{id}/upvote"), Some(token))).await
    }

    async fn add_comment(
        &self,
        token: &str,
        post_id: Uuid,
        comment: &NewComment,
    ) -> ClientResult<Comment> {
        Self::send_json(
            self.request(Method::POST, &format!("/posts/{post_id}/comments"), Some(token)),
            comment,
        )
        .await
    }

    async fn upvote_comment(
        &self,
        token: &str,
        post_id: Uuid,
        comment_id: Uuid,
    ) -> ClientResult<Comment> {
        Self::send(self.request(
            Method::PUT,
            &format!("/posts/{post_id}/comments/{comment_id}/upvote"),
            Some(token),
        ))
        .await
    }
}
