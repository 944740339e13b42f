//! Forum Client Library
//!
//! Typed access to the forum HTTP API for front ends:
//! - [`api`] - the raw endpoints (`ForumApi`) and their reqwest implementation
//! - [`session`] - holds the bearer token and reads its claims locally
//! - [`auth`] - register / log in / log out on top of a session
//! - [`cache`] - posts repository with explicit refresh and invalidation

pub mod api;
pub mod auth;
pub mod cache;
pub mod error;
pub mod model;
pub mod session;

use std::sync::Arc;

pub use api::{ForumApi, HttpForumApi};
pub use auth::AuthClient;
pub use cache::PostCache;
pub use error::{ClientError, ClientResult};
pub use session::Session;

/// Auth and posts sharing one session and one API handle
pub struct ForumClient<A: ForumApi> {
    pub auth: AuthClient<A>,
    pub posts: PostCache<A>,
}

impl<A: ForumApi> ForumClient<A> {
    pub fn with_api(api: A) -> Self {
        let api = Arc::new(api);
        let session = Arc::new(Session::new());
        Self {
            auth: AuthClient::new(api.clone(), session.clone()),
            posts: PostCache::new(api, session),
        }
    }
}

impl ForumClient<HttpForumApi> {
    /// Client for the server at `base_url` (e.g. `http://localhost:3000`)
    pub fn new(base_url: impl Into<String>) -> ClientResult<Self> {
        Ok(Self::with_api(HttpForumApi::new(base_url)?))
    }
}
