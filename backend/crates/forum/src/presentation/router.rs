//! Forum Router

use axum::{
    Router, middleware,
    routing::{get, post, put},
};
use std::sync::Arc;

use auth::{TokenService, require_auth};

use crate::domain::repository::{CommentRepository, PostRepository};
use crate::infra::postgres::PgForumRepository;
use crate::presentation::handlers::{self, ForumAppState};

/// Create the Forum router with PostgreSQL repository
pub fn forum_router(repo: PgForumRepository, tokens: Arc<TokenService>) -> Router {
    forum_router_generic(repo, tokens)
}

/// Create a generic Forum router for any repository implementation
///
/// Reads are public; writes require a bearer token verified by `tokens`.
pub fn forum_router_generic<R>(repo: R, tokens: Arc<TokenService>) -> Router
where
    R: PostRepository + CommentRepository + Clone + Send + Sync + 'static,
{
    let state = ForumAppState {
        repo: Arc::new(repo),
    };

    let public = Router::new()
        .route("/posts", get(handlers::list_posts::<R>))
        .route("/posts/{id}", get(handlers::get_post::<R>));

    let protected = Router::new()
        .route("/posts", post(handlers::create_post::<R>))
        .route("/posts/{id}/upvote", put(handlers::upvote_post::<R>))
        .route("/posts/{id}/comments", post(handlers::add_comment::<R>))
        .route(
            "/posts/{id}/comments/{comment_id}/upvote",
            put(handlers::upvote_comment::<R>),
        )
        .route_layer(middleware::from_fn_with_state(tokens, require_auth));

    public.merge(protected).with_state(state)
}
