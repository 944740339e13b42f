//! API Server
//!
//! Assembles the auth and forum routers into one application. Split from
//! `main.rs` so integration tests can drive the full router in-process.

pub mod config;

use std::sync::Arc;

use auth::domain::repository::UserRepository;
use auth::{AuthConfig, auth_router_generic};
use axum::http::{HeaderValue, Method, header};
use axum::routing::get;
use axum::{Json, Router};
use forum::domain::repository::{CommentRepository, PostRepository};
use forum::forum_router_generic;
use serde_json::{Value, json};
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;

// Re-export unified error types for use in handlers
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

/// GET /health
async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Build the application router over the given stores
///
/// One `TokenService` is created from `auth_config` and shared by the login
/// endpoints and the forum's write guard.
pub fn build_router<U, F>(users: U, forum: F, auth_config: AuthConfig) -> Router
where
    U: UserRepository + Clone + Send + Sync + 'static,
    F: PostRepository + CommentRepository + Clone + Send + Sync + 'static,
{
    let auth_config = Arc::new(auth_config);
    let tokens = Arc::new(auth_config.token_service());

    Router::new()
        .route("/health", get(health))
        .merge(auth_router_generic(users, auth_config, tokens.clone()))
        .merge(forum_router_generic(forum, tokens))
        .layer(TraceLayer::new_for_http())
}

/// CORS for the configured front-end origins
///
/// Tokens travel in the `Authorization` header, so no credentials mode.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed_origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]))
}
