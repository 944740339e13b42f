//! HTTP Handlers

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use std::sync::Arc;

use auth::AuthenticatedUser;

use crate::application::{
    AddCommentUseCase, CreatePostInput, CreatePostUseCase, GetPostUseCase, ListPostsUseCase,
    UpvoteCommentUseCase, UpvotePostUseCase,
};
use crate::domain::repository::{CommentRepository, PostRepository};
use crate::error::{ForumError, ForumResult};
use crate::presentation::dto::{
    CommentResponse, CreateCommentRequest, CreatePostRequest, PostDetailResponse, PostResponse,
};

/// Shared state for forum handlers
#[derive(Clone)]
pub struct ForumAppState<R>
where
    R: PostRepository + CommentRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

/// Unpack a JSON body; anything undecodable is a validation error
fn json_body<T>(body: Result<Json<T>, JsonRejection>) -> ForumResult<T> {
    body.map(|Json(value)| value)
        .map_err(|e| ForumError::Validation(e.body_text()))
}

// ============================================================================
// Posts
// ============================================================================

/// GET /posts
pub async fn list_posts<R>(
    State(state): State<ForumAppState<R>>,
) -> ForumResult<Json<Vec<PostResponse>>>
where
    R: PostRepository + CommentRepository + Clone + Send + Sync + 'static,
{
    let posts = ListPostsUseCase::new(state.repo.clone()).execute().await?;
    Ok(Json(posts.into_iter().map(PostResponse::from).collect()))
}

/// GET /posts/{id}
pub async fn get_post<R>(
    State(state): State<ForumAppState<R>>,
    Path(post_id): Path<String>,
) -> ForumResult<Json<PostDetailResponse>>
where
    R: PostRepository + CommentRepository + Clone + Send + Sync + 'static,
{
    let post = GetPostUseCase::new(state.repo.clone())
        .execute(&post_id)
        .await?;
    Ok(Json(post.into()))
}

/// POST /posts
pub async fn create_post<R>(
    State(state): State<ForumAppState<R>>,
    user: AuthenticatedUser,
    body: Result<Json<CreatePostRequest>, JsonRejection>,
) -> ForumResult<(StatusCode, Json<PostResponse>)>
where
    R: PostRepository + CommentRepository + Clone + Send + Sync + 'static,
{
    let req = json_body(body)?;
    let input = CreatePostInput {
        title: req.title,
        link: req.link,
    };

    let post = CreatePostUseCase::new(state.repo.clone())
        .execute(&user, input)
        .await?;

    Ok((StatusCode::CREATED, Json(post.into())))
}

/// PUT /posts/{id}/upvote
pub async fn upvote_post<R>(
    State(state): State<ForumAppState<R>>,
    _user: AuthenticatedUser,
    Path(post_id): Path<String>,
) -> ForumResult<Json<PostResponse>>
where
    R: PostRepository + CommentRepository + Clone + Send + Sync + 'static,
{
    let post = UpvotePostUseCase::new(state.repo.clone())
        .execute(&post_id)
        .await?;
    Ok(Json(post.into()))
}

// ============================================================================
// Comments
// ============================================================================

/// POST /posts/{id}/comments
pub async fn add_comment<R>(
    State(state): State<ForumAppState<R>>,
    user: AuthenticatedUser,
    Path(post_id): Path<String>,
    body: Result<Json<CreateCommentRequest>, JsonRejection>,
) -> ForumResult<(StatusCode, Json<CommentResponse>)>
where
    R: PostRepository + CommentRepository + Clone + Send + Sync + 'static,
{
    let req = json_body(body)?;

    let comment = AddCommentUseCase::new(state.repo.clone())
        .execute(&user, &post_id, req.body.as_deref())
        .await?;

    Ok((StatusCode::CREATED, Json(comment.into())))
}

/// PUT /posts/{id}/comments/{comment_id}/upvote
pub async fn upvote_comment<R>(
    State(state): State<ForumAppState<R>>,
    _user: AuthenticatedUser,
    Path((post_id, comment_id)): Path<(String, String)>,
) -> ForumResult<Json<CommentResponse>>
where
    R: PostRepository + CommentRepository + Clone + Send + Sync + 'static,
{
    let comment = UpvoteCommentUseCase::new(state.repo.clone())
        .execute(&post_id, &comment_id)
        .await?;
    Ok(Json(comment.into()))
}
