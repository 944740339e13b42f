//! PostgreSQL Repository Implementation

use chrono::{DateTime, Utc};
use kernel::id::{CommentId, PostId};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entities::{Comment, Post};
use crate::domain::repository::{CommentRepository, PostRepository};
use crate::domain::value_objects::{CommentBody, PostLink, PostTitle};
use crate::error::{ForumError, ForumResult};

/// Postgres foreign_key_violation
const FOREIGN_KEY_VIOLATION: &str = "23503";

/// PostgreSQL-backed content store
#[derive(Clone)]
pub struct PgForumRepository {
    pool: PgPool,
}

impl PgForumRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// ============================================================================
// Post Repository Implementation
// ============================================================================

impl PostRepository for PgForumRepository {
    async fn list_posts(&self) -> ForumResult<Vec<Post>> {
        let rows = sqlx::query_as::<_, PostRow>(
            r#"
            SELECT
                p.post_id,
                p.title,
                p.link,
                p.author,
                p.upvotes,
                p.created_at,
                ARRAY(
                    SELECT c.comment_id FROM comments c
                    WHERE c.post_id = p.post_id
                    ORDER BY c.seq
                ) AS comment_ids
            FROM posts p
            ORDER BY p.seq
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(PostRow::into_post).collect()
    }

    async fn find_post(&self, id: &PostId) -> ForumResult<Option<Post>> {
        let row = sqlx::query_as::<_, PostRow>(
            r#"
            SELECT
                p.post_id,
                p.title,
                p.link,
                p.author,
                p.upvotes,
                p.created_at,
                ARRAY(
                    SELECT c.comment_id FROM comments c
                    WHERE c.post_id = p.post_id
                    ORDER BY c.seq
                ) AS comment_ids
            FROM posts p
            WHERE p.post_id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(PostRow::into_post).transpose()
    }

    async fn create_post(&self, post: &Post) -> ForumResult<()> {
        sqlx::query(
            r#"
            INSERT INTO posts (post_id, title, link, author, upvotes, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(post.id.as_uuid())
        .bind(post.title.as_str())
        .bind(post.link.as_ref().map(PostLink::as_str))
        .bind(&post.author)
        .bind(post.upvotes)
        .bind(post.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn upvote_post(&self, id: &PostId) -> ForumResult<Option<Post>> {
        // Single statement: concurrent upvotes serialize on the row lock
        let row = sqlx::query_as::<_, PostRow>(
            r#"
            WITH updated AS (
                UPDATE posts SET upvotes = upvotes + 1
                WHERE post_id = $1
                RETURNING post_id, title, link, author, upvotes, created_at
            )
            SELECT
                u.post_id,
                u.title,
                u.link,
                u.author,
                u.upvotes,
                u.created_at,
                ARRAY(
                    SELECT c.comment_id FROM comments c
                    WHERE c.post_id = u.post_id
                    ORDER BY c.seq
                ) AS comment_ids
            FROM updated u
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(PostRow::into_post).transpose()
    }
}

// ============================================================================
// Comment Repository Implementation
// ============================================================================

impl CommentRepository for PgForumRepository {
    async fn list_comments(&self, post_id: &PostId) -> ForumResult<Vec<Comment>> {
        let rows = sqlx::query_as::<_, CommentRow>(
            r#"
            SELECT comment_id, post_id, body, author, upvotes, created_at
            FROM comments
            WHERE post_id = $1
            ORDER BY seq
            "#,
        )
        .bind(post_id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(CommentRow::into_comment).collect()
    }

    async fn add_comment(&self, comment: &Comment) -> ForumResult<bool> {
        let result = sqlx::query(
            r#"
            INSERT INTO comments (comment_id, post_id, body, author, upvotes, created_at)
            SELECT $1, $2, $3, $4, $5, $6
            WHERE EXISTS (SELECT 1 FROM posts WHERE post_id = $2)
            "#,
        )
        .bind(comment.id.as_uuid())
        .bind(comment.post_id.as_uuid())
        .bind(comment.body.as_str())
        .bind(&comment.author)
        .bind(comment.upvotes)
        .bind(comment.created_at)
        .execute(&self.pool)
        .await;

        match result {
            Ok(done) => Ok(done.rows_affected() == 1),
            Err(sqlx::Error::Database(db)) if db.code().as_deref() == Some(FOREIGN_KEY_VIOLATION) => {
                Ok(false)
            }
            Err(e) => Err(ForumError::Database(e)),
        }
    }

    async fn upvote_comment(
        &self,
        post_id: &PostId,
        comment_id: &CommentId,
    ) -> ForumResult<Option<Comment>> {
        let row = sqlx::query_as::<_, CommentRow>(
            r#"
            UPDATE comments SET upvotes = upvotes + 1
            WHERE comment_id = $1 AND post_id = $2
            RETURNING comment_id, post_id, body, author, upvotes, created_at
            "#,
        )
        .bind(comment_id.as_uuid())
        .bind(post_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(CommentRow::into_comment).transpose()
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct PostRow {
    post_id: Uuid,
    title: String,
    link: Option<String>,
    author: String,
    upvotes: i64,
    created_at: DateTime<Utc>,
    comment_ids: Vec<Uuid>,
}

impl PostRow {
    fn into_post(self) -> ForumResult<Post> {
        let title = PostTitle::new(Some(&self.title))
            .map_err(|e| ForumError::Internal(format!("Stored title is invalid: {e}")))?;
        let link = PostLink::new(self.link.as_deref())
            .map_err(|e| ForumError::Internal(format!("Stored link is invalid: {e}")))?;

        Ok(Post {
            id: PostId::from_uuid(self.post_id),
            title,
            link,
            author: self.author,
            upvotes: self.upvotes,
            comment_ids: self.comment_ids.into_iter().map(CommentId::from_uuid).collect(),
            created_at: self.created_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct CommentRow {
    comment_id: Uuid,
    post_id: Uuid,
    body: String,
    author: String,
    upvotes: i64,
    created_at: DateTime<Utc>,
}

impl CommentRow {
    fn into_comment(self) -> ForumResult<Comment> {
        let body = CommentBody::new(Some(&self.body))
            .map_err(|e| ForumError::Internal(format!("Stored comment is invalid: {e}")))?;

        Ok(Comment {
            id: CommentId::from_uuid(self.comment_id),
            post_id: PostId::from_uuid(self.post_id),
            body,
            author: self.author,
            upvotes: self.upvotes,
            created_at: self.created_at,
        })
    }
}
