//! Forum Backend Module
//!
//! Posts, comments and upvotes.
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository traits
//! - `application/` - Use cases
//! - `infra/` - PostgreSQL and in-memory content stores
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! Reads are public. Every write sits behind `auth::require_auth` and takes
//! its author from the verified token. Upvotes are not de-duplicated: each
//! call adds one, from any authenticated user, including the author.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use error::{ForumError, ForumResult};
pub use infra::{InMemoryForumRepository, PgForumRepository};
pub use presentation::router::{forum_router, forum_router_generic};

#[cfg(test)]
mod tests;
