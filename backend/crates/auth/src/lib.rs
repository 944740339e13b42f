//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, token service, repository traits
//! - `application/` - Use cases (register, login, authenticate)
//! - `infra/` - PostgreSQL and in-memory credential stores
//! - `presentation/` - HTTP handlers, DTOs, router, bearer middleware
//!
//! ## Security Model
//! - Passwords hashed with Argon2id, per-user salt, optional server pepper
//! - Stateless HS256 bearer tokens carrying the user name, strict expiry
//! - Unknown user and wrong password are indistinguishable to the caller

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::{AuthConfig, AuthenticatedUser};
pub use domain::token::{Claims, TokenError, TokenService};
pub use error::{AuthError, AuthResult};
pub use infra::{InMemoryUserRepository, PgUserRepository};
pub use presentation::middleware::require_auth;
pub use presentation::router::{auth_router, auth_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
