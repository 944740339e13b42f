//! Presentation Layer
//!
//! HTTP handlers, DTOs and router.

pub mod dto;
pub mod handlers;
pub mod router;

pub use handlers::ForumAppState;
pub use router::{forum_router, forum_router_generic};
