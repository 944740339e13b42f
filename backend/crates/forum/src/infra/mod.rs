//! Infrastructure Layer
//!
//! Database implementations of the repository traits.

pub mod memory;
pub mod postgres;

pub use memory::InMemoryForumRepository;
pub use postgres::PgForumRepository;
