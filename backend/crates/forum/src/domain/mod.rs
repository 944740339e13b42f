//! Domain Layer
//!
//! Entities, value objects and repository traits for posts and comments.

pub mod entities;
pub mod repository;
pub mod value_objects;

pub use entities::{Comment, Post, PostWithComments};
pub use repository::{CommentRepository, PostRepository};
pub use value_objects::{CommentBody, PostLink, PostTitle};
