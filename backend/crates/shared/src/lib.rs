//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate contains the "smallest core" of forum vocabulary:
//! - Common error types, stable error codes and result aliases
//! - Typed identifiers for posts and comments
//!
//! **Design Principle**: Only include things that are "hard to change"
//! and have consistent meaning across the auth, forum and api crates.

pub mod error {
    pub mod app_error;
    pub mod code;
    pub mod conversions;
    pub mod kind;
}
pub mod id;
