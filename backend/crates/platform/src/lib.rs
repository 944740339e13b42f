//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (base64, random bytes)
//! - Password hashing (Argon2id with per-user salt and optional pepper)
//! - Bearer token extraction from `Authorization` headers
//! - Environment-based configuration helpers

pub mod bearer;
pub mod config;
pub mod crypto;
pub mod password;
