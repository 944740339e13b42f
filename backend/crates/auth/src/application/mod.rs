//! Application Layer
//!
//! Use cases and application services.

pub mod authenticate;
pub mod config;
pub mod login;
pub mod register;

// Re-exports
pub use authenticate::{AuthenticateUseCase, AuthenticatedUser};
pub use config::AuthConfig;
pub use login::{LoginInput, LoginUseCase};
pub use register::{RegisterInput, RegisterUseCase, TokenOutput};
