//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::user::User;
use crate::domain::value_object::user_name::UserName;
use crate::error::AuthResult;

/// Credential store
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Persist a new user
    ///
    /// Fails with `AuthError::UserNameTaken` if the name is already
    /// registered. The check and the insert are a single atomic step, so two
    /// concurrent registrations of the same name cannot both succeed.
    async fn create(&self, user: &User) -> AuthResult<()>;

    /// Find user by user name
    async fn find_by_user_name(&self, user_name: &UserName) -> AuthResult<Option<User>>;

    /// Check if user name exists
    async fn exists_by_user_name(&self, user_name: &UserName) -> AuthResult<bool>;
}
