//! User directory trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::User;
use crate::domain::DomainError;

/// Looks up users by username
#[async_trait]
pub trait UserRepository: Send + Sync + Debug {
    /// Get a user by their username
    async fn get_by_username(&self, username: &str) -> Result<Option<User>, DomainError>;

    /// Create a new user; fails with `Conflict` if the username is taken
    async fn create(&self, user: User) -> Result<User, DomainError>;

    /// Replace an existing user
    async fn update(&self, user: User) -> Result<User, DomainError>;

    /// Number of known users
    async fn count(&self) -> Result<usize, DomainError>;
}
