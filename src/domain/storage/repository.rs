//! Storage trait definition

use std::fmt::Debug;

use async_trait::async_trait;

use crate::domain::DomainError;

use super::entity::StorageEntity;

/// Generic key-value storage for any entity type
#[async_trait]
pub trait Storage<E>: Send + Sync + Debug
where
    E: StorageEntity + 'static,
{
    /// Fetches the entity stored under `key`
    async fn get(&self, key: &E::Key) -> Result<Option<E>, DomainError>;

    /// Fetches every stored entity
    async fn list(&self) -> Result<Vec<E>, DomainError>;

    /// Stores a new entity; fails with `Conflict` if the key is taken
    async fn create(&self, entity: E) -> Result<E, DomainError>;

    /// Replaces an existing entity; fails with `NotFound` if the key is absent
    async fn update(&self, entity: E) -> Result<E, DomainError>;

    /// Removes the entity stored under `key`, returning it if it existed
    async fn delete(&self, key: &E::Key) -> Result<Option<E>, DomainError>;

    async fn exists(&self, key: &E::Key) -> Result<bool, DomainError> {
        Ok(self.get(key).await?.is_some())
    }

    async fn count(&self) -> Result<usize, DomainError> {
        Ok(self.list().await?.len())
    }
}
