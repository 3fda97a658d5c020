//! User directory backed by generic storage

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::storage::Storage;
use crate::domain::user::{User, UserRepository, Username};
use crate::domain::DomainError;

/// [`UserRepository`] over any [`Storage<User>`] backend
#[derive(Debug, Clone)]
pub struct StorageUserRepository {
    storage: Arc<dyn Storage<User>>,
}

impl StorageUserRepository {
    pub fn new(storage: Arc<dyn Storage<User>>) -> Self {
        Self { storage }
    }
}

#[async_trait]
impl UserRepository for StorageUserRepository {
    async fn get_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        // A name that fails validation can't have been stored
        let Ok(username) = Username::new(username) else {
            return Ok(None);
        };

        self.storage.get(&username).await
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        if self.storage.exists(user.username()).await? {
            return Err(DomainError::conflict(format!(
                "Username '{}' already exists",
                user.username()
            )));
        }

        self.storage.create(user).await
    }

    async fn update(&self, user: User) -> Result<User, DomainError> {
        if !self.storage.exists(user.username()).await? {
            return Err(DomainError::not_found(format!(
                "User '{}' not found",
                user.username()
            )));
        }

        self.storage.update(user).await
    }

    async fn count(&self) -> Result<usize, DomainError> {
        self.storage.count().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::storage::mock::MockStorage;
    use crate::domain::user::Role;
    use crate::infrastructure::storage::InMemoryStorage;

    fn repository() -> StorageUserRepository {
        StorageUserRepository::new(Arc::new(InMemoryStorage::<User>::new()))
    }

    fn user(name: &str) -> User {
        User::new(Username::new(name).unwrap(), "hash", vec![Role::user()])
    }

    #[tokio::test]
    async fn test_create_and_get_by_username() {
        let repo = repository();
        repo.create(user("alice")).await.unwrap();

        let found = repo.get_by_username("alice").await.unwrap().unwrap();
        assert_eq!(found.username().as_str(), "alice");
        assert!(repo.get_by_username("bob").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_invalid_username_is_not_found() {
        let repo = repository();
        assert!(repo.get_by_username("a!").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_username_conflicts() {
        let repo = repository();
        repo.create(user("alice")).await.unwrap();

        let result = repo.create(user("alice")).await;
        assert!(matches!(result, Err(DomainError::Conflict { .. })));
    }

    #[tokio::test]
    async fn test_update_unknown_user() {
        let repo = repository();

        let result = repo.update(user("ghost")).await;
        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_update_replaces_user() {
        let repo = repository();
        repo.create(user("alice")).await.unwrap();

        let mut changed = user("alice");
        changed.set_enabled(false);
        repo.update(changed).await.unwrap();

        let found = repo.get_by_username("alice").await.unwrap().unwrap();
        assert!(!found.is_enabled());
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_storage_error_propagates() {
        let storage = MockStorage::<User>::new().with_error("disk on fire");
        let repo = StorageUserRepository::new(Arc::new(storage));

        let result = repo.get_by_username("alice").await;
        assert!(matches!(result, Err(DomainError::Storage { .. })));
    }
}
