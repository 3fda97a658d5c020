//! User service for login and password management

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::user::{validate_password, Role, User, UserRepository, Username};
use crate::domain::DomainError;
use crate::infrastructure::auth::{Clock, SystemClock};

use super::password::PasswordHasher;

/// Request for creating a new user
#[derive(Debug, Clone)]
pub struct CreateUserRequest {
    pub username: String,
    pub password: String,
    pub roles: Vec<Role>,
}

/// Request for changing a user's own password
#[derive(Debug, Clone)]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

#[derive(Debug, Clone)]
pub struct UserService {
    repository: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
    clock: Arc<dyn Clock>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepository>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self {
            repository,
            hasher,
            clock: Arc::new(SystemClock),
        }
    }

    /// Time source for password reset stamps; share it with the token service
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub async fn create(&self, request: CreateUserRequest) -> Result<User, DomainError> {
        let username =
            Username::new(&request.username).map_err(|e| DomainError::validation(e.to_string()))?;
        validate_password(&request.password).map_err(|e| DomainError::validation(e.to_string()))?;

        let password_hash = self.hasher.hash(&request.password)?;
        let user = self
            .repository
            .create(User::new(username, password_hash, request.roles))
            .await?;

        info!(username = %user.username(), roles = ?user.roles(), "Created user");
        Ok(user)
    }

    /// Check credentials; `None` for an unknown user, a disabled user or a wrong password
    pub async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<User>, DomainError> {
        let Some(user) = self.repository.get_by_username(username).await? else {
            debug!(username, "Login attempt for unknown user");
            return Ok(None);
        };

        if !user.is_enabled() {
            debug!(username, "Login attempt for disabled user");
            return Ok(None);
        }

        if !self.hasher.verify(password, user.password_hash()) {
            debug!(username, "Login attempt with wrong password");
            return Ok(None);
        }

        Ok(Some(user))
    }

    pub async fn get_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        self.repository.get_by_username(username).await
    }

    pub async fn count(&self) -> Result<usize, DomainError> {
        self.repository.count().await
    }

    /// Replace the password after checking the current one
    ///
    /// Moves the user's last password reset to the clock's current time, so
    /// every token issued earlier stops being accepted.
    pub async fn change_password(
        &self,
        username: &str,
        request: ChangePasswordRequest,
    ) -> Result<User, DomainError> {
        let mut user = self
            .repository
            .get_by_username(username)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("User '{}' not found", username)))?;

        if !self.hasher.verify(&request.current_password, user.password_hash()) {
            return Err(DomainError::validation("Current password is incorrect"));
        }

        validate_password(&request.new_password)
            .map_err(|e| DomainError::validation(e.to_string()))?;

        user.set_password_hash(self.hasher.hash(&request.new_password)?, self.clock.now());
        let user = self.repository.update(user).await?;

        info!(username, "Password changed; earlier tokens revoked");
        Ok(user)
    }
}
