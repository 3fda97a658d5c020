//! User entity and related types

use chrono::{DateTime, Duration, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

use super::validation::{validate_username, UserValidationError};
use crate::domain::storage::{StorageEntity, StorageKey};

/// Login name, unique per user
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Username(String);

impl Username {
    pub fn new(username: impl Into<String>) -> Result<Self, UserValidationError> {
        let username = username.into();
        validate_username(&username)?;
        Ok(Self(username))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Username {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Username> for String {
    fn from(username: Username) -> Self {
        username.0
    }
}

impl std::fmt::Display for Username {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl StorageKey for Username {
    fn as_str(&self) -> &str {
        &self.0
    }
}

/// Granted authority, e.g. `ROLE_USER`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Role(String);

impl Role {
    pub const USER: &'static str = "ROLE_USER";
    pub const ADMIN: &'static str = "ROLE_ADMIN";

    pub fn new(name: impl Into<String>) -> Result<Self, UserValidationError> {
        let name = name.into();

        if name.trim().is_empty() {
            return Err(UserValidationError::EmptyRole);
        }

        Ok(Self(name))
    }

    pub fn user() -> Self {
        Self(Self::USER.to_string())
    }

    pub fn admin() -> Self {
        Self(Self::ADMIN.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Role {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.0
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Control panel user
#[derive(Clone, Serialize, Deserialize)]
pub struct User {
    username: Username,
    /// Argon2 PHC string
    password_hash: String,
    roles: Vec<Role>,
    enabled: bool,
    /// Tokens issued before this instant are revoked
    last_password_reset_at: DateTime<Utc>,
    created_at: DateTime<Utc>,
}

impl std::fmt::Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("username", &self.username)
            .field("password_hash", &"[hidden]")
            .field("roles", &self.roles)
            .field("enabled", &self.enabled)
            .field("last_password_reset_at", &self.last_password_reset_at)
            .finish()
    }
}

impl User {
    /// Create an enabled user whose password was set just now
    ///
    /// No token predates the user, so the reset time starts at the beginning
    /// of the creation second and a login within that second stays valid.
    pub fn new(username: Username, password_hash: impl Into<String>, roles: Vec<Role>) -> Self {
        let now = Utc::now();

        Self {
            username,
            password_hash: password_hash.into(),
            roles,
            enabled: true,
            last_password_reset_at: now.trunc_subsecs(0),
            created_at: now,
        }
    }

    pub fn with_last_password_reset_at(mut self, at: DateTime<Utc>) -> Self {
        self.last_password_reset_at = at;
        self
    }

    pub fn username(&self) -> &Username {
        &self.username
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    pub fn roles(&self) -> &[Role] {
        &self.roles
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r.as_str() == role)
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn last_password_reset_at(&self) -> DateTime<Utc> {
        self.last_password_reset_at
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Replace the password hash, revoking every token issued before `changed_at`
    ///
    /// Token issue times have whole-second resolution, so the reset is rounded
    /// up to the next second. Tokens from earlier in the same second are revoked.
    pub fn set_password_hash(&mut self, password_hash: impl Into<String>, changed_at: DateTime<Utc>) {
        self.password_hash = password_hash.into();
        self.last_password_reset_at = round_up_to_second(changed_at);
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }
}

fn round_up_to_second(at: DateTime<Utc>) -> DateTime<Utc> {
    let truncated = at.trunc_subsecs(0);
    if truncated < at {
        truncated + Duration::seconds(1)
    } else {
        truncated
    }
}

impl StorageEntity for User {
    type Key = Username;

    fn key(&self) -> &Self::Key {
        &self.username
    }
}
