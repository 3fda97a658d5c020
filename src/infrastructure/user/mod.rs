//! User infrastructure module
//!
//! Storage-backed user directory, Argon2 password hashing and the user
//! service used by login and password change.

mod password;
mod repository;
mod service;

pub use password::{Argon2Hasher, PasswordHasher};
pub use repository::StorageUserRepository;
pub use service::{ChangePasswordRequest, CreateUserRequest, UserService};
