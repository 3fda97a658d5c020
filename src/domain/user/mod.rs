//! User domain
//!
//! Users of the control panel: their credentials, granted roles and the
//! time of their last password reset, which bounds the validity of every
//! session token issued to them.

mod entity;
mod repository;
mod validation;

pub use entity::{Role, User, Username};
pub use repository::UserRepository;
pub use validation::{validate_password, validate_username, UserValidationError};
