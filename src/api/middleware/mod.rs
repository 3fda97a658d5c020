//! API middleware components

pub mod jwt_auth;
pub mod logging;

pub use jwt_auth::{
    bearer_token, jwt_authentication_filter, AuthenticatedPrincipal, MaybeUser, RequireAdmin,
    RequireUser,
};
pub use logging::logging_middleware;
