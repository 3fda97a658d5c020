//! Authentication infrastructure module
//!
//! Session tokens are HS512-signed JWTs. Validation is split in two: the
//! [`TokenService`] checks everything that is self-contained in the token,
//! while revocation against a user's *current* password reset time needs a
//! value the caller looks up and passes in.

mod clock;
mod error;
mod jwt;

#[cfg(test)]
pub use clock::FixedClock;
pub use clock::{Clock, SystemClock};
pub use error::TokenError;
pub use jwt::{JwtClaims, JwtConfig, TokenService};
