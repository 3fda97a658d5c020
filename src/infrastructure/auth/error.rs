//! Token validation errors

use thiserror::Error;

/// Why a token was rejected
///
/// Clients only ever see a generic authentication failure; the variant is
/// for diagnostics.
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("Malformed token: {0}")]
    Malformed(String),

    #[error("Token signature does not verify")]
    Signature,

    #[error("Token {0} claim does not match configuration")]
    ClaimMismatch(String),

    #[error("Token is outside its validity window")]
    Expired,

    #[error("Token was issued before the last password reset")]
    Revoked,

    #[error("Failed to extract {0} claim from token")]
    ClaimExtraction(&'static str),

    #[error("Failed to refresh token: {0}")]
    Refresh(#[source] Box<TokenError>),

    #[error("Failed to sign token: {0}")]
    Encoding(String),
}

impl TokenError {
    /// Short machine-readable name, used as a log field
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Malformed(_) => "malformed",
            Self::Signature => "signature",
            Self::ClaimMismatch(_) => "claim_mismatch",
            Self::Expired => "expired",
            Self::Revoked => "revoked",
            Self::ClaimExtraction(_) => "claim_extraction",
            Self::Refresh(_) => "refresh",
            Self::Encoding(_) => "encoding",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refresh_error_keeps_cause() {
        let error = TokenError::Refresh(Box::new(TokenError::Expired));

        assert_eq!(error.kind(), "refresh");
        assert_eq!(
            error.to_string(),
            "Failed to refresh token: Token is outside its validity window"
        );
        let source = std::error::Error::source(&error).unwrap();
        assert_eq!(source.to_string(), TokenError::Expired.to_string());
    }

    #[test]
    fn test_claim_mismatch_message() {
        let error = TokenError::ClaimMismatch("issuer".to_string());
        assert_eq!(error.to_string(), "Token issuer claim does not match configuration");
    }
}
