//! JWT session token generation, validation and refresh

use std::fmt::Debug;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::clock::{Clock, SystemClock};
use super::error::TokenError;
use crate::domain::user::{Role, User};

const ALGORITHM: Algorithm = Algorithm::HS512;

/// JWT claims structure
///
/// Roles and the password change date are snapshots taken at issuance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JwtClaims {
    /// Defaulted so an absent value reaches the required-claim check
    #[serde(default)]
    pub iss: String,
    #[serde(default)]
    pub aud: String,
    /// Username
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,
    /// Issued at (Unix epoch seconds)
    pub iat: i64,
    /// Expiration (Unix epoch seconds)
    pub exp: i64,
    /// Kept raw so a malformed value surfaces on extraction, not on decode
    #[serde(
        rename = "bxbot:roles",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub roles: Option<serde_json::Value>,
    /// Unix epoch milliseconds
    #[serde(
        rename = "bxbot:lastPasswordChangeDate",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub last_password_change_date: Option<i64>,
}

impl JwtClaims {
    /// Username the token was issued to
    pub fn username(&self) -> Result<&str, TokenError> {
        self.sub
            .as_deref()
            .filter(|sub| !sub.is_empty())
            .ok_or(TokenError::ClaimExtraction("subject"))
    }

    /// Roles granted at issuance, in issue order
    pub fn roles(&self) -> Result<Vec<Role>, TokenError> {
        let roles = self
            .roles
            .as_ref()
            .ok_or(TokenError::ClaimExtraction("roles"))?;

        serde_json::from_value(roles.clone()).map_err(|_| TokenError::ClaimExtraction("roles"))
    }

    pub fn issued_at(&self) -> Result<DateTime<Utc>, TokenError> {
        DateTime::from_timestamp(self.iat, 0).ok_or(TokenError::ClaimExtraction("issued at"))
    }

    pub fn expires_at(&self) -> Result<DateTime<Utc>, TokenError> {
        DateTime::from_timestamp(self.exp, 0).ok_or(TokenError::ClaimExtraction("expiration"))
    }

    /// Password change time recorded at issuance; tokens without one are accepted
    pub fn last_password_change_at(&self) -> Option<DateTime<Utc>> {
        self.last_password_change_date
            .and_then(DateTime::from_timestamp_millis)
    }
}

/// Configuration for the token service
#[derive(Clone)]
pub struct JwtConfig {
    /// HMAC key for HS512
    pub secret: String,
    /// Token lifetime in seconds
    pub expiration_secs: u64,
    /// Tolerance applied to both ends of the validity window, in seconds
    pub allowed_clock_skew_secs: u64,
    pub issuer: String,
    pub audience: String,
}

impl Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"[hidden]")
            .field("expiration_secs", &self.expiration_secs)
            .field("allowed_clock_skew_secs", &self.allowed_clock_skew_secs)
            .field("issuer", &self.issuer)
            .field("audience", &self.audience)
            .finish()
    }
}

impl JwtConfig {
    pub fn new(secret: impl Into<String>, expiration_secs: u64) -> Self {
        Self {
            secret: secret.into(),
            expiration_secs,
            ..Self::default()
        }
    }

    pub fn with_clock_skew(mut self, secs: u64) -> Self {
        self.allowed_clock_skew_secs = secs;
        self
    }

    pub fn with_issuer(mut self, issuer: impl Into<String>) -> Self {
        self.issuer = issuer.into();
        self
    }

    pub fn with_audience(mut self, audience: impl Into<String>) -> Self {
        self.audience = audience.into();
        self
    }
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: "change-me-in-production".to_string(),
            expiration_secs: 600,
            allowed_clock_skew_secs: 60,
            issuer: "bxbot-ui".to_string(),
            audience: "bxbot-ui".to_string(),
        }
    }
}

/// Issues and checks session tokens
///
/// Holds no per-user state. The live revocation check needs the subject's
/// current password reset time, which callers look up and pass to
/// [`TokenService::can_be_refreshed`].
#[derive(Clone)]
pub struct TokenService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    /// Issuer and audience checks only, used to classify signature failures
    claims_validation: Validation,
    expiration: i64,
    skew: i64,
    clock: Arc<dyn Clock>,
}

impl Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenService")
            .field("config", &self.config)
            .field("encoding_key", &"[hidden]")
            .field("decoding_key", &"[hidden]")
            .field("clock", &self.clock)
            .finish()
    }
}

impl TokenService {
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        let mut validation = Validation::new(ALGORITHM);
        validation.set_issuer(&[&config.issuer]);
        validation.set_audience(&[&config.audience]);
        validation.set_required_spec_claims(&["exp", "iss", "aud"]);
        // The time window is checked against the injected clock
        validation.validate_exp = false;
        validation.leeway = 0;

        let mut claims_validation = validation.clone();
        claims_validation.insecure_disable_signature_validation();

        let expiration = i64::try_from(config.expiration_secs).unwrap_or(i64::MAX);
        let skew = i64::try_from(config.allowed_clock_skew_secs).unwrap_or(i64::MAX);

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
            claims_validation,
            expiration,
            skew,
            clock: Arc::new(SystemClock),
        }
    }

    /// Replace the time source
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn expiration_secs(&self) -> u64 {
        self.config.expiration_secs
    }

    /// Issue a token for the user, snapshotting their roles and last password reset
    pub fn generate_token(&self, user: &User) -> Result<String, TokenError> {
        let issued_at = self.clock.now().timestamp();
        let roles: Vec<String> = user.roles().iter().map(|r| r.as_str().to_string()).collect();

        let claims = JwtClaims {
            iss: self.config.issuer.clone(),
            aud: self.config.audience.clone(),
            sub: Some(user.username().to_string()),
            iat: issued_at,
            exp: issued_at.saturating_add(self.expiration),
            roles: Some(serde_json::Value::from(roles)),
            last_password_change_date: Some(user.last_password_reset_at().timestamp_millis()),
        };

        debug!(username = %user.username(), exp = claims.exp, "Issuing token");
        self.sign(&claims)
    }

    /// Verify signature, issuer, audience and validity window, then return the claims
    ///
    /// A token whose issue time precedes its own embedded password change
    /// date is rejected as revoked. Checking against the user's current
    /// reset time is left to the caller.
    pub fn validate_and_extract_claims(&self, token: &str) -> Result<JwtClaims, TokenError> {
        let claims = self.decode_claims(token)?;

        if let Some(changed_at) = claims.last_password_change_at() {
            if is_created_before_password_reset(claims.iat, changed_at) {
                warn!(
                    iat = claims.iat,
                    last_password_change = %changed_at,
                    "Token issued before its own password change date"
                );
                return Err(TokenError::Revoked);
            }
        }

        Ok(claims)
    }

    /// False when the token was issued before the given password reset
    pub fn can_be_refreshed(&self, claims: &JwtClaims, last_password_reset: DateTime<Utc>) -> bool {
        !is_created_before_password_reset(claims.iat, last_password_reset)
    }

    /// Re-issue a still-valid token with a fresh issue and expiration time
    ///
    /// Subject, audience, issuer, roles and password change date carry over.
    pub fn refresh(&self, token: &str) -> Result<String, TokenError> {
        let mut claims = self
            .decode_claims(token)
            .map_err(|e| TokenError::Refresh(Box::new(e)))?;

        let issued_at = self.clock.now().timestamp();
        claims.iat = issued_at;
        claims.exp = issued_at.saturating_add(self.expiration);

        self.sign(&claims)
            .map_err(|e| TokenError::Refresh(Box::new(e)))
    }

    fn sign(&self, claims: &JwtClaims) -> Result<String, TokenError> {
        encode(&Header::new(ALGORITHM), claims, &self.encoding_key)
            .map_err(|e| TokenError::Encoding(e.to_string()))
    }

    fn decode_claims(&self, token: &str) -> Result<JwtClaims, TokenError> {
        let claims = match decode::<JwtClaims>(token, &self.decoding_key, &self.validation) {
            Ok(data) => data.claims,
            Err(e) if matches!(e.kind(), ErrorKind::InvalidSignature) => {
                // A foreign issuer or audience is reported as such whatever the signature
                let error =
                    match decode::<JwtClaims>(token, &self.decoding_key, &self.claims_validation) {
                        Err(inner) => match classify(inner) {
                            mismatch @ TokenError::ClaimMismatch(_) => mismatch,
                            _ => TokenError::Signature,
                        },
                        Ok(_) => TokenError::Signature,
                    };
                return Err(error);
            }
            Err(e) => return Err(classify(e)),
        };

        let now = self.clock.now().timestamp();
        if now < claims.iat.saturating_sub(self.skew) || now > claims.exp.saturating_add(self.skew)
        {
            debug!(
                now,
                iat = claims.iat,
                exp = claims.exp,
                skew = self.skew,
                "Token outside validity window"
            );
            return Err(TokenError::Expired);
        }

        Ok(claims)
    }
}

/// Compared at the reset's full precision; `iat` counts from the start of its second
fn is_created_before_password_reset(issued_at: i64, last_password_reset: DateTime<Utc>) -> bool {
    match DateTime::from_timestamp(issued_at, 0) {
        Some(created) => created < last_password_reset,
        None => true,
    }
}

fn classify(error: jsonwebtoken::errors::Error) -> TokenError {
    match error.kind() {
        ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => TokenError::Signature,
        ErrorKind::InvalidIssuer => TokenError::ClaimMismatch("issuer".to_string()),
        ErrorKind::InvalidAudience => TokenError::ClaimMismatch("audience".to_string()),
        ErrorKind::MissingRequiredClaim(claim) if claim == "iss" || claim == "aud" => {
            TokenError::ClaimMismatch(claim.clone())
        }
        ErrorKind::ExpiredSignature | ErrorKind::ImmatureSignature => TokenError::Expired,
        _ => TokenError::Malformed(error.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::Username;
    use crate::infrastructure::auth::FixedClock;
    use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
    use chrono::{Duration, TimeZone};
    use serde_json::json;

    fn t0() -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000, 0).unwrap()
    }

    fn create_test_user(reset_at: DateTime<Utc>) -> User {
        User::new(
            Username::new("alice").unwrap(),
            "$argon2id$hash",
            vec![Role::user()],
        )
        .with_last_password_reset_at(reset_at)
    }

    fn service_at(config: JwtConfig, now: DateTime<Utc>) -> (TokenService, Arc<FixedClock>) {
        let clock = Arc::new(FixedClock::at(now));
        let service = TokenService::new(config).with_clock(clock.clone());
        (service, clock)
    }

    fn worked_example_config() -> JwtConfig {
        JwtConfig::new("s3cr3t", 3600)
            .with_clock_skew(0)
            .with_issuer("bxbot-ui")
            .with_audience("bxbot-ui")
    }

    fn sign_raw(secret: &str, claims: serde_json::Value) -> String {
        encode(
            &Header::new(Algorithm::HS512),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    fn raw_claims(iat: i64) -> serde_json::Value {
        json!({
            "iss": "bxbot-ui",
            "aud": "bxbot-ui",
            "sub": "alice",
            "iat": iat,
            "exp": iat + 3600,
            "bxbot:roles": ["ROLE_USER"],
        })
    }

    #[test]
    fn test_generate_and_validate_round_trip() {
        let (service, _) = service_at(worked_example_config(), t0());
        let user = User::new(
            Username::new("alice").unwrap(),
            "hash",
            vec![Role::admin(), Role::user()],
        )
        .with_last_password_reset_at(t0() - Duration::milliseconds(1500));

        let token = service.generate_token(&user).unwrap();
        let claims = service.validate_and_extract_claims(&token).unwrap();

        assert_eq!(claims.username().unwrap(), "alice");
        assert_eq!(claims.roles().unwrap(), vec![Role::admin(), Role::user()]);
        assert_eq!(
            claims.last_password_change_at(),
            Some(t0() - Duration::milliseconds(1500))
        );
        assert_eq!(claims.issued_at().unwrap(), t0());
        assert_eq!(claims.expires_at().unwrap(), t0() + Duration::seconds(3600));
        assert_eq!(claims.iss, "bxbot-ui");
        assert_eq!(claims.aud, "bxbot-ui");
    }

    #[test]
    fn test_token_uses_hs512() {
        let (service, _) = service_at(worked_example_config(), t0());
        let token = service.generate_token(&create_test_user(t0())).unwrap();

        let header = jsonwebtoken::decode_header(&token).unwrap();
        assert_eq!(header.alg, Algorithm::HS512);
    }

    #[test]
    fn test_expiry_boundary_with_skew() {
        let config = worked_example_config().with_clock_skew(60);
        let (service, clock) = service_at(config, t0());
        let token = service.generate_token(&create_test_user(t0())).unwrap();
        let exp = t0() + Duration::seconds(3600);

        clock.set(exp + Duration::seconds(59));
        assert!(service.validate_and_extract_claims(&token).is_ok());

        clock.set(exp + Duration::seconds(60));
        assert!(service.validate_and_extract_claims(&token).is_ok());

        clock.set(exp + Duration::seconds(61));
        assert!(matches!(
            service.validate_and_extract_claims(&token),
            Err(TokenError::Expired)
        ));
    }

    #[test]
    fn test_token_from_the_future_is_rejected() {
        let config = worked_example_config().with_clock_skew(30);
        let (service, clock) = service_at(config, t0());
        let token = service.generate_token(&create_test_user(t0())).unwrap();

        clock.set(t0() - Duration::seconds(30));
        assert!(service.validate_and_extract_claims(&token).is_ok());

        clock.set(t0() - Duration::seconds(31));
        assert!(matches!(
            service.validate_and_extract_claims(&token),
            Err(TokenError::Expired)
        ));
    }

    #[test]
    fn test_live_revocation_check() {
        let (service, clock) = service_at(worked_example_config(), t0());
        let token = service.generate_token(&create_test_user(t0())).unwrap();
        clock.advance(Duration::seconds(10));

        let claims = service.validate_and_extract_claims(&token).unwrap();
        assert!(!service.can_be_refreshed(&claims, t0() + Duration::seconds(5)));
        assert!(service.can_be_refreshed(&claims, t0() - Duration::seconds(5)));
        assert!(service.can_be_refreshed(&claims, t0()));
    }

    #[test]
    fn test_reset_later_in_the_same_second_revokes_token() {
        let (service, _) = service_at(worked_example_config(), t0() + Duration::milliseconds(100));
        let token = service
            .generate_token(&create_test_user(t0() - Duration::days(1)))
            .unwrap();

        let claims = service.validate_and_extract_claims(&token).unwrap();
        assert_eq!(claims.iat, t0().timestamp());
        assert!(!service.can_be_refreshed(&claims, t0() + Duration::milliseconds(900)));
        assert!(service.can_be_refreshed(&claims, t0()));
    }

    #[test]
    fn test_embedded_password_change_after_issue_is_revoked() {
        let (service, _) = service_at(worked_example_config(), t0());
        let mut claims = raw_claims(t0().timestamp());
        claims["bxbot:lastPasswordChangeDate"] = json!((t0() + Duration::seconds(5)).timestamp_millis());
        let token = sign_raw("s3cr3t", claims);

        assert!(matches!(
            service.validate_and_extract_claims(&token),
            Err(TokenError::Revoked)
        ));
    }

    #[test]
    fn test_missing_password_change_date_is_tolerated() {
        let (service, _) = service_at(worked_example_config(), t0());
        let token = sign_raw("s3cr3t", raw_claims(t0().timestamp()));

        let claims = service.validate_and_extract_claims(&token).unwrap();
        assert_eq!(claims.last_password_change_at(), None);
        assert_eq!(claims.username().unwrap(), "alice");
    }

    #[test]
    fn test_refresh_issues_later_token() {
        let (service, clock) = service_at(worked_example_config(), t0());
        let token = service.generate_token(&create_test_user(t0())).unwrap();
        let original = service.validate_and_extract_claims(&token).unwrap();

        clock.advance(Duration::seconds(30));
        let refreshed = service.refresh(&token).unwrap();
        let claims = service.validate_and_extract_claims(&refreshed).unwrap();

        assert!(claims.iat > original.iat);
        assert_eq!(claims.iat, original.iat + 30);
        assert_eq!(claims.exp, claims.iat + 3600);
        assert_eq!(claims.sub, original.sub);
        assert_eq!(claims.roles().unwrap(), original.roles().unwrap());
        assert_eq!(claims.aud, original.aud);
        assert_eq!(claims.iss, original.iss);
        assert_eq!(
            claims.last_password_change_date,
            original.last_password_change_date
        );
    }

    #[test]
    fn test_refresh_of_expired_token_fails() {
        let (service, clock) = service_at(worked_example_config(), t0());
        let token = service.generate_token(&create_test_user(t0())).unwrap();

        clock.advance(Duration::seconds(3601));
        let result = service.refresh(&token);

        match result {
            Err(TokenError::Refresh(cause)) => assert!(matches!(*cause, TokenError::Expired)),
            other => panic!("expected refresh error, got {:?}", other),
        }
    }

    #[test]
    fn test_refresh_of_garbage_fails() {
        let (service, _) = service_at(worked_example_config(), t0());

        match service.refresh("garbage") {
            Err(TokenError::Refresh(cause)) => {
                assert!(matches!(*cause, TokenError::Malformed(_)))
            }
            other => panic!("expected refresh error, got {:?}", other),
        }
    }

    #[test]
    fn test_foreign_secret_fails_signature() {
        let (service, _) = service_at(worked_example_config(), t0());
        let token = sign_raw("another-secret", raw_claims(t0().timestamp()));

        assert!(matches!(
            service.validate_and_extract_claims(&token),
            Err(TokenError::Signature)
        ));
    }

    #[test]
    fn test_foreign_issuer_fails_claim_mismatch() {
        let (service, _) = service_at(worked_example_config(), t0());

        for secret in ["s3cr3t", "another-secret"] {
            let mut claims = raw_claims(t0().timestamp());
            claims["iss"] = json!("other");
            let token = sign_raw(secret, claims);

            assert!(
                matches!(
                    service.validate_and_extract_claims(&token),
                    Err(TokenError::ClaimMismatch(_))
                ),
                "secret {}",
                secret
            );
        }
    }

    #[test]
    fn test_foreign_audience_fails_claim_mismatch() {
        let (service, _) = service_at(worked_example_config(), t0());
        let mut claims = raw_claims(t0().timestamp());
        claims["aud"] = json!("someone-else");
        let token = sign_raw("s3cr3t", claims);

        assert!(matches!(
            service.validate_and_extract_claims(&token),
            Err(TokenError::ClaimMismatch(_))
        ));
    }

    #[test]
    fn test_missing_issuer_or_audience_fails_claim_mismatch() {
        let (service, _) = service_at(worked_example_config(), t0());

        for claim in ["iss", "aud"] {
            for secret in ["s3cr3t", "another-secret"] {
                let mut claims = raw_claims(t0().timestamp());
                claims.as_object_mut().unwrap().remove(claim);
                let token = sign_raw(secret, claims);

                match service.validate_and_extract_claims(&token) {
                    Err(TokenError::ClaimMismatch(name)) => assert_eq!(name, claim),
                    other => panic!("{} with secret {}: got {:?}", claim, secret, other),
                }
            }
        }
    }

    #[test]
    fn test_other_algorithm_fails_signature() {
        let (service, _) = service_at(worked_example_config(), t0());
        let token = encode(
            &Header::new(Algorithm::HS256),
            &raw_claims(t0().timestamp()),
            &EncodingKey::from_secret(b"s3cr3t"),
        )
        .unwrap();

        assert!(matches!(
            service.validate_and_extract_claims(&token),
            Err(TokenError::Signature)
        ));
    }

    #[test]
    fn test_tampered_payload_fails_signature() {
        let (service, _) = service_at(worked_example_config(), t0());
        let token = service.generate_token(&create_test_user(t0())).unwrap();

        let mut forged = raw_claims(t0().timestamp());
        forged["bxbot:roles"] = json!(["ROLE_ADMIN"]);
        let forged_payload = URL_SAFE_NO_PAD.encode(forged.to_string());

        let parts: Vec<&str> = token.split('.').collect();
        let tampered = format!("{}.{}.{}", parts[0], forged_payload, parts[2]);

        assert!(matches!(
            service.validate_and_extract_claims(&tampered),
            Err(TokenError::Signature)
        ));
    }

    #[test]
    fn test_malformed_token() {
        let (service, _) = service_at(worked_example_config(), t0());

        for token in ["", "not-a-token", "a.b.c"] {
            assert!(
                matches!(
                    service.validate_and_extract_claims(token),
                    Err(TokenError::Malformed(_))
                ),
                "token {:?}",
                token
            );
        }
    }

    #[test]
    fn test_missing_subject_fails_extraction() {
        let (service, _) = service_at(worked_example_config(), t0());

        let mut claims = raw_claims(t0().timestamp());
        claims.as_object_mut().unwrap().remove("sub");
        let token = sign_raw("s3cr3t", claims);
        let claims = service.validate_and_extract_claims(&token).unwrap();
        assert!(matches!(
            claims.username(),
            Err(TokenError::ClaimExtraction("subject"))
        ));

        let mut claims = raw_claims(t0().timestamp());
        claims["sub"] = json!("");
        let token = sign_raw("s3cr3t", claims);
        let claims = service.validate_and_extract_claims(&token).unwrap();
        assert!(matches!(
            claims.username(),
            Err(TokenError::ClaimExtraction("subject"))
        ));
    }

    #[test]
    fn test_missing_or_malformed_roles_fail_extraction() {
        let (service, _) = service_at(worked_example_config(), t0());

        let mut claims = raw_claims(t0().timestamp());
        claims.as_object_mut().unwrap().remove("bxbot:roles");
        let token = sign_raw("s3cr3t", claims);
        let claims = service.validate_and_extract_claims(&token).unwrap();
        assert!(matches!(
            claims.roles(),
            Err(TokenError::ClaimExtraction("roles"))
        ));

        let mut claims = raw_claims(t0().timestamp());
        claims["bxbot:roles"] = json!(42);
        let token = sign_raw("s3cr3t", claims);
        let claims = service.validate_and_extract_claims(&token).unwrap();
        assert!(matches!(
            claims.roles(),
            Err(TokenError::ClaimExtraction("roles"))
        ));
    }

    #[test]
    fn test_worked_example() {
        let (service, clock) = service_at(worked_example_config(), t0());
        let token = service.generate_token(&create_test_user(t0())).unwrap();

        clock.set(t0() + Duration::seconds(3601));
        assert!(matches!(
            service.validate_and_extract_claims(&token),
            Err(TokenError::Expired)
        ));

        clock.set(t0() + Duration::seconds(10));
        let claims = service.validate_and_extract_claims(&token).unwrap();
        assert!(!service.can_be_refreshed(&claims, t0() + Duration::seconds(5)));
        assert!(service.can_be_refreshed(&claims, t0() - Duration::seconds(5)));
        assert_eq!(claims.roles().unwrap(), vec![Role::user()]);
        assert_eq!(claims.username().unwrap(), "alice");
    }

    #[test]
    fn test_debug_hides_secret() {
        let service = TokenService::new(JwtConfig::new("very-secret-value", 600));
        let debug = format!("{:?}", service);

        assert!(!debug.contains("very-secret-value"));
        assert!(debug.contains("[hidden]"));
    }

    #[test]
    fn test_default_config() {
        let config = JwtConfig::default();
        assert_eq!(config.expiration_secs, 600);
        assert_eq!(config.allowed_clock_skew_secs, 60);

        let service = TokenService::new(JwtConfig::new("secret", 1800));
        assert_eq!(service.expiration_secs(), 1800);
    }
}
