//! Token issuance and validation over a shared HS256 secret.
//!
//! Both halves take `now` as an argument instead of reading the clock, so
//! expiry behavior is deterministic under test. The transport layer samples
//! the clock once per request.

use jwt_simple::prelude::*;
use uuid::Uuid;

use super::claims::{RoleClaims, ValidatedClaims};
use super::{AuthError, verifier::VerifiedIdentity};

const TOKEN_ISSUER: &str = "tiergate";
const TOKEN_AUDIENCE: &str = "tiergate-content";

fn timestamp(now: i64) -> Duration {
    Duration::from_secs(now.max(0) as u64)
}

/// Mints bearer tokens for verified identities.
pub struct TokenIssuer {
    key: HS256Key,
    ttl_secs: u64,
}

impl TokenIssuer {
    pub fn new(secret: &[u8], ttl_secs: u64) -> Self {
        Self {
            key: HS256Key::from_bytes(secret),
            ttl_secs,
        }
    }

    pub fn ttl_secs(&self) -> u64 {
        self.ttl_secs
    }

    /// Issue a token asserting the identity's role, valid from `now` until
    /// `now + TTL`. The jti is reserved for a future denylist; nothing
    /// consults it today.
    pub fn issue(&self, identity: &VerifiedIdentity, now: i64) -> Result<String, AuthError> {
        let issued_at = timestamp(now);
        let mut claims = Claims::with_custom_claims(
            RoleClaims {
                role: identity.role,
            },
            Duration::from_secs(self.ttl_secs),
        )
        .with_issuer(TOKEN_ISSUER)
        .with_audience(TOKEN_AUDIENCE)
        .with_subject(&identity.login)
        .with_jwt_id(Uuid::new_v4().to_string());

        claims.issued_at = Some(issued_at);
        claims.invalid_before = Some(issued_at);
        claims.expires_at = Some(issued_at + Duration::from_secs(self.ttl_secs));

        self.key
            .authenticate(claims)
            .map_err(|e| AuthError::Signing(e.to_string()))
    }
}

/// Verifies presented tokens against the same secret the issuer signs with.
pub struct TokenValidator {
    key: HS256Key,
}

impl TokenValidator {
    pub fn new(secret: &[u8]) -> Self {
        Self {
            key: HS256Key::from_bytes(secret),
        }
    }

    /// Verify signature, algorithm, issuer, audience, and validity window,
    /// and extract the claims. Every failure collapses to `InvalidToken`.
    /// Zero clock tolerance: a token is invalid the instant `now` passes
    /// its expiry.
    pub fn validate(&self, token: &str, now: i64) -> Result<ValidatedClaims, AuthError> {
        let mut options = VerificationOptions::default();
        options.allowed_issuers = Some(HashSet::from_strings(&[TOKEN_ISSUER]));
        options.allowed_audiences = Some(HashSet::from_strings(&[TOKEN_AUDIENCE]));
        options.time_tolerance = Some(Duration::from_secs(0));
        options.artificial_time = Some(timestamp(now));

        let claims = self
            .key
            .verify_token::<RoleClaims>(token, Some(options))
            .map_err(|_| AuthError::InvalidToken)?;

        let subject = claims.subject.ok_or(AuthError::InvalidToken)?;
        Ok(ValidatedClaims {
            subject,
            role: claims.custom.role,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

    const SECRET: &[u8] = b"unit-test-signing-secret-0123456789abcdef";
    const NOW: i64 = 1_700_000_000;
    const TTL: u64 = 3600;

    fn identity() -> VerifiedIdentity {
        VerifiedIdentity {
            login: "user_1".to_string(),
            role: Role::Employee,
        }
    }

    fn issuer() -> TokenIssuer {
        TokenIssuer::new(SECRET, TTL)
    }

    fn validator() -> TokenValidator {
        TokenValidator::new(SECRET)
    }

    #[test]
    fn issued_token_round_trips() {
        let token = issuer().issue(&identity(), NOW).unwrap();
        let claims = validator().validate(&token, NOW + 1).unwrap();
        assert_eq!(claims.subject, "user_1");
        assert_eq!(claims.role, Role::Employee);
    }

    #[test]
    fn token_is_valid_just_before_expiry() {
        let token = issuer().issue(&identity(), NOW).unwrap();
        assert!(validator().validate(&token, NOW + TTL as i64 - 1).is_ok());
    }

    #[test]
    fn token_is_invalid_after_expiry() {
        let token = issuer().issue(&identity(), NOW).unwrap();
        let err = validator()
            .validate(&token, NOW + TTL as i64 + 1)
            .unwrap_err();
        assert!(matches!(err, AuthError::InvalidToken));
    }

    #[test]
    fn tampered_token_is_invalid() {
        let token = issuer().issue(&identity(), NOW).unwrap();
        let mut tampered = token.into_bytes();
        let mid = tampered.len() / 2;
        tampered[mid] = if tampered[mid] == b'A' { b'B' } else { b'A' };
        let tampered = String::from_utf8(tampered).unwrap();

        assert!(validator().validate(&tampered, NOW).is_err());
    }

    #[test]
    fn malformed_token_is_invalid() {
        assert!(validator().validate("not.a.token", NOW).is_err());
        assert!(validator().validate("", NOW).is_err());
    }

    #[test]
    fn token_signed_with_other_key_is_invalid() {
        let other = TokenIssuer::new(b"a-completely-different-signing-secret", TTL);
        let token = other.issue(&identity(), NOW).unwrap();
        assert!(validator().validate(&token, NOW).is_err());
    }

    #[test]
    fn token_signed_with_other_algorithm_is_invalid() {
        // Same secret bytes, HS384 envelope. The validator must refuse to
        // treat it as HS256 instead of falling back on the shared key.
        let claims = Claims::with_custom_claims(
            RoleClaims {
                role: Role::Employee,
            },
            Duration::from_secs(TTL),
        )
        .with_issuer("tiergate")
        .with_audience("tiergate-content")
        .with_subject("user_1");
        let token = HS384Key::from_bytes(SECRET).authenticate(claims).unwrap();

        assert!(validator().validate(&token, NOW).is_err());
    }

    #[test]
    fn role_claim_matches_identity_role() {
        let manager = VerifiedIdentity {
            login: "manager_1".to_string(),
            role: Role::Manager,
        };
        let token = issuer().issue(&manager, NOW).unwrap();
        let claims = validator().validate(&token, NOW).unwrap();
        assert_eq!(claims.role, Role::Manager);
        assert_eq!(claims.subject, "manager_1");
    }
}
