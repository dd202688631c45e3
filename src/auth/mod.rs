mod claims;
mod policy;
mod token;
mod verifier;

pub use claims::*;
pub use policy::*;
pub use token::{TokenIssuer, TokenValidator};
pub use verifier::{CredentialVerifier, VerifiedIdentity};

use thiserror::Error;

/// Outcomes of credential and token checks. All of these are expected,
/// user-triggerable results except `Signing`, which is a server fault.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Unknown login or wrong secret. Callers must not be able to tell
    /// which, in outcome or in timing.
    #[error("invalid credentials")]
    InvalidCredentials,
    /// Malformed, tampered, mis-signed, or expired token. The policy engine
    /// only needs to know the token cannot be trusted.
    #[error("invalid token")]
    InvalidToken,
    #[error("token signing failed: {0}")]
    Signing(String),
}
