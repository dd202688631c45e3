use std::sync::Arc;

use subtle::ConstantTimeEq;

use crate::models::Role;
use crate::store::{CredentialStore, hash_secret};

use super::AuthError;

/// SHA-256 digest of nothing in particular. Compared against when the login
/// is unknown so the miss costs the same as a wrong secret.
const DUMMY_DIGEST: &str = "0f2e5a8c41d7b3966ee1c0a8d45f72139bc6840daa55e17f28c3b9d06147aef5";

/// A login that survived credential verification. Carries exactly what the
/// token issuer needs to assert about it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedIdentity {
    pub login: String,
    pub role: Role,
}

pub struct CredentialVerifier {
    store: Arc<CredentialStore>,
}

impl CredentialVerifier {
    pub fn new(store: Arc<CredentialStore>) -> Self {
        Self { store }
    }

    /// Check a login attempt. Unknown-user and wrong-secret collapse into
    /// the same `InvalidCredentials` outcome, and both paths perform one
    /// constant-time digest comparison.
    pub fn verify(&self, login: &str, password: &str) -> Result<VerifiedIdentity, AuthError> {
        let presented = hash_secret(password);
        match self.store.lookup(login) {
            Some(user) => {
                let matches: bool = presented
                    .as_bytes()
                    .ct_eq(user.secret_hash.as_bytes())
                    .into();
                if matches {
                    Ok(VerifiedIdentity {
                        login: user.login.clone(),
                        role: user.role,
                    })
                } else {
                    tracing::debug!(login, "credential verification failed");
                    Err(AuthError::InvalidCredentials)
                }
            }
            None => {
                let _ = presented.as_bytes().ct_eq(DUMMY_DIGEST.as_bytes());
                tracing::debug!(login, "credential verification failed");
                Err(AuthError::InvalidCredentials)
            }
        }
    }
}
