use std::sync::Arc;

use crate::auth::{CredentialVerifier, TokenIssuer, TokenValidator};
use crate::store::CredentialStore;

/// Shared, read-only application state. Everything here is immutable after
/// startup, so handlers and middleware share it without locking.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<CredentialStore>,
    pub verifier: Arc<CredentialVerifier>,
    pub issuer: Arc<TokenIssuer>,
    pub validator: Arc<TokenValidator>,
}

impl AppState {
    /// Wire the components together around one signing secret. The issuer
    /// and validator get the key through this constructor; there is no
    /// ambient signing state.
    pub fn new(store: CredentialStore, signing_secret: &[u8], token_ttl_secs: u64) -> Self {
        let store = Arc::new(store);
        Self {
            verifier: Arc::new(CredentialVerifier::new(store.clone())),
            issuer: Arc::new(TokenIssuer::new(signing_secret, token_ttl_secs)),
            validator: Arc::new(TokenValidator::new(signing_secret)),
            store,
        }
    }
}
