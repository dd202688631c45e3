//! In-memory credential store, populated once at startup.

use std::collections::HashMap;
use std::path::Path;

use sha2::{Digest, Sha256};
use thiserror::Error;

use crate::models::{User, UserRecord};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read users file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse users file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate login in users file: {0}")]
    DuplicateLogin(String),
}

/// Hash a secret for storage and comparison.
/// The domain prefix keeps these digests distinct from any other SHA-256
/// use of the same input.
pub fn hash_secret(secret: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(b"tiergate-credential-v1:");
    hasher.update(secret.as_bytes());
    hex::encode(hasher.finalize())
}

/// Read-only user registry. Built from external configuration before the
/// server starts; shared across requests without locking.
#[derive(Debug, Default)]
pub struct CredentialStore {
    users: HashMap<String, User>,
}

impl CredentialStore {
    /// Build a store from users-file records, hashing each secret.
    /// Duplicate logins are a configuration error, not a last-wins merge.
    pub fn from_records(records: Vec<UserRecord>) -> Result<Self, StoreError> {
        let mut users = HashMap::with_capacity(records.len());
        for record in records {
            let user = User {
                login: record.login.clone(),
                secret_hash: hash_secret(&record.password),
                role: record.role,
            };
            if users.insert(record.login.clone(), user).is_some() {
                return Err(StoreError::DuplicateLogin(record.login));
            }
        }
        Ok(Self { users })
    }

    /// Load and parse a JSON users file.
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        let raw = std::fs::read_to_string(path)?;
        let records: Vec<UserRecord> = serde_json::from_str(&raw)?;
        Self::from_records(records)
    }

    /// Demo user set for dev mode, mirroring the documented login examples.
    pub fn demo() -> Self {
        let records = vec![
            UserRecord {
                login: "user_1".to_string(),
                password: "654321".to_string(),
                role: crate::models::Role::Employee,
            },
            UserRecord {
                login: "manager_1".to_string(),
                password: "123456".to_string(),
                role: crate::models::Role::Manager,
            },
        ];
        Self::from_records(records).expect("demo records contain no duplicates")
    }

    pub fn lookup(&self, login: &str) -> Option<&User> {
        self.users.get(login)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
