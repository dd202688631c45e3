use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsRefStr, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    Employee,
    Manager,
}

/// A registered user as held by the credential store. The secret only
/// exists as a digest; the plaintext is discarded at load time.
#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub login: String,
    #[serde(skip_serializing)]
    pub secret_hash: String,
    pub role: Role,
}

/// One entry of the users file. Carries the plaintext secret, so this type
/// never leaves the loading path.
#[derive(Debug, Deserialize)]
pub struct UserRecord {
    pub login: String,
    pub password: String,
    pub role: Role,
}
