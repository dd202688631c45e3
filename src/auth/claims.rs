use serde::{Deserialize, Serialize};

use crate::models::Role;

/// Custom claim section of an issued token. The registered claims (sub,
/// iat, nbf, exp, jti, iss, aud) live in the JWT envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleClaims {
    pub role: Role,
}

/// Identity and role extracted from a token that passed verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedClaims {
    pub subject: String,
    pub role: Role,
}
