use strum::{AsRefStr, EnumString};

use crate::models::Role;

use super::claims::ValidatedClaims;

/// A resource's declared minimum access requirement, parsed from the
/// request path. The mapping is fixed at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum AccessTier {
    Public,
    Authenticated,
    Employee,
    Manager,
}

/// Per-request authorization outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    Allow,
    /// No trustworthy token on a tier that requires one. Missing and
    /// invalid tokens are indistinguishable here: identity must be proven
    /// before role is even considered.
    Unauthenticated,
    /// Valid token, wrong role. Roles are exact-match; a manager does not
    /// implicitly hold employee access.
    Forbidden,
}

impl AccessTier {
    pub fn authorize(self, claims: Option<&ValidatedClaims>) -> AccessDecision {
        match self {
            AccessTier::Public => AccessDecision::Allow,
            _ => match claims {
                None => AccessDecision::Unauthenticated,
                Some(claims) => match self {
                    AccessTier::Authenticated => AccessDecision::Allow,
                    AccessTier::Employee if claims.role == Role::Employee => AccessDecision::Allow,
                    AccessTier::Manager if claims.role == Role::Manager => AccessDecision::Allow,
                    _ => AccessDecision::Forbidden,
                },
            },
        }
    }
}
