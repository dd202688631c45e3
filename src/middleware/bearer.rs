use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use chrono::Utc;

use crate::auth::ValidatedClaims;
use crate::state::AppState;

/// Claims loaded for the current request, or `None` when no trustworthy
/// token was presented. Inserted for every request; the policy engine
/// decides what that means per tier.
#[derive(Clone)]
pub struct AuthContext {
    pub claims: Option<ValidatedClaims>,
}

/// Extract a Bearer token from the Authorization header.
///
/// Returns the token without the "Bearer " prefix, or None if the header
/// is missing, malformed, or empty after the prefix.
pub fn extract_bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get("Authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.strip_prefix("Bearer "))
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
}

/// Validate the bearer token if one is present and stash the result in the
/// request extensions. Never rejects: a missing or invalid token must still
/// reach public-tier handlers, and the 401-vs-403 distinction belongs to
/// the policy engine, not the transport.
pub async fn load_claims(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let now = Utc::now().timestamp();
    let claims = extract_bearer_token(request.headers())
        .and_then(|token| state.validator.validate(token, now).ok());

    request.extensions_mut().insert(AuthContext { claims });
    next.run(request).await
}
