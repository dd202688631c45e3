use axum::{Json, extract::State};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub login: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub expires_in: u64,
}

/// Verify credentials and mint a token. Any credential failure maps to 404
/// via the `AuthError` conversion; this handler never distinguishes
/// unknown-user from wrong-secret.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> Result<Json<LoginResponse>> {
    let identity = state.verifier.verify(&input.login, &input.password)?;

    let now = Utc::now().timestamp();
    let token = state.issuer.issue(&identity, now)?;

    tracing::debug!(login = %identity.login, "issued token");

    Ok(Json(LoginResponse {
        token,
        expires_in: state.issuer.ttl_secs(),
    }))
}
