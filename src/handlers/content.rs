use axum::{
    Extension, Json,
    extract::{Path, State},
};
use serde::Serialize;

use crate::auth::{AccessDecision, AccessTier};
use crate::error::{AppError, Result};
use crate::middleware::AuthContext;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: &'static str,
    pub users: usize,
}

/// The root resource is public tier. The store is guaranteed non-empty at
/// startup, so this always confirms the configured data.
pub async fn root(State(state): State<AppState>) -> Json<RootResponse> {
    Json(RootResponse {
        message: "Initial data configured",
        users: state.store.len(),
    })
}

#[derive(Debug, Serialize)]
pub struct ContentResponse {
    pub tier: String,
    pub data: String,
}

pub async fn content(
    Path(tier): Path<String>,
    Extension(auth): Extension<AuthContext>,
) -> Result<Json<ContentResponse>> {
    let tier: AccessTier = tier
        .parse()
        .map_err(|_| AppError::NotFound("no such content".into()))?;

    match tier.authorize(auth.claims.as_ref()) {
        AccessDecision::Allow => Ok(Json(ContentResponse {
            tier: tier.as_ref().to_string(),
            data: format!("{} content", tier.as_ref()),
        })),
        AccessDecision::Unauthenticated => Err(AppError::Unauthorized),
        AccessDecision::Forbidden => {
            Err(AppError::Forbidden("insufficient role for this content".into()))
        }
    }
}
