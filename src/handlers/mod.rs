mod content;
mod login;

pub use content::*;
pub use login::*;

use axum::{
    Json, Router,
    routing::{get, post},
};
use serde::Serialize;

use crate::middleware::load_claims;
use crate::state::AppState;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/user/login", post(login))
        .route("/content/{tier}", get(content))
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            load_claims,
        ))
        .with_state(state)
}
