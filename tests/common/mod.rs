#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use tiergate::handlers;
use tiergate::models::{Role, UserRecord};
use tiergate::state::AppState;
use tiergate::store::CredentialStore;

pub const TEST_SIGNING_KEY: &[u8] = b"integration-test-signing-key-0123456789";

pub fn test_state() -> AppState {
    let records = vec![
        UserRecord {
            login: "user_1".to_string(),
            password: "654321".to_string(),
            role: Role::Employee,
        },
        UserRecord {
            login: "manager_1".to_string(),
            password: "123456".to_string(),
            role: Role::Manager,
        },
    ];
    let store = CredentialStore::from_records(records).expect("valid test records");
    AppState::new(store, TEST_SIGNING_KEY, 3600)
}

pub fn test_app() -> Router {
    handlers::router(test_state())
}

pub async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn post_login(app: &Router, login: &str, password: &str) -> axum::response::Response {
    let body = serde_json::json!({ "login": login, "password": password });
    app.clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/user/login")
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

/// Log in and return the issued token, asserting success.
pub async fn login_token(app: &Router, login: &str, password: &str) -> String {
    let response = post_login(app, login, password).await;
    assert_eq!(response.status(), StatusCode::OK, "login should succeed");
    let body = body_json(response).await;
    body["token"].as_str().expect("token in response").to_string()
}

pub async fn get(app: &Router, uri: &str, token: Option<&str>) -> axum::response::Response {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {token}"));
    }
    app.clone()
        .oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap()
}
