// tests/support/helpers.rs
use std::sync::Arc;

use axum::body;
use axum::http::StatusCode;
use serde_json::Value;

use super::mocks;

/// 本番と同じ長さ要件(32バイト以上)を満たすテスト専用シークレット
pub const TEST_JWT_SECRET: &str = "integration-test-secret-0123456789abcdef-key";

/// Wire the application services against the given shared store. Password
/// hashing, clock and slug randomness are swapped for deterministic doubles
/// while the token service and revocation store are the real in-process
/// implementations, so token round trips behave as in production.
pub fn build_state_with(
    store: Arc<mocks::InMemoryStore>,
) -> inkpress::presentation::http::state::HttpState {
    let user_repo: Arc<dyn inkpress::domain::user::UserRepository> = store.clone();
    let post_write: Arc<dyn inkpress::domain::post::PostWriteRepository> = store.clone();
    let post_read: Arc<dyn inkpress::domain::post::PostReadRepository> = store;
    let password_hasher: Arc<dyn inkpress::application::ports::security::PasswordHasher> =
        Arc::new(mocks::DummyPasswordHasher);
    let token_service: Arc<dyn inkpress::application::ports::security::TokenService> = Arc::new(
        inkpress::infrastructure::security::JwtTokenService::new(TEST_JWT_SECRET, 900, 604_800, 3_600),
    );
    let revocation_store: Arc<dyn inkpress::application::ports::revocation::RevocationStore> =
        Arc::new(inkpress::infrastructure::security::InMemoryRevocationStore::new());
    let clock: Arc<dyn inkpress::application::ports::time::Clock> = Arc::new(mocks::DummyClock);
    let slugger: Arc<dyn inkpress::application::ports::util::SlugGenerator> =
        Arc::new(mocks::DummySlug);

    let services = Arc::new(inkpress::application::services::ApplicationServices::new(
        user_repo,
        post_write,
        post_read,
        password_hasher,
        token_service,
        revocation_store,
        clock,
        slugger,
    ));

    inkpress::presentation::http::state::HttpState { services }
}

pub async fn build_test_state() -> inkpress::presentation::http::state::HttpState {
    build_state_with(Arc::new(mocks::InMemoryStore::new()))
}

/// Router over an empty store. Rate limiting is disabled because the IP key
/// extractor has no peer address under `oneshot`.
pub async fn make_test_router() -> axum::Router {
    let state = build_test_state().await;
    inkpress::presentation::http::routes::build_router_with_rate_limiter(state, false)
}

/// Router over a pre-seeded store the test keeps a handle on.
pub async fn make_router_with_store(store: Arc<mocks::InMemoryStore>) -> axum::Router {
    let state = build_state_with(store);
    inkpress::presentation::http::routes::build_router_with_rate_limiter(state, false)
}

/// Assert that a response is an error body with the expected status and
/// canonical error string.
pub async fn assert_error_response(
    resp: axum::response::Response,
    expected_status: StatusCode,
    expected_error: &str,
) {
    // Check status first
    assert_eq!(resp.status(), expected_status);
    let (parts, body_stream) = resp.into_parts();
    let body_bytes = body::to_bytes(body_stream, 1024 * 1024)
        .await
        .expect("read body");
    let ct = parts
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(ct.starts_with("application/json"), "unexpected content-type: {}", ct);
    let json: Value = serde_json::from_slice(&body_bytes).expect("expected valid json body for error");
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {}", err_field);
    assert!(!msg_field.is_empty(), "expected non-empty message field in error body");
}

/// Register a fresh account through the API and hand back its
/// `(access, refresh)` token pair.
pub async fn register_tokens(app: &axum::Router, username: &str, email: &str) -> (String, String) {
    use axum::body::Body;
    use axum::http::{Method, Request};
    use tower::util::ServiceExt as _;

    let body = serde_json::json!({
        "username": username,
        "email": email,
        "password": "sup3r-secret",
        "password_confirm": "sup3r-secret",
    });
    let req = Request::builder()
        .method(Method::POST)
        .uri("/api/v1/auth/register")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let resp = app.clone().oneshot(req).await.unwrap();
    let (status, body) = response_json(resp).await;
    assert_eq!(status, StatusCode::CREATED, "registration failed: {body}");

    let access = body["tokens"]["access"].as_str().unwrap().to_string();
    let refresh = body["tokens"]["refresh"].as_str().unwrap().to_string();
    (access, refresh)
}

/// Read a response to (status, parsed JSON body), panicking on non-JSON.
pub async fn response_json(resp: axum::response::Response) -> (StatusCode, Value) {
    let status = resp.status();
    let body_bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    let json: Value = serde_json::from_slice(&body_bytes).unwrap_or_else(|err| {
        panic!(
            "expected json body, got error {err}: {}",
            String::from_utf8_lossy(&body_bytes)
        )
    });
    (status, json)
}
