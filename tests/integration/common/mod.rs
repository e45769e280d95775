//! Common test utilities and fixtures for integration tests
//!
//! Provides a composed router over the mock Bot API service, signed
//! payload fixtures, and helpers for driving requests through the router
//! with `tower::ServiceExt::oneshot`.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{self, Request, Response},
    Router,
};
use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};
use tower::ServiceExt;

use cercooffro_api::{routes, AppState};
use cercooffro_auth::{FreshnessPolicy, LoginVerifier, SessionSigner, TelegramLoginPayload};
use cercooffro_telegram::mock::MockBotApiService;

pub const BOT_TOKEN: &str = "123456:integration-test-token";
pub const SESSION_SECRET: &str = "integration-test-session-secret";

/// Test application: the composed router plus handles to the pieces a
/// test needs to program or inspect.
pub struct TestApp {
    pub router: Router,
    pub telegram: MockBotApiService,
    pub sessions: SessionSigner,
}

impl TestApp {
    /// Build the app the same way the composition root does, but over the
    /// mock Bot API service.
    pub fn new() -> Self {
        let telegram = MockBotApiService::new();
        let sessions = SessionSigner::new(SESSION_SECRET, 3_600).unwrap();

        let state = AppState {
            verifier: LoginVerifier::new(BOT_TOKEN).unwrap(),
            freshness: FreshnessPolicy::new(86_400),
            sessions: sessions.clone(),
            telegram: Arc::new(telegram.clone()),
        };

        let router = routes::create_routes().with_state(state);

        Self {
            router,
            telegram,
            sessions,
        }
    }

    /// POST a JSON body to a path.
    pub async fn post_json(&self, path: &str, body: serde_json::Value) -> Response<Body> {
        let request = Request::builder()
            .method(http::Method::POST)
            .uri(path)
            .header(http::header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        self.router.clone().oneshot(request).await.unwrap()
    }

    /// GET a path.
    pub async fn get(&self, path: &str) -> Response<Body> {
        let request = Request::builder()
            .method(http::Method::GET)
            .uri(path)
            .body(Body::empty())
            .unwrap();

        self.router.clone().oneshot(request).await.unwrap()
    }
}

/// Read a response body as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Sign a payload's check string the way the Telegram widget does.
pub fn sign_payload(payload: &TelegramLoginPayload, bot_token: &str) -> String {
    let secret_key = Sha256::digest(bot_token.as_bytes());
    let mut mac = Hmac::<Sha256>::new_from_slice(&secret_key).unwrap();
    mac.update(payload.check_string().as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

/// A correctly signed login payload issued at `auth_date`.
pub fn signed_payload(auth_date: i64) -> TelegramLoginPayload {
    let mut payload = TelegramLoginPayload {
        id: 424242,
        first_name: "Alice".to_string(),
        last_name: Some("Bianchi".to_string()),
        username: Some("alice_it".to_string()),
        photo_url: None,
        auth_date,
        hash: String::new(),
    };
    payload.hash = sign_payload(&payload, BOT_TOKEN);
    payload
}
