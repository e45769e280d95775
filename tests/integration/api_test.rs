//! End-to-end tests for the CercoOffro login API
//!
//! Drives the composed router over the mock Bot API service and asserts
//! the status codes and body shapes of the verification and profile
//! endpoints.

use axum::http::StatusCode;
use chrono::Utc;

use cercooffro_telegram::ChatInfo;

use crate::common::{body_json, sign_payload, signed_payload, TestApp, BOT_TOKEN};

mod common;

mod telegram_login {
    use super::*;

    #[tokio::test]
    async fn test_valid_login_returns_user_and_session_token() {
        let app = TestApp::new();
        let payload = signed_payload(Utc::now().timestamp());

        let response = app
            .post_json(
                "/api/auth/telegram/verify",
                serde_json::to_value(&payload).unwrap(),
            )
            .await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;

        assert_eq!(body["user"]["id"], 424242);
        assert_eq!(body["user"]["first_name"], "Alice");
        assert_eq!(body["user"]["username"], "alice_it");
        assert_eq!(body["token_type"], "bearer");
        // The digest never round-trips into the response
        assert!(body["user"].get("hash").is_none());

        // The issued token decodes with the service secret and carries the
        // Telegram user id as subject
        let claims = app
            .sessions
            .decode(body["access_token"].as_str().unwrap())
            .unwrap();
        assert_eq!(claims.sub, "424242");
        assert_eq!(claims.exp, claims.iat + 3_600);
    }

    #[tokio::test]
    async fn test_tampered_field_rejected_with_401() {
        let app = TestApp::new();
        let mut payload = signed_payload(Utc::now().timestamp());
        payload.first_name = "Mallory".to_string();

        let response = app
            .post_json(
                "/api/auth/telegram/verify",
                serde_json::to_value(&payload).unwrap(),
            )
            .await;

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "AUTHENTICATION_FAILED");
    }

    #[tokio::test]
    async fn test_wrong_digest_rejected_with_401() {
        let app = TestApp::new();
        let mut payload = signed_payload(Utc::now().timestamp());
        // A well-formed digest signed with the wrong token
        payload.hash = sign_payload(&payload, "999999:wrong-token");

        let response = app
            .post_json(
                "/api/auth/telegram/verify",
                serde_json::to_value(&payload).unwrap(),
            )
            .await;

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "AUTHENTICATION_FAILED");
    }

    #[tokio::test]
    async fn test_stale_payload_rejected_with_401() {
        let app = TestApp::new();
        // Authentic signature, two days old against the 24h test window
        let payload = signed_payload(Utc::now().timestamp() - 2 * 86_400);

        let response = app
            .post_json(
                "/api/auth/telegram/verify",
                serde_json::to_value(&payload).unwrap(),
            )
            .await;

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "LOGIN_EXPIRED");
    }

    #[tokio::test]
    async fn test_missing_required_field_rejected_with_400() {
        let app = TestApp::new();

        // No auth_date
        let response = app
            .post_json(
                "/api/auth/telegram/verify",
                serde_json::json!({
                    "id": 424242,
                    "first_name": "Alice",
                    "hash": "0".repeat(64),
                }),
            )
            .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_malformed_hash_rejected_with_400() {
        let app = TestApp::new();
        let mut payload = signed_payload(Utc::now().timestamp());
        payload.hash = "not-a-digest".to_string();

        let response = app
            .post_json(
                "/api/auth/telegram/verify",
                serde_json::to_value(&payload).unwrap(),
            )
            .await;

        // Structurally invalid, not a forgery: 400, not 401
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_json_key_order_does_not_matter() {
        let app = TestApp::new();
        let payload = signed_payload(Utc::now().timestamp());

        // Same logical payload, keys deliberately shuffled
        let shuffled = serde_json::json!({
            "username": payload.username,
            "hash": payload.hash,
            "auth_date": payload.auth_date,
            "last_name": payload.last_name,
            "first_name": payload.first_name,
            "id": payload.id,
        });

        let response = app.post_json("/api/auth/telegram/verify", shuffled).await;
        assert_eq!(response.status(), StatusCode::OK);
    }
}

mod telegram_profile {
    use super::*;

    #[tokio::test]
    async fn test_profile_fetch_returns_chat_info() {
        let app = TestApp::new();
        app.telegram.set_chat(ChatInfo {
            id: 424242,
            first_name: Some("Alice".to_string()),
            last_name: Some("Bianchi".to_string()),
            username: Some("alice_it".to_string()),
            bio: Some("Studentessa a Bologna".to_string()),
        });

        let response = app.get("/api/auth/telegram/users/424242").await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["id"], 424242);
        assert_eq!(body["username"], "alice_it");
        assert_eq!(body["bio"], "Studentessa a Bologna");

        assert_eq!(app.telegram.recorded_requests(), vec![424242]);
    }

    #[tokio::test]
    async fn test_upstream_failure_maps_to_502_with_generic_message() {
        let app = TestApp::new();
        app.telegram.set_failure("Bot API returned 404 Not Found");

        let response = app.get("/api/auth/telegram/users/99").await;

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "UPSTREAM_ERROR");
        // Fixed client-facing message; upstream details stay server-side
        assert_eq!(
            body["error"]["message"],
            "Upstream error: Failed to fetch Telegram user info"
        );
        assert!(!body["error"]["message"]
            .as_str()
            .unwrap()
            .contains(BOT_TOKEN));
    }

    #[tokio::test]
    async fn test_non_numeric_chat_id_rejected() {
        let app = TestApp::new();

        let response = app.get("/api/auth/telegram/users/not-a-number").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
