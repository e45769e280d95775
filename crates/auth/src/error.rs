//! Telegram authentication errors
//!
//! Each variant maps to a distinct operational response: configuration
//! defects are deployment bugs, invalid payloads are client errors, and a
//! hash mismatch is a rejected (possibly forged) login. Callers must be
//! able to tell these apart, so they are never collapsed into one another.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Telegram authentication error
#[derive(Debug, thiserror::Error)]
pub enum TelegramAuthError {
    /// Bot token or session secret missing/empty. Fatal to the auth
    /// subsystem, not recoverable per-request.
    #[error("Auth configuration error: {0}")]
    Configuration(String),

    /// Payload missing required fields or malformed values. The client
    /// sent garbage, not a forgery.
    #[error("Invalid login payload: {0}")]
    InvalidPayload(String),

    /// Recomputed HMAC does not match the supplied digest. Retrying the
    /// same payload always fails identically; the user must restart the
    /// widget flow.
    #[error("Telegram login data failed verification")]
    HashMismatch,

    /// Payload is authentic but its auth_date falls outside the accepted
    /// replay window.
    #[error("Login payload has expired")]
    LoginExpired,

    /// Session token could not be signed for a verified user.
    #[error("Failed to issue session token: {0}")]
    SessionSigning(String),
}

impl IntoResponse for TelegramAuthError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            TelegramAuthError::Configuration(_) => {
                // Deployment defect; detail stays in server logs only
                tracing::error!(error = ?self, "Auth subsystem misconfigured");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "CONFIGURATION_ERROR",
                    "Authentication is not configured".to_string(),
                )
            }
            TelegramAuthError::InvalidPayload(msg) => (
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                format!("Invalid login payload: {}", msg),
            ),
            TelegramAuthError::HashMismatch => (
                StatusCode::UNAUTHORIZED,
                "AUTHENTICATION_FAILED",
                "Telegram login data failed verification".to_string(),
            ),
            TelegramAuthError::LoginExpired => (
                StatusCode::UNAUTHORIZED,
                "LOGIN_EXPIRED",
                "Login payload has expired, restart the Telegram login flow".to_string(),
            ),
            TelegramAuthError::SessionSigning(_) => {
                tracing::error!(error = ?self, "Session token signing failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "SESSION_ERROR",
                    "Failed to issue session token".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message,
            }
        }));

        (status, body).into_response()
    }
}
