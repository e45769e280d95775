//! Telegram login API handlers
//!
//! Implements:
//! - POST /api/auth/telegram/verify — verify a login-widget payload and
//!   issue a session token
//! - GET /api/auth/telegram/users/{chat_id} — fetch public profile data
//!   for a verified user

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;
use serde::Serialize;

use cercooffro_auth::{TelegramAuthError, TelegramLoginPayload, TelegramUser};
use cercooffro_common::{Error, Result, ValidatedJson};
use cercooffro_telegram::ChatInfo;

use crate::middleware::AppState;

/// Response for a successful login verification
#[derive(Debug, Serialize)]
pub struct VerifyLoginResponse {
    pub user: TelegramUser,
    pub access_token: String,
    pub token_type: &'static str,
}

/// POST /api/auth/telegram/verify — verify a login-widget payload
///
/// Pipeline: HMAC verification, then the replay-freshness check, then
/// session issuance. The freshness check runs after verification so
/// unsigned payloads cannot probe the window.
pub async fn verify_login(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<TelegramLoginPayload>,
) -> std::result::Result<Json<VerifyLoginResponse>, TelegramAuthError> {
    let user = state.verifier.verify(&payload)?;

    let now = Utc::now();
    state.freshness.check(&payload, now)?;

    let access_token = state.sessions.issue(&user, now)?;

    tracing::info!(user_id = user.id, "Telegram login verified");

    Ok(Json(VerifyLoginResponse {
        user,
        access_token,
        token_type: "bearer",
    }))
}

/// GET /api/auth/telegram/users/{chat_id} — fetch public profile data
pub async fn get_user_profile(
    State(state): State<AppState>,
    Path(chat_id): Path<i64>,
) -> Result<Json<ChatInfo>> {
    let chat = state.telegram.get_chat(chat_id).await.map_err(|e| {
        // Transient I/O concern, not a trust decision; the client sees a
        // fixed message and may retry
        tracing::warn!(chat_id, error = %e, "Bot API profile fetch failed");
        Error::Upstream("Failed to fetch Telegram user info".to_string())
    })?;

    Ok(Json(chat))
}
