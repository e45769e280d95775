//! Telegram Bot API HTTP Client Implementation
//!
//! Real HTTP client that GETs `{base_url}/bot{token}/getChat?chat_id=<id>`.
//! The token-bearing URL is built once at construction and never appears in
//! errors or logs: transport errors are stripped with `without_url` first.

use crate::{BotApiConfig, BotApiService, ChatInfo, TelegramError};
use serde::Deserialize;

/// Bot API envelope: `{"ok": true, "result": {...}}` on success,
/// `{"ok": false, "description": "..."}` on failure.
#[derive(Debug, Deserialize)]
struct BotApiResponse {
    ok: bool,
    #[serde(default)]
    result: Option<ChatInfo>,
    #[serde(default)]
    description: Option<String>,
}

/// Real Bot API client for profile lookups.
pub struct BotApiClient {
    http: reqwest::Client,
    get_chat_url: String,
}

impl BotApiClient {
    /// Create a new Bot API client from configuration.
    pub fn new(config: BotApiConfig) -> Self {
        let get_chat_url = format!(
            "{}/bot{}/getChat",
            config.base_url.trim_end_matches('/'),
            config.bot_token
        );
        Self {
            http: reqwest::Client::new(),
            get_chat_url,
        }
    }
}

#[async_trait::async_trait]
impl BotApiService for BotApiClient {
    async fn get_chat(&self, chat_id: i64) -> Result<ChatInfo, TelegramError> {
        let response = self
            .http
            .get(&self.get_chat_url)
            .query(&[("chat_id", chat_id)])
            .send()
            .await
            .map_err(|e| TelegramError::Request(e.without_url().to_string()))?;

        let status = response.status();
        if !status.is_success() {
            // Bot API failure bodies carry a description; they never echo
            // the request URL, so the description is safe to surface.
            let description = response
                .json::<BotApiResponse>()
                .await
                .ok()
                .and_then(|b| b.description);
            return Err(TelegramError::Response(match description {
                Some(d) => format!("Bot API returned {}: {}", status, d),
                None => format!("Bot API returned {}", status),
            }));
        }

        let body: BotApiResponse = response
            .json()
            .await
            .map_err(|e| TelegramError::Response(e.without_url().to_string()))?;

        if !body.ok {
            return Err(TelegramError::Response(
                body.description
                    .unwrap_or_else(|| "Bot API reported ok=false".to_string()),
            ));
        }

        let chat = body.result.ok_or_else(|| {
            TelegramError::Response("Bot API response missing result".to_string())
        })?;

        tracing::debug!(chat_id, "Bot API getChat succeeded");
        Ok(chat)
    }
}
