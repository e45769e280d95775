//! CercoOffro Telegram Bot API Service
//!
//! Provides public profile lookups for verified users with support for:
//! - Bot API `getChat` integration for production
//! - Mock Bot API service for testing and development
//! - Configurable bot token and base URL
//!
//! The bot token rides in the request URL path per Bot API convention, so
//! that URL is itself a secret: error paths strip it before stringifying.

pub mod client;
pub mod mock;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TelegramError {
    #[error("Telegram configuration error: {0}")]
    Configuration(String),

    #[error("Telegram request error: {0}")]
    Request(String),

    #[error("Telegram response error: {0}")]
    Response(String),
}

/// Subset of the Bot API `Chat` object returned by `getChat`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatInfo {
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

/// Bot API service configuration.
#[derive(Clone)]
pub struct BotApiConfig {
    /// Bot API provider (telegram, mock)
    pub provider: String,
    /// Bot token used as the request's path credential
    pub bot_token: String,
    /// Base URL for the Bot API
    pub base_url: String,
}

impl std::fmt::Debug for BotApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BotApiConfig")
            .field("provider", &self.provider)
            .field("bot_token", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl BotApiConfig {
    /// Create Bot API config from environment variables.
    pub fn from_env() -> Result<Self, TelegramError> {
        let provider = std::env::var("TELEGRAM_PROVIDER").unwrap_or_else(|_| "telegram".to_string());

        let bot_token = std::env::var("TELEGRAM_BOT_TOKEN").unwrap_or_else(|_| {
            if provider == "mock" {
                "mock-bot-token".to_string()
            } else {
                String::new()
            }
        });

        let base_url = std::env::var("TELEGRAM_API_BASE_URL")
            .unwrap_or_else(|_| "https://api.telegram.org".to_string());

        if provider != "mock" && bot_token.is_empty() {
            return Err(TelegramError::Configuration(
                "TELEGRAM_BOT_TOKEN is required for the telegram provider".to_string(),
            ));
        }

        Ok(Self {
            provider,
            bot_token,
            base_url,
        })
    }
}

/// Bot API service trait for different implementations.
#[async_trait::async_trait]
pub trait BotApiService: Send + Sync {
    /// Fetch public profile data for a chat id via `getChat`.
    async fn get_chat(&self, chat_id: i64) -> Result<ChatInfo, TelegramError>;
}

/// Factory for creating BotApiService implementations.
pub struct BotApiServiceFactory;

impl BotApiServiceFactory {
    /// Create a BotApiService based on configuration.
    pub fn create(config: BotApiConfig) -> Result<Box<dyn BotApiService>, TelegramError> {
        match config.provider.as_str() {
            "telegram" => {
                tracing::info!("Creating Telegram Bot API client");
                if config.bot_token.is_empty() {
                    return Err(TelegramError::Configuration(
                        "TELEGRAM_BOT_TOKEN is required for the telegram provider".to_string(),
                    ));
                }
                Ok(Box::new(client::BotApiClient::new(config)))
            }
            "mock" => {
                tracing::info!("Creating mock Bot API service");
                Ok(Box::new(mock::MockBotApiService::new()))
            }
            provider => Err(TelegramError::Configuration(format!(
                "Unknown Telegram provider: {}. Supported providers: telegram, mock",
                provider
            ))),
        }
    }
}
