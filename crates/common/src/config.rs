//! Configuration management following 12-factor app principles
//!
//! All configuration is loaded from environment variables to ensure
//! clean separation between code and config.

use anyhow::Result;
use std::env;

/// Default replay window for Telegram login payloads (24 hours).
const DEFAULT_LOGIN_MAX_AGE_SECS: i64 = 86_400;

/// Default lifetime for issued session tokens (60 minutes).
const DEFAULT_SESSION_TTL_SECS: i64 = 3_600;

#[derive(Clone)]
pub struct Config {
    /// Telegram bot token; HMAC key material and Bot API credential
    pub telegram_bot_token: String,

    /// Bot API provider ("telegram" or "mock")
    pub telegram_provider: String,

    /// Bot API base URL (overridable for tests)
    pub telegram_api_base_url: String,

    /// Secret for signing session tokens
    pub session_secret: String,

    /// Maximum accepted age of a login payload's auth_date, in seconds
    pub login_max_age_secs: i64,

    /// Lifetime of issued session tokens, in seconds
    pub session_ttl_secs: i64,

    /// Runtime configuration
    pub log_level: String,
    pub rust_log: String,
    pub port: u16,
}

// The bot token and session secret must never reach logs, so Debug is
// written by hand instead of derived.
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("telegram_bot_token", &"[REDACTED]")
            .field("telegram_provider", &self.telegram_provider)
            .field("telegram_api_base_url", &self.telegram_api_base_url)
            .field("session_secret", &"[REDACTED]")
            .field("login_max_age_secs", &self.login_max_age_secs)
            .field("session_ttl_secs", &self.session_ttl_secs)
            .field("log_level", &self.log_level)
            .field("rust_log", &self.rust_log)
            .field("port", &self.port)
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if it exists

        let config = Self {
            telegram_bot_token: env::var("TELEGRAM_BOT_TOKEN")
                .map_err(|_| anyhow::anyhow!("TELEGRAM_BOT_TOKEN is required"))?,

            telegram_provider: env::var("TELEGRAM_PROVIDER")
                .unwrap_or_else(|_| "telegram".to_string()),
            telegram_api_base_url: env::var("TELEGRAM_API_BASE_URL")
                .unwrap_or_else(|_| "https://api.telegram.org".to_string()),

            session_secret: env::var("SESSION_SECRET")
                .map_err(|_| anyhow::anyhow!("SESSION_SECRET is required"))?,

            login_max_age_secs: env::var("LOGIN_MAX_AGE_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_LOGIN_MAX_AGE_SECS),
            session_ttl_secs: env::var("SESSION_TTL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_SESSION_TTL_SECS),

            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            rust_log: env::var("RUST_LOG").unwrap_or_else(|_| "cercooffro=debug".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .unwrap_or(3000),
        };

        Ok(config)
    }
}
