//! CercoOffro login service composition root
//!
//! Wires configuration into the verifier, freshness policy, session
//! signer, and Bot API service, and composes the API router.

use std::sync::Arc;

use axum::Router;
use cercooffro_api::AppState;
use cercooffro_auth::{FreshnessPolicy, LoginVerifier, SessionSigner};
use cercooffro_common::Config;
use cercooffro_telegram::{BotApiConfig, BotApiServiceFactory};

/// Create the main application router with all routes and middleware.
///
/// Configuration defects (empty bot token or session secret) fail here,
/// at startup, so a misconfigured deployment never serves the login route.
pub async fn create_app(config: Config) -> Result<Router, anyhow::Error> {
    let verifier = LoginVerifier::new(&config.telegram_bot_token)?;
    let freshness = FreshnessPolicy::new(config.login_max_age_secs);
    let sessions = SessionSigner::new(&config.session_secret, config.session_ttl_secs)?;

    let telegram = BotApiServiceFactory::create(BotApiConfig {
        provider: config.telegram_provider.clone(),
        bot_token: config.telegram_bot_token.clone(),
        base_url: config.telegram_api_base_url.clone(),
    })?;

    let state = AppState {
        verifier,
        freshness,
        sessions,
        telegram: Arc::from(telegram),
    };

    // Build router — API routes plus shared infrastructure routes
    let app = Router::new()
        .route("/health", axum::routing::get(health_check))
        .route(
            "/",
            axum::routing::get(|| async { "CercoOffro Login API v0.0.1-SNAPSHOT" }),
        )
        .merge(cercooffro_api::routes::create_routes())
        .with_state(state);

    Ok(app)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
