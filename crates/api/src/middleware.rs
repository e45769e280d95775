//! Application state shared across handlers

use std::sync::Arc;

use cercooffro_auth::{FreshnessPolicy, LoginVerifier, SessionSigner};
use cercooffro_telegram::BotApiService;

/// Application state for the login API.
///
/// Everything here is read-only after startup, so cloning per-request is
/// cheap and verification needs no synchronization.
#[derive(Clone)]
pub struct AppState {
    pub verifier: LoginVerifier,
    pub freshness: FreshnessPolicy,
    pub sessions: SessionSigner,
    pub telegram: Arc<dyn BotApiService>,
}
