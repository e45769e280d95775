//! Telegram login verification for the CercoOffro API
//!
//! Provides HMAC verification of Telegram login-widget payloads, a replay
//! freshness policy, and session token issuance for verified users.

mod error;
mod freshness;
mod payload;
mod session;
mod verifier;

pub use error::TelegramAuthError;
pub use freshness::FreshnessPolicy;
pub use payload::{TelegramLoginPayload, TelegramUser};
pub use session::{SessionClaims, SessionSigner};
pub use verifier::LoginVerifier;
