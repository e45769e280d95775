//! HMAC verification of Telegram login payloads
//!
//! The widget signs the check string with `HMAC_SHA256(SHA256(bot_token))`.
//! Verification recomputes that digest and compares it against the supplied
//! `hash` in constant time. The verifier is pure: no I/O, no clock access,
//! and nothing sensitive is ever logged.

use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};

use crate::error::TelegramAuthError;
use crate::payload::{TelegramLoginPayload, TelegramUser};

type HmacSha256 = Hmac<Sha256>;

/// Length in bytes of an HMAC-SHA256 digest
const DIGEST_LEN: usize = 32;

/// Verifies that login payloads were signed by Telegram.
///
/// Holds only the SHA-256 derivation of the bot token; the raw token is
/// not retained. Cheap to clone and safe to share across concurrent
/// requests, since verification has no mutable state.
#[derive(Clone)]
pub struct LoginVerifier {
    secret_key: [u8; DIGEST_LEN],
}

impl std::fmt::Debug for LoginVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginVerifier")
            .field("secret_key", &"[REDACTED]")
            .finish()
    }
}

impl LoginVerifier {
    /// Create a verifier from the pre-shared bot token.
    ///
    /// An empty token is a deployment defect and fails here, before any
    /// payload is hashed.
    pub fn new(bot_token: &str) -> Result<Self, TelegramAuthError> {
        if bot_token.is_empty() {
            return Err(TelegramAuthError::Configuration(
                "Telegram bot token must not be empty".to_string(),
            ));
        }

        Ok(Self {
            secret_key: Sha256::digest(bot_token.as_bytes()).into(),
        })
    }

    /// Verify a login payload against the bot token.
    ///
    /// Returns the verified field set (payload minus `hash`) on success.
    /// Structurally malformed payloads fail with `InvalidPayload` before
    /// any digest is computed, so callers can distinguish garbage from
    /// forgery. A digest mismatch is terminal for that payload: identical
    /// input always reproduces the identical failure.
    pub fn verify(
        &self,
        payload: &TelegramLoginPayload,
    ) -> Result<TelegramUser, TelegramAuthError> {
        validate_structure(payload)?;

        let supplied = hex::decode(&payload.hash).map_err(|_| {
            TelegramAuthError::InvalidPayload("hash is not hex-encoded".to_string())
        })?;
        if supplied.len() != DIGEST_LEN {
            return Err(TelegramAuthError::InvalidPayload(format!(
                "hash must be {} bytes, got {}",
                DIGEST_LEN,
                supplied.len()
            )));
        }

        let mut mac = HmacSha256::new_from_slice(&self.secret_key).map_err(|_| {
            TelegramAuthError::Configuration("invalid HMAC key length".to_string())
        })?;
        mac.update(payload.check_string().as_bytes());

        // verify_slice compares in constant time
        mac.verify_slice(&supplied)
            .map_err(|_| TelegramAuthError::HashMismatch)?;

        Ok(payload.user())
    }
}

/// Structural checks on required fields; a failure here means the client
/// sent garbage, not that the payload was forged.
fn validate_structure(payload: &TelegramLoginPayload) -> Result<(), TelegramAuthError> {
    if payload.id <= 0 {
        return Err(TelegramAuthError::InvalidPayload(
            "id must be a positive integer".to_string(),
        ));
    }
    if payload.first_name.is_empty() {
        return Err(TelegramAuthError::InvalidPayload(
            "first_name must not be empty".to_string(),
        ));
    }
    if payload.auth_date <= 0 {
        return Err(TelegramAuthError::InvalidPayload(
            "auth_date must be a positive Unix timestamp".to_string(),
        ));
    }
    if payload.hash.is_empty() {
        return Err(TelegramAuthError::InvalidPayload(
            "hash must not be empty".to_string(),
        ));
    }
    Ok(())
}
