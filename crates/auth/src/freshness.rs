//! Replay freshness policy for login payloads
//!
//! A captured-but-valid payload verifies forever, so callers bound the
//! accepted age of `auth_date`. The window is a deployment decision and
//! lives outside `LoginVerifier`; the check itself is clock-free and the
//! caller supplies `now`.

use chrono::{DateTime, Utc};

use crate::error::TelegramAuthError;
use crate::payload::TelegramLoginPayload;

/// Bounded acceptance window for `auth_date`.
#[derive(Debug, Clone, Copy)]
pub struct FreshnessPolicy {
    max_age_secs: i64,
}

impl FreshnessPolicy {
    pub fn new(max_age_secs: i64) -> Self {
        Self {
            max_age_secs: max_age_secs.max(0),
        }
    }

    pub fn max_age_secs(&self) -> i64 {
        self.max_age_secs
    }

    /// Reject payloads older than the window.
    ///
    /// Applied after HMAC verification so that unsigned payloads cannot
    /// probe the window. A slightly future `auth_date` (clock skew) is
    /// accepted.
    pub fn check(
        &self,
        payload: &TelegramLoginPayload,
        now: DateTime<Utc>,
    ) -> Result<(), TelegramAuthError> {
        let issued = DateTime::from_timestamp(payload.auth_date, 0).ok_or_else(|| {
            TelegramAuthError::InvalidPayload("auth_date is out of range".to_string())
        })?;

        let age_secs = now.signed_duration_since(issued).num_seconds();
        if age_secs > self.max_age_secs {
            return Err(TelegramAuthError::LoginExpired);
        }

        Ok(())
    }
}
