//! Session token issuance for verified users
//!
//! After a payload passes HMAC verification the service hands the client a
//! short-lived HS256 bearer token. The subject is the Telegram user id.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::error::TelegramAuthError;
use crate::payload::TelegramUser;

/// Claims carried by an issued session token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Telegram user id, decimal string
    pub sub: String,
    pub first_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    pub iat: u64,
    pub exp: u64,
}

/// Signs and decodes session tokens with a shared HS256 secret.
#[derive(Clone)]
pub struct SessionSigner {
    secret: String,
    ttl: Duration,
}

impl std::fmt::Debug for SessionSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionSigner")
            .field("secret", &"[REDACTED]")
            .field("ttl", &self.ttl)
            .finish()
    }
}

impl SessionSigner {
    /// Create a signer. An empty secret is a deployment defect.
    pub fn new(secret: &str, ttl_secs: i64) -> Result<Self, TelegramAuthError> {
        if secret.is_empty() {
            return Err(TelegramAuthError::Configuration(
                "session secret must not be empty".to_string(),
            ));
        }

        Ok(Self {
            secret: secret.to_string(),
            ttl: Duration::seconds(ttl_secs.max(0)),
        })
    }

    /// Issue a token for a verified user. `now` is supplied by the caller
    /// so issuance stays deterministic under test.
    pub fn issue(
        &self,
        user: &TelegramUser,
        now: DateTime<Utc>,
    ) -> Result<String, TelegramAuthError> {
        let claims = SessionClaims {
            sub: user.id.to_string(),
            first_name: user.first_name.clone(),
            username: user.username.clone(),
            iat: now.timestamp() as u64,
            exp: (now + self.ttl).timestamp() as u64,
        };

        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.secret.as_ref()),
        )
        .map_err(|e| TelegramAuthError::SessionSigning(e.to_string()))
    }

    /// Decode and validate a previously issued token.
    pub fn decode(&self, token: &str) -> Result<SessionClaims, TelegramAuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_aud = false;

        let token_data = decode::<SessionClaims>(
            token,
            &DecodingKey::from_secret(self.secret.as_ref()),
            &validation,
        )
        .map_err(|e| {
            tracing::debug!(error = %e, "Session token validation failed");
            TelegramAuthError::SessionSigning(e.to_string())
        })?;

        Ok(token_data.claims)
    }
}
