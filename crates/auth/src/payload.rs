//! Telegram login-widget payload model
//!
//! The widget posts a flat object of user fields plus a `hash` digest over
//! the other fields. The check string the digest covers is serialized here
//! with a hard-coded sorted field order, which makes the wire format an
//! explicit contract instead of an artifact of object iteration order.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Untrusted login assertion received from the Telegram widget.
///
/// `hash` is the hex-encoded HMAC-SHA256 digest supplied by the widget,
/// covering every other field. It is excluded from the check string.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TelegramLoginPayload {
    /// Telegram user identifier
    #[validate(range(min = 1))]
    pub id: i64,

    #[validate(length(min = 1, max = 255))]
    pub first_name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(url)]
    pub photo_url: Option<String>,

    /// Unix timestamp of when Telegram issued the assertion
    #[validate(range(min = 1))]
    pub auth_date: i64,

    /// Hex-encoded HMAC-SHA256 digest (64 chars)
    #[validate(length(equal = 64))]
    pub hash: String,
}

impl TelegramLoginPayload {
    /// Build the check string the widget's digest covers.
    ///
    /// Fields are enumerated in ascending ASCII key order (`auth_date`,
    /// `first_name`, `id`, `last_name`, `photo_url`, `username`) as
    /// `key=value` pairs joined with `\n` and no trailing separator.
    /// Absent optional fields are omitted entirely, matching a widget
    /// payload that never carried them. `hash` never appears here.
    pub fn check_string(&self) -> String {
        let mut pairs: Vec<String> = Vec::with_capacity(6);
        pairs.push(format!("auth_date={}", self.auth_date));
        pairs.push(format!("first_name={}", self.first_name));
        pairs.push(format!("id={}", self.id));
        if let Some(last_name) = &self.last_name {
            pairs.push(format!("last_name={}", last_name));
        }
        if let Some(photo_url) = &self.photo_url {
            pairs.push(format!("photo_url={}", photo_url));
        }
        if let Some(username) = &self.username {
            pairs.push(format!("username={}", username));
        }
        pairs.join("\n")
    }

    /// The verified field set, i.e. the payload minus `hash`.
    pub fn user(&self) -> TelegramUser {
        TelegramUser {
            id: self.id,
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            username: self.username.clone(),
            photo_url: self.photo_url.clone(),
            auth_date: self.auth_date,
        }
    }
}

/// A Telegram user whose login payload passed verification.
///
/// Handed to callers for session creation; never contains the digest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TelegramUser {
    pub id: i64,
    pub first_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    pub auth_date: i64,
}
