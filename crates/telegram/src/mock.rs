//! Mock Bot API Service Implementation
//!
//! Records requested chat ids and returns a programmable response so
//! handler and integration tests never touch the network.
//! Thread-safe via `Arc<Mutex<>>`.

use crate::{BotApiService, ChatInfo, TelegramError};
use std::sync::{Arc, Mutex};

/// Mock Bot API service with programmable behavior.
#[derive(Debug, Clone)]
pub struct MockBotApiService {
    requests: Arc<Mutex<Vec<i64>>>,
    chat: Arc<Mutex<Option<ChatInfo>>>,
    fail_with: Arc<Mutex<Option<String>>>,
}

impl MockBotApiService {
    /// Create a new mock Bot API service.
    pub fn new() -> Self {
        Self {
            requests: Arc::new(Mutex::new(Vec::new())),
            chat: Arc::new(Mutex::new(None)),
            fail_with: Arc::new(Mutex::new(None)),
        }
    }

    /// Program the `ChatInfo` returned for subsequent calls.
    pub fn set_chat(&self, chat: ChatInfo) {
        *self
            .chat
            .lock()
            .expect("chat lock poisoned — prior test panicked") = Some(chat);
    }

    /// Program subsequent calls to fail with a response error.
    pub fn set_failure(&self, message: &str) {
        *self
            .fail_with
            .lock()
            .expect("failure lock poisoned — prior test panicked") = Some(message.to_string());
    }

    /// Return all recorded chat id requests.
    pub fn recorded_requests(&self) -> Vec<i64> {
        self.requests
            .lock()
            .expect("requests lock poisoned — prior test panicked")
            .clone()
    }

    /// Clear recorded requests and programmed behavior.
    pub fn reset(&self) {
        self.requests
            .lock()
            .expect("requests lock poisoned — prior test panicked")
            .clear();
        *self
            .chat
            .lock()
            .expect("chat lock poisoned — prior test panicked") = None;
        *self
            .fail_with
            .lock()
            .expect("failure lock poisoned — prior test panicked") = None;
    }
}

impl Default for MockBotApiService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl BotApiService for MockBotApiService {
    async fn get_chat(&self, chat_id: i64) -> Result<ChatInfo, TelegramError> {
        tracing::debug!(chat_id, "Mock Bot API: recording getChat");
        self.requests
            .lock()
            .map_err(|e| TelegramError::Request(format!("requests lock poisoned: {e}")))?
            .push(chat_id);

        if let Some(message) = self
            .fail_with
            .lock()
            .map_err(|e| TelegramError::Request(format!("failure lock poisoned: {e}")))?
            .clone()
        {
            return Err(TelegramError::Response(message));
        }

        let programmed = self
            .chat
            .lock()
            .map_err(|e| TelegramError::Request(format!("chat lock poisoned: {e}")))?
            .clone();

        Ok(programmed.unwrap_or(ChatInfo {
            id: chat_id,
            first_name: None,
            last_name: None,
            username: None,
            bio: None,
        }))
    }
}
