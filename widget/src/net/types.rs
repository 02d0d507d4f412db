//! Wire types for the chat relay API.

use serde::{Deserialize, Serialize};

pub const UNKNOWN_ERROR_TEXT: &str = "Unknown error.";

/// Body of `POST /api/chat`. The tenant config is forwarded untouched.
#[derive(Debug, Serialize)]
pub struct ChatRequest<'a> {
    pub message: &'a str,
    pub config: &'a serde_json::Value,
}

/// Body of any `/api/chat` response: `{ reply }` on success, `{ error }`
/// otherwise.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ChatReply {
    #[serde(default)]
    pub reply: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ChatReply {
    /// Text to show in the bot bubble: the reply, else the server's error,
    /// else a generic fallback. Empty strings count as absent.
    #[must_use]
    pub fn display_text(&self) -> &str {
        [self.reply.as_deref(), self.error.as_deref()]
            .into_iter()
            .flatten()
            .find(|s| !s.is_empty())
            .unwrap_or(UNKNOWN_ERROR_TEXT)
    }
}

/// Why a widget request did not produce a response body.
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    #[error("request timed out")]
    Timeout,
    #[error("network error: {0}")]
    Network(String),
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("response decode failed: {0}")]
    Decode(String),
    #[error("not available outside the browser")]
    Unavailable,
}

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;
