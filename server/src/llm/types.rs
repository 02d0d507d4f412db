//! LLM types — provider-neutral message types and errors.
//!
//! Shared between the `OpenAI` client and the chat service. The relay only
//! ever sends one system prompt plus one user message, so content is plain
//! text rather than structured blocks.

// =============================================================================
// ERROR
// =============================================================================

/// Failure modes of an upstream model call.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    /// An `LLM_*` environment variable held an unusable value.
    #[error("config parse failed: {0}")]
    ConfigParse(String),

    /// The API key variable is unset or blank.
    #[error("missing API key: env var {var} not set")]
    MissingApiKey { var: String },

    /// Transport failure: DNS, connect, TLS or timeout.
    #[error("API request failed: {0}")]
    ApiRequest(String),

    /// Upstream answered with a status other than 200.
    #[error("API response error: status {status}")]
    ApiResponse { status: u16, body: String },

    /// Upstream body was not the JSON shape we expect.
    #[error("API response parse failed: {0}")]
    ApiParse(String),

    /// `reqwest::Client` construction failed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

impl LlmError {
    /// `true` when the provider rejected the call for rate or quota reasons.
    ///
    /// `OpenAI` reports both request-rate limits and exhausted billing quota
    /// (`insufficient_quota`) as HTTP 429.
    #[must_use]
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Self::ApiResponse { status: 429, .. })
    }

    /// `true` when the client could not start because no API key is set, as
    /// opposed to some other configuration value being invalid.
    #[must_use]
    pub fn is_missing_api_key(&self) -> bool {
        matches!(self, Self::MissingApiKey { .. })
    }
}

// =============================================================================
// MESSAGE TYPES
// =============================================================================

/// One input message; the relay only ever sends a single user turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub role: String,
    pub content: String,
}

impl Message {
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self { role: "user".into(), content: content.into() }
    }
}

/// Text and usage returned by one model call.
#[derive(Debug, Clone, Default)]
pub struct ChatResponse {
    /// Concatenated text output. Empty when the model produced none.
    pub text: String,
    pub model: String,
    pub stop_reason: String,
    pub input_tokens: u64,
    pub output_tokens: u64,
}

// =============================================================================
// LLM CHAT TRAIT
// =============================================================================

/// Provider-neutral async trait for LLM chat. Enables mocking in tests.
#[async_trait::async_trait]
pub trait LlmChat: Send + Sync {
    /// Send a chat request to the LLM provider.
    ///
    /// # Errors
    ///
    /// Returns an [`LlmError`] if the request fails or the response is
    /// malformed.
    async fn chat(&self, max_tokens: u32, system: &str, messages: &[Message]) -> Result<ChatResponse, LlmError>;
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
