//! LLM — upstream model adapter for the chat relay.
//!
//! DESIGN
//! ======
//! `LlmClient` wraps an OpenAI-compatible HTTP client configured from
//! environment variables. Route handlers only see the `LlmChat` trait, so
//! tests swap in a mock without touching the network.

pub mod config;
pub mod openai;
pub mod types;

use config::LlmConfig;
pub use types::LlmChat;
use types::{ChatResponse, LlmError, Message};

// =============================================================================
// CLIENT
// =============================================================================

/// Concrete LLM client backed by an OpenAI-compatible API.
///
/// Configured from environment variables by [`LlmClient::from_env`].
pub struct LlmClient {
    inner: openai::OpenAiClient,
    model: String,
    max_output_tokens: u32,
}

impl LlmClient {
    /// Build an LLM client from environment variables.
    ///
    /// See [`LlmConfig::from_env`] for the variables read.
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is missing or the HTTP client fails.
    pub fn from_env() -> Result<Self, LlmError> {
        let config = LlmConfig::from_env()?;
        Self::from_config(config)
    }

    /// Build an LLM client from a parsed typed config.
    ///
    /// # Errors
    ///
    /// Returns an error if the provider HTTP client fails to build.
    pub fn from_config(config: LlmConfig) -> Result<Self, LlmError> {
        let inner =
            openai::OpenAiClient::new(config.api_key, config.openai_mode, config.openai_base_url, config.timeouts)?;
        Ok(Self { inner, model: config.model, max_output_tokens: config.max_output_tokens })
    }

    /// Return the configured model name (e.g. `"gpt-4o-mini"`).
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Output token cap applied to every reply.
    #[must_use]
    pub fn max_output_tokens(&self) -> u32 {
        self.max_output_tokens
    }
}

#[async_trait::async_trait]
impl LlmChat for LlmClient {
    async fn chat(&self, max_tokens: u32, system: &str, messages: &[Message]) -> Result<ChatResponse, LlmError> {
        self.inner
            .chat(&self.model, max_tokens, system, messages)
            .await
    }
}
