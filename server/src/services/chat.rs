//! Chat service — one visitor message in, one model reply out.
//!
//! DESIGN
//! ======
//! The relay is single-turn: the tenant persona becomes the system
//! instructions and the visitor's message is the only input. No history is
//! kept and upstream failures are never retried.

use std::sync::Arc;

use serde_json::Value;
use tracing::{info, warn};
use uuid::Uuid;

use super::tenant::TenantConfig;
use crate::llm::LlmChat;
use crate::llm::types::{LlmError, Message};

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("LLM not configured")]
    LlmNotConfigured,
    #[error("message is required")]
    InvalidMessage,
    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),
}

/// Relay settings applied to every upstream call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChatSettings {
    pub max_output_tokens: u32,
}

impl Default for ChatSettings {
    fn default() -> Self {
        Self { max_output_tokens: crate::llm::config::DEFAULT_LLM_MAX_OUTPUT_TOKENS }
    }
}

// =============================================================================
// VALIDATION
// =============================================================================

/// Extract the visitor message from a request body.
///
/// Only a non-empty JSON string is accepted; whitespace is passed through
/// untouched.
///
/// # Errors
///
/// Returns [`ChatError::InvalidMessage`] when `message` is missing, not a
/// string, or empty.
pub fn extract_message(body: &Value) -> Result<&str, ChatError> {
    body.get("message")
        .and_then(Value::as_str)
        .filter(|m| !m.is_empty())
        .ok_or(ChatError::InvalidMessage)
}

// =============================================================================
// MAIN ENTRY POINT
// =============================================================================

/// Send `message` to the model under the tenant persona and return the reply
/// text (possibly empty).
///
/// # Errors
///
/// Returns [`ChatError::Llm`] if the upstream call fails.
pub async fn handle_message(
    llm: &Arc<dyn LlmChat>,
    settings: ChatSettings,
    request_id: Uuid,
    message: &str,
    tenant: &TenantConfig,
) -> Result<String, ChatError> {
    info!(%request_id, business = %tenant.business_name, message_len = message.len(), "chat: message received");

    let instructions = tenant.instructions();
    let messages = [Message::user(message)];
    let response = match llm
        .chat(settings.max_output_tokens, &instructions, &messages)
        .await
    {
        Ok(r) => r,
        Err(e) => {
            warn!(%request_id, error = %e, rate_limited = e.is_rate_limited(), "chat: upstream call failed");
            return Err(e.into());
        }
    };

    info!(
        %request_id,
        model = %response.model,
        stop_reason = %response.stop_reason,
        input_tokens = response.input_tokens,
        output_tokens = response.output_tokens,
        reply_len = response.text.len(),
        "chat: reply generated"
    );
    Ok(response.text)
}

#[cfg(test)]
#[path = "chat_test.rs"]
mod tests;
