//! Chat route — `POST /api/chat`.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

use super::ApiError;
use crate::services::chat::{self, ChatError};
use crate::services::tenant::TenantConfig;
use crate::state::AppState;

pub const MISSING_API_KEY_MESSAGE: &str = "Missing OPENAI_API_KEY.";
pub const INVALID_MESSAGE_MESSAGE: &str = "Message is required.";
pub const RATE_LIMITED_MESSAGE: &str = "The assistant is receiving too many requests. Please try again later.";
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error.";

#[derive(Debug, Serialize)]
pub struct ChatReply {
    pub reply: String,
}

/// Map a chat service error to its HTTP status.
pub(crate) fn chat_error_to_status(err: &ChatError) -> StatusCode {
    match err {
        ChatError::InvalidMessage => StatusCode::BAD_REQUEST,
        ChatError::Llm(e) if e.is_rate_limited() => StatusCode::TOO_MANY_REQUESTS,
        ChatError::LlmNotConfigured | ChatError::Llm(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Client-facing text for a chat service error. Upstream detail stays in logs.
pub(crate) fn chat_error_message(err: &ChatError) -> &'static str {
    match err {
        ChatError::LlmNotConfigured => MISSING_API_KEY_MESSAGE,
        ChatError::InvalidMessage => INVALID_MESSAGE_MESSAGE,
        ChatError::Llm(e) if e.is_rate_limited() => RATE_LIMITED_MESSAGE,
        ChatError::Llm(_) => INTERNAL_ERROR_MESSAGE,
    }
}

impl From<ChatError> for ApiError {
    fn from(err: ChatError) -> Self {
        Self::new(chat_error_to_status(&err), chat_error_message(&err))
    }
}

/// `POST /api/chat`: relay one visitor message to the model.
///
/// The LLM check runs before the body is looked at, so an unconfigured
/// server answers 500 even for malformed requests.
pub async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<ChatReply>, ApiError> {
    let request_id = Uuid::new_v4();

    let Some(llm) = state.llm.as_ref() else {
        tracing::error!(%request_id, "chat: LLM client not configured");
        return Err(ChatError::LlmNotConfigured.into());
    };

    let body = match payload {
        Ok(Json(body)) => body,
        Err(rejection) => {
            tracing::debug!(%request_id, error = %rejection, "chat: rejected request body");
            return Err(ChatError::InvalidMessage.into());
        }
    };
    let message = chat::extract_message(&body)?;
    let tenant = TenantConfig::from_value(body.get("config"));

    let reply = chat::handle_message(llm, state.chat, request_id, message, &tenant).await?;
    Ok(Json(ChatReply { reply }))
}

#[cfg(test)]
#[path = "chat_test.rs"]
mod tests;
