//! OpenAI-compatible API client.
//!
//! Supports both `/v1/responses` (default) and `/v1/chat/completions`, so the
//! relay can point at any OpenAI-compatible gateway via `LLM_OPENAI_BASE_URL`.

use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

use super::config::{LlmTimeouts, OpenAiApiMode};
use super::types::{ChatResponse, LlmError, Message};

pub struct OpenAiClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
    mode: OpenAiApiMode,
}

impl OpenAiClient {
    /// # Errors
    ///
    /// Returns [`LlmError::HttpClientBuild`] if the reqwest client cannot be
    /// constructed (e.g. TLS backend initialization failure).
    pub fn new(api_key: String, mode: OpenAiApiMode, base_url: String, timeouts: LlmTimeouts) -> Result<Self, LlmError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeouts.request_secs))
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .build()
            .map_err(|e| LlmError::HttpClientBuild(e.to_string()))?;
        let base_url = base_url.trim_end_matches('/').to_string();
        Ok(Self { http, api_key, base_url, mode })
    }

    pub async fn chat(
        &self,
        model: &str,
        max_tokens: u32,
        system: &str,
        messages: &[Message],
    ) -> Result<ChatResponse, LlmError> {
        match self.mode {
            OpenAiApiMode::ChatCompletions => self.chat_completions(model, max_tokens, system, messages).await,
            OpenAiApiMode::Responses => self.responses(model, max_tokens, system, messages).await,
        }
    }

    async fn chat_completions(
        &self,
        model: &str,
        max_tokens: u32,
        system: &str,
        messages: &[Message],
    ) -> Result<ChatResponse, LlmError> {
        let msgs = build_chat_completions_messages(system, messages);
        let body = CcRequest { model, max_tokens, messages: &msgs };
        let text = self.send_json("/chat/completions", &body).await?;
        parse_chat_completions_response(&text)
    }

    async fn responses(
        &self,
        model: &str,
        max_tokens: u32,
        system: &str,
        messages: &[Message],
    ) -> Result<ChatResponse, LlmError> {
        let input = build_responses_input(messages);
        let body = RespRequest { model, max_output_tokens: max_tokens, instructions: system, input: &input };
        let text = self.send_json("/responses", &body).await?;
        parse_responses_response(&text)
    }

    async fn send_json(&self, path: &str, body: &impl Serialize) -> Result<String, LlmError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .http
            .post(url)
            .bearer_auth(&self.api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| LlmError::ApiRequest(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| LlmError::ApiRequest(e.to_string()))?;
        if status != 200 {
            return Err(LlmError::ApiResponse { status, body: text });
        }
        Ok(text)
    }
}

// =============================================================================
// CHAT COMPLETIONS — wire types
// =============================================================================

#[derive(Serialize)]
struct CcRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: &'a [CcMessage<'a>],
}

#[derive(Debug, Serialize)]
pub(crate) struct CcMessage<'a> {
    role: &'a str,
    content: &'a str,
}

pub(crate) fn build_chat_completions_messages<'a>(system: &'a str, messages: &'a [Message]) -> Vec<CcMessage<'a>> {
    let mut out = Vec::with_capacity(messages.len() + 1);
    if !system.trim().is_empty() {
        out.push(CcMessage { role: "system", content: system });
    }
    out.extend(
        messages
            .iter()
            .map(|m| CcMessage { role: &m.role, content: &m.content }),
    );
    out
}

// =============================================================================
// RESPONSES — wire types
// =============================================================================

#[derive(Serialize)]
struct RespRequest<'a> {
    model: &'a str,
    max_output_tokens: u32,
    instructions: &'a str,
    input: &'a RespInput<'a>,
}

/// A lone user message goes out as a bare string, matching the simplest form
/// of the Responses API. Anything longer becomes a list of message items.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub(crate) enum RespInput<'a> {
    Text(&'a str),
    /// Encoding for multi-message slices accepted by `LlmChat::chat`. The chat
    /// relay itself always sends a single user message.
    Items(Vec<RespInputItem<'a>>),
}

#[derive(Debug, Serialize)]
pub(crate) struct RespInputItem<'a> {
    #[serde(rename = "type")]
    item_type: &'static str,
    role: &'a str,
    content: &'a str,
}

pub(crate) fn build_responses_input(messages: &[Message]) -> RespInput<'_> {
    match messages {
        [only] if only.role == "user" => RespInput::Text(&only.content),
        _ => RespInput::Items(
            messages
                .iter()
                .map(|m| RespInputItem { item_type: "message", role: &m.role, content: &m.content })
                .collect(),
        ),
    }
}

// =============================================================================
// RESPONSE PARSING
// =============================================================================

pub(crate) fn parse_chat_completions_response(json_text: &str) -> Result<ChatResponse, LlmError> {
    let root: Value = serde_json::from_str(json_text).map_err(|e| LlmError::ApiParse(e.to_string()))?;
    let model = root
        .get("model")
        .and_then(Value::as_str)
        .map(str::to_owned)
        .unwrap_or_default();
    let input_tokens = usage_field(&root, "prompt_tokens");
    let output_tokens = usage_field(&root, "completion_tokens");

    let Some(choice) = root
        .get("choices")
        .and_then(Value::as_array)
        .and_then(|arr| arr.first())
    else {
        return Err(LlmError::ApiParse("chat_completions: missing choices[0]".to_string()));
    };
    let text = choice
        .get("message")
        .and_then(|m| m.get("content"))
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    let stop_reason = match choice.get("finish_reason").and_then(Value::as_str) {
        Some("length") => "max_tokens",
        _ => "end_turn",
    };

    Ok(ChatResponse { text, model, stop_reason: stop_reason.to_string(), input_tokens, output_tokens })
}

pub(crate) fn parse_responses_response(json_text: &str) -> Result<ChatResponse, LlmError> {
    let root: Value = serde_json::from_str(json_text).map_err(|e| LlmError::ApiParse(e.to_string()))?;
    if !root.is_object() {
        return Err(LlmError::ApiParse("responses: body is not an object".to_string()));
    }
    let model = root
        .get("model")
        .and_then(Value::as_str)
        .map(str::to_owned)
        .unwrap_or_default();
    let input_tokens = usage_field(&root, "input_tokens");
    let output_tokens = usage_field(&root, "output_tokens");

    let mut text = String::new();
    if let Some(items) = root.get("output").and_then(Value::as_array) {
        for item in items {
            if item.get("type").and_then(Value::as_str) != Some("message") {
                continue;
            }
            let Some(parts) = item.get("content").and_then(Value::as_array) else {
                continue;
            };
            for part in parts {
                let kind = part.get("type").and_then(Value::as_str);
                let Some(t) = part.get("text").and_then(Value::as_str) else {
                    continue;
                };
                if matches!(kind, Some("output_text" | "text")) {
                    text.push_str(t);
                }
            }
        }
    }
    if text.is_empty() {
        if let Some(output_text) = root.get("output_text").and_then(Value::as_str) {
            text.push_str(output_text);
        }
    }

    let stop_reason = if root
        .get("incomplete_details")
        .and_then(|d| d.get("reason"))
        .and_then(Value::as_str)
        == Some("max_output_tokens")
    {
        "max_tokens"
    } else {
        "end_turn"
    };

    Ok(ChatResponse { text, model, stop_reason: stop_reason.to_string(), input_tokens, output_tokens })
}

fn usage_field(root: &Value, key: &str) -> u64 {
    root.get("usage")
        .and_then(|u| u.get(key))
        .and_then(Value::as_u64)
        .unwrap_or(0)
}

#[cfg(test)]
#[path = "openai_test.rs"]
mod tests;
