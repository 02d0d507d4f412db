use super::*;
use axum::Json;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use serde_json::json;
use std::sync::{Arc, Mutex};

// =============================================================================
// FAKE UPSTREAM
// =============================================================================

#[derive(Clone, Default)]
struct Captured {
    body: Arc<Mutex<Option<Value>>>,
    auth: Arc<Mutex<Option<String>>>,
}

/// Serve `reply` with `status` on `path` from an ephemeral local port and
/// return the base URL (`http://127.0.0.1:PORT/v1`).
async fn spawn_upstream(path: &'static str, status: StatusCode, reply: Value) -> (String, Captured) {
    let captured = Captured::default();
    let sink = captured.clone();
    let app = axum::Router::new().route(
        &format!("/v1{path}"),
        post(move |headers: HeaderMap, Json(body): Json<Value>| {
            let sink = sink.clone();
            let reply = reply.clone();
            async move {
                *sink.body.lock().unwrap() = Some(body);
                *sink.auth.lock().unwrap() = headers
                    .get("authorization")
                    .and_then(|v| v.to_str().ok())
                    .map(str::to_owned);
                (status, Json(reply))
            }
        }),
    );
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{addr}/v1"), captured)
}

fn client(base_url: String, mode: OpenAiApiMode) -> OpenAiClient {
    OpenAiClient::new("sk-test".into(), mode, base_url, LlmTimeouts { request_secs: 5, connect_secs: 5 }).unwrap()
}

// =============================================================================
// request building
// =============================================================================

#[test]
fn responses_input_single_user_message_is_bare_string() {
    let messages = vec![Message::user("hi there")];
    let input = build_responses_input(&messages);
    assert_eq!(serde_json::to_value(&input).unwrap(), json!("hi there"));
}

#[test]
fn responses_input_multiple_messages_are_items() {
    let messages = vec![
        Message::user("first"),
        Message { role: "assistant".into(), content: "second".into() },
    ];
    let input = serde_json::to_value(build_responses_input(&messages)).unwrap();
    assert_eq!(input[0]["type"], "message");
    assert_eq!(input[0]["role"], "user");
    assert_eq!(input[1]["role"], "assistant");
    assert_eq!(input[1]["content"], "second");
}

#[test]
fn chat_completions_messages_prepend_system() {
    let messages = vec![Message::user("hello")];
    let out = serde_json::to_value(build_chat_completions_messages("be nice", &messages)).unwrap();
    assert_eq!(out[0], json!({ "role": "system", "content": "be nice" }));
    assert_eq!(out[1], json!({ "role": "user", "content": "hello" }));
}

#[test]
fn chat_completions_messages_skip_blank_system() {
    let messages = vec![Message::user("hello")];
    let out = build_chat_completions_messages("  ", &messages);
    assert_eq!(out.len(), 1);
}

// =============================================================================
// chat completions parsing
// =============================================================================

#[test]
fn cc_parse_text_response() {
    let json = json!({
        "model": "gpt-4o-mini",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": "Hello!" },
            "finish_reason": "stop"
        }],
        "usage": { "prompt_tokens": 10, "completion_tokens": 5 }
    })
    .to_string();
    let resp = parse_chat_completions_response(&json).unwrap();
    assert_eq!(resp.text, "Hello!");
    assert_eq!(resp.stop_reason, "end_turn");
    assert_eq!(resp.input_tokens, 10);
    assert_eq!(resp.output_tokens, 5);
}

#[test]
fn cc_parse_length_finish_reason() {
    let json = json!({
        "choices": [{ "message": { "content": "trunc" }, "finish_reason": "length" }]
    })
    .to_string();
    let resp = parse_chat_completions_response(&json).unwrap();
    assert_eq!(resp.stop_reason, "max_tokens");
}

#[test]
fn cc_parse_null_content_is_empty_text() {
    let json = json!({
        "choices": [{ "message": { "role": "assistant", "content": null }, "finish_reason": "stop" }]
    })
    .to_string();
    let resp = parse_chat_completions_response(&json).unwrap();
    assert!(resp.text.is_empty());
}

#[test]
fn cc_parse_missing_choices() {
    let json = json!({ "model": "gpt-4o-mini", "choices": [] }).to_string();
    assert!(parse_chat_completions_response(&json).is_err());
}

// =============================================================================
// responses parsing
// =============================================================================

#[test]
fn resp_parse_text_response() {
    let json = json!({
        "model": "gpt-4o-mini",
        "output": [{
            "type": "message",
            "content": [{ "type": "output_text", "text": "Done!" }]
        }],
        "usage": { "input_tokens": 15, "output_tokens": 8 }
    })
    .to_string();
    let resp = parse_responses_response(&json).unwrap();
    assert_eq!(resp.text, "Done!");
    assert_eq!(resp.model, "gpt-4o-mini");
    assert_eq!(resp.stop_reason, "end_turn");
    assert_eq!(resp.input_tokens, 15);
}

#[test]
fn resp_parse_concatenates_parts_and_skips_reasoning() {
    let json = json!({
        "output": [
            { "type": "reasoning", "summary": [] },
            {
                "type": "message",
                "content": [
                    { "type": "output_text", "text": "Hello, " },
                    { "type": "refusal", "refusal": "no" },
                    { "type": "output_text", "text": "world." }
                ]
            }
        ]
    })
    .to_string();
    let resp = parse_responses_response(&json).unwrap();
    assert_eq!(resp.text, "Hello, world.");
}

#[test]
fn resp_parse_output_text_fallback() {
    let json = json!({
        "model": "gpt-4o-mini",
        "output_text": "Fallback text",
        "usage": { "input_tokens": 5, "output_tokens": 3 }
    })
    .to_string();
    let resp = parse_responses_response(&json).unwrap();
    assert_eq!(resp.text, "Fallback text");
}

#[test]
fn resp_parse_no_text_is_empty() {
    let json = json!({ "model": "gpt-4o-mini", "output": [] }).to_string();
    let resp = parse_responses_response(&json).unwrap();
    assert!(resp.text.is_empty());
}

#[test]
fn resp_parse_incomplete_max_tokens() {
    let json = json!({
        "output": [],
        "incomplete_details": { "reason": "max_output_tokens" }
    })
    .to_string();
    let resp = parse_responses_response(&json).unwrap();
    assert_eq!(resp.stop_reason, "max_tokens");
}

#[test]
fn resp_parse_invalid_json() {
    assert!(matches!(parse_responses_response("not json"), Err(LlmError::ApiParse(_))));
}

#[test]
fn resp_parse_non_object() {
    assert!(matches!(parse_responses_response("[1,2]"), Err(LlmError::ApiParse(_))));
}

// =============================================================================
// HTTP round trips against a fake upstream
// =============================================================================

#[tokio::test]
async fn responses_call_sends_expected_body() {
    let reply = json!({
        "model": "gpt-4o-mini",
        "output": [{ "type": "message", "content": [{ "type": "output_text", "text": "Hi!" }] }]
    });
    let (base, captured) = spawn_upstream("/responses", StatusCode::OK, reply).await;
    let client = client(base, OpenAiApiMode::Responses);

    let resp = client
        .chat("gpt-4o-mini", 300, "You are helpful.", &[Message::user("hello")])
        .await
        .unwrap();
    assert_eq!(resp.text, "Hi!");

    let body = captured.body.lock().unwrap().clone().unwrap();
    assert_eq!(body["model"], "gpt-4o-mini");
    assert_eq!(body["max_output_tokens"], 300);
    assert_eq!(body["instructions"], "You are helpful.");
    assert_eq!(body["input"], "hello");
    assert_eq!(captured.auth.lock().unwrap().as_deref(), Some("Bearer sk-test"));
}

#[tokio::test]
async fn chat_completions_call_sends_expected_body() {
    let reply = json!({
        "choices": [{ "message": { "role": "assistant", "content": "Hey" }, "finish_reason": "stop" }]
    });
    let (base, captured) = spawn_upstream("/chat/completions", StatusCode::OK, reply).await;
    let client = client(base, OpenAiApiMode::ChatCompletions);

    let resp = client
        .chat("gpt-4o-mini", 128, "sys", &[Message::user("yo")])
        .await
        .unwrap();
    assert_eq!(resp.text, "Hey");

    let body = captured.body.lock().unwrap().clone().unwrap();
    assert_eq!(body["max_tokens"], 128);
    assert_eq!(body["messages"][0]["role"], "system");
    assert_eq!(body["messages"][1]["content"], "yo");
}

#[tokio::test]
async fn upstream_429_surfaces_status() {
    let reply = json!({ "error": { "code": "insufficient_quota", "message": "You exceeded your quota." } });
    let (base, _) = spawn_upstream("/responses", StatusCode::TOO_MANY_REQUESTS, reply).await;
    let client = client(base, OpenAiApiMode::Responses);

    let err = client
        .chat("gpt-4o-mini", 300, "", &[Message::user("hello")])
        .await
        .unwrap_err();
    assert!(err.is_rate_limited());
    assert!(matches!(err, LlmError::ApiResponse { status: 429, ref body } if body.contains("insufficient_quota")));
}

#[tokio::test]
async fn upstream_500_surfaces_status() {
    let (base, _) = spawn_upstream("/responses", StatusCode::INTERNAL_SERVER_ERROR, json!({})).await;
    let client = client(base, OpenAiApiMode::Responses);

    let err = client
        .chat("gpt-4o-mini", 300, "", &[Message::user("hello")])
        .await
        .unwrap_err();
    assert!(matches!(err, LlmError::ApiResponse { status: 500, .. }));
    assert!(!err.is_rate_limited());
}

#[tokio::test]
async fn unreachable_upstream_is_request_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let client = client(format!("http://{addr}/v1"), OpenAiApiMode::Responses);

    let err = client
        .chat("gpt-4o-mini", 300, "", &[Message::user("hello")])
        .await
        .unwrap_err();
    assert!(matches!(err, LlmError::ApiRequest(_)));
}
