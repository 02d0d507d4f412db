//! REST helpers for the tenant config and the chat relay.
//!
//! Browser (`csr`): real HTTP calls via `gloo-net`. Each request races a
//! `gloo-timers` sleep; on timeout the fetch is aborted through its
//! `AbortController`.
//! Native builds: stubs returning [`RequestError::Unavailable`] so the crate
//! compiles and unit-tests without a browser.
//!
//! ERROR HANDLING
//! ==============
//! Nothing here panics. Every failure ends as a [`SendOutcome`] that the
//! widget turns into a bot bubble.

#![allow(clippy::unused_async)]

use leptos::prelude::*;
use serde_json::Value;

use super::types::{ChatReply, RequestError};
use crate::options::WidgetOptions;
use crate::state::widget::{SendOutcome, WidgetState};

/// Fetch the tenant config JSON, bypassing the HTTP cache.
///
/// # Errors
///
/// Returns a [`RequestError`] on timeout, network failure, non-2xx status,
/// or an unparsable body.
pub async fn load_config(url: &str, timeout_ms: u32) -> Result<Value, RequestError> {
    #[cfg(feature = "csr")]
    {
        let controller = abort_controller()?;
        let request = gloo_net::http::Request::get(url)
            .cache(web_sys::RequestCache::NoStore)
            .abort_signal(Some(&controller.signal()));
        with_timeout(timeout_ms, &controller, async move {
            let resp = request
                .send()
                .await
                .map_err(|e| RequestError::Network(e.to_string()))?;
            if !resp.ok() {
                return Err(RequestError::Status(resp.status()));
            }
            resp.json::<Value>()
                .await
                .map_err(|e| RequestError::Decode(e.to_string()))
        })
        .await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (url, timeout_ms);
        Err(RequestError::Unavailable)
    }
}

/// `POST` one message plus the tenant config to the chat endpoint.
///
/// Error statuses still carry a `{ "error": ... }` body, so the body is
/// decoded regardless of status.
///
/// # Errors
///
/// Returns a [`RequestError`] on timeout, network failure, or an unparsable
/// body.
pub async fn post_chat(url: &str, message: &str, config: &Value, timeout_ms: u32) -> Result<ChatReply, RequestError> {
    #[cfg(feature = "csr")]
    {
        let controller = abort_controller()?;
        let body = super::types::ChatRequest { message, config };
        let request = gloo_net::http::Request::post(url)
            .abort_signal(Some(&controller.signal()))
            .json(&body)
            .map_err(|e| RequestError::Network(e.to_string()))?;
        with_timeout(timeout_ms, &controller, async move {
            let resp = request
                .send()
                .await
                .map_err(|e| RequestError::Network(e.to_string()))?;
            resp.json::<ChatReply>()
                .await
                .map_err(|e| RequestError::Decode(e.to_string()))
        })
        .await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (url, message, config, timeout_ms);
        Err(RequestError::Unavailable)
    }
}

/// Run one send: load and cache the tenant config if needed, then relay the
/// message. State transitions for the config fetch are applied to `state`;
/// the caller applies the returned outcome.
pub async fn send_message(options: &WidgetOptions, state: RwSignal<WidgetState>, text: &str) -> SendOutcome {
    let cached = state.with_untracked(|s| s.config.clone());
    let config = if let Some(config) = cached {
        config
    } else {
        state.update(WidgetState::begin_config_load);
        match load_config(&options.config_url, options.request_timeout_ms).await {
            Ok(config) => {
                state.update(|s| s.store_config(config.clone()));
                config
            }
            Err(e) => {
                log::warn!("chat widget: config load from {} failed: {e}", options.config_url);
                return failure_outcome(&e);
            }
        }
    };

    let result = post_chat(&options.chat_url(), text, &config, options.request_timeout_ms).await;
    if let Err(e) = &result {
        log::warn!("chat widget: chat request failed: {e}");
    }
    chat_outcome(result)
}

/// Map a chat request result to what the widget shows.
pub(crate) fn chat_outcome(result: Result<ChatReply, RequestError>) -> SendOutcome {
    match result {
        Ok(reply) => SendOutcome::Answered(reply.display_text().to_owned()),
        Err(e) => failure_outcome(&e),
    }
}

fn failure_outcome(err: &RequestError) -> SendOutcome {
    match err {
        RequestError::Timeout => SendOutcome::TimedOut,
        _ => SendOutcome::Failed,
    }
}

#[cfg(feature = "csr")]
fn abort_controller() -> Result<web_sys::AbortController, RequestError> {
    web_sys::AbortController::new().map_err(|_| RequestError::Network("AbortController unavailable".to_owned()))
}

/// Resolve `fut`, or abort it via `controller` once `timeout_ms` elapses.
#[cfg(feature = "csr")]
async fn with_timeout<T>(
    timeout_ms: u32,
    controller: &web_sys::AbortController,
    fut: impl std::future::Future<Output = Result<T, RequestError>>,
) -> Result<T, RequestError> {
    use futures::future::{Either, select};

    let sleep = gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(timeout_ms)));
    match select(Box::pin(fut), Box::pin(sleep)).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => {
            controller.abort();
            Err(RequestError::Timeout)
        }
    }
}

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;
