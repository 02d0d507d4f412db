//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! The relay holds no per-visitor data: only the optional LLM client and the
//! settings applied to each upstream call.

use std::sync::Arc;

use crate::llm::LlmChat;
use crate::services::chat::ChatSettings;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped or Copy.
#[derive(Clone)]
pub struct AppState {
    /// Optional LLM client. `None` if the API key is not configured.
    pub llm: Option<Arc<dyn LlmChat>>,
    pub chat: ChatSettings,
}

impl AppState {
    #[must_use]
    pub fn new(llm: Option<Arc<dyn LlmChat>>, chat: ChatSettings) -> Self {
        Self { llm, chat }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================


#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
