//! Embed options passed by the host page to `ChatbotWidget.mount(...)`.
//!
//! Every field is optional on the wire (camelCase JSON); anything missing
//! takes the default below. A partial `theme` only overrides the colours it
//! names.

use serde::Deserialize;

pub const DEFAULT_CONFIG_URL: &str = "/config/default.json";
pub const DEFAULT_REQUEST_TIMEOUT_MS: u32 = 30_000;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WidgetOptions {
    /// Prefix for `/api/chat`. Empty means same origin as the host page.
    pub api_base: String,
    /// Where the tenant config JSON is fetched from.
    pub config_url: String,
    pub position: Position,
    pub button_text: String,
    pub welcome_message: String,
    pub placeholder: String,
    pub title: String,
    /// Abort a config or chat request after this many milliseconds.
    pub request_timeout_ms: u32,
    pub theme: Theme,
}

impl Default for WidgetOptions {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            config_url: DEFAULT_CONFIG_URL.into(),
            position: Position::default(),
            button_text: "Chat".into(),
            welcome_message: "Hi! How can I help?".into(),
            placeholder: "Type your message...".into(),
            title: "Support Chat".into(),
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
            theme: Theme::default(),
        }
    }
}

impl WidgetOptions {
    /// Parse options from the JSON the host page supplied.
    ///
    /// # Errors
    ///
    /// Returns the serde error if `json` is not an object of the expected
    /// shape.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Full URL of the chat endpoint.
    #[must_use]
    pub fn chat_url(&self) -> String {
        format!("{}/api/chat", self.api_base.trim_end_matches('/'))
    }
}

/// Screen corner the launcher sits in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum Position {
    #[default]
    BottomRight,
    BottomLeft,
}

impl From<String> for Position {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "bottom-left" => Self::BottomLeft,
            _ => Self::BottomRight,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub accent: String,
    pub background: String,
    pub text: String,
    pub border: String,
    pub muted: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent: "#111827".into(),
            background: "#ffffff".into(),
            text: "#111827".into(),
            border: "#e5e7eb".into(),
            muted: "#6b7280".into(),
        }
    }
}

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;
