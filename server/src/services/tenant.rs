//! Tenant persona — per-business configuration and system-prompt templating.
//!
//! DESIGN
//! ======
//! The widget forwards whatever JSON the tenant published as its config, so
//! parsing is lenient: scalar values are stringified, and a field that is
//! missing, empty, zero, or structured falls back to its default instead of
//! failing the request.

use std::fmt::Write;

use serde_json::Value;

pub const DEFAULT_BUSINESS_NAME: &str = "Business";
pub const DEFAULT_TONE: &str = "friendly, professional";
pub const DEFAULT_LANGUAGE: &str = "English";
pub const DEFAULT_HANDOFF_TEXT: &str = "Please contact support.";

/// Resolved persona for one tenant. Every field is populated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TenantConfig {
    pub business_name: String,
    pub tone: String,
    pub language: String,
    pub handoff_text: String,
    pub rules: Vec<String>,
}

impl Default for TenantConfig {
    fn default() -> Self {
        Self {
            business_name: DEFAULT_BUSINESS_NAME.into(),
            tone: DEFAULT_TONE.into(),
            language: DEFAULT_LANGUAGE.into(),
            handoff_text: DEFAULT_HANDOFF_TEXT.into(),
            rules: Vec::new(),
        }
    }
}

impl TenantConfig {
    /// Resolve a tenant config from the optional `config` field of a chat
    /// request. Non-object values behave as if the field were absent.
    #[must_use]
    pub fn from_value(value: Option<&Value>) -> Self {
        let Some(obj) = value.and_then(Value::as_object) else {
            return Self::default();
        };

        let text = |key: &str, default: &str| {
            obj.get(key)
                .and_then(scalar_text)
                .unwrap_or_else(|| default.to_string())
        };

        let rules = obj
            .get("rules")
            .and_then(Value::as_array)
            .map(|items| items.iter().map(rule_text).collect())
            .unwrap_or_default();

        Self {
            business_name: text("business_name", DEFAULT_BUSINESS_NAME),
            tone: text("tone", DEFAULT_TONE),
            language: text("language", DEFAULT_LANGUAGE),
            handoff_text: text("handoff_text", DEFAULT_HANDOFF_TEXT),
            rules,
        }
    }

    /// Render the system instructions sent alongside the visitor message.
    #[must_use]
    pub fn instructions(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "You are an AI assistant for {}.", self.business_name);
        let _ = writeln!(out, "Language: {}.", self.language);
        let _ = writeln!(out, "Tone: {}.", self.tone);
        out.push('\n');
        out.push_str("Rules:\n");
        let rules = self
            .rules
            .iter()
            .map(|r| format!("- {r}"))
            .collect::<Vec<_>>()
            .join("\n");
        out.push_str(&rules);
        out.push_str("\n\n");
        out.push_str("If unsure, respond with:\n");
        let _ = write!(out, "\"{}\"", self.handoff_text);
        out
    }
}

/// Text for a persona field. Non-empty strings, non-zero numbers and `true`
/// are used as written; anything else means "use the default".
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        Value::Bool(true) => Some("true".to_string()),
        _ => None,
    }
}

fn rule_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
#[path = "tenant_test.rs"]
mod tests;
