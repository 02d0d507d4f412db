//! Stylesheet and positioning for the widget, generated from the theme.
//!
//! All selectors are prefixed `cbw-` so the widget does not collide with
//! host page styles.

use crate::options::{Position, Theme};

pub const STYLE_ELEMENT_ID: &str = "chatbot-widget-styles";

/// Distance in px from the viewport edges.
pub const EDGE_MARGIN_PX: u32 = 18;

/// Inline style for the fixed root container.
pub fn root_position_style(position: Position) -> String {
    let side = match position {
        Position::BottomLeft => "left",
        Position::BottomRight => "right",
    };
    format!("bottom: {EDGE_MARGIN_PX}px; {side}: {EDGE_MARGIN_PX}px;")
}

/// Full widget stylesheet with theme colours substituted.
#[allow(clippy::too_many_lines)]
pub fn stylesheet(theme: &Theme) -> String {
    let Theme { accent, background, text, border, muted } = theme;
    format!(
        r"
.cbw-root {{ position: fixed; z-index: 999999; font-family: ui-sans-serif, system-ui, -apple-system, Segoe UI, Roboto, Arial; }}
.cbw-root * {{ box-sizing: border-box; }}
.cbw-button {{
  width: 56px; height: 56px; border-radius: 999px; border: 1px solid {border};
  background: {accent}; color: white; cursor: pointer;
  box-shadow: 0 12px 30px rgba(0,0,0,0.18);
  display: flex; align-items: center; justify-content: center;
  font-weight: 700; letter-spacing: 0.2px;
}}
.cbw-panel {{
  width: 360px; max-width: calc(100vw - 24px);
  height: 520px; max-height: calc(100vh - 120px);
  background: {background}; border: 1px solid {border};
  border-radius: 16px; box-shadow: 0 16px 40px rgba(0,0,0,0.18);
  overflow: hidden; flex-direction: column;
}}
.cbw-header {{
  padding: 12px; border-bottom: 1px solid {border};
  display: flex; align-items: center; justify-content: space-between;
  background: {background};
}}
.cbw-title {{ font-weight: 700; color: {text}; font-size: 14px; }}
.cbw-subtitle {{ font-size: 12px; color: {muted}; margin-top: 2px; }}
.cbw-header-left {{ display: flex; flex-direction: column; }}
.cbw-header-actions {{ display: flex; gap: 8px; }}
.cbw-icon-btn {{
  width: 34px; height: 34px; border-radius: 10px;
  border: 1px solid {border}; background: {background};
  color: {text}; cursor: pointer;
  display: inline-flex; align-items: center; justify-content: center;
}}
.cbw-log {{
  flex: 1; overflow: auto; padding: 12px;
  display: flex; flex-direction: column; gap: 10px;
  background: {background};
}}
.cbw-bubble {{
  max-width: 85%; padding: 10px 12px; border-radius: 14px;
  border: 1px solid {border}; color: {text};
  font-size: 13px; line-height: 1.35;
  white-space: pre-wrap; word-break: break-word;
}}
.cbw-bubble-user {{
  align-self: flex-end; background: {accent}; color: white;
  border-color: rgba(255,255,255,0.12);
}}
.cbw-bubble-bot {{ align-self: flex-start; background: {background}; }}
.cbw-footer {{ border-top: 1px solid {border}; padding: 10px; background: {background}; }}
.cbw-row {{ display: flex; gap: 8px; }}
.cbw-input {{
  flex: 1; padding: 10px 12px; border-radius: 12px;
  border: 1px solid {border}; outline: none; font-size: 13px;
}}
.cbw-send {{
  padding: 10px 12px; border-radius: 12px; border: 1px solid {border};
  background: {accent}; color: white; cursor: pointer; font-weight: 700;
}}
.cbw-send:disabled {{ opacity: 0.6; cursor: default; }}
.cbw-meta {{
  margin-top: 6px; font-size: 11px; color: {muted};
  display: flex; justify-content: space-between; gap: 10px;
}}
.cbw-link {{ color: {muted}; text-decoration: none; }}
.cbw-link:hover {{ text-decoration: underline; }}
@media (max-width: 420px) {{
  .cbw-panel {{ height: 70vh; }}
}}
"
    )
}

#[cfg(test)]
#[path = "styles_test.rs"]
mod styles_test;
