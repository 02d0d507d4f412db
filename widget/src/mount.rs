//! JavaScript entry point: `mount(options)` and the handle it returns.
//!
//! DESIGN
//! ======
//! Mounting is idempotent per page. If `#chatbot-widget-root` already
//! exists, `mount` returns `undefined` and leaves the page untouched.
//! Otherwise the themed stylesheet is injected into `<head>` and the
//! component tree is appended to `<body>` for the life of the page.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use crate::components::chat_widget::{ChatWidget, ROOT_ELEMENT_ID};
use crate::options::WidgetOptions;
use crate::state::widget::WidgetState;
use crate::util::styles::{STYLE_ELEMENT_ID, stylesheet};

/// Handle returned to the host page for driving the widget from script.
#[wasm_bindgen]
pub struct WidgetHandle {
    state: RwSignal<WidgetState>,
    welcome: String,
}

#[wasm_bindgen]
impl WidgetHandle {
    pub fn open(&self) {
        self.state.update(|s| s.open(&self.welcome));
    }

    pub fn close(&self) {
        self.state.update(WidgetState::close);
    }

    pub fn toggle(&self) {
        self.state.update(|s| s.toggle(&self.welcome));
    }
}

/// Mount the chat bubble into the current page.
#[wasm_bindgen(js_name = mount)]
pub fn mount(options: JsValue) -> Option<WidgetHandle> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let options = parse_options(&options);
    let document = web_sys::window()?.document()?;
    if document.get_element_by_id(ROOT_ELEMENT_ID).is_some() {
        log::debug!("chat widget: already mounted");
        return None;
    }

    if document.get_element_by_id(STYLE_ELEMENT_ID).is_none() {
        let style = document.create_element("style").ok()?;
        style.set_id(STYLE_ELEMENT_ID);
        style.set_text_content(Some(&stylesheet(&options.theme)));
        document.head()?.append_child(&style).ok()?;
    }

    let body = document.body()?;
    let state = RwSignal::new(WidgetState::default());
    let welcome = options.welcome_message.clone();
    leptos::mount::mount_to(body, move || view! { <ChatWidget options=options state=state /> }).forget();

    Some(WidgetHandle { state, welcome })
}

fn parse_options(raw: &JsValue) -> WidgetOptions {
    if raw.is_undefined() || raw.is_null() {
        return WidgetOptions::default();
    }
    let json = match js_sys::JSON::stringify(raw) {
        Ok(json) => String::from(json),
        Err(_) => {
            log::warn!("chat widget: options are not serializable; using defaults");
            return WidgetOptions::default();
        }
    };
    WidgetOptions::from_json(&json).unwrap_or_else(|e| {
        log::warn!("chat widget: invalid options ({e}); using defaults");
        WidgetOptions::default()
    })
}
