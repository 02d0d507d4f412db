//! The chat bubble: launcher button plus the chat panel.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered once per page by `mount`. All state lives in the shared
//! `RwSignal<WidgetState>`, so the JavaScript handle and this component see
//! the same open flag and log. Message text is rendered as text nodes only.

use leptos::prelude::*;

use crate::net::api::send_message;
use crate::options::WidgetOptions;
use crate::state::widget::{Bubble, WidgetState};
use crate::util::styles::root_position_style;

pub const ROOT_ELEMENT_ID: &str = "chatbot-widget-root";

/// Launcher and panel for one tenant.
#[component]
pub fn ChatWidget(options: WidgetOptions, state: RwSignal<WidgetState>) -> impl IntoView {
    let root_style = root_position_style(options.position);
    let title = options.title.clone();
    let button_text = options.button_text.clone();
    let placeholder = options.placeholder.clone();
    let options = StoredValue::new(options);

    let input = RwSignal::new(String::new());
    let log_ref = NodeRef::<leptos::html::Div>::new();
    let input_ref = NodeRef::<leptos::html::Input>::new();

    let is_open = move || state.with(|s| s.open);
    let close = move || state.update(WidgetState::close);

    // Keep the newest bubble in view.
    Effect::new(move || {
        let _ = state.with(|s| s.bubbles.len());
        #[cfg(feature = "csr")]
        {
            if let Some(el) = log_ref.get() {
                el.set_scroll_top(el.scroll_height());
            }
        }
    });

    Effect::new(move || {
        let open = is_open();
        #[cfg(feature = "csr")]
        {
            if open {
                if let Some(el) = input_ref.get() {
                    let _ = el.focus();
                }
            }
        }
        let _ = open;
    });

    #[cfg(feature = "csr")]
    {
        let handle = window_event_listener(leptos::ev::keydown, move |ev| {
            if ev.key() == "Escape" && state.with_untracked(|s| s.open) {
                state.update(WidgetState::close);
            }
        });
        on_cleanup(move || handle.remove());
    }

    let do_send = move || {
        let Some(text) = state.try_update(|s| s.begin_send(&input.get_untracked())).flatten() else {
            return;
        };
        input.set(String::new());
        let options = options.get_value();
        leptos::task::spawn_local(async move {
            let outcome = send_message(&options, state, &text).await;
            state.update(|s| s.finish_send(&outcome));
        });
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| match ev.key().as_str() {
        "Enter" => {
            ev.prevent_default();
            do_send();
        }
        "Escape" => close(),
        _ => {}
    };

    let on_launcher = move |_| options.with_value(|o| state.update(|s| s.toggle(&o.welcome_message)));

    view! {
        <div id=ROOT_ELEMENT_ID class="cbw-root" style=root_style>
            <div class="cbw-panel" style:display=move || if is_open() { "flex" } else { "none" }>
                <div class="cbw-header">
                    <div class="cbw-header-left">
                        <div class="cbw-title">{title}</div>
                        <div class="cbw-subtitle">"Online"</div>
                    </div>
                    <div class="cbw-header-actions">
                        <button class="cbw-icon-btn" title="Minimize" aria-label="Minimize" on:click=move |_| close()>
                            "\u{2013}"
                        </button>
                        <button class="cbw-icon-btn" title="Close" aria-label="Close" on:click=move |_| close()>
                            "\u{00d7}"
                        </button>
                    </div>
                </div>

                <div class="cbw-log" node_ref=log_ref>
                    <For
                        each=move || state.with(|s| s.bubbles.clone())
                        key=|bubble: &Bubble| bubble.id
                        children=move |bubble: Bubble| {
                            view! { <div class=bubble.role.class_name()>{bubble.text}</div> }
                        }
                    />
                </div>

                <div class="cbw-footer">
                    <div class="cbw-row">
                        <input
                            class="cbw-input"
                            type="text"
                            placeholder=placeholder
                            node_ref=input_ref
                            prop:value=move || input.get()
                            on:input=move |ev| input.set(event_target_value(&ev))
                            on:keydown=on_keydown
                        />
                        <button class="cbw-send" on:click=move |_| do_send() disabled=move || state.with(|s| s.loading)>
                            "Send"
                        </button>
                    </div>
                    <div class="cbw-meta">
                        <span>{move || state.with(|s| s.status.label())}</span>
                        <span>"Powered by AI"</span>
                    </div>
                </div>
            </div>

            <button
                class="cbw-button"
                aria-label="Open chat"
                style:display=move || if is_open() { "none" } else { "flex" }
                on:click=on_launcher
            >
                {button_text}
            </button>
        </div>
    }
}
