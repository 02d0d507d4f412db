//! # chatbubble-widget
//!
//! Embeddable chat bubble for third-party pages, built with Leptos and
//! compiled to WASM. The host page calls `mount(options)`; the widget fetches
//! the tenant config on first use and relays each message to the server's
//! `POST /api/chat`.
//!
//! Browser-only code (HTTP, DOM mounting) sits behind the `csr` feature. The
//! state machine, options and stylesheet compile natively and are unit tested
//! without a browser.

pub mod components;
#[cfg(feature = "csr")]
pub mod mount;
pub mod net;
pub mod options;
pub mod state;
pub mod util;
