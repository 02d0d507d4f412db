//! Client-side widget state.
//!
//! DESIGN
//! ======
//! The whole widget is one small state machine (`widget::WidgetState`) kept
//! in a single signal. Network code and components only call its transition
//! methods, so open/close, the single in-flight guard, and config caching are
//! all unit-testable natively.

pub mod widget;
