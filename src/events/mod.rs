//! UI Events
//!
//! The shared notification bus and its Leptos context wiring.

pub mod bus;

pub use bus::{AlertEvent, AlertLevel, DialogChoice, DialogRequest, Subscription, UiEvents};

use leptos::*;

/// Create the process-wide bus and provide it to the component tree.
/// Call once from the app root, before any view can publish.
pub fn provide_ui_events() {
    provide_context(UiEvents::new());
}
