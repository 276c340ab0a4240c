//! Trackboard
//!
//! Single-page dashboard for numeric datasets built with Leptos (WASM).
//!
//! # Features
//!
//! - Dataset management with target values and date ranges
//! - Time-series entry editing in place
//! - Canvas charts for actual and projected series
//! - One-click dataset duplication including entries
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It talks to the Trackboard API over HTTP.

use leptos::*;

mod api;
mod app;
mod chart;
mod components;
mod dates;
mod events;
mod messages;
mod models;
mod pages;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
