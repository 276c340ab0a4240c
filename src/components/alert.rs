//! Alert Host Component
//!
//! Renders the most recent bus alert as a dismissable toast.

use gloo_timers::callback::Timeout;
use leptos::*;
use std::cell::RefCell;
use std::rc::Rc;

use crate::events::{AlertEvent, AlertLevel, UiEvents};

/// How long an alert stays visible without interaction.
const AUTO_DISMISS_MS: u32 = 10_000;

/// Alert toast host. Every published alert replaces the one on screen
/// and restarts the dismiss countdown.
#[component]
pub fn AlertHost() -> impl IntoView {
    let events = use_context::<UiEvents>().expect("UiEvents not found");

    let (current, set_current) = create_signal(Option::<AlertEvent>::None);

    // Pending auto-dismiss; replacing the handle cancels the old timer.
    let timer: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));

    let timer_arm = Rc::clone(&timer);
    let sub = events.subscribe_alerts(move |event| {
        set_current.set(Some(event.clone()));
        let handle = Timeout::new(AUTO_DISMISS_MS, move || set_current.set(None));
        *timer_arm.borrow_mut() = Some(handle);
    });
    on_cleanup(move || sub.cancel());

    view! {
        <div class="fixed bottom-6 right-4 z-50">
            {move || {
                let timer_close = Rc::clone(&timer);
                current.get().map(|alert| {
                    let (icon, bg_class) = alert_style(alert.level);
                    view! {
                        <div class=format!(
                            "flex items-center space-x-3 {} text-white px-4 py-3 rounded-lg shadow-lg \
                             animate-slide-in",
                            bg_class
                        )>
                            <span class="text-lg">{icon}</span>
                            <span class="text-sm font-medium">{alert.message}</span>
                            <button
                                on:click=move |_| {
                                    *timer_close.borrow_mut() = None;
                                    set_current.set(None);
                                }
                                class="text-white/70 hover:text-white pl-2"
                            >
                                "✕"
                            </button>
                        </div>
                    }
                })
            }}
        </div>
    }
}

fn alert_style(level: AlertLevel) -> (&'static str, &'static str) {
    match level {
        AlertLevel::Info => ("ℹ", "bg-blue-600"),
        AlertLevel::Success => ("✓", "bg-green-600"),
        AlertLevel::Error => ("✕", "bg-red-600"),
        AlertLevel::Warning => ("⚠", "bg-yellow-600"),
    }
}
