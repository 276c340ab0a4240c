//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::components::{AlertHost, DialogHost, Sidebar};
use crate::events::provide_ui_events;
use crate::pages::{DatasetDetail, NewDataset};

/// Sidebar auto-collapse breakpoint in CSS pixels.
const COLLAPSE_BREAKPOINT: f64 = 768.0;

fn viewport_is_narrow() -> bool {
    web_sys::window()
        .and_then(|window| window.inner_width().ok())
        .and_then(|width| width.as_f64())
        .map(|width| width < COLLAPSE_BREAKPOINT)
        .unwrap_or(false)
}

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide the notification bus to all components
    provide_ui_events();

    let (collapsed, set_collapsed) = create_signal(viewport_is_narrow());

    // Shrinking below the breakpoint collapses the sidebar; growing the
    // viewport back never auto-expands it.
    if let Some(window) = web_sys::window() {
        let on_resize = Closure::wrap(Box::new(move |_: JsValue| {
            if viewport_is_narrow() {
                set_collapsed.set(true);
            }
        }) as Box<dyn FnMut(JsValue)>);
        window.set_onresize(Some(on_resize.as_ref().unchecked_ref()));
        on_resize.forget();
    }

    view! {
        <Router>
            <div class="h-screen bg-gray-900 text-white flex overflow-hidden">
                // Dataset navigation
                <Sidebar
                    collapsed=collapsed
                    on_toggle=move || set_collapsed.update(|value| *value = !*value)
                />

                // Main content area
                <main class="flex-1 overflow-y-auto px-4 py-8 md:px-8">
                    <Routes>
                        <Route path="/" view=|| view! { <Redirect path="/datasets/new" /> } />
                        <Route path="/datasets/new" view=NewDataset />
                        <Route path="/datasets/:id" view=DatasetDetail />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                // Alert and dialog hosts
                <AlertHost />
                <DialogHost />
            </div>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-400 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/datasets/new"
                class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
            >
                "Go to Datasets"
            </A>
        </div>
    }
}
