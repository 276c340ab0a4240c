//! Sidebar Component
//!
//! Collapsible dataset navigation. The list is fetched on mount and
//! re-fetched whenever a sidebar-refresh event arrives; load failures
//! are logged without alerting.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::events::UiEvents;
use crate::messages;
use crate::models::Dataset;

/// Dataset navigation rail with an entry per stored dataset.
#[component]
pub fn Sidebar(
    #[prop(into)]
    collapsed: Signal<bool>,
    on_toggle: impl Fn() + 'static,
) -> impl IntoView {
    let events = use_context::<UiEvents>().expect("UiEvents not found");

    let (datasets, set_datasets) = create_signal(Vec::<Dataset>::new());

    let load = move || {
        spawn_local(async move {
            match api::fetch_datasets().await {
                Ok(list) => set_datasets.set(list),
                Err(e) => api::log_error("load datasets", &e),
            }
        });
    };

    load();
    let sub = events.subscribe_sidebar_refresh(load);
    on_cleanup(move || sub.cancel());

    view! {
        <aside class=move || {
            if collapsed.get() {
                "w-14 bg-gray-800 border-r border-gray-700 flex-shrink-0 transition-all"
            } else {
                "w-64 bg-gray-800 border-r border-gray-700 flex-shrink-0 transition-all"
            }
        }>
            <div class="flex items-center justify-between h-16 px-4 border-b border-gray-700">
                {move || (!collapsed.get()).then(|| view! {
                    <span class="flex items-center space-x-2">
                        <span class="text-2xl">"📊"</span>
                        <span class="text-lg font-bold text-white">{messages::APP_TITLE}</span>
                    </span>
                })}

                <button
                    on:click=move |_| on_toggle()
                    class="text-gray-400 hover:text-white text-xl"
                >
                    "☰"
                </button>
            </div>

            {move || (!collapsed.get()).then(|| view! {
                <nav class="p-2 space-y-1">
                    <SidebarLink
                        href="/datasets/new"
                        icon="⭐"
                        label=messages::BTN_NEW_DATASET
                    />

                    {move || {
                        datasets.get().into_iter().map(|dataset| {
                            let id = dataset.id.unwrap_or_default();
                            view! {
                                <SidebarLink
                                    href=format!("/datasets/{}", id)
                                    icon="🗄"
                                    label=dataset.name
                                />
                            }
                        }).collect_view()
                    }}
                </nav>
            })}
        </aside>
    }
}

/// Individual sidebar link
#[component]
fn SidebarLink(
    #[prop(into)]
    href: String,
    icon: &'static str,
    #[prop(into)]
    label: String,
) -> impl IntoView {
    view! {
        <A
            href=href
            class="flex items-center space-x-3 px-3 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
            active_class="bg-gray-700 text-white"
        >
            <span>{icon}</span>
            <span class="text-sm font-medium truncate">{label}</span>
        </A>
    }
}
