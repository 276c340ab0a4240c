//! Graph Panel Component
//!
//! Canvas chart over a dataset's entries. The shown collection follows
//! the selected graph kind: recorded values only, or recorded values
//! plus one of the server-computed projections.

use leptos::*;

use crate::api::{self, GraphKind};
use crate::chart::{self, build_series, draw_chart, SeriesSet};
use crate::dates;
use crate::events::UiEvents;
use crate::messages;

/// Chart over one dataset's entry collection, refetched whenever the
/// graph kind changes.
#[component]
pub fn GraphPanel(
    dataset_id: i64,
    #[prop(into)]
    kind: Signal<GraphKind>,
) -> impl IntoView {
    let events = use_context::<UiEvents>().expect("UiEvents not found");

    let (series, set_series) = create_signal(Option::<SeriesSet>::None);
    let (loading, set_loading) = create_signal(false);

    create_effect(move |_| {
        let kind = kind.get();
        let events = events.clone();
        set_loading.set(true);

        spawn_local(async move {
            match api::fetch_graph_entries(dataset_id, kind).await {
                Ok(mut rows) => {
                    rows.sort_by_key(|row| dates::timestamp_ms(&row.date).unwrap_or(i64::MIN));
                    set_series.set(Some(build_series(&rows)));
                }
                Err(e) => {
                    api::log_error("load graph", &e);
                    events.error(messages::GRAPH_LOAD_ERROR);
                }
            }
            set_loading.set(false);
        });
    });

    let canvas_ref = create_node_ref::<html::Canvas>();

    // Redraw whenever fresh series data lands or the canvas mounts.
    create_effect(move |_| {
        if let (Some(canvas), Some(set)) = (canvas_ref.get(), series.get()) {
            draw_chart(&canvas, &set);
        }
    });

    view! {
        <div class="bg-gray-800 rounded-lg p-6">
            <div class="flex items-center justify-between mb-4">
                <h2 class="text-xl font-semibold">{move || kind.get().header()}</h2>

                {move || loading.get().then(|| view! {
                    <span class="text-sm text-gray-400">{messages::GRAPH_LOADING}</span>
                })}
            </div>

            <div class="text-xs text-gray-400 mb-1">{messages::GRAPH_Y_AXIS}</div>
            <canvas
                node_ref=canvas_ref
                width="800"
                height="400"
                class="w-full h-64 md:h-96 rounded-lg"
            />
            <div class="text-xs text-gray-400 text-center mt-1">{messages::GRAPH_X_AXIS}</div>

            // Legend
            <div class="flex justify-center flex-wrap gap-4 mt-4">
                <div class="flex items-center space-x-2">
                    <div
                        class="w-3 h-3 rounded-full"
                        style=format!("background-color: {}", chart::ACTUAL_COLOR)
                    />
                    <span class="text-sm text-gray-300">{messages::SERIES_ACTUAL}</span>
                </div>
                <div class="flex items-center space-x-2">
                    <div
                        class="w-3 h-3 rounded-full"
                        style=format!("background-color: {}", chart::PROJECTED_COLOR)
                    />
                    <span class="text-sm text-gray-300">{messages::SERIES_PROJECTED}</span>
                </div>
            </div>
        </div>
    }
}
