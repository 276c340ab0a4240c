//! New Dataset Page
//!
//! Create form for a fresh dataset.

use leptos::*;

use crate::components::DatasetForm;
use crate::messages;

/// Dataset creation page
#[component]
pub fn NewDataset() -> impl IntoView {
    view! {
        <div class="space-y-6">
            <h1 class="text-3xl font-bold">{messages::HEADER_CREATE_DATASET}</h1>
            <DatasetForm />
        </div>
    }
}
