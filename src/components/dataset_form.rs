//! Dataset Form Component
//!
//! Create and edit form for dataset metadata. Edit mode adds delete
//! (behind a confirmation dialog) and copy (duplicate plus entry
//! fan-out).

use leptos::*;
use leptos_router::use_navigate;

use crate::api;
use crate::dates;
use crate::events::{DialogChoice, DialogRequest, UiEvents};
use crate::messages;
use crate::models::Dataset;

use super::loading::LoadingOverlay;

/// Dataset create/edit form. `dataset_id` of `None` means create mode;
/// `Some(id)` prefills the form from the backend and enables the
/// edit-only actions.
#[component]
pub fn DatasetForm(#[prop(optional)] dataset_id: Option<i64>) -> impl IntoView {
    let events = use_context::<UiEvents>().expect("UiEvents not found");
    let navigate = use_navigate();

    let (name, set_name) = create_signal(String::new());
    let (description, set_description) = create_signal(String::new());
    let (symbol, set_symbol) = create_signal(String::new());
    let (target_value, set_target_value) = create_signal(String::new());
    let (start_date, set_start_date) = create_signal(String::new());
    let (end_date, set_end_date) = create_signal(String::new());
    let (loading, set_loading) = create_signal(false);
    let (touched, set_touched) = create_signal(false);

    let is_edit = dataset_id.is_some();

    // Prefill from the backend in edit mode
    if let Some(id) = dataset_id {
        let events_for_load = events.clone();
        create_effect(move |_| {
            let events = events_for_load.clone();
            set_loading.set(true);

            spawn_local(async move {
                match api::fetch_dataset(id).await {
                    Ok(data) => {
                        set_name.set(data.name);
                        set_description.set(data.description);
                        set_symbol.set(data.symbol);
                        set_target_value.set(
                            data.target_value.map(|v| v.to_string()).unwrap_or_default(),
                        );
                        set_start_date.set(
                            data.start_date
                                .map(|d| dates::to_input_date(&d))
                                .unwrap_or_default(),
                        );
                        set_end_date.set(
                            data.end_date
                                .map(|d| dates::to_input_date(&d))
                                .unwrap_or_default(),
                        );
                    }
                    Err(e) => {
                        api::log_error("load dataset", &e);
                        events.error(messages::LOAD_DATASET_ERROR);
                    }
                }
                set_loading.set(false);
            });
        });
    }

    // Trimmed wire payload from the current field values
    let build_dataset = move || Dataset {
        id: None,
        name: name.get().trim().to_string(),
        description: description.get().trim().to_string(),
        symbol: symbol.get().trim().to_string(),
        target_value: target_value.get().trim().parse::<f64>().ok(),
        start_date: optional_iso(&start_date.get()),
        end_date: optional_iso(&end_date.get()),
    };

    let events_for_submit = events.clone();
    let navigate_for_submit = navigate.clone();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_touched.set(true);

        if name.get().trim().is_empty() || symbol.get().trim().is_empty() {
            return;
        }

        let dto = build_dataset();
        let events = events_for_submit.clone();
        let navigate = navigate_for_submit.clone();
        set_loading.set(true);

        spawn_local(async move {
            match dataset_id {
                Some(id) => match api::update_dataset(id, &dto).await {
                    Ok(()) => {
                        events.success(messages::DATASET_UPDATED);
                        events.request_sidebar_refresh();
                        navigate(&format!("/datasets/{}", id), Default::default());
                    }
                    Err(e) => {
                        api::log_error("update dataset", &e);
                        events.error(messages::DATASET_UPDATE_ERROR);
                    }
                },
                None => match api::create_dataset(&dto).await {
                    Ok(created) => {
                        events.success(messages::DATASET_CREATED);
                        events.request_sidebar_refresh();
                        match created.id {
                            Some(new_id) => {
                                navigate(&format!("/datasets/{}", new_id), Default::default())
                            }
                            None => navigate("/", Default::default()),
                        }
                    }
                    Err(e) => {
                        api::log_error("create dataset", &e);
                        events.error(messages::DATASET_CREATE_ERROR);
                    }
                },
            }
            set_loading.set(false);
        });
    };

    let events_for_delete = events.clone();
    let navigate_for_delete = navigate.clone();
    let on_delete = move |_| {
        let Some(id) = dataset_id else { return };

        let events = events_for_delete.clone();
        let navigate = navigate_for_delete.clone();

        events.request_dialog(DialogRequest {
            header: messages::CONFIRM_DELETE.to_string(),
            message: messages::CONFIRM_DELETE_DATASET.to_string(),
            left_button: messages::BTN_CANCEL.to_string(),
            right_button: messages::BTN_CONFIRM.to_string(),
        });

        events.clone().once_dialog_result(move |choice| {
            if choice != DialogChoice::Right {
                return;
            }

            set_loading.set(true);
            spawn_local(async move {
                match api::delete_dataset(id).await {
                    Ok(()) => {
                        events.success(messages::DATASET_DELETED);
                        events.request_sidebar_refresh();
                        navigate("/", Default::default());
                    }
                    Err(e) => {
                        api::log_error("delete dataset", &e);
                        events.error(messages::DATASET_DELETE_ERROR);
                    }
                }
                set_loading.set(false);
            });
        });
    };

    let events_for_copy = events.clone();
    let navigate_for_copy = navigate;
    let on_copy = move |_| {
        let Some(source_id) = dataset_id else { return };

        let dto = Dataset {
            name: format!("{} - 2", name.get().trim()),
            ..build_dataset()
        };
        let events = events_for_copy.clone();
        let navigate = navigate_for_copy.clone();
        set_loading.set(true);

        spawn_local(async move {
            match api::create_dataset(&dto).await {
                Ok(created) => {
                    let Some(new_id) = created.id else {
                        events.error(messages::DATASET_CREATE_ERROR);
                        set_loading.set(false);
                        return;
                    };

                    match api::copy_entries(source_id, new_id).await {
                        Ok(tally) if tally.all_succeeded() => {
                            events.success(messages::DATASET_COPIED)
                        }
                        Ok(tally) if tally.succeeded > 0 => {
                            events.warning(messages::ENTRY_COPY_ERROR)
                        }
                        Ok(_) => events.error(messages::ENTRY_COPY_ERROR),
                        Err(e) => {
                            api::log_error("copy entries", &e);
                            events.error(messages::ENTRY_COPY_ERROR);
                        }
                    }

                    events.request_sidebar_refresh();
                    navigate(&format!("/datasets/{}", new_id), Default::default());
                }
                Err(e) => {
                    api::log_error("copy dataset", &e);
                    events.error(messages::DATASET_CREATE_ERROR);
                }
            }
            set_loading.set(false);
        });
    };

    view! {
        <LoadingOverlay loading=loading>
            <form on:submit=on_submit class="space-y-4 max-w-xl">
                // Name
                <div>
                    <label class="block text-sm text-gray-400 mb-2">{messages::LABEL_NAME}</label>
                    <input
                        type="text"
                        maxlength="255"
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                    {move || (touched.get() && name.get().trim().is_empty()).then(|| view! {
                        <p class="text-sm text-red-400 mt-1">{messages::NAME_REQUIRED}</p>
                    })}
                </div>

                // Description
                <div>
                    <label class="block text-sm text-gray-400 mb-2">{messages::LABEL_DESCRIPTION}</label>
                    <textarea
                        maxlength="2000"
                        rows="3"
                        prop:value=move || description.get()
                        on:input=move |ev| set_description.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>

                // Symbol
                <div>
                    <label class="block text-sm text-gray-400 mb-2">{messages::LABEL_SYMBOL}</label>
                    <input
                        type="text"
                        maxlength="50"
                        prop:value=move || symbol.get()
                        on:input=move |ev| set_symbol.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                    {move || (touched.get() && symbol.get().trim().is_empty()).then(|| view! {
                        <p class="text-sm text-red-400 mt-1">{messages::SYMBOL_REQUIRED}</p>
                    })}
                </div>

                // Target value
                <div>
                    <label class="block text-sm text-gray-400 mb-2">{messages::LABEL_TARGET_VALUE}</label>
                    <input
                        type="number"
                        step="any"
                        prop:value=move || target_value.get()
                        on:input=move |ev| set_target_value.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>

                // Date range
                <div class="grid grid-cols-2 gap-4">
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">{messages::LABEL_START_DATE}</label>
                        <input
                            type="date"
                            prop:value=move || start_date.get()
                            on:input=move |ev| set_start_date.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">{messages::LABEL_END_DATE}</label>
                        <input
                            type="date"
                            prop:value=move || end_date.get()
                            on:input=move |ev| set_end_date.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>
                </div>

                // Buttons
                <div class="flex space-x-3 pt-4">
                    <button
                        type="submit"
                        disabled=move || loading.get()
                        class="flex-1 px-4 py-3 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                               rounded-lg font-medium transition-colors"
                    >
                        {if is_edit { messages::BTN_UPDATE } else { messages::BTN_CREATE }}
                    </button>

                    {is_edit.then(|| view! {
                        <button
                            type="button"
                            on:click=on_copy
                            disabled=move || loading.get()
                            class="flex-1 px-4 py-3 bg-gray-700 hover:bg-gray-600 disabled:bg-gray-600
                                   rounded-lg font-medium transition-colors"
                        >
                            {messages::BTN_COPY}
                        </button>
                        <button
                            type="button"
                            on:click=on_delete
                            disabled=move || loading.get()
                            class="flex-1 px-4 py-3 bg-red-600 hover:bg-red-500 disabled:bg-gray-600
                                   rounded-lg font-medium transition-colors"
                        >
                            {messages::BTN_DELETE}
                        </button>
                    })}
                </div>
            </form>
        </LoadingOverlay>
    }
}

fn optional_iso(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(dates::to_iso_utc(trimmed))
    }
}
