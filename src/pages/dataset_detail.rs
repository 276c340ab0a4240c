//! Dataset Detail Page
//!
//! Data, graph and edit views for one dataset under `/datasets/:id`.
//! The graph headers in the tab row double as the graph-type switch.

use leptos::*;
use leptos_router::{use_location, use_params_map};

use crate::api::{self, GraphKind};
use crate::components::{DatasetForm, GraphPanel, Loading};
use crate::dates;
use crate::events::{DialogChoice, DialogRequest, UiEvents};
use crate::messages;
use crate::models::{Entry, NewEntry};

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
    Data,
    Graph,
    Edit,
}

/// Ordering of the entries table.
#[derive(Clone, Copy, PartialEq, Eq)]
enum EntryOrder {
    /// Newest first
    Date,
    /// Highest first
    Value,
}

fn sort_entries(list: &mut [Entry], order: EntryOrder) {
    match order {
        EntryOrder::Date => list.sort_by_key(|entry| {
            std::cmp::Reverse(dates::timestamp_ms(&entry.date).unwrap_or(i64::MIN))
        }),
        EntryOrder::Value => list.sort_by(|a, b| b.value.total_cmp(&a.value)),
    }
}

/// Backend rows carry ISO dates; the table edits them in input format.
fn to_table_row(mut entry: Entry) -> Entry {
    entry.date = dates::to_input_date(&entry.date);
    entry
}

/// Validate the editable entry fields, shared by the add row and the
/// per-row save. `None` means a field is missing or the value does not
/// parse; nothing is sent to the backend in that case.
fn entry_fields(value: &str, label: &str, date: &str) -> Option<(f64, String, String)> {
    let value = value.trim().parse::<f64>().ok()?;
    let label = label.trim();
    let date = date.trim();
    if label.is_empty() || date.is_empty() {
        return None;
    }
    Some((value, label.to_string(), date.to_string()))
}

/// Dataset detail page; a changed or unparsable id swaps in a fresh view.
#[component]
pub fn DatasetDetail() -> impl IntoView {
    let params = use_params_map();

    view! {
        {move || {
            let id = params.with(|p| p.get("id").and_then(|v| v.parse::<i64>().ok()));
            match id {
                Some(id) => view! { <DatasetView dataset_id=id /> }.into_view(),
                None => ().into_view(),
            }
        }}
    }
}

#[component]
fn DatasetView(dataset_id: i64) -> impl IntoView {
    let events = use_context::<UiEvents>().expect("UiEvents not found");
    let location = use_location();

    // A #edit fragment preselects the edit tab.
    let initial_tab = if location.hash.get_untracked().trim_start_matches('#') == "edit" {
        Tab::Edit
    } else {
        Tab::Data
    };

    let (active_tab, set_active_tab) = create_signal(initial_tab);
    let (graph_kind, set_graph_kind) = create_signal(GraphKind::Actual);

    let (dataset_name, set_dataset_name) = create_signal(String::new());
    let (dataset_symbol, set_dataset_symbol) = create_signal(String::new());

    let (entries, set_entries) = create_signal(Vec::<Entry>::new());
    let (entries_loading, set_entries_loading) = create_signal(false);
    let (order, set_order) = create_signal(EntryOrder::Date);

    // New entry row
    let (new_value, set_new_value) = create_signal(String::new());
    let (new_label, set_new_label) = create_signal(String::new());
    let (new_date, set_new_date) = create_signal(String::new());

    let events_for_entries = events.clone();
    let load_entries = move || {
        let events = events_for_entries.clone();
        set_entries_loading.set(true);

        spawn_local(async move {
            match api::fetch_entries(dataset_id).await {
                Ok(rows) => {
                    let mut list: Vec<Entry> = rows.into_iter().map(to_table_row).collect();
                    sort_entries(&mut list, order.get_untracked());
                    set_entries.set(list);
                }
                Err(e) => {
                    api::log_error("load entries", &e);
                    events.error(messages::LOAD_ENTRIES_ERROR);
                }
            }
            set_entries_loading.set(false);
        });
    };

    // Fetch meta and entries on mount
    let events_for_meta = events.clone();
    let load_entries_on_mount = load_entries.clone();
    create_effect(move |_| {
        let events = events_for_meta.clone();
        spawn_local(async move {
            match api::fetch_dataset(dataset_id).await {
                Ok(meta) => {
                    set_dataset_name.set(meta.name);
                    set_dataset_symbol.set(meta.symbol);
                }
                Err(e) => {
                    api::log_error("load dataset meta", &e);
                    events.error(messages::DATASET_META_ERROR);
                }
            }
        });

        load_entries_on_mount();
    });

    let clear_new_entry = move || {
        set_new_value.set(String::new());
        set_new_label.set(String::new());
        set_new_date.set(String::new());
    };

    let events_for_add = events.clone();
    let load_entries_for_add = load_entries;
    let on_add = move |_| {
        let Some((value, label, date)) =
            entry_fields(&new_value.get(), &new_label.get(), &new_date.get())
        else {
            events_for_add.info(messages::MISSING_FIELDS);
            return;
        };

        let payload = NewEntry {
            value,
            label,
            date: Some(dates::to_iso_utc(&date)),
        };

        let events = events_for_add.clone();
        let load_entries = load_entries_for_add.clone();
        spawn_local(async move {
            match api::create_entry(dataset_id, &payload).await {
                Ok(created) if created.id != 0 => {
                    events.success(messages::ENTRY_CREATED);
                    let row = to_table_row(created);
                    set_entries.update(|list| {
                        list.insert(0, row);
                        sort_entries(list, order.get_untracked());
                    });
                    clear_new_entry();
                }
                Ok(_) => {
                    events.success(messages::ENTRY_CREATED);
                    load_entries();
                    clear_new_entry();
                }
                Err(e) => {
                    api::log_error("create entry", &e);
                    events.error(messages::ENTRY_CREATE_ERROR);
                }
            }
        });
    };

    let set_ordering = move |order_now: EntryOrder| {
        set_order.set(order_now);
        set_entries.update(|list| sort_entries(list, order_now));
    };

    let on_saved = move |saved: Entry| {
        set_entries.update(|list| {
            if let Some(slot) = list.iter_mut().find(|e| e.id == saved.id) {
                *slot = to_table_row(saved);
            }
        });
    };

    let on_deleted = move |id: i64| {
        set_entries.update(|list| list.retain(|e| e.id != id));
    };

    let select_graph = move |kind: GraphKind| {
        set_graph_kind.set(kind);
        set_active_tab.set(Tab::Graph);
    };

    let is_data = create_memo(move |_| active_tab.get() == Tab::Data);
    let is_edit = create_memo(move |_| active_tab.get() == Tab::Edit);
    let is_graph_actual = create_memo(move |_| {
        active_tab.get() == Tab::Graph && graph_kind.get() == GraphKind::Actual
    });
    let is_graph_target = create_memo(move |_| {
        active_tab.get() == Tab::Graph && graph_kind.get() == GraphKind::Target
    });
    let is_graph_end = create_memo(move |_| {
        active_tab.get() == Tab::Graph && graph_kind.get() == GraphKind::EndDate
    });

    view! {
        <div class="space-y-6">
            // Page header
            <div class="flex items-baseline space-x-3">
                <h1 class="text-3xl font-bold">
                    {messages::HEADER_DATASET} " " {move || dataset_name.get()}
                </h1>
                <span class="text-xl text-gray-400">
                    {move || {
                        let symbol = dataset_symbol.get();
                        (!symbol.is_empty()).then(|| format!("({})", symbol))
                    }}
                </span>
            </div>

            // Tab row
            <div class="flex flex-wrap gap-2">
                <TabButton
                    label=messages::TAB_DATA
                    active=is_data
                    on_select=move || set_active_tab.set(Tab::Data)
                />
                <TabButton
                    label=messages::HEADER_GRAPH_ACTUAL
                    active=is_graph_actual
                    on_select=move || select_graph(GraphKind::Actual)
                />
                <TabButton
                    label=messages::HEADER_GRAPH_TARGET
                    active=is_graph_target
                    on_select=move || select_graph(GraphKind::Target)
                />
                <TabButton
                    label=messages::HEADER_GRAPH_END_DATE
                    active=is_graph_end
                    on_select=move || select_graph(GraphKind::EndDate)
                />
                <TabButton
                    label=messages::TAB_EDIT
                    active=is_edit
                    on_select=move || set_active_tab.set(Tab::Edit)
                />
            </div>

            // Active tab content
            {move || match active_tab.get() {
                Tab::Data => {
                    let on_add = on_add.clone();
                    view! {
                        <div class="bg-gray-800 rounded-lg p-6 space-y-4">
                            <h2 class="text-xl font-semibold">{messages::HEADER_ENTRIES}</h2>

                            // New entry row
                            <div class="flex flex-wrap items-center gap-3">
                                <input
                                    type="number"
                                    step="any"
                                    placeholder=messages::PLACEHOLDER_VALUE
                                    prop:value=move || new_value.get()
                                    on:input=move |ev| set_new_value.set(event_target_value(&ev))
                                    class="w-32 bg-gray-700 rounded-lg px-4 py-2
                                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                                />
                                <input
                                    type="text"
                                    placeholder=messages::PLACEHOLDER_LABEL
                                    prop:value=move || new_label.get()
                                    on:input=move |ev| set_new_label.set(event_target_value(&ev))
                                    class="flex-1 min-w-40 bg-gray-700 rounded-lg px-4 py-2
                                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                                />
                                <input
                                    type="date"
                                    prop:value=move || new_date.get()
                                    on:input=move |ev| set_new_date.set(event_target_value(&ev))
                                    class="w-44 bg-gray-700 rounded-lg px-4 py-2
                                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                                />
                                <button
                                    on:click=on_add
                                    class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg
                                           text-sm font-medium transition-colors"
                                >
                                    {messages::BTN_ADD}
                                </button>
                                <button
                                    on:click=move |_| clear_new_entry()
                                    class="px-4 py-2 bg-gray-700 hover:bg-gray-600 rounded-lg
                                           text-sm font-medium transition-colors"
                                >
                                    {messages::BTN_CLEAR}
                                </button>
                            </div>

                            // Entries table
                            {move || {
                                if entries_loading.get() {
                                    view! {
                                        <div>
                                            <Loading />
                                            <p class="text-center text-sm text-gray-400">
                                                {messages::TABLE_LOADING}
                                            </p>
                                        </div>
                                    }.into_view()
                                } else {
                                    view! {
                                        <table class="w-full text-left">
                                            <thead>
                                                <tr class="text-sm text-gray-400 border-b border-gray-700">
                                                    <th class="py-2 pr-4">{messages::TABLE_LABEL}</th>
                                                    <th class="py-2 pr-4">
                                                        <button
                                                            on:click=move |_| set_ordering(EntryOrder::Value)
                                                            class="hover:text-white"
                                                        >
                                                            {messages::TABLE_VALUE}
                                                            {move || (order.get() == EntryOrder::Value).then_some(" ▾")}
                                                        </button>
                                                    </th>
                                                    <th class="py-2 pr-4">
                                                        <button
                                                            on:click=move |_| set_ordering(EntryOrder::Date)
                                                            class="hover:text-white"
                                                        >
                                                            {messages::TABLE_DATE}
                                                            {move || (order.get() == EntryOrder::Date).then_some(" ▾")}
                                                        </button>
                                                    </th>
                                                    <th class="py-2">{messages::TABLE_ACTIONS}</th>
                                                </tr>
                                            </thead>
                                            <tbody>
                                                {move || {
                                                    entries.get().into_iter().map(|entry| {
                                                        view! {
                                                            <EntryRow
                                                                entry=entry
                                                                on_saved=on_saved
                                                                on_deleted=on_deleted
                                                            />
                                                        }
                                                    }).collect_view()
                                                }}
                                            </tbody>
                                        </table>
                                    }.into_view()
                                }
                            }}
                        </div>
                    }.into_view()
                }
                Tab::Graph => view! {
                    <GraphPanel dataset_id=dataset_id kind=graph_kind />
                }.into_view(),
                Tab::Edit => view! {
                    <div class="bg-gray-800 rounded-lg p-6 space-y-4">
                        <h2 class="text-xl font-semibold">{messages::HEADER_EDIT}</h2>
                        <DatasetForm dataset_id=dataset_id />
                    </div>
                }.into_view(),
            }}
        </div>
    }
}

/// Tab / graph-type selector button
#[component]
fn TabButton(
    label: &'static str,
    #[prop(into)]
    active: Signal<bool>,
    on_select: impl Fn() + 'static,
) -> impl IntoView {
    view! {
        <button
            on:click=move |_| on_select()
            class=move || {
                let base = "px-4 py-2 rounded-lg text-sm font-medium transition-colors";
                if active.get() {
                    format!("{} bg-primary-600 text-white", base)
                } else {
                    format!("{} bg-gray-700 text-gray-300 hover:bg-gray-600", base)
                }
            }
        >
            {label}
        </button>
    }
}

/// One editable entry row with save and delete actions.
#[component]
fn EntryRow(
    entry: Entry,
    on_saved: impl Fn(Entry) + Clone + 'static,
    on_deleted: impl Fn(i64) + Clone + 'static,
) -> impl IntoView {
    let events = use_context::<UiEvents>().expect("UiEvents not found");

    let entry_id = entry.id;
    let parent_dataset_id = entry.dataset_id;
    let (value, set_value) = create_signal(entry.value.to_string());
    let (label, set_label) = create_signal(entry.label);
    let (date, set_date) = create_signal(entry.date);

    let events_for_save = events.clone();
    let on_save = move |_| {
        let Some((value, label, date)) = entry_fields(&value.get(), &label.get(), &date.get())
        else {
            events_for_save.info(messages::MISSING_FIELDS);
            return;
        };

        let payload = Entry {
            id: entry_id,
            dataset_id: parent_dataset_id,
            value,
            label,
            date: dates::to_iso_utc(&date),
            projected: false,
        };

        let events = events_for_save.clone();
        let on_saved = on_saved.clone();
        spawn_local(async move {
            match api::update_entry(&payload).await {
                Ok(()) => {
                    events.success(messages::ENTRY_UPDATED);
                    on_saved(payload);
                }
                Err(e) => {
                    api::log_error("update entry", &e);
                    events.error(messages::ENTRY_UPDATE_ERROR);
                }
            }
        });
    };

    let events_for_delete = events;
    let on_delete = move |_| {
        let events = events_for_delete.clone();
        let on_deleted = on_deleted.clone();

        events.request_dialog(DialogRequest {
            header: messages::CONFIRM_DELETE.to_string(),
            message: messages::CONFIRM_DELETE_ENTRY.to_string(),
            left_button: messages::BTN_CANCEL.to_string(),
            right_button: messages::BTN_CONFIRM.to_string(),
        });

        events.clone().once_dialog_result(move |choice| {
            if choice != DialogChoice::Right {
                return;
            }

            spawn_local(async move {
                match api::delete_entry(entry_id).await {
                    Ok(()) => {
                        events.success(messages::ENTRY_DELETED);
                        on_deleted(entry_id);
                    }
                    Err(e) => {
                        api::log_error("delete entry", &e);
                        events.error(messages::ENTRY_DELETE_ERROR);
                    }
                }
            });
        });
    };

    view! {
        <tr class="border-b border-gray-700/50">
            <td class="py-2 pr-4">
                <input
                    type="text"
                    prop:value=move || label.get()
                    on:input=move |ev| set_label.set(event_target_value(&ev))
                    class="w-full bg-gray-700 rounded px-3 py-1.5
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                />
            </td>
            <td class="py-2 pr-4">
                <input
                    type="number"
                    step="any"
                    prop:value=move || value.get()
                    on:input=move |ev| set_value.set(event_target_value(&ev))
                    class="w-32 bg-gray-700 rounded px-3 py-1.5
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                />
            </td>
            <td class="py-2 pr-4">
                <input
                    type="date"
                    prop:value=move || date.get()
                    on:input=move |ev| set_date.set(event_target_value(&ev))
                    class="w-44 bg-gray-700 rounded px-3 py-1.5
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                />
            </td>
            <td class="py-2">
                <div class="flex space-x-2">
                    <button
                        on:click=on_save
                        class="px-3 py-1.5 bg-primary-600 hover:bg-primary-700 rounded
                               text-sm font-medium transition-colors"
                    >
                        {messages::BTN_SAVE}
                    </button>
                    <button
                        on:click=on_delete
                        class="px-3 py-1.5 bg-red-600 hover:bg-red-500 rounded
                               text-sm font-medium transition-colors"
                    >
                        {messages::BTN_DELETE}
                    </button>
                </div>
            </td>
        </tr>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_fields_trims_and_parses() {
        let (value, label, date) = entry_fields(" 81.2 ", " morning ", " 2025-06-15 ").unwrap();
        assert_eq!(value, 81.2);
        assert_eq!(label, "morning");
        assert_eq!(date, "2025-06-15");
    }

    #[test]
    fn test_entry_fields_rejects_incomplete_input() {
        assert!(entry_fields("", "morning", "2025-06-15").is_none());
        assert!(entry_fields("abc", "morning", "2025-06-15").is_none());
        assert!(entry_fields("81.2", "  ", "2025-06-15").is_none());
        assert!(entry_fields("81.2", "morning", "").is_none());
    }
}
