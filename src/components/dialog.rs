//! Dialog Host Component
//!
//! Modal confirmation dialog driven by bus events. A new request replaces
//! whatever is on screen; either button hides the dialog and publishes
//! the choice.

use leptos::*;

use crate::events::{DialogChoice, DialogRequest, UiEvents};

/// Modal dialog host; at most one dialog is visible at a time.
#[component]
pub fn DialogHost() -> impl IntoView {
    let events = use_context::<UiEvents>().expect("UiEvents not found");

    let (request, set_request) = create_signal(Option::<DialogRequest>::None);

    let sub = events.subscribe_dialog(move |req| set_request.set(req.cloned()));
    on_cleanup(move || sub.cancel());

    let resolve = move |choice: DialogChoice| {
        set_request.set(None);
        events.resolve_dialog(choice);
    };

    view! {
        {move || {
            let resolve_left = resolve.clone();
            let resolve_right = resolve.clone();
            request.get().map(|dialog| {
                view! {
                    <div class="fixed inset-0 bg-black/50 flex items-center justify-center z-50">
                        <div class="bg-gray-800 rounded-xl p-6 w-full max-w-md mx-4">
                            <h2 class="text-xl font-semibold mb-2">{dialog.header}</h2>
                            <p class="text-gray-300 mb-6">{dialog.message}</p>

                            <div class="flex space-x-3">
                                <button
                                    on:click=move |_| resolve_left(DialogChoice::Left)
                                    class="flex-1 px-4 py-3 bg-gray-700 hover:bg-gray-600 rounded-lg font-medium transition-colors"
                                >
                                    {dialog.left_button}
                                </button>
                                <button
                                    on:click=move |_| resolve_right(DialogChoice::Right)
                                    class="flex-1 px-4 py-3 bg-blue-600 hover:bg-blue-500 rounded-lg font-medium transition-colors"
                                >
                                    {dialog.right_button}
                                </button>
                            </div>
                        </div>
                    </div>
                }
            })
        }}
    }
}
