//! Toast Notification Component
//!
//! Shows fetch errors until they auto-clear.

use leptos::*;

use crate::state::GlobalState;

/// Toast notification container
#[component]
pub fn Toast() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div class="fixed bottom-20 right-4 z-50 space-y-2">
            {move || {
                state.error.get().map(|msg| view! {
                    <div class="flex items-center space-x-3 bg-red-600 text-white px-4 py-3 rounded-lg shadow-lg">
                        <span class="text-lg">"✕"</span>
                        <span class="text-sm font-medium">{msg}</span>
                    </div>
                })
            }}
        </div>
    }
}
