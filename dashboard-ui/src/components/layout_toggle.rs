//! Layout Toggle
//!
//! Button switching the charts grid between two columns and one.

use leptos::*;

use crate::state::LayoutState;

#[component]
pub fn LayoutToggle() -> impl IntoView {
    let layout = use_context::<LayoutState>().expect("LayoutState not found");

    view! {
        <button
            id="layout-toggle"
            class="px-4 py-2 bg-gray-700 hover:bg-gray-600 rounded-lg text-sm font-medium transition-colors"
            on:click=move |_| layout.toggle()
        >
            <span id="layout-text">{move || layout.mode().toggle_label()}</span>
        </button>
    }
}
