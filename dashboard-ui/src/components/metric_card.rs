//! Metric Card Component
//!
//! Displays a single broker counter.

use broker_dashboard::format::prettify_number;
use leptos::*;

/// Metric card component
#[component]
pub fn MetricCard(
    /// Label shown above the value
    #[prop(into)]
    label: String,
    /// Current value; `None` renders a dash
    #[prop(into)]
    value: Signal<Option<i64>>,
) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-lg p-4 border border-gray-700 hover:border-gray-600 transition">
            <span class="text-gray-400 text-sm">{label}</span>
            <div class="text-3xl font-bold mt-2 tabular-nums">
                {move || value.get().map(prettify_number).unwrap_or_else(|| "—".to_string())}
            </div>
        </div>
    }
}
