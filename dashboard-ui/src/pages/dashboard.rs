//! Dashboard Page
//!
//! Headline broker counters and the full `$SYS` table inside the charts
//! grid, whose column layout follows the session preference.

use broker_dashboard::broker::format_uptime;
use broker_dashboard::format::prettify_number;
use leptos::*;

use crate::components::{LayoutToggle, MetricCard};
use crate::state::{GlobalState, LayoutState};

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let layout = use_context::<LayoutState>().expect("LayoutState not found");

    // Fetch on mount
    state.refresh_systree();

    let uptime = move || {
        state
            .systree
            .get()
            .and_then(|tree| tree.uptime_secs())
            .map(format_uptime)
            .unwrap_or_else(|| "—".to_string())
    };

    view! {
        <div class="space-y-8">
            // Page header
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Overview"</h1>
                    <p class="text-gray-400 mt-1">"Uptime " {uptime}</p>
                </div>

                <div class="flex items-center space-x-2">
                    <button
                        class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg text-sm font-medium transition-colors"
                        prop:disabled=move || state.loading.get()
                        on:click=move |_| state.refresh_systree()
                    >
                        "Refresh"
                    </button>
                    <LayoutToggle />
                </div>
            </div>

            <div id="charts-grid" class=move || layout.mode().container_class()>
                {move || {
                    state
                        .systree
                        .with(|tree| tree.as_ref().map(|t| t.headlines()).unwrap_or_default())
                        .into_iter()
                        .map(|(label, value)| {
                            view! { <MetricCard label=label value=Signal::derive(move || Some(value)) /> }
                        })
                        .collect_view()
                }}

                <section class="bg-gray-800 rounded-xl p-6 border border-gray-700">
                    <h2 class="text-xl font-semibold mb-4">"All Metrics"</h2>
                    <SysTreeTable />
                </section>
            </div>
        </div>
    }
}

/// Every `$SYS` topic in the latest snapshot
#[component]
fn SysTreeTable() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        {move || {
            state.systree.with(|tree| match tree {
                Some(tree) if !tree.is_empty() => {
                    let rows = tree
                        .entries()
                        .map(|(topic, value)| {
                            let topic = topic.to_string();
                            view! {
                                <tr class="border-t border-gray-700">
                                    <td class="py-2 pr-4 font-mono text-sm text-gray-300">{topic}</td>
                                    <td class="py-2 text-right tabular-nums">{prettify_number(value)}</td>
                                </tr>
                            }
                        })
                        .collect_view();

                    view! {
                        <table class="w-full">
                            <tbody>{rows}</tbody>
                        </table>
                    }
                    .into_view()
                }
                _ => view! {
                    <p class="text-gray-500">"No metrics received yet."</p>
                }
                .into_view(),
            })
        }}
    }
}
