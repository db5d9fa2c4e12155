//! Listeners Page

use leptos::*;

use crate::state::GlobalState;

#[component]
pub fn Listeners() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    state.refresh_listeners();

    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Listeners"</h1>
                <p class="text-gray-400 mt-1">"Network endpoints the broker accepts connections on"</p>
            </div>

            <section class="bg-gray-800 rounded-xl p-6 border border-gray-700 overflow-x-auto">
                <table class="w-full text-left">
                    <thead class="text-gray-400 text-sm">
                        <tr>
                            <th class="py-2 pr-4">"Address"</th>
                            <th class="py-2 pr-4">"Protocol"</th>
                            <th class="py-2 pr-4">"TLS"</th>
                            <th class="py-2 pr-4">"mTLS"</th>
                            <th class="py-2">"Anonymous"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || state.listeners.get().into_iter().enumerate()
                            key=|(i, listener)| (*i, listener.address())
                            children=move |(_, listener)| {
                                view! {
                                    <tr class="border-t border-gray-700">
                                        <td class="py-2 pr-4 font-mono">{listener.address()}</td>
                                        <td class="py-2 pr-4">{listener.protocol.clone()}</td>
                                        <td class="py-2 pr-4">{yes_no(listener.tls)}</td>
                                        <td class="py-2 pr-4">{yes_no(listener.mtls)}</td>
                                        <td class="py-2">{yes_no(listener.allow_anonymous)}</td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </section>
        </div>
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}
