//! App Root Component
//!
//! Page shell with the sliding menu, routing and global providers.

use leptos::*;
use leptos_router::*;

use crate::components::{MenuButton, MenuOverlay, SlidingMenu, Toast};
use crate::pages::{Dashboard, Listeners};
use crate::state::{provide_global_state, provide_layout_state, provide_sidebar, GlobalState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_global_state();
    provide_layout_state();
    let sidebar = provide_sidebar();

    let content_style = move || format!("margin-left: {}px", sidebar.facets().content_offset_px);

    view! {
        <Router>
            <div class="min-h-screen bg-gray-900 text-white">
                <SlidingMenu />
                <MenuOverlay />

                <div
                    id="main-content"
                    class="flex flex-col min-h-screen transition-all duration-300"
                    style=content_style
                >
                    // Header bar
                    <header class="bg-gray-800 border-b border-gray-700">
                        <div class="flex items-center h-16 px-4 space-x-3">
                            <MenuButton />
                            <span class="text-xl font-bold">"Broker Dashboard"</span>
                        </div>
                    </header>

                    <main class="flex-1 container mx-auto px-4 py-8 pb-24">
                        <Routes>
                            <Route path="/" view=Dashboard />
                            <Route path="/listeners" view=Listeners />
                            <Route path="/*any" view=NotFound />
                        </Routes>
                    </main>

                    <Footer />
                </div>

                <Toast />
            </div>
        </Router>
    }
}

/// Footer showing refresh status
#[component]
fn Footer() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <footer class="bg-gray-800 border-t border-gray-700 py-3 px-4">
            <div class="container mx-auto flex items-center justify-between text-sm text-gray-400">
                <div>
                    {move || {
                        state.last_updated.get()
                            .map(|time| format!("Last updated: {}", time))
                            .unwrap_or_else(|| "Not updated".to_string())
                    }}
                </div>

                {move || {
                    if state.loading.get() {
                        view! {
                            <div class="flex items-center space-x-2 text-primary-400">
                                <div class="loading-spinner w-4 h-4" />
                                <span>"Loading..."</span>
                            </div>
                        }.into_view()
                    } else {
                        view! {}.into_view()
                    }
                }}
            </div>
        </footer>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-400 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/"
                class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
            >
                "Go to Overview"
            </A>
        </div>
    }
}
