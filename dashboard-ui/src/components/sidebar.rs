//! Sidebar Components
//!
//! Menu button, sliding menu and overlay. All three read the panel facets
//! from the [`Sidebar`] in context and route clicks back to it.

use broker_dashboard::panel::DismissTrigger;
use leptos::*;
use leptos_router::*;

use crate::state::Sidebar;

fn use_sidebar() -> Sidebar {
    use_context::<Sidebar>().expect("Sidebar not found")
}

/// Header button that opens and closes the menu
#[component]
pub fn MenuButton() -> impl IntoView {
    let sidebar = use_sidebar();

    view! {
        <button
            id="menu-toggle"
            class="p-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
            aria-label="Toggle navigation"
            on:click=move |_| sidebar.toggle()
        >
            <span
                id="hamburger-icon"
                class="text-2xl leading-none"
                class:hidden=move || !sidebar.facets().hamburger_visible
            >
                "☰"
            </span>
            <span
                id="arrow-icon"
                class="text-2xl leading-none"
                class:hidden=move || !sidebar.facets().arrow_visible
            >
                "←"
            </span>
        </button>
    }
}

/// The sliding navigation menu
#[component]
pub fn SlidingMenu() -> impl IntoView {
    let sidebar = use_sidebar();

    let menu_class = move || {
        let position = if sidebar.facets().panel_on_screen {
            "translate-x-0"
        } else {
            "-translate-x-full"
        };
        format!(
            "fixed top-0 left-0 h-full w-80 bg-gray-800 border-r border-gray-700 z-40 \
             transform transition-transform duration-300 ease-in-out {}",
            position
        )
    };

    view! {
        <aside id="sliding-menu" class=menu_class>
            <div class="flex items-center justify-between h-16 px-4 border-b border-gray-700">
                <span class="text-xl font-bold text-white">"Broker"</span>
                <button
                    id="menu-close"
                    class="p-2 rounded-lg text-gray-400 hover:text-white hover:bg-gray-700"
                    aria-label="Close navigation"
                    on:click=move |_| sidebar.dismiss(DismissTrigger::CloseIcon)
                >
                    "✕"
                </button>
            </div>
            <nav class="flex flex-col p-4 space-y-1">
                <MenuLink href="/" label="Overview" />
                <MenuLink href="/listeners" label="Listeners" />
            </nav>
        </aside>
    }
}

/// Menu entry. Client-side navigation does not reload the page, so the
/// menu closes itself on click.
#[component]
fn MenuLink(href: &'static str, label: &'static str) -> impl IntoView {
    let sidebar = use_sidebar();

    view! {
        <div class="flex flex-col" on:click=move |_| sidebar.dismiss(DismissTrigger::MenuLink)>
            <A
                href=href
                class="px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
                active_class="bg-gray-700 text-white"
            >
                {label}
            </A>
        </div>
    }
}

/// Dimmed backdrop behind the menu on narrow viewports
#[component]
pub fn MenuOverlay() -> impl IntoView {
    let sidebar = use_sidebar();

    let overlay_class = move || {
        let facets = sidebar.facets();
        format!(
            "fixed inset-0 bg-black/50 z-30 transition-opacity duration-300 {} {}",
            if facets.overlay_opaque { "opacity-100" } else { "opacity-0" },
            if facets.overlay_visible { "" } else { "hidden" },
        )
    };

    view! {
        <div
            id="menu-overlay"
            class=overlay_class
            on:click=move |_| sidebar.dismiss(DismissTrigger::Overlay)
        />
    }
}
