//! Sidebar Controller
//!
//! Holds the navigation panel in a signal, runs the timers its transitions
//! return, and wires the window-level dismiss and resize events.

use broker_dashboard::panel::{
    DismissTrigger, NavigationPanel, PanelFacets, PanelTimer, MOBILE_BREAKPOINT_PX,
};
use gloo_timers::callback::Timeout;
use leptos::*;

#[derive(Clone, Copy)]
pub struct Sidebar {
    panel: RwSignal<NavigationPanel>,
    facets: Memo<PanelFacets>,
}

impl Sidebar {
    /// Current presentation facets (reactive)
    pub fn facets(&self) -> PanelFacets {
        self.facets.get()
    }

    pub fn toggle(&self) {
        self.transition(|panel| panel.toggle(viewport_width()));
    }

    pub fn dismiss(&self, trigger: DismissTrigger) {
        self.transition(|panel| panel.dismiss(trigger));
    }

    pub fn update_layout(&self) {
        self.transition(|panel| panel.update_layout());
    }

    fn transition<F>(&self, f: F)
    where
        F: FnOnce(&mut NavigationPanel) -> Vec<PanelTimer>,
    {
        let mut timers = Vec::new();
        self.panel.update(|panel| timers = f(panel));
        for timer in timers {
            self.schedule(timer);
        }
    }

    fn schedule(&self, timer: PanelTimer) {
        let sidebar = *self;
        let millis = u32::try_from(timer.delay().as_millis()).unwrap_or(u32::MAX);
        Timeout::new(millis, move || {
            sidebar.transition(|panel| panel.fire(timer, viewport_width()));
        })
        .forget();
    }
}

fn viewport_width() -> f64 {
    web_sys::window()
        .and_then(|window| window.inner_width().ok())
        .and_then(|width| width.as_f64())
        .unwrap_or(MOBILE_BREAKPOINT_PX)
}

/// Provide the sidebar to the component tree and attach window listeners
pub fn provide_sidebar() -> Sidebar {
    let panel = create_rw_signal(NavigationPanel::new());
    let facets = create_memo(move |_| panel.with(|p| p.facets()));
    let sidebar = Sidebar { panel, facets };

    // The body is outside the Leptos tree, so scroll lock is applied here.
    create_effect(move |_| {
        let locked = facets.get().scroll_locked;
        if let Some(body) = document().body() {
            let overflow = if locked { "hidden" } else { "" };
            if let Err(e) = body.style().set_property("overflow", overflow) {
                web_sys::console::error_1(&format!("Failed to set body overflow: {:?}", e).into());
            }
        }
    });

    window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            sidebar.dismiss(DismissTrigger::Escape);
        }
    });

    window_event_listener(ev::resize, move |_| {
        sidebar.update_layout();
    });

    provide_context(sidebar);
    sidebar
}
