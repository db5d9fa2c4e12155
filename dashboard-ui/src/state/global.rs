//! Global Application State
//!
//! Broker data and status shared by all pages.

use broker_dashboard::broker::{Listener, SysTree};
use broker_dashboard::format::current_time_string;
use leptos::*;

use crate::api;

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct GlobalState {
    /// Latest `$SYS` snapshot
    pub systree: RwSignal<Option<SysTree>>,
    /// Configured broker listeners
    pub listeners: RwSignal<Vec<Listener>>,
    /// `HH:MM:SS` of the last successful refresh
    pub last_updated: RwSignal<Option<String>>,
    /// Global loading state
    pub loading: RwSignal<bool>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
}

/// Provide global state to the component tree
pub fn provide_global_state() -> GlobalState {
    let state = GlobalState {
        systree: create_rw_signal(None),
        listeners: create_rw_signal(Vec::new()),
        last_updated: create_rw_signal(None),
        loading: create_rw_signal(false),
        error: create_rw_signal(None),
    };

    provide_context(state);
    state
}

impl GlobalState {
    /// Re-fetch the `$SYS` snapshot
    pub fn refresh_systree(self) {
        spawn_local(async move {
            self.loading.set(true);
            match api::fetch_systree().await {
                Ok(tree) => {
                    self.systree.set(Some(tree));
                    self.mark_updated();
                }
                Err(e) => self.show_error(&format!("Failed to fetch metrics: {}", e)),
            }
            self.loading.set(false);
        });
    }

    /// Re-fetch the listener list
    pub fn refresh_listeners(self) {
        spawn_local(async move {
            self.loading.set(true);
            match api::fetch_listeners().await {
                Ok(response) => {
                    self.listeners.set(response.listeners);
                    self.mark_updated();
                }
                Err(e) => self.show_error(&format!("Failed to fetch listeners: {}", e)),
            }
            self.loading.set(false);
        });
    }

    fn mark_updated(&self) {
        self.last_updated.set(Some(current_time_string()));
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        web_sys::console::error_1(&message.into());
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }
}
