//! Chart layout state
//!
//! Restores the session's layout choice at startup. A stored single-column
//! preference is applied by a task spawned after the app has mounted.

use broker_dashboard::layout::{LayoutAction, LayoutMode, LayoutPreference};
use broker_dashboard::schedule::DeferredQueue;
use leptos::*;

use super::storage::BrowserSessionStore;

#[derive(Clone, Copy)]
pub struct LayoutState {
    preference: RwSignal<LayoutPreference>,
}

impl LayoutState {
    pub fn mode(&self) -> LayoutMode {
        self.preference.with(|p| p.mode())
    }

    pub fn toggle(&self) {
        let store = BrowserSessionStore::open();
        self.preference.update(|p| {
            p.toggle_view(&store);
        });
    }
}

/// Provide layout state to the component tree
pub fn provide_layout_state() -> LayoutState {
    let store = BrowserSessionStore::open();
    let mut queue: DeferredQueue<LayoutAction> = DeferredQueue::new();
    let preference = create_rw_signal(LayoutPreference::restore(&store, &mut queue));

    if !queue.is_empty() {
        // Runs once the synchronous mount has finished.
        spawn_local(async move {
            preference.update(|p| p.settle(&mut queue, &store));
        });
    }

    let state = LayoutState { preference };
    provide_context(state);
    state
}
