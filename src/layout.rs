//! Layout Preference
//!
//! Grid vs single-column chart layout, remembered for the browser session.
//!
//! The preference starts as grid. A stored single-column choice is replayed
//! at startup by enqueuing one [`LayoutAction::ToggleView`] on a
//! [`DeferredQueue`], so the restore goes through the same toggle a click
//! does.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::schedule::DeferredQueue;

/// Session storage key holding the serialized preference
pub const GRID_VIEW_KEY: &str = "isGridView";

/// Key/value storage scoped to the browser session
///
/// Methods take `&self` because the browser's `Storage` does.
pub trait SessionStore {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str);
}

/// In-memory [`SessionStore`]
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `value` under `key`
    pub fn with_item(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.set_item(key, value);
        store
    }
}

impl SessionStore for MemoryStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    Grid,
    SingleColumn,
}

impl LayoutMode {
    /// Class list for the charts container
    pub fn container_class(&self) -> &'static str {
        match self {
            LayoutMode::Grid => "grid grid-cols-1 lg:grid-cols-2 gap-4",
            LayoutMode::SingleColumn => "grid grid-cols-1 gap-4",
        }
    }

    /// Toggle label; it names the mode a click switches to.
    pub fn toggle_label(&self) -> &'static str {
        match self {
            LayoutMode::Grid => "Single Column",
            LayoutMode::SingleColumn => "Grid View",
        }
    }
}

/// Deferred startup actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutAction {
    ToggleView,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutPreference {
    is_grid_view: bool,
}

impl Default for LayoutPreference {
    fn default() -> Self {
        Self { is_grid_view: true }
    }
}

impl LayoutPreference {
    /// Build the startup preference and queue any reconciliation.
    ///
    /// The returned value is always the grid default; a stored `false`
    /// enqueues one toggle to run after setup. Stored values that are not a
    /// serialized boolean are treated as absent.
    pub fn restore<S: SessionStore>(store: &S, queue: &mut DeferredQueue<LayoutAction>) -> Self {
        let preference = Self::default();

        match read_stored(store) {
            Some(false) => {
                tracing::debug!("stored single-column layout, deferring toggle");
                queue.enqueue(LayoutAction::ToggleView);
            }
            Some(true) | None => {}
        }

        preference
    }

    pub fn is_grid_view(&self) -> bool {
        self.is_grid_view
    }

    pub fn mode(&self) -> LayoutMode {
        if self.is_grid_view {
            LayoutMode::Grid
        } else {
            LayoutMode::SingleColumn
        }
    }

    /// Flip between grid and single column and persist the new flag.
    pub fn toggle_view<S: SessionStore>(&mut self, store: &S) -> LayoutMode {
        self.is_grid_view = !self.is_grid_view;

        // serde_json writes exactly "true" / "false".
        let serialized = serde_json::Value::Bool(self.is_grid_view).to_string();
        store.set_item(GRID_VIEW_KEY, &serialized);

        self.mode()
    }

    pub fn apply<S: SessionStore>(&mut self, action: LayoutAction, store: &S) {
        match action {
            LayoutAction::ToggleView => {
                self.toggle_view(store);
            }
        }
    }

    /// Run every deferred action queued during startup.
    pub fn settle<S: SessionStore>(&mut self, queue: &mut DeferredQueue<LayoutAction>, store: &S) {
        for action in queue.drain() {
            self.apply(action, store);
        }
    }
}

fn read_stored<S: SessionStore>(store: &S) -> Option<bool> {
    let raw = store.get_item(GRID_VIEW_KEY)?;
    match serde_json::from_str::<bool>(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(value = %raw, error = %e, "ignoring malformed layout preference");
            None
        }
    }
}
