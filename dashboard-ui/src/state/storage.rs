//! Browser session storage

use broker_dashboard::layout::SessionStore;
use web_sys::Storage;

/// `window.sessionStorage`, or nothing when the browser denies access
pub struct BrowserSessionStore {
    storage: Option<Storage>,
}

impl BrowserSessionStore {
    pub fn open() -> Self {
        let storage = web_sys::window().and_then(|window| window.session_storage().ok().flatten());
        if storage.is_none() {
            web_sys::console::warn_1(&"Session storage unavailable; layout will not persist".into());
        }
        Self { storage }
    }
}

impl SessionStore for BrowserSessionStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set_item(&self, key: &str, value: &str) {
        if let Some(storage) = &self.storage {
            if let Err(e) = storage.set_item(key, value) {
                web_sys::console::error_1(&format!("Failed to store {}: {:?}", key, e).into());
            }
        }
    }
}
