//! # Broker Dashboard
//!
//! Core behavior of a browser-based broker monitoring dashboard, kept free of
//! the DOM so it can be exercised with plain `cargo test`.
//!
//! ## Modules
//!
//! - [`panel`]: sliding navigation panel state machine
//! - [`layout`]: grid / single-column preference with session persistence
//! - [`schedule`]: deferred action queue and virtual-time timers
//! - [`format`]: time-of-day and number formatting
//! - [`fetch`]: error type and checks behind `fetch_data`
//! - [`broker`]: broker HTTP API response types
//! - `config`, `server`: static dashboard server (feature `server`)
//!
//! ## Quick Start
//!
//! ```rust
//! use broker_dashboard::panel::NavigationPanel;
//! use broker_dashboard::schedule::TimerQueue;
//!
//! let mut panel = NavigationPanel::new();
//! let mut timers = TimerQueue::new();
//!
//! for timer in panel.open(800.0) {
//!     timers.schedule(timer.delay(), timer);
//! }
//! timers.run_until_idle(|queue, timer| {
//!     for next in panel.fire(timer, 800.0) {
//!         queue.schedule(next.delay(), next);
//!     }
//! });
//!
//! assert!(panel.facets().overlay_opaque);
//! ```

pub mod broker;
pub mod fetch;
pub mod format;
pub mod layout;
pub mod panel;
pub mod schedule;

#[cfg(feature = "server")]
pub mod config;
#[cfg(feature = "server")]
pub mod server;

pub use broker::{Listener, ListenersResponse, SysTree};
pub use fetch::{FetchError, FetchResult};
pub use format::{
    current_time_string, prettify_number, time_string_to_timestamp, to_time_string, FormatError,
    MAX_SAFE_INTEGER,
};
pub use layout::{LayoutAction, LayoutMode, LayoutPreference, MemoryStore, SessionStore};
pub use panel::{
    DismissTrigger, NavigationPanel, PanelFacets, PanelState, PanelTimer, TimerKind,
    ViewportClass,
};
pub use schedule::{DeferredQueue, TimerQueue};

#[cfg(feature = "server")]
pub use config::{Config, ConfigError, LoggingConfig, ServerConfig};
#[cfg(feature = "server")]
pub use server::{build_router, serve, ServerError};
