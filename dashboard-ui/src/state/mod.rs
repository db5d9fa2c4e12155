//! State Management
//!
//! Reactive wrappers around the panel and layout state machines, plus the
//! broker data shared between pages.

pub mod global;
pub mod layout;
pub mod sidebar;
pub mod storage;

pub use global::{provide_global_state, GlobalState};
pub use layout::{provide_layout_state, LayoutState};
pub use sidebar::{provide_sidebar, Sidebar};
