//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod layout_toggle;
pub mod metric_card;
pub mod sidebar;
pub mod toast;

pub use layout_toggle::LayoutToggle;
pub use metric_card::MetricCard;
pub use sidebar::{MenuButton, MenuOverlay, SlidingMenu};
pub use toast::Toast;
