//! Page Components

pub mod dashboard;
pub mod listeners;

pub use dashboard::Dashboard;
pub use listeners::Listeners;
