//! Broker API access

pub mod client;

pub use client::{fetch_listeners, fetch_systree};
