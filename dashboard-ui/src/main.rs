//! Broker Dashboard
//!
//! Broker monitoring dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Sliding navigation panel (overlay on mobile, push-content on desktop)
//! - Grid / single-column chart layout remembered for the session
//! - Live `$SYS` metrics and listener overview from the broker HTTP API
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. Panel and layout state machines come from the
//! `broker-dashboard` crate; this crate renders their state into the DOM and
//! runs their timers.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
