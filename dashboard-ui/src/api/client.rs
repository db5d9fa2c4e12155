//! HTTP API Client
//!
//! `fetch_data` and typed helpers for the broker HTTP API.

use broker_dashboard::broker::{ListenersResponse, SysTree, LISTENERS_ENDPOINT, SYSTREE_ENDPOINT};
use broker_dashboard::fetch::{self, FetchError, FetchResult};
use gloo_net::http::Request;
use serde::de::DeserializeOwned;

/// Local storage key for an API base pointing at another origin
const API_BASE_KEY: &str = "dashboard_api_url";

/// Get the API base URL from local storage; empty means same origin
pub fn get_api_base() -> String {
    web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_BASE_KEY).ok().flatten())
        .map(|url| url.trim_end_matches('/').to_string())
        .unwrap_or_default()
}

/// GET `endpoint` and decode its JSON body.
///
/// Fails without touching the network when `endpoint` is empty. No retry.
pub async fn fetch_data<T: DeserializeOwned>(endpoint: &str) -> FetchResult<T> {
    let endpoint = fetch::require_endpoint(endpoint)?;

    let response = Request::get(endpoint)
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    fetch::check_status(response.status(), &response.status_text())?;

    let body = response
        .text()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    fetch::parse_body(&body)
}

/// Fetch the broker's `$SYS` metrics snapshot
pub async fn fetch_systree() -> FetchResult<SysTree> {
    fetch_data(&fetch::join_endpoint(&get_api_base(), SYSTREE_ENDPOINT)).await
}

/// Fetch the broker's listener configuration
pub async fn fetch_listeners() -> FetchResult<ListenersResponse> {
    fetch_data(&fetch::join_endpoint(&get_api_base(), LISTENERS_ENDPOINT)).await
}
