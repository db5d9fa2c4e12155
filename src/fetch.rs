//! Fetch Contract
//!
//! Error type and the transport-independent checks behind the dashboard's
//! `fetch_data`. The browser front end performs the actual request; every
//! decision about what counts as a failure lives here.

use serde::de::DeserializeOwned;
use thiserror::Error;

/// Errors surfaced by `fetch_data`
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Caller supplied no endpoint; no request was made
    #[error("No endpoint provided to fetch data function")]
    MissingEndpoint,

    /// Server answered with a non-2xx status
    #[error("Failed to fetch: {status} {status_text}")]
    Status { status: u16, status_text: String },

    /// Request never produced a response
    #[error("Network error: {0}")]
    Network(String),

    /// Response body was not the expected JSON
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Result type for fetch operations
pub type FetchResult<T> = Result<T, FetchError>;

/// Reject an empty endpoint before any request is attempted.
pub fn require_endpoint(endpoint: &str) -> FetchResult<&str> {
    if endpoint.is_empty() {
        return Err(FetchError::MissingEndpoint);
    }
    Ok(endpoint)
}

/// Map a response status onto success or [`FetchError::Status`].
pub fn check_status(status: u16, status_text: &str) -> FetchResult<()> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(FetchError::Status {
            status,
            status_text: status_text.to_string(),
        })
    }
}

/// Decode a JSON response body.
pub fn parse_body<T: DeserializeOwned>(body: &str) -> FetchResult<T> {
    serde_json::from_str(body).map_err(|e| FetchError::Parse(e.to_string()))
}

/// Join an optional API base with an endpoint path.
///
/// An empty base keeps the endpoint relative to the page origin.
pub fn join_endpoint(base: &str, endpoint: &str) -> String {
    let base = base.trim_end_matches('/');
    if base.is_empty() {
        endpoint.to_string()
    } else if endpoint.starts_with('/') {
        format!("{}{}", base, endpoint)
    } else {
        format!("{}/{}", base, endpoint)
    }
}
