//! Dashboard Server
//!
//! Serves the built dashboard the way the broker's HTTP listener does.
//!
//! - `GET /path` - file under `http_dir`; directories resolve to `index.html`
//! - `GET /api/...` - `404 Not found.` (the metrics API lives in the broker)
//! - any other method - `405 Invalid HTTP Method`
//!
//! Paths that would escape `http_dir` are answered with 404.

pub mod error;

pub use error::{PlainError, ServerError, ServerResult};

use axum::{
    extract::Request,
    http::Method,
    middleware::{self, Next},
    response::{IntoResponse, Response},
    Router,
};
use std::path::Path;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::config::ServerConfig;

const API_PREFIX: &str = "/api/";

/// Build the router serving `http_dir`
pub fn build_router(http_dir: &Path) -> Router {
    let files = ServeDir::new(http_dir).append_index_html_on_directories(true);

    Router::new()
        .fallback_service(files)
        .layer(middleware::from_fn(gate))
        .layer(TraceLayer::new_for_http())
}

/// Reject non-GET requests and API paths before touching the filesystem.
async fn gate(request: Request, next: Next) -> Response {
    if request.method() != Method::GET {
        return PlainError::MethodNotAllowed.into_response();
    }
    if is_api_path(request.uri().path()) {
        return PlainError::NotFound.into_response();
    }
    next.run(request).await
}

fn is_api_path(path: &str) -> bool {
    path.len() >= API_PREFIX.len()
        && path.as_bytes()[..API_PREFIX.len()].eq_ignore_ascii_case(API_PREFIX.as_bytes())
}

/// Start the dashboard server
pub async fn serve(config: &ServerConfig) -> ServerResult<()> {
    if !config.http_dir.is_dir() {
        return Err(ServerError::MissingHttpDir(config.http_dir.clone()));
    }

    let router = build_router(&config.http_dir);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Serving {:?} on http://{}", config.http_dir, addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ServerError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Dashboard server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
