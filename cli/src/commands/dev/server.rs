//! # WebRS Dev Server
//!
//! File: cli/src/commands/dev/server.rs
//! Repository: https://github.com/webrs-tools/webrs
//!
//! ## Overview
//!
//! The development HTTP server: serves the output directory and bridges the
//! live-reload channel to connected browsers. Endpoints:
//!
//! - `GET /__webrs/events` — server-sent events mirroring the reload
//!   channel (`full`, `styles`, `scripts`).
//! - `GET /__webrs/client.js` — the browser-side listener. A `styles` event
//!   re-queries stylesheet hrefs in place; anything else — including a
//!   failed in-place injection — falls back to a full `location.reload()`.
//!   An open tab simply reconnects and reloads, so the user's existing tab
//!   is reused rather than a new one opened.
//! - everything else — static files from the output directory.
//!
//! ## Architecture
//!
//! Axum router with `tower-http` ServeDir as the fallback service, a trace
//! layer for request logging, and permissive CORS for local development.
//! The configured port being unavailable is fatal at startup: the server
//! does not scan for a free port, matching the error taxonomy (server/port
//! errors terminate the invocation).
//!
use crate::common::reload::ReloadChannel;
use crate::core::config::BuildConfig;
use crate::core::error::{Result, WebrsError};
use anyhow::Context;
use axum::extract::State;
use axum::response::sse::{Event, KeepAlive, Sse};
use axum::routing::get;
use axum::Router;
use futures_util::Stream;
use std::convert::Infallible;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::StreamExt;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    services::ServeDir,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{error, info, Level};

/// Browser-side reload listener served at `/__webrs/client.js`.
const CLIENT_JS: &str = r#"(function () {
  'use strict';
  var source = new EventSource('/__webrs/events');
  function fullReload() { location.reload(); }
  source.addEventListener('styles', function () {
    try {
      var links = document.querySelectorAll('link[rel="stylesheet"]');
      if (links.length === 0) { fullReload(); return; }
      links.forEach(function (link) {
        var href = link.getAttribute('href').split('?')[0];
        link.setAttribute('href', href + '?t=' + Date.now());
      });
    } catch (err) {
      fullReload();
    }
  });
  source.addEventListener('scripts', fullReload);
  source.addEventListener('full', fullReload);
})();
"#;

/// Shared state handed to the reload endpoints.
#[derive(Clone)]
struct AppState {
    reload: ReloadChannel,
}

/// # Run Dev Server (`run_server`)
///
/// Binds the configured address and serves until a shutdown signal
/// (Ctrl+C, or SIGTERM on Unix) arrives.
///
/// ## Errors
///
/// Returns an error if the address cannot be bound (most commonly: the
/// port is already in use) or if the server fails while running.
pub async fn run_server(config: BuildConfig, reload: ReloadChannel) -> Result<()> {
    let addr = SocketAddr::new(config.host, config.port);

    let listener = TcpListener::bind(addr).await.map_err(|e| {
        anyhow::Error::new(WebrsError::Server(format!(
            "failed to bind {addr}: {e}"
        )))
    })?;

    let app = create_app(&config, reload);

    println!("\n=================================================================");
    println!("📂 Serving files from: {}", config.dist.display());
    println!("🌐 Local URL:          http://localhost:{}", addr.port());
    println!("🔁 Live reload:        http://localhost:{}/__webrs/events", addr.port());
    println!("=================================================================\n");

    info!(
        "Dev server starting on {} for directory {}",
        addr,
        config.dist.display()
    );
    println!("Server starting! Press Ctrl+C to stop.");

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Dev server failed")?;

    println!("\nServer shutdown complete.");
    Ok(())
}

/// Resolves when Ctrl+C (or SIGTERM on Unix) is received, letting
/// `axum::serve` stop accepting connections and drain in-flight requests.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
        info!("Received Ctrl+C, initiating graceful shutdown...");
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut term) => {
                term.recv().await;
                info!("Received SIGTERM, initiating graceful shutdown...");
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}.", e);
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
}

/// # Create Axum Application (`create_app`)
///
/// Builds the router: reload endpoints, static file fallback over the
/// output directory, tracing, and permissive CORS.
fn create_app(config: &BuildConfig, reload: ReloadChannel) -> Router {
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::default())
        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
        .on_response(DefaultOnResponse::new().level(Level::DEBUG));

    Router::new()
        .route("/__webrs/events", get(reload_events))
        .route("/__webrs/client.js", get(client_js))
        .fallback_service(ServeDir::new(&config.dist))
        .layer(
            ServiceBuilder::new()
                .layer(trace_layer)
                .layer(CorsLayer::permissive()),
        )
        .with_state(AppState { reload })
}

/// SSE endpoint: one subscription per connected browser tab. Lagged
/// receivers just skip events, which the reload semantics tolerate.
async fn reload_events(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = std::result::Result<Event, Infallible>>> {
    let stream = BroadcastStream::new(state.reload.subscribe()).filter_map(|message| {
        message
            .ok()
            .map(|event| Ok(Event::default().event(event.as_str()).data(event.as_str())))
    });

    Sse::new(stream).keep_alive(KeepAlive::default())
}

/// Serves the browser-side reload listener.
async fn client_js() -> ([(axum::http::HeaderName, &'static str); 1], &'static str) {
    (
        [(axum::http::header::CONTENT_TYPE, "application/javascript")],
        CLIENT_JS,
    )
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    /// The router builds against a real output directory.
    #[tokio::test]
    async fn test_create_app_builds() -> Result<()> {
        let tmp = TempDir::new()?;
        let config = BuildConfig {
            dist: tmp.path().to_path_buf(),
            ..BuildConfig::default()
        };
        std::fs::write(config.dist.join("index.html"), "<html>Test</html>")?;

        let app = create_app(&config, ReloadChannel::new());
        assert_ne!(format!("{:?}", app), "");
        Ok(())
    }

    /// An occupied port is fatal at startup, not retried.
    #[tokio::test]
    async fn test_occupied_port_is_fatal() -> Result<()> {
        let tmp = TempDir::new()?;
        let holder = TcpListener::bind("127.0.0.1:0").await?;
        let addr = holder.local_addr()?;

        let config = BuildConfig {
            dist: tmp.path().to_path_buf(),
            host: addr.ip(),
            port: addr.port(),
            ..BuildConfig::default()
        };

        let result = run_server(config, ReloadChannel::new()).await;
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("failed to bind"));
        Ok(())
    }

    /// The client snippet degrades everything but styles to a full reload.
    #[test]
    fn test_client_snippet_covers_all_events() {
        assert!(CLIENT_JS.contains("'styles'"));
        assert!(CLIENT_JS.contains("'scripts'"));
        assert!(CLIENT_JS.contains("'full'"));
        assert!(CLIENT_JS.contains("location.reload()"));
    }
}
