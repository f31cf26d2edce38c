//! HTTP server setup and request handling.
//!
//! # Responsibilities
//! - Create Axum Router with a single catch-all handler
//! - Wire up middleware (request ID, tracing, timeout)
//! - Run the lookup pipeline and serialize its outcome
//! - Graceful shutdown on Ctrl+C
//!
//! # Design Decisions
//! - Every path and method reaches the same handler; the query string is the
//!   whole API
//! - The request ID layer sits outermost; the ID exists before the trace
//!   span opens

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::{
    extract::State,
    http::{HeaderMap, Method, Uri},
    response::{IntoResponse, Response},
    routing::any,
    Router,
};
use tokio::net::TcpListener;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::auth::ApiKeySet;
use crate::config::Config;
use crate::http::request::{MakeRequestUuid, X_REQUEST_ID};
use crate::http::response::OffsetsResponse;
use crate::lookup::{self, table};
use crate::observability::metrics;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub keys: Arc<ApiKeySet>,
}

/// HTTP server for the offsets service.
pub struct HttpServer {
    router: Router,
    config: Config,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: Config) -> Self {
        let state = AppState {
            keys: Arc::new(ApiKeySet::from_delimited(&config.auth.api_keys)),
        };

        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &Config, state: AppState) -> Router {
        Router::new()
            .route("/{*path}", any(offsets_handler))
            .route("/", any(offsets_handler))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(PropagateRequestIdLayer::new(X_REQUEST_ID))
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::new(X_REQUEST_ID, MakeRequestUuid))
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &Config {
        &self.config
    }
}

/// Main lookup handler.
/// Parses the query string, authenticates, and serves the offset record.
async fn offsets_handler(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> Response {
    let start_time = Instant::now();
    let request_id = headers
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown");

    tracing::debug!(
        request_id = %request_id,
        method = %method,
        path = uri.path(),
        "Handling offsets lookup"
    );

    match lookup::resolve_query(uri.query(), &state.keys) {
        Ok(found) => {
            tracing::debug!(
                request_id = %request_id,
                protocol = found.protocol.as_str(),
                mc_version = found.entry.version,
                needed_version = ?table::needed_version(found.entry.version),
                "Serving offsets"
            );
            metrics::record_request(method.as_str(), 200, found.protocol.as_str(), start_time);
            OffsetsResponse::new(found.entry.record).into_response()
        }
        Err(err) => {
            let status = err.status();
            tracing::warn!(
                request_id = %request_id,
                status = status.as_u16(),
                error = %err,
                "Rejecting offsets lookup"
            );
            metrics::record_request(method.as_str(), status.as_u16(), "none", start_time);
            err.into_response()
        }
    }
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received");
}
