//! Offsets API
//!
//! An HTTP lookup service for versioned memory offsets, built with Tokio and
//! Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌──────────────────────────────────────────────┐
//!                    │                 OFFSETS API                   │
//!                    │                                               │
//!     Client Request │  ┌─────────┐    ┌─────────┐    ┌───────────┐ │
//!     ───────────────┼─▶│  http   │───▶│ lookup  │───▶│   auth    │ │
//!                    │  │ server  │    │ params/ │    │ key set   │ │
//!                    │  └─────────┘    │protocol │    └─────┬─────┘ │
//!                    │                 └─────────┘          │       │
//!                    │                                      ▼       │
//!     Client Response│  ┌─────────┐                  ┌───────────┐  │
//!     ◀──────────────┼──│response │◀─────────────────│  lookup   │  │
//!                    │  │envelope │                  │  tables   │  │
//!                    │  └─────────┘                  └───────────┘  │
//!                    │                                               │
//!                    │  ┌─────────────────────────────────────────┐ │
//!                    │  │          Cross-Cutting Concerns          │ │
//!                    │  │   ┌─────────┐  ┌──────────────────────┐  │ │
//!                    │  │   │ config  │  │    observability     │  │ │
//!                    │  │   └─────────┘  └──────────────────────┘  │ │
//!                    │  └─────────────────────────────────────────┘ │
//!                    └──────────────────────────────────────────────┘
//! ```

use tokio::net::TcpListener;

use offsets_api::config;
use offsets_api::http::HttpServer;
use offsets_api::observability::{logging, metrics};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    tracing::info!("offsets-api v{} starting", env!("CARGO_PKG_VERSION"));

    let config = config::load_from_env()?;

    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        metrics_enabled = config.observability.metrics_enabled,
        api_keys = config.auth.api_keys.split(';').count(),
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        if let Ok(addr) = config.observability.metrics_address.parse() {
            metrics::init_metrics(addr);
        } else {
            tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            );
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    let server = HttpServer::new(config);
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
