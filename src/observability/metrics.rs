//! Metrics collection and exposition.
//!
//! # Responsibilities
//! - Define service metrics (request counts, latency)
//! - Expose Prometheus-compatible metrics endpoint
//!
//! # Metrics
//! - `offsets_requests_total` (counter): requests by method, status, protocol
//! - `offsets_request_duration_seconds` (histogram): latency distribution
//!
//! # Design Decisions
//! - Recording is unconditional; without an installed exporter the macros
//!   are no-ops, so the handler never branches on config
//! - Labels for method, status code, and request protocol

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter, serving scrapes on `addr`.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint listening"),
        Err(e) => tracing::error!(
            address = %addr,
            error = %e,
            "Failed to install metrics exporter"
        ),
    }
}

/// Record one handled request.
pub fn record_request(method: &str, status: u16, protocol: &str, start_time: Instant) {
    let labels = [
        ("method", method.to_string()),
        ("status", status.to_string()),
        ("protocol", protocol.to_string()),
    ];
    counter!("offsets_requests_total", &labels).increment(1);
    histogram!("offsets_request_duration_seconds", &labels)
        .record(start_time.elapsed().as_secs_f64());
}
