//! Shared utilities for integration testing.

use std::net::SocketAddr;

use offsets_api::{Config, HttpServer};

/// Credential list the test servers accept.
pub const TEST_API_KEYS: &str = "test-key-1;test-key-2";

/// Start a service instance on an ephemeral port and return its address.
pub async fn start_server() -> SocketAddr {
    start_server_with_keys(TEST_API_KEYS).await
}

/// Start a service instance with a custom credential list.
///
/// The listener is bound before the server task spawns, so requests may be
/// issued immediately.
pub async fn start_server_with_keys(api_keys: &str) -> SocketAddr {
    let mut config = Config::default();
    config.listener.bind_address = "127.0.0.1:0".to_string();
    config.auth.api_keys = api_keys.to_string();

    let listener = tokio::net::TcpListener::bind(&config.listener.bind_address)
        .await
        .unwrap();
    let addr = listener.local_addr().unwrap();

    let server = HttpServer::new(config);
    tokio::spawn(async move {
        let _ = server.run(listener).await;
    });

    addr
}
