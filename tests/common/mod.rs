//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use price_server::config::ServiceConfig;
use price_server::http::HttpServer;
use price_server::store::PriceStore;

/// Start the price server on an ephemeral loopback port.
///
/// Returns the bound address; the server runs until the test process
/// exits.
pub async fn start_server(store: Arc<dyn PriceStore>) -> SocketAddr {
    price_server::observability::logging::init_logging();

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let mut config = test_config();
    config.listener.bind_address = addr.to_string();

    let server = HttpServer::new(config, store);
    tokio::spawn(async move {
        server.run(listener).await.unwrap();
    });

    addr
}

/// A fully-populated config pointing at nothing reachable.
pub fn test_config() -> ServiceConfig {
    ServiceConfig::from_lookup(|name| {
        let value = match name {
            "MYSQL_ADDRESS" => "127.0.0.1",
            "MYSQL_PORT" => "3306",
            "MYSQL_DATABASE" => "shopping_cart",
            "MYSQL_USER" => "tester",
            "MYSQL_PASSWORD" => "tester",
            "HOST_IP" => "127.0.0.1",
            _ => return None,
        };
        Some(value.to_string())
    })
    .unwrap()
}
