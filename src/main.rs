//! Product Price Service
//!
//! A small HTTP service that answers "what is the price of product X"
//! from a relational store, exporting a tracing span for every lookup.
//!
//! # Architecture Overview
//!
//! ```text
//!                        ┌──────────────────────────────────────────────┐
//!                        │                PRICE SERVER                   │
//!                        │                                               │
//!   GET /price/{id}      │  ┌─────────┐     ┌─────────┐    ┌─────────┐  │
//!   ─────────────────────┼─▶│  http   │────▶│  store  │───▶│  MySQL  │──┼──▶ product_price
//!                        │  │ server  │     │ lookup  │    │  conn   │  │    table
//!                        │  └────┬────┘     └─────────┘    └─────────┘  │
//!                        │       │                                      │
//!                        │       ▼                                      │
//!                        │  ┌──────────────┐   OTLP/gRPC                │
//!                        │  │observability │──────────────▶ collector   │
//!                        │  │ span export  │                :4317       │
//!                        │  └──────────────┘                            │
//!                        │                                               │
//!                        │  ┌────────────────────────────────────────┐  │
//!                        │  │        Cross-Cutting Concerns           │  │
//!                        │  │  ┌────────┐  ┌─────────┐  ┌─────────┐  │  │
//!                        │  │  │ config │  │ logging │  │ timeout │  │  │
//!                        │  │  └────────┘  └─────────┘  └─────────┘  │  │
//!                        │  └────────────────────────────────────────┘  │
//!                        └──────────────────────────────────────────────┘
//! ```
//!
//! Startup order is strict: configuration is validated before anything
//! else, telemetry starts before the listener binds, and no request is
//! served with an unvalidated configuration.

use std::sync::Arc;

use tokio::net::TcpListener;

use price_server::config::ServiceConfig;
use price_server::http::HttpServer;
use price_server::observability;
use price_server::store::MySqlPriceStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Fail fast: every required environment variable is checked before
    // the listener binds or telemetry starts.
    let config = match ServiceConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    let telemetry = observability::init_telemetry(&config.telemetry)?;

    tracing::info!(
        service = %config.telemetry.service_name,
        version = %config.telemetry.service_version,
        collector = %config.telemetry.collector_endpoint(),
        "price-server starting"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        database = %config.database.address,
        "Listening for connections"
    );

    let store = Arc::new(MySqlPriceStore::new(config.database.clone()));
    let server = HttpServer::new(config, store);
    server.run(listener).await?;

    telemetry.shutdown();
    tracing::info!("Shutdown complete");
    Ok(())
}
