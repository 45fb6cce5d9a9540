//! HTTP server setup and request handling.
//!
//! # Responsibilities
//! - Create the Axum router with the price route
//! - Wire up middleware (request timeout, trace layer)
//! - Dispatch lookups to the price store inside a tracing span
//! - Map lookup outcomes to status codes and JSON bodies
//!
//! # Design Decisions
//! - Path extraction rejects non-integer product ids with 400 before the
//!   store is ever touched
//! - Found and NotFound are both 200: absence is a domain outcome, not a
//!   transport error; NotFound serializes as JSON `null`, never a zero price
//! - Store errors map to 500; the body carries no database detail
//! - The request timeout bounds the database call, so a stalled store
//!   cannot hold a worker indefinitely

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use tokio::net::TcpListener;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};
use tracing::Instrument;

use crate::config::ServiceConfig;
use crate::store::{LookupResult, PriceStore, StoreError};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn PriceStore>,
}

/// HTTP server for the price service.
pub struct HttpServer {
    router: Router,
    config: ServiceConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration and store.
    pub fn new(config: ServiceConfig, store: Arc<dyn PriceStore>) -> Self {
        let state = AppState { store };
        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &ServiceConfig, state: AppState) -> Router {
        Router::new()
            .route("/price/{product_id}", get(product_price))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.listener.request_timeout_secs,
            )))
            .layer(TraceLayer::new_for_http())
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
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }
}

/// Price lookup handler.
///
/// The lookup runs inside a span named for the operation; the span closes
/// and is queued for export when the lookup completes, on every path.
async fn product_price(
    State(state): State<AppState>,
    Path(product_id): Path<u64>,
) -> Response {
    tracing::debug!(product_id, "Received price request");

    let span = tracing::info_span!("Product price lookup", product.id = product_id);
    let result = state.store.lookup(product_id).instrument(span).await;

    match result {
        Ok(LookupResult::Found(price)) => (StatusCode::OK, Json(price)).into_response(),
        Ok(LookupResult::NotFound) => {
            tracing::debug!(product_id, "No price for product");
            (StatusCode::OK, Json(serde_json::Value::Null)).into_response()
        }
        Err(err @ StoreError::Connection(_)) => {
            tracing::error!(product_id, error = %err, "Price store unreachable");
            (StatusCode::INTERNAL_SERVER_ERROR, "error retrieving product price").into_response()
        }
        Err(err @ StoreError::Query(_)) => {
            tracing::error!(product_id, error = %err, "Price query failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "error retrieving product price").into_response()
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
