//! Structured logging.
//!
//! # Responsibilities
//! - Build the EnvFilter + fmt layers shared by both subscriber setups
//! - Provide a log-only init for tests and collector-less runs
//!
//! # Design Decisions
//! - Log level configurable via `RUST_LOG`, defaulting to service debug

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter when `RUST_LOG` is unset.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| "price_server=debug,tower_http=debug".into())
}

/// Initialize logging without the span export pipeline.
///
/// A no-op if a subscriber is already installed, so test harnesses can
/// call it unconditionally.
pub fn init_logging() {
    let _ = tracing_subscriber::registry()
        .with(env_filter())
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}
