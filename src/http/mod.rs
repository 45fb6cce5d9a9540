//! HTTP subsystem.
//!
//! # Responsibilities
//! - Bind the single price route and its middleware stack
//! - Translate lookup outcomes into status codes and JSON bodies
//! - Serve with graceful shutdown

pub mod server;

pub use server::{AppState, HttpServer};
