//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! process environment
//!     → env.rs (read required variables, collect every missing name)
//!     → ServiceConfig (validated, immutable)
//!     → shared by reference with the http and store subsystems
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; there is no reload path
//! - Validation reports all missing variables, not just the first, so a
//!   single failed startup names everything the operator must fix
//! - Business logic never reads the environment; it receives config
//!   structs constructed here at startup

pub mod env;
pub mod schema;

pub use env::ConfigError;
pub use schema::{DatabaseConfig, ListenerConfig, ServiceConfig, TelemetryConfig};
