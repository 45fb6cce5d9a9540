//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! handlers and stores emit tracing spans/events
//!     → logging.rs (EnvFilter + fmt layer → stdout)
//!     → telemetry.rs (OpenTelemetry layer → batch OTLP/gRPC → collector)
//! ```
//!
//! # Design Decisions
//! - One span API: spans created through `tracing` are bridged to
//!   OpenTelemetry by the subscriber layer
//! - Export is best-effort; a dead collector drops spans and never fails
//!   a request
//! - Export is batched and bounded by a timeout so a stalled collector
//!   cannot block a worker

pub mod logging;
pub mod telemetry;

pub use telemetry::{init_telemetry, TelemetryError, TelemetryGuard};
