//! Configuration schema definitions.
//!
//! The complete configuration for the price server. All of it is built
//! once at startup from the environment and never mutated afterwards.

/// Root configuration for the price server.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Relational store connection settings.
    pub database: DatabaseConfig,

    /// Trace export settings.
    pub telemetry: TelemetryConfig,
}

/// Listener configuration.
#[derive(Debug, Clone)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,

    /// Whole-request timeout; also bounds the database call.
    pub request_timeout_secs: u64,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
            request_timeout_secs: 30,
        }
    }
}

/// Connection settings for the MySQL store holding `product_price`.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Database host address.
    pub address: String,

    /// Database port.
    pub port: u16,

    /// Database name.
    pub database: String,

    /// Database user.
    pub user: String,

    /// Database password.
    pub password: String,
}

/// Trace export settings.
///
/// The collector is addressed by host only; the OTLP/gRPC port is the
/// conventional 4317 on an insecure channel (private-network trust model).
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    /// Host running the trace collector.
    pub collector_host: String,

    /// Service name attached as a resource attribute on every span.
    pub service_name: String,

    /// Service version attached as a resource attribute on every span.
    pub service_version: String,
}

impl TelemetryConfig {
    /// Full OTLP endpoint URL for the collector.
    pub fn collector_endpoint(&self) -> String {
        format!("http://{}:4317", self.collector_host)
    }
}
