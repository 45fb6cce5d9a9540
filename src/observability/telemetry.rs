//! OTLP span export pipeline.
//!
//! # Responsibilities
//! - Build the OTLP/gRPC exporter for the configured collector
//! - Tag every span with the service name and version
//! - Install the process-wide subscriber (filter + fmt + OpenTelemetry)
//!
//! # Design Decisions
//! - Insecure channel to `{collector_host}:4317`; the collector is
//!   expected to sit on the same private network
//! - Batch export with a bounded timeout: a dead collector drops spans,
//!   it never fails or delays a request

use std::time::Duration;

use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::trace::{BatchConfigBuilder, BatchSpanProcessor, SdkTracerProvider};
use opentelemetry_sdk::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::TelemetryConfig;
use crate::observability::logging;

const EXPORT_TIMEOUT: Duration = Duration::from_secs(10);
const BATCH_DELAY: Duration = Duration::from_secs(5);

/// Error type for telemetry initialization.
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    #[error("error building OTLP exporter: {0}")]
    Exporter(String),
}

/// Owns the tracer provider for the life of the process.
///
/// Dropping the guard without calling [`TelemetryGuard::shutdown`] loses
/// spans still sitting in the batch queue.
pub struct TelemetryGuard {
    provider: SdkTracerProvider,
}

impl TelemetryGuard {
    /// Flush pending spans and shut the export pipeline down.
    pub fn shutdown(self) {
        if let Err(err) = self.provider.shutdown() {
            tracing::warn!(error = %err, "Error shutting down tracer provider");
        }
    }
}

/// Initialize the span export pipeline and the process-wide subscriber.
///
/// Once per process, before the listener binds. The returned guard must
/// be held until shutdown.
pub fn init_telemetry(config: &TelemetryConfig) -> Result<TelemetryGuard, TelemetryError> {
    let exporter = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .with_endpoint(config.collector_endpoint())
        .with_timeout(EXPORT_TIMEOUT)
        .build()
        .map_err(|err| TelemetryError::Exporter(err.to_string()))?;

    let resource = Resource::builder()
        .with_attributes([
            KeyValue::new("service.name", config.service_name.clone()),
            KeyValue::new("service.version", config.service_version.clone()),
        ])
        .build();

    let processor = BatchSpanProcessor::builder(exporter)
        .with_batch_config(
            BatchConfigBuilder::default()
                .with_scheduled_delay(BATCH_DELAY)
                .build(),
        )
        .build();

    let provider = SdkTracerProvider::builder()
        .with_resource(resource)
        .with_span_processor(processor)
        .build();

    let tracer = provider.tracer(config.service_name.clone());

    tracing_subscriber::registry()
        .with(logging::env_filter())
        .with(tracing_subscriber::fmt::layer())
        .with(OpenTelemetryLayer::new(tracer))
        .init();

    Ok(TelemetryGuard { provider })
}
