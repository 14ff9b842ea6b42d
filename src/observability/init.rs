//! Tracing initialization and subscriber setup.
//!
//! This module configures the tracing subscriber with OpenTelemetry
//! integration, wiring the pipeline from `tracing` macros through the OTLP
//! formatter to the rotating trace file.

use super::exporter;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Name of the trace file inside the plugin data directory.
const TRACE_FILE_NAME: &str = "zatlas-otlp.json";

/// Initializes the tracing subscriber with file-based OTLP export.
///
/// # Trace Level Resolution
///
/// 1. `RUST_LOG` environment variable, when set
/// 2. `config.trace_level`, when set
/// 3. Default: `"info"`
///
/// # Initialization Behavior
///
/// - Creates the data directory if it does not exist
/// - Silently does nothing if directory creation fails (observability is
///   optional)
/// - Idempotent: only the first call installs a subscriber
pub fn init_tracing(config: &Config) {
    let level = config
        .trace_level
        .clone()
        .unwrap_or_else(|| "info".to_string());

    let data_dir = crate::infrastructure::data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let resource = Resource::new(vec![opentelemetry::KeyValue::new("service.name", "zatlas")]);

    let provider = exporter::file_tracer_provider(data_dir.join(TRACE_FILE_NAME), resource);
    let tracer = provider.tracer("zatlas");
    let otel_layer = OpenTelemetryLayer::new(tracer);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::registry().with(filter).with(otel_layer);

    let _ = subscriber.try_init();
}
