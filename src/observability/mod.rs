//! OpenTelemetry-based observability with file-based trace export.
//!
//! This module provides distributed tracing infrastructure for the plugin,
//! using OpenTelemetry OTLP format with file-based exporting. Traces are
//! written to JSON lines for offline analysis and debugging.
//!
//! # Architecture
//!
//! ```text
//! tracing-opentelemetry → OpenTelemetry SDK → FileSpanExporter → rotating file
//! ```
//!
//! Traces land in `zatlas-otlp.json` under the plugin data directory, with
//! numbered backups once the file passes the rotation threshold. Worker
//! messages carry a serialized trace context so spans from both threads link
//! into the same trace.
//!
//! # Modules
//!
//! - [`init`]: Tracing initialization and subscriber setup
//! - [`exporter`]: File-backed span exporter and tracer provider
//! - [`otlp`]: OTLP JSON span serialization
//! - [`log_file`]: Rotating trace file with numbered backups

mod exporter;
mod init;
mod log_file;
mod otlp;

pub use init::init_tracing;
