//! File-backed OpenTelemetry span exporter and tracer provider.
//!
//! Implements a custom `SpanExporter` that writes OTLP JSON lines to a
//! rotating file instead of sending them over the network, which is the only
//! option inside the plugin sandbox. Spans are exported immediately
//! (non-batched) so a crashed pane still leaves its trace behind.

use super::log_file::TraceLogFile;
use super::otlp;
use futures_util::future::BoxFuture;
use opentelemetry::trace::TraceError;
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::TracerProvider;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};

/// Span exporter writing OTLP JSON lines to a rotating file.
struct FileSpanExporter {
    writer: TraceLogFile,
    resource: Resource,
    /// Prevents export after shutdown.
    is_shutdown: AtomicBool,
}

impl SpanExporter for FileSpanExporter {
    /// Exports a batch of spans as one OTLP JSON line.
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        if self.is_shutdown.load(Ordering::SeqCst) {
            return Box::pin(std::future::ready(Err(TraceError::from(
                "exporter is shut down",
            ))));
        }

        let document = otlp::format_export(&self.resource, &batch).to_string();
        let result = self
            .writer
            .append_line(&document)
            .map_err(|e| TraceError::from(e.to_string()));
        Box::pin(std::future::ready(result))
    }

    /// Marks the exporter as shut down; the file handle closes on drop.
    fn shutdown(&mut self) {
        self.is_shutdown.store(true, Ordering::SeqCst);
    }

    /// Replaces the resource metadata stamped into exported batches.
    fn set_resource(&mut self, resource: &Resource) {
        self.resource = resource.clone();
    }
}

impl std::fmt::Debug for FileSpanExporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileSpanExporter")
            .field("writer", &self.writer)
            .finish_non_exhaustive()
    }
}

/// Creates a tracer provider exporting to the given file.
///
/// # Parameters
///
/// * `trace_file` - Path of the OTLP JSON trace file
/// * `resource` - Resource metadata (service name, etc.)
#[must_use]
pub fn file_tracer_provider(trace_file: PathBuf, resource: Resource) -> TracerProvider {
    let exporter = FileSpanExporter {
        writer: TraceLogFile::new(trace_file),
        resource: resource.clone(),
        is_shutdown: AtomicBool::new(false),
    };

    TracerProvider::builder()
        .with_config(opentelemetry_sdk::trace::Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}
