//! OTLP JSON span serialization.
//!
//! Converts OpenTelemetry span batches into OTLP (OpenTelemetry Protocol)
//! JSON documents for file export. One exported line is one complete OTLP
//! document with `resourceSpans`, `scopeSpans`, and `spans`, readable by
//! standard OTLP tooling.

use chrono::{DateTime, Utc};
use opentelemetry_sdk::export::trace::SpanData;
use opentelemetry_sdk::resource::Resource;
use serde_json::{json, Value as JsonValue};
use std::time::SystemTime;

/// Instrumentation scope name stamped into every exported batch.
const SCOPE_NAME: &str = "zatlas";

/// Formats a batch of spans as one OTLP JSON document.
///
/// # OTLP Shape
///
/// ```json
/// {
///   "resourceSpans": [{
///     "resource": {"attributes": [...]},
///     "scopeSpans": [{"scope": {"name": "zatlas"}, "spans": [...]}]
///   }]
/// }
/// ```
#[must_use]
pub fn format_export(resource: &Resource, batch: &[SpanData]) -> JsonValue {
    let resource_attributes: Vec<JsonValue> = resource
        .iter()
        .map(|(key, value)| json!({ "key": key.to_string(), "value": attribute_value(value) }))
        .collect();

    let spans: Vec<JsonValue> = batch.iter().map(format_span).collect();

    json!({
        "resourceSpans": [{
            "resource": { "attributes": resource_attributes },
            "scopeSpans": [{
                "scope": { "name": SCOPE_NAME },
                "spans": spans
            }]
        }]
    })
}

/// Formats a single span: IDs as hex strings, timestamps as unix
/// nanoseconds, status as OTLP code and message.
fn format_span(span: &SpanData) -> JsonValue {
    let (status_code, status_message) = status_fields(&span.status);

    json!({
        "traceId": format!("{:032x}", span.span_context.trace_id()),
        "spanId": format!("{:016x}", span.span_context.span_id()),
        "parentSpanId": if span.parent_span_id == opentelemetry::trace::SpanId::INVALID {
            String::new()
        } else {
            format!("{:016x}", span.parent_span_id)
        },
        "name": span.name,
        "kind": kind_code(&span.span_kind),
        "startTimeUnixNano": unix_nanos(span.start_time),
        "endTimeUnixNano": unix_nanos(span.end_time),
        "attributes": format_attributes(&span.attributes),
        "events": span.events.iter().map(|event| json!({
            "timeUnixNano": unix_nanos(event.timestamp),
            "name": event.name,
            "attributes": format_attributes(&event.attributes),
        })).collect::<Vec<_>>(),
        "links": span.links.iter().map(|link| json!({
            "traceId": format!("{:032x}", link.span_context.trace_id()),
            "spanId": format!("{:016x}", link.span_context.span_id()),
            "attributes": format_attributes(&link.attributes),
        })).collect::<Vec<_>>(),
        "status": { "code": status_code, "message": status_message },
    })
}

/// Unix-epoch nanoseconds of a timestamp, as the decimal string OTLP wants.
fn unix_nanos(time: SystemTime) -> String {
    DateTime::<Utc>::from(time)
        .timestamp_nanos_opt()
        .unwrap_or(0)
        .max(0)
        .to_string()
}

fn format_attributes(attributes: &[opentelemetry::KeyValue]) -> Vec<JsonValue> {
    attributes
        .iter()
        .map(|kv| json!({ "key": kv.key.to_string(), "value": attribute_value(&kv.value) }))
        .collect()
}

/// Maps an attribute value into OTLP's typed-value wrapper.
///
/// Arrays fall back to their debug rendering as a string value.
fn attribute_value(value: &opentelemetry::Value) -> JsonValue {
    use opentelemetry::Value;

    match value {
        Value::Bool(b) => json!({ "boolValue": b }),
        Value::I64(i) => json!({ "intValue": i.to_string() }),
        Value::F64(f) => json!({ "doubleValue": f }),
        Value::String(s) => json!({ "stringValue": s.to_string() }),
        Value::Array(_) => json!({ "stringValue": format!("{value:?}") }),
    }
}

/// OTLP span kind codes: Internal=1, Server=2, Client=3, Producer=4,
/// Consumer=5.
const fn kind_code(kind: &opentelemetry::trace::SpanKind) -> u8 {
    match kind {
        opentelemetry::trace::SpanKind::Internal => 1,
        opentelemetry::trace::SpanKind::Server => 2,
        opentelemetry::trace::SpanKind::Client => 3,
        opentelemetry::trace::SpanKind::Producer => 4,
        opentelemetry::trace::SpanKind::Consumer => 5,
    }
}

/// OTLP status codes: Unset=0, Ok=1, Error=2 with its description.
fn status_fields(status: &opentelemetry::trace::Status) -> (u8, String) {
    match status {
        opentelemetry::trace::Status::Unset => (0, String::new()),
        opentelemetry::trace::Status::Ok => (1, String::new()),
        opentelemetry::trace::Status::Error { description } => (2, description.to_string()),
    }
}
