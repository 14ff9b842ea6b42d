//! Worker thread message types for cross-thread communication.
//!
//! This module defines the request and response protocol between the main
//! plugin thread and the background worker that decodes API payloads. It also
//! implements distributed tracing context propagation across the thread
//! boundary.
//!
//! Every message carries the generation of the screen mount that initiated
//! the fetch; responses for a generation that is no longer mounted are
//! dropped by the event handler without touching state.

use crate::domain::Country;
use serde::{Deserialize, Serialize};

/// Distributed tracing context for cross-thread span propagation.
///
/// Captures the current trace and span IDs from OpenTelemetry to maintain
/// trace continuity when passing messages to the worker thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceContext {
    /// OpenTelemetry trace ID as a hex string.
    pub trace_id: String,

    /// Parent span ID for linking spans across threads.
    pub parent_span_id: String,
}

impl TraceContext {
    /// Creates a trace context from the current tracing span.
    ///
    /// Extracts the OpenTelemetry trace ID and span ID from the active span.
    /// Returns `None` if the current span context is invalid or not sampled.
    pub fn from_current() -> Option<Self> {
        use opentelemetry::trace::TraceContextExt;
        use tracing_opentelemetry::OpenTelemetrySpanExt;

        let span = tracing::Span::current();

        let otel_context = span.context();
        let span_ref = otel_context.span();
        let span_context = span_ref.span_context();

        if span_context.is_valid() {
            Some(Self {
                trace_id: format!("{:032x}", span_context.trace_id()),
                parent_span_id: format!("{:016x}", span_context.span_id()),
            })
        } else {
            None
        }
    }
}

/// Macro to generate builder methods for `WorkerMessage` variants.
///
/// Generates convenience constructors that automatically attach the current
/// trace context to each message variant.
macro_rules! worker_message_builders {
    (
        $(
            $builder_name:ident($variant:ident { $($field:ident: $ty:ty),* $(,)? })
        ),* $(,)?
    ) => {
        impl WorkerMessage {
            $(
                #[doc = concat!("Create a ", stringify!($variant), " message with current trace context")]
                pub fn $builder_name($($field: $ty),*) -> Self {
                    Self::$variant {
                        $($field,)*
                        trace_context: TraceContext::from_current(),
                    }
                }
            )*
        }
    };
}

worker_message_builders! {
    decode_country_list(DecodeCountryList { payload: String, generation: u64 }),
    decode_country_detail(DecodeCountryDetail { payload: String, generation: u64 }),
}

/// Messages sent from the main thread to the worker thread.
///
/// Each variant carries a raw JSON payload to decode and normalize off the
/// render thread, plus an optional trace context for distributed tracing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WorkerMessage {
    /// Decode a full-list payload into normalized countries.
    DecodeCountryList {
        /// Raw JSON response body.
        payload: String,

        /// Generation of the mount that fetched the payload.
        generation: u64,

        /// Trace context for linking spans across threads.
        #[serde(skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },

    /// Decode an exact-name lookup payload into one normalized country.
    DecodeCountryDetail {
        /// Raw JSON response body (an array of matches).
        payload: String,

        /// Generation of the mount that fetched the payload.
        generation: u64,

        /// Trace context for linking spans across threads.
        #[serde(skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },
}

impl WorkerMessage {
    /// Generation of the mount this message belongs to.
    #[must_use]
    pub fn generation(&self) -> u64 {
        match self {
            Self::DecodeCountryList { generation, .. }
            | Self::DecodeCountryDetail { generation, .. } => *generation,
        }
    }
}

/// Responses sent from the worker thread back to the main thread.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WorkerResponse {
    /// A list payload decoded and normalized successfully.
    CountryListDecoded {
        /// Generation of the mount that fetched the payload.
        generation: u64,

        /// Normalized countries in source order.
        countries: Vec<Country>,
    },

    /// A detail payload decoded successfully.
    ///
    /// `country` is `None` when the lookup matched nothing, which the screen
    /// renders as its not-found state rather than an error.
    CountryDetailDecoded {
        /// Generation of the mount that fetched the payload.
        generation: u64,

        /// First (and only relevant) match, normalized.
        country: Option<Country>,
    },

    /// The payload could not be decoded.
    DecodeFailed {
        /// Generation of the mount that fetched the payload.
        generation: u64,

        /// Human-readable error message.
        message: String,
    },
}
