//! Worker thread implementation for asynchronous payload decoding.
//!
//! This module implements the Zellij worker thread interface. Country
//! payloads run to a few hundred kilobytes of JSON; deserializing and
//! normalizing them happens here so the main plugin thread never stalls
//! mid-render. It includes distributed tracing support for cross-thread
//! observability.

use crate::api::models::RawCountry;
use crate::domain::country::normalize_countries;
use crate::domain::metric::{GdpEstimator, NoisyGdpEstimator};
use crate::worker::{WorkerMessage, WorkerResponse};
use serde::{Deserialize, Serialize};
use zellij_tile::prelude::{PluginMessage, ZellijWorker};
use zellij_tile::shim::post_message_to_plugin;

/// Worker thread state for decoding API payloads.
///
/// This struct runs on a separate thread spawned by Zellij and processes
/// messages sent from the main plugin thread. The GDP estimator is
/// initialized lazily on first message receipt; tests construct the worker
/// with a deterministic one instead.
#[derive(Serialize, Deserialize, Default)]
pub struct AtlasWorker {
    /// Derived-metric generator, initialized lazily on first use.
    #[serde(skip)]
    estimator: Option<Box<dyn GdpEstimator>>,
}

impl AtlasWorker {
    /// Creates a worker with an explicit estimator.
    #[must_use]
    pub fn with_estimator(estimator: Box<dyn GdpEstimator>) -> Self {
        Self {
            estimator: Some(estimator),
        }
    }

    fn estimator(&mut self) -> &mut dyn GdpEstimator {
        self.estimator
            .get_or_insert_with(|| Box::new(NoisyGdpEstimator::new()))
            .as_mut()
    }

    /// Handles the `DecodeCountryList` message.
    ///
    /// Deserializes the payload into raw records and normalizes them
    /// one-to-one, in order.
    fn handle_decode_list(&mut self, payload: &str, generation: u64) -> WorkerResponse {
        match serde_json::from_str::<Vec<RawCountry>>(payload) {
            Ok(raws) => {
                let countries = normalize_countries(raws, self.estimator());
                tracing::debug!(
                    generation,
                    country_count = countries.len(),
                    "country list decoded"
                );
                WorkerResponse::CountryListDecoded {
                    generation,
                    countries,
                }
            }
            Err(e) => {
                tracing::debug!(generation, error = %e, "country list decode failed");
                WorkerResponse::DecodeFailed {
                    generation,
                    message: e.to_string(),
                }
            }
        }
    }

    /// Handles the `DecodeCountryDetail` message.
    ///
    /// The exact-name endpoint answers with an array of matches; only the
    /// first is relevant. An empty array decodes successfully to no country,
    /// which the screen renders as not-found.
    fn handle_decode_detail(&mut self, payload: &str, generation: u64) -> WorkerResponse {
        match serde_json::from_str::<Vec<RawCountry>>(payload) {
            Ok(raws) => {
                let country = normalize_countries(raws, self.estimator()).into_iter().next();
                tracing::debug!(generation, found = country.is_some(), "country detail decoded");
                WorkerResponse::CountryDetailDecoded {
                    generation,
                    country,
                }
            }
            Err(e) => {
                tracing::debug!(generation, error = %e, "country detail decode failed");
                WorkerResponse::DecodeFailed {
                    generation,
                    message: e.to_string(),
                }
            }
        }
    }

    /// Attaches the parent trace context from a message to the current thread.
    ///
    /// Reconstructs the OpenTelemetry context from the serialized trace
    /// information in the message, allowing spans created in the worker
    /// thread to be linked to their parent spans in the main thread.
    ///
    /// Returns a context guard that must be held for the duration of the
    /// operation.
    fn attach_parent_trace_context(message: &WorkerMessage) -> Option<opentelemetry::ContextGuard> {
        use opentelemetry::trace::{
            SpanContext, SpanId, TraceContextExt, TraceFlags, TraceId, TraceState,
        };

        let trace_context = match message {
            WorkerMessage::DecodeCountryList { trace_context, .. }
            | WorkerMessage::DecodeCountryDetail { trace_context, .. } => trace_context,
        }
        .as_ref()?;

        let trace_id = TraceId::from_hex(&trace_context.trace_id).ok()?;
        let span_id = SpanId::from_hex(&trace_context.parent_span_id).ok()?;

        let span_context = SpanContext::new(
            trace_id,
            span_id,
            TraceFlags::SAMPLED,
            true,
            TraceState::default(),
        );

        let otel_context = opentelemetry::Context::current().with_remote_span_context(span_context);

        Some(otel_context.attach())
    }

    /// Processes a worker message and returns the appropriate response.
    ///
    /// This is the main message handling entry point, dispatching to specific
    /// handlers based on the message variant. Automatically attaches trace
    /// context and creates a tracing span for the operation.
    pub fn handle_message(&mut self, message: WorkerMessage) -> WorkerResponse {
        let _context_guard = Self::attach_parent_trace_context(&message);

        let span = tracing::debug_span!(
            "worker_handle_message",
            generation = message.generation()
        );
        let _guard = span.entered();

        match message {
            WorkerMessage::DecodeCountryList {
                payload, generation, ..
            } => self.handle_decode_list(&payload, generation),
            WorkerMessage::DecodeCountryDetail {
                payload, generation, ..
            } => self.handle_decode_detail(&payload, generation),
        }
    }
}

/// Initializes tracing for the worker thread.
///
/// Sets up the same tracing configuration as the main thread, ensuring spans
/// from both threads end up in the same trace file.
fn init_worker_tracing() {
    use crate::observability;
    use crate::Config;

    let config = Config::default();
    observability::init_tracing(&config);
}

/// Tracks whether worker tracing has been initialized.
///
/// Used to ensure tracing is only set up once per worker thread lifetime.
static WORKER_TRACING_INITIALIZED: std::sync::atomic::AtomicBool =
    std::sync::atomic::AtomicBool::new(false);

impl ZellijWorker<'_> for AtlasWorker {
    /// Handles incoming messages from the main plugin thread.
    ///
    /// This is the Zellij worker interface entry point. It:
    /// 1. Initializes tracing on first message (once per worker lifetime)
    /// 2. Deserializes the message payload
    /// 3. Processes the message via `handle_message`
    /// 4. Serializes and sends the response back to the main thread
    ///
    /// # Arguments
    ///
    /// * `message` - Message name used for routing the response
    /// * `payload` - JSON-serialized `WorkerMessage`
    fn on_message(&mut self, message: String, payload: String) {
        if !WORKER_TRACING_INITIALIZED.load(std::sync::atomic::Ordering::Relaxed) {
            init_worker_tracing();
            WORKER_TRACING_INITIALIZED.store(true, std::sync::atomic::Ordering::Relaxed);
        }

        let worker_message: WorkerMessage = match serde_json::from_str(&payload) {
            Ok(msg) => msg,
            Err(e) => {
                tracing::debug!(error = %e, "failed to deserialize worker message");
                return;
            }
        };

        let response = self.handle_message(worker_message);

        match serde_json::to_string(&response) {
            Ok(payload) => {
                post_message_to_plugin(PluginMessage {
                    name: message,
                    payload,
                    worker_name: None,
                });
            }
            Err(e) => {
                tracing::debug!(error = %e, "failed to serialize worker response");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::metric::FixedGdpEstimator;

    const LIST_PAYLOAD: &str = r#"[
        {"name": {"common": "France", "official": "French Republic"},
         "cca3": "FRA", "region": "Europe", "population": 10, "area": 1.0,
         "flags": {"png": "u", "alt": "a"}},
        {"name": {"common": "Germany", "official": "Federal Republic of Germany"},
         "cca3": "DEU", "region": "Europe", "population": 20, "area": 2.0,
         "flags": {"png": "u", "alt": "a"}}
    ]"#;

    fn worker() -> AtlasWorker {
        AtlasWorker::with_estimator(Box::new(FixedGdpEstimator(100)))
    }

    #[test]
    fn decodes_a_list_payload_in_order() {
        let response = worker().handle_message(WorkerMessage::DecodeCountryList {
            payload: LIST_PAYLOAD.to_string(),
            generation: 7,
            trace_context: None,
        });

        match response {
            WorkerResponse::CountryListDecoded {
                generation,
                countries,
            } => {
                assert_eq!(generation, 7);
                assert_eq!(countries.len(), 2);
                assert_eq!(countries[0].code, "FRA");
                assert_eq!(countries[1].code, "DEU");
                assert_eq!(countries[0].gdp_estimate, 105);
            }
            other => panic!("unexpected response: {other:?}"),
        }
    }

    #[test]
    fn decodes_a_detail_payload_to_the_first_match() {
        let response = worker().handle_message(WorkerMessage::DecodeCountryDetail {
            payload: LIST_PAYLOAD.to_string(),
            generation: 3,
            trace_context: None,
        });

        match response {
            WorkerResponse::CountryDetailDecoded {
                generation,
                country,
            } => {
                assert_eq!(generation, 3);
                assert_eq!(country.unwrap().code, "FRA");
            }
            other => panic!("unexpected response: {other:?}"),
        }
    }

    #[test]
    fn an_empty_match_array_decodes_to_no_country() {
        let response = worker().handle_message(WorkerMessage::DecodeCountryDetail {
            payload: "[]".to_string(),
            generation: 3,
            trace_context: None,
        });

        assert_eq!(
            response,
            WorkerResponse::CountryDetailDecoded {
                generation: 3,
                country: None
            }
        );
    }

    #[test]
    fn malformed_json_reports_a_decode_failure() {
        let response = worker().handle_message(WorkerMessage::DecodeCountryList {
            payload: "{not json".to_string(),
            generation: 9,
            trace_context: None,
        });

        match response {
            WorkerResponse::DecodeFailed { generation, message } => {
                assert_eq!(generation, 9);
                assert!(!message.is_empty());
            }
            other => panic!("unexpected response: {other:?}"),
        }
    }

    #[test]
    fn worker_messages_round_trip_through_json() {
        let message = WorkerMessage::DecodeCountryList {
            payload: "[]".to_string(),
            generation: 1,
            trace_context: None,
        };
        let json = serde_json::to_string(&message).unwrap();
        let back: WorkerMessage = serde_json::from_str(&json).unwrap();
        assert_eq!(back, message);
    }
}
