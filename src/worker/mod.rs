//! Background worker thread for asynchronous payload decoding.
//!
//! This module implements the worker thread that deserializes and normalizes
//! API payloads so the main plugin thread stays responsive. It uses Zellij's
//! worker API for cross-thread communication and includes distributed tracing
//! support for observability.
//!
//! # Architecture
//!
//! - `messages`: Request/response protocol types with trace context propagation
//! - `handler`: Worker implementation and message processing logic

pub mod handler;
pub mod messages;

pub use handler::AtlasWorker;
pub use messages::{TraceContext, WorkerMessage, WorkerResponse};
