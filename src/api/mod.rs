//! Upstream data-source layer for the REST Countries API.
//!
//! This module isolates everything that knows about the remote country data
//! source: the raw payload record types, request construction (URLs and
//! escaping), and a small per-screen response cache. The actual HTTP call is
//! made by the Zellij host on the plugin's behalf; this layer only describes
//! requests and interprets their payloads.
//!
//! # Modules
//!
//! - `models`: Raw payload record types, separate from domain models
//! - `client`: Request descriptors and URL escaping for the two endpoints
//! - `cache`: Per-screen response cache keyed by request URL

pub mod cache;
pub mod client;
pub mod models;

pub use cache::ResponseCache;
pub use client::{percent_decode, percent_encode, ApiRequest, RestCountriesApi};
pub use models::RawCountry;
