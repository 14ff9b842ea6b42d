//! Zatlas: a Zellij plugin for browsing and comparing world countries.
//!
//! Zatlas is a terminal multiplexer plugin that provides:
//! - A searchable, paginated catalog of every country published by the
//!   REST Countries API
//! - A bounded two-country pick set feeding a side-by-side comparison overlay
//! - A detail view per country with capital, population, area, flag, and
//!   coat of arms
//! - Asynchronous payload decoding via Zellij worker threads
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point, router
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │  ← Business logic
//! │  - Filtering, paging, picking                       │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ API Layer     │   │ Worker Layer  │
//! │ (ui/)         │   │ (api/)        │   │ (worker/)     │
//! │ - Rendering   │   │ - Requests    │   │ - Decoding    │
//! │ - Theming     │   │ - Raw models  │   │ - Normalizing │
//! │ - Components  │   │ - Cache       │   │ - IPC bridge  │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Platform paths (infrastructure/)                 │
//! │  - Country model, errors, metric (domain/)          │
//! │  - Tracing (observability/)                         │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Data Flow
//!
//! A screen mount issues one HTTP request through the host. The response body
//! goes to the worker thread, which decodes and normalizes it; the resulting
//! countries flow back as an event and the screen becomes interactive.
//! Filtering, pagination, and picking are all computed in memory over that
//! one fetched list. Stale responses are discarded by mount generation.
//!
//! # Key Design Decisions
//!
//! ## One State Machine, Pluggable Presentation
//!
//! The application layer knows nothing about rendering. Everything observable
//! is exposed through computed view models, so presentation variants are
//! theme and component swaps, never a second copy of the screen logic.
//!
//! ## Distinct Interaction Intents
//!
//! Picking a country for comparison and opening its detail view are separate
//! events. The shim resolves each physical input (key or pointer zone) to at
//! most one of them, so a pick can never double as a navigation.
//!
//! ## Worker-Based Decoding
//!
//! Country payloads run to a few hundred kilobytes of JSON. Deserialization
//! and normalization run on a Zellij worker thread, keeping the render loop
//! responsive; screens stay in their loading phase until the decoded result
//! arrives.
//!
//! # Platform Support
//!
//! - **Target**: `wasm32-wasip1` (Zellij WASM runtime)
//! - **Terminal**: Any ANSI-capable terminal emulator

#![allow(clippy::multiple_crate_versions)]

pub mod api;
pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod worker;

pub mod ui;

pub mod observability;

pub use app::{
    handle_event, Action, AppState, Event, FetchTarget, HitZone, InputMode, ModalState, Route,
    SearchFocus,
};
pub use domain::{AtlasError, Country, Result};
pub use ui::Theme;

use std::collections::BTreeMap;

/// Plugin configuration parsed from Zellij's configuration system.
///
/// Configuration values are provided via Zellij's KDL layout configuration
/// and passed to the plugin during initialization.
///
/// # Example
///
/// ```kdl
/// plugin location="file:/path/to/zatlas.wasm" {
///     api_base_url "https://restcountries.com/v3.1"
///     theme "catppuccin-mocha"
///     theme_file "/path/to/theme.toml"
///     trace_level "debug"
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Base URL of the country data source.
    ///
    /// Defaults to the public REST Countries endpoint. Pointing this at a
    /// mirror (or a local fixture server) is the supported way to test the
    /// plugin against controlled data.
    pub api_base_url: Option<String>,

    /// Built-in theme name to use.
    ///
    /// Options: `catppuccin-mocha`, `catppuccin-latte`, `catppuccin-frappe`,
    /// `catppuccin-macchiato`. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file.
    ///
    /// Takes precedence over `theme_name`. See [`ui::theme`] for the format.
    pub theme_file: Option<String>,

    /// Tracing level for OpenTelemetry spans.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Zellij provides configuration as a `BTreeMap<String, String>` during
    /// plugin initialization. Unknown keys are ignored; empty values count as
    /// absent.
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let get = |key: &str| {
            config
                .get(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        Self {
            api_base_url: get("api_base_url"),
            theme_name: get("theme"),
            theme_file: get("theme_file"),
            trace_level: get("trace_level"),
        }
    }
}

/// Initializes the application state from configuration.
///
/// Resolves the theme (custom file first, then built-in name, then the
/// default) and constructs the initial `AppState`. The first real screen
/// mount happens once the host grants permissions.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing zatlas plugin");

    let theme = resolve_theme(config);
    AppState::new(theme)
}

fn resolve_theme(config: &Config) -> Theme {
    if let Some(theme_file) = &config.theme_file {
        match Theme::from_file(theme_file) {
            Ok(theme) => return theme,
            Err(e) => {
                tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
            }
        }
    }
    if let Some(theme_name) = &config.theme_name {
        if let Some(theme) = Theme::from_name(theme_name) {
            return theme;
        }
        tracing::debug!(theme_name = %theme_name, "unknown theme name, using default");
    }
    Theme::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_parses_known_keys_and_skips_empties() {
        let mut map = BTreeMap::new();
        map.insert("api_base_url".to_string(), "https://mirror.test/v3.1".to_string());
        map.insert("theme".to_string(), "catppuccin-latte".to_string());
        map.insert("trace_level".to_string(), "  ".to_string());
        map.insert("unrelated".to_string(), "x".to_string());

        let config = Config::from_zellij(&map);

        assert_eq!(config.api_base_url.as_deref(), Some("https://mirror.test/v3.1"));
        assert_eq!(config.theme_name.as_deref(), Some("catppuccin-latte"));
        assert_eq!(config.trace_level, None);
        assert_eq!(config.theme_file, None);
    }

    #[test]
    fn initialize_resolves_the_named_theme() {
        let config = Config {
            theme_name: Some("catppuccin-latte".to_string()),
            ..Default::default()
        };

        let state = initialize(&config);
        assert_eq!(state.theme.name, "catppuccin-latte");
    }

    #[test]
    fn initialize_falls_back_to_the_default_theme() {
        let config = Config {
            theme_name: Some("no-such-theme".to_string()),
            theme_file: Some("/no/such/file.toml".to_string()),
            ..Default::default()
        };

        let state = initialize(&config);
        assert_eq!(state.theme.name, "catppuccin-mocha");
    }
}
