//! Zellij plugin wrapper and entry point.
//!
//! This module provides the thin integration layer between the Zatlas library
//! and the Zellij plugin system. It implements the `ZellijPlugin` and
//! `ZellijWorker` traits to handle Zellij events and lifecycle, and it owns
//! every side effect: HTTP requests through the host, screen routing, worker
//! IPC, and rendering.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────┐
//! │   Zellij Main Thread    │
//! │  ┌──────────────────┐   │
//! │  │  State (plugin)  │   │  ← UI state, event handling, router
//! │  └──────────────────┘   │
//! │          │              │
//! │          │ IPC          │
//! │          ▼              │
//! │  ┌──────────────────┐   │
//! │  │   AtlasWorker    │   │  ← Payload decoding
//! │  │ (worker thread)  │   │  ← Normalization
//! │  └──────────────────┘   │
//! └─────────────────────────┘
//! ```
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, request web permission,
//!    subscribe to events
//! 2. **Permission Granted**: Mount the list screen and fire its fetch
//! 3. **Update**: Translate Zellij events to library events, execute actions
//! 4. **Render**: Call the library render function
//!
//! # Routing
//!
//! Navigation is an action, not a state mutation: the library emits
//! `NavigateToDetail` / `NavigateBack`, and this shim executes them by
//! mounting the target screen and firing its fetch. An in-flight response is
//! tagged with the mounting screen's generation via the web-request context;
//! responses for torn-down screens are dropped by the event handler.
//!
//! # Keybindings
//!
//! List screen (normal mode):
//! - `j`/`k` or arrows: move cursor, `h`/`l`: change page
//! - `Space`: toggle comparison pick, `Enter`: open detail view
//! - `c`: open comparison (needs exactly 2 picks), `/`: search, `q`: quit
//!
//! Search mode: type to filter, `Enter`: browse results, `ESC`: leave search
//!
//! Detail screen: `ESC`/`b`: back, `q`: quit
//!
//! Pointer: clicking the pick column toggles a pick; clicking anywhere else
//! on a row opens the detail view; one click never does both. Clicking the
//! backdrop dismisses the comparison overlay.

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;
use zellij_tile::shim::post_message_to;

use zatlas::api::{percent_decode, ApiRequest, ResponseCache, RestCountriesApi};
use zatlas::app::{
    handle_event, Action, Event, FetchTarget, HitZone, InputMode, Route, SearchFocus,
};
use zatlas::ui::components::modal_frame;
use zatlas::worker::{AtlasWorker, WorkerMessage, WorkerResponse};
use zatlas::Config;

// Register plugin and worker with Zellij
register_plugin!(State);
register_worker!(AtlasWorker, zatlas_worker, ZATLAS_WORKER);

/// Web-request context key naming the fetch target.
const CONTEXT_TARGET: &str = "target";
/// Web-request context key carrying the mount generation.
const CONTEXT_GENERATION: &str = "generation";
/// Web-request context key carrying the request URL (for the cache).
const CONTEXT_URL: &str = "url";

/// Plugin state wrapper.
///
/// Wraps the library's `AppState` with Zellij-specific concerns: worker
/// communication, the injected request factory and response cache, and the
/// last known terminal size for pointer hit-testing.
struct State {
    /// Core application state from the library layer.
    app: zatlas::app::AppState,

    /// Worker thread identifier for IPC messaging.
    worker_name: String,

    /// Request factory for the configured data source.
    api: RestCountriesApi,

    /// Completed-response cache, consulted before issuing a request.
    cache: ResponseCache,

    /// Terminal size from the most recent render, for pointer hit-testing.
    last_rows: usize,
    last_cols: usize,
}

impl Default for State {
    fn default() -> Self {
        let default_config = Config::default();
        Self {
            app: zatlas::initialize(&default_config),
            worker_name: "zatlas".to_string(),
            api: RestCountriesApi::default(),
            cache: ResponseCache::new(),
            last_rows: 24,
            last_cols: 80,
        }
    }
}

impl ZellijPlugin for State {
    /// Initializes the plugin on load.
    ///
    /// Parses configuration, initializes tracing, constructs the request
    /// factory, requests web access, and subscribes to events. The list
    /// screen mounts once the permission result arrives.
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        zatlas::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!("plugin loading started");
        self.app = zatlas::initialize(&config);
        self.api = RestCountriesApi::new(config.api_base_url.clone());
        tracing::debug!(api_base_url = ?config.api_base_url, "app state initialized");

        request_permission(&[PermissionType::WebAccess]);

        subscribe(&[
            EventType::Key,
            EventType::Mouse,
            EventType::CustomMessage,
            EventType::WebRequestResult,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    /// Handles incoming Zellij events.
    ///
    /// Translates Zellij events to library events, delegates to
    /// `handle_event`, and executes resulting actions. Returns `true` if the
    /// UI should re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::event_name(&event);
        let span = tracing::debug_span!("plugin_update", event_type = %event_name);
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::Mouse(ref mouse) => match self.map_mouse_event(mouse) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::CustomMessage(message, payload) => {
                match self.map_custom_message_event(&message, &payload) {
                    Some(event) => event,
                    None => return false,
                }
            }
            zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, context) => {
                match self.map_web_request_result(status, body, &context) {
                    Some(event) => event,
                    None => return false,
                }
            }
            zellij_tile::prelude::Event::PermissionRequestResult(permissions) => {
                return self.handle_permission_result(permissions);
            }
            _ => return false,
        };

        self.dispatch(&our_event)
    }

    /// Renders the plugin UI.
    ///
    /// Remembers the terminal size for pointer hit-testing, then delegates to
    /// the library's rendering layer.
    fn render(&mut self, rows: usize, cols: usize) {
        self.last_rows = rows;
        self.last_cols = cols;
        zatlas::ui::render(&self.app, rows, cols);
    }
}

impl State {
    /// Runs a library event through the handler and executes the resulting
    /// actions. Returns whether the UI should re-render.
    fn dispatch(&mut self, event: &Event) -> bool {
        match handle_event(&mut self.app, event) {
            Ok((should_render, actions)) => {
                let mut render = should_render;
                for action in actions {
                    render |= self.execute_action(&action);
                }
                render
            }
            Err(e) => {
                tracing::debug!(error = %e, "error handling event");
                false
            }
        }
    }

    /// Executes an action returned from event handling.
    ///
    /// Translates library actions to Zellij API calls and routing.
    ///
    /// # Returns
    ///
    /// `true` when the action itself changed visible state (a navigation
    /// mounted a new screen).
    fn execute_action(&mut self, action: &Action) -> bool {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
                false
            }
            Action::PostToWorker(message) => {
                self.post_worker_message(message);
                false
            }
            Action::NavigateToDetail { name } => {
                self.open_detail_screen(name);
                true
            }
            Action::NavigateBack => {
                self.open_list_screen();
                true
            }
        }
    }

    /// Mounts a fresh list screen and fires its catalog fetch.
    fn open_list_screen(&mut self) {
        let generation = self.app.mount_list();
        let request = self.api.country_list();
        self.start_fetch(request, FetchTarget::CountryList, generation);
    }

    /// Mounts a fresh detail screen for the escaped name and fires its
    /// lookup.
    fn open_detail_screen(&mut self, escaped_name: &str) {
        let generation = self.app.mount_detail(percent_decode(escaped_name));
        let request = self.api.country_by_name(escaped_name);
        self.start_fetch(request, FetchTarget::CountryDetail, generation);
    }

    /// Issues a request through the host, or replays it from the cache when
    /// the same URL already completed in this pane.
    fn start_fetch(&mut self, request: ApiRequest, target: FetchTarget, generation: u64) {
        if let Some(hit) = self.cache.lookup(&request.url).cloned() {
            tracing::debug!(url = %request.url, "replaying cached response");
            self.dispatch(&Event::FetchArrived {
                target,
                generation,
                status: hit.status,
                body: hit.body,
            });
            return;
        }

        tracing::debug!(url = %request.url, generation, "issuing web request");
        let mut context = BTreeMap::new();
        context.insert(CONTEXT_TARGET.to_string(), target_tag(target).to_string());
        context.insert(CONTEXT_GENERATION.to_string(), generation.to_string());
        context.insert(CONTEXT_URL.to_string(), request.url.clone());

        web_request(request.url, HttpVerb::Get, BTreeMap::new(), Vec::new(), context);
    }

    /// Handles permission request results.
    ///
    /// The first granted result mounts the list screen and fires its fetch.
    fn handle_permission_result(&mut self, permissions: PermissionStatus) -> bool {
        match permissions {
            PermissionStatus::Granted => {
                tracing::debug!("permissions granted - mounting list screen");
                self.open_list_screen();
                true
            }
            PermissionStatus::Denied => {
                tracing::warn!("web access denied - plugin cannot fetch countries");
                false
            }
        }
    }

    /// Maps keyboard events to application events based on the mounted
    /// screen and input mode.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        if key.bare_key == BareKey::Char('n') && key.has_modifiers(&[KeyModifier::Ctrl]) {
            return Some(Event::CursorDown);
        }
        if key.bare_key == BareKey::Char('p') && key.has_modifiers(&[KeyModifier::Ctrl]) {
            return Some(Event::CursorUp);
        }

        match &self.app.route {
            Route::Detail(_) => match key.bare_key {
                BareKey::Esc | BareKey::Backspace | BareKey::Char('b') => Some(Event::GoBack),
                BareKey::Char('q') => Some(Event::CloseFocus),
                _ => None,
            },
            Route::List(screen) if screen.modal.is_open() => match key.bare_key {
                BareKey::Esc | BareKey::Enter | BareKey::Char('c') => Some(Event::CloseCompare),
                BareKey::Char('q') => Some(Event::CloseFocus),
                _ => None,
            },
            Route::List(screen) => match screen.input_mode {
                InputMode::Normal => match key.bare_key {
                    BareKey::Down | BareKey::Char('j') => Some(Event::CursorDown),
                    BareKey::Up | BareKey::Char('k') => Some(Event::CursorUp),
                    BareKey::Left | BareKey::Char('h') | BareKey::PageUp => Some(Event::PrevPage),
                    BareKey::Right | BareKey::Char('l') | BareKey::PageDown => {
                        Some(Event::NextPage)
                    }
                    BareKey::Char(' ') => Some(Event::TogglePick { row: screen.cursor }),
                    BareKey::Enter => Some(Event::SelectRow { row: screen.cursor }),
                    BareKey::Char('c') => Some(Event::OpenCompare),
                    BareKey::Char('/') => Some(Event::SearchMode),
                    BareKey::Char('q') => Some(Event::CloseFocus),
                    BareKey::Esc => Some(Event::Escape),
                    _ => None,
                },
                InputMode::Search(SearchFocus::Typing) => match key.bare_key {
                    BareKey::Esc => Some(Event::ExitSearch),
                    BareKey::Enter => Some(Event::FocusResults),
                    BareKey::Backspace => Some(Event::Backspace),
                    BareKey::Down => Some(Event::CursorDown),
                    BareKey::Up => Some(Event::CursorUp),
                    BareKey::Char(c) => Some(Event::Char(c)),
                    _ => None,
                },
                InputMode::Search(SearchFocus::Navigating) => match key.bare_key {
                    BareKey::Esc => Some(Event::ExitSearch),
                    BareKey::Char('/') => Some(Event::FocusSearchBar),
                    BareKey::Down | BareKey::Char('j') => Some(Event::CursorDown),
                    BareKey::Up | BareKey::Char('k') => Some(Event::CursorUp),
                    BareKey::Left | BareKey::Char('h') => Some(Event::PrevPage),
                    BareKey::Right | BareKey::Char('l') => Some(Event::NextPage),
                    BareKey::Char(' ') => Some(Event::TogglePick { row: screen.cursor }),
                    BareKey::Enter => Some(Event::SelectRow { row: screen.cursor }),
                    BareKey::Char('c') => Some(Event::OpenCompare),
                    BareKey::Char('q') => Some(Event::CloseFocus),
                    _ => None,
                },
            },
        }
    }

    /// Maps pointer events to application events.
    ///
    /// A click resolves to exactly one intent: toggling a pick (pick column),
    /// opening a detail view (rest of the row), dismissing the overlay
    /// (backdrop), or going back (detail back hint). Zellij reports 0-based
    /// coordinates; the hit test works in 1-based terminal rows.
    fn map_mouse_event(&self, mouse: &Mouse) -> Option<Event> {
        match mouse {
            Mouse::ScrollDown(_) => Some(Event::CursorDown),
            Mouse::ScrollUp(_) => Some(Event::CursorUp),
            Mouse::LeftClick(line, col) => {
                let screen_row = usize::try_from(*line).ok()?.saturating_add(1);
                let screen_col = col.saturating_add(1);

                match &self.app.route {
                    Route::Detail(_) => {
                        if screen_row == 2 {
                            Some(Event::GoBack)
                        } else {
                            None
                        }
                    }
                    Route::List(screen) if screen.modal.is_open() => {
                        let (top, left, height, width) = modal_frame(self.last_rows, self.last_cols);
                        let inside = (top..top + height).contains(&screen_row)
                            && (left..left + width).contains(&screen_col);
                        if inside {
                            None
                        } else {
                            Some(Event::CloseCompare)
                        }
                    }
                    Route::List(_) => {
                        let hit = self.app.list_hit(screen_row, screen_col, self.last_rows)?;
                        match hit.zone {
                            HitZone::PickControl => Some(Event::TogglePick {
                                row: hit.page_index,
                            }),
                            HitZone::Row => Some(Event::SelectRow {
                                row: hit.page_index,
                            }),
                        }
                    }
                }
            }
            _ => None,
        }
    }

    /// Maps custom message events (worker responses) to application events.
    fn map_custom_message_event(&self, message: &str, payload: &str) -> Option<Event> {
        if message != self.worker_name {
            tracing::debug!(message_name = %message, "ignoring custom message with unknown name");
            return None;
        }
        match serde_json::from_str::<WorkerResponse>(payload) {
            Ok(response) => Some(Event::WorkerResponse(response)),
            Err(e) => {
                tracing::debug!(error = %e, "failed to deserialize worker response");
                None
            }
        }
    }

    /// Maps a completed web request to a fetch event, feeding the cache on
    /// the way through.
    fn map_web_request_result(
        &mut self,
        status: u16,
        body: Vec<u8>,
        context: &BTreeMap<String, String>,
    ) -> Option<Event> {
        let target = parse_target(context.get(CONTEXT_TARGET)?)?;
        let generation = context.get(CONTEXT_GENERATION)?.parse::<u64>().ok()?;
        if let Some(url) = context.get(CONTEXT_URL) {
            self.cache.store(url, status, &body);
        }

        tracing::debug!(status, generation, body_len = body.len(), "web request completed");
        Some(Event::FetchArrived {
            target,
            generation,
            status,
            body,
        })
    }

    /// Posts a message to the worker thread.
    ///
    /// Serializes the message as JSON and sends via Zellij's IPC system.
    fn post_worker_message(&self, message: &WorkerMessage) {
        match serde_json::to_string(message) {
            Ok(payload) => {
                tracing::debug!(payload_len = payload.len(), "posting message to worker");
                post_message_to(PluginMessage {
                    worker_name: Some(self.worker_name.clone()),
                    name: self.worker_name.clone(),
                    payload,
                });
            }
            Err(e) => {
                tracing::debug!(error = %e, "failed to serialize worker message");
            }
        }
    }

    /// Gets a string name for a Zellij event for logging purposes.
    fn event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::Mouse(..) => "Mouse".to_string(),
            zellij_tile::prelude::Event::CustomMessage(msg, _) => format!("CustomMessage({msg})"),
            zellij_tile::prelude::Event::WebRequestResult(status, ..) => {
                format!("WebRequestResult({status})")
            }
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }
}

/// Context tag for a fetch target.
const fn target_tag(target: FetchTarget) -> &'static str {
    match target {
        FetchTarget::CountryList => "country_list",
        FetchTarget::CountryDetail => "country_detail",
    }
}

/// Parses a context tag back into a fetch target.
fn parse_target(tag: &str) -> Option<FetchTarget> {
    match tag {
        "country_list" => Some(FetchTarget::CountryList),
        "country_detail" => Some(FetchTarget::CountryDetail),
        _ => None,
    }
}
