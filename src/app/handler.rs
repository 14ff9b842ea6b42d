//! Event handling and state transition logic.
//!
//! This module implements the core event handler that processes user input,
//! fetch results, and worker responses, translating them into state changes
//! and action sequences. It is the only place that mutates screen state.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the plugin runtime or worker thread
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` and screen methods
//! 4. Actions are collected and returned for execution
//!
//! # Event Types
//!
//! - **Navigation**: `CursorDown`, `CursorUp`, `NextPage`, `PrevPage`,
//!   `SelectRow`, `GoBack`
//! - **Picking**: `TogglePick`, `OpenCompare`, `CloseCompare`
//! - **Search**: `SearchMode`, `FocusSearchBar`, `FocusResults`,
//!   `ExitSearch`, `Char`, `Backspace`, `Escape`
//! - **System**: `FetchArrived`, `WorkerResponse`
//!
//! `SelectRow` and `TogglePick` are deliberately separate intents: the layer
//! producing events guarantees that one physical input maps to at most one of
//! them, so a pick can never double as a navigation.
//!
//! A `FetchArrived` or `WorkerResponse` whose generation does not match the
//! mounted screen belongs to a screen that has since been torn down; it is
//! dropped without touching state.

use crate::api::client::percent_encode;
use crate::app::modes::{InputMode, ModalState, SearchFocus};
use crate::app::state::{AppState, DetailPhase, ListPhase, ListScreen, Route};
use crate::app::Action;
use crate::domain::error::Result;
use crate::worker::{WorkerMessage, WorkerResponse};

/// Which in-flight fetch a result belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchTarget {
    /// The list screen's full-catalog fetch.
    CountryList,
    /// The detail screen's exact-name lookup.
    CountryDetail,
}

/// Events triggered by user input, fetch completion, or worker responses.
///
/// Each event represents a discrete occurrence that may cause state changes
/// and action emissions. The event handler processes these sequentially,
/// ensuring deterministic state transitions.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Moves the cursor down one row (wraps within the page).
    CursorDown,
    /// Moves the cursor up one row (wraps within the page).
    CursorUp,
    /// Advances to the next page, if any.
    NextPage,
    /// Returns to the previous page, if any.
    PrevPage,

    /// Requests the detail view for the row at the given page-slice index.
    SelectRow {
        /// Index of the row within the current page slice.
        row: usize,
    },
    /// Toggles the comparison pick of the row at the given page-slice index.
    TogglePick {
        /// Index of the row within the current page slice.
        row: usize,
    },

    /// Opens the comparison overlay; a no-op unless exactly two countries
    /// are picked.
    OpenCompare,
    /// Closes the comparison overlay (explicit close or backdrop dismiss).
    CloseCompare,

    /// Requests navigation from the detail screen back to the list.
    GoBack,
    /// Closes the floating pane and hides the plugin UI.
    CloseFocus,

    /// Enters search mode with typing focus.
    SearchMode,
    /// Focuses the search input field (from navigating focus).
    FocusSearchBar,
    /// Focuses the filtered results (from typing focus).
    FocusResults,
    /// Exits search mode and clears the query.
    ExitSearch,
    /// Appends a character to the search query.
    Char(char),
    /// Removes the last character from the search query.
    Backspace,
    /// Context escape: closes the overlay if open, otherwise leaves search.
    Escape,

    /// An upstream HTTP response arrived for a screen's fetch.
    FetchArrived {
        target: FetchTarget,
        /// Generation of the mount that issued the request.
        generation: u64,
        /// HTTP status code; 0 means the request never reached the server.
        status: u16,
        /// Raw response body.
        body: Vec<u8>,
    },

    /// Wraps a response from the background decode worker.
    WorkerResponse(WorkerResponse),
}

/// Processes an event, mutates application state, and returns actions to
/// execute.
///
/// # Parameters
///
/// * `state` - Mutable reference to application state
/// * `event` - Event to process
///
/// # Returns
///
/// A tuple of (should re-render, actions to execute in sequence). The action
/// list is empty for pure state transitions.
///
/// # Errors
///
/// Returns errors from state mutation methods. Fetch and decode failures are
/// not errors at this level; they transition the screen into its failed
/// phase instead.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event_name(event)).entered();

    match event {
        Event::CursorDown => {
            let Some(screen) = interactive_list(state) else {
                return Ok((false, vec![]));
            };
            screen.move_cursor_down();
            Ok((true, vec![]))
        }
        Event::CursorUp => {
            let Some(screen) = interactive_list(state) else {
                return Ok((false, vec![]));
            };
            screen.move_cursor_up();
            Ok((true, vec![]))
        }
        Event::NextPage => {
            let Some(screen) = interactive_list(state) else {
                return Ok((false, vec![]));
            };
            Ok((screen.next_page(), vec![]))
        }
        Event::PrevPage => {
            let Some(screen) = interactive_list(state) else {
                return Ok((false, vec![]));
            };
            Ok((screen.prev_page(), vec![]))
        }
        Event::SelectRow { row } => {
            let Some(screen) = interactive_list(state) else {
                return Ok((false, vec![]));
            };
            let Some(country) = screen.country_on_page(*row) else {
                tracing::debug!(row, "select on a row that is not there");
                return Ok((false, vec![]));
            };
            let name = percent_encode(&country.name.common);
            tracing::debug!(country = %country.name.common, "row selected");
            Ok((true, vec![Action::NavigateToDetail { name }]))
        }
        Event::TogglePick { row } => {
            let Some(screen) = interactive_list(state) else {
                return Ok((false, vec![]));
            };
            let Some(country) = screen.country_on_page(*row).cloned() else {
                return Ok((false, vec![]));
            };
            screen.selection.toggle(&country);
            tracing::debug!(
                country = %country.code,
                picked = screen.selection.len(),
                "pick toggled"
            );
            Ok((true, vec![]))
        }
        Event::OpenCompare => {
            let Some(screen) = interactive_list(state) else {
                return Ok((false, vec![]));
            };
            if !screen.selection.compare_ready() {
                tracing::debug!(picked = screen.selection.len(), "compare not ready");
                return Ok((false, vec![]));
            }
            screen.modal = ModalState::Open;
            Ok((true, vec![]))
        }
        Event::CloseCompare => {
            let Some(screen) = state.list_screen_mut() else {
                return Ok((false, vec![]));
            };
            if !screen.modal.is_open() {
                return Ok((false, vec![]));
            }
            screen.modal = ModalState::Closed;
            Ok((true, vec![]))
        }
        Event::GoBack => {
            if state.detail_screen().is_none() {
                return Ok((false, vec![]));
            }
            Ok((true, vec![Action::NavigateBack]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::SearchMode => {
            let Some(screen) = interactive_list(state) else {
                return Ok((false, vec![]));
            };
            tracing::debug!("entering search mode");
            screen.input_mode = InputMode::Search(SearchFocus::Typing);
            screen.search_query = String::new();
            Ok((true, vec![]))
        }
        Event::FocusSearchBar => {
            let Some(screen) = interactive_list(state) else {
                return Ok((false, vec![]));
            };
            screen.input_mode = InputMode::Search(SearchFocus::Typing);
            Ok((true, vec![]))
        }
        Event::FocusResults => {
            let Some(screen) = interactive_list(state) else {
                return Ok((false, vec![]));
            };
            if screen.search_query.is_empty() {
                screen.input_mode = InputMode::Normal;
            } else {
                screen.input_mode = InputMode::Search(SearchFocus::Navigating);
            }
            Ok((true, vec![]))
        }
        Event::ExitSearch => {
            let Some(screen) = interactive_list(state) else {
                return Ok((false, vec![]));
            };
            tracing::debug!(query = %screen.search_query, "exiting search mode");
            screen.input_mode = InputMode::Normal;
            screen.search_query = String::new();
            screen.search_changed();
            Ok((true, vec![]))
        }
        Event::Char(c) => {
            let Some(screen) = interactive_list(state) else {
                return Ok((false, vec![]));
            };
            if screen.input_mode != InputMode::Search(SearchFocus::Typing) {
                return Ok((false, vec![]));
            }
            screen.search_query.push(*c);
            tracing::trace!(query = %screen.search_query, "search query updated");
            screen.search_changed();
            Ok((true, vec![]))
        }
        Event::Backspace => {
            let Some(screen) = interactive_list(state) else {
                return Ok((false, vec![]));
            };
            if screen.input_mode != InputMode::Search(SearchFocus::Typing) {
                return Ok((false, vec![]));
            }
            screen.search_query.pop();
            screen.search_changed();
            Ok((true, vec![]))
        }
        Event::Escape => {
            if let Some(screen) = state.list_screen_mut() {
                if screen.modal.is_open() {
                    screen.modal = ModalState::Closed;
                    return Ok((true, vec![]));
                }
            }
            let Some(screen) = interactive_list(state) else {
                return Ok((false, vec![]));
            };
            screen.input_mode = InputMode::Normal;
            screen.search_query = String::new();
            screen.search_changed();
            Ok((true, vec![]))
        }
        Event::FetchArrived {
            target,
            generation,
            status,
            body,
        } => handle_fetch_arrived(state, *target, *generation, *status, body),
        Event::WorkerResponse(response) => handle_worker_response(state, response),
    }
}

/// Routes a completed HTTP response into the mounted screen.
///
/// A success hands the body to the decode worker and keeps the screen
/// loading; a detail 404 becomes the not-found phase; anything else becomes
/// the failed phase with a surfaced message.
fn handle_fetch_arrived(
    state: &mut AppState,
    target: FetchTarget,
    generation: u64,
    status: u16,
    body: &[u8],
) -> Result<(bool, Vec<Action>)> {
    match (&mut state.route, target) {
        (Route::List(screen), FetchTarget::CountryList)
            if screen.generation == generation && screen.phase == ListPhase::Loading =>
        {
            if (200..300).contains(&status) {
                match String::from_utf8(body.to_vec()) {
                    Ok(payload) => Ok((
                        false,
                        vec![Action::PostToWorker(WorkerMessage::decode_country_list(
                            payload, generation,
                        ))],
                    )),
                    Err(_) => {
                        screen.phase =
                            ListPhase::Failed("response body was not valid UTF-8".to_string());
                        Ok((true, vec![]))
                    }
                }
            } else {
                screen.phase = ListPhase::Failed(failure_message(status, body));
                Ok((true, vec![]))
            }
        }
        (Route::Detail(screen), FetchTarget::CountryDetail)
            if screen.generation == generation && screen.phase == DetailPhase::Loading =>
        {
            if (200..300).contains(&status) {
                match String::from_utf8(body.to_vec()) {
                    Ok(payload) => Ok((
                        false,
                        vec![Action::PostToWorker(WorkerMessage::decode_country_detail(
                            payload, generation,
                        ))],
                    )),
                    Err(_) => {
                        screen.phase =
                            DetailPhase::Failed("response body was not valid UTF-8".to_string());
                        Ok((true, vec![]))
                    }
                }
            } else if status == 404 {
                screen.phase = DetailPhase::NotFound;
                Ok((true, vec![]))
            } else {
                screen.phase = DetailPhase::Failed(failure_message(status, body));
                Ok((true, vec![]))
            }
        }
        _ => {
            tracing::debug!(generation, "dropping fetch result for unmounted screen");
            Ok((false, vec![]))
        }
    }
}

/// Applies a worker response to the mounted screen, dropping stale ones.
fn handle_worker_response(
    state: &mut AppState,
    response: &WorkerResponse,
) -> Result<(bool, Vec<Action>)> {
    match response {
        WorkerResponse::CountryListDecoded {
            generation,
            countries,
        } => {
            let Some(screen) = loading_list(state, *generation) else {
                tracing::debug!(generation, "dropping stale list decode");
                return Ok((false, vec![]));
            };
            screen.countries.clone_from(countries);
            screen.phase = ListPhase::Ready;
            screen.apply_search_filter();
            tracing::debug!(count = countries.len(), "country list ready");
            Ok((true, vec![]))
        }
        WorkerResponse::CountryDetailDecoded {
            generation,
            country,
        } => {
            let Some(screen) = loading_detail(state, *generation) else {
                tracing::debug!(generation, "dropping stale detail decode");
                return Ok((false, vec![]));
            };
            screen.phase = match country {
                Some(country) => DetailPhase::Ready(country.clone()),
                None => DetailPhase::NotFound,
            };
            Ok((true, vec![]))
        }
        WorkerResponse::DecodeFailed {
            generation,
            message,
        } => {
            if let Some(screen) = loading_list(state, *generation) {
                screen.phase = ListPhase::Failed(message.clone());
                return Ok((true, vec![]));
            }
            if let Some(screen) = loading_detail(state, *generation) {
                screen.phase = DetailPhase::Failed(message.clone());
                return Ok((true, vec![]));
            }
            tracing::debug!(generation, "dropping stale decode failure");
            Ok((false, vec![]))
        }
    }
}

/// The mounted list screen, when it is ready for interaction (overlay
/// closed, data loaded).
fn interactive_list(state: &mut AppState) -> Option<&mut ListScreen> {
    let screen = state.list_screen_mut()?;
    if screen.phase != ListPhase::Ready || screen.modal.is_open() {
        return None;
    }
    Some(screen)
}

/// The mounted list screen, when it is still loading the given generation.
fn loading_list(state: &mut AppState, generation: u64) -> Option<&mut ListScreen> {
    let screen = state.list_screen_mut()?;
    if screen.generation != generation || screen.phase != ListPhase::Loading {
        return None;
    }
    Some(screen)
}

/// The mounted detail screen, when it is still loading the given generation.
fn loading_detail(
    state: &mut AppState,
    generation: u64,
) -> Option<&mut crate::app::state::DetailScreen> {
    let screen = state.detail_screen_mut()?;
    if screen.generation != generation || screen.phase != DetailPhase::Loading {
        return None;
    }
    Some(screen)
}

/// Short event name for span labels, without payload contents.
fn event_name(event: &Event) -> &'static str {
    match event {
        Event::CursorDown => "CursorDown",
        Event::CursorUp => "CursorUp",
        Event::NextPage => "NextPage",
        Event::PrevPage => "PrevPage",
        Event::SelectRow { .. } => "SelectRow",
        Event::TogglePick { .. } => "TogglePick",
        Event::OpenCompare => "OpenCompare",
        Event::CloseCompare => "CloseCompare",
        Event::GoBack => "GoBack",
        Event::CloseFocus => "CloseFocus",
        Event::SearchMode => "SearchMode",
        Event::FocusSearchBar => "FocusSearchBar",
        Event::FocusResults => "FocusResults",
        Event::ExitSearch => "ExitSearch",
        Event::Char(_) => "Char",
        Event::Backspace => "Backspace",
        Event::Escape => "Escape",
        Event::FetchArrived { .. } => "FetchArrived",
        Event::WorkerResponse(_) => "WorkerResponse",
    }
}

/// Builds the surfaced message for a failed HTTP response.
fn failure_message(status: u16, body: &[u8]) -> String {
    let text = String::from_utf8_lossy(body);
    let snippet: String = text.trim().chars().take(120).collect();
    let prefix = if status == 0 {
        "network request failed".to_string()
    } else {
        format!("request failed with HTTP status {status}")
    };
    if snippet.is_empty() {
        prefix
    } else {
        format!("{prefix}: {snippet}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::Theme;
    use crate::worker::AtlasWorker;
    use crate::domain::metric::FixedGdpEstimator;
    use serde_json::json;

    /// Builds a list payload of `total` countries where the first `atolls`
    /// have "Atoll" in their name and the rest do not match "atoll" anywhere.
    fn list_payload(total: usize, atolls: usize) -> String {
        let records: Vec<serde_json::Value> = (0..total)
            .map(|i| {
                let name = if i < atolls {
                    format!("Atoll {i}")
                } else {
                    format!("Mainland {i}")
                };
                json!({
                    "name": {"common": name, "official": name},
                    "cca3": format!("C{i:02}"),
                    "region": if i < atolls { "Oceania" } else { "Europe" },
                    "population": 1000 + i,
                    "area": 10.0,
                    "flags": {"png": "u", "alt": "a"}
                })
            })
            .collect();
        serde_json::Value::Array(records).to_string()
    }

    /// Mounts a list screen and drives it to Ready through the fetch and
    /// decode pipeline, exactly as the shim would.
    fn ready_state(total: usize, atolls: usize) -> AppState {
        let mut state = AppState::new(Theme::default());
        let generation = state.mount_list();

        let (_, actions) = handle_event(
            &mut state,
            &Event::FetchArrived {
                target: FetchTarget::CountryList,
                generation,
                status: 200,
                body: list_payload(total, atolls).into_bytes(),
            },
        )
        .unwrap();

        let mut worker = AtlasWorker::with_estimator(Box::new(FixedGdpEstimator(0)));
        for action in actions {
            let Action::PostToWorker(message) = action else {
                panic!("expected a worker post, got {action:?}");
            };
            let response = worker.handle_message(message);
            handle_event(&mut state, &Event::WorkerResponse(response)).unwrap();
        }
        state
    }

    fn send(state: &mut AppState, event: Event) -> (bool, Vec<Action>) {
        handle_event(state, &event).unwrap()
    }

    #[test]
    fn twelve_countries_paginate_then_filter_resets_to_page_zero() {
        let mut state = ready_state(12, 3);

        {
            let screen = state.list_screen().unwrap();
            assert_eq!(screen.phase, ListPhase::Ready);
            assert_eq!(screen.visible_rows().len(), 10);
            assert_eq!(screen.total_pages(), 2);
        }

        send(&mut state, Event::NextPage);
        assert_eq!(state.list_screen().unwrap().page, 1);

        send(&mut state, Event::SearchMode);
        for c in "atoll".chars() {
            send(&mut state, Event::Char(c));
        }

        let screen = state.list_screen().unwrap();
        assert_eq!(screen.page, 0);
        assert_eq!(screen.visible_rows().len(), 3);

        let vm = screen.compute_viewmodel(40);
        assert!(vm.pagination.is_none());
        assert_eq!(vm.rows.len(), 3);
    }

    #[test]
    fn changing_the_search_term_resets_a_deep_page() {
        let mut state = ready_state(30, 0);
        send(&mut state, Event::NextPage);
        send(&mut state, Event::NextPage);
        assert_eq!(state.list_screen().unwrap().page, 2);

        send(&mut state, Event::SearchMode);
        send(&mut state, Event::Char('m'));

        assert_eq!(state.list_screen().unwrap().page, 0);
    }

    #[test]
    fn compare_is_gated_on_exactly_two_picks() {
        let mut state = ready_state(5, 0);

        send(&mut state, Event::OpenCompare);
        assert_eq!(state.list_screen().unwrap().modal, ModalState::Closed);

        send(&mut state, Event::TogglePick { row: 0 });
        send(&mut state, Event::OpenCompare);
        assert_eq!(state.list_screen().unwrap().modal, ModalState::Closed);

        send(&mut state, Event::TogglePick { row: 1 });
        {
            let screen = state.list_screen().unwrap();
            assert!(screen.selection.compare_ready());
            assert!(!screen.modal.is_open());
        }

        send(&mut state, Event::OpenCompare);
        assert!(state.list_screen().unwrap().modal.is_open());

        send(&mut state, Event::CloseCompare);
        assert!(!state.list_screen().unwrap().modal.is_open());
    }

    #[test]
    fn a_third_pick_does_not_change_the_selection() {
        let mut state = ready_state(5, 0);
        send(&mut state, Event::TogglePick { row: 0 });
        send(&mut state, Event::TogglePick { row: 1 });
        let before = state.list_screen().unwrap().selection.clone();

        send(&mut state, Event::TogglePick { row: 2 });

        assert_eq!(state.list_screen().unwrap().selection, before);
    }

    #[test]
    fn picks_survive_filtering_and_paging() {
        let mut state = ready_state(12, 3);
        send(&mut state, Event::TogglePick { row: 0 });

        send(&mut state, Event::SearchMode);
        send(&mut state, Event::Char('m'));
        send(&mut state, Event::ExitSearch);
        send(&mut state, Event::NextPage);

        assert_eq!(state.list_screen().unwrap().selection.len(), 1);
    }

    #[test]
    fn selecting_a_row_requests_navigation_with_an_escaped_name() {
        let mut state = ready_state(3, 3);

        let (_, actions) = send(&mut state, Event::SelectRow { row: 1 });

        assert_eq!(
            actions,
            vec![Action::NavigateToDetail {
                name: "Atoll%201".to_string()
            }]
        );
    }

    #[test]
    fn interaction_is_locked_while_loading() {
        let mut state = AppState::new(Theme::default());
        state.mount_list();

        let (rendered, actions) = send(&mut state, Event::SearchMode);
        assert!(!rendered);
        assert!(actions.is_empty());

        let (rendered, _) = send(&mut state, Event::TogglePick { row: 0 });
        assert!(!rendered);
    }

    #[test]
    fn stale_fetch_results_are_dropped() {
        let mut state = ready_state(3, 0);
        let live_countries = state.list_screen().unwrap().countries.clone();

        let (rendered, actions) = send(
            &mut state,
            Event::FetchArrived {
                target: FetchTarget::CountryList,
                generation: 999,
                status: 200,
                body: b"[]".to_vec(),
            },
        );

        assert!(!rendered);
        assert!(actions.is_empty());
        assert_eq!(state.list_screen().unwrap().countries, live_countries);
    }

    #[test]
    fn stale_worker_responses_are_dropped() {
        let mut state = ready_state(3, 0);

        let (rendered, _) = send(
            &mut state,
            Event::WorkerResponse(WorkerResponse::CountryListDecoded {
                generation: 999,
                countries: vec![],
            }),
        );

        assert!(!rendered);
        assert_eq!(state.list_screen().unwrap().countries.len(), 3);
    }

    #[test]
    fn a_failed_list_fetch_surfaces_the_status() {
        let mut state = AppState::new(Theme::default());
        let generation = state.mount_list();

        send(
            &mut state,
            Event::FetchArrived {
                target: FetchTarget::CountryList,
                generation,
                status: 500,
                body: b"upstream exploded".to_vec(),
            },
        );

        match &state.list_screen().unwrap().phase {
            ListPhase::Failed(message) => {
                assert!(message.contains("500"));
                assert!(message.contains("upstream exploded"));
            }
            other => panic!("unexpected phase: {other:?}"),
        }
    }

    #[test]
    fn a_detail_404_is_not_found_not_an_error() {
        let mut state = AppState::new(Theme::default());
        let generation = state.mount_detail("Atlantis".to_string());

        send(
            &mut state,
            Event::FetchArrived {
                target: FetchTarget::CountryDetail,
                generation,
                status: 404,
                body: b"{\"status\": 404}".to_vec(),
            },
        );

        assert_eq!(state.detail_screen().unwrap().phase, DetailPhase::NotFound);
    }

    #[test]
    fn an_empty_detail_match_is_not_found() {
        let mut state = AppState::new(Theme::default());
        let generation = state.mount_detail("Atlantis".to_string());

        send(
            &mut state,
            Event::WorkerResponse(WorkerResponse::CountryDetailDecoded {
                generation,
                country: None,
            }),
        );

        assert_eq!(state.detail_screen().unwrap().phase, DetailPhase::NotFound);
    }

    #[test]
    fn go_back_is_only_meaningful_on_the_detail_screen() {
        let mut state = ready_state(3, 0);
        let (_, actions) = send(&mut state, Event::GoBack);
        assert!(actions.is_empty());

        state.mount_detail("France".to_string());
        let (_, actions) = send(&mut state, Event::GoBack);
        assert_eq!(actions, vec![Action::NavigateBack]);
    }

    #[test]
    fn escape_closes_the_overlay_before_anything_else() {
        let mut state = ready_state(5, 0);
        send(&mut state, Event::TogglePick { row: 0 });
        send(&mut state, Event::TogglePick { row: 1 });
        send(&mut state, Event::OpenCompare);

        send(&mut state, Event::Escape);

        let screen = state.list_screen().unwrap();
        assert!(!screen.modal.is_open());
        assert_eq!(screen.selection.len(), 2);
    }

    #[test]
    fn backspace_recomputes_the_filter() {
        let mut state = ready_state(12, 3);
        send(&mut state, Event::SearchMode);
        for c in "atollx".chars() {
            send(&mut state, Event::Char(c));
        }
        assert_eq!(state.list_screen().unwrap().filtered.len(), 0);

        send(&mut state, Event::Backspace);

        assert_eq!(state.list_screen().unwrap().filtered.len(), 3);
    }
}
