//! Application layer coordinating state, events, and actions.
//!
//! This module defines the core application logic layer, sitting between the
//! plugin runtime (main.rs) and the domain/api/worker layers. It implements
//! the event-driven architecture that powers the interactive UI.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! User Input → Events → Event Handler → State Mutations → Actions → Side Effects
//!                           ↑                                  ↓
//!                           └──── Fetch / Worker Responses ────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`modes`]: Input mode and overlay state machine types
//! - [`pager`]: Fixed-size pagination arithmetic
//! - [`selection`]: Bounded comparison pick set
//! - [`state`]: Central application state container and view model computation

pub mod actions;
pub mod handler;
pub mod modes;
pub mod pager;
pub mod selection;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event, FetchTarget};
pub use modes::{InputMode, ModalState, SearchFocus};
pub use pager::PAGE_SIZE;
pub use selection::SelectionSet;
pub use state::{AppState, DetailPhase, DetailScreen, HitZone, ListHit, ListPhase, ListScreen, Route};
