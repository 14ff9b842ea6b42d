//! Actions representing side effects to be executed by the plugin runtime.
//!
//! This module defines the [`Action`] type, which represents imperative
//! commands produced by the event handler after processing user input or
//! fetch results. Actions bridge pure state transformations and effectful
//! operations like navigation, worker communication, and closing the pane.
//!
//! Navigation in particular is only ever *requested* here: the event handler
//! never mounts a screen itself. The shim owns routing, executes
//! [`Action::NavigateToDetail`] / [`Action::NavigateBack`] by mounting the
//! target screen, and fires that screen's fetch.

use crate::worker::WorkerMessage;

/// Commands representing side effects to be executed by the plugin runtime.
///
/// Actions are produced by the event handler and executed by the action
/// processor in the plugin shim.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Closes the focused floating pane, hiding the plugin UI.
    CloseFocus,

    /// Posts a message to the background decode worker.
    PostToWorker(WorkerMessage),

    /// Requests navigation to a country's detail screen.
    ///
    /// Carries the URL-escaped common name, ready for the exact-name lookup
    /// path segment.
    NavigateToDetail {
        /// URL-escaped common name of the country.
        name: String,
    },

    /// Requests navigation from the detail screen back to the list.
    NavigateBack,
}
