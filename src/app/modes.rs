//! Input-mode and overlay state types for the list screen.
//!
//! This module defines the small state machine enums that control how user
//! input is interpreted on the list screen: whether keystrokes feed the
//! search query or navigate the table, and whether the comparison overlay is
//! showing.
//!
//! # State Machine
//!
//! Input handling operates in one of two primary modes:
//! - **Normal**: table navigation and commands
//! - **Search**: live filtering with typing or result-navigation focus
//!
//! The comparison overlay is a separate two-state machine:
//! - `Closed -> Open` only through an explicit open action, and only while
//!   exactly two countries are picked
//! - `Open -> Closed` through an explicit close or backdrop dismiss
//!
//! It never opens as a side effect of a selection change.

/// Focus state within search mode.
///
/// Determines whether keystrokes edit the search query or navigate the
/// filtered results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFocus {
    /// User is typing in the search input field.
    ///
    /// Accepts character input, backspace, and enter (to switch to Navigating).
    Typing,

    /// User is navigating through filtered results.
    ///
    /// Accepts movement and pick keys, enter to open a detail view, and `/`
    /// to return to Typing.
    Navigating,
}

/// Current input handling mode of the list screen.
///
/// Controls which keybindings are active and which footer text is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Default navigation and command mode.
    Normal,

    /// Active search mode with focus state.
    Search(SearchFocus),
}

/// Visibility of the comparison overlay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ModalState {
    /// No overlay; the table receives input.
    #[default]
    Closed,

    /// The comparison overlay covers the table and captures input.
    Open,
}

impl ModalState {
    /// Returns true when the overlay is showing.
    #[must_use]
    pub fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }
}
