//! Top-level rendering coordinator.
//!
//! This module provides the main rendering entry point, coordinating view
//! model computation and delegation to the screen renderers.
//!
//! # Architecture
//!
//! The renderer follows a two-step process:
//!
//! 1. **View Model Computation**: Transform `AppState` into a `ScreenView`
//! 2. **Component Rendering**: Delegate to the mounted screen's renderer

use crate::app::AppState;
use crate::ui::components;
use crate::ui::viewmodel::ScreenView;

/// Renders the plugin UI to stdout.
///
/// Computes the view model from application state and delegates to the list
/// or detail renderer.
///
/// # Parameters
///
/// * `state` - Current application state
/// * `rows` - Terminal height in rows
/// * `cols` - Terminal width in columns
///
/// # Output
///
/// Prints ANSI-styled output to stdout using `print!` macros. Does not clear
/// the screen or manage cursor position beyond explicit positioning.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    match state.compute_viewmodel(rows, cols) {
        ScreenView::List(vm) => components::render_list(&vm, &state.theme, rows, cols),
        ScreenView::Detail(vm) => components::render_detail(&vm, &state.theme, rows, cols),
    }
}
