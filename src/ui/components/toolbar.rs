//! Toolbar component renderer.
//!
//! Renders the line between the header and the table: the pick-count summary
//! and the compare hint, mirroring the top controls of the catalog.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SelectionInfo;

/// Renders the pick summary and compare hint at the specified row.
///
/// The compare hint renders dimmed until exactly the full pick capacity is
/// selected, matching the gate on the open action itself.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_toolbar(row: usize, selection: &SelectionInfo, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    print!("{}", Theme::fg(&theme.colors.pick_fg));
    let summary = format!(" {}/{} countries selected", selection.picked, selection.capacity);
    print!("{summary}");

    let hint = "[c] Compare ";
    let used = summary.chars().count();
    let hint_len = hint.chars().count();
    print!("{}", " ".repeat(cols.saturating_sub(used + hint_len)));

    if selection.compare_enabled {
        print!("{}{}", Theme::bold(), Theme::fg(&theme.colors.header_fg));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_dim));
    }
    print!("{hint}");

    print!("{}", Theme::reset());
    row + 1
}
