//! Empty state component renderer.
//!
//! Renders the explicit "no results" message shown when the search filter
//! matches nothing, in place of an unexplained empty table.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders the empty state message centered in the table body area.
pub fn render_empty_state(empty: &EmptyState, theme: &Theme, rows: usize, cols: usize) {
    let row = (rows / 2).max(5);

    let message: String = empty.message.chars().take(cols).collect();
    let col = cols.saturating_sub(message.chars().count()) / 2 + 1;
    position_cursor(row, col);
    print!("{}{}", Theme::bold(), Theme::fg(&theme.colors.empty_state_fg));
    print!("{message}");
    print!("{}", Theme::reset());

    let subtitle: String = empty.subtitle.chars().take(cols).collect();
    let col = cols.saturating_sub(subtitle.chars().count()) / 2 + 1;
    position_cursor(row + 1, col);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{subtitle}");
    print!("{}", Theme::reset());
}
