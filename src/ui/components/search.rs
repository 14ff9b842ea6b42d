//! Search bar component renderer.
//!
//! This module renders the search input box with a bordered frame and query
//! text display.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

/// Horizontal margin for the search box (spaces on left and right).
const SEARCH_BOX_MARGIN: usize = 5;

/// Renders the search input box at the specified row.
///
/// Displays a 3-line bordered box containing the search query text, with a
/// trailing cursor block. The box is horizontally centered with margins on
/// both sides.
///
/// # Layout
///
/// ```text
/// [margin] ┌─────────────────┐ [margin]
/// [margin] │ Search: query█  │ [margin]
/// [margin] └─────────────────┘ [margin]
/// ```
///
/// # Returns
///
/// The next available row position (row + 3)
pub fn render_search_bar(row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(2 * SEARCH_BOX_MARGIN);
    if box_width < 12 {
        return row + 3;
    }
    let inner_width = box_width - 2;

    let border = Theme::fg(&theme.colors.search_bar_border);

    position_cursor(row, SEARCH_BOX_MARGIN + 1);
    print!("{border}\u{250c}{}\u{2510}{}", "\u{2500}".repeat(inner_width), Theme::reset());

    let label = format!(" Search: {}\u{2588}", search.query);
    let shown: String = label.chars().take(inner_width).collect();
    let padding = inner_width.saturating_sub(shown.chars().count());

    position_cursor(row + 1, SEARCH_BOX_MARGIN + 1);
    print!("{border}\u{2502}{}", Theme::reset());
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("{shown}{}", " ".repeat(padding));
    print!("{border}\u{2502}{}", Theme::reset());

    position_cursor(row + 2, SEARCH_BOX_MARGIN + 1);
    print!("{border}\u{2514}{}\u{2518}{}", "\u{2500}".repeat(inner_width), Theme::reset());

    row + 3
}
