//! Pagination component renderer.
//!
//! Renders the page indicator line with prev/next hints, shown only when the
//! filtered list spans more than one page.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::PaginationInfo;

/// Renders the pagination line at the specified row.
///
/// Disabled directions render dimmed; the page indicator is one-based for
/// display even though pages are zero-indexed internally.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_pagination(
    row: usize,
    pagination: &PaginationInfo,
    theme: &Theme,
    cols: usize,
) -> usize {
    let prev = "< prev [h]";
    let next = "[l] next >";
    let indicator = format!(
        "Page {} of {}",
        pagination.current_page + 1,
        pagination.total_pages
    );

    let total_len = prev.len() + next.len() + indicator.chars().count() + 6;
    let left_pad = cols.saturating_sub(total_len) / 2;

    position_cursor(row, 1);
    print!("{}", " ".repeat(left_pad));

    if pagination.prev_enabled {
        print!("{}", Theme::fg(&theme.colors.text_normal));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_dim));
    }
    print!("{prev}{}", Theme::reset());

    print!("{}   {indicator}   {}", Theme::fg(&theme.colors.header_fg), Theme::reset());

    if pagination.next_enabled {
        print!("{}", Theme::fg(&theme.colors.text_normal));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_dim));
    }
    print!("{next}{}", Theme::reset());

    row + 1
}
