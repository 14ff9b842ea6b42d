//! Composable UI component renderers.
//!
//! This module provides specialized rendering components for the two screens,
//! following a component-based architecture. Each component renders one part
//! of the interface; the layout functions here wire them together and own the
//! line accounting.
//!
//! # Components
//!
//! - [`header`]: Title bar with branding and filtered count
//! - [`toolbar`]: Pick-count summary and compare hint
//! - [`search`]: Search input box (border, query text)
//! - [`table`]: Country list with pick, name, region, and population columns
//! - [`pagination`]: Page indicator and prev/next enablement
//! - [`status`]: Loading / error / not-found banners
//! - [`empty`]: Empty state message for a filter with no matches
//! - [`compare`]: Comparison overlay with one card per picked country
//! - [`detail`]: Country detail page
//!
//! # Layout
//!
//! The list screen reserves a fixed number of chrome rows; the constants below are
//! shared with pointer hit-testing so a click maps to the same row the table
//! renderer drew.

mod compare;
mod detail;
mod empty;
mod footer;
mod header;
mod pagination;
mod search;
mod status;
mod table;
mod toolbar;

pub use compare::modal_frame;
pub use detail::render_detail;

use crate::ui::theme::Theme;
use crate::ui::helpers::position_cursor;
use crate::ui::viewmodel::ListViewModel;

use compare::render_compare;
use empty::render_empty_state;
use footer::render_footer;
use header::render_header;
use pagination::render_pagination;
use search::render_search_bar;
use status::render_status;
use table::{render_table_headers, render_table_rows};
use toolbar::render_toolbar;

/// First terminal row of table content in normal mode.
///
/// Rows 1..6 hold: blank line, header, border, toolbar, column headers.
pub const LIST_TABLE_FIRST_ROW_NORMAL: usize = 6;

/// First terminal row of table content in search mode (the search box adds
/// three rows).
pub const LIST_TABLE_FIRST_ROW_SEARCH: usize = 9;

/// Chrome rows around the table in normal mode (top chrome plus pagination,
/// border, and footer at the bottom).
pub const LIST_CHROME_ROWS_NORMAL: usize = 8;

/// Chrome rows around the table in search mode.
pub const LIST_CHROME_ROWS_SEARCH: usize = 11;

/// Width of the pick control column; pointer events at or left of this
/// column toggle a pick instead of opening the detail view.
pub const PICK_ZONE_WIDTH: usize = 5;

/// Renders a horizontal border line at the specified row.
///
/// Used to separate UI sections (header/table, table/footer).
///
/// # Returns
///
/// The next available row position (row + 1)
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "\u{2500}".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the list screen.
///
/// Layout structure (normal mode):
/// ```text
/// [blank line]
/// [Header]
/// [Border]
/// [Toolbar: picks + compare hint]
/// [Column headers]
/// [Table rows | status banner | empty state]
/// [Blank padding]
/// [Pagination]
/// [Border]
/// [Footer]
/// [Comparison overlay, drawn last when open]
/// ```
///
/// Search mode inserts the 3-line search box between the border and the
/// toolbar. While the screen is loading or failed, the toolbar and table are
/// replaced by a centered banner.
pub fn render_list(vm: &ListViewModel, theme: &Theme, rows: usize, cols: usize) {
    let mut current_row = 2;

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);

    if let Some(search) = &vm.search_bar {
        current_row = render_search_bar(current_row, search, theme, cols);
    }

    if let Some(banner) = &vm.status {
        render_status(banner, theme, rows, cols);
    } else {
        current_row = render_toolbar(current_row, &vm.selection, theme, cols);
        current_row = render_table_headers(current_row, theme, cols);

        if let Some(empty) = &vm.empty_state {
            render_empty_state(empty, theme, rows, cols);
        } else {
            render_table_rows(current_row, &vm.rows, theme, cols);
        }

        if let Some(pagination) = &vm.pagination {
            render_pagination(rows.saturating_sub(3), pagination, theme, cols);
        }
    }

    let footer_start = rows.saturating_sub(1);
    let border_row = footer_start.saturating_sub(1);

    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_start, &vm.footer, theme, cols);

    if let Some(compare) = &vm.compare {
        render_compare(compare, theme, rows, cols);
    }
}
