//! Table component renderer.
//!
//! This module renders the country list as a four-column table: the pick
//! control, NAME, REGION, and POPULATION. It supports cursor highlighting,
//! search match highlighting, and pick markers.

use crate::ui::helpers::{self, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::CountryRow;

/// Width of the pick control column.
const PICK_COLUMN: usize = 5;

/// Width of the NAME column.
const NAME_COLUMN: usize = 32;

/// Width of the REGION column.
const REGION_COLUMN: usize = 16;

/// Width of the right-aligned POPULATION column.
const POPULATION_COLUMN: usize = 14;

/// Renders the table column headers at the specified row.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_table_headers(row: usize, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!(
        "{:<PICK_COLUMN$}{:<NAME_COLUMN$}{:<REGION_COLUMN$}{:>POPULATION_COLUMN$}",
        "PICK", "NAME", "REGION", "POPULATION"
    );
    let used = PICK_COLUMN + NAME_COLUMN + REGION_COLUMN + POPULATION_COLUMN;
    print!("{}", " ".repeat(cols.saturating_sub(used)));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders all table rows starting at the specified row.
///
/// # Returns
///
/// The next available row position (row + number of items)
pub fn render_table_rows(row: usize, items: &[CountryRow], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for item in items {
        current_row = render_table_row(current_row, item, theme, cols);
    }
    current_row
}

/// Renders a single table row at the specified row position.
///
/// # Styling Precedence
///
/// 1. Cursor background (if `is_cursor`)
/// 2. Search match highlights (unless the cursor is here)
/// 3. Normal text color
///
/// The pick marker carries its own color: pick slot number for picked rows,
/// dimmed brackets when the set is full and this row cannot join it.
///
/// The row is padded to the full terminal width so the cursor background
/// renders as one continuous bar.
fn render_table_row(row: usize, item: &CountryRow, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    let row_fg = if item.is_cursor {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
        theme.colors.selection_fg.clone()
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
        theme.colors.text_normal.clone()
    };

    let marker = match item.pick_slot {
        Some(slot) => {
            if !item.is_cursor {
                print!("{}", Theme::fg(&theme.colors.pick_fg));
            }
            format!("[{}]", slot + 1)
        }
        None if item.pick_blocked => {
            if !item.is_cursor {
                print!("{}", Theme::dim());
            }
            "[ ]".to_string()
        }
        None => "[ ]".to_string(),
    };
    print!("{marker}");
    print!("{}", Theme::reset());
    if item.is_cursor {
        print!("{}", Theme::bg(&theme.colors.selection_bg));
    }
    print!("{}", Theme::fg(&row_fg));
    print!("{}", " ".repeat(PICK_COLUMN.saturating_sub(marker.chars().count())));

    helpers::render_highlighted_text(&item.name, &item.highlight_ranges, theme, item.is_cursor);
    if !item.is_cursor {
        print!("{}", Theme::fg(&row_fg));
    }
    let name_len = item.name.chars().count();
    print!("{}", " ".repeat(NAME_COLUMN.saturating_sub(name_len)));

    print!("{:<REGION_COLUMN$}", item.region);
    print!("{:>POPULATION_COLUMN$}", item.population);

    let used = PICK_COLUMN + name_len.max(NAME_COLUMN) + REGION_COLUMN + POPULATION_COLUMN;
    print!("{}", " ".repeat(cols.saturating_sub(used)));

    print!("{}", Theme::reset());
    row + 1
}
