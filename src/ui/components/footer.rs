//! Footer component renderer.
//!
//! Renders the keybinding help line at the bottom of either screen.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders the footer keybinding hints at the specified row.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_footer(row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.text_dim));

    let text: String = footer.keybindings.chars().take(cols).collect();
    print!(" {text}");

    let used = text.chars().count() + 1;
    print!("{}", " ".repeat(cols.saturating_sub(used)));
    print!("{}", Theme::reset());
    row + 1
}
