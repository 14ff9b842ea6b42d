//! Status banner renderer.
//!
//! Renders the loading and failure banners that replace a screen body. A
//! screen in one of these phases shows nothing else between header and
//! footer.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::StatusLine;

/// Renders a centered status banner.
///
/// Errors use the error color; informational banners (loading, not-found)
/// render dimmed.
pub fn render_status(banner: &StatusLine, theme: &Theme, rows: usize, cols: usize) {
    let row = (rows / 2).max(4);
    let text: String = banner.text.chars().take(cols).collect();
    let col = cols.saturating_sub(text.chars().count()) / 2 + 1;

    position_cursor(row, col);
    if banner.is_error {
        print!("{}{}", Theme::bold(), Theme::fg(&theme.colors.error_fg));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_dim));
    }
    print!("{text}");
    print!("{}", Theme::reset());
}
