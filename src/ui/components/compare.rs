//! Comparison overlay renderer.
//!
//! Renders the side-by-side comparison of the two picked countries as a
//! centered, bordered overlay on top of the list screen. The frame geometry
//! is exported so pointer hit-testing can distinguish a click inside the
//! overlay from a backdrop dismiss.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{CompareCard, CompareViewModel};

/// Interior lines of the overlay (title and separator excluded).
const CARD_LINES: usize = 7;

/// Computes the overlay frame as `(top, left, height, width)`, 1-indexed.
///
/// The frame is centered and clamped to the terminal; anything outside it is
/// backdrop.
#[must_use]
pub fn modal_frame(rows: usize, cols: usize) -> (usize, usize, usize, usize) {
    let width = cols.saturating_sub(8).min(76).max(20);
    let height = (CARD_LINES + 4).min(rows.saturating_sub(2)).max(5);
    let top = rows.saturating_sub(height) / 2 + 1;
    let left = cols.saturating_sub(width) / 2 + 1;
    (top, left, height, width)
}

/// Renders the comparison overlay.
///
/// Each picked country occupies one column, in pick order. All figures are
/// pre-formatted by the view model.
pub fn render_compare(vm: &CompareViewModel, theme: &Theme, rows: usize, cols: usize) {
    let (top, left, height, width) = modal_frame(rows, cols);
    let inner = width.saturating_sub(2);
    let border = Theme::fg(&theme.colors.modal_border);

    position_cursor(top, left);
    print!("{border}\u{250c}{}\u{2510}{}", "\u{2500}".repeat(inner), Theme::reset());

    let title = "Country Comparison";
    let title_pad = inner.saturating_sub(title.len()) / 2;
    position_cursor(top + 1, left);
    print!("{border}\u{2502}{}", Theme::reset());
    print!("{}", " ".repeat(title_pad));
    print!("{}{}{title}{}", Theme::bold(), Theme::fg(&theme.colors.header_fg), Theme::reset());
    print!("{}", " ".repeat(inner.saturating_sub(title_pad + title.len())));
    print!("{border}\u{2502}{}", Theme::reset());

    position_cursor(top + 2, left);
    print!("{border}\u{251c}{}\u{2524}{}", "\u{2500}".repeat(inner), Theme::reset());

    let half = inner / 2;
    let columns: Vec<Vec<String>> = vm.cards.iter().map(|card| card_lines(card, half)).collect();

    for line in 0..height.saturating_sub(4) {
        position_cursor(top + 3 + line, left);
        print!("{border}\u{2502}{}", Theme::reset());
        print!("{}", Theme::fg(&theme.colors.text_normal));
        let mut used = 0;
        for column in &columns {
            let text = column.get(line).cloned().unwrap_or_default();
            let shown: String = text.chars().take(half).collect();
            print!("{shown}{}", " ".repeat(half.saturating_sub(shown.chars().count())));
            used += half;
        }
        print!("{}", " ".repeat(inner.saturating_sub(used)));
        print!("{border}\u{2502}{}", Theme::reset());
    }

    position_cursor(top + height.saturating_sub(1), left);
    print!("{border}\u{2514}{}\u{2518}{}", "\u{2500}".repeat(inner), Theme::reset());
}

/// Formats one card as its column lines, centered-ish within `width` by a
/// two-space indent.
fn card_lines(card: &CompareCard, width: usize) -> Vec<String> {
    let clip = |text: &str| -> String { text.chars().take(width.saturating_sub(2)).collect() };
    vec![
        format!("  {}", clip(&card.name)),
        format!("  {}", clip(&card.flag_alt)),
        String::new(),
        format!("  Population: {}", clip(&card.population)),
        format!("  Area: {}", clip(&card.area)),
        format!("  GDP: {}", clip(&card.gdp)),
        String::new(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_is_centered_and_inside_the_terminal() {
        let (top, left, height, width) = modal_frame(40, 120);
        assert!(top >= 1 && left >= 1);
        assert!(top + height <= 41);
        assert!(left + width <= 121);
    }

    #[test]
    fn frame_survives_tiny_terminals() {
        let (_, _, height, width) = modal_frame(6, 24);
        assert!(height >= 5);
        assert!(width >= 20);
    }
}
