//! Country detail page renderer.
//!
//! Renders the single-country view: a back hint, the official name as title,
//! the labeled facts, and the flag and coat-of-arms references. Loading,
//! failure, and not-found phases render as a centered banner instead of the
//! body.

use super::status::render_status;
use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{DetailBody, DetailViewModel, FooterInfo};

/// Renders the detail screen.
///
/// Layout structure:
/// ```text
/// [blank line]
/// [Back hint]
/// [Border]
/// [Title]
/// [Facts]
/// [Flag / coat of arms references]
/// [Border]
/// [Footer]
/// ```
pub fn render_detail(vm: &DetailViewModel, theme: &Theme, rows: usize, cols: usize) {
    position_cursor(2, 1);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!(" < Back to Countries");
    print!("{}", Theme::reset());

    position_cursor(3, 1);
    print!("{}", Theme::fg(&theme.colors.border));
    print!("{}", "\u{2500}".repeat(cols));
    print!("{}", Theme::reset());

    if let Some(banner) = &vm.status {
        render_status(banner, theme, rows, cols);
    } else if let Some(body) = &vm.body {
        render_body(body, theme, rows, cols);
    }

    let footer_start = rows.saturating_sub(1);
    position_cursor(footer_start.saturating_sub(1), 1);
    print!("{}", Theme::fg(&theme.colors.border));
    print!("{}", "\u{2500}".repeat(cols));
    print!("{}", Theme::reset());
    render_footer_line(footer_start, &vm.footer, theme, cols);
}

fn render_footer_line(row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) {
    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    let text: String = footer.keybindings.chars().take(cols).collect();
    print!(" {text}");
    print!("{}", " ".repeat(cols.saturating_sub(text.chars().count() + 1)));
    print!("{}", Theme::reset());
}

fn render_body(body: &DetailBody, theme: &Theme, rows: usize, cols: usize) {
    let title: String = body.title.chars().take(cols).collect();
    let title_col = cols.saturating_sub(title.chars().count()) / 2 + 1;
    position_cursor(5, title_col);
    print!("{}{}{title}{}", Theme::bold(), Theme::fg(&theme.colors.header_fg), Theme::reset());

    let mut row = 7;
    let last_body_row = rows.saturating_sub(3);

    for fact in &body.facts {
        if row > last_body_row {
            return;
        }
        position_cursor(row, 3);
        print!("{}{}: {}", Theme::bold(), fact.label, Theme::reset());
        print!("{}{}{}", Theme::fg(&theme.colors.text_normal), fact.value, Theme::reset());
        row += 1;
    }

    row += 1;
    if row <= last_body_row {
        position_cursor(row, 3);
        print!("{}Flag: {}", Theme::bold(), Theme::reset());
        print!("{}{}{}", Theme::fg(&theme.colors.text_normal), body.flag_alt, Theme::reset());
        row += 1;
    }
    if row <= last_body_row {
        position_cursor(row, 3);
        print!("{}{}{}", Theme::fg(&theme.colors.text_dim), body.flag_png, Theme::reset());
        row += 1;
    }

    if let Some(coat_of_arms) = &body.coat_of_arms_png {
        row += 1;
        if row <= last_body_row {
            position_cursor(row, 3);
            print!("{}Coat of Arms:{}", Theme::bold(), Theme::reset());
            row += 1;
        }
        if row <= last_body_row {
            position_cursor(row, 3);
            print!("{}{}{}", Theme::fg(&theme.colors.text_dim), coat_of_arms, Theme::reset());
        }
    }
}
