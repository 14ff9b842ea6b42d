//! Shared rendering utilities and formatting helpers.
//!
//! This module provides the low-level pieces used across UI components:
//! cursor positioning, search-match highlighting with ANSI escape sequences,
//! and locale-style number formatting for populations and areas.

use crate::ui::theme::Theme;

/// Positions the cursor at a specific row and column.
///
/// Uses ANSI escape sequence `\u{1b}[{row};{col}H` to move the cursor.
/// Coordinates are 1-indexed (row 1 = first row, col 1 = first column).
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Formats an integer with comma thousands separators.
///
/// # Example
///
/// ```rust
/// use zatlas::ui::helpers::format_thousands;
///
/// assert_eq!(format_thousands(67_391_582), "67,391,582");
/// ```
#[must_use]
pub fn format_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.insert(0, ',');
        }
        grouped.insert(0, c);
    }
    grouped
}

/// Formats a surface area with thousands separators.
///
/// Whole-number areas (the overwhelming majority upstream) render without a
/// fraction; otherwise one decimal place is kept.
#[must_use]
pub fn format_area(area: f64) -> String {
    let whole = area.trunc().max(0.0) as u64;
    let tenths = ((area - area.trunc()) * 10.0).round() as u64;
    if tenths == 0 {
        format_thousands(whole)
    } else if tenths >= 10 {
        format_thousands(whole + 1)
    } else {
        format!("{}.{tenths}", format_thousands(whole))
    }
}

/// Renders text with highlighted character ranges for search matches.
///
/// Splits the text into highlighted and normal sections based on the provided
/// character ranges. Highlighting is skipped entirely on the cursor row,
/// where the selection background takes precedence.
///
/// # Parameters
///
/// * `text` - The text to render
/// * `ranges` - Character index ranges to highlight `(start, end)`, end
///   exclusive
/// * `theme` - Active color theme for highlight colors
/// * `is_selected` - Whether the row is under the cursor
pub fn render_highlighted_text(
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    is_selected: bool,
) {
    if ranges.is_empty() || is_selected {
        print!("{text}");
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len());
        let end = end.min(chars.len());
        if start > current_pos {
            let normal_section: String = chars[current_pos..start].iter().collect();
            print!("{normal_section}");
        }

        print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
        print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
        let highlighted_section: String = chars[start..end].iter().collect();
        print!("{highlighted_section}");
        print!("{}", Theme::reset());
        print!("{}", Theme::fg(&theme.colors.text_normal));

        current_pos = end;
    }

    if current_pos < chars.len() {
        let remaining: String = chars[current_pos..].iter().collect();
        print!("{remaining}");
    }
}

/// Truncates a string to `max` characters, appending "..." when shortened.
#[must_use]
pub fn truncate(text: &str, max: usize) -> String {
    let count = text.chars().count();
    if count <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(3)).collect();
    format!("{kept}...")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_grouping() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1_000), "1,000");
        assert_eq!(format_thousands(67_391_582), "67,391,582");
        assert_eq!(format_thousands(1_402_112_000), "1,402,112,000");
    }

    #[test]
    fn whole_areas_render_without_fraction() {
        assert_eq!(format_area(551_695.0), "551,695");
        assert_eq!(format_area(0.0), "0");
    }

    #[test]
    fn fractional_areas_keep_one_decimal() {
        assert_eq!(format_area(21.3), "21.3");
        assert_eq!(format_area(1_234.5), "1,234.5");
    }

    #[test]
    fn truncation_appends_ellipsis() {
        assert_eq!(truncate("France", 10), "France");
        assert_eq!(truncate("South Georgia and the South Sandwich Islands", 12), "South Geo...");
    }
}
