//! Empty state component renderer.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders a centered two-line message, three rows below `row`.
///
/// Used when no blogs are loaded, when a search matches nothing, and when a
/// detail page points at a blog that is not displayed.
pub fn render_empty_state(row: usize, empty: &EmptyState, theme: &Theme, cols: usize) {
    let message_row = row + 3;

    print_centered(message_row, &empty.message, &Theme::fg(&theme.colors.empty_state_fg), cols);

    let subtitle_style = format!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim));
    print_centered(message_row + 1, &empty.subtitle, &subtitle_style, cols);
}

fn print_centered(row: usize, text: &str, style: &str, cols: usize) {
    let text: String = text.chars().take(cols).collect();
    let len = text.chars().count();
    let padding = cols.saturating_sub(len) / 2;

    position_cursor(row, 1);
    print!("{style}");
    print!("{}", " ".repeat(padding));
    print!("{text}");
    print!("{}", " ".repeat(cols.saturating_sub(padding + len)));
    print!("{}", Theme::reset());
}
