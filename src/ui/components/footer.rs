//! Footer and status line renderers.

use crate::ui::helpers::{pad_to_width, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders the keybinding hints centered and dimmed at `row`.
///
/// Hints wider than the terminal are truncated. Returns the next free row.
pub fn render_footer(row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    let help_text: String = footer.keybindings.chars().take(cols).collect();
    let text_len = help_text.chars().count();
    let padding = cols.saturating_sub(text_len) / 2;

    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", " ".repeat(padding));
    print!("{help_text}");
    print!("{}", " ".repeat(cols.saturating_sub(padding + text_len)));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the status line at `row`, or a blank line when there is no status.
pub fn render_status_line(row: usize, status: Option<&str>, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.status_fg));
    print!("{}", pad_to_width(&format!(" {}", status.unwrap_or_default()), cols));
    print!("{}", Theme::reset());
    row + 1
}
