//! Search box component renderer.

use crate::ui::helpers::{pad_to_width, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

/// Horizontal margin for the search box (spaces on left and right).
const SEARCH_BOX_MARGIN: usize = 5;

/// Renders the 3-line search box starting at `row`.
///
/// ```text
/// [margin] ┌──────────────────────┐ [margin]
/// [margin] │ Search: cats_     …  │ [margin]
/// [margin] └──────────────────────┘ [margin]
/// ```
///
/// A cursor is drawn while the box has focus, and an ellipsis marker while a
/// typed query is still waiting for its quiet period. The frame is dimmed
/// when focus is elsewhere. Returns the next free row.
pub fn render_search_bar(row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let border = if search.is_focused {
        Theme::fg(&theme.colors.search_bar_border)
    } else {
        Theme::fg(&theme.colors.border)
    };

    position_cursor(row, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{border}┌{}┐", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    let cursor = if search.is_focused { "_" } else { "" };
    let pending = if search.is_pending { " …" } else { "" };
    let search_text = format!(" Search: {}{cursor}{pending}", search.query);

    position_cursor(row + 1, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{border}│");
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("{}", pad_to_width(&search_text, inner_width));
    print!("{border}│");
    print!("{}", Theme::reset());

    position_cursor(row + 2, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{border}└{}┘", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    row + 3
}
