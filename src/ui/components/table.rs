//! Blog list table renderer.
//!
//! One row per blog card: TITLE, LIKES, VIEWS, COMMENTS and an EXCERPT of the
//! body filling the rest of the line. Titles carry search highlights.

use crate::app::state::{COUNTER_COLUMNS_WIDTH, TITLE_COLUMN_WIDTH};
use crate::ui::helpers::{self, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DisplayItem;

/// Width of one counter column.
const COUNTER_WIDTH: usize = COUNTER_COLUMNS_WIDTH / 3;

/// Renders the bold column headers at `row`. Returns the next free row.
pub fn render_table_headers(row: usize, theme: &Theme) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!(
        "{:<title$}{:>count$}{:>count$}{:>count$}  EXCERPT",
        "TITLE",
        "LIKES",
        "VIEWS",
        "COMMENTS",
        title = TITLE_COLUMN_WIDTH,
        count = COUNTER_WIDTH,
    );
    print!("{}", Theme::reset());
    row + 1
}

/// Renders every item from `row` down. Returns the next free row.
pub fn render_table_rows(row: usize, items: &[DisplayItem], theme: &Theme, cols: usize) -> usize {
    items
        .iter()
        .fold(row, |current_row, item| render_table_row(current_row, item, theme, cols))
}

/// Renders one blog card.
///
/// The selection background spans the whole line; match highlights and the
/// likes color are suppressed on the selected row so it stays uniform.
fn render_table_row(row: usize, item: &DisplayItem, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    let base = if item.is_selected {
        format!("{}{}", Theme::fg(&theme.colors.selection_fg), Theme::bg(&theme.colors.selection_bg))
    } else {
        Theme::fg(&theme.colors.text_normal)
    };
    print!("{base}");

    helpers::render_highlighted_text(&item.title, &item.highlight_ranges, theme, item.is_selected);
    if !item.highlight_ranges.is_empty() && !item.is_selected {
        print!("{base}");
    }
    let title_len = item.title.chars().count();
    print!("{}", " ".repeat(TITLE_COLUMN_WIDTH.saturating_sub(title_len)));

    if !item.is_selected {
        print!("{}", Theme::fg(&theme.colors.likes_fg));
    }
    print!("{:>width$}", item.likes, width = COUNTER_WIDTH);
    if !item.is_selected {
        print!("{base}");
    }
    print!("{:>width$}", item.views, width = COUNTER_WIDTH);
    print!("{:>width$}", item.comment_count, width = COUNTER_WIDTH);
    print!("  ");

    if !item.is_selected {
        print!("{}", Theme::fg(&theme.colors.text_dim));
    }
    print!("{}", item.excerpt);

    let line_len = TITLE_COLUMN_WIDTH + COUNTER_COLUMNS_WIDTH + 2 + item.excerpt.chars().count();
    print!("{}", " ".repeat(cols.saturating_sub(line_len)));

    print!("{}", Theme::reset());
    row + 1
}
