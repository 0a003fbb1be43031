//! Composable UI component renderers.
//!
//! Every screen shares one frame:
//!
//! ```text
//! [blank line]
//! [Header]
//! [Border]
//! [Search Bar - 3 lines, when shown]
//! [Body: blog table | detail page | empty state]
//! [Border]
//! [Status line]
//! [Footer]
//! ```
//!
//! The share dialog, when open, is drawn last on top of the frame.
//!
//! - [`header`]: Title bar
//! - [`footer`]: Keybinding hints and status line
//! - [`search`]: Search input box
//! - [`table`]: Blog list (TITLE, LIKES, VIEWS, COMMENTS, EXCERPT)
//! - [`detail`]: Single blog page with comments
//! - [`modal`]: Share dialog
//! - [`empty`]: Empty state message

mod detail;
mod empty;
mod footer;
mod header;
mod modal;
mod search;
mod table;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{ScreenBody, UIViewModel};

use detail::render_detail;
use empty::render_empty_state;
use footer::{render_footer, render_status_line};
use header::render_header;
use modal::render_share_modal;
use search::render_search_bar;
use table::{render_table_headers, render_table_rows};

/// Renders a horizontal rule at `row`. Returns the next free row.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the full frame for `vm`.
pub fn render_layout(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2; // Row 1 stays blank.

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    if let Some(search) = &vm.search_bar {
        current_row = render_search_bar(current_row, search, theme, cols);
    }

    let footer_row = rows;
    let status_row = footer_row.saturating_sub(1);
    let border_row = status_row.saturating_sub(1);
    let last_body_row = border_row.saturating_sub(1);

    match &vm.body {
        ScreenBody::List(list) => {
            current_row = render_table_headers(current_row, theme);
            render_table_rows(current_row, &list.items, theme, cols);
        }
        ScreenBody::Detail(detail) => render_detail(current_row, detail, theme, cols, last_body_row),
        ScreenBody::Empty(empty) => render_empty_state(current_row, empty, theme, cols),
    }

    render_border(border_row, &theme.colors.border, cols);
    render_status_line(status_row, vm.status.as_deref(), theme, cols);
    render_footer(footer_row, &vm.footer, theme, cols);

    if let Some(share) = &vm.share_modal {
        render_share_modal(share, theme, rows, cols);
    }
}
