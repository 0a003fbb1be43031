//! Share dialog renderer.

use crate::ui::helpers::{pad_to_width, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ShareModalInfo;

/// Height of the dialog including its frame.
const MODAL_HEIGHT: usize = 7;

/// Draws the share dialog centered over whatever is already on screen.
///
/// ```text
/// ┌─ Share this blog ───────────────┐
/// │                                 │
/// │ Why Cats Ignore You             │
/// │ http://localhost:3000/blog/2    │
/// │                                 │
/// │ Enter: copy link   Esc: close   │
/// └─────────────────────────────────┘
/// ```
pub fn render_share_modal(modal: &ShareModalInfo, theme: &Theme, rows: usize, cols: usize) {
    let longest = modal.title.chars().count().max(modal.url.chars().count()).max(30);
    let width = (longest + 4).min(cols.saturating_sub(4)).max(10);
    let inner = width - 2;
    let left = cols.saturating_sub(width) / 2 + 1;
    let top = rows.saturating_sub(MODAL_HEIGHT) / 2 + 1;
    let frame = Theme::fg(&theme.colors.modal_border);

    let heading = " Share this blog ";
    position_cursor(top, left);
    let rule = inner.saturating_sub(heading.chars().count() + 1);
    print!("{frame}┌─{}{heading}{}", Theme::bold(), Theme::reset());
    print!("{frame}{}┐{}", "─".repeat(rule), Theme::reset());

    let lines = [
        (String::new(), Theme::fg(&theme.colors.text_normal)),
        (modal.title.clone(), format!("{}{}", Theme::bold(), Theme::fg(&theme.colors.header_fg))),
        (modal.url.clone(), Theme::fg(&theme.colors.empty_state_fg)),
        (String::new(), Theme::fg(&theme.colors.text_normal)),
        ("Enter: copy link   Esc: close".to_string(), Theme::fg(&theme.colors.text_dim)),
    ];

    for (offset, (text, style)) in lines.iter().enumerate() {
        position_cursor(top + 1 + offset, left);
        print!("{frame}│{}", Theme::reset());
        print!("{style}{}{}", pad_to_width(&format!(" {text}"), inner), Theme::reset());
        print!("{frame}│{}", Theme::reset());
    }

    position_cursor(top + MODAL_HEIGHT - 1, left);
    print!("{frame}└{}┘{}", "─".repeat(inner), Theme::reset());
}
