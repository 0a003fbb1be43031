//! Blog detail page renderer.
//!
//! Draws the title, counters, image reference and body, then the comment
//! list with the selected comment highlighted and, while composing or editing,
//! the comment input box pinned at the bottom. When space runs short the body
//! is cut first, then the comment list is windowed around the selection.

use crate::ui::helpers::{pad_to_width, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{CommentItem, DetailView};

/// Left margin for all detail content.
const INDENT: &str = "  ";

/// Renders `detail` between `row` and `last_row` inclusive.
pub fn render_detail(row: usize, detail: &DetailView, theme: &Theme, cols: usize, last_row: usize) {
    let width = cols.saturating_sub(INDENT.len());
    let available = (last_row + 1).saturating_sub(row);

    let mut header = vec![
        Line::new(&detail.title, format!("{}{}", Theme::bold(), Theme::fg(&theme.colors.header_fg))),
        Line::new(
            &format!(
                "Likes: {}   Views: {}   Comments: {}",
                detail.likes,
                detail.views,
                detail.comments.len()
            ),
            Theme::fg(&theme.colors.likes_fg),
        ),
    ];
    if !detail.image_url.is_empty() {
        header.push(Line::new(
            &format!("Image: {}", detail.image_url),
            format!("{}{}", Theme::italic(), Theme::fg(&theme.colors.text_dim)),
        ));
    }
    header.push(Line::blank());

    let input_rows = if detail.input.is_some() { 3 } else { 0 };
    let comment_rows = 2 + detail.comments.len().max(1);
    let body_rows = available
        .saturating_sub(header.len() + input_rows + comment_rows.min(4))
        .min(detail.body_lines.len());

    let mut lines = header;
    lines.extend(
        detail
            .body_lines
            .iter()
            .take(body_rows)
            .map(|text| Line::new(text, Theme::fg(&theme.colors.text_normal))),
    );
    lines.push(Line::blank());
    lines.push(Line::new("Comments", format!("{}{}", Theme::bold(), Theme::fg(&theme.colors.header_fg))));

    let comment_budget = available.saturating_sub(lines.len() + input_rows).max(1);
    lines.extend(comment_lines(&detail.comments, theme, comment_budget));

    let mut current_row = row;
    for line in lines.iter().take(available.saturating_sub(input_rows)) {
        line.print(current_row, width);
        current_row += 1;
    }

    if let Some(input) = &detail.input {
        let input_row = (last_row + 1).saturating_sub(input_rows).max(current_row);
        Line::blank().print(input_row, width);
        Line::new(&input.label, Theme::fg(&theme.colors.search_bar_border)).print(input_row + 1, width);
        Line::new(&format!("> {}_", input.text), Theme::fg(&theme.colors.text_normal)).print(input_row + 2, width);
    }
}

/// Comment rows, windowed so the selected or edited comment stays visible.
fn comment_lines(comments: &[CommentItem], theme: &Theme, budget: usize) -> Vec<Line> {
    if comments.is_empty() {
        return vec![Line::new(
            "No comments yet. Press c to add one.",
            format!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim)),
        )];
    }

    let focus = comments
        .iter()
        .position(|comment| comment.is_selected || comment.is_editing)
        .unwrap_or(0);
    let start = focus.saturating_sub(budget.saturating_sub(1));

    comments
        .iter()
        .enumerate()
        .skip(start)
        .take(budget)
        .map(|(idx, comment)| {
            let marker = if comment.is_editing { "✎" } else { "•" };
            let style = if comment.is_selected {
                format!("{}{}", Theme::fg(&theme.colors.selection_fg), Theme::bg(&theme.colors.selection_bg))
            } else if comment.is_editing {
                Theme::fg(&theme.colors.text_dim)
            } else {
                Theme::fg(&theme.colors.text_normal)
            };
            Line::new(&format!("{marker} {}. {}", idx + 1, comment.text), style)
        })
        .collect()
}

/// One styled, width-padded line of the page.
struct Line {
    text: String,
    style: String,
}

impl Line {
    fn new(text: &str, style: String) -> Self {
        Self {
            text: text.to_string(),
            style,
        }
    }

    fn blank() -> Self {
        Self::new("", String::new())
    }

    fn print(&self, row: usize, width: usize) {
        position_cursor(row, 1);
        print!("{INDENT}{}{}{}", self.style, pad_to_width(&self.text, width), Theme::reset());
    }
}
