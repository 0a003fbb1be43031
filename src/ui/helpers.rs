//! Shared rendering utilities and helpers.
//!
//! Cursor positioning and highlighted text printing, plus the pure text
//! shaping used when computing view models: character-safe truncation,
//! word wrapping, and byte-to-character range conversion.
//!
//! # Example
//!
//! ```rust
//! use blognest::ui::helpers::{truncate_chars, wrap_text};
//!
//! assert_eq!(truncate_chars("a very long title", 9), "a very...");
//! assert_eq!(wrap_text("one two three", 7), vec!["one two", "three"]);
//! ```

use crate::ui::theme::Theme;

/// Positions the cursor at a specific row and column (both 1-indexed).
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Renders text with highlighted character ranges for search matches.
///
/// Ranges are `(start, end)` character indices, end exclusive. Ranges that
/// fall past the end of `text` (e.g. after truncation) are clipped. When
/// `is_selected` is `true`, match highlighting is skipped so the selection
/// background stays uniform.
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
        let start = start.max(current_pos).min(chars.len());
        let end = end.min(chars.len());
        if start >= end {
            continue;
        }

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

/// Cuts `text` to at most `max_chars` characters, ending in `...` when cut.
#[must_use]
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    if max_chars <= 3 {
        return text.chars().take(max_chars).collect();
    }
    let kept: String = text.chars().take(max_chars - 3).collect();
    format!("{kept}...")
}

/// Pads `text` with spaces to exactly `width` characters, truncating first
/// if it is longer.
#[must_use]
pub fn pad_to_width(text: &str, width: usize) -> String {
    let truncated = truncate_chars(text, width);
    let len = truncated.chars().count();
    format!("{truncated}{}", " ".repeat(width.saturating_sub(len)))
}

/// Greedy word wrap to lines of at most `width` characters.
///
/// Words longer than `width` are split. Existing newlines start new lines.
#[must_use]
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();

    for paragraph in text.lines() {
        let mut line = String::new();
        let mut line_len = 0;

        for word in paragraph.split_whitespace() {
            let mut word: Vec<char> = word.chars().collect();

            while word.len() > width {
                if line_len > 0 {
                    lines.push(std::mem::take(&mut line));
                    line_len = 0;
                }
                let rest = word.split_off(width);
                lines.push(word.into_iter().collect());
                word = rest;
            }

            let needed = if line_len == 0 { word.len() } else { line_len + 1 + word.len() };
            if needed > width {
                lines.push(std::mem::take(&mut line));
                line_len = 0;
            }
            if line_len > 0 {
                line.push(' ');
                line_len += 1;
            }
            line.extend(word.iter());
            line_len += word.len();
        }

        if line_len > 0 || lines.is_empty() || paragraph.trim().is_empty() {
            lines.push(line);
        }
    }

    lines
}

/// Converts byte ranges within `text` into character ranges.
///
/// Ranges must lie on character boundaries, as produced by
/// `SearchQuery::highlight_ranges`.
#[must_use]
pub fn byte_to_char_ranges(text: &str, ranges: &[(usize, usize)]) -> Vec<(usize, usize)> {
    ranges
        .iter()
        .filter_map(|&(start, end)| {
            let prefix = text.get(..start)?;
            let matched = text.get(start..end)?;
            let char_start = prefix.chars().count();
            Some((char_start, char_start + matched.chars().count()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_keeps_short_text() {
        assert_eq!(truncate_chars("short", 10), "short");
        assert_eq!(truncate_chars("exact", 5), "exact");
    }

    #[test]
    fn truncate_is_char_safe() {
        assert_eq!(truncate_chars("ééééééé", 5), "éé...");
        assert_eq!(truncate_chars("abcdef", 2), "ab");
    }

    #[test]
    fn pad_fills_and_cuts() {
        assert_eq!(pad_to_width("ab", 4), "ab  ");
        assert_eq!(pad_to_width("abcdefgh", 6), "abc...");
    }

    #[test]
    fn wrap_breaks_on_words() {
        assert_eq!(
            wrap_text("the quick brown fox", 10),
            vec!["the quick".to_string(), "brown fox".to_string()]
        );
    }

    #[test]
    fn wrap_splits_long_words() {
        assert_eq!(
            wrap_text("abcdefgh ij", 3),
            vec!["abc".to_string(), "def".to_string(), "gh".to_string(), "ij".to_string()]
        );
    }

    #[test]
    fn wrap_keeps_paragraph_breaks() {
        assert_eq!(
            wrap_text("one\n\ntwo", 20),
            vec!["one".to_string(), String::new(), "two".to_string()]
        );
    }

    #[test]
    fn wrap_of_empty_text_has_no_lines() {
        assert_eq!(wrap_text("", 20), Vec::<String>::new());
    }

    #[test]
    fn byte_ranges_become_char_ranges() {
        let text = "héllo wörld";
        let start = text.find("wö").unwrap();
        assert_eq!(byte_to_char_ranges(text, &[(start, start + "wö".len())]), vec![(6, 8)]);
    }
}
