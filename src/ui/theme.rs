//! Color schemes and ANSI escape sequence generation.
//!
//! Themes come from the four built-in Catppuccin flavors or from a TOML file
//! with the same shape:
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#cdd6f4"
//! selection_fg = "#1e1e2e"
//! selection_bg = "#f5c2e7"
//! text_normal = "#cdd6f4"
//! text_dim = "#6c7086"
//! border = "#45475a"
//! search_bar_border = "#f5c2e7"
//! match_highlight_fg = "#1e1e2e"
//! match_highlight_bg = "#f9e2af"
//! empty_state_fg = "#89b4fa"
//! likes_fg = "#f38ba8"
//! status_fg = "#a6e3a1"
//! modal_border = "#cba6f7"
//! ```

use crate::domain::error::{BlognestError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Name of the theme used when none is configured.
pub const DEFAULT_THEME: &str = "catppuccin-mocha";

/// A named color palette.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

/// Hex colors (`"#rrggbb"`) for every styled element.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    pub header_fg: String,
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Selected list row or comment.
    pub selection_fg: String,
    pub selection_bg: String,

    pub text_normal: String,
    /// Footer, excerpts, secondary details.
    pub text_dim: String,

    /// Horizontal separators.
    pub border: String,

    pub search_bar_border: String,
    /// Query matches inside titles.
    pub match_highlight_fg: String,
    pub match_highlight_bg: String,

    pub empty_state_fg: String,

    /// Like counters.
    pub likes_fg: String,

    /// Status line.
    pub status_fg: String,

    /// Share dialog frame.
    pub modal_border: String,
}

impl Theme {
    /// Loads a built-in theme by name, `None` if the name is unknown.
    ///
    /// # Example
    ///
    /// ```rust
    /// use blognest::ui::Theme;
    ///
    /// assert!(Theme::from_name("catppuccin-frappe").is_some());
    /// assert!(Theme::from_name("solarized").is_none());
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "catppuccin-mocha" => include_str!("../../themes/catppuccin-mocha.toml"),
            "catppuccin-latte" => include_str!("../../themes/catppuccin-latte.toml"),
            "catppuccin-frappe" => include_str!("../../themes/catppuccin-frappe.toml"),
            "catppuccin-macchiato" => include_str!("../../themes/catppuccin-macchiato.toml"),
            _ => return None,
        };

        match toml::from_str(toml_str) {
            Ok(theme) => Some(theme),
            Err(e) => {
                tracing::error!(theme = name, error = %e, "built-in theme failed to parse");
                None
            }
        }
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`BlognestError::Io`] if the file cannot be read and
    /// [`BlognestError::Theme`] if it is not a valid theme.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents).map_err(|e| BlognestError::Theme(format!("invalid theme TOML: {e}")))
    }

    /// Parses `#rrggbb`, falling back to white on malformed input.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim().trim_start_matches('#');
        let channel = |range: std::ops::Range<usize>| {
            hex.get(range)
                .and_then(|digits| u8::from_str_radix(digits, 16).ok())
                .unwrap_or(255)
        };

        if hex.len() != 6 {
            return (255, 255, 255);
        }
        (channel(0..2), channel(2..4), channel(4..6))
    }

    /// 24-bit foreground color escape sequence.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// 24-bit background color escape sequence.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    #[must_use]
    pub const fn italic() -> &'static str {
        "\u{001b}[3m"
    }

    /// Clears all styling.
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Catppuccin Mocha.
    ///
    /// # Panics
    ///
    /// Panics if the embedded Mocha theme does not parse, which the test suite
    /// rules out.
    #[allow(clippy::expect_used)]
    fn default() -> Self {
        Self::from_name(DEFAULT_THEME).expect("embedded catppuccin-mocha theme parses")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn every_builtin_theme_parses() {
        for name in ["catppuccin-mocha", "catppuccin-latte", "catppuccin-frappe", "catppuccin-macchiato"] {
            let theme = Theme::from_name(name).unwrap();
            assert_eq!(theme.name, name);
        }
    }

    #[test]
    fn escape_sequences_use_rgb() {
        assert_eq!(Theme::fg("#ff0080"), "\u{1b}[38;2;255;0;128m");
        assert_eq!(Theme::bg("00ff00"), "\u{1b}[48;2;0;255;0m");
        assert_eq!(Theme::fg("#zz"), "\u{1b}[38;2;255;255;255m");
    }

    #[test]
    fn theme_file_round_trips_and_reports_errors() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", toml::to_string(&Theme::default()).unwrap()).unwrap();
        assert_eq!(Theme::from_file(file.path()).unwrap(), Theme::default());

        let mut broken = tempfile::NamedTempFile::new().unwrap();
        write!(broken, "name = 1").unwrap();
        assert!(matches!(Theme::from_file(broken.path()), Err(BlognestError::Theme(_))));
    }
}
