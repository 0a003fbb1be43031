//! BlogNest: a Zellij plugin for browsing blog posts.
//!
//! BlogNest keeps a collection of blog posts in memory and lets you:
//! - Browse them as a list of cards with like, view and comment counts
//! - Open a post to read it, like it and manage its comments
//! - Narrow the list with a debounced, case-insensitive search
//! - Copy a share link for any post to the clipboard
//!
//! Nothing is written back: likes, views and comments live as long as the
//! plugin does.

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Keys, timers, IPC
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← Routing, input modes,
//! │  - Event handling, debounced search                 │    view models
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ Store (store/)│   │ UI (ui/)      │   │ Worker        │
//! │ - BlogStore   │   │ - Rendering   │   │ - Seed loading│
//! │ - Filtering   │   │ - Theming     │   │ - IPC bridge  │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                                                   │
//! ┌─────────────────────────────────────────────────────┐
//! │  Storage (seed sources), Domain, Infrastructure     │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use blognest::{handle_event, initialize, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//! let (render, actions) = handle_event(&mut state, &Event::Reload)?;
//! assert!(render);
//! assert_eq!(actions.len(), 1);
//! # Ok::<(), blognest::BlognestError>(())
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod storage;
pub mod store;
pub mod worker;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, DisplaySettings, Event, InputMode, Screen};
pub use domain::{Blog, BlogId, BlognestError, Result};
pub use store::{BlogAction, BlogStore};
pub use ui::Theme;

use std::collections::BTreeMap;
use std::time::Duration;

/// Default origin for share links.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Default search quiet period, in milliseconds.
pub const DEFAULT_SEARCH_DEBOUNCE_MS: u64 = 300;

/// Default number of body characters on a list card.
pub const DEFAULT_EXCERPT_LEN: usize = 100;

/// Plugin configuration, read from the plugin block of the Zellij layout.
///
/// ```kdl
/// plugin location="file:blognest.wasm" {
///     blogs_file "~/notes/blogs.json"
///     base_url "https://blog.example.com"
///     search_debounce_ms "250"
///     theme "catppuccin-latte"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Seed file, already resolved onto the sandbox mount.
    ///
    /// `None` loads the built-in sample collection.
    pub blogs_file: Option<String>,

    /// Origin for share links. Default: `http://localhost:3000`
    pub base_url: String,

    /// Quiet period before a typed search is applied. Default: 300
    pub search_debounce_ms: u64,

    /// Body characters shown on a list card before `...`. Default: 100
    pub excerpt_len: usize,

    /// Built-in theme name to use.
    ///
    /// Options: `catppuccin-mocha`, `catppuccin-latte`, `catppuccin-frappe`,
    /// `catppuccin-macchiato`. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file. Takes precedence over `theme_name`.
    pub theme_file: Option<String>,

    /// Tracing level for OpenTelemetry spans.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            blogs_file: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            search_debounce_ms: DEFAULT_SEARCH_DEBOUNCE_MS,
            excerpt_len: DEFAULT_EXCERPT_LEN,
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Unparseable numbers fall back to their defaults; blank strings count
    /// as unset.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use blognest::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("blogs_file".to_string(), "~/blogs.json".to_string());
    /// map.insert("search_debounce_ms".to_string(), "150".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.blogs_file.as_deref(), Some("/host/blogs.json"));
    /// assert_eq!(config.search_debounce_ms, 150);
    /// assert_eq!(config.excerpt_len, 100);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let text = |key: &str| {
            config
                .get(key)
                .map(|value| value.trim())
                .filter(|value| !value.is_empty())
                .map(String::from)
        };

        let search_debounce_ms = config
            .get("search_debounce_ms")
            .and_then(|s| s.trim().parse::<u64>().ok())
            .unwrap_or(DEFAULT_SEARCH_DEBOUNCE_MS);

        let excerpt_len = config
            .get("excerpt_len")
            .and_then(|s| s.trim().parse::<usize>().ok())
            .filter(|len| *len > 0)
            .unwrap_or(DEFAULT_EXCERPT_LEN);

        Self {
            blogs_file: text("blogs_file").map(|path| infrastructure::resolve_seed_path(&path)),
            base_url: text("base_url").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            search_debounce_ms,
            excerpt_len,
            theme_name: text("theme"),
            theme_file: text("theme_file").map(|path| infrastructure::expand_tilde(&path)),
            trace_level: text("trace_level"),
        }
    }

    /// The presentation part of the configuration.
    #[must_use]
    pub fn display_settings(&self) -> DisplaySettings {
        DisplaySettings {
            base_url: self.base_url.clone(),
            excerpt_len: self.excerpt_len,
            search_delay: Duration::from_millis(self.search_debounce_ms),
            blogs_file: self.blogs_file.clone(),
        }
    }

    /// Resolves the configured theme, falling back to the default theme.
    fn theme(&self) -> Theme {
        if let Some(theme_file) = &self.theme_file {
            return Theme::from_file(theme_file).unwrap_or_else(|e| {
                tracing::warn!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            });
        }

        self.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
            Theme::from_name(theme_name).unwrap_or_else(|| {
                tracing::warn!(theme_name = %theme_name, "unknown theme, using default");
                Theme::default()
            })
        })
    }
}

/// Builds the initial application state.
///
/// The store starts empty; the plugin asks the worker for the seed collection
/// once permissions are granted.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(blogs_file = ?config.blogs_file, base_url = %config.base_url, "initializing blognest plugin");
    AppState::with_settings(vec![], config.theme(), config.display_settings())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect()
    }

    #[test]
    fn empty_map_gives_defaults() {
        assert_eq!(Config::from_zellij(&BTreeMap::new()), Config::default());
    }

    #[test]
    fn bad_numbers_fall_back() {
        let config = Config::from_zellij(&map(&[("search_debounce_ms", "soon"), ("excerpt_len", "0")]));
        assert_eq!(config.search_debounce_ms, DEFAULT_SEARCH_DEBOUNCE_MS);
        assert_eq!(config.excerpt_len, DEFAULT_EXCERPT_LEN);
    }

    #[test]
    fn blank_values_are_unset() {
        let config = Config::from_zellij(&map(&[("blogs_file", "  "), ("base_url", "")]));
        assert_eq!(config.blogs_file, None);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn unknown_theme_falls_back_to_default() {
        let config = Config {
            theme_name: Some("solarized".to_string()),
            ..Config::default()
        };
        assert_eq!(initialize(&config).theme.name, "catppuccin-mocha");
    }

    #[test]
    fn settings_carry_into_state() {
        let config = Config::from_zellij(&map(&[("base_url", "https://blog.example.com/"), ("search_debounce_ms", "50")]));
        let state = initialize(&config);
        assert_eq!(state.settings.base_url, "https://blog.example.com/");
        assert_eq!(state.search_debouncer.delay(), Duration::from_millis(50));
        assert!(state.store.is_empty());
    }
}
