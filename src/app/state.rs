//! Application state management and view model computation.
//!
//! [`AppState`] owns the [`BlogStore`] together with everything the UI needs
//! around it: the current route, selections, the search box and its debouncer,
//! comment drafts, the share modal and the status line.
//!
//! # State Components
//!
//! - **Store**: Canonical and displayed blog lists
//! - **Screen**: List or detail route
//! - **Selection**: Cursor in the list, cursor in the detail comments
//! - **Input Mode**: Where typed characters go
//! - **Search**: Typed query, pending debounced filter, armed timers
//! - **Share Modal**: Link being offered for copying
//!
//! # Example
//!
//! ```rust
//! use blognest::app::AppState;
//! use blognest::domain::Blog;
//! use blognest::ui::Theme;
//!
//! let state = AppState::new(vec![Blog::new(1, "Cats", "about cats")], Theme::default());
//! assert_eq!(state.selected_blog().map(|b| b.id), Some(1));
//! let viewmodel = state.compute_viewmodel(24, 80);
//! assert!(viewmodel.header.title.contains("All Blogs (1)"));
//! ```

use super::debounce::{DebounceTicket, Debouncer, DEFAULT_SEARCH_DELAY};
use super::modes::{InputMode, Screen};
use crate::domain::{Blog, BlogId};
use crate::store::{BlogStore, SearchQuery};
use crate::ui::helpers::{byte_to_char_ranges, truncate_chars, wrap_text};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    CommentItem, DetailView, DisplayItem, EmptyState, FooterInfo, HeaderInfo, InputBoxInfo,
    ListView, ScreenBody, SearchBarInfo, ShareModalInfo, UIViewModel,
};
use std::collections::VecDeque;
use std::time::Duration;

/// Width of the TITLE column, including truncation ellipsis.
pub const TITLE_COLUMN_WIDTH: usize = 34;

/// Width taken by the LIKES, VIEWS and COMMENTS columns plus separators.
pub const COUNTER_COLUMNS_WIDTH: usize = 24;

/// Presentation settings taken from the plugin configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplaySettings {
    /// Origin used to build share links (`{base_url}/blog/{id}`).
    pub base_url: String,

    /// Maximum characters of body text shown on a list card.
    pub excerpt_len: usize,

    /// Quiet period before a typed query is applied.
    pub search_delay: Duration,

    /// Seed file to (re)load blogs from; `None` uses the built-in sample.
    pub blogs_file: Option<String>,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
            excerpt_len: 100,
            search_delay: DEFAULT_SEARCH_DELAY,
            blogs_file: None,
        }
    }
}

/// The share dialog for one blog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareModal {
    pub blog_id: BlogId,
    pub title: String,
    pub url: String,
}

/// A one-line notice shown above the footer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    /// Wall-clock time the message was raised, formatted `HH:MM:SS` (UTC).
    pub at: String,
}

impl StatusMessage {
    #[must_use]
    pub fn now(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            at: chrono::Utc::now().format("%H:%M:%S").to_string(),
        }
    }
}

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Owner of all blog data. The only thing that mutates blogs.
    pub store: BlogStore,

    /// Current route.
    pub screen: Screen,

    /// Zero-based cursor into the displayed list.
    ///
    /// Clamped after every filter; wraps during navigation.
    pub selected_index: usize,

    /// Zero-based cursor into the comments of the blog on the detail screen.
    pub comment_index: usize,

    /// Where typed characters go.
    pub input_mode: InputMode,

    /// Text in the search box. May be ahead of `store.query()` while a
    /// debounced filter is pending.
    pub search_query: String,

    /// Pending search query awaiting its quiet period.
    pub search_debouncer: Debouncer<String>,

    /// Tickets for armed timers, oldest first.
    pub armed_timers: VecDeque<DebounceTicket>,

    /// Comment text being composed or edited.
    pub draft: String,

    /// Open share dialog, if any.
    pub share: Option<ShareModal>,

    /// Latest notice for the status line.
    pub status: Option<StatusMessage>,

    /// Presentation settings from configuration.
    pub settings: DisplaySettings,

    /// Color scheme for UI rendering.
    pub theme: Theme,
}

impl AppState {
    /// Creates a new application state and bulk-loads `blogs` into the store.
    ///
    /// Starts on the list screen in normal mode with default settings.
    #[must_use]
    pub fn new(blogs: Vec<Blog>, theme: Theme) -> Self {
        Self::with_settings(blogs, theme, DisplaySettings::default())
    }

    /// Like [`AppState::new`] with explicit display settings.
    #[must_use]
    pub fn with_settings(blogs: Vec<Blog>, theme: Theme, settings: DisplaySettings) -> Self {
        let mut store = BlogStore::new();
        store.set_blogs(blogs);

        Self {
            store,
            screen: Screen::List,
            selected_index: 0,
            comment_index: 0,
            input_mode: InputMode::Normal,
            search_query: String::new(),
            search_debouncer: Debouncer::new(settings.search_delay),
            armed_timers: VecDeque::new(),
            draft: String::new(),
            share: None,
            status: None,
            settings,
            theme,
        }
    }

    /// Moves the cursor down by one, wrapping to the top.
    ///
    /// On the list screen moves through blogs, on the detail screen through
    /// comments. No-op when there is nothing to move through.
    pub fn move_selection_down(&mut self) {
        let len = self.cursor_len();
        if len == 0 {
            return;
        }
        let cursor = self.cursor_mut();
        *cursor = (*cursor + 1) % len;
    }

    /// Moves the cursor up by one, wrapping to the bottom.
    pub fn move_selection_up(&mut self) {
        let len = self.cursor_len();
        if len == 0 {
            return;
        }
        let cursor = self.cursor_mut();
        *cursor = if *cursor == 0 { len - 1 } else { *cursor - 1 };
    }

    /// The blog under the list cursor.
    #[must_use]
    pub fn selected_blog(&self) -> Option<&Blog> {
        self.store.displayed(self.selected_index)
    }

    /// The blog on the detail screen, if it is still in the displayed list.
    #[must_use]
    pub fn current_blog(&self) -> Option<&Blog> {
        let id = self.screen.blog_id()?;
        self.store.position_of(id).and_then(|position| self.store.displayed(position))
    }

    /// The blog the user is acting on: the detail blog, or the list selection.
    #[must_use]
    pub fn focused_blog(&self) -> Option<&Blog> {
        match self.screen {
            Screen::List => self.selected_blog(),
            Screen::Detail(_) => self.current_blog(),
        }
    }

    /// Keeps both cursors inside their lists after the store changed.
    pub fn clamp_selection(&mut self) {
        self.selected_index = self.selected_index.min(self.store.len().saturating_sub(1));

        let comments = self.current_blog().map_or(0, Blog::comment_count);
        self.comment_index = self.comment_index.min(comments.saturating_sub(1));
    }

    /// Applies `query` to the store and keeps the cursors valid.
    ///
    /// Returns `true` if the displayed list changed.
    pub fn apply_filter(&mut self, query: &str) -> bool {
        let changed = self.store.filter_blogs(query);
        self.clamp_selection();
        changed
    }

    /// Sets the status line.
    pub fn notify(&mut self, text: impl Into<String>) {
        let message = StatusMessage::now(text);
        tracing::debug!(status = %message.text, "status updated");
        self.status = Some(message);
    }

    /// Computes a renderable UI view model from current state and terminal dimensions.
    ///
    /// # Windowing Algorithm
    ///
    /// 1. Subtract UI chrome (header, borders, search bar, status, footer) from `rows`
    /// 2. Center the window on the selected blog
    /// 3. Slide the window back when near the end so it stays full
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let body = match self.screen {
            Screen::List => self.compute_list_body(rows, cols),
            Screen::Detail(_) => self.compute_detail_body(cols),
        };

        UIViewModel {
            header: self.compute_header(),
            footer: self.compute_footer(),
            body,
            search_bar: self.compute_search_bar(),
            share_modal: self.share.as_ref().map(|share| ShareModalInfo {
                title: share.title.clone(),
                url: share.url.clone(),
            }),
            status: self
                .status
                .as_ref()
                .map(|status| format!("[{}] {}", status.at, status.text)),
        }
    }

    fn compute_list_body(&self, rows: usize, cols: usize) -> ScreenBody {
        if self.store.all_blogs().is_empty() {
            return ScreenBody::Empty(EmptyState {
                message: "No blogs loaded".to_string(),
                subtitle: "Set blogs_file in the plugin configuration, then press r to reload".to_string(),
            });
        }

        if self.store.is_empty() {
            return ScreenBody::Empty(EmptyState {
                message: format!("No blogs match \"{}\"", self.store.query()),
                subtitle: "Press Esc to clear the search".to_string(),
            });
        }

        let available_rows = self.calculate_available_rows(rows).max(1);
        let total = self.store.len();

        let mut visible_start = self.selected_index.saturating_sub(available_rows / 2);
        let visible_end = (visible_start + available_rows).min(total);
        if visible_end - visible_start < available_rows && total >= available_rows {
            visible_start = visible_end.saturating_sub(available_rows);
        }

        let query = SearchQuery::new(self.store.query());
        let excerpt_width = cols.saturating_sub(TITLE_COLUMN_WIDTH + COUNTER_COLUMNS_WIDTH + 2);

        let items = self
            .store
            .blogs()
            .enumerate()
            .skip(visible_start)
            .take(visible_end - visible_start)
            .map(|(absolute_idx, blog)| self.compute_display_item(blog, absolute_idx, excerpt_width, &query))
            .collect();

        ScreenBody::List(ListView {
            items,
            selected_index: self.selected_index.saturating_sub(visible_start),
        })
    }

    /// Builds one list row: truncated title with match highlights, counters
    /// and the card excerpt.
    fn compute_display_item(
        &self,
        blog: &Blog,
        absolute_idx: usize,
        excerpt_width: usize,
        query: &SearchQuery,
    ) -> DisplayItem {
        let highlight_ranges = byte_to_char_ranges(&blog.title, &query.highlight_ranges(&blog.title));

        DisplayItem {
            id: blog.id,
            title: truncate_chars(&blog.title, TITLE_COLUMN_WIDTH - 2),
            excerpt: truncate_chars(&blog.excerpt(self.settings.excerpt_len), excerpt_width),
            likes: blog.likes,
            views: blog.views,
            comment_count: blog.comment_count(),
            is_selected: absolute_idx == self.selected_index,
            highlight_ranges,
        }
    }

    fn compute_detail_body(&self, cols: usize) -> ScreenBody {
        let Some(blog) = self.current_blog() else {
            return ScreenBody::Empty(EmptyState {
                message: "Blog not found".to_string(),
                subtitle: "Press Esc to go back".to_string(),
            });
        };

        let text_width = cols.saturating_sub(4).max(10);

        let comments = blog
            .comments
            .iter()
            .enumerate()
            .map(|(idx, text)| CommentItem {
                text: text.clone(),
                is_selected: idx == self.comment_index && self.input_mode == InputMode::Normal,
                is_editing: self.input_mode == InputMode::EditComment(idx),
            })
            .collect();

        let input = match self.input_mode {
            InputMode::Compose => Some(InputBoxInfo {
                label: "Add a comment".to_string(),
                text: self.draft.clone(),
            }),
            InputMode::EditComment(idx) => Some(InputBoxInfo {
                label: format!("Edit comment #{}", idx + 1),
                text: self.draft.clone(),
            }),
            InputMode::Normal | InputMode::Search => None,
        };

        ScreenBody::Detail(DetailView {
            title: blog.title.clone(),
            image_url: blog.image_url.clone(),
            body_lines: wrap_text(&blog.body, text_width),
            likes: blog.likes,
            views: blog.views,
            comments,
            input,
        })
    }

    fn compute_header(&self) -> HeaderInfo {
        let title = match self.screen {
            Screen::List if self.store.query().is_empty() => {
                format!(" BlogNest · All Blogs ({}) ", self.store.len())
            }
            Screen::List => format!(
                " BlogNest · \"{}\" ({} of {}) ",
                self.store.query(),
                self.store.len(),
                self.store.all_blogs().len()
            ),
            Screen::Detail(id) => format!(" BlogNest · Blog #{id} "),
        };
        HeaderInfo { title }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = if self.share.is_some() {
            "Enter/y: copy link  Esc: close"
        } else {
            match (self.screen, self.input_mode) {
                (_, InputMode::Search) => "Type to search  Enter: done  Esc: clear  Ctrl+n/p: navigate",
                (_, InputMode::Compose) => "Type your comment  Enter: post  Esc: cancel",
                (_, InputMode::EditComment(_)) => "Edit the comment  Enter: save  Esc: cancel",
                (Screen::List, InputMode::Normal) => {
                    "j/k: navigate  Enter: open  l: like  /: search  s: share  r: reload  q: quit"
                }
                (Screen::Detail(_), InputMode::Normal) => {
                    "j/k: comments  l: like  c: comment  e: edit  d: delete  s: share  Esc: back  q: quit"
                }
            }
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }

    /// The search box is shown while typing, and on the list while a query is active.
    fn compute_search_bar(&self) -> Option<SearchBarInfo> {
        let visible = self.input_mode == InputMode::Search
            || (self.screen == Screen::List && !self.search_query.is_empty());

        visible.then(|| SearchBarInfo {
            query: self.search_query.clone(),
            is_focused: self.input_mode == InputMode::Search,
            is_pending: self.search_debouncer.is_pending(),
        })
    }

    /// Rows left for list items after header (2), borders (2), column
    /// headers (1), status (1), footer (1) and the search bar (3) if shown.
    fn calculate_available_rows(&self, total_rows: usize) -> usize {
        let chrome = if self.compute_search_bar().is_some() { 10 } else { 7 };
        total_rows.saturating_sub(chrome)
    }

    fn cursor_len(&self) -> usize {
        match self.screen {
            Screen::List => self.store.len(),
            Screen::Detail(_) => self.current_blog().map_or(0, Blog::comment_count),
        }
    }

    fn cursor_mut(&mut self) -> &mut usize {
        match self.screen {
            Screen::List => &mut self.selected_index,
            Screen::Detail(_) => &mut self.comment_index,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> AppState {
        let blogs = (1..=10)
            .map(|id| Blog::new(id, format!("Post {id}"), "x".repeat(150)))
            .collect();
        AppState::new(blogs, Theme::default())
    }

    #[test]
    fn selection_wraps_both_ways() {
        let mut state = state();
        state.move_selection_up();
        assert_eq!(state.selected_index, 9);
        state.move_selection_down();
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn filter_clamps_selection() {
        let mut state = state();
        state.selected_index = 9;
        state.apply_filter("Post 1");
        assert_eq!(state.store.len(), 2);
        assert_eq!(state.selected_index, 1);
    }

    #[test]
    fn list_window_follows_selection() {
        let mut state = state();
        state.selected_index = 9;
        let vm = state.compute_viewmodel(12, 120);
        let ScreenBody::List(list) = vm.body else {
            panic!("expected list body");
        };
        assert_eq!(list.items.len(), 5);
        assert_eq!(list.items.last().map(|item| item.id), Some(10));
        assert!(list.items[list.selected_index].is_selected);
    }

    #[test]
    fn excerpt_is_cut_at_configured_length() {
        let state = state();
        let vm = state.compute_viewmodel(24, 400);
        let ScreenBody::List(list) = vm.body else {
            panic!("expected list body");
        };
        assert_eq!(list.items[0].excerpt, format!("{}...", "x".repeat(100)));
    }

    #[test]
    fn detail_for_hidden_blog_is_not_found() {
        let mut state = state();
        state.screen = Screen::Detail(3);
        state.apply_filter("Post 1");

        let vm = state.compute_viewmodel(24, 80);
        assert!(matches!(vm.body, ScreenBody::Empty(ref empty) if empty.message == "Blog not found"));
    }

    #[test]
    fn empty_store_shows_hint() {
        let state = AppState::new(vec![], Theme::default());
        let vm = state.compute_viewmodel(24, 80);
        assert!(matches!(vm.body, ScreenBody::Empty(ref empty) if empty.message == "No blogs loaded"));
    }

    #[test]
    fn title_highlights_follow_active_query() {
        let mut state = state();
        state.apply_filter("post 7");
        let vm = state.compute_viewmodel(24, 120);
        let ScreenBody::List(list) = vm.body else {
            panic!("expected list body");
        };
        assert_eq!(list.items[0].highlight_ranges, vec![(0, 6)]);
    }
}
