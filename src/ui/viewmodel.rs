//! View model types representing renderable UI state.
//!
//! View models are computed by `AppState::compute_viewmodel()` and consumed by
//! the renderer. They hold display-ready data only: truncated text, counters,
//! highlight ranges, selection flags.
//!
//! # Example
//!
//! ```rust
//! use blognest::ui::viewmodel::{FooterInfo, HeaderInfo, ListView, ScreenBody, UIViewModel};
//!
//! let vm = UIViewModel {
//!     header: HeaderInfo { title: " BlogNest ".to_string() },
//!     footer: FooterInfo { keybindings: "q: quit".to_string() },
//!     body: ScreenBody::List(ListView { items: vec![], selected_index: 0 }),
//!     search_bar: None,
//!     share_modal: None,
//!     status: None,
//! };
//! assert!(vm.share_modal.is_none());
//! ```

use crate::domain::BlogId;

/// Complete UI view model for rendering.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    pub header: HeaderInfo,
    pub footer: FooterInfo,

    /// Main content area for the current screen.
    pub body: ScreenBody,

    /// Search box, when typing or while a query is active on the list.
    pub search_bar: Option<SearchBarInfo>,

    /// Share dialog drawn over the body.
    pub share_modal: Option<ShareModalInfo>,

    /// Status line text, already prefixed with its time.
    pub status: Option<String>,
}

/// What fills the space between header and footer.
#[derive(Debug, Clone)]
pub enum ScreenBody {
    List(ListView),
    Detail(DetailView),
    Empty(EmptyState),
}

/// Visible window of the blog list.
#[derive(Debug, Clone)]
pub struct ListView {
    pub items: Vec<DisplayItem>,

    /// Index of the selected row within `items`.
    pub selected_index: usize,
}

/// One blog card rendered as a table row.
#[derive(Debug, Clone)]
pub struct DisplayItem {
    pub id: BlogId,
    pub title: String,
    pub excerpt: String,
    pub likes: u64,
    pub views: u64,
    pub comment_count: usize,
    pub is_selected: bool,

    /// Character ranges of the title matching the active query.
    ///
    /// Each tuple is `(start, end)` in character indices, end exclusive.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// The detail page of one blog.
#[derive(Debug, Clone)]
pub struct DetailView {
    pub title: String,
    pub image_url: String,

    /// Body text wrapped to the terminal width.
    pub body_lines: Vec<String>,

    pub likes: u64,
    pub views: u64,
    pub comments: Vec<CommentItem>,

    /// Comment input box while composing or editing.
    pub input: Option<InputBoxInfo>,
}

/// A comment line on the detail page.
#[derive(Debug, Clone)]
pub struct CommentItem {
    pub text: String,
    pub is_selected: bool,

    /// This comment is the one being rewritten in the input box.
    pub is_editing: bool,
}

/// Text input box for comment drafts.
#[derive(Debug, Clone)]
pub struct InputBoxInfo {
    pub label: String,
    pub text: String,
}

/// Header display information.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    pub title: String,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding help text for the current mode.
    pub keybindings: String,
}

/// Empty state message display information.
///
/// Shown when nothing is loaded, nothing matches, or a detail page has no blog.
#[derive(Debug, Clone)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

/// Search box display information.
#[derive(Debug, Clone)]
pub struct SearchBarInfo {
    pub query: String,

    /// Keystrokes currently go to the box.
    pub is_focused: bool,

    /// A typed query has not been applied yet.
    pub is_pending: bool,
}

/// Share dialog display information.
#[derive(Debug, Clone)]
pub struct ShareModalInfo {
    pub title: String,
    pub url: String,
}
