//! Screen and input mode state types for the application.
//!
//! These enums decide which keybindings are active and what the renderer
//! draws. [`Screen`] is the route (list or one blog's detail page);
//! [`InputMode`] says where typed characters go.
//!
//! # State Machine
//!
//! ```text
//!            Enter                     c / e
//!   List ───────────► Detail(id) ───────────► Compose / EditComment(i)
//!    │ ▲    Esc / h        │                         │ Enter / Esc
//!  / │ │ Enter / Esc       └─────────◄───────────────┘
//!    ▼ │
//!   Search
//! ```
//!
//! # Example
//!
//! ```rust
//! use blognest::app::modes::{InputMode, Screen};
//!
//! let screen = Screen::Detail(3);
//! let input_mode = InputMode::EditComment(0);
//! assert!(input_mode.is_text_entry());
//! assert_eq!(screen.blog_id(), Some(3));
//! ```

use crate::domain::BlogId;

/// Which page is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// The (possibly filtered) list of blog cards.
    List,

    /// The detail page of one blog, with its comments.
    ///
    /// Shows "Blog not found" if the id is not in the displayed list.
    Detail(BlogId),
}

impl Screen {
    /// The blog shown on a detail page, if any.
    #[must_use]
    pub const fn blog_id(self) -> Option<BlogId> {
        match self {
            Self::List => None,
            Self::Detail(id) => Some(id),
        }
    }
}

/// Where keyboard input goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Navigation and single-key commands.
    Normal,

    /// Typing into the search box on the list screen.
    ///
    /// Each keystroke schedules a debounced filter.
    Search,

    /// Typing a new comment on the detail screen.
    Compose,

    /// Rewriting the comment at the given index on the detail screen.
    EditComment(usize),
}

impl InputMode {
    /// Returns `true` for modes that capture printable characters as text.
    #[must_use]
    pub const fn is_text_entry(self) -> bool {
        !matches!(self, Self::Normal)
    }
}
