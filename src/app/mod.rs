//! Application layer coordinating state, events, and actions.
//!
//! This module sits between the plugin runtime (main.rs) and the store,
//! storage, and worker layers. It owns the [`BlogStore`](crate::store::BlogStore)
//! for the lifetime of the plugin and routes user input into store operations.
//!
//! # Architecture
//!
//! ```text
//! Keys / Timers → Events → handle_event → Store operations → Actions → Side Effects
//!                               ↑                                  ↓
//!                               └──────── Worker Responses ────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`debounce`]: Cancellable delayed delivery for search queries
//! - [`handler`]: Event processing and state transitions
//! - [`modes`]: Screen and input mode types
//! - [`state`]: Central application state and view model computation
//!
//! # Example
//!
//! ```rust
//! use blognest::app::{handle_event, AppState, Event};
//! use blognest::domain::Blog;
//! use blognest::ui::Theme;
//!
//! let mut state = AppState::new(vec![Blog::new(1, "Cats", "about cats")], Theme::default());
//! let (render, _actions) = handle_event(&mut state, &Event::LikeSelected)?;
//! assert!(render);
//! assert_eq!(state.store.get(1).map(|b| b.likes), Some(1));
//! # Ok::<(), blognest::BlognestError>(())
//! ```

pub mod actions;
pub mod debounce;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use debounce::{DebounceTicket, Debouncer};
pub use handler::{handle_event, Event};
pub use modes::{InputMode, Screen};
pub use state::{AppState, DisplaySettings, ShareModal, StatusMessage};
