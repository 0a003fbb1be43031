//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler mutates [`AppState`](super::AppState) directly and returns
//! a `Vec<Action>` for everything it cannot do itself: talking to the worker,
//! arming timers, touching the clipboard, hiding the pane.
//!
//! # Example
//!
//! ```rust
//! use blognest::app::Action;
//! use blognest::worker::WorkerMessage;
//! use std::time::Duration;
//!
//! let actions = vec![
//!     Action::PostToWorker(WorkerMessage::load_blogs(None)),
//!     Action::ScheduleFilter { delay: Duration::from_millis(300) },
//! ];
//! assert_eq!(actions.len(), 2);
//! ```

use crate::worker::WorkerMessage;
use std::time::Duration;

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Closes the focused floating pane, hiding the plugin UI.
    CloseFocus,

    /// Posts a message to the background worker thread.
    PostToWorker(WorkerMessage),

    /// Arms a one-shot timer for a debounced search.
    ///
    /// When it elapses the runtime sends [`Event::FilterTimerElapsed`](super::Event::FilterTimerElapsed).
    /// Timers share one delay, so they elapse in the order they were armed.
    ScheduleFilter {
        /// Time to wait before the filter may run.
        delay: Duration,
    },

    /// Places text on the system clipboard.
    CopyToClipboard {
        /// Text to copy, typically a share link.
        text: String,
    },
}
