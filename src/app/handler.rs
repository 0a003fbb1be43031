//! Event handling and state transition logic.
//!
//! [`handle_event`] is the single place where input turns into store
//! operations. It mutates [`AppState`] in place and returns a render flag plus
//! the side effects the plugin runtime must perform.
//!
//! # Event Types
//!
//! - **Navigation**: `KeyDown`, `KeyUp`, `OpenSelected`, `Back`
//! - **Engagement**: `LikeSelected`, `ComposeComment`, `EditSelectedComment`, `DeleteSelectedComment`
//! - **Text entry**: `Char`, `Backspace`, `Submit`, `Escape`
//! - **Search**: `SearchMode`, `FilterTimerElapsed`
//! - **Sharing**: `OpenShare`, `CopyShareLink`, `CloseShare`
//! - **Loading**: `Reload`, `WorkerResponse`
//!
//! # Example
//!
//! ```rust
//! use blognest::app::{handle_event, AppState, Event, Screen};
//! use blognest::domain::Blog;
//! use blognest::ui::Theme;
//!
//! let mut state = AppState::new(vec![Blog::new(1, "Cats", "about cats")], Theme::default());
//! handle_event(&mut state, &Event::OpenSelected)?;
//! assert_eq!(state.screen, Screen::Detail(1));
//! assert_eq!(state.store.get(1).map(|b| b.views), Some(1));
//! # Ok::<(), blognest::BlognestError>(())
//! ```

use super::modes::{InputMode, Screen};
use super::state::ShareModal;
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::worker::{WorkerMessage, WorkerResponse};

/// Status shown after a share link is copied.
pub const COPIED_NOTICE: &str = "Blog URL copied to clipboard!";

/// Events triggered by user input, timers, or worker responses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Moves the cursor down (blogs on the list, comments on a detail page).
    KeyDown,
    /// Moves the cursor up.
    KeyUp,
    /// Closes the floating pane and hides the plugin UI.
    CloseFocus,

    /// Counts a view on the selected blog and opens its detail page.
    OpenSelected,
    /// Leaves the detail page for the list.
    Back,
    /// Likes the selected blog, or the blog on the detail page.
    LikeSelected,

    /// Focuses the search box.
    SearchMode,
    /// Types a character into whichever box has focus.
    Char(char),
    /// Deletes the last character of whichever box has focus.
    Backspace,
    /// Confirms the focused box (applies search, posts or saves a comment).
    Submit,
    /// Backs out of the innermost state: modal, text box, detail page, active query.
    Escape,

    /// A debounce timer armed by [`Action::ScheduleFilter`] elapsed.
    FilterTimerElapsed,

    /// Opens the comment box on the detail page.
    ComposeComment,
    /// Opens the selected comment for editing.
    EditSelectedComment,
    /// Deletes the selected comment.
    DeleteSelectedComment,

    /// Opens the share dialog for the focused blog.
    OpenShare,
    /// Copies the share link and closes the dialog.
    CopyShareLink,
    /// Closes the share dialog without copying.
    CloseShare,

    /// Asks the worker to read the seed collection again.
    Reload,

    /// Wraps a response from the background worker thread.
    WorkerResponse(WorkerResponse),
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// Returns `(should_render, actions)`. Store operations that hit an id outside
/// the displayed list change nothing and report no render.
///
/// # Errors
///
/// Currently infallible; the signature leaves room for handlers that fail.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::KeyDown => {
            state.move_selection_down();
            Ok((true, vec![]))
        }
        Event::KeyUp => {
            state.move_selection_up();
            Ok((true, vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::OpenSelected => Ok((open_selected(state), vec![])),
        Event::Back => Ok((back_to_list(state), vec![])),
        Event::LikeSelected => {
            let Some(id) = state.focused_blog().map(|blog| blog.id) else {
                return Ok((false, vec![]));
            };
            Ok((state.store.like_blog(id), vec![]))
        }
        Event::SearchMode => {
            if state.screen != Screen::List {
                return Ok((false, vec![]));
            }
            tracing::debug!(query = %state.search_query, "entering search mode");
            state.input_mode = InputMode::Search;
            Ok((true, vec![]))
        }
        Event::Char(c) => match state.input_mode {
            InputMode::Normal => Ok((false, vec![])),
            InputMode::Search => {
                state.search_query.push(*c);
                Ok((true, schedule_filter(state)))
            }
            InputMode::Compose | InputMode::EditComment(_) => {
                state.draft.push(*c);
                Ok((true, vec![]))
            }
        },
        Event::Backspace => match state.input_mode {
            InputMode::Normal => Ok((false, vec![])),
            InputMode::Search => {
                if state.search_query.pop().is_none() {
                    return Ok((false, vec![]));
                }
                Ok((true, schedule_filter(state)))
            }
            InputMode::Compose | InputMode::EditComment(_) => Ok((state.draft.pop().is_some(), vec![])),
        },
        Event::Submit => Ok((submit(state), vec![])),
        Event::Escape => Ok((escape(state), vec![])),
        Event::FilterTimerElapsed => {
            let Some(ticket) = state.armed_timers.pop_front() else {
                tracing::debug!("timer elapsed with nothing armed");
                return Ok((false, vec![]));
            };
            match state.search_debouncer.fire(ticket) {
                Some(query) => {
                    tracing::debug!(query = %query, "debounced filter firing");
                    state.apply_filter(&query);
                    Ok((true, vec![]))
                }
                None => Ok((false, vec![])),
            }
        }
        Event::ComposeComment => {
            if state.input_mode != InputMode::Normal || state.current_blog().is_none() {
                return Ok((false, vec![]));
            }
            state.draft.clear();
            state.input_mode = InputMode::Compose;
            Ok((true, vec![]))
        }
        Event::EditSelectedComment => {
            if state.input_mode != InputMode::Normal {
                return Ok((false, vec![]));
            }
            let index = state.comment_index;
            let Some(existing) = state.current_blog().and_then(|blog| blog.comments.get(index)).cloned() else {
                return Ok((false, vec![]));
            };
            state.draft = existing;
            state.input_mode = InputMode::EditComment(index);
            Ok((true, vec![]))
        }
        Event::DeleteSelectedComment => {
            let Some(id) = state.current_blog().map(|blog| blog.id) else {
                return Ok((false, vec![]));
            };
            if state.input_mode != InputMode::Normal {
                return Ok((false, vec![]));
            }
            let deleted = state.store.delete_comment(id, state.comment_index);
            state.clamp_selection();
            Ok((deleted, vec![]))
        }
        Event::OpenShare => {
            let Some(blog) = state.focused_blog() else {
                return Ok((false, vec![]));
            };
            let share = ShareModal {
                blog_id: blog.id,
                title: blog.title.clone(),
                url: blog.share_url(&state.settings.base_url),
            };
            tracing::debug!(blog_id = share.blog_id, url = %share.url, "opening share dialog");
            state.share = Some(share);
            Ok((true, vec![]))
        }
        Event::CopyShareLink => {
            let Some(share) = state.share.take() else {
                return Ok((false, vec![]));
            };
            state.notify(COPIED_NOTICE);
            Ok((true, vec![Action::CopyToClipboard { text: share.url }]))
        }
        Event::CloseShare => Ok((state.share.take().is_some(), vec![])),
        Event::Reload => {
            state.notify("Reloading blogs...");
            Ok((
                true,
                vec![Action::PostToWorker(WorkerMessage::load_blogs(state.settings.blogs_file.clone()))],
            ))
        }
        Event::WorkerResponse(response) => Ok((handle_worker_response(state, response), vec![])),
    }
}

/// Schedules the current search text and arms a timer for it.
fn schedule_filter(state: &mut AppState) -> Vec<Action> {
    let ticket = state.search_debouncer.schedule(state.search_query.clone());
    state.armed_timers.push_back(ticket);
    tracing::trace!(query = %state.search_query, "filter scheduled");
    vec![Action::ScheduleFilter {
        delay: state.search_debouncer.delay(),
    }]
}

fn open_selected(state: &mut AppState) -> bool {
    if state.screen != Screen::List || state.input_mode != InputMode::Normal {
        return false;
    }
    let Some(id) = state.selected_blog().map(|blog| blog.id) else {
        return false;
    };

    state.store.view_blog(id);
    state.screen = Screen::Detail(id);
    state.comment_index = 0;
    tracing::debug!(blog_id = id, "opened blog");
    true
}

fn back_to_list(state: &mut AppState) -> bool {
    let Screen::Detail(id) = state.screen else {
        return false;
    };

    state.screen = Screen::List;
    state.input_mode = InputMode::Normal;
    state.draft.clear();
    state.comment_index = 0;
    if let Some(position) = state.store.position_of(id) {
        state.selected_index = position;
    }
    state.clamp_selection();
    true
}

fn submit(state: &mut AppState) -> bool {
    if state.share.is_some() {
        return false;
    }

    match state.input_mode {
        InputMode::Normal => open_selected(state),
        InputMode::Search => {
            if let Some(query) = state.search_debouncer.flush() {
                state.apply_filter(&query);
            }
            state.input_mode = InputMode::Normal;
            true
        }
        InputMode::Compose => {
            let Some(id) = state.current_blog().map(|blog| blog.id) else {
                return false;
            };
            let text = state.draft.trim().to_string();
            if text.is_empty() {
                return false;
            }
            if state.store.add_comment(id, text) {
                state.comment_index = state.current_blog().map_or(0, |blog| blog.comment_count().saturating_sub(1));
            }
            state.draft.clear();
            state.input_mode = InputMode::Normal;
            true
        }
        InputMode::EditComment(index) => {
            let Some(id) = state.current_blog().map(|blog| blog.id) else {
                return false;
            };
            let text = state.draft.trim().to_string();
            if text.is_empty() {
                return false;
            }
            state.store.edit_comment(id, index, text);
            state.draft.clear();
            state.input_mode = InputMode::Normal;
            true
        }
    }
}

fn escape(state: &mut AppState) -> bool {
    if state.share.take().is_some() {
        return true;
    }

    match state.input_mode {
        InputMode::Search => {
            tracing::debug!(query = %state.search_query, "clearing search");
            state.search_query.clear();
            state.search_debouncer.cancel();
            state.apply_filter("");
            state.input_mode = InputMode::Normal;
            true
        }
        InputMode::Compose | InputMode::EditComment(_) => {
            state.draft.clear();
            state.input_mode = InputMode::Normal;
            true
        }
        InputMode::Normal => match state.screen {
            Screen::Detail(_) => back_to_list(state),
            Screen::List if !state.search_query.is_empty() || !state.store.query().is_empty() => {
                state.search_query.clear();
                state.search_debouncer.cancel();
                state.apply_filter("");
                true
            }
            Screen::List => false,
        },
    }
}

fn handle_worker_response(state: &mut AppState, response: &WorkerResponse) -> bool {
    match response {
        WorkerResponse::BlogsLoaded { blogs, source } => {
            tracing::debug!(count = blogs.len(), source = %source, "blogs loaded");
            state.store.set_blogs(blogs.clone());
            state.search_query.clear();
            state.search_debouncer.cancel();
            if state.input_mode == InputMode::Search {
                state.input_mode = InputMode::Normal;
            }
            state.clamp_selection();
            state.notify(format!("Loaded {} blogs from {source}", blogs.len()));
            true
        }
        WorkerResponse::Error { message } => {
            tracing::error!(error = %message, "worker error");
            state.notify(format!("Failed to load blogs: {message}"));
            true
        }
    }
}
