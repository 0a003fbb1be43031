//! Zellij plugin wrapper and entry point.
//!
//! Thin integration layer between the BlogNest library and Zellij: it turns
//! Zellij events into [`Event`]s, runs them through [`handle_event`], and
//! carries out the returned [`Action`]s.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────┐
//! │   Zellij Main Thread    │
//! │  ┌──────────────────┐   │
//! │  │  State (plugin)  │   │  ← UI state, event handling
//! │  └──────────────────┘   │
//! │          │ IPC          │
//! │          ▼              │
//! │  ┌──────────────────┐   │
//! │  │  BlognestWorker  │   │  ← Seed file loading
//! │  └──────────────────┘   │
//! └─────────────────────────┘
//! ```
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Permissions granted**: Ask the worker for the seed collection
//! 3. **Update**: Map keys, timers and worker replies to library events
//! 4. **Render**: Flush any pending clipboard payload, then draw
//!
//! # Keybindings
//!
//! List:
//! - `j`/`Down`, `k`/`Up`: Move selection
//! - `Enter`/`o`: Open blog (counts a view)
//! - `l`: Like, `s`: Share, `/`: Search, `r`: Reload, `q`: Close
//! - `Esc`: Clear active search
//!
//! Detail:
//! - `j`/`k`: Select comment
//! - `l`: Like, `c`: Comment, `e`: Edit comment, `d`: Delete comment, `s`: Share
//! - `Esc`/`h`: Back to list
//!
//! Text entry (search box, comment box):
//! - Characters and `Backspace` edit, `Enter` confirms, `Esc` cancels
//! - `Ctrl+n`/`Ctrl+p`: Move list selection while searching
//!
//! Share dialog:
//! - `Enter`/`y`: Copy link, `Esc`/`n`: Close

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;
use zellij_tile::shim::post_message_to;

use blognest::app::AppState;
use blognest::ui::clipboard::osc52_sequence;
use blognest::worker::{BlognestWorker, WorkerMessage, WorkerResponse};
use blognest::{handle_event, Action, Config, Event, InputMode, Screen};

register_plugin!(State);
register_worker!(BlognestWorker, blognest_worker, BLOGNEST_WORKER);

struct State {
    app: AppState,

    /// Name of the worker as registered above.
    worker_name: String,

    /// Text to hand to the terminal clipboard on the next render.
    pending_clipboard: Option<String>,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: blognest::initialize(&Config::default()),
            worker_name: "blognest".to_string(),
            pending_clipboard: None,
        }
    }
}

impl ZellijPlugin for State {
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        blognest::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(blogs_file = ?config.blogs_file, "parsed configuration");
        self.app = blognest::initialize(&config);

        request_permission(&[
            PermissionType::ReadApplicationState,
            PermissionType::ChangeApplicationState,
            PermissionType::FullHdAccess,
        ]);

        subscribe(&[
            EventType::Key,
            EventType::Timer,
            EventType::CustomMessage,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span = tracing::debug_span!("plugin_update_event", event_type = %event_name);
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::Timer(_elapsed) => Event::FilterTimerElapsed,
            zellij_tile::prelude::Event::CustomMessage(message, payload) => {
                match self.map_custom_message_event(&message, &payload) {
                    Some(event) => event,
                    None => return false,
                }
            }
            zellij_tile::prelude::Event::PermissionRequestResult(permissions) => {
                self.handle_permission_result(permissions);
                return false;
            }
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(action_count = actions.len(), should_render, "event handled");
                for action in actions {
                    self.execute_action(action);
                }
                should_render
            }
            Err(e) => {
                tracing::warn!(error = %e, "error handling event");
                false
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        if let Some(text) = self.pending_clipboard.take() {
            print!("{}", osc52_sequence(&text));
        }
        blognest::ui::render(&self.app, rows, cols);
    }
}

impl State {
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::Timer(_) => "Timer".to_string(),
            zellij_tile::prelude::Event::CustomMessage(msg, _) => format!("CustomMessage({msg})"),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => "PermissionRequestResult".to_string(),
            _ => "Other".to_string(),
        }
    }

    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::trace!(bare_key = ?key.bare_key, "key event");

        if self.app.share.is_some() {
            return match key.bare_key {
                BareKey::Enter | BareKey::Char('y') => Some(Event::CopyShareLink),
                BareKey::Esc | BareKey::Char('n') | BareKey::Char('q') => Some(Event::CloseShare),
                _ => None,
            };
        }

        let ctrl = key.has_modifiers(&[KeyModifier::Ctrl]);

        if self.app.input_mode.is_text_entry() {
            return match key.bare_key {
                BareKey::Char('n') if ctrl && self.app.input_mode == InputMode::Search => Some(Event::KeyDown),
                BareKey::Char('p') if ctrl && self.app.input_mode == InputMode::Search => Some(Event::KeyUp),
                BareKey::Char(_) if ctrl => None,
                BareKey::Char(c) => Some(Event::Char(c)),
                BareKey::Backspace => Some(Event::Backspace),
                BareKey::Enter => Some(Event::Submit),
                BareKey::Esc => Some(Event::Escape),
                _ => None,
            };
        }

        Some(match (self.app.screen, key.bare_key) {
            (_, BareKey::Down | BareKey::Char('j')) => Event::KeyDown,
            (_, BareKey::Up | BareKey::Char('k')) => Event::KeyUp,
            (_, BareKey::Char('n')) if ctrl => Event::KeyDown,
            (_, BareKey::Char('p')) if ctrl => Event::KeyUp,
            (_, BareKey::Char('q')) => Event::CloseFocus,
            (_, BareKey::Char('l')) => Event::LikeSelected,
            (_, BareKey::Char('s')) => Event::OpenShare,
            (_, BareKey::Esc) => Event::Escape,
            (Screen::List, BareKey::Enter | BareKey::Char('o')) => Event::OpenSelected,
            (Screen::List, BareKey::Char('/')) => Event::SearchMode,
            (Screen::List, BareKey::Char('r')) => Event::Reload,
            (Screen::Detail(_), BareKey::Char('h') | BareKey::Left | BareKey::Backspace) => Event::Back,
            (Screen::Detail(_), BareKey::Char('c')) => Event::ComposeComment,
            (Screen::Detail(_), BareKey::Char('e')) => Event::EditSelectedComment,
            (Screen::Detail(_), BareKey::Char('d')) => Event::DeleteSelectedComment,
            _ => return None,
        })
    }

    fn handle_permission_result(&self, permissions: PermissionStatus) {
        match permissions {
            PermissionStatus::Granted => {
                tracing::debug!("permissions granted - loading blogs");
                self.post_worker_message(&WorkerMessage::load_blogs(self.app.settings.blogs_file.clone()));
            }
            PermissionStatus::Denied => {
                tracing::warn!("permissions denied - plugin functionality limited");
            }
        }
    }

    fn map_custom_message_event(&self, message: &str, payload: &str) -> Option<Event> {
        if message != self.worker_name {
            tracing::debug!(message_name = %message, "ignoring custom message with unknown name");
            return None;
        }

        match serde_json::from_str::<WorkerResponse>(payload) {
            Ok(response) => Some(Event::WorkerResponse(response)),
            Err(e) => {
                tracing::warn!(error = %e, "failed to deserialize worker response");
                None
            }
        }
    }

    fn post_worker_message(&self, message: &WorkerMessage) {
        match serde_json::to_string(message) {
            Ok(payload) => {
                tracing::debug!(payload_len = payload.len(), "posting message to worker");
                post_message_to(PluginMessage {
                    worker_name: Some(self.worker_name.clone()),
                    name: self.worker_name.clone(),
                    payload,
                });
            }
            Err(e) => tracing::warn!(error = %e, "failed to serialize worker message"),
        }
    }

    #[tracing::instrument(level = "debug", skip(self))]
    fn execute_action(&mut self, action: Action) {
        match action {
            Action::CloseFocus => hide_self(),
            Action::PostToWorker(message) => self.post_worker_message(&message),
            Action::ScheduleFilter { delay } => set_timeout(delay.as_secs_f64()),
            Action::CopyToClipboard { text } => {
                tracing::debug!(text = %text, "queueing clipboard payload");
                self.pending_clipboard = Some(text);
            }
        }
    }
}
