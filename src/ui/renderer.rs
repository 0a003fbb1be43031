//! Top-level rendering coordinator.
//!
//! Rendering is two steps: compute a [`UIViewModel`](crate::ui::viewmodel::UIViewModel) from [`AppState`], then
//! hand it to the component layer, which prints ANSI-styled output to stdout.
//! Neither step touches state.

use crate::app::AppState;
use crate::ui::components;

/// Renders the plugin UI to stdout.
///
/// Does not clear the screen; Zellij hands the plugin a fresh frame.
///
/// # Example
///
/// ```rust
/// use blognest::app::AppState;
/// use blognest::ui::{render, Theme};
///
/// let state = AppState::new(vec![], Theme::default());
/// render(&state, 24, 80);
/// ```
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);
    components::render_layout(&viewmodel, &state.theme, cols, rows);
}
