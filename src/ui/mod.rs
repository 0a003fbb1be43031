//! Terminal user interface.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → ANSI Output
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: Display-ready data for one frame
//! - [`renderer`]: Top-level rendering entry point
//! - [`components`]: Header, search box, blog table, detail page, share dialog
//! - [`helpers`]: Text shaping, highlighting, cursor positioning
//! - [`clipboard`]: OSC 52 clipboard sequences
//! - [`theme`]: Color schemes and ANSI escape sequences

pub mod clipboard;
pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{
    DetailView, DisplayItem, EmptyState, FooterInfo, HeaderInfo, ListView, ScreenBody, SearchBarInfo,
    ShareModalInfo, UIViewModel,
};
