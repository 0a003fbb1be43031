//! Seed storage: where the initial blog collection comes from.
//!
//! The store is populated once at start from a [`BlogSource`]. Sources are
//! read-only; likes, views and comments live in memory for the lifetime of
//! the plugin and are never written back.
//!
//! # Modules
//!
//! - `backend`: Source trait abstraction
//! - `json`: JSON file source
//! - `builtin`: Sample collection embedded at compile time
//! - `models`: Seed record types separate from domain models

pub mod backend;
pub mod builtin;
pub mod json;
pub mod models;

pub use backend::BlogSource;
pub use builtin::BuiltinBlogSource;
pub use json::JsonBlogSource;
pub use models::{BlogRecord, SeedFile};
