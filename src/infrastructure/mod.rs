//! Filesystem helpers for the Zellij plugin sandbox.
//!
//! Inside the sandbox the host filesystem is mounted under `/host`; paths from
//! the plugin configuration are rewritten onto that mount before use and
//! rewritten back before being shown.

pub mod paths;

pub use paths::{expand_tilde, get_data_dir, resolve_seed_path, strip_host_prefix};
