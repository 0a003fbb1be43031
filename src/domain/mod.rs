//! Domain layer for the blognest plugin.
//!
//! Holds the blog entity model and the crate-wide error type. Nothing in here
//! depends on Zellij APIs, storage, or rendering.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`blog`]: Blog entity and display helpers
//!
//! # Examples
//!
//! ```
//! use blognest::domain::{Blog, Result};
//!
//! fn first_post() -> Result<Blog> {
//!     Ok(Blog::new(1, "Hello", "First post"))
//! }
//! ```

pub mod blog;
pub mod error;

pub use blog::{Blog, BlogId};
pub use error::{BlognestError, Result};
