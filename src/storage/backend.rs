//! Seed source abstraction.
//!
//! This module defines the [`BlogSource`] trait so the worker can load blogs
//! without caring whether they come from a user file or the embedded sample.

use crate::domain::error::Result;
use crate::domain::Blog;

/// A read-only origin of the initial blog collection.
///
/// # Implementations
///
/// - [`JsonBlogSource`](super::JsonBlogSource): JSON file on disk
/// - [`BuiltinBlogSource`](super::BuiltinBlogSource): embedded sample posts
///
/// # Examples
///
/// ```
/// use blognest::storage::{BlogSource, BuiltinBlogSource};
///
/// let blogs = BuiltinBlogSource.load()?;
/// assert!(!blogs.is_empty());
/// # Ok::<(), blognest::BlognestError>(())
/// ```
pub trait BlogSource: Send {
    /// Loads and validates the full collection, in display order.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be read, cannot be parsed, or
    /// contains invalid records (duplicate ids, empty titles).
    fn load(&self) -> Result<Vec<Blog>>;

    /// Short human-readable description used in logs and status messages.
    fn describe(&self) -> String;
}
