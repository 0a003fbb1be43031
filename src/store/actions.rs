//! Reducer actions for the blog store.
//!
//! Each variant corresponds to one store operation. Actions are plain data so
//! they can be built by the event handler, logged, and replayed in tests.

use crate::domain::{Blog, BlogId};

/// A single mutation request against [`BlogStore`](super::BlogStore).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlogAction {
    /// Replace both the canonical and displayed lists.
    SetBlogs(Vec<Blog>),

    /// Increment the likes of a displayed blog.
    LikeBlog(BlogId),

    /// Increment the views of a displayed blog.
    ViewBlog(BlogId),

    /// Append a comment; the text is expected to be trimmed and non-empty.
    AddComment {
        id: BlogId,
        comment: String,
    },

    /// Replace the comment at a zero-based index.
    EditComment {
        id: BlogId,
        index: usize,
        comment: String,
    },

    /// Remove the comment at a zero-based index.
    DeleteComment {
        id: BlogId,
        index: usize,
    },

    /// Recompute the displayed list from a search query.
    FilterBlogs(String),
}
