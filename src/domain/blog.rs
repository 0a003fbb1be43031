//! Blog entity model.
//!
//! A [`Blog`] is passive data: the store is the only component that changes
//! its counters and comments. The helpers here are pure formatting used by the
//! presentation layer.

use serde::{Deserialize, Serialize};

/// Identifier of a blog post. Unique within a collection, never reassigned.
pub type BlogId = u64;

/// Suffix appended to truncated excerpts.
const ELLIPSIS: &str = "...";

/// A single blog post with its engagement counters and comments.
///
/// Serialized with camelCase keys (`imageUrl`) so seed files written for the
/// web front end load unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Blog {
    pub id: BlogId,
    pub title: String,
    pub body: String,
    pub image_url: String,
    pub likes: u64,
    pub views: u64,
    pub comments: Vec<String>,
}

impl Blog {
    /// Creates a blog with zeroed counters, no comments and no image.
    ///
    /// # Examples
    ///
    /// ```
    /// use blognest::domain::Blog;
    ///
    /// let blog = Blog::new(7, "Cats", "about cats");
    /// assert_eq!(blog.likes, 0);
    /// assert!(blog.comments.is_empty());
    /// ```
    #[must_use]
    pub fn new(id: BlogId, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            body: body.into(),
            image_url: String::new(),
            likes: 0,
            views: 0,
            comments: Vec::new(),
        }
    }

    /// Sets the display image reference.
    #[must_use]
    pub fn with_image(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = image_url.into();
        self
    }

    /// Returns the body cut to `max_chars` characters, followed by `...` when
    /// anything was cut.
    ///
    /// Counts characters, not bytes, so multi-byte text is never split.
    ///
    /// # Examples
    ///
    /// ```
    /// use blognest::domain::Blog;
    ///
    /// let blog = Blog::new(1, "t", "abcdef");
    /// assert_eq!(blog.excerpt(3), "abc...");
    /// assert_eq!(blog.excerpt(6), "abcdef");
    /// ```
    #[must_use]
    pub fn excerpt(&self, max_chars: usize) -> String {
        match self.body.char_indices().nth(max_chars) {
            Some((cut, _)) => format!("{}{ELLIPSIS}", &self.body[..cut]),
            None => self.body.clone(),
        }
    }

    /// Builds the shareable link for this post under `base_url`.
    ///
    /// # Examples
    ///
    /// ```
    /// use blognest::domain::Blog;
    ///
    /// let blog = Blog::new(42, "t", "b");
    /// assert_eq!(blog.share_url("https://example.com/"), "https://example.com/blog/42");
    /// ```
    #[must_use]
    pub fn share_url(&self, base_url: &str) -> String {
        format!("{}/blog/{}", base_url.trim_end_matches('/'), self.id)
    }

    /// Number of comments currently attached.
    #[must_use]
    pub fn comment_count(&self) -> usize {
        self.comments.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn excerpt_respects_char_boundaries() {
        let blog = Blog::new(1, "t", "héllo wörld");
        assert_eq!(blog.excerpt(2), "hé...");
        assert_eq!(blog.excerpt(100), "héllo wörld");
    }

    #[test]
    fn excerpt_of_empty_body_is_empty() {
        assert_eq!(Blog::new(1, "t", "").excerpt(0), "");
    }

    #[test]
    fn serializes_image_url_in_camel_case() {
        let blog = Blog::new(3, "t", "b").with_image("cat.png");
        let json = serde_json::to_value(&blog).unwrap();
        assert_eq!(json["imageUrl"], "cat.png");
        assert!(json.get("image_url").is_none());
    }
}
