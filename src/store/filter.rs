//! Case-insensitive search matching for the displayed blog list.
//!
//! Matching is plain substring containment on lowercased text: no
//! tokenization, no fuzzy scoring, no ranking. A blog matches when its title
//! or its body contains the query.

use crate::domain::Blog;

/// A search query folded to lowercase once, ready to test many blogs.
///
/// # Examples
///
/// ```
/// use blognest::domain::Blog;
/// use blognest::store::SearchQuery;
///
/// let query = SearchQuery::new("HELLO");
/// assert!(query.matches(&Blog::new(1, "Hello World", "")));
/// assert!(!query.matches(&Blog::new(2, "Goodbye", "")));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchQuery {
    folded: String,
}

impl SearchQuery {
    #[must_use]
    pub fn new(raw: &str) -> Self {
        Self {
            folded: raw.to_lowercase(),
        }
    }

    /// An empty query matches every blog.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.folded.is_empty()
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.folded
    }

    /// Returns `true` if the title or the body contains the query, ignoring case.
    #[must_use]
    pub fn matches(&self, blog: &Blog) -> bool {
        if self.is_empty() {
            return true;
        }
        blog.title.to_lowercase().contains(&self.folded)
            || blog.body.to_lowercase().contains(&self.folded)
    }

    /// Byte ranges of every non-overlapping occurrence of the query in `text`.
    ///
    /// Ranges index into `text` itself. Texts whose lowercase form changes
    /// length (e.g. `İ`) yield no ranges rather than misaligned ones.
    #[must_use]
    pub fn highlight_ranges(&self, text: &str) -> Vec<(usize, usize)> {
        if self.is_empty() {
            return vec![];
        }

        let lowered = text.to_lowercase();
        if lowered.len() != text.len() {
            return vec![];
        }

        lowered
            .match_indices(self.folded.as_str())
            .map(|(start, matched)| (start, start + matched.len()))
            .filter(|&(start, end)| text.is_char_boundary(start) && text.is_char_boundary(end))
            .collect()
    }
}
