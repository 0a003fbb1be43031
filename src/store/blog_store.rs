//! The blog store and its operations.
//!
//! All operations run synchronously to completion. Mutations that target an
//! id absent from the displayed list, or a comment index out of range, are
//! silent no-ops; each mutation reports whether anything changed so callers
//! can skip re-rendering.

use super::actions::BlogAction;
use super::filter::SearchQuery;
use crate::domain::{Blog, BlogId};
use std::collections::HashMap;

/// Canonical blog collection plus the displayed (possibly filtered) view.
#[derive(Debug, Clone, Default)]
pub struct BlogStore {
    /// `all_blogs`, in bulk-load order.
    entries: Vec<Blog>,

    /// First position of each id in `entries`.
    index: HashMap<BlogId, usize>,

    /// Positions into `entries` making up the displayed list, ascending.
    visible: Vec<usize>,

    /// Last query applied by `filter_blogs`, as typed.
    query: String,
}

impl BlogStore {
    /// Creates an empty store. Both lists are empty until `set_blogs`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces both `all_blogs` and the displayed list with `blogs`.
    ///
    /// Any active filter is dropped: afterwards the displayed list equals
    /// `blogs` exactly, in the same order. Duplicate ids stay in the list;
    /// lookups by id resolve to the first occurrence.
    pub fn set_blogs(&mut self, blogs: Vec<Blog>) {
        let _span = tracing::debug_span!("set_blogs", count = blogs.len()).entered();

        let mut index = HashMap::with_capacity(blogs.len());
        for (position, blog) in blogs.iter().enumerate() {
            if index.contains_key(&blog.id) {
                tracing::debug!(blog_id = blog.id, "duplicate blog id, keeping first occurrence");
                continue;
            }
            index.insert(blog.id, position);
        }

        self.visible = (0..blogs.len()).collect();
        self.entries = blogs;
        self.index = index;
        self.query.clear();
    }

    /// Increments `likes` by one on the displayed blog with `id`.
    pub fn like_blog(&mut self, id: BlogId) -> bool {
        self.with_displayed(id, "like_blog", |blog| {
            blog.likes = blog.likes.saturating_add(1);
            true
        })
    }

    /// Increments `views` by one on the displayed blog with `id`.
    pub fn view_blog(&mut self, id: BlogId) -> bool {
        self.with_displayed(id, "view_blog", |blog| {
            blog.views = blog.views.saturating_add(1);
            true
        })
    }

    /// Appends `text` to the comments of the displayed blog with `id`.
    ///
    /// The caller is responsible for trimming and rejecting empty text.
    pub fn add_comment(&mut self, id: BlogId, text: impl Into<String>) -> bool {
        let text = text.into();
        self.with_displayed(id, "add_comment", move |blog| {
            blog.comments.push(text);
            true
        })
    }

    /// Replaces the comment at `index` on the displayed blog with `id`.
    ///
    /// An out-of-range `index` leaves the comments untouched.
    pub fn edit_comment(&mut self, id: BlogId, index: usize, text: impl Into<String>) -> bool {
        let text = text.into();
        self.with_displayed(id, "edit_comment", move |blog| {
            let len = blog.comments.len();
            match blog.comments.get_mut(index) {
                Some(comment) => {
                    *comment = text;
                    true
                }
                None => {
                    tracing::debug!(index, len, "comment index out of range");
                    false
                }
            }
        })
    }

    /// Removes the comment at `index` on the displayed blog with `id`,
    /// shifting later comments down by one.
    ///
    /// An out-of-range `index` leaves the comments untouched.
    pub fn delete_comment(&mut self, id: BlogId, index: usize) -> bool {
        self.with_displayed(id, "delete_comment", |blog| {
            if index < blog.comments.len() {
                blog.comments.remove(index);
                true
            } else {
                tracing::debug!(index, len = blog.comments.len(), "comment index out of range");
                false
            }
        })
    }

    /// Recomputes the displayed list from `all_blogs` and `query`.
    ///
    /// Keeps every blog whose title or body contains `query` ignoring case, in
    /// canonical order. An empty query restores the full list. Returns `true`
    /// if the displayed list changed.
    pub fn filter_blogs(&mut self, query: &str) -> bool {
        let _span = tracing::debug_span!("filter_blogs",
            total_blogs = self.entries.len(),
            query_len = query.len()
        )
        .entered();

        let search = SearchQuery::new(query);
        let visible: Vec<usize> = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, blog)| search.matches(blog))
            .map(|(position, _)| position)
            .collect();

        self.query = query.to_string();

        tracing::debug!(filtered_count = visible.len(), "search filter applied");

        if visible == self.visible {
            false
        } else {
            self.visible = visible;
            true
        }
    }

    /// Applies a reducer action. Returns `true` if state changed.
    pub fn dispatch(&mut self, action: BlogAction) -> bool {
        match action {
            BlogAction::SetBlogs(blogs) => {
                self.set_blogs(blogs);
                true
            }
            BlogAction::LikeBlog(id) => self.like_blog(id),
            BlogAction::ViewBlog(id) => self.view_blog(id),
            BlogAction::AddComment { id, comment } => self.add_comment(id, comment),
            BlogAction::EditComment { id, index, comment } => self.edit_comment(id, index, comment),
            BlogAction::DeleteComment { id, index } => self.delete_comment(id, index),
            BlogAction::FilterBlogs(query) => self.filter_blogs(&query),
        }
    }

    /// The displayed blogs, in order.
    pub fn blogs(&self) -> impl ExactSizeIterator<Item = &Blog> + '_ {
        self.visible.iter().map(|&position| &self.entries[position])
    }

    /// Every loaded blog, in canonical order, regardless of the active filter.
    #[must_use]
    pub fn all_blogs(&self) -> &[Blog] {
        &self.entries
    }

    /// Number of displayed blogs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.visible.len()
    }

    /// Returns `true` if nothing is displayed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    /// The displayed blog at `index`, if any.
    #[must_use]
    pub fn displayed(&self, index: usize) -> Option<&Blog> {
        self.visible.get(index).map(|&position| &self.entries[position])
    }

    /// Looks up a blog by id in `all_blogs`.
    #[must_use]
    pub fn get(&self, id: BlogId) -> Option<&Blog> {
        self.index.get(&id).map(|&position| &self.entries[position])
    }

    /// Position of the blog with `id` in the displayed list, if it is displayed.
    #[must_use]
    pub fn position_of(&self, id: BlogId) -> Option<usize> {
        let position = *self.index.get(&id)?;
        self.visible.binary_search(&position).ok()
    }

    /// The last query passed to `filter_blogs`; empty after `set_blogs`.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Runs `mutate` on the displayed blog with `id`, or returns `false`.
    fn with_displayed<F>(&mut self, id: BlogId, operation: &'static str, mutate: F) -> bool
    where
        F: FnOnce(&mut Blog) -> bool,
    {
        let Some(&position) = self.index.get(&id) else {
            tracing::debug!(blog_id = id, operation, "blog not found, ignoring");
            return false;
        };

        if self.visible.binary_search(&position).is_err() {
            tracing::debug!(blog_id = id, operation, "blog not displayed, ignoring");
            return false;
        }

        let changed = mutate(&mut self.entries[position]);
        tracing::debug!(blog_id = id, operation, changed, "blog updated");
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cats_and_dogs() -> Vec<Blog> {
        vec![Blog::new(1, "Cats", "about cats"), Blog::new(2, "Dogs", "about dogs")]
    }

    fn ids(store: &BlogStore) -> Vec<BlogId> {
        store.blogs().map(|b| b.id).collect()
    }

    #[test]
    fn set_blogs_replaces_both_lists() {
        let mut store = BlogStore::new();
        store.set_blogs(cats_and_dogs());
        store.filter_blogs("cat");

        store.set_blogs(vec![Blog::new(9, "Birds", "")]);
        assert_eq!(ids(&store), vec![9]);
        assert_eq!(store.all_blogs().len(), 1);
        assert_eq!(store.query(), "");
    }

    #[test]
    fn like_on_filtered_view_reaches_canonical_list() {
        let mut store = BlogStore::new();
        store.set_blogs(cats_and_dogs());
        store.filter_blogs("cat");

        assert!(store.like_blog(1));
        store.filter_blogs("");
        assert_eq!(store.all_blogs()[0].likes, 1);
        assert_eq!(store.get(1).map(|b| b.likes), Some(1));
    }

    #[test]
    fn mutations_ignore_blogs_filtered_out() {
        let mut store = BlogStore::new();
        store.set_blogs(cats_and_dogs());
        store.filter_blogs("cat");

        assert!(!store.like_blog(2));
        assert!(!store.view_blog(2));
        assert!(!store.add_comment(2, "hidden"));
        assert_eq!(store.get(2), Some(&Blog::new(2, "Dogs", "about dogs")));
    }

    #[test]
    fn view_blog_increments_views_only() {
        let mut store = BlogStore::new();
        store.set_blogs(cats_and_dogs());

        assert!(store.view_blog(2));
        let dogs = store.get(2).unwrap();
        assert_eq!((dogs.views, dogs.likes), (1, 0));
    }

    #[test]
    fn out_of_range_comment_index_is_ignored() {
        let mut store = BlogStore::new();
        store.set_blogs(cats_and_dogs());
        store.add_comment(1, "first");

        assert!(!store.edit_comment(1, 1, "nope"));
        assert!(!store.delete_comment(1, 5));
        assert_eq!(store.get(1).unwrap().comments, vec!["first".to_string()]);
    }

    #[test]
    fn delete_shifts_later_comments_down() {
        let mut store = BlogStore::new();
        store.set_blogs(cats_and_dogs());
        for text in ["a", "b", "c"] {
            store.add_comment(1, text);
        }

        assert!(store.delete_comment(1, 0));
        assert_eq!(store.get(1).unwrap().comments, vec!["b".to_string(), "c".to_string()]);
    }

    #[test]
    fn filter_reports_whether_view_changed() {
        let mut store = BlogStore::new();
        store.set_blogs(cats_and_dogs());

        assert!(store.filter_blogs("cat"));
        assert!(!store.filter_blogs("CAT"));
        assert!(store.filter_blogs(""));
    }

    #[test]
    fn filter_with_no_match_yields_empty_view() {
        let mut store = BlogStore::new();
        store.set_blogs(cats_and_dogs());

        store.filter_blogs("parrot");
        assert!(store.is_empty());
        assert_eq!(store.all_blogs().len(), 2);
    }

    #[test]
    fn duplicate_ids_resolve_to_first_occurrence() {
        let mut store = BlogStore::new();
        store.set_blogs(vec![Blog::new(1, "First", ""), Blog::new(1, "Second", "")]);

        assert_eq!(store.len(), 2);
        assert_eq!(store.get(1).map(|b| b.title.as_str()), Some("First"));
        store.like_blog(1);
        assert_eq!(store.all_blogs()[0].likes, 1);
        assert_eq!(store.all_blogs()[1].likes, 0);
    }

    #[test]
    fn position_of_tracks_displayed_order() {
        let mut store = BlogStore::new();
        store.set_blogs(cats_and_dogs());
        assert_eq!(store.position_of(2), Some(1));

        store.filter_blogs("dog");
        assert_eq!(store.position_of(2), Some(0));
        assert_eq!(store.position_of(1), None);
        assert_eq!(store.displayed(0).map(|b| b.id), Some(2));
    }

    #[test]
    fn dispatch_routes_every_action() {
        let mut store = BlogStore::new();
        assert!(store.dispatch(BlogAction::SetBlogs(cats_and_dogs())));
        assert!(store.dispatch(BlogAction::ViewBlog(1)));
        assert!(store.dispatch(BlogAction::AddComment { id: 1, comment: "hi".into() }));
        assert!(store.dispatch(BlogAction::EditComment { id: 1, index: 0, comment: "hey".into() }));
        assert!(store.dispatch(BlogAction::DeleteComment { id: 1, index: 0 }));
        assert!(!store.dispatch(BlogAction::LikeBlog(77)));
        assert!(store.dispatch(BlogAction::FilterBlogs("dog".into())));
        assert_eq!(ids(&store), vec![2]);
    }
}
