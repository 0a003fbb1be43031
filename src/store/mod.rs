//! Blog store: the single owner of blog state.
//!
//! The store keeps one canonical, ordered collection of blogs and a displayed
//! view over it. Every mutation goes through [`BlogStore`] methods or the
//! reducer form, [`BlogStore::dispatch`] with a [`BlogAction`].
//!
//! # Representation
//!
//! ```text
//!   entries:  [ b1, b2, b3, b4 ]      ← all_blogs, canonical order
//!   index:    { id → position }
//!   visible:  [ 0, 2 ]                ← blogs, positions into entries
//! ```
//!
//! Because the displayed list only holds positions, a like on a filtered
//! result is visible through `all_blogs` as well; the two lists never diverge.
//!
//! # Modules
//!
//! - [`blog_store`]: The store and its operations
//! - [`actions`]: Reducer actions
//! - [`filter`]: Case-insensitive search matching
//!
//! # Example
//!
//! ```rust
//! use blognest::domain::Blog;
//! use blognest::store::{BlogAction, BlogStore};
//!
//! let mut store = BlogStore::new();
//! store.set_blogs(vec![Blog::new(1, "Cats", "about cats"), Blog::new(2, "Dogs", "about dogs")]);
//!
//! store.dispatch(BlogAction::FilterBlogs("cat".into()));
//! assert_eq!(store.len(), 1);
//!
//! store.dispatch(BlogAction::LikeBlog(1));
//! assert_eq!(store.get(1).map(|b| b.likes), Some(1));
//! ```

pub mod actions;
pub mod blog_store;
pub mod filter;

pub use actions::BlogAction;
pub use blog_store::BlogStore;
pub use filter::SearchQuery;
