//! Property tests for the blog store operations.
//!
//! Blog lists are generated with distinct ids; comment indices are drawn
//! inside the valid range of the chosen blog.

use blognest::{Blog, BlogId, BlogStore};
use proptest::prelude::*;

fn arb_blog(id: BlogId) -> impl Strategy<Value = Blog> {
    (
        "[A-Za-z ]{1,16}",
        "[A-Za-z ]{0,40}",
        0u64..50,
        0u64..50,
        prop::collection::vec("[a-z]{1,8}", 0..5),
    )
        .prop_map(move |(title, body, likes, views, comments)| {
            let mut blog = Blog::new(id, title, body);
            blog.likes = likes;
            blog.views = views;
            blog.comments = comments;
            blog
        })
}

fn arb_blogs() -> impl Strategy<Value = Vec<Blog>> {
    (0usize..8).prop_flat_map(|len| {
        (1..=len as BlogId)
            .map(arb_blog)
            .collect::<Vec<_>>()
    })
}

/// A non-empty list plus the position of one blog in it.
fn arb_blogs_with_pick() -> impl Strategy<Value = (Vec<Blog>, usize)> {
    arb_blogs()
        .prop_filter("need at least one blog", |blogs| !blogs.is_empty())
        .prop_flat_map(|blogs| {
            let len = blogs.len();
            (Just(blogs), 0..len)
        })
}

/// A list, a blog with at least one comment, and a valid comment index.
fn arb_commented_pick() -> impl Strategy<Value = (Vec<Blog>, usize, usize)> {
    arb_blogs_with_pick()
        .prop_map(|(mut blogs, pick)| {
            if blogs[pick].comments.is_empty() {
                blogs[pick].comments.push("seed".to_string());
            }
            (blogs, pick)
        })
        .prop_flat_map(|(blogs, pick)| {
            let count = blogs[pick].comments.len();
            (Just(blogs), Just(pick), 0..count)
        })
}

fn loaded(blogs: &[Blog]) -> BlogStore {
    let mut store = BlogStore::new();
    store.set_blogs(blogs.to_vec());
    store
}

fn displayed(store: &BlogStore) -> Vec<Blog> {
    store.blogs().cloned().collect()
}

proptest! {
    #[test]
    fn set_blogs_displays_list_in_order(blogs in arb_blogs()) {
        let store = loaded(&blogs);
        prop_assert_eq!(displayed(&store), blogs.clone());
        prop_assert_eq!(store.all_blogs(), blogs.as_slice());
    }

    #[test]
    fn like_touches_only_the_target((blogs, pick) in arb_blogs_with_pick()) {
        let mut store = loaded(&blogs);
        let id = blogs[pick].id;

        prop_assert!(store.like_blog(id));

        let mut expected = blogs.clone();
        expected[pick].likes += 1;
        prop_assert_eq!(displayed(&store), expected);
    }

    #[test]
    fn like_of_unknown_id_changes_nothing(blogs in arb_blogs()) {
        let mut store = loaded(&blogs);

        prop_assert!(!store.like_blog(10_000));
        prop_assert_eq!(displayed(&store), blogs);
    }

    #[test]
    fn add_comment_appends_last((blogs, pick) in arb_blogs_with_pick(), text in "[a-z]{1,10}") {
        let mut store = loaded(&blogs);
        let id = blogs[pick].id;

        prop_assert!(store.add_comment(id, text.clone()));

        let comments = &store.get(id).unwrap().comments;
        prop_assert_eq!(comments.len(), blogs[pick].comments.len() + 1);
        prop_assert_eq!(comments.last(), Some(&text));
    }

    #[test]
    fn edit_comment_replaces_in_place((blogs, pick, index) in arb_commented_pick()) {
        let mut store = loaded(&blogs);
        let id = blogs[pick].id;

        prop_assert!(store.edit_comment(id, index, "y"));

        let mut expected = blogs[pick].comments.clone();
        expected[index] = "y".to_string();
        prop_assert_eq!(&store.get(id).unwrap().comments, &expected);
    }

    #[test]
    fn delete_comment_shifts_later_entries((blogs, pick, index) in arb_commented_pick()) {
        let mut store = loaded(&blogs);
        let id = blogs[pick].id;

        prop_assert!(store.delete_comment(id, index));

        let mut expected = blogs[pick].comments.clone();
        expected.remove(index);
        prop_assert_eq!(&store.get(id).unwrap().comments, &expected);
    }

    #[test]
    fn filtering_twice_equals_once(blogs in arb_blogs(), query in "[a-zA-Z]{0,3}") {
        let mut store = loaded(&blogs);

        store.filter_blogs(&query);
        let once = displayed(&store);
        prop_assert!(!store.filter_blogs(&query));
        prop_assert_eq!(displayed(&store), once);
    }

    #[test]
    fn empty_query_restores_all(blogs in arb_blogs(), query in "[a-z]{1,3}") {
        let mut store = loaded(&blogs);

        store.filter_blogs(&query);
        store.filter_blogs("");
        prop_assert_eq!(displayed(&store), blogs);
    }

    #[test]
    fn filter_ignores_case(blogs in arb_blogs(), query in "[a-zA-Z]{1,3}") {
        let mut upper = loaded(&blogs);
        let mut lower = loaded(&blogs);

        upper.filter_blogs(&query.to_uppercase());
        lower.filter_blogs(&query.to_lowercase());
        prop_assert_eq!(displayed(&upper), displayed(&lower));
    }
}

#[test]
fn hello_matches_regardless_of_case() {
    let mut store = BlogStore::new();
    store.set_blogs(vec![Blog::new(1, "Hello World", ""), Blog::new(2, "Goodbye", "")]);

    store.filter_blogs("HELLO");
    let upper = displayed(&store);
    store.filter_blogs("hello");

    assert_eq!(displayed(&store), upper);
    assert_eq!(upper.iter().map(|b| b.id).collect::<Vec<_>>(), vec![1]);
}

#[test]
fn cats_and_dogs_end_to_end() {
    let mut store = BlogStore::new();
    store.set_blogs(vec![Blog::new(1, "Cats", "about cats"), Blog::new(2, "Dogs", "about dogs")]);

    store.filter_blogs("cat");
    assert_eq!(store.blogs().map(|b| b.id).collect::<Vec<_>>(), vec![1]);

    store.like_blog(1);
    assert_eq!(store.get(1).map(|b| b.likes), Some(1));

    store.filter_blogs("");
    let ids: Vec<BlogId> = store.blogs().map(|b| b.id).collect();
    assert_eq!(ids, vec![1, 2]);
    assert_eq!(store.displayed(0).map(|b| b.likes), Some(1));
}
