//! Sample blog collection embedded at compile time.
//!
//! Used when no `blogs_file` is configured, so the plugin has something to
//! browse on first launch.

use crate::domain::error::Result;
use crate::domain::Blog;
use crate::storage::backend::BlogSource;
use crate::storage::models::SeedFile;

const SAMPLE_BLOGS: &str = include_str!("../../data/blogs.json");

/// Seed source returning the bundled sample posts.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinBlogSource;

impl BlogSource for BuiltinBlogSource {
    fn load(&self) -> Result<Vec<Blog>> {
        SeedFile::from_json(SAMPLE_BLOGS)?.into_blogs()
    }

    fn describe(&self) -> String {
        "built-in sample".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_collection_is_valid() {
        let blogs = BuiltinBlogSource.load().unwrap();
        assert!(blogs.len() >= 3);
        assert!(blogs.iter().all(|b| !b.image_url.is_empty()));
    }
}
