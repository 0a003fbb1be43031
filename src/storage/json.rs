//! JSON file seed source.
//!
//! Reads the whole file on each [`load`](BlogSource::load). The file is never
//! written: mutations made while browsing stay in memory.

use crate::domain::error::Result;
use crate::domain::Blog;
use crate::storage::backend::BlogSource;
use crate::storage::models::SeedFile;
use std::path::PathBuf;

/// Seed source backed by a JSON file on disk.
///
/// # File Format
///
/// ```json
/// {
///   "version": 1,
///   "blogs": [
///     {
///       "id": 1,
///       "title": "Cats",
///       "body": "about cats",
///       "imageUrl": "https://example.com/cat.png",
///       "likes": 0,
///       "views": 0,
///       "comments": []
///     }
///   ]
/// }
/// ```
///
/// A bare array of the same records is accepted too.
#[derive(Debug, Clone)]
pub struct JsonBlogSource {
    /// Path to the JSON file on disk.
    file_path: PathBuf,
}

impl JsonBlogSource {
    #[must_use]
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }
}

impl BlogSource for JsonBlogSource {
    fn load(&self) -> Result<Vec<Blog>> {
        let _span = tracing::debug_span!("json_load_blogs", path = ?self.file_path).entered();

        let contents = std::fs::read_to_string(&self.file_path)?;
        let blogs = SeedFile::from_json(&contents)?.into_blogs()?;

        tracing::debug!(count = blogs.len(), "loaded blogs from file");
        Ok(blogs)
    }

    fn describe(&self) -> String {
        self.file_path.display().to_string()
    }
}
