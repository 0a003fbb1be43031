//! Seed record models.
//!
//! [`BlogRecord`] is the on-disk shape of a post. It is looser than the domain
//! [`Blog`]: counters and comments may be omitted and default to zero/empty.
//! [`SeedFile`] accepts both a bare array of records and a versioned object.

use crate::domain::error::{BlognestError, Result};
use crate::domain::{Blog, BlogId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Current version of the object-shaped seed format.
pub const SEED_VERSION: u32 = 1;

/// One blog post as written in a seed file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogRecord {
    pub id: BlogId,
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub likes: u64,
    #[serde(default)]
    pub views: u64,
    #[serde(default)]
    pub comments: Vec<String>,
}

impl From<BlogRecord> for Blog {
    fn from(record: BlogRecord) -> Self {
        Self {
            id: record.id,
            title: record.title,
            body: record.body,
            image_url: record.image_url,
            likes: record.likes,
            views: record.views,
            comments: record.comments,
        }
    }
}

/// Top-level seed document.
///
/// ```json
/// { "version": 1, "blogs": [ { "id": 1, "title": "Cats", "body": "...", "imageUrl": "cat.png" } ] }
/// ```
///
/// or simply the array inside `blogs`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SeedFile {
    Versioned {
        version: u32,
        blogs: Vec<BlogRecord>,
    },
    Bare(Vec<BlogRecord>),
}

impl SeedFile {
    /// Parses a seed document from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`BlognestError::Storage`] if the text is not a valid seed
    /// document or declares an unsupported version.
    pub fn from_json(contents: &str) -> Result<Self> {
        let seed: Self = serde_json::from_str(contents)
            .map_err(|e| BlognestError::Storage(format!("failed to parse JSON: {e}")))?;

        if let Self::Versioned { version, .. } = &seed {
            if *version != SEED_VERSION {
                return Err(BlognestError::Storage(format!(
                    "unsupported seed version {version}"
                )));
            }
        }

        Ok(seed)
    }

    /// Validates the records and converts them into domain blogs, keeping order.
    ///
    /// # Errors
    ///
    /// Returns [`BlognestError::Storage`] on a duplicate id or a blank title.
    pub fn into_blogs(self) -> Result<Vec<Blog>> {
        let records = match self {
            Self::Versioned { blogs, .. } | Self::Bare(blogs) => blogs,
        };

        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.id) {
                return Err(BlognestError::Storage(format!("duplicate blog id {}", record.id)));
            }
            if record.title.trim().is_empty() {
                return Err(BlognestError::Storage(format!("blog {} has an empty title", record.id)));
            }
        }

        Ok(records.into_iter().map(Blog::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_array_with_defaults() {
        let seed = SeedFile::from_json(r#"[{"id": 1, "title": "Cats"}]"#).unwrap();
        let blogs = seed.into_blogs().unwrap();
        assert_eq!(blogs, vec![Blog::new(1, "Cats", "")]);
    }

    #[test]
    fn versioned_object_keeps_order_and_counters() {
        let json = r#"{"version": 1, "blogs": [
            {"id": 2, "title": "Dogs", "body": "about dogs", "imageUrl": "dog.png", "likes": 4, "views": 9, "comments": ["woof"]},
            {"id": 1, "title": "Cats", "body": "about cats"}
        ]}"#;
        let blogs = SeedFile::from_json(json).unwrap().into_blogs().unwrap();
        assert_eq!(blogs.iter().map(|b| b.id).collect::<Vec<_>>(), vec![2, 1]);
        assert_eq!(blogs[0].image_url, "dog.png");
        assert_eq!((blogs[0].likes, blogs[0].views), (4, 9));
        assert_eq!(blogs[0].comments, vec!["woof".to_string()]);
    }

    #[test]
    fn rejects_duplicate_ids() {
        let json = r#"[{"id": 1, "title": "a"}, {"id": 1, "title": "b"}]"#;
        let err = SeedFile::from_json(json).unwrap().into_blogs().unwrap_err();
        assert!(err.to_string().contains("duplicate blog id 1"));
    }

    #[test]
    fn rejects_blank_title() {
        let json = r#"[{"id": 5, "title": "   "}]"#;
        assert!(SeedFile::from_json(json).unwrap().into_blogs().is_err());
    }

    #[test]
    fn rejects_unknown_version() {
        assert!(SeedFile::from_json(r#"{"version": 2, "blogs": []}"#).is_err());
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(
            SeedFile::from_json("{not json"),
            Err(BlognestError::Storage(_))
        ));
    }
}
