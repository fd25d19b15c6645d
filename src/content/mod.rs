//! Content documents: typed front matter, parsing, rendering and loading.
//!
//! Two collections share one on-disk format (see [`frontmatter`]):
//!
//! | Collection | Directory        | Metadata     |
//! |------------|------------------|--------------|
//! | blog       | `content/blog/`  | [`BlogMeta`] |
//! | work       | `content/work/`  | [`WorkMeta`] |

pub mod frontmatter;
pub mod loader;
pub mod render;

pub use frontmatter::{Document, DocumentError, FrontMatter, RawDocument};
pub use loader::{Blog, ContentLoader, Work};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// File extension of content documents.
pub const DOCUMENT_EXT: &str = "mdx";

// ============================================================================
// Blog
// ============================================================================

/// Front matter of a blog post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogMeta {
    pub slug: String,
    pub title: String,
    pub description: String,
    #[serde(with = "crate::utils::date::timestamp")]
    pub published_at: DateTime<Utc>,
    #[serde(
        default,
        with = "crate::utils::date::timestamp_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub reading_time_minutes: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero_image: Option<String>,
}

impl BlogMeta {
    /// Last modification time: `updatedAt` when present, else `publishedAt`.
    pub fn last_modified(&self) -> DateTime<Utc> {
        self.updated_at.unwrap_or(self.published_at)
    }
}

impl FrontMatter for BlogMeta {
    fn slug(&self) -> &str {
        &self.slug
    }

    fn validate(&self) -> Result<(), String> {
        if self.slug.trim().is_empty() {
            return Err("`slug` must not be empty".into());
        }
        if self.title.trim().is_empty() {
            return Err("`title` must not be empty".into());
        }
        Ok(())
    }
}

// ============================================================================
// Work
// ============================================================================

/// Front matter of a work project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkMeta {
    pub slug: String,
    pub name: String,
    pub role: String,
    #[serde(default)]
    pub bullets: Vec<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl FrontMatter for WorkMeta {
    fn slug(&self) -> &str {
        &self.slug
    }
}

// ============================================================================
// Loaded entries
// ============================================================================

/// A document as handed to pages: metadata plus rendered body.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry<M> {
    #[serde(flatten)]
    pub meta: M,
    pub content_html: String,
}
