//! `[import]` section configuration.
//!
//! Knobs for the ingestion commands: thresholds, slug length, reading time,
//! synthetic dates and default tags.

use super::defaults;
use crate::utils::meta::ReadingTime;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[import]` section in folio.toml.
///
/// # Example
/// ```toml
/// [import]
/// min_article_chars = 80
/// spread_days = 365
/// publish_hour = 9
/// blog_tags = ["blog"]
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct ImportConfig {
    /// Articles with less flattened text than this are dropped.
    #[serde(default = "defaults::import::min_article_chars")]
    #[educe(Default = defaults::import::min_article_chars())]
    pub min_article_chars: usize,

    /// Slug length cap for imported blog posts.
    #[serde(default = "defaults::import::slug_max_len")]
    #[educe(Default = defaults::import::slug_max_len())]
    pub slug_max_len: usize,

    #[serde(default = "defaults::import::words_per_minute")]
    #[educe(Default = defaults::import::words_per_minute())]
    pub words_per_minute: u32,

    #[serde(default = "defaults::import::min_reading_minutes")]
    #[educe(Default = defaults::import::min_reading_minutes())]
    pub min_reading_minutes: u32,

    /// Synthetic publish dates of a batch span this many days back.
    #[serde(default = "defaults::import::spread_days")]
    #[educe(Default = defaults::import::spread_days())]
    pub spread_days: u32,

    /// UTC hour of synthetic publish dates.
    #[serde(default = "defaults::import::publish_hour")]
    #[educe(Default = defaults::import::publish_hour())]
    pub publish_hour: u32,

    /// Store imported article bodies as Markdown instead of raw HTML.
    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub convert_html: bool,

    /// File extensions that count as images in the pools.
    #[serde(default = "defaults::import::image_extensions")]
    #[educe(Default = defaults::import::image_extensions())]
    pub image_extensions: Vec<String>,

    /// Tags of posts created by `import-blog`.
    #[serde(default = "defaults::import::blog_tags")]
    #[educe(Default = defaults::import::blog_tags())]
    pub blog_tags: Vec<String>,

    /// Tags of posts created from work projects without skills.
    #[serde(default = "defaults::import::fallback_tags")]
    #[educe(Default = defaults::import::fallback_tags())]
    pub fallback_tags: Vec<String>,
}

impl ImportConfig {
    pub fn reading_time(&self) -> ReadingTime {
        ReadingTime {
            words_per_minute: self.words_per_minute,
            min_minutes: self.min_reading_minutes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;

    #[test]
    fn test_import_defaults() {
        let config = SiteConfig::default();
        let import = &config.import;

        assert_eq!(import.min_article_chars, 80);
        assert_eq!(import.slug_max_len, 80);
        assert_eq!(import.spread_days, 365);
        assert_eq!(import.publish_hour, 9);
        assert!(import.convert_html);
        assert_eq!(import.image_extensions, vec!["jpg", "jpeg", "png"]);
        assert_eq!(import.blog_tags, vec!["blog"]);
        assert_eq!(import.fallback_tags, vec!["projects"]);

        let reading = import.reading_time();
        assert_eq!(reading.words_per_minute, 220);
        assert_eq!(reading.min_minutes, 2);
    }

    #[test]
    fn test_import_partial_override() {
        let config = r#"
            [import]
            convert_html = false
            words_per_minute = 200
            image_extensions = ["webp"]
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert!(!config.import.convert_html);
        assert_eq!(config.import.reading_time().words_per_minute, 200);
        assert_eq!(config.import.image_extensions, vec!["webp"]);
        assert_eq!(config.import.min_reading_minutes, 2);
    }
}
