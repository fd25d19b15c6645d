//! `[paths]` section configuration.
//!
//! Filesystem locations are relative to the project root in folio.toml and
//! become absolute after [`SiteConfig::update_with_cli`](super::SiteConfig::update_with_cli).
//! URL prefixes stay as written.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[paths]` section in folio.toml.
///
/// # Example
/// ```toml
/// [paths]
/// blog = "content/blog"
/// work = "content/work"
/// card_images = "public/assets/images/cards"
/// card_url = "/assets/images/cards"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct PathsConfig {
    /// Project root (set from `--root`).
    #[serde(skip)]
    #[educe(Default = defaults::paths::root())]
    pub root: Option<PathBuf>,

    /// Blog post documents.
    #[serde(default = "defaults::paths::blog")]
    #[educe(Default = defaults::paths::blog())]
    pub blog: PathBuf,

    /// Work project documents.
    #[serde(default = "defaults::paths::work")]
    #[educe(Default = defaults::paths::work())]
    pub work: PathBuf,

    /// Static site directory; image URLs resolve inside it.
    #[serde(default = "defaults::paths::public")]
    #[educe(Default = defaults::paths::public())]
    pub public: PathBuf,

    /// Card image pool directory.
    #[serde(default = "defaults::paths::card_images")]
    #[educe(Default = defaults::paths::card_images())]
    pub card_images: PathBuf,

    /// Widescreen (hero) image pool directory.
    #[serde(default = "defaults::paths::hero_images")]
    #[educe(Default = defaults::paths::hero_images())]
    pub hero_images: PathBuf,

    /// Exported blog HTML read by `import-blog`.
    #[serde(default = "defaults::paths::blog_source")]
    #[educe(Default = defaults::paths::blog_source())]
    pub blog_source: PathBuf,

    /// Exported project list read by `import-projects`.
    #[serde(default = "defaults::paths::projects_source")]
    #[educe(Default = defaults::paths::projects_source())]
    pub projects_source: PathBuf,

    /// URL prefix of card images.
    #[serde(default = "defaults::paths::card_url")]
    #[educe(Default = defaults::paths::card_url())]
    pub card_url: String,

    /// URL prefix of hero images.
    #[serde(default = "defaults::paths::hero_url")]
    #[educe(Default = defaults::paths::hero_url())]
    pub hero_url: String,

    /// Sitemap file name, relative to `public`.
    #[serde(default = "defaults::paths::sitemap")]
    #[educe(Default = defaults::paths::sitemap())]
    pub sitemap: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;
    use std::path::PathBuf;

    #[test]
    fn test_paths_defaults() {
        let config = SiteConfig::default();

        assert_eq!(config.paths.root, None);
        assert_eq!(config.paths.blog, PathBuf::from("content/blog"));
        assert_eq!(config.paths.work, PathBuf::from("content/work"));
        assert_eq!(config.paths.hero_images, PathBuf::from("public/assets/images/widescreen"));
        assert_eq!(config.paths.card_url, "/assets/images/cards");
        assert_eq!(config.paths.sitemap, PathBuf::from("sitemap.xml"));
    }

    #[test]
    fn test_paths_override() {
        let config = r#"
            [paths]
            blog = "posts"
            blog_source = "exports/blog.html"
            hero_url = "/img/wide"
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.paths.blog, PathBuf::from("posts"));
        assert_eq!(config.paths.blog_source, PathBuf::from("exports/blog.html"));
        assert_eq!(config.paths.hero_url, "/img/wide");
        assert_eq!(config.paths.work, PathBuf::from("content/work"));
    }

    #[test]
    fn test_root_is_not_configurable() {
        let result: Result<SiteConfig, _> = toml::from_str("[paths]\nroot = \"/tmp\"");
        assert!(result.is_err());
    }
}
