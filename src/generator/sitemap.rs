//! Sitemap generation.
//!
//! Lists the static site routes plus every blog post and work project for
//! search engine indexing.
//!
//! # Sitemap Format
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://example.com/blog/hello</loc>
//!     <lastmod>2025-01-01</lastmod>
//!   </url>
//! </urlset>
//! ```

use crate::{
    config::SiteConfig,
    content::{Blog, BlogMeta, ContentLoader, Work, WorkMeta},
    log,
};
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use std::{fs, path::Path};

// ============================================================================
// Constants
// ============================================================================

/// XML namespace for sitemap
const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

// ============================================================================
// Public API
// ============================================================================

/// Build the sitemap from the content directories and write it.
///
/// `[base.url]` must be set; [`SiteConfig::validate`] enforces this for the
/// sitemap command.
pub fn build_sitemap(config: &SiteConfig, now: DateTime<Utc>) -> Result<usize> {
    let base_url = config
        .base
        .url
        .as_deref()
        .context("[base.url] is required for sitemap generation")?;

    let posts = ContentLoader::new(Blog::from_config(config)).list_all()?;
    let projects = ContentLoader::new(Work::from_config(config)).list_all()?;

    let posts: Vec<&BlogMeta> = posts.iter().map(|entry| &entry.meta).collect();
    let projects: Vec<&WorkMeta> = projects.iter().map(|entry| &entry.meta).collect();

    let sitemap = Sitemap::new(base_url, &config.base.static_routes, &posts, &projects, now);
    let count = sitemap.urls.len();
    sitemap.write(&config.sitemap_path())?;
    Ok(count)
}

// ============================================================================
// Sitemap Implementation
// ============================================================================

/// Sitemap data structure
struct Sitemap {
    /// List of URL entries
    urls: Vec<UrlEntry>,
}

/// Single URL entry in the sitemap
struct UrlEntry {
    /// Full URL location
    loc: String,
    /// Last modification date (optional, YYYY-MM-DD format)
    lastmod: Option<String>,
}

impl Sitemap {
    /// Static routes first, then blog posts, then work projects.
    fn new(
        base_url: &str,
        static_routes: &[String],
        posts: &[&BlogMeta],
        projects: &[&WorkMeta],
        now: DateTime<Utc>,
    ) -> Self {
        let base = base_url.trim_end_matches('/');
        let today = ymd(&now);

        let statics = static_routes.iter().map(|route| UrlEntry {
            loc: format!("{base}{route}"),
            lastmod: Some(today.clone()),
        });
        let blog = posts.iter().map(|post| UrlEntry {
            loc: format!("{base}/blog/{}", post.slug),
            lastmod: Some(ymd(&post.last_modified())),
        });
        let work = projects.iter().map(|project| UrlEntry {
            loc: format!("{base}/work/{}", project.slug),
            lastmod: None,
        });

        Self {
            urls: statics.chain(blog).chain(work).collect(),
        }
    }

    /// Generate sitemap XML string.
    fn into_xml(self) -> String {
        let mut xml = String::with_capacity(4096);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        xml.push('\n');
        xml.push_str(&format!(r#"<urlset xmlns="{SITEMAP_NS}">"#));
        xml.push('\n');

        for entry in self.urls {
            xml.push_str("  <url>\n");
            xml.push_str(&format!("    <loc>{}</loc>\n", escape_xml(&entry.loc)));
            if let Some(lastmod) = entry.lastmod {
                xml.push_str(&format!("    <lastmod>{lastmod}</lastmod>\n"));
            }
            xml.push_str("  </url>\n");
        }

        xml.push_str("</urlset>\n");
        xml
    }

    /// Write sitemap to output file.
    fn write(self, sitemap_path: &Path) -> Result<()> {
        let xml = self.into_xml();

        if let Some(parent) = sitemap_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
        fs::write(sitemap_path, xml)
            .with_context(|| format!("Failed to write sitemap to {}", sitemap_path.display()))?;

        log!("sitemap"; "{}", sitemap_path.display());
        Ok(())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn ymd(dt: &DateTime<Utc>) -> String {
    dt.format("%Y-%m-%d").to_string()
}

/// Escape special XML characters.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::TempDir;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 10, 12, 0, 0).unwrap()
    }

    fn post(slug: &str, updated: Option<DateTime<Utc>>) -> BlogMeta {
        BlogMeta {
            slug: slug.into(),
            title: slug.into(),
            description: String::new(),
            published_at: Utc.with_ymd_and_hms(2024, 9, 1, 9, 0, 0).unwrap(),
            updated_at: updated,
            tags: vec![],
            reading_time_minutes: 2,
            image: None,
            card_image: None,
            hero_image: None,
        }
    }

    fn project(slug: &str) -> WorkMeta {
        WorkMeta {
            slug: slug.into(),
            name: slug.into(),
            role: String::new(),
            bullets: vec![],
            skills: vec![],
            image: None,
        }
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("hello"), "hello");
        assert_eq!(escape_xml("a & b"), "a &amp; b");
        assert_eq!(escape_xml("<\"it's\">"), "&lt;&quot;it&apos;s&quot;&gt;");
    }

    #[test]
    fn test_sitemap_empty() {
        let xml = Sitemap::new("https://example.com", &[], &[], &[], now()).into_xml();

        assert!(xml.contains(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(xml.contains(&format!(r#"<urlset xmlns="{SITEMAP_NS}">"#)));
        assert!(xml.contains("</urlset>"));
        assert!(!xml.contains("<url>"));
    }

    #[test]
    fn test_sitemap_entries() {
        let routes = vec![String::new(), "/about".to_string()];
        let updated = post("updated", Some(Utc.with_ymd_and_hms(2024, 12, 24, 8, 0, 0).unwrap()));
        let plain = post("plain", None);
        let work = project("checkout");

        let xml = Sitemap::new("https://example.com/", &routes, &[&updated, &plain], &[&work], now())
            .into_xml();

        assert!(xml.contains("<loc>https://example.com</loc>\n    <lastmod>2025-03-10</lastmod>"));
        assert!(xml.contains("<loc>https://example.com/about</loc>"));
        assert!(xml.contains("<loc>https://example.com/blog/updated</loc>\n    <lastmod>2024-12-24</lastmod>"));
        assert!(xml.contains("<loc>https://example.com/blog/plain</loc>\n    <lastmod>2024-09-01</lastmod>"));
        assert!(xml.contains("<loc>https://example.com/work/checkout</loc>\n  </url>"));
        assert_eq!(xml.matches("<url>").count(), 5);
    }

    #[test]
    fn test_build_sitemap_writes_file() {
        let dir = TempDir::new().unwrap();
        let mut config = SiteConfig::default();
        config.base.url = Some("https://example.com".into());
        config.paths.blog = dir.path().join("content/blog");
        config.paths.work = dir.path().join("content/work");
        config.paths.public = dir.path().join("public");
        config.paths.card_images = dir.path().join("public/cards");

        fs::create_dir_all(&config.paths.blog).unwrap();
        fs::write(
            config.paths.blog.join("hello.mdx"),
            "---\nslug: hello\ntitle: Hello\ndescription: d\npublishedAt: 2024-09-01T09:00:00.000Z\nreadingTimeMinutes: 2\n---\n\nHi\n",
        )
        .unwrap();

        let count = build_sitemap(&config, now()).unwrap();
        assert_eq!(count, 6);

        let xml = fs::read_to_string(dir.path().join("public/sitemap.xml")).unwrap();
        assert!(xml.contains("<loc>https://example.com/blog/hello</loc>"));
        assert!(xml.contains("<loc>https://example.com/contact</loc>"));
    }

    #[test]
    fn test_build_sitemap_requires_base_url() {
        let err = build_sitemap(&SiteConfig::default(), now()).unwrap_err();
        assert!(err.to_string().contains("[base.url]"));
    }
}
