//! Read-only commands over the content collections: `list`, `show`, `slugs`.

use crate::{
    cli::CollectionKind,
    config::SiteConfig,
    content::{Blog, BlogMeta, ContentLoader, Entry, Work, WorkMeta},
};
use anyhow::{Result, bail};
use serde::Serialize;

/// Print every document of a collection in display order.
pub fn list(config: &SiteConfig, kind: CollectionKind, json: bool) -> Result<()> {
    match kind {
        CollectionKind::Blog => {
            let entries = ContentLoader::new(Blog::from_config(config)).list_all()?;
            print_entries(&entries, json, blog_row)
        }
        CollectionKind::Work => {
            let entries = ContentLoader::new(Work::from_config(config)).list_all()?;
            print_entries(&entries, json, work_row)
        }
    }
}

/// Print one document with its rendered body.
pub fn show(config: &SiteConfig, kind: CollectionKind, slug: &str, json: bool) -> Result<()> {
    let output = match kind {
        CollectionKind::Blog => {
            let entry = ContentLoader::new(Blog::from_config(config)).get_by_slug(slug)?;
            entry.map(|entry| render_entry(&entry, json, blog_row)).transpose()?
        }
        CollectionKind::Work => {
            let entry = ContentLoader::new(Work::from_config(config)).get_by_slug(slug)?;
            entry.map(|entry| render_entry(&entry, json, work_row)).transpose()?
        }
    };

    match output {
        Some(text) => {
            println!("{text}");
            Ok(())
        }
        None => bail!("no {} document with slug `{slug}`", kind_name(kind)),
    }
}

/// Print the slugs of a collection, one per line.
pub fn slugs(config: &SiteConfig, kind: CollectionKind) -> Result<()> {
    let slugs = match kind {
        CollectionKind::Blog => ContentLoader::new(Blog::from_config(config)).list_slugs()?,
        CollectionKind::Work => ContentLoader::new(Work::from_config(config)).list_slugs()?,
    };
    for slug in slugs {
        println!("{slug}");
    }
    Ok(())
}

fn print_entries<M: Serialize>(entries: &[Entry<M>], json: bool, row: fn(&M) -> String) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(entries)?);
    } else {
        for entry in entries {
            println!("{}", row(&entry.meta));
        }
    }
    Ok(())
}

fn render_entry<M: Serialize>(entry: &Entry<M>, json: bool, row: fn(&M) -> String) -> Result<String> {
    if json {
        Ok(serde_json::to_string_pretty(entry)?)
    } else {
        Ok(format!("{}\n\n{}", row(&entry.meta), entry.content_html.trim_end()))
    }
}

fn blog_row(meta: &BlogMeta) -> String {
    format!(
        "{}  {}  {} ({} min)",
        meta.published_at.format("%Y-%m-%d"),
        meta.slug,
        meta.title,
        meta.reading_time_minutes
    )
}

fn work_row(meta: &WorkMeta) -> String {
    format!("{}  {}  [{}]", meta.slug, meta.name, meta.role)
}

fn kind_name(kind: CollectionKind) -> &'static str {
    match kind {
        CollectionKind::Blog => "blog",
        CollectionKind::Work => "work",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use std::fs;
    use tempfile::TempDir;

    fn work_meta() -> WorkMeta {
        WorkMeta {
            slug: "checkout".into(),
            name: "Checkout Redesign".into(),
            role: "Product Lead, Exinity".into(),
            bullets: vec!["Rebuilt the funnel.".into()],
            skills: vec![],
            image: None,
        }
    }

    #[test]
    fn test_rows() {
        let blog = BlogMeta {
            slug: "hello".into(),
            title: "Hello".into(),
            description: String::new(),
            published_at: Utc.with_ymd_and_hms(2024, 9, 1, 9, 0, 0).unwrap(),
            updated_at: None,
            tags: vec![],
            reading_time_minutes: 3,
            image: None,
            card_image: None,
            hero_image: None,
        };
        assert_eq!(blog_row(&blog), "2024-09-01  hello  Hello (3 min)");
        assert_eq!(work_row(&work_meta()), "checkout  Checkout Redesign  [Product Lead, Exinity]");
    }

    #[test]
    fn test_render_entry() {
        let entry = Entry {
            meta: work_meta(),
            content_html: "<p>Body</p>\n".into(),
        };

        let text = render_entry(&entry, false, work_row).unwrap();
        assert_eq!(text, "checkout  Checkout Redesign  [Product Lead, Exinity]\n\n<p>Body</p>");

        let json = render_entry(&entry, true, work_row).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["bullets"][0], "Rebuilt the funnel.");
        assert_eq!(value["contentHtml"], "<p>Body</p>\n");
    }

    #[test]
    fn test_show_missing_slug_is_an_error() {
        let dir = TempDir::new().unwrap();
        let mut config = SiteConfig::default();
        config.paths.work = dir.path().join("work");
        fs::create_dir_all(&config.paths.work).unwrap();

        let err = show(&config, CollectionKind::Work, "nope", false).unwrap_err();
        assert!(err.to_string().contains("no work document with slug `nope`"));
    }
}
