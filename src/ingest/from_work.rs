//! `blog-from-work`: publish every work project as a blog post as well.

use super::{ImportError, Summary, document_path, write_if_absent};
use crate::{
    config::SiteConfig,
    content::{BlogMeta, Document, RawDocument, loader::document_paths},
    log,
    utils::{date::spread_published_dates, slug::title_from_slug},
};
use anyhow::{Context, Result, bail};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};
use serde_yaml::Value;
use std::{fs, path::Path};

/// The subset of work front matter a post is built from.
///
/// Read leniently: any field may be missing.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct WorkSource {
    slug: Option<String>,
    name: Option<String>,
    #[serde(deserialize_with = "deserialize_scalars")]
    bullets: Vec<String>,
    #[serde(deserialize_with = "deserialize_scalars")]
    skills: Vec<String>,
}

/// A list of scalars as strings. `null` is an empty list; nested values are dropped.
fn deserialize_scalars<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let values: Option<Vec<Value>> = Option::deserialize(deserializer)?;
    Ok(values
        .unwrap_or_default()
        .into_iter()
        .filter_map(|value| match value {
            Value::String(s) => Some(s),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        })
        .collect())
}

pub fn blog_from_work(config: &SiteConfig, now: DateTime<Utc>) -> Result<Summary> {
    let work_dir = &config.paths.work;
    let files = document_paths(work_dir)?;
    if files.is_empty() {
        bail!(ImportError::NoRecords(work_dir.clone()));
    }
    log!("import"; "found {} work projects", files.len());

    let dates = spread_published_dates(
        files.len(),
        now,
        config.import.spread_days,
        config.import.publish_hour,
    );

    let mut summary = Summary::new(files.len());
    for (file, published_at) in files.iter().zip(dates) {
        let source = fs::read_to_string(file)
            .with_context(|| format!("Failed to read {}", file.display()))?;
        let post = post_from_work(&source, file, config, published_at)?;

        let path = document_path(&config.paths.blog, &post.meta.slug);
        let outcome = write_if_absent(&path, &post.to_source()?)?;
        summary.record(outcome, &path);
    }

    summary.log();
    Ok(summary)
}

/// Build a blog post from the text of one work document.
fn post_from_work(
    source: &str,
    file: &Path,
    config: &SiteConfig,
    published_at: DateTime<Utc>,
) -> Result<Document<BlogMeta>> {
    let (work, body) = match RawDocument::split(source) {
        Some(raw) => {
            let work: WorkSource = serde_yaml::from_str(raw.front_matter)
                .with_context(|| format!("Invalid front matter in {}", file.display()))?;
            (work, raw.body)
        }
        None => (WorkSource::default(), source),
    };

    let stem = file
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or_default();
    let slug = work
        .slug
        .filter(|slug| !slug.trim().is_empty())
        .unwrap_or_else(|| stem.to_owned());
    let title = work
        .name
        .filter(|name| !name.trim().is_empty())
        .unwrap_or_else(|| title_from_slug(&slug));

    let description = work
        .bullets
        .first()
        .map(|bullet| bullet.trim().to_owned())
        .filter(|bullet| !bullet.is_empty())
        .or_else(|| first_body_sentence(body))
        .unwrap_or_else(|| title.clone());

    let tags = if work.skills.is_empty() {
        config.import.fallback_tags.clone()
    } else {
        work.skills
    };

    let meta = BlogMeta {
        slug,
        title,
        description,
        published_at,
        updated_at: None,
        tags,
        reading_time_minutes: config.import.reading_time().for_markdown(body),
        image: None,
        card_image: None,
        hero_image: None,
    };

    Ok(Document::new(meta, body.trim_start()))
}

/// First non-empty `.`-separated sentence of a body, lines joined.
fn first_body_sentence(body: &str) -> Option<String> {
    let joined = body
        .lines()
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    joined
        .split('.')
        .map(str::trim)
        .find(|sentence| !sentence.is_empty())
        .map(str::to_owned)
}
