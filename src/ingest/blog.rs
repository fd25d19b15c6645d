//! `import-blog`: one blog post per `<h1>` article of an exported HTML page.

use super::{ImportError, Summary, document_path, read_input, write_if_absent};
use crate::{
    config::SiteConfig,
    content::{BlogMeta, Document},
    extract::{Article, extract_articles},
    html::markdown::html_to_markdown,
    log,
    utils::{
        date::spread_published_dates,
        meta::{ImagePool, first_sentence},
        slug::{SlugSet, slugify},
    },
};
use anyhow::{Result, bail};
use chrono::{DateTime, Utc};

/// Image pools a batch of posts draws from.
#[derive(Debug, Clone, Default)]
pub struct PostImages {
    pub cards: ImagePool,
    pub heroes: ImagePool,
}

impl PostImages {
    pub fn scan(config: &SiteConfig) -> Self {
        let extensions = &config.import.image_extensions;
        Self {
            cards: ImagePool::scan(&config.paths.card_images, &config.paths.card_url, extensions),
            heroes: ImagePool::scan(&config.paths.hero_images, &config.paths.hero_url, extensions),
        }
    }
}

/// Run the import against the configured export.
pub fn import_blog(config: &SiteConfig, now: DateTime<Utc>) -> Result<Summary> {
    let source = &config.paths.blog_source;
    let html = read_input(source)?;

    let articles = extract_articles(&html, config.import.min_article_chars);
    if articles.is_empty() {
        bail!(ImportError::NoRecords(source.clone()));
    }
    log!("import"; "found {} articles in {}", articles.len(), source.display());

    let images = PostImages::scan(config);
    if images.cards.is_empty() || images.heroes.is_empty() {
        log!("warn"; "no card/hero images found, posts are created without them");
    } else {
        log!("import"; "{} card and {} hero images", images.cards.len(), images.heroes.len());
    }

    let mut summary = Summary::new(articles.len());
    for post in blog_posts(&articles, config, &images, now) {
        let path = document_path(&config.paths.blog, &post.meta.slug);
        let outcome = write_if_absent(&path, &post.to_source()?)?;
        summary.record(outcome, &path);
    }

    summary.log();
    Ok(summary)
}

/// Build post documents for a batch of articles, in article order.
pub fn blog_posts(
    articles: &[Article],
    config: &SiteConfig,
    images: &PostImages,
    now: DateTime<Utc>,
) -> Vec<Document<BlogMeta>> {
    let import = &config.import;
    let reading_time = import.reading_time();
    let dates = spread_published_dates(articles.len(), now, import.spread_days, import.publish_hour);
    let mut slugs = SlugSet::with_max_len(import.slug_max_len);

    articles
        .iter()
        .zip(dates)
        .enumerate()
        .map(|(index, (article, published_at))| {
            let mut base = slugify(&article.title, Some(import.slug_max_len));
            if base.is_empty() {
                base = format!("post-{}", index + 1);
            }

            let card_image = images.cards.round_robin(index).map(str::to_owned);
            let hero_image = images.heroes.round_robin(index).map(str::to_owned);

            let body = if import.convert_html {
                html_to_markdown(&article.html)
            } else {
                format!("{}\n", article.html.trim())
            };

            let meta = BlogMeta {
                slug: slugs.claim(&base),
                title: article.title.clone(),
                description: first_sentence(&article.text, &article.title),
                published_at,
                updated_at: None,
                tags: import.blog_tags.clone(),
                reading_time_minutes: reading_time.for_text(&article.text),
                image: hero_image.clone().or_else(|| card_image.clone()),
                card_image,
                hero_image,
            };

            Document::new(meta, body)
        })
        .collect()
}
