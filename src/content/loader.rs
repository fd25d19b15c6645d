//! Read side of the content directories.
//!
//! Nothing is cached: every call re-reads the directory, so pages always see
//! what is on disk.

use super::{BlogMeta, DOCUMENT_EXT, Document, DocumentError, Entry, FrontMatter, WorkMeta, render};
use crate::{
    config::SiteConfig,
    utils::meta::{ImagePool, public_file},
};
use rayon::prelude::*;
use std::{
    cmp::Ordering,
    fs,
    path::{Path, PathBuf},
};

/// A directory of documents sharing one metadata type and display order.
pub trait Collection: Sync {
    type Meta: FrontMatter + Send;

    fn dir(&self) -> &Path;

    /// Adjust metadata after parsing (e.g. fill in derived fields).
    fn finish(&self, meta: Self::Meta) -> Self::Meta {
        meta
    }

    /// Display order of two documents.
    fn compare(&self, a: &Self::Meta, b: &Self::Meta) -> Ordering;
}

// ============================================================================
// Collections
// ============================================================================

/// Blog posts, newest first.
#[derive(Debug, Clone)]
pub struct Blog {
    dir: PathBuf,
}

impl Blog {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn from_config(config: &SiteConfig) -> Self {
        Self::new(&config.paths.blog)
    }
}

impl Collection for Blog {
    type Meta = BlogMeta;

    fn dir(&self) -> &Path {
        &self.dir
    }

    fn compare(&self, a: &BlogMeta, b: &BlogMeta) -> Ordering {
        b.published_at.cmp(&a.published_at)
    }
}

/// Work projects, grouped by organization priority then sorted by name.
#[derive(Debug, Clone)]
pub struct Work {
    dir: PathBuf,
    public_dir: PathBuf,
    images: ImagePool,
    org_order: Vec<String>,
}

impl Work {
    /// `org_order` holds lowercase keywords, highest priority first.
    /// `images` is the pool used when a project has no usable image.
    pub fn new(
        dir: impl Into<PathBuf>,
        public_dir: impl Into<PathBuf>,
        images: ImagePool,
        org_order: Vec<String>,
    ) -> Self {
        Self {
            dir: dir.into(),
            public_dir: public_dir.into(),
            images,
            org_order: org_order.into_iter().map(|k| k.to_lowercase()).collect(),
        }
    }

    /// Work collection with the card image pool scanned from disk.
    pub fn from_config(config: &SiteConfig) -> Self {
        let images = ImagePool::scan(
            &config.paths.card_images,
            &config.paths.card_url,
            &config.import.image_extensions,
        );
        Self::new(
            &config.paths.work,
            &config.paths.public,
            images,
            config.work.org_order.clone(),
        )
    }

    /// Priority of a project: index of the first keyword found in its role
    /// or slug. Unmatched projects sort last.
    pub fn org_rank(&self, meta: &WorkMeta) -> usize {
        let role = meta.role.to_lowercase();
        let slug = meta.slug.to_lowercase();

        self.org_order
            .iter()
            .position(|keyword| role.contains(keyword.as_str()) || slug.contains(keyword.as_str()))
            .unwrap_or(self.org_order.len())
    }

    /// Keep an image that exists under the public directory, otherwise pick
    /// one from the pool by slug.
    pub fn resolve_image(&self, slug: &str, existing: Option<&str>) -> Option<String> {
        if let Some(url) = existing
            && public_file(&self.public_dir, url).is_file()
        {
            return Some(url.to_owned());
        }
        self.images.for_slug(slug).map(str::to_owned)
    }
}

impl Collection for Work {
    type Meta = WorkMeta;

    fn dir(&self) -> &Path {
        &self.dir
    }

    fn finish(&self, mut meta: WorkMeta) -> WorkMeta {
        meta.image = self.resolve_image(&meta.slug, meta.image.as_deref());
        meta
    }

    fn compare(&self, a: &WorkMeta, b: &WorkMeta) -> Ordering {
        self.org_rank(a)
            .cmp(&self.org_rank(b))
            .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
            .then_with(|| a.name.cmp(&b.name))
    }
}

// ============================================================================
// Loader
// ============================================================================

/// Loads documents of one collection as page-ready entries.
#[derive(Debug, Clone)]
pub struct ContentLoader<C> {
    collection: C,
}

impl<C: Collection> ContentLoader<C> {
    pub fn new(collection: C) -> Self {
        Self { collection }
    }

    /// Every document in display order. A missing directory is an empty
    /// collection; any malformed document fails the whole call.
    pub fn list_all(&self) -> Result<Vec<Entry<C::Meta>>, DocumentError> {
        let paths = document_paths(self.collection.dir())?;

        let mut entries = paths
            .par_iter()
            .map(|path| self.load(path))
            .collect::<Result<Vec<_>, _>>()?;

        entries.sort_by(|a, b| self.collection.compare(&a.meta, &b.meta));
        Ok(entries)
    }

    /// The document stored as `<slug>.mdx`, or `None` if there is none.
    pub fn get_by_slug(&self, slug: &str) -> Result<Option<Entry<C::Meta>>, DocumentError> {
        if !is_plain_slug(slug) {
            return Ok(None);
        }

        let path = self.collection.dir().join(format!("{slug}.{DOCUMENT_EXT}"));
        if !path.is_file() {
            return Ok(None);
        }

        self.load(&path).map(Some)
    }

    /// File stems of all documents, sorted.
    pub fn list_slugs(&self) -> Result<Vec<String>, DocumentError> {
        // Sort stems, not paths: `a-2.mdx` orders before `a.mdx`
        let mut slugs: Vec<String> = document_paths(self.collection.dir())?
            .iter()
            .filter_map(|path| path.file_stem()?.to_str().map(str::to_owned))
            .collect();
        slugs.sort();
        Ok(slugs)
    }

    fn load(&self, path: &Path) -> Result<Entry<C::Meta>, DocumentError> {
        let Document { meta, body } = Document::<C::Meta>::read(path)?;
        Ok(Entry {
            meta: self.collection.finish(meta),
            content_html: render::render_markdown(&body),
        })
    }
}

/// All `*.mdx` files directly inside `dir`, sorted by name.
pub fn document_paths(dir: &Path) -> Result<Vec<PathBuf>, DocumentError> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let entries = fs::read_dir(dir).map_err(|err| DocumentError::Io(dir.to_path_buf(), err))?;
    let mut paths: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == DOCUMENT_EXT))
        .collect();
    paths.sort();
    Ok(paths)
}

fn is_plain_slug(slug: &str) -> bool {
    !slug.is_empty() && !slug.contains(['/', '\\']) && !slug.contains("..")
}
