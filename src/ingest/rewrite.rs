//! In-place body rewrites of existing blog posts.
//!
//! Only the body changes; the front matter text is written back exactly as
//! it was read, comments and key order included.

use crate::{
    config::SiteConfig,
    content::{DocumentError, RawDocument, loader::document_paths},
    enhance::enhance_lists,
    html::markdown::html_to_markdown,
    log,
};
use anyhow::{Context, Result};
use regex::Regex;
use std::{fs, path::Path, sync::LazyLock};

static H2_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<h2[^>]*>").unwrap());

/// A body rewrite applied to every matching blog post.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pass {
    /// Convert bodies that still contain exported HTML to Markdown.
    Normalize,
    /// Promote flattened lists to bullets in posts tagged `blog`.
    Enhance,
}

impl Pass {
    fn name(self) -> &'static str {
        match self {
            Pass::Normalize => "normalize",
            Pass::Enhance => "enhance",
        }
    }

    fn applies_to(self, raw: &RawDocument<'_>) -> bool {
        match self {
            Pass::Normalize => raw.body.contains("display:contents") || H2_TAG.is_match(raw.body),
            Pass::Enhance => raw.string_list("tags").iter().any(|tag| tag == "blog"),
        }
    }

    fn apply(self, body: &str) -> String {
        match self {
            Pass::Normalize => html_to_markdown(body),
            Pass::Enhance => format!("{}\n", enhance_lists(body).trim()),
        }
    }
}

/// Rewrite every blog post the pass applies to. Returns the number of
/// files written.
pub fn rewrite_blog(config: &SiteConfig, pass: Pass) -> Result<usize> {
    let files = document_paths(&config.paths.blog)?;

    let mut rewritten = 0;
    for file in &files {
        if rewrite_file(file, pass)? {
            rewritten += 1;
            log!(pass.name(); "{}", file.display());
        }
    }

    log!("done"; "{} of {} posts rewritten", rewritten, files.len());
    Ok(rewritten)
}

/// Apply `pass` to one file. Returns whether the file was written.
fn rewrite_file(path: &Path, pass: Pass) -> Result<bool> {
    let source =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let raw = RawDocument::split(&source)
        .ok_or_else(|| DocumentError::malformed(path, "missing front matter block"))?;

    if !pass.applies_to(&raw) {
        return Ok(false);
    }

    let updated = raw.with_body(&pass.apply(raw.body));
    fs::write(path, updated).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(true)
}
