//! Ingestion commands: turn exports into content documents and touch up
//! existing ones.
//!
//! | Command           | Reads                      | Writes              |
//! |-------------------|----------------------------|---------------------|
//! | `import-blog`     | exported blog HTML         | `content/blog/*.mdx`|
//! | `import-projects` | exported project list HTML | `content/work/*.mdx`|
//! | `blog-from-work`  | `content/work/*.mdx`       | `content/blog/*.mdx`|
//! | `normalize`       | `content/blog/*.mdx`       | same files, body    |
//! | `enhance`         | `content/blog/*.mdx`       | same files, body    |
//!
//! Creating commands never overwrite: a document whose target already exists
//! is reported and skipped.

pub mod blog;
pub mod from_work;
pub mod projects;
pub mod rewrite;

use crate::log;
use anyhow::{Context, Result, bail};
use std::{
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Fatal ingestion errors.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("input file not found: `{0}`")]
    MissingInput(PathBuf),

    #[error("no records found in `{0}`")]
    NoRecords(PathBuf),
}

/// Result of a create-if-absent write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Created,
    Skipped,
}

/// Write `content` to `path` unless something is already there.
///
/// The existence check and the write are separate steps; two concurrent runs
/// can both write.
pub fn write_if_absent(path: &Path, content: &str) -> Result<WriteOutcome> {
    if path.exists() {
        return Ok(WriteOutcome::Skipped);
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(WriteOutcome::Created)
}

/// Read an export file, failing with [`ImportError::MissingInput`] when absent.
pub fn read_input(path: &Path) -> Result<String> {
    if !path.is_file() {
        bail!(ImportError::MissingInput(path.to_path_buf()));
    }
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

/// Counters reported at the end of a run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub parsed: usize,
    pub written: usize,
    pub skipped: usize,
}

impl Summary {
    pub fn new(parsed: usize) -> Self {
        Self {
            parsed,
            ..Self::default()
        }
    }

    /// Count one outcome and log a progress line for it.
    pub fn record(&mut self, outcome: WriteOutcome, path: &Path) {
        match outcome {
            WriteOutcome::Created => {
                self.written += 1;
                log!("write"; "{}", path.display());
            }
            WriteOutcome::Skipped => {
                self.skipped += 1;
                log!("skip"; "{} already exists", path.display());
            }
        }
    }

    pub fn log(&self) {
        log!(
            "done";
            "parsed {}, wrote {}, skipped {}",
            self.parsed,
            self.written,
            self.skipped
        );
    }
}

/// Target path of a document in a collection directory.
pub fn document_path(dir: &Path, slug: &str) -> PathBuf {
    dir.join(format!("{slug}.{}", crate::content::DOCUMENT_EXT))
}
