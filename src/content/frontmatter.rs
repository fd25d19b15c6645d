//! Front matter parsing and serialization.
//!
//! A document is a YAML mapping between `---` lines, a blank line, then the
//! body:
//!
//! ```text
//! ---
//! slug: hello
//! title: Hello
//! ---
//!
//! Body in **Markdown**.
//! ```

use serde::{Serialize, de::DeserializeOwned};
use std::{
    fs, io,
    path::{Path, PathBuf},
};
use thiserror::Error;

const DELIMITER: &str = "---";

/// Errors raised at the document parse/serialize boundary.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("malformed document `{path}`: {reason}")]
    Malformed { path: String, reason: String },

    #[error("failed to serialize front matter")]
    Serialize(#[from] serde_yaml::Error),

    #[error("failed to read `{0}`")]
    Io(PathBuf, #[source] io::Error),
}

impl DocumentError {
    pub fn malformed(path: &Path, reason: impl Into<String>) -> Self {
        Self::Malformed {
            path: path.display().to_string(),
            reason: reason.into(),
        }
    }
}

/// A document split into its raw front matter and body, without interpreting
/// either.
///
/// Rewrite passes use this to replace the body while keeping the front
/// matter byte-for-byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawDocument<'a> {
    /// YAML text between the delimiters, including its trailing newline.
    pub front_matter: &'a str,
    /// Everything after the closing delimiter, leading blank lines removed.
    pub body: &'a str,
}

impl<'a> RawDocument<'a> {
    /// Split `source` at its front matter delimiters.
    ///
    /// Returns `None` if the document does not open with `---` or the block
    /// is never closed.
    pub fn split(source: &'a str) -> Option<Self> {
        let rest = source.strip_prefix(DELIMITER)?;
        let rest = rest.strip_prefix("\r\n").or_else(|| rest.strip_prefix('\n'))?;

        let mut offset = 0;
        for line in rest.split_inclusive('\n') {
            if line.trim_end() == DELIMITER {
                let front_matter = &rest[..offset];
                let body = rest[offset + line.len()..].trim_start_matches(['\r', '\n']);
                return Some(Self { front_matter, body });
            }
            offset += line.len();
        }

        None
    }

    /// Reassemble with a new body.
    pub fn with_body(&self, body: &str) -> String {
        assemble(self.front_matter, body)
    }

    /// Look up a top-level string list (e.g. `tags`) without a full schema.
    pub fn string_list(&self, key: &str) -> Vec<String> {
        serde_yaml::from_str::<serde_yaml::Value>(self.front_matter)
            .ok()
            .and_then(|value| value.get(key).and_then(|v| v.as_sequence()).cloned())
            .map(|seq| {
                seq.iter()
                    .filter_map(|item| item.as_str().map(str::to_owned))
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// A parsed document: typed metadata plus Markdown body.
#[derive(Debug, Clone, PartialEq)]
pub struct Document<M> {
    pub meta: M,
    pub body: String,
}

/// Metadata types that can live in a front matter block.
pub trait FrontMatter: Serialize + DeserializeOwned {
    fn slug(&self) -> &str;

    /// Schema checks beyond what deserialization enforces.
    fn validate(&self) -> Result<(), String> {
        if self.slug().trim().is_empty() {
            return Err("`slug` must not be empty".into());
        }
        Ok(())
    }
}

impl<M: FrontMatter> Document<M> {
    pub fn new(meta: M, body: impl Into<String>) -> Self {
        Self {
            meta,
            body: body.into(),
        }
    }

    /// Parse and schema-check a document read from `path`.
    pub fn parse(source: &str, path: &Path) -> Result<Self, DocumentError> {
        let raw = RawDocument::split(source)
            .ok_or_else(|| DocumentError::malformed(path, "missing front matter block"))?;

        let meta: M = serde_yaml::from_str(raw.front_matter)
            .map_err(|err| DocumentError::malformed(path, err.to_string()))?;
        meta.validate()
            .map_err(|reason| DocumentError::malformed(path, reason))?;

        Ok(Self::new(meta, raw.body))
    }

    /// Read and parse the document at `path`.
    pub fn read(path: &Path) -> Result<Self, DocumentError> {
        let source = fs::read_to_string(path).map_err(|err| DocumentError::Io(path.to_path_buf(), err))?;
        Self::parse(&source, path)
    }

    /// Serialize to the on-disk representation.
    pub fn to_source(&self) -> Result<String, DocumentError> {
        let yaml = serde_yaml::to_string(&self.meta)?;
        Ok(assemble(&yaml, &self.body))
    }
}

fn assemble(front_matter: &str, body: &str) -> String {
    let mut out = String::with_capacity(front_matter.len() + body.len() + 16);
    out.push_str(DELIMITER);
    out.push('\n');
    out.push_str(front_matter);
    if !front_matter.is_empty() && !front_matter.ends_with('\n') {
        out.push('\n');
    }
    out.push_str(DELIMITER);
    out.push_str("\n\n");
    out.push_str(body);
    out
}
