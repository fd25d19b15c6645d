//! Project configuration management for `folio.toml`.
//!
//! # Sections
//!
//! | Section     | Purpose                                          |
//! |-------------|--------------------------------------------------|
//! | `[base]`    | Public site URL and static routes (sitemap)      |
//! | `[paths]`   | Content, public, image pool and export locations |
//! | `[import]`  | Ingestion thresholds, dates, tags                |
//! | `[work]`    | Organization grouping and ordering of projects   |
//!
//! The file is optional; every field has a default.
//!
//! # Example
//!
//! ```toml
//! [base]
//! url = "https://example.com"
//!
//! [paths]
//! blog_source = "exports/blog.html"
//!
//! [import]
//! spread_days = 365
//!
//! [work]
//! org_order = ["dansu", "laced"]
//!
//! [work.roles]
//! LACED = "Product & Growth, Laced"
//! ```

mod base;
pub mod defaults;
mod error;
mod import;
mod paths;
mod work;

pub use error::ConfigError;

use base::BaseConfig;
use import::ImportConfig;
use paths::PathsConfig;
use work::WorkConfig;

use crate::cli::{Cli, Commands};
use anyhow::{Result, bail};
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration structure representing folio.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// CLI arguments reference
    #[serde(skip)]
    pub cli: Option<&'static Cli>,

    /// Absolute path to the config file (set after loading)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Public site information
    #[serde(default)]
    pub base: BaseConfig,

    /// File and URL locations
    #[serde(default)]
    pub paths: PathsConfig,

    /// Ingestion settings
    #[serde(default)]
    pub import: ImportConfig,

    /// Work project grouping and ordering
    #[serde(default)]
    pub work: WorkConfig,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(content).map_err(ConfigError::from)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        self.paths.root.as_deref().unwrap_or(Path::new("./"))
    }

    /// Set the root directory path
    pub fn set_root(&mut self, path: &Path) {
        self.paths.root = Some(path.to_path_buf())
    }

    /// Update configuration with CLI arguments
    pub fn update_with_cli(&mut self, cli: &'static Cli) {
        self.cli = Some(cli);

        let root = cli
            .root
            .as_ref()
            .cloned()
            .unwrap_or_else(|| self.get_root().to_owned());

        match &cli.command {
            Commands::ImportBlog { source } => {
                Self::update_option(&mut self.paths.blog_source, source.as_ref());
            }
            Commands::ImportProjects { source } => {
                Self::update_option(&mut self.paths.projects_source, source.as_ref());
            }
            Commands::Sitemap { base_url } => {
                if let Some(url) = base_url {
                    self.base.url = Some(url.clone());
                }
            }
            _ => {}
        }

        self.update_path_with_root(&root, &cli.config);
    }

    /// Update config option if CLI value is provided
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Update all paths relative to root directory and normalize to absolute paths
    fn update_path_with_root(&mut self, root: &Path, config_file: &Path) {
        let root = Self::normalize_path(root);
        self.set_root(&root);

        self.config_path = Self::normalize_path(&root.join(config_file));

        let paths = &mut self.paths;
        for path in [
            &mut paths.blog,
            &mut paths.work,
            &mut paths.public,
            &mut paths.card_images,
            &mut paths.hero_images,
            &mut paths.blog_source,
            &mut paths.projects_source,
        ] {
            *path = Self::normalize_path(&root.join(&*path));
        }
    }

    /// Normalize a path to absolute, using canonicalize if the path exists
    fn normalize_path(path: &Path) -> PathBuf {
        path.canonicalize().unwrap_or_else(|_| {
            // For non-existent paths, manually make them absolute
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                std::env::current_dir()
                    .map(|cwd| cwd.join(path))
                    .unwrap_or_else(|_| path.to_path_buf())
            }
        })
    }

    /// Absolute path of the generated sitemap.
    pub fn sitemap_path(&self) -> PathBuf {
        self.paths.public.join(&self.paths.sitemap)
    }

    /// Validate configuration for the current command
    pub fn validate(&self) -> Result<()> {
        if self.import.publish_hour > 23 {
            bail!(ConfigError::Validation(
                "[import.publish_hour] must be between 0 and 23".into()
            ));
        }

        if self.import.words_per_minute == 0 {
            bail!(ConfigError::Validation(
                "[import.words_per_minute] must be greater than 0".into()
            ));
        }

        if self.import.image_extensions.is_empty() {
            bail!(ConfigError::Validation(
                "[import.image_extensions] must have at least one element".into()
            ));
        }

        if let Some(base_url) = &self.base.url
            && !base_url.starts_with("http")
        {
            bail!(ConfigError::Validation(
                "[base.url] must start with http:// or https://".into()
            ));
        }

        if self.cli.is_some_and(Cli::is_sitemap) && self.base.url.is_none() {
            bail!("[base.url] is required for sitemap generation");
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
