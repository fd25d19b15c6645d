//! Command-line interface definitions.
//!
//! Defines all CLI arguments and subcommands using clap.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Folio content pipeline CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Project root; relative config paths resolve against it
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Config file name (default: folio.toml)
    #[arg(short = 'C', long, default_value = "folio.toml")]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Content collection selector
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionKind {
    Blog,
    Work,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Split an exported blog HTML document into blog posts
    ImportBlog {
        /// Exported HTML file (default: [paths.blog_source])
        #[arg(short, long)]
        source: Option<PathBuf>,
    },

    /// Parse an exported project list into work projects
    ImportProjects {
        /// Exported HTML file (default: [paths.projects_source])
        #[arg(short, long)]
        source: Option<PathBuf>,
    },

    /// Create one blog post per work project
    BlogFromWork,

    /// Convert blog bodies that still hold exported HTML to Markdown
    Normalize,

    /// Turn flattened lists in blog posts into bullet lists
    Enhance,

    /// List all documents of a collection
    List {
        collection: CollectionKind,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show one document with its rendered body
    Show {
        collection: CollectionKind,

        slug: String,

        /// Print JSON instead of HTML
        #[arg(long)]
        json: bool,
    },

    /// Print the slugs of a collection
    Slugs { collection: CollectionKind },

    /// Write sitemap.xml into the public directory
    Sitemap {
        /// Override [base.url] for this run
        #[arg(long = "base-url")]
        base_url: Option<String>,
    },
}

impl Cli {
    pub const fn is_sitemap(&self) -> bool {
        matches!(self.command, Commands::Sitemap { .. })
    }
}
