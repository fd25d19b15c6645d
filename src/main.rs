//! Folio - content ingestion pipeline for a portfolio and blog site.

mod cli;
mod config;
mod content;
mod enhance;
mod extract;
mod generator;
mod html;
mod ingest;
mod query;
mod utils;

use anyhow::Result;
use chrono::Utc;
use clap::Parser;
use cli::{Cli, Commands};
use config::SiteConfig;
use generator::sitemap::build_sitemap;
use ingest::{
    blog::import_blog,
    from_work::blog_from_work,
    projects::import_projects,
    rewrite::{Pass, rewrite_blog},
};
use std::path::Path;

fn main() -> Result<()> {
    let cli: &'static Cli = Box::leak(Box::new(Cli::parse()));
    let config: &'static SiteConfig = Box::leak(Box::new(load_config(cli)?));
    let now = Utc::now();

    match &cli.command {
        Commands::ImportBlog { .. } => import_blog(config, now).map(|_| ()),
        Commands::ImportProjects { .. } => import_projects(config).map(|_| ()),
        Commands::BlogFromWork => blog_from_work(config, now).map(|_| ()),
        Commands::Normalize => rewrite_blog(config, Pass::Normalize).map(|_| ()),
        Commands::Enhance => rewrite_blog(config, Pass::Enhance).map(|_| ()),
        Commands::List { collection, json } => query::list(config, *collection, *json),
        Commands::Show {
            collection,
            slug,
            json,
        } => query::show(config, *collection, slug, *json),
        Commands::Slugs { collection } => query::slugs(config, *collection),
        Commands::Sitemap { .. } => build_sitemap(config, now).map(|_| ()),
    }
}

/// Load and validate configuration from CLI arguments.
///
/// A missing config file is not an error; defaults apply.
fn load_config(cli: &'static Cli) -> Result<SiteConfig> {
    let root = cli.root.as_deref().unwrap_or(Path::new("./"));
    let config_path = root.join(&cli.config);

    let mut config = if config_path.exists() {
        SiteConfig::from_path(&config_path)?
    } else {
        SiteConfig::default()
    };
    config.update_with_cli(cli);
    config.validate()?;

    Ok(config)
}
