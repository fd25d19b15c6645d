//! `import-projects`: one work project per `Overview` record of an exported
//! project list.

use super::{ImportError, Summary, document_path, read_input, write_if_absent};
use crate::{
    config::SiteConfig,
    content::{Document, WorkMeta},
    extract::{Project, extract_projects, parse_blocks},
    log,
};
use anyhow::{Result, bail};

pub fn import_projects(config: &SiteConfig) -> Result<Summary> {
    let source = &config.paths.projects_source;
    let html = read_input(source)?;

    let blocks = parse_blocks(&html);
    let projects = extract_projects(&blocks, &config.work.project_rules());
    if projects.is_empty() {
        bail!(ImportError::NoRecords(source.clone()));
    }
    log!("import"; "found {} projects in {}", projects.len(), source.display());

    let mut summary = Summary::new(projects.len());
    for project in &projects {
        let document = project_document(project);
        let path = document_path(&config.paths.work, &document.meta.slug);
        let outcome = write_if_absent(&path, &document.to_source()?)?;
        summary.record(outcome, &path);
    }

    summary.log();
    Ok(summary)
}

/// Work document for an extracted project. The image is left to the loader.
pub fn project_document(project: &Project) -> Document<WorkMeta> {
    let meta = WorkMeta {
        slug: project.slug.clone(),
        name: project.title.clone(),
        role: project.role.clone(),
        bullets: project.bullets(),
        skills: project.skills.clone(),
        image: None,
    };
    Document::new(meta, project.body())
}
