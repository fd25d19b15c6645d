//! Pattern-delimited projects.
//!
//! The project export is a flat list of `display:contents` wrappers, each
//! holding one heading, paragraph or rule. Projects are recognised by their
//! marker paragraphs:
//!
//! ```text
//! h1  LACED                        ← organization (all caps)
//! h3  Checkout Redesign            ← project title
//! p   Overview
//! p   ...overview text...
//! p   What I Delivered
//! p   ...delivered text...
//! p   Impact
//! p   ...impact text...
//! p   Skills used: CRO, Figma, SQL.
//! ```

use crate::html::{region, strip_tags};
use crate::utils::slug::{SlugSet, slugify};
use regex::Regex;
use std::{collections::HashMap, sync::LazyLock};

static PAGE_BODY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)<div class="page-body">(.*?)</div>\s*</article>"#).unwrap()
});
static WRAPPER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?s)<div style="display:contents"[^>]*>(.*?)</div>"#).unwrap());
static SKILLS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?is)Skills used\s*:\s*(.*)").unwrap());

const OVERVIEW: &str = "Overview";
const DELIVERED: &str = "What I Delivered";
const IMPACT: &str = "Impact";
const SKILLS_USED: &str = "Skills used";

/// One block of the flattened export, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading(String),
    Paragraph(String),
    Rule,
}

impl Block {
    fn heading_text(&self) -> Option<&str> {
        match self {
            Block::Heading(text) if !text.is_empty() => Some(text),
            _ => None,
        }
    }

    fn paragraph_text(&self) -> Option<&str> {
        match self {
            Block::Paragraph(text) if !text.is_empty() => Some(text),
            _ => None,
        }
    }
}

/// Settings that shape how projects are grouped and labelled.
#[derive(Debug, Clone)]
pub struct ProjectRules<'a> {
    /// All-caps heading text that is a page title, not an organization.
    pub sentinel: &'a str,
    /// Organization used before the first organization heading.
    pub fallback_org: &'a str,
    /// Organization name → role label.
    pub roles: &'a HashMap<String, String>,
}

/// One project parsed from the export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub slug: String,
    pub title: String,
    pub org: String,
    pub role: String,
    pub overview: String,
    pub delivered: String,
    pub impact: String,
    pub skills: Vec<String>,
}

impl Project {
    /// The non-empty summary texts, in display order.
    pub fn bullets(&self) -> Vec<String> {
        [&self.overview, &self.delivered, &self.impact]
            .into_iter()
            .filter(|text| !text.is_empty())
            .cloned()
            .collect()
    }

    /// Markdown body with one section per non-empty summary text.
    pub fn body(&self) -> String {
        let sections = [
            (OVERVIEW, &self.overview),
            (DELIVERED, &self.delivered),
            (IMPACT, &self.impact),
        ];

        let mut body = String::new();
        for (heading, text) in sections {
            if text.is_empty() {
                continue;
            }
            if !body.is_empty() {
                body.push('\n');
            }
            body.push_str(&format!("## {heading}\n\n{text}\n"));
        }
        body
    }
}

/// Flatten the export into heading/paragraph/rule blocks.
pub fn parse_blocks(document: &str) -> Vec<Block> {
    let body = region(document, &PAGE_BODY);

    WRAPPER
        .captures_iter(body)
        .filter_map(|caps| {
            let inner = caps[1].trim();
            if inner.starts_with("<h1") || inner.starts_with("<h3") {
                Some(Block::Heading(strip_tags(inner)))
            } else if inner.starts_with("<p") {
                Some(Block::Paragraph(strip_tags(inner)))
            } else if inner.starts_with("<hr") {
                Some(Block::Rule)
            } else {
                None
            }
        })
        .collect()
}

/// Whether a heading names an organization: all caps, with at least one letter.
pub fn is_org_heading(text: &str, sentinel: &str) -> bool {
    let trimmed = text.trim();
    !trimmed.is_empty()
        && trimmed.to_uppercase() == trimmed
        && trimmed.chars().any(|c| c.is_ascii_uppercase())
        && !trimmed.contains(sentinel)
}

/// Collect projects from parsed blocks.
///
/// A project starts at each `Overview` paragraph and is named by the heading
/// right before it; an `Overview` without such a heading is skipped. Marker
/// lookups stop at the next `Overview` so one project never borrows text from
/// the next.
pub fn extract_projects(blocks: &[Block], rules: &ProjectRules<'_>) -> Vec<Project> {
    let markers: Vec<usize> = blocks
        .iter()
        .enumerate()
        .filter(|(_, block)| starts_with(block, OVERVIEW))
        .map(|(i, _)| i)
        .collect();

    let mut projects = Vec::new();
    let mut slugs = SlugSet::new();
    let mut current_org: Option<&str> = None;
    let mut next_marker = 0;

    for (i, block) in blocks.iter().enumerate() {
        if let Some(text) = block.heading_text()
            && is_org_heading(text, rules.sentinel)
        {
            current_org = Some(text.trim());
            continue;
        }

        if !starts_with(block, OVERVIEW) {
            continue;
        }

        next_marker += 1;
        let end = markers.get(next_marker).copied().unwrap_or(blocks.len());

        let Some(title) = i
            .checked_sub(1)
            .and_then(|prev| blocks[prev].heading_text())
            .map(str::trim)
        else {
            continue;
        };

        let span = &blocks[i + 1..end];
        let overview = next_paragraph(span).unwrap_or_default();
        let delivered = after_marker(span, DELIVERED).unwrap_or_default();
        let impact = after_marker(span, IMPACT).unwrap_or_default();
        let skills = span
            .iter()
            .find(|block| starts_with(block, SKILLS_USED))
            .and_then(Block::paragraph_text)
            .map(parse_skills)
            .unwrap_or_default();

        let org = current_org.unwrap_or(rules.fallback_org).to_owned();
        let role = rules.roles.get(&org).cloned().unwrap_or_else(|| org.clone());

        let mut base = slugify(title, None);
        if base.is_empty() {
            base = slugify(&format!("{org}-{}", projects.len() + 1), None);
        }

        projects.push(Project {
            slug: slugs.claim(&base),
            title: title.to_owned(),
            org,
            role,
            overview,
            delivered,
            impact,
            skills,
        });
    }

    projects
}

/// Parse `Skills used: a, b, c.` into `["a", "b", "c"]`.
pub fn parse_skills(text: &str) -> Vec<String> {
    let Some(list) = SKILLS.captures(text.trim()).and_then(|caps| caps.get(1)) else {
        return Vec::new();
    };

    let list = list.as_str().trim();
    list.strip_suffix('.')
        .unwrap_or(list)
        .split(',')
        .map(str::trim)
        .filter(|skill| !skill.is_empty())
        .map(str::to_owned)
        .collect()
}

fn starts_with(block: &Block, prefix: &str) -> bool {
    block.paragraph_text().is_some_and(|text| text.trim().starts_with(prefix))
}

fn next_paragraph(blocks: &[Block]) -> Option<String> {
    blocks
        .iter()
        .find_map(Block::paragraph_text)
        .map(|text| text.trim().to_owned())
}

fn after_marker(blocks: &[Block], marker: &str) -> Option<String> {
    let index = blocks.iter().position(|block| starts_with(block, marker))?;
    next_paragraph(&blocks[index + 1..])
}
