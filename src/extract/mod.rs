//! Record extraction from exported HTML documents.
//!
//! | Export shape                       | Extractor                     |
//! |------------------------------------|-------------------------------|
//! | repeated `<h1>` sections           | [`article::extract_articles`] |
//! | `display:contents` block wrappers  | [`project::extract_projects`] |

pub mod article;
pub mod project;

pub use article::{Article, extract_articles};
pub use project::{Project, ProjectRules, extract_projects, parse_blocks};
